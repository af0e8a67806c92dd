// Grid-style table rendering for `list`

use crate::models::Task;
use unicode_width::UnicodeWidthStr;

/// Render tasks as a grid table with one column per task field
///
/// An empty slice still renders the header row.
pub fn render_tasks(tasks: &[&Task]) -> String {
    let rows: Vec<[&str; 4]> = tasks.iter().map(|t| t.values()).collect();
    render_grid(&Task::FIELDS, &rows)
}

/// Render `rows` under `headers`:
///
/// ```text
/// +---------+------------+
/// | title   | category   |
/// +=========+============+
/// | a       | Work       |
/// +---------+------------+
/// ```
pub fn render_grid<const N: usize>(headers: &[&str; N], rows: &[[&str; N]]) -> String {
    // Headers get two extra columns of slack
    let mut widths: [usize; N] = std::array::from_fn(|i| cell_width(headers[i]) + 2);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell_width(cell));
        }
    }

    let mut out = String::new();
    out.push_str(&rule(&widths, '-'));
    out.push_str(&line(&widths, headers));
    out.push_str(&rule(&widths, '='));
    for row in rows {
        out.push_str(&line(&widths, row));
        out.push_str(&rule(&widths, '-'));
    }
    out
}

/// Terminal columns taken by the widest line of a cell
fn cell_width(cell: &str) -> usize {
    cell.lines().map(UnicodeWidthStr::width).max().unwrap_or(0)
}

fn rule(widths: &[usize], fill: char) -> String {
    let mut s = String::from("+");
    for width in widths {
        s.extend(std::iter::repeat_n(fill, width + 2));
        s.push('+');
    }
    s.push('\n');
    s
}

/// One table row; multi-line cells stretch the row downward
fn line(widths: &[usize], cells: &[&str]) -> String {
    let split: Vec<Vec<&str>> = cells.iter().map(|cell| cell.lines().collect()).collect();
    let height = split.iter().map(Vec::len).max().unwrap_or(0).max(1);

    let mut s = String::new();
    for i in 0..height {
        s.push('|');
        for (width, cell_lines) in widths.iter().zip(&split) {
            let text = cell_lines.get(i).copied().unwrap_or("");
            let pad = width - UnicodeWidthStr::width(text);
            s.push(' ');
            s.push_str(text);
            s.extend(std::iter::repeat_n(' ', pad + 1));
            s.push('|');
        }
        s.push('\n');
    }
    s
}
