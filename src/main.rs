use clap::{CommandFactory, Parser};
use colored::Colorize;
use eyre::{Context, Result};
use std::io::IsTerminal;
use taskorg::cli::{Cli, Command};
use taskorg::{Config, Storage, Store, TaskFilter, UpdateOutcome, table};

fn setup_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    // WARN only when RUST_LOG is unset; -v raises everything to DEBUG
    let mut filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .from_env_lossy();
    if verbose {
        filter = filter.add_directive(tracing::Level::DEBUG.into());
    }

    // stdout carries command output, so logs go to stderr
    let ansi = std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_env_filter(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = Config::load(cli.config.as_ref())
        .context("Failed to load configuration")?
        .with_tasks_file(cli.file);
    tracing::debug!(tasks_file = ?config.tasks_file, "Using tasks file");

    let store = Store::open(&config.tasks_file);
    let mut tasks = store.load()?;

    match command {
        Command::Add {
            title,
            category,
            due_date,
        } => {
            taskorg::add_task(&store, &mut tasks, &title, &category, &due_date)?;
            println!("{}", "Task added successfully!".green());
        }
        Command::List {
            category,
            show_completed,
        } => {
            let filter = TaskFilter::new(category, show_completed);
            let shown = taskorg::list_tasks(&tasks, &filter);
            print!("{}", table::render_tasks(&shown));
        }
        Command::Update { title, status } => {
            match taskorg::update_task_status(&store, &mut tasks, &title, status)? {
                UpdateOutcome::Updated(_) => {
                    println!("{}", format!("Task '{}' updated to {}!", title, status).green());
                }
                UpdateOutcome::NotFound => {
                    println!("{}", format!("Task '{}' not found!", title).yellow());
                }
            }
        }
        Command::Export { filename } => {
            taskorg::export_tasks(&tasks, &filename)?;
            println!(
                "{}",
                format!("Tasks exported to {} successfully!", filename.display()).green()
            );
        }
    }

    Ok(())
}

