use clap::Parser;
use clap::error::ErrorKind;
use std::io;
use std::path::Path;
use todo_cli::cli::{Cli, Operation};
use todo_cli::input::read_task_input;
use todo_core::error::AppError;
use todo_core::render::{self, ListOptions};
use todo_core::storage::json_store;
use todo_core::task_api;

fn normalize_parse_error(err: clap::Error) -> AppError {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or("invalid command").trim();
    let message = first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string();
    AppError::invalid_input(message)
}

fn print_listing(path: &Path, options: ListOptions) -> Result<(), AppError> {
    let list = task_api::list_tasks(path)?;
    print!("{}", render::format_tasks(&list, options)?);
    Ok(())
}

fn run(cli: Cli) -> Result<(), AppError> {
    let path = json_store::resolve_store_path(cli.file.as_deref());

    match cli.operation() {
        Operation::Add => {
            let stdin = io::stdin();
            let description = read_task_input(stdin.lock(), &cli.description)?;
            task_api::add_task(&path, &description)?;
        }
        Operation::Complete(position) => {
            task_api::complete_task(&path, position)?;
        }
        Operation::Delete(position) => {
            task_api::delete_task(&path, position)?;
        }
        Operation::List => print_listing(&path, ListOptions::default())?,
        Operation::Verbose => print_listing(
            &path,
            ListOptions {
                verbose: true,
                ..Default::default()
            },
        )?,
        Operation::Active => print_listing(
            &path,
            ListOptions {
                active_only: true,
                ..Default::default()
            },
        )?,
    }

    Ok(())
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return;
        }
        Err(err) => {
            eprintln!("ERROR: {}", normalize_parse_error(err));
            std::process::exit(1);
        }
    };

    if let Err(err) = run(cli) {
        eprintln!("ERROR: {err}");
        std::process::exit(1);
    }
}
