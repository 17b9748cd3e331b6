//! Main application orchestrator.
//!
//! Coordinates a single run:
//! 1. Initializes logging unless quiet.
//! 2. Loads the graph (reference table or a JSON edge table).
//! 3. Dispatches the subcommand to `processing` through a `RouteEngine`.
//! 4. Prints the resulting lines to stdout and flushes the log.

use super::cli::{Cli, Command};
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::processing;
use super::{verbose_eprintln, verbose_println};
use crate::route::{RouteEngine, RouteQuery};

/// Runs the main application logic based on parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` for malformed input such as an unreadable graph file or
/// an unknown town. A missing edge in `route-distance` is reported on stdout
/// and is not an error.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(&cli.log_file) {
            // Verbose file logging is unavailable but the query still runs.
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                cli.log_file.display(),
                e
            );
        } else {
            verbose_println!(
                quiet_mode,
                "Verbose logging initialized to {}",
                cli.log_file.display()
            );
        }
    }

    let result = run_command(&cli);
    if let Err(e) = &result {
        verbose_eprintln!(quiet_mode, "{}", e);
    }

    if !quiet_mode {
        if let Err(e) = logger::flush_global_logger() {
            eprintln!(
                "[WARNING] Failed to perform final flush of {}: {}",
                cli.log_file.display(),
                e
            );
        }
    }

    for line in result? {
        println!("{}", line);
    }
    Ok(())
}

fn run_command(cli: &Cli) -> Result<Vec<String>, AppError> {
    let quiet_mode = cli.quiet;
    let town_graph = file_handler::load_graph(cli.graph.as_deref(), quiet_mode)?;
    let engine = RouteEngine::new(&town_graph);

    match &cli.command {
        Command::RouteDistance { towns } => {
            processing::process_route_distance(&engine, towns, quiet_mode)
        }
        Command::Routes {
            start,
            end,
            max_stops,
            min_stops,
            budget,
            count,
        } => {
            let mut query = RouteQuery::new(*max_stops, *min_stops);
            if let Some(budget) = budget {
                query = query.with_budget(*budget);
            }
            processing::process_routes(&engine, start, end, &query, *count, quiet_mode)
        }
        Command::Connections { town } => {
            processing::process_connections(&engine, town, quiet_mode)
        }
    }
}
