use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::route::DEFAULT_MAX_STOPS;

#[derive(Parser, Debug)]
#[command(author, version, about = "Computes distances and enumerates routes between towns.", long_about = None)]
pub struct Cli {
    /// JSON edge table to load instead of the built-in reference graph
    #[arg(short, long, global = true)]
    pub graph: Option<PathBuf>,

    /// Suppress verbose logging to the log file.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Where verbose output is written unless --quiet is given
    #[arg(long, global = true, default_value = "routes.log")]
    pub log_file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get distance of a route
    RouteDistance {
        /// Towns to visit
        #[arg(required = true)]
        towns: Vec<String>,
    },
    /// List all routes between two towns within a number of stops
    Routes {
        start: String,
        end: String,
        /// Largest number of stops a route may have
        #[arg(long, default_value_t = DEFAULT_MAX_STOPS)]
        max_stops: usize,
        /// Smallest number of stops a route may have
        #[arg(long, default_value_t = 1)]
        min_stops: usize,
        /// Give up after exploring this many partial routes
        #[arg(long)]
        budget: Option<usize>,
        /// Only print how many routes were found
        #[arg(long)]
        count: bool,
    },
    /// Show the direct connections out of a town
    Connections { town: String },
}
