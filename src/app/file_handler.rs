//! Locates and loads the graph dataset used for a run.
//!
//! Without a `--graph` argument the built-in reference graph is used.

use std::path::Path;

use super::error::AppError;
use super::{verbose_eprintln, verbose_println};
use crate::graph::{self, TownGraph};

/// Validates that `graph_file_path` points to an existing file and returns it as a `&str`.
///
/// # Errors
/// Returns `AppError::InvalidPath` if the path is missing, not a file, or not valid UTF-8.
pub fn validate_graph_file<'p>(graph_file_path: &'p Path, quiet_mode: bool) -> Result<&'p str, AppError> {
    if !graph_file_path.exists() {
        let error_msg = format!("File not found: {}", graph_file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    if !graph_file_path.is_file() {
        let error_msg = format!("Path is not a file: {}", graph_file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::InvalidPath(error_msg));
    }
    graph_file_path
        .to_str()
        .ok_or_else(|| AppError::InvalidPath(graph_file_path.display().to_string()))
}

/// Loads the graph from `graph_file_path`, or the reference graph when no path is given.
pub fn load_graph(graph_file_path: Option<&Path>, quiet_mode: bool) -> Result<TownGraph, AppError> {
    let town_graph = match graph_file_path {
        Some(path) => {
            let path_str = validate_graph_file(path, quiet_mode)?;
            verbose_println!(quiet_mode, "Loading graph from {}", path_str);
            graph::load_graph_from_file(path_str)?
        }
        None => {
            verbose_println!(quiet_mode, "Using built-in reference graph");
            TownGraph::reference()
        }
    };
    verbose_println!(
        quiet_mode,
        "   => {} towns, {} edges",
        town_graph.towns().count(),
        town_graph.edge_count()
    );
    Ok(town_graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_reference_graph() {
        let graph = load_graph(None, true).unwrap();
        assert_eq!(graph, TownGraph::reference());
    }

    #[test]
    fn rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_graph(Some(dir.path()), true).unwrap_err();
        assert!(matches!(err, AppError::InvalidPath(_)));
    }

    #[test]
    fn rejects_missing_file() {
        let err = load_graph(Some(Path::new("/no/such/graph.json")), true).unwrap_err();
        assert!(matches!(err, AppError::InvalidPath(_)));
    }
}
