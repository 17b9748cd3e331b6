use serde::Deserialize;
use std::fs;

use super::error::GraphLoaderError;
use super::town_graph::{Distance, TownGraph};

//─────────────────────────────────────────────────────────────────────────────

/// On-disk edge table: `{"edges": [{"from": "A", "to": "B", "distance": 5}]}`.
#[derive(Deserialize, Debug)]
struct EdgeTable {
    edges: Vec<EdgeRecord>,
}

#[derive(Deserialize, Debug)]
struct EdgeRecord {
    from: String,
    to: String,
    distance: Distance,
}

/// Loads a graph from a JSON edge table on disk.
pub fn load_graph_from_file(file_path: &str) -> Result<TownGraph, GraphLoaderError> {
    let file_content =
        fs::read_to_string(file_path).map_err(|e| GraphLoaderError::ReadFile(file_path.into(), e))?;

    parse_graph(file_path, &file_content)
}

/// Parses a JSON edge table. `source` only labels errors.
pub fn parse_graph(source: &str, content: &str) -> Result<TownGraph, GraphLoaderError> {
    let table: EdgeTable =
        serde_json::from_str(content).map_err(|e| GraphLoaderError::Parse(source.into(), e))?;

    TownGraph::from_edges(
        table
            .edges
            .into_iter()
            .map(|edge| (edge.from, edge.to, edge.distance)),
    )
    .map_err(|e| GraphLoaderError::InvalidGraph(source.into(), e))
}
