// ──────────────────────────────────────────────────────────────────────────────
// TownGraph – a directed, weighted, possibly cyclic graph of named towns.
// Implemented as an ordered map from each town to its outgoing edges.
// Every town that appears anywhere in the edge table owns an entry, so a
// destination-only town maps to an empty adjacency rather than being absent.
// The graph is built once and never mutated by queries.
// ──────────────────────────────────────────────────────────────────────────────
use std::collections::BTreeMap;

use super::error::GraphError;

/// Distance carried by a single edge.
pub type Distance = u32;

/// Edge table of the reference dataset: (from, to, distance).
pub const REFERENCE_EDGES: &[(&str, &str, Distance)] = &[
    ("A", "B", 5),
    ("A", "D", 5),
    ("A", "E", 7),
    ("B", "C", 4),
    ("C", "D", 8),
    ("C", "E", 2),
    ("D", "C", 8),
    ("D", "E", 6),
    ("E", "B", 3),
];

/// Immutable directed graph of towns and the distances between them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TownGraph {
    adjacency: BTreeMap<String, BTreeMap<String, Distance>>,
}

impl TownGraph {
    /// Builds a graph from `(from, to, distance)` triples.
    ///
    /// # Errors
    /// Returns `GraphError::EmptyNodeName` for an empty town name and
    /// `GraphError::InvalidDistance` for a zero distance. A repeated edge keeps
    /// the last distance given.
    pub fn from_edges<I, S>(edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (S, S, Distance)>,
        S: Into<String>,
    {
        let mut graph = Self::default();
        for (from, to, distance) in edges {
            let (from, to) = (from.into(), to.into());
            if from.is_empty() || to.is_empty() {
                return Err(GraphError::EmptyNodeName);
            }
            if distance == 0 {
                return Err(GraphError::InvalidDistance { from, to });
            }
            graph.insert_edge(from, to, distance);
        }
        Ok(graph)
    }

    /// Returns the built-in reference graph (towns `A` to `E`).
    pub fn reference() -> Self {
        let mut graph = Self::default();
        for &(from, to, distance) in REFERENCE_EDGES {
            graph.insert_edge(from.to_string(), to.to_string(), distance);
        }
        graph
    }

    fn insert_edge(&mut self, from: String, to: String, distance: Distance) {
        self.adjacency.entry(to.clone()).or_default();
        self.adjacency.entry(from).or_default().insert(to, distance);
    }

    /// Returns `true` if the town appears anywhere in the edge table.
    pub fn contains(&self, town: &str) -> bool {
        self.adjacency.contains_key(town)
    }

    /// Returns every known town in lexicographic order.
    pub fn towns(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Returns the number of directed edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }

    fn outgoing(&self, town: &str) -> Result<&BTreeMap<String, Distance>, GraphError> {
        self.adjacency
            .get(town)
            .ok_or_else(|| GraphError::UnknownNode(town.to_string()))
    }

    /// Checks if an edge exists from `town_a` to `town_b`.
    pub fn has_connection(&self, town_a: &str, town_b: &str) -> Result<bool, GraphError> {
        let outgoing = self.outgoing(town_a)?;
        if !self.contains(town_b) {
            return Err(GraphError::UnknownNode(town_b.to_string()));
        }
        Ok(outgoing.contains_key(town_b))
    }

    /// Returns all towns reachable from `town` in one hop, ordered by name.
    /// A known town without outgoing edges yields an empty list.
    pub fn available_connections(&self, town: &str) -> Result<Vec<&str>, GraphError> {
        Ok(self.outgoing(town)?.keys().map(String::as_str).collect())
    }

    /// Returns the distance of the directed edge `town_a -> town_b`.
    ///
    /// The distance is directional: the reverse edge may differ or be missing.
    ///
    /// # Errors
    /// `GraphError::UnknownNode` if either town is unknown, otherwise
    /// `GraphError::NoSuchRoute` if the edge does not exist.
    pub fn edge_distance(&self, town_a: &str, town_b: &str) -> Result<Distance, GraphError> {
        if !self.has_connection(town_a, town_b)? {
            return Err(GraphError::NoSuchRoute {
                from: town_a.to_string(),
                to: town_b.to_string(),
            });
        }
        Ok(self.adjacency[town_a][town_b])
    }
}
