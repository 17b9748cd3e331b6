use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for graph and route queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The directed edge `from -> to` is not part of the graph.
    #[error("NO SUCH ROUTE")]
    NoSuchRoute { from: String, to: String },

    /// The identifier never appears in the edge table, as source or destination.
    #[error("Unknown town '{0}'")]
    UnknownNode(String),

    /// An edge was declared with a distance of zero.
    #[error("Edge {from} -> {to} must have a positive distance")]
    InvalidDistance { from: String, to: String },

    /// An edge was declared with an empty town name.
    #[error("Town names must not be empty")]
    EmptyNodeName,

    /// The route search popped more frontier entries than allowed.
    #[error("Route search exceeded its budget of {budget} expansions")]
    SearchBudgetExhausted { budget: usize },
}

/// Error type for loading a graph dataset from disk.
#[derive(Error, Debug)]
pub enum GraphLoaderError {
    /// Error when reading a file.
    #[error("Failed to read graph file '{0}': {1}")]
    ReadFile(String, std::io::Error),

    /// Error when the file is not a valid JSON edge table.
    #[error("Failed to parse graph from '{0}': {1}")]
    Parse(String, serde_json::Error),

    /// The edge table parsed but describes an invalid graph.
    #[error("Invalid graph in '{0}': {1}")]
    InvalidGraph(String, GraphError),
}
