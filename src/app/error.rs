use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Graph loading error: {0}")]
    GraphLoad(#[from] crate::graph::GraphLoaderError),
    #[error("Route query error: {0}")]
    Route(#[from] crate::graph::GraphError),
    #[error("Invalid file path: {0}")]
    InvalidPath(String),
}
