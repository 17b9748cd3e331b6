// error module
mod error;
// loader module
mod loader;
// town graph module
mod town_graph;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the graph modules.
//─────────────────────────────────────────────────────────────────────────────
pub use error::{GraphError, GraphLoaderError};
pub use loader::load_graph_from_file;
pub use town_graph::TownGraph;
