// engine module
mod engine;
// explorer module
mod explorer;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the route modules.
//─────────────────────────────────────────────────────────────────────────────
pub use engine::RouteEngine;
pub use explorer::{Route, RouteQuery, DEFAULT_MAX_STOPS};
