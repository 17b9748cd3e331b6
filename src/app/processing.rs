//! Runs a single query against the graph and renders its output lines.
//!
//! Sorting and formatting of routes happen here, outside the route engine.

use super::error::AppError;
use super::{verbose_eprintln, verbose_println};
use crate::graph::GraphError;
use crate::route::{Route, RouteEngine, RouteQuery};

/// Separator placed between towns when printing a route.
const ROUTE_SEPARATOR: &str = "-";

/// Orders routes by number of towns, then lexicographically.
pub fn sort_routes(routes: &mut [Route]) {
    routes.sort_unstable_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
}

pub fn format_route(route: &[String]) -> String {
    route.join(ROUTE_SEPARATOR)
}

/// Computes the distance of `towns`.
///
/// A missing edge is not fatal: its message becomes the output line.
pub fn process_route_distance(
    engine: &RouteEngine<'_>,
    towns: &[String],
    quiet_mode: bool,
) -> Result<Vec<String>, AppError> {
    verbose_println!(quiet_mode, "[QUERY] route distance of {}", format_route(towns));
    match engine.route_distance(towns) {
        Ok(distance) => {
            verbose_println!(quiet_mode, "   => {}", distance);
            Ok(vec![distance.to_string()])
        }
        Err(e @ GraphError::NoSuchRoute { .. }) => {
            if let GraphError::NoSuchRoute { from, to } = &e {
                verbose_eprintln!(quiet_mode, "   no edge {} -> {}", from, to);
            }
            Ok(vec![e.to_string()])
        }
        Err(e) => Err(e.into()),
    }
}

/// Enumerates routes between `start` and `end`, sorted for presentation.
/// With `count_only` the single output line is the number of routes.
pub fn process_routes(
    engine: &RouteEngine<'_>,
    start: &str,
    end: &str,
    query: &RouteQuery,
    count_only: bool,
    quiet_mode: bool,
) -> Result<Vec<String>, AppError> {
    verbose_println!(
        quiet_mode,
        "[QUERY] routes {} -> {} with {}..={} stops",
        start,
        end,
        query.min_stops,
        query.max_stops
    );
    let mut routes = engine.get_routes(start, end, query)?;
    verbose_println!(quiet_mode, "   => Found {} routes.", routes.len());

    if count_only {
        return Ok(vec![routes.len().to_string()]);
    }
    sort_routes(&mut routes);
    Ok(routes.iter().map(|route| format_route(route)).collect())
}

/// Lists the direct connections out of `town` as `TO DISTANCE` lines.
pub fn process_connections(
    engine: &RouteEngine<'_>,
    town: &str,
    quiet_mode: bool,
) -> Result<Vec<String>, AppError> {
    verbose_println!(quiet_mode, "[QUERY] connections from {}", town);
    let graph = engine.graph();
    graph
        .available_connections(town)?
        .into_iter()
        .map(|next| -> Result<String, AppError> {
            let distance = graph.edge_distance(town, next)?;
            Ok(format!("{} {}", next, distance))
        })
        .collect()
}
