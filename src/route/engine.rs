use crate::graph::{GraphError, TownGraph};

use super::explorer::{Route, RouteExplorer, RouteQuery};

/// Answers distance and enumeration queries against one immutable graph.
///
/// Holds no state besides the borrowed graph, so a single engine can serve
/// any number of independent queries.
#[derive(Clone, Copy, Debug)]
pub struct RouteEngine<'g> {
    graph: &'g TownGraph,
}

impl<'g> RouteEngine<'g> {
    pub fn new(graph: &'g TownGraph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &'g TownGraph {
        self.graph
    }

    /// Calculates the total distance of a route visiting `towns` in order.
    ///
    /// Empty and single-town routes have distance 0. The first missing edge
    /// aborts the whole computation with `GraphError::NoSuchRoute`.
    pub fn route_distance<S: AsRef<str>>(&self, towns: &[S]) -> Result<u64, GraphError> {
        towns.windows(2).try_fold(0u64, |total, pair| {
            let leg = self
                .graph
                .edge_distance(pair[0].as_ref(), pair[1].as_ref())?;
            Ok(total + u64::from(leg))
        })
    }

    /// Enumerates every route from `start` to `end` within the query's stop bounds.
    pub fn get_routes(
        &self,
        start: &str,
        end: &str,
        query: &RouteQuery,
    ) -> Result<Vec<Route>, GraphError> {
        RouteExplorer::get_routes(self.graph, start, end, query)
    }
}
