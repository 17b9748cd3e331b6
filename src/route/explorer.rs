use crate::graph::{GraphError, TownGraph};

/// An ordered sequence of towns describing a journey.
pub type Route = Vec<String>;

/// Default upper bound on stops when the caller does not supply one.
pub const DEFAULT_MAX_STOPS: usize = 1000;

/// Bounds for a route enumeration. A stop is one edge traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteQuery {
    /// Largest number of stops a recorded route may have.
    pub max_stops: usize,
    /// Smallest number of stops a recorded route may have.
    pub min_stops: usize,
    /// Maximum number of frontier entries popped before the search gives up.
    pub expansion_budget: Option<usize>,
}

impl Default for RouteQuery {
    fn default() -> Self {
        Self {
            max_stops: DEFAULT_MAX_STOPS,
            min_stops: 0,
            expansion_budget: None,
        }
    }
}

impl RouteQuery {
    pub fn new(max_stops: usize, min_stops: usize) -> Self {
        Self {
            max_stops,
            min_stops,
            expansion_budget: None,
        }
    }

    pub fn with_budget(mut self, budget: usize) -> Self {
        self.expansion_budget = Some(budget);
        self
    }
}

/// `RouteExplorer` enumerates every route between two towns within stop bounds.
pub struct RouteExplorer;

impl RouteExplorer {
    /// Returns every route from `start` to `end` whose stop count lies within
    /// `query.min_stops..=query.max_stops`.
    ///
    /// Routes are returned in discovery order. The zero-stop route `[start]`
    /// is never recorded, even when `start == end`.
    pub fn get_routes(
        graph: &TownGraph,
        start: &str,
        end: &str,
        query: &RouteQuery,
    ) -> Result<Vec<Route>, GraphError> {
        for town in [start, end] {
            if !graph.contains(town) {
                return Err(GraphError::UnknownNode(town.to_string()));
            }
        }
        Self::traverse(graph, start, end, query)
    }

    /// Performs a depth-first traversal with an explicit frontier stack.
    ///
    /// A popped route of `n` towns produces routes of `n` stops when extended,
    /// so it is only expanded while `n <= max_stops`. A neighbour equal to
    /// `end` completes the route once `n >= min_stops`; before that the route
    /// keeps travelling through `end`.
    fn traverse(
        graph: &TownGraph,
        start: &str,
        end: &str,
        query: &RouteQuery,
    ) -> Result<Vec<Route>, GraphError> {
        let mut completed: Vec<Route> = Vec::new();
        let mut frontier: Vec<Route> = vec![vec![start.to_string()]];
        let mut expansions = 0usize;

        while let Some(route) = frontier.pop() {
            if let Some(budget) = query.expansion_budget {
                if expansions == budget {
                    return Err(GraphError::SearchBudgetExhausted { budget });
                }
            }
            expansions += 1;

            let stops = route.len();
            if stops > query.max_stops {
                continue;
            }
            let Some(last) = route.last() else {
                continue;
            };

            for next in graph.available_connections(last)? {
                let mut extended = route.clone();
                extended.push(next.to_string());
                if next == end && stops >= query.min_stops {
                    completed.push(extended);
                } else {
                    frontier.push(extended);
                }
            }
        }
        Ok(completed)
    }
}
