use log::debug;

use crate::algorithm::bellman_ford::BellmanFord;
use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::paths::Paths;
use crate::algorithm::topological::TopologicalRelaxation;
use crate::algorithm::traits::{check_source, ShortestPathAlgorithm};
use crate::graph::traversal;
use crate::graph::{Graph, Vertex};
use crate::{Error, Result};

/// Shortest path strategy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// General relaxation; tolerates negative weights, rejects negative cycles
    BellmanFord,
    /// Priority relaxation; requires non-negative weights
    Dijkstra,
    /// Relaxation in topological order; requires no cycle reachable from the source
    Topological,
    /// Pick the cheapest strategy whose precondition the graph satisfies
    #[default]
    Auto,
}

/// Runs one of the shortest path strategies over a graph
///
/// `Strategy::Auto` uses topological relaxation when nothing cyclic is
/// reachable from the source, Dijkstra when every weight is non-negative, and
/// Bellman-Ford otherwise.
#[derive(Debug, Clone, Default)]
pub struct ShortestPathEngine {
    /// Strategy to run
    strategy: Strategy,
    /// Whether Dijkstra rejects negative weights up front
    check_weights: bool,
}

impl ShortestPathEngine {
    /// Create a new engine using `Strategy::Auto`
    pub fn new() -> Self {
        ShortestPathEngine {
            strategy: Strategy::Auto,
            check_weights: false,
        }
    }

    /// Set the strategy to run
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enable or disable Dijkstra's negative weight check
    pub fn with_weight_check(mut self, check: bool) -> Self {
        self.check_weights = check;
        self
    }

    /// Returns the configured strategy
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Computes the shortest path tree rooted at `source`
    pub fn compute<V, G>(&self, graph: &G, source: &V) -> Result<Paths<V>>
    where
        V: Vertex,
        G: Graph<V>,
    {
        debug!("Computing shortest paths from {:?} using {:?}", source, self.strategy);

        match self.strategy {
            Strategy::BellmanFord => BellmanFord::new().compute_shortest_paths(graph, source),
            Strategy::Dijkstra => Dijkstra::new()
                .with_weight_check(self.check_weights)
                .compute_shortest_paths(graph, source),
            Strategy::Topological => TopologicalRelaxation::new().compute_shortest_paths(graph, source),
            Strategy::Auto => {
                let resolved = self.resolve_strategy(graph, source)?;
                self.clone().with_strategy(resolved).compute(graph, source)
            }
        }
    }

    /// Returns the concrete strategy `compute` would run; never `Strategy::Auto`
    ///
    /// A configured concrete strategy is returned as is. Fails with
    /// [`Error::SourceNotFound`] if `source` is not in `graph`.
    pub fn resolve_strategy<V, G>(&self, graph: &G, source: &V) -> Result<Strategy>
    where
        V: Vertex,
        G: Graph<V>,
    {
        check_source(graph, source)?;
        if self.strategy != Strategy::Auto {
            return Ok(self.strategy);
        }

        match traversal::topological_order(graph, source) {
            Ok(_) => return Ok(Strategy::Topological),
            Err(Error::CycleDetected(_)) => {}
            Err(err) => return Err(err),
        }

        if graph.has_negative_weights() {
            Ok(Strategy::BellmanFord)
        } else {
            Ok(Strategy::Dijkstra)
        }
    }
}

impl<V, G> ShortestPathAlgorithm<V, G> for ShortestPathEngine
where
    V: Vertex,
    G: Graph<V>,
{
    fn name(&self) -> &'static str {
        match self.strategy {
            Strategy::BellmanFord => "Bellman-Ford",
            Strategy::Dijkstra => "Dijkstra",
            Strategy::Topological => "Topological relaxation",
            Strategy::Auto => "Automatic",
        }
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<Paths<V>> {
        self.compute(graph, source)
    }
}

/// Computes shortest paths from `source` with the given strategy
pub fn shortest_paths<V, G>(graph: &G, source: &V, strategy: Strategy) -> Result<Paths<V>>
where
    V: Vertex,
    G: Graph<V>,
{
    ShortestPathEngine::new()
        .with_strategy(strategy)
        .compute(graph, source)
}
