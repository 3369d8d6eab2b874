use log::{debug, warn};

use crate::algorithm::paths::{Paths, Relaxation};
use crate::algorithm::traits::{check_source, ShortestPathAlgorithm};
use crate::graph::traversal;
use crate::graph::{Graph, Vertex};
use crate::{Error, Result};

/// Shortest paths for graphs acyclic from the source, in O(V+E)
///
/// Vertices reachable from the source are taken in reverse postorder and each
/// one's outgoing edges are relaxed exactly once. Negative weights are fine;
/// a cycle reachable from the source fails with [`Error::CycleDetected`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TopologicalRelaxation;

impl TopologicalRelaxation {
    /// Creates a new topological relaxation instance
    pub fn new() -> Self {
        TopologicalRelaxation
    }
}

impl<V, G> ShortestPathAlgorithm<V, G> for TopologicalRelaxation
where
    V: Vertex,
    G: Graph<V>,
{
    fn name(&self) -> &'static str {
        "Topological relaxation"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<Paths<V>> {
        check_source(graph, source)?;

        let order = traversal::topological_order(graph, source).map_err(|err| {
            if let Error::CycleDetected(vertex) = &err {
                warn!("Cycle through {} reachable from {:?}", vertex, source);
            }
            err
        })?;

        let mut relaxation = Relaxation::new(source.clone());
        for vertex in &order {
            for edge in graph.outgoing_edges(vertex)? {
                relaxation.relax(edge);
            }
        }

        debug!(
            "Topological relaxation from {:?} reached {} vertices",
            source,
            relaxation.reached()
        );
        Ok(relaxation.into_paths())
    }
}
