use log::{debug, warn};

use crate::algorithm::paths::{Paths, Relaxation};
use crate::algorithm::traits::{check_source, ShortestPathAlgorithm};
use crate::graph::{Graph, Vertex};
use crate::{Error, Result};

/// Bellman-Ford shortest paths, tolerating negative edge weights
///
/// Relaxes every edge once per pass for at most `V` passes, stopping early
/// once a pass changes nothing. If the `V`-th pass still improves a distance,
/// a negative cycle is reachable from the source. O(V*E) in the worst case.
#[derive(Debug, Default, Clone, Copy)]
pub struct BellmanFord;

impl BellmanFord {
    /// Creates a new Bellman-Ford algorithm instance
    pub fn new() -> Self {
        BellmanFord
    }
}

impl<V, G> ShortestPathAlgorithm<V, G> for BellmanFord
where
    V: Vertex,
    G: Graph<V>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<Paths<V>> {
        check_source(graph, source)?;

        let passes = graph.vertex_count();
        let mut relaxation = Relaxation::new(source.clone());

        for pass in 1..=passes {
            let mut relaxed = false;
            for edge in graph.edges() {
                relaxed |= relaxation.relax(edge);
            }

            if !relaxed {
                debug!(
                    "Bellman-Ford from {:?} converged after {} passes, {} vertices reached",
                    source,
                    pass,
                    relaxation.reached()
                );
                return Ok(relaxation.into_paths());
            }
            if pass == passes {
                warn!("Negative cycle reachable from {:?}", source);
                return Err(Error::NegativeCycle);
            }
        }

        Ok(relaxation.into_paths())
    }
}
