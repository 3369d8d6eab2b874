use std::collections::HashSet;

use log::debug;
use ordered_float::OrderedFloat;

use crate::algorithm::paths::{Paths, Relaxation};
use crate::algorithm::traits::{check_source, ShortestPathAlgorithm};
use crate::data_structures::IndexedPriorityQueue;
use crate::graph::{Graph, Vertex};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation over an indexed binary heap
///
/// Requires non-negative edge weights; with negative weights the result is
/// unspecified unless the weight check is enabled, in which case the
/// computation is rejected up front. A vertex is settled once popped and never
/// relaxed again, so every vertex leaves the queue at most once. O((V+E) log V).
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra {
    /// Whether to reject graphs holding negative weights before searching
    check_weights: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            check_weights: false,
        }
    }

    /// Enable or disable the O(E) negative weight check
    pub fn with_weight_check(mut self, check: bool) -> Self {
        self.check_weights = check;
        self
    }
}

impl<V, G> ShortestPathAlgorithm<V, G> for Dijkstra
where
    V: Vertex,
    G: Graph<V>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<Paths<V>> {
        check_source(graph, source)?;

        if self.check_weights && graph.has_negative_weights() {
            return Err(Error::InvalidArgument(
                "Dijkstra requires non-negative edge weights".to_string(),
            ));
        }

        let mut relaxation = Relaxation::new(source.clone());
        let mut queue: IndexedPriorityQueue<V, OrderedFloat<f64>> = IndexedPriorityQueue::new();
        queue.push(source.clone(), OrderedFloat(0.0));

        let mut settled = HashSet::with_capacity(graph.vertex_count());

        while !queue.is_empty() {
            let (vertex, _) = queue.pop()?;
            for edge in graph.outgoing_edges(&vertex)? {
                if settled.contains(&edge.to) || !relaxation.relax(edge) {
                    continue;
                }
                // Re-keys `edge.to` if it is still queued
                if let Some(distance) = relaxation.distance(&edge.to) {
                    queue.push(edge.to.clone(), OrderedFloat(distance));
                }
            }
            settled.insert(vertex);
        }

        debug!(
            "Dijkstra from {:?} reached {} of {} vertices",
            source,
            relaxation.reached(),
            graph.vertex_count()
        );
        Ok(relaxation.into_paths())
    }
}
