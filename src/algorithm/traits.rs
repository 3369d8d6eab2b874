use crate::algorithm::paths::Paths;
use crate::graph::{Graph, Vertex};
use crate::{Error, Result};

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<V, G>
where
    V: Vertex,
    G: Graph<V>,
{
    /// Compute shortest paths from a source vertex to every reachable vertex
    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<Paths<V>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

/// Fails with [`Error::SourceNotFound`] unless `source` is a vertex of `graph`
pub(crate) fn check_source<V, G>(graph: &G, source: &V) -> Result<()>
where
    V: Vertex,
    G: Graph<V>,
{
    if graph.contains_vertex(source) {
        Ok(())
    } else {
        Err(Error::SourceNotFound(format!("{:?}", source)))
    }
}
