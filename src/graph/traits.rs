use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::Edge;
use crate::Result;

/// Requirements on a vertex identifier
///
/// Vertices are opaque to the graph: they only need value equality, hashing
/// and cheap-enough cloning, since algorithms copy identifiers into their own
/// bookkeeping instead of holding on to graph internals.
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Debug {}

/// Trait representing a weighted graph stored as adjacency sets
pub trait Graph<V>: Debug
where
    V: Vertex,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of stored (directed) edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns true if the graph has no vertices
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Returns true if the vertex exists in the graph
    fn contains_vertex(&self, vertex: &V) -> bool;

    /// Returns true if this exact edge (endpoints and weight) is stored
    fn contains_edge(&self, edge: &Edge<V>) -> bool;

    /// Returns an iterator over every vertex, in no particular order
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns an iterator over every stored edge
    fn edges(&self) -> Box<dyn Iterator<Item = &Edge<V>> + '_>;

    /// Returns true if any stored edge has a negative weight, in O(E) time
    fn has_negative_weights(&self) -> bool {
        self.edges().any(|edge| edge.weight < 0.0)
    }

    /// Returns an iterator over the outgoing edges from a vertex
    ///
    /// Fails with [`crate::Error::VertexNotFound`] if the vertex is absent.
    fn outgoing_edges(&self, vertex: &V) -> Result<Box<dyn Iterator<Item = &Edge<V>> + '_>>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<V>: Graph<V>
where
    V: Vertex,
{
    /// Adds a vertex; does nothing if it is already present
    fn add_vertex(&mut self, vertex: V);

    /// Adds an edge, adding its endpoints as vertices when absent
    fn add_edge(&mut self, edge: Edge<V>) -> Result<()>;

    /// Removes a vertex and every edge incident to it
    fn remove_vertex(&mut self, vertex: &V) -> Result<()>;

    /// Removes an edge; its endpoints stay in the graph
    fn remove_edge(&mut self, edge: &Edge<V>) -> Result<()>;
}
