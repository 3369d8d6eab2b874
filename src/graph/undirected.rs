use std::collections::HashSet;

use log::debug;

use crate::graph::traits::{Graph, MutableGraph, Vertex};
use crate::graph::{DirectedGraph, Edge};
use crate::{Error, Result};

/// An undirected graph, stored as a directed graph that keeps every edge
/// together with its reverse
///
/// For every stored edge `(u, v, w)` the edge `(v, u, w)` is stored as well,
/// so `edges()` yields each connection in both directions (self-loops once)
/// and `edge_count()` counts stored directions. `vertex_count()` is unaffected.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<V>
where
    V: Vertex,
{
    inner: DirectedGraph<V>,
}

impl<V> UndirectedGraph<V>
where
    V: Vertex,
{
    /// Creates a new empty undirected graph
    pub fn new() -> Self {
        UndirectedGraph {
            inner: DirectedGraph::new(),
        }
    }

    /// Creates a new empty undirected graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        UndirectedGraph {
            inner: DirectedGraph::with_capacity(vertices),
        }
    }

    /// Creates a graph holding the given edges, their reverses and endpoints
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = Edge<V>>,
    {
        let mut graph = UndirectedGraph::new();
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    /// Read-only view of the symmetric directed storage
    pub fn as_directed(&self) -> &DirectedGraph<V> {
        &self.inner
    }

    /// Returns the vertices adjacent to `vertex`
    pub fn neighbours(&self, vertex: &V) -> Result<Box<dyn Iterator<Item = &V> + '_>> {
        Ok(Box::new(self.inner.outgoing_edges(vertex)?.map(|edge| &edge.to)))
    }

    /// Returns true if every stored edge has its reverse stored, in O(E) time
    ///
    /// An `UndirectedGraph` always satisfies this; the check exists for testing.
    pub fn is_undirected(&self) -> bool {
        self.inner
            .edges()
            .all(|edge| self.inner.contains_edge(&edge.reversed()))
    }

    /// Returns true if every vertex is reachable from every other one
    ///
    /// An empty graph is connected.
    pub fn is_connected(&self) -> bool {
        let Some(start) = self.inner.vertices().next() else {
            return true;
        };
        self.reach(start).len() == self.vertex_count()
    }

    /// Returns true if this graph contains a cycle, in O(V+E) time
    ///
    /// The edge used to arrive at a vertex is not followed back, so a single
    /// connection never counts as a cycle. Parallel connections with different
    /// weights and self-loops do.
    pub fn is_cyclic(&self) -> bool {
        let mut visited: HashSet<&V> = HashSet::with_capacity(self.vertex_count());

        for root in self.inner.vertices() {
            if visited.contains(root) {
                continue;
            }

            let mut stack: Vec<(&V, Option<&Edge<V>>)> = vec![(root, None)];
            while let Some((vertex, arrived_by)) = stack.pop() {
                if !visited.insert(vertex) {
                    return true;
                }
                for edge in self.inner.adjacent(vertex) {
                    if arrived_by.map_or(false, |arrival| edge.is_reverse_of(arrival)) {
                        continue;
                    }
                    if visited.contains(&edge.to) {
                        return true;
                    }
                    stack.push((&edge.to, Some(edge)));
                }
            }
        }
        false
    }

    /// Partitions the graph into its maximal connected subgraphs
    pub fn components(&self) -> Vec<UndirectedGraph<V>> {
        let mut visited: HashSet<&V> = HashSet::with_capacity(self.vertex_count());
        let mut components = Vec::new();

        for root in self.inner.vertices() {
            if visited.contains(root) {
                continue;
            }
            let members: Vec<&V> = self.reach(root);
            visited.extend(members.iter().copied());
            components.push(UndirectedGraph {
                inner: self.inner.induced_subgraph(&members),
            });
        }

        debug!(
            "Found {} connected components over {} vertices",
            components.len(),
            self.vertex_count()
        );
        components
    }

    /// Collects every vertex reachable from `start`, including itself
    fn reach<'a>(&'a self, start: &'a V) -> Vec<&'a V> {
        let mut seen: HashSet<&V> = HashSet::new();
        let mut members = Vec::new();
        let mut stack = vec![start];
        seen.insert(start);

        while let Some(vertex) = stack.pop() {
            members.push(vertex);
            for edge in self.inner.adjacent(vertex) {
                if seen.insert(&edge.to) {
                    stack.push(&edge.to);
                }
            }
        }
        members
    }
}

impl<V> Default for UndirectedGraph<V>
where
    V: Vertex,
{
    fn default() -> Self {
        UndirectedGraph::new()
    }
}

impl<V> Graph<V> for UndirectedGraph<V>
where
    V: Vertex,
{
    fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.inner.contains_vertex(vertex)
    }

    fn contains_edge(&self, edge: &Edge<V>) -> bool {
        self.inner.contains_edge(edge)
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        self.inner.vertices()
    }

    fn edges(&self) -> Box<dyn Iterator<Item = &Edge<V>> + '_> {
        self.inner.edges()
    }

    fn outgoing_edges(&self, vertex: &V) -> Result<Box<dyn Iterator<Item = &Edge<V>> + '_>> {
        self.inner.outgoing_edges(vertex)
    }
}

impl<V> MutableGraph<V> for UndirectedGraph<V>
where
    V: Vertex,
{
    fn add_vertex(&mut self, vertex: V) {
        self.inner.add_vertex(vertex);
    }

    fn add_edge(&mut self, edge: Edge<V>) -> Result<()> {
        if edge.weight.is_nan() {
            return Err(Error::InvalidArgument(format!("edge {} has a NaN weight", edge)));
        }
        self.inner.insert_edge(edge.reversed());
        self.inner.insert_edge(edge);
        Ok(())
    }

    fn remove_vertex(&mut self, vertex: &V) -> Result<()> {
        let Some(edges) = self.inner.detach_vertex(vertex) else {
            return Err(Error::VertexNotFound(format!("{:?}", vertex)));
        };
        for edge in edges.iter().filter(|edge| edge.to != *vertex) {
            self.inner.remove_edge(&edge.reversed())?;
        }
        Ok(())
    }

    fn remove_edge(&mut self, edge: &Edge<V>) -> Result<()> {
        let reverse = edge.reversed();
        if !self.inner.contains_edge(edge) || !self.inner.contains_edge(&reverse) {
            return Err(Error::EdgeNotFound(edge.to_string()));
        }
        self.inner.remove_edge(edge)?;
        if reverse != *edge {
            self.inner.remove_edge(&reverse)?;
        }
        Ok(())
    }
}
