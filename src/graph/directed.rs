use std::collections::{HashMap, HashSet};

use log::{debug, trace};

use crate::graph::traits::{Graph, MutableGraph, Vertex};
use crate::graph::traversal;
use crate::graph::Edge;
use crate::{Error, Result};

/// Order in which [`DirectedGraph::vertices_in`] yields vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexOrder {
    /// Whatever order the underlying map happens to store
    Any,
    /// Reverse postorder of a depth-first traversal covering every vertex
    ReversePostorder,
}

/// A directed graph implementation using adjacency sets
#[derive(Debug, Clone)]
pub struct DirectedGraph<V>
where
    V: Vertex,
{
    /// Outgoing edges for each vertex: vertex -> {edges with `from == vertex`}
    outgoing_edges: HashMap<V, HashSet<Edge<V>>>,
}

impl<V> DirectedGraph<V>
where
    V: Vertex,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            outgoing_edges: HashMap::new(),
        }
    }

    /// Creates a new empty directed graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            outgoing_edges: HashMap::with_capacity(vertices),
        }
    }

    /// Creates a graph holding the given edges and their endpoints
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = Edge<V>>,
    {
        let mut graph = DirectedGraph::new();
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    /// Yields the vertices in the requested order
    ///
    /// `VertexOrder::ReversePostorder` is computed eagerly, in O(V+E), before
    /// the first vertex is produced.
    pub fn vertices_in(&self, order: VertexOrder) -> Result<Box<dyn Iterator<Item = V> + '_>> {
        match order {
            VertexOrder::Any => Ok(Box::new(self.outgoing_edges.keys().cloned())),
            VertexOrder::ReversePostorder => {
                Ok(Box::new(traversal::reverse_postorder(self)?.into_iter()))
            }
        }
    }

    /// Returns a new graph with every edge reversed
    pub fn transpose(&self) -> Self {
        let mut transposed = DirectedGraph::with_capacity(self.vertex_count());
        for vertex in self.outgoing_edges.keys() {
            transposed.insert_vertex(vertex.clone());
        }
        for edge in self.edges() {
            transposed.insert_edge(edge.reversed());
        }
        transposed
    }

    /// Returns true if this graph is cyclic in O(V+E) time, false otherwise
    pub fn is_cyclic(&self) -> bool {
        // Every edge target is a key, so the traversal never hits a missing vertex
        matches!(traversal::has_directed_cycle(self), Ok(true))
    }

    /// Returns the vertices reachable from `source` in topological order
    ///
    /// Fails with [`Error::CycleDetected`] if a cycle is reachable from `source`.
    pub fn topological_order(&self, source: &V) -> Result<Vec<V>> {
        traversal::topological_order(self, source)
    }

    /// Returns every vertex in topological order
    ///
    /// Fails with [`Error::CycleDetected`] if the graph is cyclic.
    pub fn topological_sort(&self) -> Result<Vec<V>> {
        traversal::topological_sort(self)
    }

    /// Decomposes the graph into strongly connected components
    ///
    /// Kosaraju-Sharir: take the reverse postorder of the transposed graph,
    /// then run a depth-first search on this graph from every unvisited vertex
    /// in that order. Each search tree is exactly one component. Every returned
    /// component holds only the edges internal to it.
    pub fn strongly_connected_components(&self) -> Result<Vec<DirectedGraph<V>>> {
        let order = traversal::reverse_postorder(&self.transpose())?;

        let mut visited: HashSet<&V> = HashSet::with_capacity(self.vertex_count());
        let mut components = Vec::new();

        for root in &order {
            let Some((root, _)) = self.outgoing_edges.get_key_value(root) else {
                continue;
            };
            if !visited.insert(root) {
                continue;
            }

            let mut members = vec![root];
            let mut stack = vec![root];
            while let Some(vertex) = stack.pop() {
                for edge in self.outgoing_edges(vertex)? {
                    if visited.insert(&edge.to) {
                        members.push(&edge.to);
                        stack.push(&edge.to);
                    }
                }
            }

            components.push(self.induced_subgraph(&members));
        }

        debug!(
            "Found {} strongly connected components over {} vertices",
            components.len(),
            self.vertex_count()
        );
        Ok(components)
    }

    /// Copies the given vertices and the edges running between them
    pub(crate) fn induced_subgraph(&self, members: &[&V]) -> DirectedGraph<V> {
        let member_set: HashSet<&V> = members.iter().copied().collect();
        let mut subgraph = DirectedGraph::with_capacity(members.len());
        for &vertex in members {
            subgraph.insert_vertex(vertex.clone());
            if let Some(edges) = self.outgoing_edges.get(vertex) {
                for edge in edges.iter().filter(|edge| member_set.contains(&edge.to)) {
                    subgraph.insert_edge(edge.clone());
                }
            }
        }
        subgraph
    }

    fn insert_vertex(&mut self, vertex: V) {
        self.outgoing_edges.entry(vertex).or_default();
    }

    /// Stores an edge that is already known to be valid
    pub(crate) fn insert_edge(&mut self, edge: Edge<V>) {
        self.insert_vertex(edge.to.clone());
        self.outgoing_edges
            .entry(edge.from.clone())
            .or_default()
            .insert(edge);
    }

    /// Outgoing edges of a vertex known to be stored
    pub(crate) fn adjacent(&self, vertex: &V) -> impl Iterator<Item = &Edge<V>> + '_ {
        self.outgoing_edges.get(vertex).into_iter().flatten()
    }

    /// Drops a vertex together with its outgoing edges only
    pub(crate) fn detach_vertex(&mut self, vertex: &V) -> Option<HashSet<Edge<V>>> {
        self.outgoing_edges.remove(vertex)
    }
}

impl<V> Default for DirectedGraph<V>
where
    V: Vertex,
{
    fn default() -> Self {
        DirectedGraph::new()
    }
}

impl<V> Graph<V> for DirectedGraph<V>
where
    V: Vertex,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.values().map(|edges| edges.len()).sum()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.outgoing_edges.contains_key(vertex)
    }

    fn contains_edge(&self, edge: &Edge<V>) -> bool {
        self.outgoing_edges
            .get(&edge.from)
            .map_or(false, |edges| edges.contains(edge))
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.outgoing_edges.keys())
    }

    fn edges(&self) -> Box<dyn Iterator<Item = &Edge<V>> + '_> {
        Box::new(self.outgoing_edges.values().flat_map(|edges| edges.iter()))
    }

    fn outgoing_edges(&self, vertex: &V) -> Result<Box<dyn Iterator<Item = &Edge<V>> + '_>> {
        match self.outgoing_edges.get(vertex) {
            Some(edges) => Ok(Box::new(edges.iter())),
            None => Err(Error::VertexNotFound(format!("{:?}", vertex))),
        }
    }
}

impl<V> MutableGraph<V> for DirectedGraph<V>
where
    V: Vertex,
{
    fn add_vertex(&mut self, vertex: V) {
        self.insert_vertex(vertex);
    }

    fn add_edge(&mut self, edge: Edge<V>) -> Result<()> {
        if edge.weight.is_nan() {
            return Err(Error::InvalidArgument(format!("edge {} has a NaN weight", edge)));
        }
        trace!("Adding edge {}", edge);
        self.insert_edge(edge);
        Ok(())
    }

    fn remove_vertex(&mut self, vertex: &V) -> Result<()> {
        if !self.contains_vertex(vertex) {
            return Err(Error::VertexNotFound(format!("{:?}", vertex)));
        }

        // Outgoing edges leave with the vertex; incoming ones need a full scan
        self.detach_vertex(vertex);
        for edges in self.outgoing_edges.values_mut() {
            edges.retain(|edge| edge.to != *vertex);
        }
        Ok(())
    }

    fn remove_edge(&mut self, edge: &Edge<V>) -> Result<()> {
        let removed = self
            .outgoing_edges
            .get_mut(&edge.from)
            .map_or(false, |edges| edges.remove(edge));
        if removed {
            Ok(())
        } else {
            Err(Error::EdgeNotFound(edge.to_string()))
        }
    }
}
