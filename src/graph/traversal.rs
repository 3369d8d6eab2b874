//! Explicit-stack depth-first traversal shared by the graph algorithms
//!
//! Each vertex moves through `Unvisited -> Started -> Finished` (an absent
//! entry in the state map is `Unvisited`). An edge into a `Started` vertex is
//! a back edge and therefore closes a cycle; an edge into a `Finished` vertex
//! is skipped without re-exploration.

use std::collections::HashMap;

use log::trace;

use crate::graph::{Edge, Graph, Vertex};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchState {
    Started,
    Finished,
}

type Frame<'g, V> = (V, Box<dyn Iterator<Item = &'g Edge<V>> + 'g>);

/// Traversal context carrying per-vertex search state across several roots
pub(crate) struct DepthFirst<'g, V, G> {
    graph: &'g G,
    states: HashMap<V, SearchState>,
    postorder: Vec<V>,
}

impl<'g, V, G> DepthFirst<'g, V, G>
where
    V: Vertex + 'g,
    G: Graph<V>,
{
    pub(crate) fn new(graph: &'g G) -> Self {
        DepthFirst {
            graph,
            states: HashMap::with_capacity(graph.vertex_count()),
            postorder: Vec::with_capacity(graph.vertex_count()),
        }
    }

    /// Explores every unvisited vertex reachable from `root`
    ///
    /// With `stop_on_back_edge` set, the traversal is abandoned at the first
    /// back edge and the vertex it points to is returned. Otherwise back edges
    /// are ignored and `Ok(None)` is returned once the search finishes.
    pub(crate) fn visit(&mut self, root: &V, stop_on_back_edge: bool) -> Result<Option<V>> {
        if self.states.contains_key(root) {
            return Ok(None);
        }

        let graph = self.graph;
        let mut stack: Vec<Frame<'g, V>> = Vec::new();
        self.states.insert(root.clone(), SearchState::Started);
        stack.push((root.clone(), graph.outgoing_edges(root)?));

        while let Some((_, edges)) = stack.last_mut() {
            match edges.next() {
                Some(edge) => match self.states.get(&edge.to) {
                    None => {
                        self.states.insert(edge.to.clone(), SearchState::Started);
                        stack.push((edge.to.clone(), graph.outgoing_edges(&edge.to)?));
                    }
                    Some(SearchState::Started) if stop_on_back_edge => {
                        trace!("Back edge {} closes a cycle", edge);
                        return Ok(Some(edge.to.clone()));
                    }
                    Some(_) => {}
                },
                None => {
                    if let Some((vertex, _)) = stack.pop() {
                        self.states.insert(vertex.clone(), SearchState::Finished);
                        self.postorder.push(vertex);
                    }
                }
            }
        }

        Ok(None)
    }

    /// Consumes the context, returning finished vertices latest-first
    pub(crate) fn into_reverse_postorder(self) -> Vec<V> {
        let mut order = self.postorder;
        order.reverse();
        order
    }
}

/// Returns true if some depth-first trace revisits a vertex still on its path
pub(crate) fn has_directed_cycle<V, G>(graph: &G) -> Result<bool>
where
    V: Vertex,
    G: Graph<V>,
{
    let mut search = DepthFirst::new(graph);
    for vertex in graph.vertices() {
        if search.visit(vertex, true)?.is_some() {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Reverse postorder over every vertex; cycles are tolerated
pub(crate) fn reverse_postorder<V, G>(graph: &G) -> Result<Vec<V>>
where
    V: Vertex,
    G: Graph<V>,
{
    let mut search = DepthFirst::new(graph);
    for vertex in graph.vertices() {
        search.visit(vertex, false)?;
    }
    Ok(search.into_reverse_postorder())
}

/// Reverse postorder of the vertices reachable from `source`
///
/// Fails with [`Error::CycleDetected`] if that part of the graph is cyclic.
pub(crate) fn topological_order<V, G>(graph: &G, source: &V) -> Result<Vec<V>>
where
    V: Vertex,
    G: Graph<V>,
{
    if !graph.contains_vertex(source) {
        return Err(Error::VertexNotFound(format!("{:?}", source)));
    }

    let mut search = DepthFirst::new(graph);
    if let Some(vertex) = search.visit(source, true)? {
        return Err(Error::CycleDetected(format!("{:?}", vertex)));
    }
    Ok(search.into_reverse_postorder())
}

/// Reverse postorder over every vertex, failing on any cycle
pub(crate) fn topological_sort<V, G>(graph: &G) -> Result<Vec<V>>
where
    V: Vertex,
    G: Graph<V>,
{
    let mut search = DepthFirst::new(graph);
    for vertex in graph.vertices() {
        if let Some(vertex) = search.visit(vertex, true)? {
            return Err(Error::CycleDetected(format!("{:?}", vertex)));
        }
    }
    Ok(search.into_reverse_postorder())
}
