use std::collections::HashMap;

use log::trace;

use crate::graph::{Edge, Vertex};
use crate::{Error, Result};

/// A shortest path tree rooted at a source vertex
///
/// Produced once by a shortest path computation and immutable afterwards. A
/// vertex is reachable if it is the source or has a recorded incoming edge;
/// paths are rebuilt by walking incoming edges back to the source.
#[derive(Debug, Clone)]
pub struct Paths<V>
where
    V: Vertex,
{
    source: V,
    incoming_edges: HashMap<V, Edge<V>>,
    distances: HashMap<V, f64>,
}

impl<V> Paths<V>
where
    V: Vertex,
{
    /// Returns the vertex every path starts from
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Returns true if there is a path from the source to `destination`
    pub fn contains(&self, destination: &V) -> bool {
        *destination == self.source || self.incoming_edges.contains_key(destination)
    }

    /// Returns the length of the shortest path to `destination`, if reachable
    pub fn distance_to(&self, destination: &V) -> Option<f64> {
        if !self.contains(destination) {
            return None;
        }
        self.distances.get(destination).copied()
    }

    /// Returns the last edge on the shortest path to `destination`
    pub fn incoming_edge(&self, destination: &V) -> Option<&Edge<V>> {
        self.incoming_edges.get(destination)
    }

    /// Iterates over every reachable vertex, the source first
    pub fn reachable(&self) -> impl Iterator<Item = &V> + '_ {
        std::iter::once(&self.source).chain(
            self.incoming_edges
                .keys()
                .filter(move |vertex| **vertex != self.source),
        )
    }

    /// Returns the edges to follow from the source to `destination`, in O(V)
    ///
    /// The path to the source itself is empty. Fails with
    /// [`Error::Unreachable`] if `destination` cannot be reached.
    pub fn path_to(&self, destination: &V) -> Result<Vec<Edge<V>>> {
        if !self.contains(destination) {
            return Err(Error::Unreachable(format!("{:?}", destination)));
        }

        let mut path = Vec::new();
        let mut current = destination;
        while *current != self.source {
            let edge = self.incoming_edges.get(current).ok_or_else(|| {
                Error::AlgorithmError(format!("path to {:?} is broken at {:?}", destination, current))
            })?;
            path.push(edge.clone());
            if path.len() > self.incoming_edges.len() {
                return Err(Error::AlgorithmError(format!(
                    "path to {:?} does not lead back to the source",
                    destination
                )));
            }
            current = &edge.from;
        }

        path.reverse();
        Ok(path)
    }
}

/// Tentative distances and incoming edges while a search is running
#[derive(Debug)]
pub(crate) struct Relaxation<V>
where
    V: Vertex,
{
    source: V,
    incoming_edges: HashMap<V, Edge<V>>,
    distances: HashMap<V, f64>,
}

impl<V> Relaxation<V>
where
    V: Vertex,
{
    /// Starts a search with only the source at distance zero
    pub(crate) fn new(source: V) -> Self {
        let mut distances = HashMap::new();
        distances.insert(source.clone(), 0.0);
        Relaxation {
            source,
            incoming_edges: HashMap::new(),
            distances,
        }
    }

    pub(crate) fn distance(&self, vertex: &V) -> Option<f64> {
        self.distances.get(vertex).copied()
    }

    /// Records `edge` as the way into `edge.to` if it shortens the known path
    ///
    /// Edges leaving a vertex with no known distance are ignored, as their
    /// tentative distance is infinite.
    pub(crate) fn relax(&mut self, edge: &Edge<V>) -> bool {
        let Some(from) = self.distance(&edge.from) else {
            return false;
        };
        let candidate = from + edge.weight;
        let improves = self
            .distance(&edge.to)
            .map_or(true, |current| candidate < current);
        if improves {
            trace!("Relaxing {} to distance {}", edge, candidate);
            self.distances.insert(edge.to.clone(), candidate);
            self.incoming_edges.insert(edge.to.clone(), edge.clone());
        }
        improves
    }

    pub(crate) fn reached(&self) -> usize {
        self.distances.len()
    }

    pub(crate) fn into_paths(self) -> Paths<V> {
        Paths {
            source: self.source,
            incoming_edges: self.incoming_edges,
            distances: self.distances,
        }
    }
}
