//! Graph Paths - weighted graphs and single-source shortest paths
//!
//! This library provides adjacency-list directed and undirected graphs over
//! arbitrary hashable vertex identifiers, together with the classic algorithms
//! that operate on them: cycle detection, topological ordering, strongly
//! connected components (Kosaraju-Sharir) and three shortest path strategies
//! (Bellman-Ford, Dijkstra over an indexed binary heap, and topological
//! relaxation for acyclic graphs).

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    bellman_ford::BellmanFord, dijkstra::Dijkstra, engine::shortest_paths,
    engine::ShortestPathEngine, engine::Strategy, paths::Paths,
    topological::TopologicalRelaxation, ShortestPathAlgorithm,
};
pub use data_structures::IndexedPriorityQueue;
/// Re-export main types for convenient use
pub use graph::{DirectedGraph, Edge, Graph, MutableGraph, UndirectedGraph, Vertex, VertexOrder};

/// Broad classification of every [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input value rejected before any mutation
    InvalidArgument,
    /// Vertex, edge or destination not present
    NotFound,
    /// Empty structure or violated algorithmic precondition
    InvalidState,
}

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    #[error("Edge not found: {0}")]
    EdgeNotFound(String),

    #[error("Source vertex not found in graph: {0}")]
    SourceNotFound(String),

    #[error("No path from source to {0}")]
    Unreachable(String),

    #[error("Priority queue is empty")]
    EmptyQueue,

    #[error("Negative cycle reachable from source")]
    NegativeCycle,

    #[error("Cycle detected at vertex {0}")]
    CycleDetected(String),

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),
}

impl Error {
    /// Returns the kind of failure this error represents
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Error::VertexNotFound(_)
            | Error::EdgeNotFound(_)
            | Error::SourceNotFound(_)
            | Error::Unreachable(_) => ErrorKind::NotFound,
            Error::EmptyQueue
            | Error::NegativeCycle
            | Error::CycleDetected(_)
            | Error::AlgorithmError(_) => ErrorKind::InvalidState,
        }
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
