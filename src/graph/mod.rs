pub mod traits;
pub mod edge;
pub mod directed;
pub mod undirected;
pub mod generators;
pub(crate) mod traversal;

pub use traits::{Graph, MutableGraph, Vertex};
pub use edge::Edge;
pub use directed::{DirectedGraph, VertexOrder};
pub use undirected::UndirectedGraph;
