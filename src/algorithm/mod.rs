pub mod traits;
pub mod paths;
pub mod bellman_ford;
pub mod dijkstra;
pub mod topological;
pub mod engine;

pub use traits::ShortestPathAlgorithm;
pub use paths::Paths;
pub use engine::{shortest_paths, ShortestPathEngine, Strategy};
