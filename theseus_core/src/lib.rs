pub mod astar;
pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod heuristic;
pub mod path;
pub mod stopwatch;
pub mod topology;

#[cfg(test)]
pub(crate) mod test_topology_utils;

pub use astar::{AStar, SearchOptions, find_path};
pub use error::{SearchError, TopologyError};
pub use graph::{Weight, WeightedGraph};
pub use heuristic::{Heuristic, MapHeuristic, ZeroHeuristic};
pub use path::{PathStep, TraversalPath};
