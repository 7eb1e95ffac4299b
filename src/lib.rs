//! Single-source shortest paths with modular path counting.
//!
//! This library computes minimum distances from a source vertex to every
//! vertex of a non-negatively weighted graph using a binary-heap labeling
//! algorithm (Dijkstra), and additionally counts the number of distinct
//! minimum-cost paths to each vertex modulo `1_000_000_007`.
//!
//! Both directed and undirected inputs are supported; an undirected edge is
//! materialized as two opposing directed edges. Parallel edges are allowed
//! and relaxed independently.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    counting::CountingDijkstra, dijkstra::Dijkstra, PathCountResult, PathCountingAlgorithm,
    ShortestPathAlgorithm, ShortestPathResult, MODULUS,
};
/// Re-export main types for convenient use
pub use graph::weighted::WeightedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Negative edge cost: {0}")]
    NegativeCost(String),

    #[error("Source vertex not found in graph")]
    SourceNotFound,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
