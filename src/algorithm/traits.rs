use crate::graph::{Cost, Graph};
use crate::Result;

/// Modulus applied to path counts
pub const MODULUS: u64 = 1_000_000_007;

/// Result of a shortest path query
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Cost,
{
    /// Minimum cost from the source to each vertex; `None` means unreachable
    pub distances: Vec<Option<W>>,

    /// Source vertex ID
    pub source: usize,
}

/// Result of a path counting query
#[derive(Debug, Clone)]
pub struct PathCountResult<W>
where
    W: Cost,
{
    /// Minimum cost from the source to each vertex; `None` means unreachable
    pub distances: Vec<Option<W>>,

    /// Number of distinct minimum-cost paths to each vertex, modulo
    /// [`MODULUS`]. The source counts 1 (the empty path); unreachable
    /// vertices count 0.
    pub counts: Vec<u64>,

    /// Source vertex ID
    pub source: usize,
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Cost,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

/// Trait for algorithms that count minimum-cost paths alongside distances
pub trait PathCountingAlgorithm<W, G>
where
    W: Cost,
    G: Graph<W>,
{
    /// Compute shortest path distances and minimum-cost path counts from a
    /// source vertex to all other vertices
    fn compute_path_counts(&self, graph: &G, source: usize) -> Result<PathCountResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
