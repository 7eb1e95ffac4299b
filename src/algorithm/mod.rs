pub mod counting;
pub mod dijkstra;
pub mod traits;

use rayon::prelude::*;

pub use traits::{
    PathCountResult, PathCountingAlgorithm, ShortestPathAlgorithm, ShortestPathResult, MODULUS,
};

use crate::graph::{Cost, Graph};
use crate::Result;

/// Runs one distance query per source over the same immutable graph, in
/// parallel.
///
/// Queries never mutate the graph and all per-query state (distance vector,
/// priority queue) is allocated per call, so sharing the graph across worker
/// threads is safe. Results come back in source order; the first failing
/// query aborts the batch.
pub fn compute_from_sources<W, G, A>(
    algorithm: &A,
    graph: &G,
    sources: &[usize],
) -> Result<Vec<ShortestPathResult<W>>>
where
    W: Cost + Send,
    G: Graph<W> + Sync,
    A: ShortestPathAlgorithm<W, G> + Sync,
{
    sources
        .par_iter()
        .map(|&source| algorithm.compute_shortest_paths(graph, source))
        .collect()
}
