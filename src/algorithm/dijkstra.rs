use log::debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::{Cost, Graph};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with a lazy-deletion binary heap.
///
/// Runs in O(E log V). Correctness requires non-negative edge costs; the
/// graph enforces that at insertion time.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Cost,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();

        // None is the unreachable state; no finite sentinel to collide with
        let mut distances: Vec<Option<W>> = vec![None; n];
        distances[source] = Some(W::zero());

        let mut queue = BinaryHeapWrapper::new();
        queue.push(source, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            // Stale entry: u was already finalized via a cheaper path
            if let Some(best) = distances[u] {
                if best < dist_u {
                    continue;
                }
            }

            for (v, cost) in graph.outgoing_edges(u) {
                let candidate = dist_u + cost;

                let improves = match distances[v] {
                    None => true,
                    Some(best) => candidate < best,
                };

                if improves {
                    distances[v] = Some(candidate);
                    queue.push(v, candidate);
                }
            }
        }

        debug!(
            "dijkstra: source {} over {} vertices, {} reachable",
            source,
            n,
            distances.iter().filter(|d| d.is_some()).count()
        );

        Ok(ShortestPathResult { distances, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WeightedGraph;

    #[test]
    fn source_distance_is_zero() {
        let mut graph: WeightedGraph<u64> = WeightedGraph::new(3);
        graph.add_directed(vec![(0, 1, 2), (1, 2, 2)]).unwrap();

        let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
        assert_eq!(result.distances[0], Some(0));
        assert_eq!(result.source, 0);
    }

    #[test]
    fn out_of_range_source_is_rejected() {
        let graph: WeightedGraph<u64> = WeightedGraph::new(2);
        let err = Dijkstra::new().compute_shortest_paths(&graph, 2);
        assert!(matches!(err, Err(Error::SourceNotFound)));
    }

    #[test]
    fn cheaper_parallel_edge_wins() {
        let mut graph: WeightedGraph<u64> = WeightedGraph::new(2);
        graph.add_directed(vec![(0, 1, 5), (0, 1, 3)]).unwrap();

        let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
        assert_eq!(result.distances[1], Some(3));
    }
}
