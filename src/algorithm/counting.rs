use log::debug;

use crate::algorithm::{PathCountResult, PathCountingAlgorithm, MODULUS};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::{Cost, Graph};
use crate::{Error, Result};

/// Dijkstra variant that counts minimum-cost paths alongside distances.
///
/// The traversal is the same lazy-deletion loop as [`Dijkstra`], run as an
/// independent query (it does not reuse a prior distance result). When a
/// relaxation strictly improves a vertex's distance, the vertex's path count
/// is reset to the count of the improving predecessor; when it exactly ties,
/// the predecessor's count is accumulated modulo [`MODULUS`].
///
/// [`Dijkstra`]: crate::algorithm::dijkstra::Dijkstra
#[derive(Debug, Default)]
pub struct CountingDijkstra;

impl CountingDijkstra {
    /// Creates a new counting Dijkstra algorithm instance
    pub fn new() -> Self {
        CountingDijkstra
    }
}

impl<W, G> PathCountingAlgorithm<W, G> for CountingDijkstra
where
    W: Cost,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "CountingDijkstra"
    }

    fn compute_path_counts(&self, graph: &G, source: usize) -> Result<PathCountResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();

        let mut distances: Vec<Option<W>> = vec![None; n];
        distances[source] = Some(W::zero());

        // The empty path to the source counts once; everything else starts
        // unreached with count 0
        let mut counts: Vec<u64> = vec![0; n];
        counts[source] = 1;

        let mut queue = BinaryHeapWrapper::new();
        queue.push(source, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            if let Some(best) = distances[u] {
                if best < dist_u {
                    continue;
                }
            }

            for (v, cost) in graph.outgoing_edges(u) {
                let candidate = dist_u + cost;

                match distances[v] {
                    Some(best) if candidate == best => {
                        counts[v] = (counts[v] + counts[u]) % MODULUS;
                    }
                    Some(best) if candidate > best => {}
                    _ => {
                        // Strictly better (or first) path: the old count no
                        // longer describes a minimum-cost path, so it is
                        // replaced rather than accumulated
                        distances[v] = Some(candidate);
                        counts[v] = counts[u];
                        queue.push(v, candidate);
                    }
                }
            }
        }

        debug!(
            "counting dijkstra: source {} over {} vertices, {} reachable",
            source,
            n,
            distances.iter().filter(|d| d.is_some()).count()
        );

        Ok(PathCountResult {
            distances,
            counts,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WeightedGraph;

    #[test]
    fn source_counts_one_empty_path() {
        let mut graph: WeightedGraph<u64> = WeightedGraph::new(2);
        graph.add_edge(0, 1, 1).unwrap();

        let result = CountingDijkstra::new()
            .compute_path_counts(&graph, 0)
            .unwrap();
        assert_eq!(result.counts[0], 1);
        assert_eq!(result.counts[1], 1);
    }

    #[test]
    fn tie_accumulates_counts() {
        // Two routes of cost 2 to vertex 2: direct and via vertex 1
        let mut graph: WeightedGraph<u64> = WeightedGraph::new(3);
        graph
            .add_directed(vec![(0, 1, 1), (0, 2, 2), (1, 2, 1)])
            .unwrap();

        let result = CountingDijkstra::new()
            .compute_path_counts(&graph, 0)
            .unwrap();
        assert_eq!(result.distances[2], Some(2));
        assert_eq!(result.counts[2], 2);
    }

    #[test]
    fn late_cheaper_edge_resets_the_count() {
        // Two parallel edges of cost 5 accumulate a count of 2, then the
        // cost-3 edge strictly improves the distance and the stale count
        // must be discarded, not kept
        let mut graph: WeightedGraph<u64> = WeightedGraph::new(2);
        graph
            .add_directed(vec![(0, 1, 5), (0, 1, 5), (0, 1, 3)])
            .unwrap();

        let result = CountingDijkstra::new()
            .compute_path_counts(&graph, 0)
            .unwrap();
        assert_eq!(result.distances[1], Some(3));
        assert_eq!(result.counts[1], 1);
    }

    #[test]
    fn unreachable_vertex_counts_zero() {
        let mut graph: WeightedGraph<u64> = WeightedGraph::new(3);
        graph.add_edge(0, 1, 1).unwrap();

        let result = CountingDijkstra::new()
            .compute_path_counts(&graph, 0)
            .unwrap();
        assert_eq!(result.distances[2], None);
        assert_eq!(result.counts[2], 0);
    }
}
