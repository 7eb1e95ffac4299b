use rand::prelude::*;

use crate::graph::WeightedGraph;

/// Generates a connected random graph with `n` vertices and roughly `extra`
/// additional edges beyond the spanning tree, with costs in `1..=max_cost`.
///
/// Every vertex `v > 0` gets an edge from some earlier vertex, so the whole
/// graph is reachable from vertex 0. Used by tests and benchmarks.
pub fn random_connected_graph(n: usize, extra: usize, max_cost: u64) -> WeightedGraph<u64> {
    assert!(n > 0, "n must be positive");
    assert!(max_cost > 0, "max_cost must be positive");

    let mut graph = WeightedGraph::new(n);
    let mut rng = rand::thread_rng();

    for v in 1..n {
        let parent = rng.gen_range(0..v);
        let cost = rng.gen_range(1..=max_cost);
        graph
            .add_edge(parent, v, cost)
            .expect("endpoints are in range by construction");
    }

    for _ in 0..extra {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        let cost = rng.gen_range(1..=max_cost);
        graph
            .add_edge(from, to, cost)
            .expect("endpoints are in range by construction");
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn generated_graph_has_requested_size() {
        let graph = random_connected_graph(50, 100, 10);
        assert_eq!(graph.vertex_count(), 50);
        assert_eq!(graph.edge_count(), 49 + 100);
    }
}
