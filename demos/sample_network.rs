use sssp_count::graph::{Graph, WeightedGraph};
use sssp_count::{CountingDijkstra, Dijkstra, PathCountingAlgorithm, ShortestPathAlgorithm};

fn main() {
    env_logger::init();

    // Undirected sample network: 8 vertices, 10 logical edges
    let mut graph: WeightedGraph<u64> = WeightedGraph::new(8);
    graph
        .add_undirected(vec![
            (0, 1, 1),
            (0, 2, 7),
            (0, 3, 2),
            (1, 4, 2),
            (1, 5, 4),
            (2, 5, 2),
            (2, 6, 3),
            (3, 6, 5),
            (5, 7, 6),
            (6, 7, 2),
        ])
        .expect("sample edges are valid");

    let source = 0;
    println!(
        "Graph has {} vertices and {} directed edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let dijkstra = Dijkstra::new();
    let distances = dijkstra
        .compute_shortest_paths(&graph, source)
        .expect("source is in range");

    println!("\nMinimum cost from vertex {} to each vertex:", source);
    for (vertex, distance) in distances.distances.iter().enumerate() {
        match distance {
            Some(cost) => println!("  Vertex {}: {}", vertex, cost),
            None => println!("  Vertex {}: unreachable", vertex),
        }
    }

    let counting = CountingDijkstra::new();
    let counted = counting
        .compute_path_counts(&graph, source)
        .expect("source is in range");

    println!("\nNumber of minimum-cost routes to each vertex (mod 1e9+7):");
    for (vertex, count) in counted.counts.iter().enumerate() {
        println!("  Vertex {}: {}", vertex, count);
    }
}
