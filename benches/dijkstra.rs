use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sssp_count::graph::generators::random_connected_graph;
use sssp_count::{CountingDijkstra, Dijkstra, PathCountingAlgorithm, ShortestPathAlgorithm};

fn bench_shortest_paths(c: &mut Criterion) {
    let graph = random_connected_graph(10_000, 40_000, 100);
    let dijkstra = Dijkstra::new();

    c.bench_function("dijkstra_10k_vertices", |b| {
        b.iter(|| {
            dijkstra
                .compute_shortest_paths(black_box(&graph), 0)
                .unwrap()
        })
    });
}

fn bench_path_counts(c: &mut Criterion) {
    let graph = random_connected_graph(10_000, 40_000, 100);
    let counting = CountingDijkstra::new();

    c.bench_function("counting_dijkstra_10k_vertices", |b| {
        b.iter(|| counting.compute_path_counts(black_box(&graph), 0).unwrap())
    });
}

criterion_group!(benches, bench_shortest_paths, bench_path_counts);
criterion_main!(benches);
