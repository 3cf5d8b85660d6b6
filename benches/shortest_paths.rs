mod common;

use common::{random_connected, RANDOM_SEED};
use degdiam::{
    algo::{floyd_warshall, settle_last_vertex},
    core::{AdjacencyBits, BitGraph, DistanceMatrix, GrowAdjacency},
};
use fastrand::Rng;
use petgraph::graph::UnGraph;

fn main() {
    divan::main();
}

fn solved(graph: &BitGraph) -> DistanceMatrix {
    let mut distances = DistanceMatrix::from_adjacency(graph);
    floyd_warshall(&mut distances);
    distances
}

#[divan::bench(consts = [16, 64, 256])]
fn degdiam_floyd_warshall<const N: usize>(bencher: divan::Bencher) {
    let graph = random_connected(N, 5, 0.1, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| solved(&graph));
}

#[divan::bench(consts = [16, 64, 256])]
fn petgraph_floyd_warshall<const N: usize>(bencher: divan::Bencher) {
    let graph = random_connected(N, 5, 0.1, &mut Rng::with_seed(RANDOM_SEED));
    let edges = (0..N).flat_map(|u| {
        graph
            .neighbors(u)
            .filter(move |&v| u < v)
            .map(move |v| (u as u32, v as u32))
    });
    let graph = UnGraph::<(), ()>::from_edges(edges);

    bencher.bench(|| petgraph::algo::floyd_warshall(&graph, |_| 1u32));
}

// Distances of the graph with one more vertex joined to three random ones,
// from scratch and by settling the base distances.

#[divan::bench(consts = [16, 64, 256])]
fn extended_from_scratch<const N: usize>(bencher: divan::Bencher) {
    let mut rng = Rng::with_seed(RANDOM_SEED);
    let graph = random_connected(N, 5, 0.1, &mut rng);
    let neighbors = [rng.usize(0..N), rng.usize(0..N), rng.usize(0..N)];

    let mut grown = graph.grown();
    for v in neighbors {
        grown.add_edge(v, N);
    }

    bencher.bench(|| solved(&grown));
}

#[divan::bench(consts = [16, 64, 256])]
fn extended_settle<const N: usize>(bencher: divan::Bencher) {
    let mut rng = Rng::with_seed(RANDOM_SEED);
    let graph = random_connected(N, 5, 0.1, &mut rng);
    let neighbors = [rng.usize(0..N), rng.usize(0..N), rng.usize(0..N)];
    let base = solved(&graph);

    bencher
        .with_inputs(|| {
            let mut distances = base.extended();
            for v in neighbors {
                distances.set(v, N, 1);
            }
            distances
        })
        .bench_local_values(|mut distances| {
            settle_last_vertex(&mut distances);
            distances
        });
}
