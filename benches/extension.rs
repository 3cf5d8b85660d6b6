mod common;

use std::ops::ControlFlow;

use common::{random_connected, RANDOM_SEED};
use degdiam::{
    algo::{Extension, ExtremalTally},
    core::Snapshot,
    infra::testing::petersen,
};
use fastrand::Rng;

fn main() {
    divan::main();
}

#[divan::bench(args = [3, 4, 5])]
fn petersen_bounded(bencher: divan::Bencher, bound: usize) {
    let base = Snapshot::from_graph(petersen()).unwrap();

    bencher.bench(|| {
        Extension::on(&base)
            .max_degree(bound)
            .run(|leaf| {
                divan::black_box(leaf.metrics());
                ControlFlow::Continue(())
            })
            .unwrap()
    });
}

#[divan::bench(consts = [12, 16, 20])]
fn random_bounded_tally<const N: usize>(bencher: divan::Bencher) {
    let graph = random_connected(N, 4, 0.2, &mut Rng::with_seed(RANDOM_SEED));
    let base = Snapshot::from_graph(graph).unwrap();

    bencher.bench(|| {
        let mut tally = ExtremalTally::new();
        Extension::on(&base)
            .max_degree(4)
            .run(|leaf| {
                tally.record(&leaf);
                ControlFlow::Continue(())
            })
            .unwrap();
        tally
    });
}
