#![no_main]

use std::ops::ControlFlow;

use libfuzzer_sys::fuzz_target;

use degdiam::{
    algo::{floyd_warshall, Extension},
    core::{DistanceMatrix, Snapshot},
    infra::{arbitrary::ExtensionCase, testing::check_consistency},
};

fuzz_target!(|case: ExtensionCase| {
    let base = Snapshot::from_graph(case.base()).unwrap();
    let bound = case.bound(base.max_degree());

    Extension::on(&base)
        .max_degree(bound)
        .run(|leaf| {
            let snapshot = leaf.snapshot();
            check_consistency(snapshot)
                .as_ref()
                .map_err(ToString::to_string)
                .unwrap();

            let mut full = DistanceMatrix::from_adjacency(snapshot.adjacency());
            floyd_warshall(&mut full);
            assert_eq!(&full, snapshot.distances());
            assert!(snapshot.max_degree() <= bound);

            ControlFlow::Continue(())
        })
        .unwrap();
});
