//! Grows a graph one vertex at a time, always keeping the extension with the
//! smallest diameter and, among those, the smallest distance sum.
//!
//! Run with `RUST_LOG=degdiam=debug` to see the search statistics.

use std::{env, ops::ControlFlow};

use degdiam::{
    algo::{Extension, ExtremalTally},
    core::{AdjacencyBits, BitGraph, GrowAdjacency, Snapshot},
    infra::testing::create_cycle,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let max_degree = args.next().map(|arg| arg.parse::<usize>()).transpose()?.unwrap_or(3);
    let steps = args.next().map(|arg| arg.parse::<usize>()).transpose()?.unwrap_or(6);

    let mut graph: BitGraph = create_cycle(5);

    for step in 0..steps {
        let base = Snapshot::from_graph(graph.clone())?;
        let mut tally = ExtremalTally::new();

        let stats = Extension::on(&base)
            .max_degree(max_degree)
            .run(|leaf| {
                tally.record(&leaf);
                ControlFlow::Continue(())
            })?;

        let Some((diameter, best)) = tally.smallest_diameter() else {
            println!("step {step}: no connected extension within degree {max_degree}");
            break;
        };

        println!(
            "step {step}: {} vertices, {} leaves ({} pruned), diameter {diameter}, distance sum {}, neighbors {:?}",
            base.vertex_count() + 1,
            stats.leaves,
            stats.pruned,
            best.distance_sum,
            best.neighbors,
        );

        let last = base.vertex_count();
        graph = graph.grown();
        for &v in &best.neighbors {
            graph.add_edge(v, last);
        }
    }

    Ok(())
}
