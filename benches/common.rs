#![allow(dead_code)]

use degdiam::core::{AdjacencyBits, BitGraph};
use fastrand::Rng;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

/// Geometric skipping over the pairs `(v, w)` with `w < v`, each pair being
/// chosen with probability `p`.
pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_count: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_count,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n {
            Some((*v, *w))
        } else {
            None
        }
    }
}

/// Random graph with edges dropped whenever they would push an endpoint above
/// `max_degree`.
pub fn random_bounded(
    vertex_count: usize,
    max_degree: usize,
    density: f32,
    rng: &mut Rng,
) -> BitGraph {
    let mut graph = BitGraph::new(vertex_count);
    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        if graph.degree(u) < max_degree && graph.degree(v) < max_degree {
            graph.add_edge(u, v);
        }
    }

    graph
}

/// Random graph that has a path through all vertices, so that it is
/// connected.
pub fn random_connected(
    vertex_count: usize,
    max_degree: usize,
    density: f32,
    rng: &mut Rng,
) -> BitGraph {
    let mut graph = random_bounded(vertex_count, max_degree.saturating_sub(2), density, rng);

    for v in 1..vertex_count {
        graph.add_edge(v - 1, v);
    }

    graph
}
