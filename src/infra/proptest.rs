use proptest::{collection::vec, prelude::*};

use crate::core::{AdjacencyBits, BitGraph};

/// Random graphs with 1 to `max_vertices` vertices in which no vertex has
/// more than `max_degree` neighbors.
///
/// Every pair is proposed with probability 1/2, in lexicographic order, and
/// accepted only if neither endpoint is saturated yet. Shrinking drops
/// proposed edges and vertices.
pub fn bounded_graph(max_vertices: usize, max_degree: usize) -> impl Strategy<Value = BitGraph> {
    assert!(max_vertices > 0, "graph needs at least one vertex");

    (1..=max_vertices)
        .prop_flat_map(|n| (Just(n), vec(any::<bool>(), n * (n - 1) / 2)))
        .prop_map(move |(n, proposed)| {
            let mut graph = BitGraph::new(n);
            let mut degrees = vec![0; n];

            let pairs = (0..n).flat_map(|u| ((u + 1)..n).map(move |v| (u, v)));

            for ((u, v), _) in pairs.zip(proposed).filter(|(_, keep)| *keep) {
                if degrees[u] < max_degree && degrees[v] < max_degree {
                    graph.add_edge(u, v);
                    degrees[u] += 1;
                    degrees[v] += 1;
                }
            }

            graph
        })
}
