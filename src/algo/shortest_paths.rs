//! All-pairs shortest paths over a [`DistanceMatrix`] of an unweighted graph.
//!
//! Two ways of settling a matrix are provided:
//!
//! * [`floyd_warshall`] solves a matrix from scratch in O(n³). It is used once,
//!   when a snapshot of the base graph is built.
//! * [`settle_last_vertex`] solves a matrix in O(n²) provided that only the
//!   last vertex is new, i.e., all distances among the other vertices are
//!   already exact and the last row contains only its direct edges. This is
//!   what makes evaluating every leaf of the extension search affordable.
//!
//! Both always write `(i, j)` and `(j, i)` together.
//!
//! # Examples
//!
//! ```
//! use degdiam::{
//!     algo::shortest_paths::{floyd_warshall, settle_last_vertex},
//!     core::{BitGraph, DistanceMatrix},
//! };
//!
//! // Cycle on five vertices, the last one closing it.
//! let graph = BitGraph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);
//!
//! let mut full = DistanceMatrix::from_adjacency(&graph);
//! floyd_warshall(&mut full);
//!
//! // Settle the path 0 - 1 - 2 - 3 first, then add vertex 4 incrementally.
//! let path = BitGraph::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
//! let mut incremental = DistanceMatrix::from_adjacency(&path).extended();
//! floyd_warshall(&mut incremental);
//! incremental.set(3, 4, 1);
//! incremental.set(0, 4, 1);
//! settle_last_vertex(&mut incremental);
//!
//! assert_eq!(full, incremental);
//! assert_eq!(full.get(0, 3), 2);
//! ```

use crate::core::distance::{Dist, DistanceMatrix, INF};

/// Settles the whole matrix by relaxing every pair through every vertex.
///
/// A single pass over all intermediate vertices in order is sufficient for
/// non-negative lengths.
pub fn floyd_warshall(distances: &mut DistanceMatrix) {
    let n = distances.vertex_count();

    for k in 0..n {
        for i in 0..n {
            let ik = distances.get(i, k);
            if ik == INF {
                continue;
            }

            for j in (i + 1)..n {
                let via = ik + distances.get(k, j);
                if via < distances.get(i, j) {
                    distances.set(i, j, via);
                }
            }
        }
    }
}

/// Settles the distances of the last vertex and relaxes all other pairs
/// through it.
///
/// The leading `(n - 1) × (n - 1)` block must be settled and the distances of
/// the last vertex must be 1 for its neighbors and [`INF`] otherwise. Pairs
/// that stay unreachable keep [`INF`].
pub fn settle_last_vertex(distances: &mut DistanceMatrix) {
    let n = distances.vertex_count();
    if n < 2 {
        return;
    }

    let last = n - 1;

    let neighbors = (0..last)
        .filter(|&j| distances.get(last, j) == 1)
        .collect::<Vec<_>>();

    debug_assert!(
        (0..last).all(|j| matches!(distances.get(last, j), 1 | INF)),
        "last vertex must only carry direct edges"
    );

    // Any shortest path from the last vertex leaves through one of its
    // neighbors and never comes back.
    for i in 0..last {
        if distances.get(i, last) != INF {
            continue;
        }

        let dist = neighbors
            .iter()
            .map(|&j| distances.get(j, i) + 1)
            .min()
            .map_or(INF, |dist: Dist| dist.min(INF));

        distances.set(i, last, dist);
    }

    for i in 0..last {
        let il = distances.get(i, last);
        if il == INF {
            continue;
        }

        for j in (i + 1)..last {
            let via = il + distances.get(last, j);
            if via < distances.get(i, j) {
                distances.set(i, j, via);
            }
        }
    }
}
