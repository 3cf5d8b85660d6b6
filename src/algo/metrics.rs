//! Diameter and distance sum of a settled distance matrix.
//!
//! A pair at distance [`INF`] means the graph is disconnected. Such graphs
//! have neither a finite diameter nor a finite distance sum, so all functions
//! here return `None` for them instead of folding the sentinel into the
//! result.

use crate::core::distance::{Dist, DistanceMatrix, INF};

/// Metrics of a connected graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Metrics {
    /// Largest distance over all pairs.
    pub diameter: Dist,
    /// Sum of distances over all unordered pairs (the Wiener index).
    pub distance_sum: u64,
}

impl Metrics {
    /// Computes both metrics in a single scan, `None` if disconnected.
    pub fn of(distances: &DistanceMatrix) -> Option<Self> {
        let mut diameter = 0;
        let mut distance_sum = 0;

        for (_, _, dist) in distances.pairs() {
            if dist == INF {
                return None;
            }
            diameter = diameter.max(dist);
            distance_sum += u64::from(dist);
        }

        Some(Self {
            diameter,
            distance_sum,
        })
    }
}

pub fn diameter(distances: &DistanceMatrix) -> Option<Dist> {
    distances
        .pairs()
        .map(|(_, _, dist)| (dist != INF).then_some(dist))
        .try_fold(0, |max, dist| dist.map(|dist| max.max(dist)))
}

pub fn distance_sum(distances: &DistanceMatrix) -> Option<u64> {
    distances
        .pairs()
        .map(|(_, _, dist)| (dist != INF).then_some(u64::from(dist)))
        .sum()
}

#[cfg(test)]
mod tests {
    use crate::{
        algo::shortest_paths::floyd_warshall,
        core::BitGraph,
        infra::testing::petersen,
    };

    use super::*;

    fn solved(graph: &BitGraph) -> DistanceMatrix {
        let mut distances = DistanceMatrix::from_adjacency(graph);
        floyd_warshall(&mut distances);
        distances
    }

    #[test]
    fn path_with_pendant() {
        // Path 3 - 0 - 1 - 2.
        let distances = solved(&BitGraph::from_edges(4, [(0, 1), (1, 2), (0, 3)]));

        assert_eq!(diameter(&distances), Some(3));
        assert_eq!(distance_sum(&distances), Some(10));
        assert_eq!(
            Metrics::of(&distances),
            Some(Metrics {
                diameter: 3,
                distance_sum: 10
            })
        );
    }

    #[test]
    fn petersen_metrics() {
        let distances = solved(&petersen());

        // 15 pairs at distance 1, 30 at distance 2.
        assert_eq!(
            Metrics::of(&distances),
            Some(Metrics {
                diameter: 2,
                distance_sum: 75
            })
        );
    }

    #[test]
    fn single_vertex() {
        let distances = DistanceMatrix::unreachable(1);

        assert_eq!(
            Metrics::of(&distances),
            Some(Metrics {
                diameter: 0,
                distance_sum: 0
            })
        );
    }

    #[test]
    fn disconnected_is_none() {
        let distances = solved(&BitGraph::from_edges(3, [(0, 1)]));

        assert_eq!(diameter(&distances), None);
        assert_eq!(distance_sum(&distances), None);
        assert_eq!(Metrics::of(&distances), None);
    }

    #[test]
    fn idempotent() {
        let distances = solved(&BitGraph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4)]));

        let first = Metrics::of(&distances);
        let second = Metrics::of(&distances);

        assert_eq!(first, second);
        assert_eq!(first.map(|m| m.diameter), diameter(&distances));
        assert_eq!(first.map(|m| m.distance_sum), distance_sum(&distances));
    }
}
