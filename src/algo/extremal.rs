//! Keep the extremal leaves of an extension search.
//!
//! Degree/diameter searches look for graphs with a given diameter that are as
//! dense as possible in terms of distances, i.e., have the smallest distance
//! sum. [`ExtremalTally`] counts leaves per diameter and remembers the best
//! one for each.
//!
//! # Examples
//!
//! ```
//! use std::ops::ControlFlow;
//!
//! use degdiam::{
//!     algo::{Extension, ExtremalTally},
//!     core::{BitGraph, Snapshot},
//! };
//!
//! let base = Snapshot::from_graph(BitGraph::from_edges(3, [(0, 1), (1, 2)])).unwrap();
//! let mut tally = ExtremalTally::new();
//!
//! Extension::on(&base)
//!     .run(|leaf| {
//!         tally.record(&leaf);
//!         ControlFlow::Continue(())
//!     })
//!     .unwrap();
//!
//! let (diameter, best) = tally.smallest_diameter().unwrap();
//! assert_eq!(diameter, 2);
//! assert_eq!(best.neighbors, vec![0, 1, 2]);
//! ```

use rustc_hash::FxHashMap;

use crate::core::{AdjacencyBits, Dist};

use super::extension::Leaf;

/// Summary of a leaf worth keeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub neighbors: Vec<usize>,
    pub distance_sum: u64,
    pub max_degree: usize,
    pub edge_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    count: usize,
    best: Record,
}

#[derive(Debug, Clone, Default)]
pub struct ExtremalTally {
    by_diameter: FxHashMap<Dist, Entry>,
    disconnected: usize,
}

impl ExtremalTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accounts for a leaf. On equal distance sums the earlier leaf is kept.
    pub fn record<A: AdjacencyBits>(&mut self, leaf: &Leaf<A>) {
        let Some(metrics) = leaf.metrics() else {
            self.disconnected += 1;
            return;
        };

        let snapshot = leaf.snapshot();
        let record = || Record {
            neighbors: leaf.neighbors().to_vec(),
            distance_sum: metrics.distance_sum,
            max_degree: snapshot.max_degree(),
            edge_count: snapshot.edge_count(),
        };

        match self.by_diameter.entry(metrics.diameter) {
            std::collections::hash_map::Entry::Occupied(mut slot) => {
                let entry = slot.get_mut();
                entry.count += 1;
                if metrics.distance_sum < entry.best.distance_sum {
                    entry.best = record();
                }
            }
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(Entry {
                    count: 1,
                    best: record(),
                });
            }
        }
    }

    /// Number of connected leaves with the given diameter.
    pub fn count(&self, diameter: Dist) -> usize {
        self.by_diameter
            .get(&diameter)
            .map_or(0, |entry| entry.count)
    }

    /// Leaf with the smallest distance sum among those with the given diameter.
    pub fn best(&self, diameter: Dist) -> Option<&Record> {
        self.by_diameter.get(&diameter).map(|entry| &entry.best)
    }

    pub fn disconnected(&self) -> usize {
        self.disconnected
    }

    /// Diameters seen so far, in increasing order.
    pub fn diameters(&self) -> Vec<Dist> {
        let mut diameters = self.by_diameter.keys().copied().collect::<Vec<_>>();
        diameters.sort_unstable();
        diameters
    }

    pub fn smallest_diameter(&self) -> Option<(Dist, &Record)> {
        self.by_diameter
            .iter()
            .min_by_key(|(&diameter, _)| diameter)
            .map(|(&diameter, entry)| (diameter, &entry.best))
    }
}
