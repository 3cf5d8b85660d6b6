//! Distances of small undirected graphs under one-vertex extension.
//!
//! The crate keeps an all-pairs distance matrix of a base graph, appends a
//! vertex to it and walks every neighborhood of that vertex allowed by a
//! degree bound. Each neighborhood is applied and undone in place, so only the
//! leaves handed to the caller are ever cloned. For each leaf, the distances
//! are settled incrementally instead of from scratch and the diameter and
//! distance sum are reported.
//!
//! ```
//! use std::ops::ControlFlow;
//!
//! use degdiam::prelude::*;
//!
//! // Cycle on five vertices.
//! let graph = BitGraph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);
//! let base = Snapshot::from_graph(graph).unwrap();
//!
//! let mut tally = ExtremalTally::new();
//! let stats = Extension::on(&base)
//!     .max_degree(3)
//!     .run(|leaf| {
//!         tally.record(&leaf);
//!         ControlFlow::Continue(())
//!     })
//!     .unwrap();
//!
//! // Every vertex of the cycle has room for one more edge, so the only limit
//! // is the degree of the new vertex: 5 + 10 + 10 neighborhoods.
//! assert_eq!(stats.leaves, 25);
//! assert_eq!(tally.smallest_diameter().map(|(d, _)| d), Some(2));
//! ```

pub mod algo;
pub mod core;
pub mod infra;

pub mod prelude {
    pub use crate::{
        algo::{Extension, ExtremalTally, Leaf, Metrics},
        core::{AdjacencyBits, BitGraph, DistanceMatrix, Snapshot},
    };
}
