//! Enumerate [one-vertex extensions] of a graph under a maximum degree bound.
//!
//! A new vertex is appended to the base graph and every subset of the existing
//! vertices is tried as its neighborhood, as long as no vertex (the new one
//! included) exceeds the bound. Each such extension is a [`Leaf`]: a settled
//! copy of the extended snapshot together with its [`Metrics`].
//!
//! See available parameters [here](ExtensionBuilder#implementations).
//!
//! The search mutates a single snapshot in place. Every edge it tries is
//! applied on entering a branch and undone when leaving it, however the branch
//! is left. Only leaves get their own copy, which is then settled with the
//! incremental shortest path update.
//!
//! Leaves are visited in a fixed order. Neighborhoods are generated in
//! lexicographic order of their sorted vertex lists and a neighborhood is
//! reported only after all of its supersets reachable by adding higher
//! vertices. For a base graph on vertices `0, 1, 2` the order is `{0, 1, 2}`,
//! `{0, 1}`, `{0, 2}`, `{0}`, `{1, 2}`, `{1}`, `{2}`. The extension by an
//! isolated vertex is never reported.
//!
//! [one-vertex extensions]:
//!     https://en.wikipedia.org/wiki/Degree_diameter_problem
//!
//! # Examples
//!
//! ```
//! use degdiam::{algo::Extension, core::{BitGraph, Snapshot}};
//!
//! // Path 0 - 1 - 2.
//! let base = Snapshot::from_graph(BitGraph::from_edges(3, [(0, 1), (1, 2)])).unwrap();
//!
//! let extension = Extension::on(&base).max_degree(2).collect().unwrap();
//!
//! // Vertex 1 is saturated, so it never becomes a neighbor of the new vertex.
//! let neighborhoods = extension
//!     .leaves()
//!     .iter()
//!     .map(|leaf| leaf.neighbors().to_vec())
//!     .collect::<Vec<_>>();
//!
//! assert_eq!(neighborhoods, vec![vec![0, 2], vec![0], vec![2]]);
//!
//! // The new vertex closing the cycle on four vertices.
//! let cycle = extension[0].metrics().unwrap();
//! assert_eq!((cycle.diameter, cycle.distance_sum), (2, 8));
//! ```

use std::ops::{ControlFlow, Index};

use thiserror::Error;
use tracing::trace;

use crate::core::{AdjacencyBits, Snapshot};

use super::metrics::Metrics;

mod builder;
mod guard;

pub use builder::ExtensionBuilder;

use guard::EdgeGuard;

/// Leaves collected by [`ExtensionBuilder::collect`], in visiting order.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct Extension<A> {
    leaves: Vec<Leaf<A>>,
    stats: Stats,
}

impl<A> Extension<A> {
    pub fn leaves(&self) -> &[Leaf<A>] {
        &self.leaves
    }

    pub fn into_leaves(self) -> Vec<Leaf<A>> {
        self.leaves
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }
}

impl<A> Index<usize> for Extension<A> {
    type Output = Leaf<A>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.leaves[index]
    }
}

/// One extended graph: the neighbors of the new vertex and the settled
/// snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf<A> {
    snapshot: Snapshot<A>,
    neighbors: Vec<usize>,
    metrics: Option<Metrics>,
}

impl<A> Leaf<A> {
    /// Snapshot of the extended graph with settled distances.
    pub fn snapshot(&self) -> &Snapshot<A> {
        &self.snapshot
    }

    pub fn into_snapshot(self) -> Snapshot<A> {
        self.snapshot
    }

    /// Neighbors of the new vertex, in increasing order.
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }

    /// Diameter and distance sum, or `None` if the extended graph is
    /// disconnected.
    pub fn metrics(&self) -> Option<Metrics> {
        self.metrics
    }
}

/// Counters of a finished (or stopped) search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of leaves handed to the visitor.
    pub leaves: usize,
    /// Number of edges that were not followed because they exceeded the
    /// degree bound.
    pub pruned: usize,
    /// Whether the visitor stopped the search before it finished.
    pub stopped: bool,
}

/// The error encountered when setting up an [`Extension`] search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A vertex of the base graph already has more neighbors than allowed.
    #[error("vertex {vertex} of the base graph has degree {degree} above the bound {bound}")]
    BaseExceedsBound {
        vertex: usize,
        degree: usize,
        bound: usize,
    },
}

/// State of a running search. Owns the live snapshot, which is only ever
/// changed through [`EdgeGuard`]s.
struct Search<A, F> {
    live: Snapshot<A>,
    bound: usize,
    neighbors: Vec<usize>,
    visitor: F,
    stats: Stats,
}

impl<A, F> Search<A, F>
where
    A: AdjacencyBits + Clone,
    F: FnMut(Leaf<A>) -> ControlFlow<()>,
{
    fn new(live: Snapshot<A>, bound: usize, visitor: F) -> Self {
        debug_assert_eq!(live.degree(live.last_vertex()), 0);

        Self {
            live,
            bound,
            neighbors: Vec::new(),
            visitor,
            stats: Stats::default(),
        }
    }

    /// Decides the edges between the new vertex and vertices `start..`, given
    /// the edges to lower vertices in `neighbors`.
    fn descend(&mut self, start: usize) -> ControlFlow<()> {
        let new_vertex = self.live.last_vertex();

        for v in start..new_vertex {
            let mut edge = EdgeGuard::apply(self, v);

            if edge.within_bound() {
                edge.descend(v + 1)?;
            } else {
                edge.stats.pruned += 1;
            }
        }

        if self.neighbors.is_empty() {
            ControlFlow::Continue(())
        } else {
            self.emit()
        }
    }

    fn emit(&mut self) -> ControlFlow<()> {
        let mut snapshot = self.live.clone();
        snapshot.settle();

        let metrics = snapshot.metrics();
        self.stats.leaves += 1;

        trace!(
            neighbors = ?self.neighbors,
            max_degree = snapshot.max_degree(),
            diameter = metrics.map(|m| m.diameter),
            distance_sum = metrics.map(|m| m.distance_sum),
            "leaf"
        );

        (self.visitor)(Leaf {
            snapshot,
            neighbors: self.neighbors.clone(),
            metrics,
        })
    }
}
