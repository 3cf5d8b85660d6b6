//! Core data structures: the bitset adjacency boundary, the distance matrix and
//! the graph snapshot that ties them together.

pub mod bits;
pub mod distance;
pub mod error;
pub mod snapshot;

pub use bits::{AdjacencyBits, BitGraph, GrowAdjacency};
pub use distance::{Dist, DistanceMatrix, INF};
pub use error::InputError;
pub use snapshot::Snapshot;
