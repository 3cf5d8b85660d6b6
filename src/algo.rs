pub mod extension;
pub mod extremal;
pub mod metrics;
pub mod shortest_paths;

pub use extension::{Extension, Leaf, Stats};
pub use extremal::ExtremalTally;
pub use metrics::Metrics;
pub use shortest_paths::{floyd_warshall, settle_last_vertex};
