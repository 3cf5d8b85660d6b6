use thiserror::Error;

/// Rejected base graph at the input boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("graph has no vertices")]
    Empty,

    #[error("self-loop at vertex {0}")]
    SelfLoop(usize),

    #[error("adjacency is not symmetric at ({0}, {1})")]
    Asymmetric(usize, usize),

    #[error("expected {expected} words for {vertex_count} vertices, got {actual}")]
    WordCount {
        vertex_count: usize,
        expected: usize,
        actual: usize,
    },
}
