//! Compact bitset adjacency of a simple undirected graph.
//!
//! The enumeration and the shortest path engine only ever talk to the
//! adjacency through [`AdjacencyBits`] (and [`GrowAdjacency`] when a vertex is
//! appended), so the storage layout stays an implementation detail of the type
//! behind it. [`BitGraph`] is the provided implementation. It keeps one
//! word-aligned row per vertex, which is the layout used by graph
//! canonicalization libraries (`setword` rows), and converts from and to that
//! representation with [`BitGraph::from_words`] and [`BitGraph::to_words`].

use fixedbitset::FixedBitSet;

use super::error::InputError;

/// Number of bits in one word of a row.
pub const WORD_BITS: usize = u64::BITS as usize;

/// Minimal capability set of an adjacency structure.
///
/// Implementations must keep the relation symmetric: `add_edge(u, v)` and
/// `remove_edge(u, v)` affect both `(u, v)` and `(v, u)`.
pub trait AdjacencyBits {
    fn vertex_count(&self) -> usize;

    /// Tests the bit `v` in the row of `u`.
    fn has_edge(&self, u: usize, v: usize) -> bool;

    fn add_edge(&mut self, u: usize, v: usize);

    fn remove_edge(&mut self, u: usize, v: usize);

    fn degree(&self, v: usize) -> usize {
        (0..self.vertex_count())
            .filter(|&u| u != v && self.has_edge(v, u))
            .count()
    }
}

/// Adjacency structures that can be extended by a vertex.
pub trait GrowAdjacency: AdjacencyBits + Sized {
    /// Returns a copy of the graph with one more vertex that has no edges.
    fn grown(&self) -> Self;
}

/// Number of words in a row of a graph with `vertex_count` vertices.
pub fn words_per_row(vertex_count: usize) -> usize {
    vertex_count.div_ceil(WORD_BITS)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitGraph {
    vertex_count: usize,
    // Row stride in bits, always a multiple of `WORD_BITS`.
    stride: usize,
    bits: FixedBitSet,
}

impl BitGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        let stride = words_per_row(vertex_count) * WORD_BITS;
        Self {
            vertex_count,
            stride,
            bits: FixedBitSet::with_capacity(vertex_count * stride),
        }
    }

    /// Creates a graph from a list of undirected edges.
    ///
    /// # Panics
    ///
    /// Panics if an endpoint is out of range.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new(vertex_count);
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Reads row-major word rows, `words_per_row(vertex_count)` words per row,
    /// with the bit of column `j` at position `63 - j % 64` of word `j / 64`.
    ///
    /// Padding bits past `vertex_count` are ignored. The rows are taken as
    /// they are, so asymmetric input or self-loops are representable and left
    /// for [`Snapshot::from_graph`](crate::core::Snapshot::from_graph) to
    /// reject.
    pub fn from_words(vertex_count: usize, words: &[u64]) -> Result<Self, InputError> {
        let m = words_per_row(vertex_count);
        if words.len() != vertex_count * m {
            return Err(InputError::WordCount {
                vertex_count,
                expected: vertex_count * m,
                actual: words.len(),
            });
        }

        let mut graph = Self::new(vertex_count);

        for (u, row) in words.chunks(m.max(1)).enumerate().take(vertex_count) {
            for (w, word) in row.iter().enumerate() {
                for b in 0..WORD_BITS {
                    let v = w * WORD_BITS + b;
                    if v < vertex_count && word & (1u64 << (WORD_BITS - 1 - b)) != 0 {
                        graph.bits.insert(graph.position(u, v));
                    }
                }
            }
        }

        Ok(graph)
    }

    /// Inverse of [`from_words`](BitGraph::from_words).
    pub fn to_words(&self) -> Vec<u64> {
        let m = words_per_row(self.vertex_count);
        let mut words = vec![0; self.vertex_count * m];

        for u in 0..self.vertex_count {
            for v in self.neighbors(u) {
                words[u * m + v / WORD_BITS] |= 1u64 << (WORD_BITS - 1 - v % WORD_BITS);
            }
        }

        words
    }

    /// Iterates over the set bits of the row of `u` in increasing order.
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.vertex_count).filter(move |&v| self.has_edge(u, v))
    }

    /// Total number of set bits divided by two.
    pub fn edge_count(&self) -> usize {
        self.bits.count_ones(..) / 2
    }

    fn position(&self, u: usize, v: usize) -> usize {
        assert!(
            u < self.vertex_count && v < self.vertex_count,
            "({u}, {v}) out of range for {} vertices",
            self.vertex_count
        );
        u * self.stride + v
    }
}

impl AdjacencyBits for BitGraph {
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.bits.contains(self.position(u, v))
    }

    fn add_edge(&mut self, u: usize, v: usize) {
        debug_assert_ne!(u, v, "self-loops are not allowed");

        let (uv, vu) = (self.position(u, v), self.position(v, u));
        self.bits.insert(uv);
        self.bits.insert(vu);
    }

    fn remove_edge(&mut self, u: usize, v: usize) {
        let (uv, vu) = (self.position(u, v), self.position(v, u));
        self.bits.set(uv, false);
        self.bits.set(vu, false);
    }

    fn degree(&self, v: usize) -> usize {
        let start = self.position(v, 0);
        self.bits.count_ones(start..start + self.vertex_count)
    }
}

impl GrowAdjacency for BitGraph {
    fn grown(&self) -> Self {
        let mut next = Self::new(self.vertex_count + 1);

        for index in self.bits.ones() {
            let (u, v) = (index / self.stride, index % self.stride);
            let position = next.position(u, v);
            next.bits.insert(position);
        }

        next
    }
}
