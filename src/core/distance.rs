//! Square matrix of pairwise distances with an "unreachable" sentinel.

use std::fmt;

use super::bits::AdjacencyBits;

/// Path length in edges.
pub type Dist = u32;

/// Distance of a pair with no known path.
///
/// Chosen so that `INF + INF` does not overflow and any sum involving `INF` is
/// at least `INF`. Relaxation therefore never replaces a stored distance (all
/// of which are at most `INF`) by a path through an unreachable pair.
pub const INF: Dist = Dist::MAX / 2;

/// Symmetric `n × n` distance matrix stored row by row.
///
/// Writes always go to both `(i, j)` and `(j, i)`, so the matrix cannot become
/// asymmetric through its public interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    vertex_count: usize,
    data: Vec<Dist>,
}

impl DistanceMatrix {
    /// Matrix where every vertex is at distance 0 from itself and unreachable
    /// from the others.
    pub fn unreachable(vertex_count: usize) -> Self {
        let mut data = vec![INF; vertex_count * vertex_count];
        for i in 0..vertex_count {
            data[i * vertex_count + i] = 0;
        }
        Self { vertex_count, data }
    }

    /// Initial, unsettled matrix of a graph: 1 for adjacent pairs, [`INF`]
    /// otherwise.
    pub fn from_adjacency<A: AdjacencyBits>(adjacency: &A) -> Self {
        let n = adjacency.vertex_count();
        let mut matrix = Self::unreachable(n);

        for i in 0..n {
            for j in (i + 1)..n {
                if adjacency.has_edge(i, j) {
                    matrix.set(i, j, 1);
                }
            }
        }

        matrix
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn get(&self, i: usize, j: usize) -> Dist {
        self.data[self.index(i, j)]
    }

    /// Sets the distance of the pair, on both sides.
    pub fn set(&mut self, i: usize, j: usize, dist: Dist) {
        debug_assert!(dist <= INF, "distance {dist} above the sentinel");
        let (ij, ji) = (self.index(i, j), self.index(j, i));
        self.data[ij] = dist;
        self.data[ji] = dist;
    }

    pub fn row(&self, i: usize) -> &[Dist] {
        let start = self.index(i, 0);
        &self.data[start..start + self.vertex_count]
    }

    /// Copy with one more vertex appended, unreachable from all others.
    pub fn extended(&self) -> Self {
        let n = self.vertex_count;
        let mut next = Self::unreachable(n + 1);

        for i in 0..n {
            let start = next.index(i, 0);
            next.data[start..start + n].copy_from_slice(self.row(i));
        }

        next
    }

    /// Iterates over unordered pairs `(i, j, dist)` with `i < j`.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize, Dist)> + '_ {
        (0..self.vertex_count)
            .flat_map(move |i| ((i + 1)..self.vertex_count).map(move |j| (i, j, self.get(i, j))))
    }

    pub fn is_symmetric(&self) -> bool {
        self.pairs().all(|(i, j, dist)| self.get(j, i) == dist)
    }

    fn index(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.vertex_count && j < self.vertex_count,
            "({i}, {j}) out of range for {} vertices",
            self.vertex_count
        );
        i * self.vertex_count + j
    }
}

impl fmt::Display for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.vertex_count {
            for (j, &dist) in self.row(i).iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                if dist == INF {
                    f.write_str("-")?;
                } else {
                    write!(f, "{dist}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
