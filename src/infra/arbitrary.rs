use arbitrary::Arbitrary;

use crate::core::{AdjacencyBits, BitGraph};

/// Largest base graph generated, to keep the number of leaves manageable.
pub const MAX_VERTICES: usize = 10;

#[derive(Debug, Arbitrary, Clone)]
pub struct ExtensionCase {
    vertex_count: u8,
    edges: Vec<(u8, u8)>,
    slack: u8,
}

impl ExtensionCase {
    /// Base graph on 1 to [`MAX_VERTICES`] vertices. Endpoints are taken
    /// modulo the vertex count and self-loops are skipped.
    pub fn base(&self) -> BitGraph {
        let n = usize::from(self.vertex_count) % MAX_VERTICES + 1;
        let mut graph = BitGraph::new(n);

        for &(u, v) in &self.edges {
            let (u, v) = (usize::from(u) % n, usize::from(v) % n);
            if u != v {
                graph.add_edge(u, v);
            }
        }

        graph
    }

    /// Degree bound given the maximum degree of the base graph, between the
    /// base maximum and two more.
    pub fn bound(&self, base_max_degree: usize) -> usize {
        base_max_degree + usize::from(self.slack % 3)
    }
}

#[cfg(test)]
mod tests {
    use arbitrary::Unstructured;

    use super::*;

    #[test]
    fn base_has_no_loops() {
        let data = (0u8..=255).collect::<Vec<_>>();
        let mut u = Unstructured::new(&data);
        let case = ExtensionCase::arbitrary(&mut u).unwrap();
        let graph = case.base();

        assert!((1..=MAX_VERTICES).contains(&graph.vertex_count()));
        for v in 0..graph.vertex_count() {
            assert!(!graph.has_edge(v, v));
        }
    }
}
