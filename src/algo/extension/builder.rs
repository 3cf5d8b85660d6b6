use std::ops::ControlFlow;

use tracing::{debug, field, instrument, Span};

use crate::core::{GrowAdjacency, Snapshot};

use super::{Error, Extension, Leaf, Search, Stats};

pub struct ExtensionBuilder<'a, A> {
    base: &'a Snapshot<A>,
    max_degree: Option<usize>,
}

impl<A> Extension<A> {
    pub fn on(base: &Snapshot<A>) -> ExtensionBuilder<'_, A> {
        ExtensionBuilder {
            base,
            max_degree: None,
        }
    }
}

impl<'a, A> ExtensionBuilder<'a, A> {
    /// Bound on the degree of every vertex of the extended graph.
    ///
    /// Without a bound, all `2^n - 1` nonempty neighborhoods are visited.
    pub fn max_degree(self, bound: usize) -> Self {
        Self {
            max_degree: Some(bound),
            ..self
        }
    }
}

impl<'a, A> ExtensionBuilder<'a, A>
where
    A: GrowAdjacency + Clone,
{
    /// Runs the search, handing every leaf to `visitor` as soon as it is
    /// settled.
    ///
    /// Returning [`ControlFlow::Break`] from the visitor stops the search.
    #[instrument(level = "debug", skip_all, fields(vertices = field::Empty, bound = field::Empty))]
    pub fn run<F>(self, visitor: F) -> Result<Stats, Error>
    where
        F: FnMut(Leaf<A>) -> ControlFlow<()>,
    {
        let ExtensionBuilder { base, max_degree } = self;
        let bound = max_degree.unwrap_or(usize::MAX);

        let span = Span::current();
        span.record("vertices", base.vertex_count());
        if let Some(bound) = max_degree {
            span.record("bound", bound);
        }

        if let Some((vertex, &degree)) = base
            .degrees()
            .iter()
            .enumerate()
            .find(|&(_, &degree)| degree > bound)
        {
            return Err(Error::BaseExceedsBound {
                vertex,
                degree,
                bound,
            });
        }

        let mut search = Search::new(base.extend(), bound, visitor);
        let flow = search.descend(0);

        debug_assert!(search.neighbors.is_empty());
        debug_assert_eq!(search.live.degree(search.live.last_vertex()), 0);

        let stats = Stats {
            stopped: flow.is_break(),
            ..search.stats
        };

        debug!(
            leaves = stats.leaves,
            pruned = stats.pruned,
            stopped = stats.stopped,
            "extension search finished"
        );

        Ok(stats)
    }

    /// Runs the search to the end and keeps all leaves.
    pub fn collect(self) -> Result<Extension<A>, Error> {
        let mut leaves = Vec::new();

        let stats = self.run(|leaf| {
            leaves.push(leaf);
            ControlFlow::Continue(())
        })?;

        Ok(Extension { leaves, stats })
    }
}
