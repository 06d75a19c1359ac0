use polars::prelude::Expr;

use crate::args::{Args, Grouping};
use crate::tibble::dispatch::{dispatch, prepare, Verb};
use crate::{Result, Tibble};

/// A `Tibble` paired with group keys, as returned by [`Tibble::group_by`].
///
/// Its verbs compute per group and return an ungrouped `Tibble`.
#[derive(Debug, Clone)]
pub struct GroupedTibble {
    tibble: Tibble,
    grouping: Grouping,
}

impl GroupedTibble {
    pub(crate) fn new(tibble: Tibble, grouping: Grouping) -> Self {
        Self { tibble, grouping }
    }

    /// Group key expressions.
    pub fn keys(&self) -> &[Expr] {
        self.grouping.keys()
    }

    /// Keep rows where all predicates hold, evaluating them within each group.
    ///
    /// Row order is preserved.
    pub fn filter(&self, args: impl Into<Args>) -> Result<Tibble> {
        self.run(Verb::Filter, args.into())
    }

    /// Add or overwrite columns, computing expressions within each group.
    pub fn mutate(&self, args: impl Into<Args>) -> Result<Tibble> {
        self.run(Verb::Mutate, args.into())
    }

    /// One row per group; group keys lead, groups in order of first appearance.
    pub fn summarize(&self, args: impl Into<Args>) -> Result<Tibble> {
        self.run(Verb::Summarize, args.into())
    }

    /// Drop the grouping and return the underlying frame.
    pub fn ungroup(self) -> Tibble {
        self.tibble
    }

    fn run(&self, verb: Verb, args: Args) -> Result<Tibble> {
        let (exprs, grouping) = prepare(verb, args, Some(&self.grouping))?;
        Ok(dispatch(self.tibble.as_polars(), verb, exprs, &grouping)?.into())
    }
}
