use polars::prelude::{DataFrame, Expr, IntoLazy};

use crate::args::{normalize_parts, Args, Grouping};
use crate::{Result, TidyError};

/// Verb categories routed by [`dispatch`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Verb {
    /// Keep only the referenced columns.
    Select,
    /// Keep rows where every predicate holds.
    Filter,
    /// Add or overwrite columns, keeping row count.
    Mutate,
    /// Reduce to one row (per group).
    Summarize,
}

impl Verb {
    fn name(self) -> &'static str {
        match self {
            Verb::Select => "select",
            Verb::Filter => "filter",
            Verb::Mutate => "mutate",
            Verb::Summarize => "summarize",
        }
    }
}

/// Normalize `args` for `verb`, resolving the grouping from the call itself
/// or from an already-grouped frame (but never both).
pub(crate) fn prepare(
    verb: Verb,
    args: Args,
    inherited: Option<&Grouping>,
) -> Result<(Vec<Expr>, Grouping)> {
    if verb == Verb::Filter && !args.named_bindings().is_empty() {
        return Err(TidyError::invalid_argument_kind(
            "filter does not accept named arguments; pass predicates positionally",
        ));
    }

    let (positional, named, by) = args.into_parts();
    let grouping = match (inherited, by) {
        (Some(_), Some(_)) => {
            return Err(TidyError::conflicting_argument(
                "group_by",
                "by",
                format!("{} on a grouped frame cannot take its own grouping", verb.name()),
            ))
        }
        (Some(grouping), None) => grouping.clone(),
        (None, by) => Grouping::resolve(by)?,
    };

    Ok((normalize_parts(positional, named)?, grouping))
}

/// Route normalized expressions to the matching Polars call.
pub(crate) fn dispatch(
    df: &DataFrame,
    verb: Verb,
    exprs: Vec<Expr>,
    grouping: &Grouping,
) -> Result<DataFrame> {
    tracing::debug!(
        verb = verb.name(),
        exprs = exprs.len(),
        grouped = grouping.is_active(),
        "dispatching verb"
    );

    let lf = df.clone().lazy();
    let out = match (verb, grouping) {
        (Verb::Select, Grouping::None) => lf.select(exprs),
        (Verb::Select, Grouping::By(_)) => {
            return Err(TidyError::invalid_argument_kind(
                "select does not accept a grouping argument",
            ))
        }
        (Verb::Filter, grouping) => {
            let Some(predicate) = combine_predicates(exprs) else {
                return Ok(df.clone());
            };
            match grouping {
                Grouping::None => lf.filter(predicate),
                Grouping::By(keys) => lf.filter(predicate.over(keys)),
            }
        }
        (Verb::Mutate, Grouping::None) => lf.with_columns(exprs),
        (Verb::Mutate, Grouping::By(keys)) => lf.with_columns(
            exprs
                .into_iter()
                .map(|e| e.over(keys))
                .collect::<Vec<_>>(),
        ),
        (Verb::Summarize, Grouping::None) => lf.select(exprs),
        (Verb::Summarize, Grouping::By(keys)) => lf.group_by_stable(keys).agg(exprs),
    };

    Ok(out.collect()?)
}

/// Left-fold predicates with logical AND; `None` when there are none.
pub(crate) fn combine_predicates(exprs: Vec<Expr>) -> Option<Expr> {
    exprs.into_iter().reduce(|acc, e| acc.and(e))
}

#[cfg(test)]
mod tests {
    use polars::prelude::{col, lit};

    use super::{combine_predicates, prepare, Verb};
    use crate::args::{Args, Grouping};
    use crate::TidyError;

    #[test]
    fn predicates_fold_left_with_and() {
        let combined = combine_predicates(vec![
            col("a").gt(lit(1)),
            col("b").lt(lit(2)),
            col("c").eq(lit(3)),
        ])
        .unwrap();
        let expected = col("a")
            .gt(lit(1))
            .and(col("b").lt(lit(2)))
            .and(col("c").eq(lit(3)));
        assert_eq!(format!("{combined:?}"), format!("{expected:?}"));
        assert!(combine_predicates(Vec::new()).is_none());
    }

    #[test]
    fn filter_rejects_named_bindings() {
        let err = prepare(Verb::Filter, Args::new().named("x", col("a")), None).unwrap_err();
        assert!(matches!(err, TidyError::InvalidArgumentKind { .. }));
    }

    #[test]
    fn inherited_grouping_conflicts_with_by() {
        let grouping = Grouping::By(vec![col("g")]);
        let err = prepare(Verb::Mutate, Args::new().by("h"), Some(&grouping)).unwrap_err();
        assert!(matches!(err, TidyError::ConflictingArgument { .. }));

        let (_, resolved) = prepare(Verb::Mutate, Args::new(), Some(&grouping)).unwrap();
        assert!(resolved.is_active());
    }

    #[test]
    fn by_argument_activates_grouping() {
        let (exprs, grouping) =
            prepare(Verb::Summarize, Args::new().named("n", col("a")).by("g"), None).unwrap();
        assert_eq!(exprs.len(), 1);
        assert_eq!(grouping.keys().len(), 1);
    }
}
