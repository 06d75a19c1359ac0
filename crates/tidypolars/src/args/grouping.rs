use polars::prelude::Expr;

use crate::args::{col_exprs, Arg};
use crate::Result;

/// Whether a verb call runs per group.
#[derive(Debug, Clone, Default)]
pub enum Grouping {
    /// Operate on the whole frame.
    #[default]
    None,
    /// Operate within each distinct combination of these key expressions.
    By(Vec<Expr>),
}

impl Grouping {
    /// Resolve an optional grouping argument.
    ///
    /// Absent arguments and empty lists mean no grouping. Names, expressions and
    /// lists of either group by those keys; anything else is rejected rather
    /// than silently treated as ungrouped.
    pub fn resolve(by: Option<Arg>) -> Result<Self> {
        match by {
            None => Ok(Grouping::None),
            Some(Arg::List(items)) if items.is_empty() => Ok(Grouping::None),
            Some(arg) => Ok(Grouping::By(col_exprs(arg)?)),
        }
    }

    /// Build a grouping from already-normalized keys.
    pub fn from_keys(keys: Vec<Expr>) -> Self {
        if keys.is_empty() {
            Grouping::None
        } else {
            Grouping::By(keys)
        }
    }

    /// Returns `true` when rows are partitioned by keys.
    pub fn is_active(&self) -> bool {
        matches!(self, Grouping::By(_))
    }

    /// Group key expressions (empty when not grouped).
    pub fn keys(&self) -> &[Expr] {
        match self {
            Grouping::None => &[],
            Grouping::By(keys) => keys,
        }
    }
}

#[cfg(test)]
mod tests {
    use polars::prelude::col;

    use super::Grouping;
    use crate::args::Arg;
    use crate::TidyError;

    #[test]
    fn absent_and_empty_mean_ungrouped() {
        assert!(!Grouping::resolve(None).unwrap().is_active());
        let empty = Grouping::resolve(Some(Arg::from(Vec::<&str>::new()))).unwrap();
        assert!(!empty.is_active());
        assert!(empty.keys().is_empty());
    }

    #[test]
    fn names_exprs_and_lists_activate_grouping() {
        assert_eq!(Grouping::resolve(Some(Arg::from("g"))).unwrap().keys().len(), 1);
        assert_eq!(
            Grouping::resolve(Some(Arg::from(col("g")))).unwrap().keys().len(),
            1
        );
        let keys = Grouping::resolve(Some(Arg::from(vec!["a", "b"]))).unwrap();
        assert!(keys.is_active());
        assert_eq!(keys.keys().len(), 2);
    }

    #[test]
    fn nested_list_is_rejected() {
        let err = Grouping::resolve(Some(Arg::from(vec![vec!["a"]]))).unwrap_err();
        assert!(matches!(err, TidyError::InvalidArgumentKind { .. }));
    }

    #[test]
    fn from_keys_without_keys_is_ungrouped() {
        assert!(!Grouping::from_keys(Vec::new()).is_active());
        assert!(Grouping::from_keys(vec![col("g")]).is_active());
    }
}
