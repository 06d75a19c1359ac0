use std::fmt;
use std::ops::Deref;

use polars::prelude::{
    col, len, Column, DataFrame, Expr, IdxCa, IdxSize, IntoLazy, PlSmallStr, PolarsError, Series,
    SortMultipleOptions, UniqueKeepStrategy,
};

use crate::args::{names_only, normalize_ungrouped, Args, Grouping};
use crate::tibble::dispatch::{dispatch, prepare, Verb};
use crate::tibble::relocate::relocate_order;
use crate::{GroupedTibble, Result, TidyError};

/// A Polars `DataFrame` with dplyr-style verbs.
///
/// Wrapping and unwrapping never copies column data, and the wrapped frame is
/// reachable through `Deref` for read-only access.
#[derive(Debug, Clone, Default)]
pub struct Tibble {
    df: DataFrame,
}

/// Sort direction for [`Tibble::arrange`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Descending {
    /// Same direction for every sort key.
    All(bool),
    /// One flag per sort key.
    PerColumn(Vec<bool>),
}

impl From<bool> for Descending {
    fn from(v: bool) -> Self {
        Descending::All(v)
    }
}

impl From<Vec<bool>> for Descending {
    fn from(v: Vec<bool>) -> Self {
        Descending::PerColumn(v)
    }
}

impl<const N: usize> From<[bool; N]> for Descending {
    fn from(v: [bool; N]) -> Self {
        Descending::PerColumn(v.to_vec())
    }
}

impl Tibble {
    /// Construct a `Tibble` from columns (all of the same length, unique names).
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        Ok(DataFrame::new(columns)?.into())
    }

    /// Borrow the wrapped Polars frame.
    pub fn as_polars(&self) -> &DataFrame {
        &self.df
    }

    /// Unwrap into the Polars frame.
    pub fn into_polars(self) -> DataFrame {
        self.df
    }

    /// Column names in frame order.
    pub fn names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect()
    }

    /// Number of columns.
    pub fn ncol(&self) -> usize {
        self.df.width()
    }

    /// Number of rows.
    pub fn nrow(&self) -> usize {
        self.df.height()
    }

    /// Compare schema and values; with `null_equal`, missing values compare equal.
    pub fn frame_equal(&self, other: &Tibble, null_equal: bool) -> bool {
        if self.df.schema() != other.df.schema() {
            return false;
        }
        if null_equal {
            self.df.equals_missing(&other.df)
        } else {
            self.df.equals(&other.df)
        }
    }

    /// Select columns by name or expression, in the order given.
    pub fn select(&self, args: impl Into<Args>) -> Result<Tibble> {
        self.run(Verb::Select, args.into())
    }

    /// Keep rows where all predicates hold (comma-separated predicates are ANDed).
    ///
    /// A grouping argument (`Args::by`) evaluates the predicates within each group.
    pub fn filter(&self, args: impl Into<Args>) -> Result<Tibble> {
        self.run(Verb::Filter, args.into())
    }

    /// Add or overwrite columns.
    ///
    /// Overwritten columns keep their position; new columns are appended in
    /// argument order. With a grouping argument, expressions are computed per group.
    pub fn mutate(&self, args: impl Into<Args>) -> Result<Tibble> {
        self.run(Verb::Mutate, args.into())
    }

    /// Aggregate to one row, or one row per group when grouped.
    pub fn summarize(&self, args: impl Into<Args>) -> Result<Tibble> {
        self.run(Verb::Summarize, args.into())
    }

    /// Sort rows by one or more columns; ties keep their input order.
    pub fn arrange(&self, args: impl Into<Args>, desc: impl Into<Descending>) -> Result<Tibble> {
        let exprs = normalize_ungrouped(args.into(), "arrange")?;
        if exprs.is_empty() {
            return Ok(self.clone());
        }

        let options = match desc.into() {
            Descending::All(d) => SortMultipleOptions::default().with_order_descending(d),
            Descending::PerColumn(d) => {
                SortMultipleOptions::default().with_order_descending_multi(d)
            }
        }
        .with_maintain_order(true);

        tracing::debug!(verb = "arrange", exprs = exprs.len(), "dispatching verb");
        let df = self.df.clone().lazy().sort_by_exprs(exprs, options).collect()?;
        Ok(df.into())
    }

    /// Keep distinct rows, optionally over a projection of the given columns.
    pub fn distinct(&self, args: impl Into<Args>) -> Result<Tibble> {
        let exprs = normalize_ungrouped(args.into(), "distinct")?;
        let lf = self.df.clone().lazy();
        let lf = if exprs.is_empty() { lf } else { lf.select(exprs) };
        let df = lf.unique_stable(None, UniqueKeepStrategy::First).collect()?;
        Ok(df.into())
    }

    /// Move columns before or after an anchor column (to the front without one).
    ///
    /// Moved columns keep the order in which they are named. Supplying both
    /// `before` and `after` is a [`TidyError::ConflictingArgument`].
    pub fn relocate(
        &self,
        args: impl Into<Args>,
        before: Option<&str>,
        after: Option<&str>,
    ) -> Result<Tibble> {
        let exprs = normalize_ungrouped(args.into(), "relocate")?;
        if exprs.is_empty() {
            return Ok(self.clone());
        }

        let loc = match (before, after) {
            (Some(_), Some(_)) => {
                return Err(TidyError::conflicting_argument(
                    "before",
                    "after",
                    "cannot provide both before and after",
                ))
            }
            (None, None) => 0,
            (Some(before), None) => self.position_of(before)?,
            (None, Some(after)) => self.position_of(after)? + 1,
        };

        let moved = self.resolve_names(exprs)?;
        let order = relocate_order(&self.names(), &moved, loc);
        Ok(self.df.select(order)?.into())
    }

    /// Rename columns from `(old, new)` pairs, applied in order.
    pub fn rename<I, S, T>(&self, pairs: I) -> Result<Tibble>
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut df = self.df.clone();
        for (old, new) in pairs {
            df.rename(old.as_ref(), new.as_ref().into())?;
        }
        Ok(df.into())
    }

    /// Drop columns by name.
    pub fn drop(&self, args: impl Into<Args>) -> Result<Tibble> {
        let mut df = self.df.clone();
        for name in names_only(args.into(), "drop")? {
            df = df.drop(&name)?;
        }
        Ok(df.into())
    }

    /// Append the rows of `other` (column names and dtypes must match).
    pub fn bind_rows(&self, other: &Tibble) -> Result<Tibble> {
        Ok(self.df.vstack(&other.df)?.into())
    }

    /// Append the columns of `other` (heights must match, names must not clash).
    pub fn bind_cols(&self, other: &Tibble) -> Result<Tibble> {
        Ok(self.df.hstack(other.df.get_columns())?.into())
    }

    /// Extract one column as a `Series` (the last column when `var` is `None`).
    pub fn pull(&self, var: Option<&str>) -> Result<Series> {
        let column = match var {
            Some(name) => self.df.column(name)?,
            None => self
                .df
                .get_columns()
                .last()
                .ok_or_else(|| PolarsError::NoData("cannot pull from a frame without columns".into()))?,
        };
        Ok(column.as_materialized_series().clone())
    }

    /// Take rows by zero-based index, in the order given.
    pub fn slice<I>(&self, rows: I) -> Result<Tibble>
    where
        I: IntoIterator<Item = usize>,
    {
        let idx = rows
            .into_iter()
            .map(|r| {
                IdxSize::try_from(r).map_err(|_| {
                    TidyError::invalid_argument_kind(format!(
                        "row index {r} exceeds the supported index range"
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let idx = IdxCa::from_vec(PlSmallStr::from_static("row"), idx);
        Ok(self.df.take(&idx)?.into())
    }

    /// First `n` rows.
    pub fn slice_head(&self, n: usize) -> Tibble {
        self.df.head(Some(n)).into()
    }

    /// Last `n` rows.
    pub fn slice_tail(&self, n: usize) -> Tibble {
        self.df.tail(Some(n)).into()
    }

    /// Count rows per distinct combination of the given columns.
    ///
    /// The count column is named `name` (default `"n"`); `sort` orders by it,
    /// largest first. Without columns the result is a single total.
    pub fn count(&self, args: impl Into<Args>, sort: bool, name: Option<&str>) -> Result<Tibble> {
        let name = name.unwrap_or("n");
        let keys = normalize_ungrouped(args.into(), "count")?;
        let counted = len().alias(name);

        let lf = self.df.clone().lazy();
        let lf = if keys.is_empty() {
            lf.select([counted])
        } else {
            lf.group_by_stable(keys).agg([counted])
        };
        let lf = if sort {
            lf.sort_by_exprs(
                [col(name)],
                SortMultipleOptions::default()
                    .with_order_descending(true)
                    .with_maintain_order(true),
            )
        } else {
            lf
        };
        Ok(lf.collect()?.into())
    }

    /// Group by one or more columns; the grouped frame's verbs work per group.
    pub fn group_by(&self, args: impl Into<Args>) -> Result<GroupedTibble> {
        let keys = normalize_ungrouped(args.into(), "group_by")?;
        Ok(GroupedTibble::new(self.clone(), Grouping::from_keys(keys)))
    }

    fn run(&self, verb: Verb, args: Args) -> Result<Tibble> {
        let (exprs, grouping) = prepare(verb, args, None)?;
        Ok(dispatch(&self.df, verb, exprs, &grouping)?.into())
    }

    /// Resolve expressions to the column names they produce, without touching rows.
    fn resolve_names(&self, exprs: Vec<Expr>) -> Result<Vec<String>> {
        let probe = self.df.head(Some(0)).lazy().select(exprs).collect()?;
        Ok(probe
            .get_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect())
    }

    fn position_of(&self, name: &str) -> Result<usize> {
        let resolved = self.resolve_names(vec![col(name)])?;
        let names = self.names();
        resolved
            .first()
            .and_then(|r| names.iter().position(|n| n == r))
            .ok_or_else(|| PolarsError::ColumnNotFound(name.to_string().into()).into())
    }
}

impl From<DataFrame> for Tibble {
    fn from(df: DataFrame) -> Self {
        Self { df }
    }
}

impl From<Tibble> for DataFrame {
    fn from(t: Tibble) -> Self {
        t.df
    }
}

impl Deref for Tibble {
    type Target = DataFrame;

    fn deref(&self) -> &DataFrame {
        &self.df
    }
}

impl fmt::Display for Tibble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.df, f)
    }
}
