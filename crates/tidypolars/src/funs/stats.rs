use polars::prelude::Expr;

use crate::IntoColumnExpr;

/// First value.
pub fn first(x: impl IntoColumnExpr) -> Expr {
    x.into_column_expr().first()
}

/// Last value.
pub fn last(x: impl IntoColumnExpr) -> Expr {
    x.into_column_expr().last()
}

/// Maximum of non-null values.
pub fn max(x: impl IntoColumnExpr) -> Expr {
    x.into_column_expr().max()
}

/// Mean of non-null values.
pub fn mean(x: impl IntoColumnExpr) -> Expr {
    x.into_column_expr().mean()
}

/// Median of non-null values.
pub fn median(x: impl IntoColumnExpr) -> Expr {
    x.into_column_expr().median()
}

/// Minimum of non-null values.
pub fn min(x: impl IntoColumnExpr) -> Expr {
    x.into_column_expr().min()
}

/// Number of distinct values (null counts as a value).
pub fn n_distinct(x: impl IntoColumnExpr) -> Expr {
    x.into_column_expr().n_unique()
}

/// Sample standard deviation (`ddof = 1`).
pub fn sd(x: impl IntoColumnExpr) -> Expr {
    x.into_column_expr().std(1)
}

/// Sample variance (`ddof = 1`).
pub fn var(x: impl IntoColumnExpr) -> Expr {
    x.into_column_expr().var(1)
}

/// Sum of non-null values.
pub fn sum(x: impl IntoColumnExpr) -> Expr {
    x.into_column_expr().sum()
}

/// Number of rows (in the group, when grouped).
pub fn n() -> Expr {
    polars::prelude::len()
}
