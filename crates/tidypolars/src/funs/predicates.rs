use polars::prelude::{lit, Expr, Series};

use crate::{IntoBinding, IntoColumnExpr};

/// `left <= x <= right`.
pub fn between(x: impl IntoColumnExpr, left: impl IntoBinding, right: impl IntoBinding) -> Expr {
    let x = x.into_column_expr();
    x.clone()
        .gt_eq(left.into_binding())
        .and(x.lt_eq(right.into_binding()))
}

/// `true` for finite floating point values.
pub fn is_finite(x: impl IntoColumnExpr) -> Expr {
    x.into_column_expr().is_finite()
}

/// `true` for positive or negative infinity.
pub fn is_infinite(x: impl IntoColumnExpr) -> Expr {
    x.into_column_expr().is_infinite()
}

/// `true` for NaN (null stays null).
pub fn is_nan(x: impl IntoColumnExpr) -> Expr {
    x.into_column_expr().is_nan()
}

/// Membership test against a set of values.
pub fn is_in(x: impl IntoColumnExpr, values: Series) -> Expr {
    x.into_column_expr().is_in(lit(values))
}

/// Negated membership test.
pub fn is_not_in(x: impl IntoColumnExpr, values: Series) -> Expr {
    is_in(x, values).not()
}

/// Logical negation of a boolean column.
pub fn is_not(x: impl IntoColumnExpr) -> Expr {
    x.into_column_expr().not()
}

/// `true` where the value is missing.
pub fn is_null(x: impl IntoColumnExpr) -> Expr {
    x.into_column_expr().is_null()
}

/// `true` where a value is present.
pub fn is_not_null(x: impl IntoColumnExpr) -> Expr {
    x.into_column_expr().is_not_null()
}
