use polars::prelude::{lit, Expr};

use crate::IntoColumnExpr;

/// Shift `x` by `n` positions; vacated slots take `default`, or null without one.
fn shift(x: Expr, n: i64, default: Option<Expr>) -> Expr {
    match default {
        None => x.shift(lit(n)),
        Some(fill) => x.shift_and_fill(lit(n), fill),
    }
}

/// Previous values: row `i` gets row `i - n`.
///
/// The first `n` rows have no predecessor and take `default` (null when `None`).
pub fn lag(x: impl IntoColumnExpr, n: i64, default: Option<Expr>) -> Expr {
    shift(x.into_column_expr(), n, default)
}

/// Following values: row `i` gets row `i + n`.
///
/// The last `n` rows have no successor and take `default` (null when `None`).
pub fn lead(x: impl IntoColumnExpr, n: i64, default: Option<Expr>) -> Expr {
    shift(x.into_column_expr(), -n, default)
}

/// Cumulative sum.
pub fn cumsum(x: impl IntoColumnExpr) -> Expr {
    x.into_column_expr().cum_sum(false)
}

/// Cumulative product.
pub fn cumprod(x: impl IntoColumnExpr) -> Expr {
    x.into_column_expr().cum_prod(false)
}

/// Cumulative minimum.
pub fn cummin(x: impl IntoColumnExpr) -> Expr {
    x.into_column_expr().cum_min(false)
}

/// Cumulative maximum.
pub fn cummax(x: impl IntoColumnExpr) -> Expr {
    x.into_column_expr().cum_max(false)
}
