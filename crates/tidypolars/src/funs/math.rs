use polars::prelude::Expr;

use crate::IntoColumnExpr;

/// Absolute value.
pub fn abs(x: impl IntoColumnExpr) -> Expr {
    x.into_column_expr().abs()
}

/// Round to `decimals` decimal places.
pub fn round(x: impl IntoColumnExpr, decimals: u32) -> Expr {
    x.into_column_expr().round(decimals)
}

/// Largest integer value not greater than `x`.
pub fn floor(x: impl IntoColumnExpr) -> Expr {
    x.into_column_expr().floor()
}

/// Smallest integer value not less than `x`.
pub fn ceiling(x: impl IntoColumnExpr) -> Expr {
    x.into_column_expr().ceil()
}

/// Square root.
pub fn sqrt(x: impl IntoColumnExpr) -> Expr {
    x.into_column_expr().sqrt()
}

/// Natural logarithm.
pub fn log(x: impl IntoColumnExpr) -> Expr {
    x.into_column_expr().log(std::f64::consts::E)
}

/// Base-10 logarithm.
pub fn log10(x: impl IntoColumnExpr) -> Expr {
    x.into_column_expr().log(10.0)
}

/// Natural exponential, `e^x`.
pub fn exp(x: impl IntoColumnExpr) -> Expr {
    x.into_column_expr().exp()
}
