use polars::prelude::{DataType, Expr};

use crate::IntoColumnExpr;

/// Cast to `Float64`.
pub fn as_float(x: impl IntoColumnExpr) -> Expr {
    x.into_column_expr().cast(DataType::Float64)
}

/// Cast to `Int64`.
pub fn as_integer(x: impl IntoColumnExpr) -> Expr {
    x.into_column_expr().cast(DataType::Int64)
}

/// Cast to `String`.
pub fn as_string(x: impl IntoColumnExpr) -> Expr {
    x.into_column_expr().cast(DataType::String)
}

/// Cast to `Boolean`.
pub fn as_boolean(x: impl IntoColumnExpr) -> Expr {
    x.into_column_expr().cast(DataType::Boolean)
}
