use polars::prelude::{when, Expr, When};

use crate::IntoBinding;

/// `true_` where `condition` holds, `false_` elsewhere.
pub fn if_else(condition: Expr, true_: impl IntoBinding, false_: impl IntoBinding) -> Expr {
    when(condition)
        .then(true_.into_binding())
        .otherwise(false_.into_binding())
}

/// Start a `case_when(..).then(..).when(..).then(..).otherwise(..)` chain.
///
/// Branches are checked in order; the first matching condition wins.
pub fn case_when(condition: Expr) -> When {
    when(condition)
}
