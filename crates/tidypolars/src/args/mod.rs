mod arg;
mod grouping;
mod normalize;

/// Argument shapes and conversion traits.
pub use arg::{Arg, Args, IntoBinding, IntoColumnExpr};
/// Explicit grouping state of a verb call.
pub use grouping::Grouping;
/// Argument normalization entrypoints.
pub use normalize::{args_as_list, col_expr, col_exprs, named_as_exprs, normalize};

pub(crate) use normalize::{names_only, normalize_parts, normalize_ungrouped};
