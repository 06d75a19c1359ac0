//! Column helpers usable inside `mutate`, `filter` and `summarize`.
//!
//! Every helper accepts a column name or an expression and returns an `Expr`:
//!
//! ```
//! use tidypolars::{args, col, funs, tibble};
//!
//! let df = tibble!("x" => [-1i64, 0, 2])?;
//! let out = df.mutate(args![abs_x = funs::abs("x"), lag_x = funs::lag(col("x"), 1, None)])?;
//! assert_eq!(out.names(), ["x", "abs_x", "lag_x"]);
//! # Ok::<(), tidypolars::TidyError>(())
//! ```

mod cast;
mod conditional;
mod math;
mod predicates;
mod stats;
mod window;

pub use cast::{as_boolean, as_float, as_integer, as_string};
pub use conditional::{case_when, if_else};
pub use math::{abs, ceiling, exp, floor, log, log10, round, sqrt};
pub use predicates::{
    between, is_finite, is_in, is_infinite, is_nan, is_not, is_not_in, is_not_null, is_null,
};
pub use stats::{first, last, max, mean, median, min, n, n_distinct, sd, sum, var};
pub use window::{cummax, cummin, cumprod, cumsum, lag, lead};
