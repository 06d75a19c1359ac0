//! `tidypolars` is a dplyr-style verb API layered on top of Polars.
//!
//! A [`Tibble`] wraps a Polars `DataFrame` without copying it. Verbs take
//! heterogeneous arguments (column names, expressions, lists of either, named
//! bindings and an optional grouping) which are normalized into a list of
//! Polars expressions before being handed to the engine. Column helpers live
//! in [`funs`] and [`stringr`]; CSV / Parquet pass-throughs live in [`io`].

mod error;
mod macros;

/// Argument shapes, normalization and grouping.
pub mod args;
/// Column helpers (math, window, aggregation, predicates, casts).
pub mod funs;
/// CSV / Parquet I/O and option types.
pub mod io;
/// String helpers.
pub mod stringr;
/// The tidy frame and its grouped form.
pub mod tibble;

/// Re-export of the engine, used by the construction macros.
pub use polars;

/// Re-export of the argument types.
pub use crate::args::{Arg, Args, Grouping, IntoBinding, IntoColumnExpr};
/// Re-export of the crate error type and result alias.
pub use crate::error::{Result, TidyError};
/// Re-export of eager CSV / Parquet I/O helpers.
pub use crate::io::{read_csv, read_parquet, write_csv, write_parquet};
/// Re-export of the frame types.
pub use crate::tibble::{Descending, GroupedTibble, Tibble};
/// Re-export of the expression entrypoints.
pub use polars::prelude::{col, lit, Expr};
