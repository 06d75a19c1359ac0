use polars::prelude::{col, Expr};

use crate::args::{Arg, Args};
use crate::{Result, TidyError};

/// Resolve a single argument into an expression.
///
/// Names become `col(name)`, expressions pass through; a list is not a single
/// column and is rejected.
pub fn col_expr(arg: Arg) -> Result<Expr> {
    match arg {
        Arg::Name(name) => Ok(col(name.as_str())),
        Arg::Expr(expr) => Ok(expr),
        Arg::List(items) => Err(TidyError::invalid_argument_kind(format!(
            "expected a column name or expression, got a list of {} item(s)",
            items.len()
        ))),
        Arg::Invalid(reason) => Err(TidyError::invalid_argument_kind(reason)),
    }
}

/// Resolve a name, expression or list of either into expressions.
pub fn col_exprs(arg: Arg) -> Result<Vec<Expr>> {
    match arg {
        Arg::List(items) => items.into_iter().map(col_expr).collect(),
        other => Ok(vec![col_expr(other)?]),
    }
}

/// Apply the "list first" calling convention.
///
/// When the first positional argument is a list, its items are the whole
/// positional list and any further positional arguments are dropped.
pub fn args_as_list(positional: Vec<Arg>) -> Vec<Arg> {
    let total = positional.len();
    let mut iter = positional.into_iter();
    match iter.next() {
        None => Vec::new(),
        Some(Arg::List(items)) => {
            if total > 1 {
                tracing::warn!(
                    dropped = total - 1,
                    "first positional argument is a list; ignoring the remaining positional arguments"
                );
            }
            items
        }
        Some(first) => std::iter::once(first).chain(iter).collect(),
    }
}

/// Alias every named binding to its name, preserving insertion order.
pub fn named_as_exprs(named: Vec<(String, Expr)>) -> Vec<Expr> {
    named
        .into_iter()
        .map(|(name, expr)| expr.alias(name.as_str()))
        .collect()
}

/// Normalize a verb's arguments into one ordered expression list.
///
/// Positional expressions come first in call order, named bindings follow in
/// insertion order. A grouping argument is an error here; grouped verbs split
/// it off before normalizing.
pub fn normalize(args: Args) -> Result<Vec<Expr>> {
    normalize_ungrouped(args, "this verb")
}

/// [`normalize`] for a named verb, so a stray grouping argument is reported against it.
pub(crate) fn normalize_ungrouped(args: Args, verb: &str) -> Result<Vec<Expr>> {
    let (positional, named, by) = args.into_parts();
    reject_grouping(by.as_ref(), verb)?;
    normalize_parts(positional, named)
}

/// Normalize positional and named arguments once the grouping has been taken out.
pub(crate) fn normalize_parts(
    positional: Vec<Arg>,
    named: Vec<(String, Expr)>,
) -> Result<Vec<Expr>> {
    let mut exprs = args_as_list(positional)
        .into_iter()
        .map(col_expr)
        .collect::<Result<Vec<_>>>()?;
    exprs.extend(named_as_exprs(named));
    Ok(exprs)
}

/// Normalize arguments that may only name columns (no expressions, no bindings).
pub(crate) fn names_only(args: Args, verb: &str) -> Result<Vec<String>> {
    let (positional, named, by) = args.into_parts();
    reject_grouping(by.as_ref(), verb)?;
    if !named.is_empty() {
        return Err(TidyError::invalid_argument_kind(format!(
            "{verb} does not accept named arguments"
        )));
    }
    args_as_list(positional)
        .into_iter()
        .map(|arg| match arg {
            Arg::Name(name) => Ok(name),
            other => Err(TidyError::invalid_argument_kind(format!(
                "{verb} expects column names, got {other:?}"
            ))),
        })
        .collect()
}

fn reject_grouping(by: Option<&Arg>, verb: &str) -> Result<()> {
    match by {
        None => Ok(()),
        Some(by) => Err(TidyError::invalid_argument_kind(format!(
            "{verb} does not accept a grouping argument (got {by:?}); use group_by first"
        ))),
    }
}
