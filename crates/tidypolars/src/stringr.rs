//! String helpers in the style of R's `stringr`.
//!
//! Patterns are regular expressions unless noted otherwise.

use polars::prelude::{lit, Expr, Null};

use crate::IntoColumnExpr;

/// Detect whether every pattern matches; `negate` flips the result.
///
/// An empty pattern list matches everything.
pub fn str_detect<I, S>(string: impl IntoColumnExpr, patterns: I, negate: bool) -> Expr
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let string = string.into_column_expr();
    let detected = patterns
        .into_iter()
        .map(|p| {
            let pattern: String = p.into();
            string.clone().str().contains(lit(pattern), true)
        })
        .reduce(|acc, e| acc.and(e))
        .unwrap_or_else(|| lit(true));
    if negate {
        detected.not()
    } else {
        detected
    }
}

/// Number of characters.
pub fn str_length(string: impl IntoColumnExpr) -> Expr {
    string.into_column_expr().str().len_chars()
}

/// Characters from `start` up to (not including) `end`; to the end when `end` is `None`.
///
/// Positions are zero-based.
pub fn str_sub(string: impl IntoColumnExpr, start: i64, end: Option<i64>) -> Expr {
    let length = match end {
        Some(end) => lit((end - start).max(0)),
        None => lit(Null {}),
    };
    string.into_column_expr().str().slice(lit(start), length)
}

/// Replace every match of `pattern`.
pub fn str_replace_all(string: impl IntoColumnExpr, pattern: &str, replacement: &str) -> Expr {
    string
        .into_column_expr()
        .str()
        .replace_all(lit(pattern), lit(replacement), false)
}

/// Replace the first match of `pattern`.
pub fn str_replace(string: impl IntoColumnExpr, pattern: &str, replacement: &str) -> Expr {
    string
        .into_column_expr()
        .str()
        .replace(lit(pattern), lit(replacement), false)
}

/// Remove every match of `pattern`.
pub fn str_remove_all(string: impl IntoColumnExpr, pattern: &str) -> Expr {
    str_replace_all(string, pattern, "")
}

/// Remove the first match of `pattern`.
pub fn str_remove(string: impl IntoColumnExpr, pattern: &str) -> Expr {
    str_replace(string, pattern, "")
}

/// Lowercase every character.
pub fn str_to_lower(string: impl IntoColumnExpr) -> Expr {
    string.into_column_expr().str().to_lowercase()
}

/// Uppercase every character.
pub fn str_to_upper(string: impl IntoColumnExpr) -> Expr {
    string.into_column_expr().str().to_uppercase()
}

/// Strip leading and trailing whitespace.
pub fn str_trim(string: impl IntoColumnExpr) -> Expr {
    string.into_column_expr().str().strip_chars(lit(Null {}))
}

/// Literal prefix test.
pub fn str_starts(string: impl IntoColumnExpr, prefix: &str) -> Expr {
    string.into_column_expr().str().starts_with(lit(prefix))
}

/// Literal suffix test.
pub fn str_ends(string: impl IntoColumnExpr, suffix: &str) -> Expr {
    string.into_column_expr().str().ends_with(lit(suffix))
}

/// Capture group `group` of the first match (`0` is the whole match); null when absent.
pub fn str_extract(string: impl IntoColumnExpr, pattern: &str, group: usize) -> Expr {
    string.into_column_expr().str().extract(lit(pattern), group)
}

#[cfg(test)]
mod tests {
    use polars::prelude::{col, lit};

    use super::str_detect;

    #[test]
    fn detect_folds_patterns_with_and() {
        let expr = str_detect("name", ["a", "e"], false);
        let expected = col("name")
            .str()
            .contains(lit("a".to_string()), true)
            .and(col("name").str().contains(lit("e".to_string()), true));
        assert_eq!(format!("{expr:?}"), format!("{expected:?}"));
    }

    #[test]
    fn detect_without_patterns_matches_everything() {
        assert_eq!(
            format!("{:?}", str_detect("name", Vec::<String>::new(), false)),
            format!("{:?}", lit(true))
        );
    }
}
