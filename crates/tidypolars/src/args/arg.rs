use polars::prelude::{col, lit, Column, Expr, Series};

/// One positional verb argument.
#[derive(Debug, Clone)]
pub enum Arg {
    /// Column referenced by name (case-sensitive).
    Name(String),
    /// Polars expression, passed through unchanged.
    Expr(Expr),
    /// Container of names and/or expressions.
    List(Vec<Arg>),
    /// A value that cannot name a column (a null or non-string series entry).
    ///
    /// Kept so the error surfaces when the argument is normalized.
    Invalid(String),
}

impl From<&str> for Arg {
    fn from(v: &str) -> Self {
        Arg::Name(v.to_string())
    }
}

impl From<String> for Arg {
    fn from(v: String) -> Self {
        Arg::Name(v)
    }
}

impl From<&String> for Arg {
    fn from(v: &String) -> Self {
        Arg::Name(v.clone())
    }
}

impl From<Expr> for Arg {
    fn from(v: Expr) -> Self {
        Arg::Expr(v)
    }
}

impl<T: Into<Arg>> From<Vec<T>> for Arg {
    fn from(v: Vec<T>) -> Self {
        Arg::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Arg>, const N: usize> From<[T; N]> for Arg {
    fn from(v: [T; N]) -> Self {
        Arg::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Arg> + Clone> From<&[T]> for Arg {
    fn from(v: &[T]) -> Self {
        Arg::List(v.iter().cloned().map(Into::into).collect())
    }
}

/// A `String` series is a list of column names, like a `Vec<&str>`.
impl From<Series> for Arg {
    fn from(v: Series) -> Self {
        let Ok(names) = v.str() else {
            return Arg::Invalid(format!(
                "series '{}' of dtype {} does not hold column names",
                v.name(),
                v.dtype()
            ));
        };
        Arg::List(
            names
                .into_iter()
                .map(|name| match name {
                    Some(name) => Arg::Name(name.to_string()),
                    None => Arg::Invalid(format!("null entry in series '{}'", v.name())),
                })
                .collect(),
        )
    }
}

impl From<Column> for Arg {
    fn from(v: Column) -> Self {
        Arg::from(v.as_materialized_series().clone())
    }
}

/// Values that can be bound to an output column name (`name = value`).
///
/// Expressions are kept as-is; plain Rust values become literals. Strings bind
/// as string literals, not as column references.
pub trait IntoBinding {
    /// Convert into the expression that will be aliased to the binding name.
    fn into_binding(self) -> Expr;
}

impl IntoBinding for Expr {
    fn into_binding(self) -> Expr {
        self
    }
}

macro_rules! impl_literal_binding {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoBinding for $t {
                fn into_binding(self) -> Expr {
                    lit(self)
                }
            }
        )*
    };
}

impl_literal_binding!(bool, i32, i64, u32, u64, f32, f64, &str, String);

/// Inputs accepted wherever a helper needs "a column": a name or an expression.
pub trait IntoColumnExpr {
    /// Resolve into a column expression.
    fn into_column_expr(self) -> Expr;
}

impl IntoColumnExpr for Expr {
    fn into_column_expr(self) -> Expr {
        self
    }
}

impl IntoColumnExpr for &str {
    fn into_column_expr(self) -> Expr {
        col(self)
    }
}

impl IntoColumnExpr for String {
    fn into_column_expr(self) -> Expr {
        col(self.as_str())
    }
}

impl IntoColumnExpr for &String {
    fn into_column_expr(self) -> Expr {
        col(self.as_str())
    }
}

/// The full argument bundle of a verb call: positional arguments, named
/// bindings (kept in insertion order) and an optional grouping argument.
///
/// Build it with the builder methods or with the [`args!`](crate::args!) macro.
#[derive(Debug, Clone, Default)]
pub struct Args {
    positional: Vec<Arg>,
    named: Vec<(String, Expr)>,
    by: Option<Arg>,
}

impl Args {
    /// Create an empty argument bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    pub fn arg(mut self, arg: impl Into<Arg>) -> Self {
        self.positional.push(arg.into());
        self
    }

    /// Append a named binding; the value's output column is forced to `name`.
    pub fn named(mut self, name: impl Into<String>, value: impl IntoBinding) -> Self {
        self.named.push((name.into(), value.into_binding()));
        self
    }

    /// Set the grouping argument used by grouped-aware verbs.
    pub fn by(mut self, by: impl Into<Arg>) -> Self {
        self.by = Some(by.into());
        self
    }

    /// Positional arguments in call order.
    pub fn positional(&self) -> &[Arg] {
        &self.positional
    }

    /// Named bindings in insertion order.
    pub fn named_bindings(&self) -> &[(String, Expr)] {
        &self.named
    }

    /// The grouping argument, if one was supplied.
    pub fn grouping(&self) -> Option<&Arg> {
        self.by.as_ref()
    }

    /// Returns `true` if there are no positional arguments and no named bindings.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    pub(crate) fn into_parts(self) -> (Vec<Arg>, Vec<(String, Expr)>, Option<Arg>) {
        (self.positional, self.named, self.by)
    }
}

impl From<()> for Args {
    fn from(_: ()) -> Self {
        Args::new()
    }
}

impl From<Arg> for Args {
    fn from(v: Arg) -> Self {
        Args::new().arg(v)
    }
}

impl From<&str> for Args {
    fn from(v: &str) -> Self {
        Args::new().arg(v)
    }
}

impl From<String> for Args {
    fn from(v: String) -> Self {
        Args::new().arg(v)
    }
}

impl From<Expr> for Args {
    fn from(v: Expr) -> Self {
        Args::new().arg(v)
    }
}

impl<T: Into<Arg>> From<Vec<T>> for Args {
    fn from(v: Vec<T>) -> Self {
        Args::new().arg(v)
    }
}

impl<T: Into<Arg>, const N: usize> From<[T; N]> for Args {
    fn from(v: [T; N]) -> Self {
        Args::new().arg(v)
    }
}

impl From<Series> for Args {
    fn from(v: Series) -> Self {
        Args::new().arg(v)
    }
}

impl From<Column> for Args {
    fn from(v: Column) -> Self {
        Args::new().arg(v)
    }
}
