/// Build [`Args`](crate::Args) from positional arguments and `name = value` bindings.
///
/// Positional arguments come first; named bindings follow a `;`:
///
/// ```
/// use tidypolars::{args, col, funs, lit, tibble};
///
/// let df = tibble!("x" => [1i64, 2], "y" => [3i64, 4], "g" => ["a", "b"])?;
///
/// let picked = df.select(args!["x", col("y")])?;
/// assert_eq!(picked.names(), ["x", "y"]);
///
/// let added = df.mutate(args![total = col("x") + col("y"), flag = true])?;
/// assert_eq!(added.ncol(), 5);
///
/// let per_group = args![funs::sum("x"); doubled = funs::sum("y") * lit(2i64)].by("g");
/// let grouped = df.summarize(per_group)?;
/// assert_eq!(grouped.names(), ["g", "x", "doubled"]);
/// # Ok::<(), tidypolars::TidyError>(())
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::new()
    };
    ($($arg:expr),+ ; $($name:ident = $value:expr),+ $(,)?) => {
        $crate::Args::new()
            $(.arg($arg))+
            $(.named(stringify!($name), $value))+
    };
    ($($name:ident = $value:expr),+ $(,)?) => {
        $crate::Args::new()
            $(.named(stringify!($name), $value))+
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::Args::new()
            $(.arg($arg))+
    };
}

/// Build a [`Tibble`](crate::Tibble) from `name => values` pairs.
///
/// Expands to Polars' `df!` and returns `Result<Tibble>`.
///
/// ```
/// let df = tidypolars::tibble!("x" => [1i64, 2, 3], "name" => ["a", "b", "c"])?;
/// assert_eq!(df.nrow(), 3);
/// # Ok::<(), tidypolars::TidyError>(())
/// ```
#[macro_export]
macro_rules! tibble {
    ($($name:expr => $values:expr),+ $(,)?) => {
        $crate::polars::df!($($name => $values),+)
            .map($crate::Tibble::from)
            .map_err($crate::TidyError::from)
    };
}
