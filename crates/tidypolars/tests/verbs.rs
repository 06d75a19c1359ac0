mod common;

use common::{i64s, init_test_tracing, strs};
use tidypolars::polars::prelude::{NamedFrom, Series};
use tidypolars::{args, col, funs, lit, tibble, Args, Tibble};

fn sample() -> Tibble {
    tibble!(
        "a" => [1i64, 2, 3],
        "b" => [10i64, 20, 30],
        "g" => ["x", "y", "x"],
    )
    .unwrap()
}

#[test]
fn select_supports_reorder_and_alias() {
    init_test_tracing();
    let out = sample().select(args!["b", col("a").alias("aa")]).unwrap();
    assert_eq!(out.names(), ["b", "aa"]);
    assert_eq!(out.nrow(), 3);
}

#[test]
fn select_accepts_a_list_of_names() {
    let out = sample().select(["g", "a"]).unwrap();
    assert_eq!(out.names(), ["g", "a"]);
}

#[test]
fn select_named_bindings_follow_positionals() {
    let out = sample()
        .select(args!["a"; doubled = col("b") * lit(2i64)])
        .unwrap();
    assert_eq!(out.names(), ["a", "doubled"]);
    assert_eq!(i64s(&out, "doubled"), [Some(20), Some(40), Some(60)]);
}

#[test]
fn mutate_overwrites_in_place_and_appends_new_columns() {
    let out = sample()
        .mutate(args![c = col("a") + col("b"), a = col("a") + lit(1i64)])
        .unwrap();
    assert_eq!(out.names(), ["a", "b", "g", "c"]);
    assert_eq!(i64s(&out, "a"), [Some(2), Some(3), Some(4)]);
    assert_eq!(i64s(&out, "c"), [Some(11), Some(22), Some(33)]);
}

#[test]
fn mutate_then_select_originals_is_a_no_op() {
    let df = sample();
    let out = df
        .mutate(args![c = col("a") * col("b")])
        .unwrap()
        .select(["a", "b", "g"])
        .unwrap();
    assert!(out.frame_equal(&df, false));
}

#[test]
fn mutate_binds_literal_values() {
    let out = sample().mutate(args![one = 1i64, label = "k"]).unwrap();
    assert_eq!(i64s(&out, "one"), [Some(1), Some(1), Some(1)]);
    assert_eq!(strs(&out, "label")[2].as_deref(), Some("k"));
}

#[test]
fn filter_predicates_are_anded() {
    let df = sample();
    let split = df
        .filter(args![col("a").gt(lit(1i64)), col("b").lt(lit(30i64))])
        .unwrap();
    let combined = df
        .filter(col("a").gt(lit(1i64)).and(col("b").lt(lit(30i64))))
        .unwrap();
    assert_eq!(i64s(&split, "a"), [Some(2)]);
    assert!(split.frame_equal(&combined, false));
}

#[test]
fn filter_without_predicates_returns_input() {
    let df = sample();
    let out = df.filter(()).unwrap();
    assert!(out.frame_equal(&df, false));
}

#[test]
fn summarize_reduces_to_one_row() {
    let out = sample()
        .summarize(args![total = funs::sum("a"), top = funs::max("b")])
        .unwrap();
    assert_eq!(out.names(), ["total", "top"]);
    assert_eq!(out.nrow(), 1);
    assert_eq!(i64s(&out, "total"), [Some(6)]);
    assert_eq!(i64s(&out, "top"), [Some(30)]);
}

#[test]
fn arrange_sorts_with_direction() {
    let df = sample();
    let desc = df.arrange("a", true).unwrap();
    assert_eq!(i64s(&desc, "a"), [Some(3), Some(2), Some(1)]);

    let mixed = df.arrange(["g", "a"], [false, true]).unwrap();
    assert_eq!(i64s(&mixed, "a"), [Some(3), Some(1), Some(2)]);
}

#[test]
fn arrange_without_keys_returns_input() {
    let df = sample();
    assert!(df.arrange((), false).unwrap().frame_equal(&df, false));
}

#[test]
fn distinct_keeps_first_appearance_order() {
    let out = sample().distinct("g").unwrap();
    assert_eq!(strs(&out, "g"), [Some("x".into()), Some("y".into())]);

    let whole = sample().distinct(()).unwrap();
    assert_eq!(whole.nrow(), 3);
}

#[test]
fn rename_and_drop() {
    let out = sample()
        .rename([("a", "alpha"), ("b", "beta")])
        .unwrap()
        .drop("g")
        .unwrap();
    assert_eq!(out.names(), ["alpha", "beta"]);
}

#[test]
fn bind_rows_and_cols() {
    let df = sample();
    let rows = df.bind_rows(&df).unwrap();
    assert_eq!(rows.nrow(), 6);

    let extra = tibble!("c" => [true, false, true]).unwrap();
    let cols = df.bind_cols(&extra).unwrap();
    assert_eq!(cols.names(), ["a", "b", "g", "c"]);
}

#[test]
fn pull_defaults_to_last_column() {
    let df = sample();
    assert_eq!(df.pull(None).unwrap().name().as_str(), "g");
    assert_eq!(df.pull(Some("b")).unwrap().len(), 3);
}

#[test]
fn slice_variants() {
    let df = sample();
    assert_eq!(i64s(&df.slice([2, 0]).unwrap(), "a"), [Some(3), Some(1)]);
    assert_eq!(i64s(&df.slice_head(2), "a"), [Some(1), Some(2)]);
    assert_eq!(i64s(&df.slice_tail(1), "a"), [Some(3)]);
}

#[test]
fn count_groups_and_sorts() {
    let out = sample().count("g", true, None).unwrap();
    assert_eq!(out.names(), ["g", "n"]);
    assert_eq!(strs(&out, "g"), [Some("x".into()), Some("y".into())]);

    let total = sample().count((), false, Some("rows")).unwrap();
    assert_eq!(total.names(), ["rows"]);
    assert_eq!(total.nrow(), 1);
}

#[test]
fn wrapping_is_interchangeable_with_polars() {
    let df = sample();
    let polars_df = df.clone().into_polars();
    assert_eq!(df.height(), polars_df.height());
    assert!(Tibble::from(polars_df).frame_equal(&df, false));
}

#[test]
fn empty_args_builder_is_empty() {
    assert!(Args::new().is_empty());
    assert!(!args!["a"].is_empty());
}

#[test]
fn select_accepts_a_series_of_names() {
    let names = Series::new("cols".into(), ["b", "a"]);
    let out = sample().select(names).unwrap();
    assert_eq!(out.names(), ["b", "a"]);
}

#[test]
fn series_of_names_can_group() {
    let keys = Series::new("keys".into(), ["g"]);
    let out = sample()
        .summarize(args![total = funs::sum("a")].by(keys))
        .unwrap();
    assert_eq!(out.names(), ["g", "total"]);
    assert_eq!(i64s(&out, "total"), [Some(4), Some(2)]);
}
