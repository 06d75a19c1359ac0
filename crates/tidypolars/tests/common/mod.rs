#![allow(dead_code)]

use tidypolars::Tibble;

/// Install a stderr subscriber honouring `RUST_LOG`; later calls are no-ops.
pub fn init_test_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub fn i64s(tibble: &Tibble, name: &str) -> Vec<Option<i64>> {
    tibble
        .pull(Some(name))
        .unwrap()
        .i64()
        .unwrap()
        .into_iter()
        .collect()
}

pub fn f64s(tibble: &Tibble, name: &str) -> Vec<Option<f64>> {
    tibble
        .pull(Some(name))
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .collect()
}

pub fn bools(tibble: &Tibble, name: &str) -> Vec<Option<bool>> {
    tibble
        .pull(Some(name))
        .unwrap()
        .bool()
        .unwrap()
        .into_iter()
        .collect()
}

pub fn strs(tibble: &Tibble, name: &str) -> Vec<Option<String>> {
    tibble
        .pull(Some(name))
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect()
}
