use std::fs::File;
use std::path::Path;

use polars::prelude::{ParquetReader, ParquetWriter, SerReader};

use crate::io::options::ParquetReadOptions;
use crate::{Result, Tibble, TidyError};

/// Read a Parquet file eagerly into a `Tibble` using default `ParquetReadOptions`.
pub fn read_parquet(path: impl AsRef<Path>) -> Result<Tibble> {
    read_parquet_with_options(path, &ParquetReadOptions::default())
}

/// Read a Parquet file eagerly into a `Tibble` using the provided options.
pub fn read_parquet_with_options(
    path: impl AsRef<Path>,
    options: &ParquetReadOptions,
) -> Result<Tibble> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| TidyError::io_with_path(source, path))?;

    let df = ParquetReader::new(file).finish()?;
    let df = match options.columns.as_deref() {
        Some(columns) => df.select(columns.iter().map(String::as_str))?,
        None => df,
    };

    tracing::debug!(path = %path.display(), rows = df.height(), "read parquet");
    Ok(df.into())
}

/// Write a `Tibble` to a Parquet file.
pub fn write_parquet(path: impl AsRef<Path>, tibble: &Tibble) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| TidyError::io_with_path(source, path))?;
    let mut df = tibble.as_polars().clone();

    ParquetWriter::new(file).finish(&mut df)?;

    tracing::debug!(path = %path.display(), rows = df.height(), "wrote parquet");
    Ok(())
}
