use std::fs::File;
use std::path::Path;

use polars::io::csv::read::{CsvParseOptions, CsvReadOptions as PolarsCsvReadOptions, NullValues};
use polars::prelude::{CsvWriter, PlSmallStr, SerReader, SerWriter};

use crate::io::options::{CsvReadOptions, CsvWriteOptions};
use crate::{Result, Tibble, TidyError};

/// Read a CSV file eagerly into a `Tibble` using default `CsvReadOptions`.
pub fn read_csv(path: impl AsRef<Path>) -> Result<Tibble> {
    read_csv_with_options(path, &CsvReadOptions::default())
}

/// Read a CSV file eagerly into a `Tibble` using the provided options.
pub fn read_csv_with_options(path: impl AsRef<Path>, options: &CsvReadOptions) -> Result<Tibble> {
    options.validate()?;

    let path = path.as_ref();
    let file = File::open(path).map_err(|source| TidyError::io_with_path(source, path))?;

    let null_values = (!options.null_values.is_empty()).then(|| {
        NullValues::AllColumns(
            options
                .null_values
                .iter()
                .map(|v| PlSmallStr::from(v.as_str()))
                .collect(),
        )
    });

    let parse = CsvParseOptions::default()
        .with_separator(options.delimiter)
        .with_quote_char(options.quote_char)
        .with_null_values(null_values);

    let df = PolarsCsvReadOptions::default()
        .with_has_header(options.has_header)
        .with_infer_schema_length(options.infer_schema_length)
        .with_parse_options(parse)
        .into_reader_with_file_handle(file)
        .finish()?;

    let df = match options.columns.as_deref() {
        Some(columns) => df.select(columns.iter().map(String::as_str))?,
        None => df,
    };

    tracing::debug!(path = %path.display(), rows = df.height(), "read csv");
    Ok(df.into())
}

/// Write a `Tibble` to a CSV file with a header row and `,` delimiter.
pub fn write_csv(path: impl AsRef<Path>, tibble: &Tibble) -> Result<()> {
    write_csv_with_options(path, tibble, &CsvWriteOptions::default())
}

/// Write a `Tibble` to a CSV file using the provided options.
pub fn write_csv_with_options(
    path: impl AsRef<Path>,
    tibble: &Tibble,
    options: &CsvWriteOptions,
) -> Result<()> {
    options.validate()?;

    let path = path.as_ref();
    let mut file = File::create(path).map_err(|source| TidyError::io_with_path(source, path))?;
    let mut df = tibble.as_polars().clone();

    CsvWriter::new(&mut file)
        .include_header(options.include_header)
        .with_separator(options.delimiter)
        .finish(&mut df)?;

    tracing::debug!(path = %path.display(), rows = df.height(), "wrote csv");
    Ok(())
}
