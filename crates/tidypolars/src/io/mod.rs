mod csv;
mod options;
mod parquet;

/// CSV I/O helpers.
pub use csv::{read_csv, read_csv_with_options, write_csv, write_csv_with_options};
/// I/O option types.
pub use options::{CsvReadOptions, CsvWriteOptions, ParquetReadOptions};
/// Parquet I/O helpers.
pub use parquet::{read_parquet, read_parquet_with_options, write_parquet};
