use crate::{Result, TidyError};

/// Options for reading CSV files.
#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    /// Whether the first row holds column names.
    pub has_header: bool,
    /// Field delimiter byte (e.g. `b','`).
    pub delimiter: u8,
    /// Quote character byte (defaults to `Some(b'\"')`).
    pub quote_char: Option<u8>,
    /// Values read as null in every column.
    pub null_values: Vec<String>,
    /// Rows scanned for schema inference; `None` scans the whole file.
    pub infer_schema_length: Option<usize>,
    /// Columns to keep, in the order given.
    pub columns: Option<Vec<String>>,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            delimiter: b',',
            quote_char: Some(b'"'),
            null_values: Vec::new(),
            infer_schema_length: Some(100),
            columns: None,
        }
    }
}

impl CsvReadOptions {
    /// Set `has_header`.
    pub fn with_has_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Set `delimiter`.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set `quote_char` (`None` disables quoting).
    pub fn with_quote_char(mut self, quote_char: Option<u8>) -> Self {
        self.quote_char = quote_char;
        self
    }

    /// Set the strings read as null.
    pub fn with_null_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.null_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Set `infer_schema_length`.
    pub fn with_infer_schema_length(mut self, infer_schema_length: Option<usize>) -> Self {
        self.infer_schema_length = infer_schema_length;
        self
    }

    /// Keep only the named columns.
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.delimiter == b'\0' {
            return Err(TidyError::configuration(
                "delimiter",
                "delimiter must not be NUL (0x00)",
            ));
        }
        match self.quote_char {
            Some(b'\0') => {
                return Err(TidyError::configuration(
                    "quote_char",
                    "quote_char must not be NUL (0x00)",
                ))
            }
            Some(q) if q == self.delimiter => {
                return Err(TidyError::configuration(
                    "quote_char",
                    "quote_char must differ from the delimiter",
                ))
            }
            _ => {}
        }
        if self.infer_schema_length == Some(0) {
            return Err(TidyError::configuration(
                "infer_schema_length",
                "at least one row is needed to infer a schema",
            ));
        }
        Ok(())
    }
}

/// Options for reading Parquet files.
#[derive(Debug, Clone, Default)]
pub struct ParquetReadOptions {
    /// Columns to keep, in the order given.
    pub columns: Option<Vec<String>>,
}

impl ParquetReadOptions {
    /// Keep only the named columns.
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }
}

/// Options for writing CSV files.
#[derive(Debug, Clone)]
pub struct CsvWriteOptions {
    /// Whether to write a header row.
    pub include_header: bool,
    /// Field delimiter byte.
    pub delimiter: u8,
}

impl Default for CsvWriteOptions {
    fn default() -> Self {
        Self {
            include_header: true,
            delimiter: b',',
        }
    }
}

impl CsvWriteOptions {
    /// Set `include_header`.
    pub fn with_include_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    /// Set `delimiter`.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.delimiter == b'\0' {
            return Err(TidyError::configuration(
                "delimiter",
                "delimiter must not be NUL (0x00)",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{CsvReadOptions, CsvWriteOptions};
    use crate::TidyError;

    #[test]
    fn defaults_are_valid() {
        CsvReadOptions::default().validate().unwrap();
        CsvWriteOptions::default().validate().unwrap();
    }

    #[test]
    fn quote_equal_to_delimiter_is_rejected() {
        let err = CsvReadOptions::default()
            .with_delimiter(b'"')
            .validate()
            .unwrap_err();
        assert!(matches!(err, TidyError::Configuration { option, .. } if option == "quote_char"));
    }

    #[test]
    fn zero_inference_rows_is_rejected() {
        let err = CsvReadOptions::default()
            .with_infer_schema_length(Some(0))
            .validate()
            .unwrap_err();
        assert!(matches!(err, TidyError::Configuration { .. }));
    }
}
