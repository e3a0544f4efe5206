use std::{io, path::PathBuf};

use crate::record::Column;

/// Errors raised while loading or saving a dataset.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum DatasetError {
    #[display("dataset source not found: {}", path.display())]
    SourceNotFound { path: PathBuf },
    #[display("failed to open {}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[display("failed to create {}", path.display())]
    Create { path: PathBuf, source: io::Error },
    #[display("malformed CSV data")]
    #[from]
    Csv { source: csv::Error },
    #[display("required column '{column}' is missing from the header")]
    MissingColumn { column: &'static str },
    #[display("line {line}: cannot parse {column} value '{value}'")]
    InvalidField {
        line: u64,
        column: &'static str,
        value: String,
    },
}

/// Precondition violations raised by analysis operations.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum AnalysisError {
    #[display("table has no records")]
    EmptyTable,
    #[display("no {column} values present in the table")]
    NoValues { column: Column },
    #[display("record #{id} ({name}) has no {column} value")]
    MissingValue {
        id: u32,
        name: String,
        column: Column,
    },
    #[display("identifier space exhausted after #{max_id}")]
    IdOverflow { max_id: u32 },
    #[display("at least {required} data points are required, got {actual}")]
    InsufficientData { required: usize, actual: usize },
}
