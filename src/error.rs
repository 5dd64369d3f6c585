use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while detecting or parsing a return file
#[derive(Error, Debug)]
pub enum ReturnError {
    #[error("Return file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported bank signature: {0:?}")]
    UnsupportedBank(String),

    #[error("Return file needs at least a header and a trailer line")]
    EmptyFile,

    #[error("Malformed line {line}: {reason}")]
    MalformedLine { line: usize, reason: LineError },

    #[error("Invalid bank signature {0:?}: expected 3 characters")]
    InvalidSignature(String),
}

/// Why a single fixed-width line could not be decoded by a layout
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("line too short: {actual} characters (min: {expected})")]
    TooShort { expected: usize, actual: usize },

    #[error("expected record type {expected:?}, found {found:?}")]
    UnexpectedRecordType { expected: char, found: char },

    #[error("field {field} is not numeric: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("field {field} is not a DDMMYY date: {value:?}")]
    InvalidDate { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ReturnError>;
