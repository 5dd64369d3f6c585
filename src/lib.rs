//! Parser for bank return files: fixed-width settlement reports that banks
//! issue for previously submitted payment slips (boletos).
//!
//! The issuing bank is detected from a signature in the header line, then a
//! bank-specific [`BankLayout`] decodes every line.
//!
//! ```no_run
//! let parsed = boleto_return::detect_and_parse("itau.ret")?;
//! println!("{} transactions", parsed.transactions.len());
//! # Ok::<(), boleto_return::ReturnError>(())
//! ```

pub mod error;
pub mod parser;
pub mod return_file;
pub mod source;

#[cfg(test)]
mod sample;

// Re-export main types for convenience
pub use error::{LineError, Result, ReturnError};

pub use parser::{
    BankLayout, BankRegistry, Cents, CollectionTotals, FixedLine, HeaderRecord, ItauLayout,
    Occurrence, ParsedReturn, TrailerRecord, TransactionRecord,
};

pub use return_file::{parse_file, parse_lines, parse_str, ReturnFileParser};

use std::path::Path;

/// Detect the issuing bank of the file at `path` and parse it
pub fn detect_and_parse(path: impl AsRef<Path>) -> Result<ParsedReturn> {
    detect_and_parse_with(path, &BankRegistry::default())
}

/// Same as [`detect_and_parse`], against a caller-supplied registry
pub fn detect_and_parse_with(
    path: impl AsRef<Path>,
    registry: &BankRegistry,
) -> Result<ParsedReturn> {
    let path = path.as_ref();
    let layout = registry.detect(path)?;
    parse_file(path, layout)
}
