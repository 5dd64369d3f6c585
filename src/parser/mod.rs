mod field;
mod itau;
mod registry;
mod result;


pub use field::FixedLine;
pub use itau::ItauLayout;
pub use registry::BankRegistry;
pub use result::{
    Cents, CollectionTotals, HeaderRecord, Occurrence, ParsedReturn, TrailerRecord,
    TransactionRecord,
};

use crate::error::LineError;

/// Character offset of the bank signature in the header line
pub const SIGNATURE_OFFSET: usize = 76;

/// Length of the bank signature
pub const SIGNATURE_LEN: usize = 3;

/// Core trait that every bank layout must implement
///
/// Each method decodes one fixed-width line. Implementations must be pure:
/// the same line always yields the same record or the same error.
pub trait BankLayout: Send + Sync {
    /// Human-readable bank name (e.g., "Itau")
    fn name(&self) -> &str;

    /// Decode the first line of the file
    fn parse_header(&self, line: &str) -> Result<HeaderRecord, LineError>;

    /// Decode the last line of the file
    fn parse_trailer(&self, line: &str) -> Result<TrailerRecord, LineError>;

    /// Decode one line between header and trailer
    fn parse_transaction(&self, line: &str) -> Result<TransactionRecord, LineError>;
}

/// Extract the bank signature from a header line
///
/// A line shorter than the signature's end yields whatever characters are
/// present, which never matches a registered signature.
pub fn signature_of(header_line: &str) -> String {
    header_line
        .chars()
        .skip(SIGNATURE_OFFSET)
        .take(SIGNATURE_LEN)
        .collect()
}
