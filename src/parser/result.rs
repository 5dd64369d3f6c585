use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of parsing one return file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedReturn {
    /// Batch-level metadata from the first line
    pub header: HeaderRecord,
    /// Closing totals from the last line
    pub trailer: TrailerRecord,
    /// One record per settled slip, in file order
    pub transactions: Vec<TransactionRecord>,
}

/// Monetary amount in integer cents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cents(pub u64);

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl std::iter::Sum for Cents {
    fn sum<I: Iterator<Item = Cents>>(iter: I) -> Self {
        Cents(iter.map(|c| c.0).sum())
    }
}

/// Header line: identifies the batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderRecord {
    /// Issuing bank code (e.g., "341")
    pub bank_code: String,
    pub bank_name: String,
    /// Beneficiary company as registered at the bank
    pub company_name: String,
    pub agency: String,
    pub account: String,
    /// Date the bank generated the file
    pub generation_date: Option<NaiveDate>,
    /// Date the settled amounts are credited
    pub credit_date: Option<NaiveDate>,
    /// Sequence number of the line within the file
    pub sequence: u32,
}

/// Count and total of one collection modality in the trailer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionTotals {
    pub count: u32,
    pub total: Cents,
}

/// Trailer line: closing summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailerRecord {
    pub bank_code: String,
    pub simple: CollectionTotals,
    pub secured: CollectionTotals,
    pub direct: CollectionTotals,
    /// Bank-side control number of the file
    pub file_control: u32,
    /// Number of detail lines the bank reports
    pub detail_count: u32,
    /// Total amount the bank reports for all details
    pub informed_total: Cents,
    pub sequence: u32,
}

/// Bank status code attached to a transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub code: u8,
    /// Bank-specific meaning of the code, when the layout knows it
    pub description: Option<String>,
}

/// One settled payment slip
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Free-use field the company sent with the remittance
    pub company_reference: String,
    /// The bank's identifier of the slip ("nosso número")
    pub our_number: String,
    pub wallet: String,
    pub occurrence: Occurrence,
    pub occurrence_date: Option<NaiveDate>,
    /// The company's document number ("seu número")
    pub document_number: String,
    pub due_date: Option<NaiveDate>,
    pub face_value: Cents,
    pub collecting_bank: String,
    pub collecting_agency: String,
    pub species: String,
    pub tariff: Cents,
    pub iof: Cents,
    pub rebate: Cents,
    pub discount: Cents,
    pub paid_amount: Cents,
    pub interest: Cents,
    pub other_credits: Cents,
    pub credit_date: Option<NaiveDate>,
    pub payer_name: String,
    /// Error/rejection codes reported by the bank, blank when none
    pub errors: String,
    pub liquidation_code: String,
    pub sequence: u32,
}

impl ParsedReturn {
    /// Sum of the paid amount over all transactions
    pub fn paid_total(&self) -> Cents {
        self.transactions.iter().map(|t| t.paid_amount).sum()
    }
}
