//! Banco Itau, CNAB 400 return layout.
//!
//! Column positions below are 1-based and inclusive, as printed in the bank's
//! layout manual.

use super::{
    BankLayout, CollectionTotals, FixedLine, HeaderRecord, Occurrence, TrailerRecord,
    TransactionRecord,
};
use crate::error::LineError;

/// Every CNAB 400 record is 400 columns wide
const LINE_WIDTH: usize = 400;

/// Layout for return files issued by Itau (signature "341")
pub struct ItauLayout;

impl BankLayout for ItauLayout {
    fn name(&self) -> &str {
        "Itau"
    }

    fn parse_header(&self, line: &str) -> Result<HeaderRecord, LineError> {
        let line = FixedLine::new(line, LINE_WIDTH)?;
        line.expect_record_type('0')?;

        Ok(HeaderRecord {
            bank_code: line.text(77, 79),
            bank_name: line.text(80, 94),
            company_name: line.text(47, 76),
            agency: line.text(27, 30),
            account: format!("{}-{}", line.text(33, 37), line.text(38, 38)),
            generation_date: line.date("generation_date", 95, 100)?,
            credit_date: line.date("credit_date", 114, 119)?,
            sequence: line.number("sequence", 395, 400)?,
        })
    }

    fn parse_trailer(&self, line: &str) -> Result<TrailerRecord, LineError> {
        let line = FixedLine::new(line, LINE_WIDTH)?;
        line.expect_record_type('9')?;

        Ok(TrailerRecord {
            bank_code: line.text(5, 7),
            simple: CollectionTotals {
                count: line.number("simple_count", 18, 25)?,
                total: line.cents("simple_total", 26, 39)?,
            },
            secured: CollectionTotals {
                count: line.number("secured_count", 58, 65)?,
                total: line.cents("secured_total", 66, 79)?,
            },
            direct: CollectionTotals {
                count: line.number("direct_count", 178, 185)?,
                total: line.cents("direct_total", 186, 199)?,
            },
            file_control: line.number("file_control", 208, 212)?,
            detail_count: line.number("detail_count", 213, 220)?,
            informed_total: line.cents("informed_total", 221, 234)?,
            sequence: line.number("sequence", 395, 400)?,
        })
    }

    fn parse_transaction(&self, line: &str) -> Result<TransactionRecord, LineError> {
        let line = FixedLine::new(line, LINE_WIDTH)?;
        line.expect_record_type('1')?;

        let code: u8 = line.number("occurrence_code", 109, 110)?;

        Ok(TransactionRecord {
            company_reference: line.text(38, 62),
            our_number: line.text(86, 93),
            wallet: line.text(83, 85),
            occurrence: Occurrence {
                code,
                description: occurrence_description(code).map(str::to_string),
            },
            occurrence_date: line.date("occurrence_date", 111, 116)?,
            document_number: line.text(117, 126),
            due_date: line.date("due_date", 147, 152)?,
            face_value: line.cents("face_value", 153, 165)?,
            collecting_bank: line.text(166, 168),
            collecting_agency: line.text(169, 172),
            species: line.text(174, 175),
            tariff: line.cents("tariff", 176, 188)?,
            iof: line.cents("iof", 215, 227)?,
            rebate: line.cents("rebate", 228, 240)?,
            discount: line.cents("discount", 241, 253)?,
            paid_amount: line.cents("paid_amount", 254, 266)?,
            interest: line.cents("interest", 267, 279)?,
            other_credits: line.cents("other_credits", 280, 292)?,
            credit_date: line.date("credit_date", 296, 301)?,
            payer_name: line.text(325, 354),
            errors: line.text(378, 385),
            liquidation_code: line.text(393, 394),
            sequence: line.number("sequence", 395, 400)?,
        })
    }
}

/// Meaning of Itau occurrence codes (columns 109-110 of a transaction)
fn occurrence_description(code: u8) -> Option<&'static str> {
    let description = match code {
        2 => "entry confirmed",
        3 => "entry rejected",
        4 => "data changed",
        5 => "settled without registration",
        6 => "settled",
        7 => "partially settled",
        8 => "settled at notary",
        9 => "written off",
        10 => "written off after settlement",
        11 => "outstanding",
        12 => "rebate granted",
        13 => "rebate cancelled",
        14 => "due date changed",
        15 => "write-off rejected",
        16 => "instruction rejected",
        17 => "data change rejected",
        18 => "contractual collection",
        19 => "protest instruction received",
        20 => "protest suspension received",
        21 => "do-not-protest instruction received",
        23 => "sent to notary",
        24 => "protest instruction rejected",
        25 => "payer claim",
        26 => "collection notice fee",
        27 => "position statement fee",
        28 => "settlement report fee",
        29 => "overdue maintenance fee",
        30 => "monthly fee debit",
        32 => "written off after protest",
        _ => return None,
    };
    Some(description)
}
