use super::Cents;
use crate::error::LineError;
use chrono::NaiveDate;
use std::str::FromStr;

/// A fixed-width line addressed by 1-based, inclusive column positions
///
/// Columns count characters, not bytes, so Latin-1 text decoded into
/// multi-byte UTF-8 does not shift offsets.
pub struct FixedLine {
    chars: Vec<char>,
}

impl FixedLine {
    /// Wrap a line, rejecting it if shorter than `min_width` characters
    pub fn new(line: &str, min_width: usize) -> Result<Self, LineError> {
        let chars: Vec<char> = line.chars().collect();
        if chars.len() < min_width {
            return Err(LineError::TooShort {
                expected: min_width,
                actual: chars.len(),
            });
        }
        Ok(Self { chars })
    }

    /// Check the record-type marker in column 1
    pub fn expect_record_type(&self, expected: char) -> Result<(), LineError> {
        let found = self.chars.first().copied().unwrap_or(' ');
        if found == expected {
            Ok(())
        } else {
            Err(LineError::UnexpectedRecordType { expected, found })
        }
    }

    /// Columns `from..=to` verbatim
    pub fn raw(&self, from: usize, to: usize) -> String {
        let start = from.saturating_sub(1).min(self.chars.len());
        let end = to.min(self.chars.len()).max(start);
        self.chars[start..end].iter().collect()
    }

    /// Columns `from..=to` with surrounding blanks removed
    pub fn text(&self, from: usize, to: usize) -> String {
        self.raw(from, to).trim().to_string()
    }

    /// Zero-padded unsigned number
    pub fn number<T: FromStr>(
        &self,
        field: &'static str,
        from: usize,
        to: usize,
    ) -> Result<T, LineError> {
        let value = self.raw(from, to);
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LineError::InvalidNumber { field, value });
        }
        value
            .parse()
            .map_err(|_| LineError::InvalidNumber { field, value })
    }

    /// Amount with two implied decimal places
    pub fn cents(&self, field: &'static str, from: usize, to: usize) -> Result<Cents, LineError> {
        self.number(field, from, to).map(Cents)
    }

    /// DDMMYY date; blank or all-zero columns mean "no date"
    pub fn date(
        &self,
        field: &'static str,
        from: usize,
        to: usize,
    ) -> Result<Option<NaiveDate>, LineError> {
        let value = self.raw(from, to);
        if value.trim().is_empty() || value.bytes().all(|b| b == b'0') {
            return Ok(None);
        }
        NaiveDate::parse_from_str(&value, "%d%m%y")
            .map(Some)
            .map_err(|_| LineError::InvalidDate { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_line_rejected() {
        let err = FixedLine::new("abc", 10).err().unwrap();
        assert_eq!(
            err,
            LineError::TooShort {
                expected: 10,
                actual: 3
            }
        );
    }

    #[test]
    fn test_columns_are_one_based_inclusive() {
        let line = FixedLine::new("0123456789", 10).unwrap();
        assert_eq!(line.raw(1, 3), "012");
        assert_eq!(line.raw(10, 10), "9");
    }

    #[test]
    fn test_text_trims_padding() {
        let line = FixedLine::new("  ITAU    ", 10).unwrap();
        assert_eq!(line.text(1, 10), "ITAU");
    }

    #[test]
    fn test_number_rejects_blanks() {
        let line = FixedLine::new("00012   ", 8).unwrap();
        assert_eq!(line.number::<u32>("count", 1, 5).unwrap(), 12);
        assert!(matches!(
            line.number::<u32>("count", 4, 8),
            Err(LineError::InvalidNumber { field: "count", .. })
        ));
    }

    #[test]
    fn test_cents() {
        let line = FixedLine::new("0000000012345", 13).unwrap();
        let amount = line.cents("amount", 1, 13).unwrap();
        assert_eq!(amount, Cents(12345));
        assert_eq!(amount.to_string(), "123.45");
    }

    #[test]
    fn test_date_parsing() {
        let line = FixedLine::new("150324000000      319924", 24).unwrap();
        assert_eq!(
            line.date("d", 1, 6).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(line.date("d", 7, 12).unwrap(), None);
        assert_eq!(line.date("d", 13, 18).unwrap(), None);
        assert!(matches!(
            line.date("d", 19, 24),
            Err(LineError::InvalidDate { field: "d", .. })
        ));
    }

    #[test]
    fn test_record_type() {
        let line = FixedLine::new("9XYZ", 4).unwrap();
        assert!(line.expect_record_type('9').is_ok());
        assert_eq!(
            line.expect_record_type('0'),
            Err(LineError::UnexpectedRecordType {
                expected: '0',
                found: '9'
            })
        );
    }
}
