//! Builders for Itau CNAB 400 lines used across unit tests.

/// Blank 400-column line filled in by column position
pub struct LineBuilder {
    chars: Vec<char>,
}

impl LineBuilder {
    pub fn new(record_type: char) -> Self {
        let mut chars = vec![' '; 400];
        chars[0] = record_type;
        Self { chars }
    }

    /// Write `value` starting at 1-based column `from`
    pub fn put(mut self, from: usize, value: &str) -> Self {
        for (i, c) in value.chars().enumerate() {
            self.chars[from - 1 + i] = c;
        }
        self
    }

    /// Zero-padded number spanning columns `from..=to`
    pub fn num(self, from: usize, to: usize, value: u64) -> Self {
        let width = to - from + 1;
        self.put(from, &format!("{:0width$}", value, width = width))
    }

    pub fn build(self) -> String {
        self.chars.into_iter().collect()
    }
}

pub fn header_with_signature(signature: &str) -> String {
    LineBuilder::new('0')
        .put(2, "2RETORNO01COBRANCA")
        .put(27, "0057")
        .put(31, "00")
        .put(33, "12345")
        .put(38, "6")
        .put(47, "ACME COMERCIO LTDA")
        .put(77, signature)
        .put(80, "BANCO ITAU SA")
        .put(95, "150324")
        .put(114, "180324")
        .num(395, 400, 1)
        .build()
}

pub fn header() -> String {
    header_with_signature("341")
}

pub fn transaction(sequence: u64, document: &str, paid_cents: u64) -> String {
    LineBuilder::new('1')
        .put(2, "02")
        .put(4, "12345678000199")
        .put(38, &format!("INV-{document}"))
        .put(83, "109")
        .num(86, 93, 1000 + sequence)
        .put(108, "I")
        .put(109, "06")
        .put(111, "150324")
        .put(117, document)
        .put(147, "100324")
        .num(153, 165, paid_cents)
        .put(166, "341")
        .put(169, "0057")
        .put(174, "01")
        .num(176, 188, 250)
        .num(215, 227, 0)
        .num(228, 240, 0)
        .num(241, 253, 0)
        .num(254, 266, paid_cents)
        .num(267, 279, 0)
        .num(280, 292, 0)
        .put(296, "180324")
        .put(325, "JOSE DA SILVA")
        .put(393, "AA")
        .num(395, 400, sequence)
        .build()
}

pub fn trailer(detail_count: u64, total_cents: u64, sequence: u64) -> String {
    LineBuilder::new('9')
        .put(2, "201341")
        .num(18, 25, detail_count)
        .num(26, 39, total_cents)
        .num(40, 47, 0)
        .num(58, 65, 0)
        .num(66, 79, 0)
        .num(178, 185, 0)
        .num(186, 199, 0)
        .num(208, 212, 7)
        .num(213, 220, detail_count)
        .num(221, 234, total_cents)
        .num(395, 400, sequence)
        .build()
}
