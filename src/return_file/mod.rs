//! Generic return file engine.
//!
//! Splits a file into header, transactions and trailer and hands each line to
//! the selected [`BankLayout`]. Parsing stops at the first malformed line; the
//! error carries that line's 1-based position in the file.


use crate::error::{LineError, Result, ReturnError};
use crate::parser::{BankLayout, BankRegistry, ParsedReturn};
use crate::source::RawLines;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Parser bound to one return file and one bank layout
pub struct ReturnFileParser<'a> {
    path: PathBuf,
    layout: &'a dyn BankLayout,
    /// Present once a parse has succeeded
    parsed: Option<ParsedReturn>,
}

impl<'a> ReturnFileParser<'a> {
    /// Bind a parser to `path` using an explicit layout
    pub fn new(path: impl Into<PathBuf>, layout: &'a dyn BankLayout) -> Result<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(ReturnError::FileNotFound(path));
        }

        Ok(Self {
            path,
            layout,
            parsed: None,
        })
    }

    /// Bind a parser to `path`, picking the layout from the file's header
    ///
    /// With `auto_parse` the file is parsed right away.
    pub fn open(
        path: impl Into<PathBuf>,
        registry: &'a BankRegistry,
        auto_parse: bool,
    ) -> Result<Self> {
        let path = path.into();
        let layout = registry.detect(&path)?;
        let mut parser = Self::new(path, layout)?;
        if auto_parse {
            parser.parse()?;
        }
        Ok(parser)
    }

    /// Read and parse the whole file
    ///
    /// Every call re-reads the file. Any previous result is dropped first, so a
    /// failed call leaves the parser unparsed.
    pub fn parse(&mut self) -> Result<&ParsedReturn> {
        self.parsed = None;
        let parsed = parse_file(&self.path, self.layout)?;
        Ok(&*self.parsed.insert(parsed))
    }

    /// Whether the last call to [`parse`](Self::parse) succeeded
    pub fn is_parsed(&self) -> bool {
        self.parsed.is_some()
    }

    /// The result of the last successful parse
    pub fn result(&self) -> Option<&ParsedReturn> {
        self.parsed.as_ref()
    }

    /// Take ownership of the parsed result
    pub fn into_result(self) -> Option<ParsedReturn> {
        self.parsed
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn layout(&self) -> &dyn BankLayout {
        self.layout
    }
}

/// Parse the file at `path` with `layout`
pub fn parse_file(path: &Path, layout: &dyn BankLayout) -> Result<ParsedReturn> {
    let raw = RawLines::read(path)?;
    debug!(path = %path.display(), lines = raw.len(), bank = layout.name(), "parsing return file");
    parse_lines(&raw.into_inner(), layout)
}

/// Parse in-memory file content with `layout`
pub fn parse_str(content: &str, layout: &dyn BankLayout) -> Result<ParsedReturn> {
    parse_lines(&RawLines::from_bytes(content.as_bytes()).into_inner(), layout)
}

/// Parse already-split lines with `layout`
///
/// A single trailing blank line is ignored. Any other blank line, including a
/// second trailing one, is handed to the layout as data.
pub fn parse_lines(lines: &[String], layout: &dyn BankLayout) -> Result<ParsedReturn> {
    let lines = match lines.split_last() {
        Some((last, rest)) if last.is_empty() => rest,
        _ => lines,
    };

    let (header_line, rest) = lines.split_first().ok_or(ReturnError::EmptyFile)?;
    let (trailer_line, body) = rest.split_last().ok_or(ReturnError::EmptyFile)?;
    let trailer_position = lines.len();

    let header = layout
        .parse_header(header_line)
        .map_err(|reason| malformed(1, reason))?;
    let trailer = layout
        .parse_trailer(trailer_line)
        .map_err(|reason| malformed(trailer_position, reason))?;

    // Transactions start on the second line of the file
    let transactions = body
        .iter()
        .enumerate()
        .map(|(i, line)| {
            layout
                .parse_transaction(line)
                .map_err(|reason| malformed(i + 2, reason))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(transactions = transactions.len(), "parsed return file");

    Ok(ParsedReturn {
        header,
        trailer,
        transactions,
    })
}

fn malformed(line: usize, reason: LineError) -> ReturnError {
    ReturnError::MalformedLine { line, reason }
}
