//! File source: turns a path on disk into raw text lines.
//!
//! Bank return files are plain ASCII in practice, but some banks emit Latin-1
//! accents in free-text columns (payer names). A line that is not valid UTF-8 is
//! decoded byte-for-character as Latin-1 so column offsets stay intact.

use crate::error::{Result, ReturnError};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

/// Ordered lines of a file, as read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLines {
    lines: Vec<String>,
}

impl RawLines {
    /// Split raw bytes on `\n`, decoding each line
    ///
    /// A final terminator closes the last line rather than opening a new one,
    /// so `"a\nb\n"` yields two lines and `"a\nb\n\n"` yields a blank third.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return Self { lines: Vec::new() };
        }

        let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
        let lines = body.split(|&b| b == b'\n').map(decode_line).collect();
        Self { lines }
    }

    /// Read every line of the file at `path`
    pub fn read(path: &Path) -> Result<Self> {
        ensure_file(path)?;
        let bytes = std::fs::read(path).map_err(|e| read_error(path, e))?;
        Ok(Self::from_bytes(&bytes))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.lines
    }
}

/// Read only the first line of the file at `path`
pub fn read_first_line(path: &Path) -> Result<String> {
    ensure_file(path)?;
    let file = File::open(path).map_err(|e| read_error(path, e))?;
    let mut reader = BufReader::new(file);

    let mut buf = Vec::new();
    reader
        .read_until(b'\n', &mut buf)
        .map_err(|e| read_error(path, e))?;
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }

    Ok(decode_line(&buf))
}

/// Decode one line: UTF-8 when valid, Latin-1 otherwise. Drops a trailing `\r`.
fn decode_line(bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

fn ensure_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ReturnError::FileNotFound(path.to_path_buf()))
    }
}

fn read_error(path: &Path, source: std::io::Error) -> ReturnError {
    if source.kind() == ErrorKind::NotFound {
        ReturnError::FileNotFound(path.to_path_buf())
    } else {
        ReturnError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
