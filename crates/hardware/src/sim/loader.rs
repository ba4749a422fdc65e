//! Program Image Loader.
//!
//! This module reads the textual program image format. It performs:
//! 1. **Header parsing:** The first line holds the instruction count `N` and data-word count `M`.
//! 2. **Word parsing:** The next `N` lines are instruction words and the `M` after that data
//!    words, one hex-encoded 32-bit value per line.
//! 3. **Error reporting:** Any malformed or missing line is reported with its 1-based line number.
//!
//! A word line is read the way C `%x` reads it: leading whitespace and an optional `0x`
//! prefix are skipped, then a run of hex digits is consumed. Text after the digits is
//! ignored, so a trailing comment on a line is harmless.

use std::fs;
use std::io::BufRead;
use std::path::Path;

use tracing::info;

use crate::common::SimError;

/// Raw words read from a program image, before decoding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgramImage {
    /// Instruction words, in program order.
    pub text: Vec<u32>,
    /// Data words, in address order.
    pub data: Vec<u32>,
}

impl ProgramImage {
    /// Builds an image directly from word lists.
    pub fn new(text: Vec<u32>, data: Vec<u32>) -> Self {
        Self { text, data }
    }

    /// Parses an image from its text.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::MalformedInput`] for a bad header, a bad word, or a missing line.
    pub fn parse(source: &str) -> Result<Self, SimError> {
        let mut lines = source.lines().enumerate().map(|(i, line)| (i + 1, line));

        let (n_text, n_data) = match lines.next() {
            Some((line_no, line)) => parse_header(line_no, line)?,
            None => return Err(malformed(1, "missing header line")),
        };

        let mut read_words = |count: usize, what: &str| -> Result<Vec<u32>, SimError> {
            let mut words = Vec::new();
            for k in 0..count {
                let (line_no, line) = lines.next().ok_or_else(|| {
                    malformed(
                        source.lines().count() + 1,
                        format!("expected {count} {what} words, found {k}"),
                    )
                })?;
                words.push(parse_word(line).ok_or_else(|| {
                    malformed(line_no, format!("invalid hex word {:?}", line.trim()))
                })?);
            }
            Ok(words)
        };

        let text = read_words(n_text, "instruction")?;
        let data = read_words(n_data, "data")?;
        info!(instructions = text.len(), data = data.len(), "program image parsed");
        Ok(Self { text, data })
    }

    /// Parses an image from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if reading fails, otherwise as [`ProgramImage::parse`].
    pub fn from_reader(mut reader: impl BufRead) -> Result<Self, SimError> {
        let mut source = String::new();
        let _ = reader.read_to_string(&mut source)?;
        Self::parse(&source)
    }

    /// Reads and parses an image file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read, otherwise as [`ProgramImage::parse`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let source = fs::read_to_string(path)?;
        Self::parse(&source)
    }
}

fn malformed(line: usize, reason: impl Into<String>) -> SimError {
    SimError::MalformedInput {
        line,
        reason: reason.into(),
    }
}

/// Parses the `N M` header.
fn parse_header(line_no: usize, line: &str) -> Result<(usize, usize), SimError> {
    let mut fields = line.split_whitespace().map(str::parse::<usize>);
    match (fields.next(), fields.next()) {
        (Some(Ok(n)), Some(Ok(m))) => Ok((n, m)),
        _ => Err(malformed(
            line_no,
            format!(
                "expected instruction and data counts, got {:?}",
                line.trim()
            ),
        )),
    }
}

/// Parses one hex word, `%x` style. Returns `None` if there are no digits or the value
/// does not fit in 32 bits.
pub fn parse_word(line: &str) -> Option<u32> {
    let trimmed = line.trim_start();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let end = body
        .find(|c: char| !c.is_ascii_hexdigit())
        .unwrap_or(body.len());
    let digits = &body[..end];
    if digits.is_empty() {
        // "0x" with no digits after it still reads the leading zero.
        return (trimmed.len() > body.len()).then_some(0);
    }
    u32::from_str_radix(digits, 16).ok()
}
