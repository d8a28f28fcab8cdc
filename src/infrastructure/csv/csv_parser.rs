// ============================================================
// CSV PARSER
// ============================================================
// Tokenize keyword exports into rows of trimmed string cells

use encoding_rs::{UTF_8, WINDOWS_1252};

use crate::domain::csv::Row;

/// Comma-separated tokenizer with double-quote support.
///
/// The parser is total: unterminated quotes swallow the rest of the input into
/// the open cell, ragged rows are returned as-is, and rows whose cells are
/// all blank are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvParser;

impl CsvParser {
    const DELIMITER: char = ',';

    /// Create a new CSV parser
    pub fn new() -> Self {
        Self
    }

    /// Parse CSV content from string
    pub fn parse(&self, content: &str) -> Vec<Row> {
        let normalized = content.replace("\r\n", "\n").replace('\r', "\n");

        let mut rows = Vec::new();
        let mut row: Row = Vec::new();
        let mut cell = String::new();
        let mut in_quotes = false;
        let mut chars = normalized.chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                '"' if in_quotes && chars.peek() == Some(&'"') => {
                    cell.push('"');
                    chars.next();
                }
                '"' => in_quotes = !in_quotes,
                c if c == Self::DELIMITER && !in_quotes => {
                    row.push(cell.trim().to_string());
                    cell.clear();
                }
                '\n' if !in_quotes => {
                    row.push(cell.trim().to_string());
                    cell.clear();
                    Self::push_row(&mut rows, std::mem::take(&mut row));
                }
                c => cell.push(c),
            }
        }

        if !cell.is_empty() {
            row.push(cell.trim().to_string());
        }
        Self::push_row(&mut rows, row);

        rows
    }

    fn push_row(rows: &mut Vec<Row>, row: Row) {
        if row.iter().any(|cell| !cell.is_empty()) {
            rows.push(row);
        }
    }

    /// Decode uploaded bytes to text.
    ///
    /// UTF-8 (with or without BOM) is used when the bytes are valid UTF-8;
    /// anything else is read as Windows-1252, which is what spreadsheet tools
    /// emit for "CSV" on most Western-locale desktops.
    pub fn decode(bytes: &[u8]) -> String {
        let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);
        if !had_errors {
            return text.into_owned();
        }

        let (text, _, _) = WINDOWS_1252.decode(bytes);
        text.into_owned()
    }
}
