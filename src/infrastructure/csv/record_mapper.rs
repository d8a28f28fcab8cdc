// ============================================================
// RECORD MAPPER
// ============================================================
// Turn data rows into typed keyword records

use crate::domain::csv::{ColumnMap, FunnelStage, KeywordField, KeywordRecord, Row, SearchIntent};
use crate::shared::numeric::{parse_number_or_zero, to_count};

/// Maps data rows (header already removed) onto keyword records
pub struct RecordMapper<'a> {
    columns: &'a ColumnMap,
}

impl<'a> RecordMapper<'a> {
    pub fn new(columns: &'a ColumnMap) -> Self {
        Self { columns }
    }

    /// Produce exactly one record per input row
    pub fn map_rows(&self, rows: &[Row]) -> Vec<KeywordRecord> {
        rows.iter().map(|row| self.map_row(row)).collect()
    }

    /// Map a single row. Missing or blank cells take the field default and
    /// numeric cells that don't parse become zero.
    pub fn map_row(&self, row: &Row) -> KeywordRecord {
        KeywordRecord {
            keyword: self.text(row, KeywordField::Keyword),
            volume: to_count(self.number(row, KeywordField::Volume)),
            difficulty: self.number(row, KeywordField::Difficulty).clamp(0.0, 100.0),
            relevance: self.number(row, KeywordField::Relevance),
            funnel: FunnelStage::parse(self.cell(row, KeywordField::Funnel)),
            intent: SearchIntent::parse(self.cell(row, KeywordField::Intent)),
            status: self.text(row, KeywordField::Status),
            confirmed: false,
        }
    }

    fn cell<'r>(&self, row: &'r Row, field: KeywordField) -> &'r str {
        self.columns
            .get(field)
            .and_then(|idx| row.get(idx))
            .map(|cell| cell.trim())
            .unwrap_or("")
    }

    fn text(&self, row: &Row, field: KeywordField) -> String {
        self.cell(row, field).to_string()
    }

    fn number(&self, row: &Row, field: KeywordField) -> f64 {
        parse_number_or_zero(self.cell(row, field))
    }
}
