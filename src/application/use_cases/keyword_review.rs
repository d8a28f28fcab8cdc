//! Keyword review: confirmation toggling and review summary
//!
//! Every operation returns a new record set; the caller owns the mutable
//! copy and decides when to swap it in.

use crate::domain::csv::{KeywordRecord, KeywordSummary};
use crate::domain::error::{AppError, Result};
use crate::infrastructure::csv::KeywordAnalyzer;

/// Flip the `confirmed` flag of the record at `index`
pub fn toggle_confirmed(records: &[KeywordRecord], index: usize) -> Result<Vec<KeywordRecord>> {
    if index >= records.len() {
        return Err(AppError::ValidationError(format!(
            "Keyword index {} out of range ({} keywords)",
            index,
            records.len()
        )));
    }

    Ok(records
        .iter()
        .enumerate()
        .map(|(idx, record)| if idx == index { record.toggled() } else { record.clone() })
        .collect())
}

/// Set `confirmed` on every record
pub fn set_all_confirmed(records: &[KeywordRecord], confirmed: bool) -> Vec<KeywordRecord> {
    records
        .iter()
        .map(|record| KeywordRecord {
            confirmed,
            ..record.clone()
        })
        .collect()
}

pub fn confirmed_only(records: &[KeywordRecord]) -> Vec<KeywordRecord> {
    records.iter().filter(|r| r.confirmed).cloned().collect()
}

pub fn summarize(records: &[KeywordRecord]) -> KeywordSummary {
    KeywordAnalyzer::summarize(records)
}
