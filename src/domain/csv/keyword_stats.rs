// ============================================================
// KEYWORD STATISTICS
// ============================================================
// Derived figures over a keyword record set; never persisted

use serde::{Deserialize, Serialize};

/// Headline statistics shown for an import
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordStats {
    /// Sum of search volume over all records
    pub total_volume: u64,

    /// Mean keyword difficulty, rounded to one decimal (0 when empty)
    pub avg_difficulty: f64,

    /// Number of records
    pub keyword_count: usize,
}

/// Review progress over a keyword set
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordSummary {
    pub total_keywords: usize,

    /// Mean relevance, rounded to one decimal (0 when empty)
    pub avg_relevance: f64,

    /// Share of confirmed keywords as a whole percentage (0 when empty)
    pub analyzed_percent: u32,
}
