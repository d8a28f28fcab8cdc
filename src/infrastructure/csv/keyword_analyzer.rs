// ============================================================
// KEYWORD ANALYZER
// ============================================================
// Summary statistics over a keyword record set

use crate::domain::csv::{KeywordRecord, KeywordStats, KeywordSummary, RelevanceTier};
use crate::shared::numeric::{round_half_up, round_to_one_decimal};

/// Aggregation over keyword records. Every method is a pure function of
/// its input.
pub struct KeywordAnalyzer;

impl KeywordAnalyzer {
    /// Volume, difficulty and count statistics. Zeros for an empty set.
    /// The volume total saturates at `u64::MAX`.
    pub fn aggregate(records: &[KeywordRecord]) -> KeywordStats {
        if records.is_empty() {
            return KeywordStats::default();
        }

        let total_volume = records
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.volume));
        let difficulty_sum = records.iter().map(|r| r.difficulty).sum::<f64>();

        KeywordStats {
            total_volume,
            avg_difficulty: round_to_one_decimal(difficulty_sum / records.len() as f64),
            keyword_count: records.len(),
        }
    }

    /// Review progress: average relevance and the share already confirmed
    pub fn summarize(records: &[KeywordRecord]) -> KeywordSummary {
        if records.is_empty() {
            return KeywordSummary::default();
        }

        let count = records.len() as f64;
        let relevance_sum = records.iter().map(|r| r.relevance).sum::<f64>();
        let confirmed = records.iter().filter(|r| r.confirmed).count() as f64;

        KeywordSummary {
            total_keywords: records.len(),
            avg_relevance: round_to_one_decimal(relevance_sum / count),
            analyzed_percent: round_half_up(confirmed * 100.0 / count) as u32,
        }
    }

    /// Number of records in each relevance tier, as (high, medium, low)
    pub fn tier_counts(records: &[KeywordRecord]) -> (usize, usize, usize) {
        records
            .iter()
            .fold((0, 0, 0), |(high, medium, low), r| match r.relevance_tier() {
                RelevanceTier::High => (high + 1, medium, low),
                RelevanceTier::Medium => (high, medium + 1, low),
                RelevanceTier::Low => (high, medium, low + 1),
            })
    }

    /// Get detailed analysis report
    pub fn report(records: &[KeywordRecord]) -> String {
        let stats = Self::aggregate(records);
        let summary = Self::summarize(records);
        let (high, medium, low) = Self::tier_counts(records);

        format!(
            "Keyword Analysis:\n  - Keywords: {}\n  - Total volume: {}\n  - Avg KD: {:.1}\n  - Avg relevance: {:.1}\n  - Analyzed: {}%\n  - Relevance tiers: {} high / {} medium / {} low",
            stats.keyword_count,
            stats.total_volume,
            stats.avg_difficulty,
            summary.avg_relevance,
            summary.analyzed_percent,
            high,
            medium,
            low
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_record(keyword: &str, volume: u64, difficulty: f64, relevance: f64) -> KeywordRecord {
        KeywordRecord {
            keyword: keyword.to_string(),
            volume,
            difficulty,
            relevance,
            ..Default::default()
        }
    }

    #[test]
    fn test_aggregate_empty_is_zero() {
        let stats = KeywordAnalyzer::aggregate(&[]);
        assert_eq!(stats.total_volume, 0);
        assert_eq!(stats.avg_difficulty, 0.0);
        assert_eq!(stats.keyword_count, 0);
        assert!(!stats.avg_difficulty.is_nan());
    }

    #[test]
    fn test_aggregate_sums_and_rounds() {
        let records = vec![
            create_record("a", 100, 10.0, 0.0),
            create_record("b", 250, 20.0, 0.0),
            create_record("c", 50, 31.0, 0.0),
        ];

        let stats = KeywordAnalyzer::aggregate(&records);
        assert_eq!(stats.total_volume, 400);
        assert_eq!(stats.avg_difficulty, 20.3);
        assert_eq!(stats.keyword_count, 3);
    }

    #[test]
    fn test_aggregate_is_idempotent_and_ignores_confirmation() {
        let mut records = vec![
            create_record("a", 100, 12.0, 0.0),
            create_record("b", 300, 45.0, 0.0),
        ];

        let first = KeywordAnalyzer::aggregate(&records);
        let second = KeywordAnalyzer::aggregate(&records);
        assert_eq!(first, second);

        records[0].confirmed = true;
        assert_eq!(KeywordAnalyzer::aggregate(&records), first);
    }

    #[test]
    fn test_aggregate_saturates_huge_volumes() {
        let records = vec![
            create_record("a", u64::MAX - 5, 10.0, 0.0),
            create_record("b", 10, 20.0, 0.0),
            create_record("c", u64::MAX, 30.0, 0.0),
        ];

        let stats = KeywordAnalyzer::aggregate(&records);
        assert_eq!(stats.total_volume, u64::MAX);
        assert_eq!(stats.avg_difficulty, 20.0);
        assert_eq!(stats.keyword_count, 3);
    }

    #[test]
    fn test_summarize() {
        let mut records = vec![
            create_record("a", 0, 0.0, 8.0),
            create_record("b", 0, 0.0, 5.0),
            create_record("c", 0, 0.0, 2.0),
        ];
        records[0].confirmed = true;

        let summary = KeywordAnalyzer::summarize(&records);
        assert_eq!(summary.total_keywords, 3);
        assert_eq!(summary.avg_relevance, 5.0);
        assert_eq!(summary.analyzed_percent, 33);

        assert_eq!(KeywordAnalyzer::summarize(&[]), KeywordSummary::default());
    }

    #[test]
    fn test_tier_counts() {
        let records = vec![
            create_record("a", 0, 0.0, 9.0),
            create_record("b", 0, 0.0, 7.0),
            create_record("c", 0, 0.0, 4.5),
            create_record("d", 0, 0.0, 0.0),
        ];
        assert_eq!(KeywordAnalyzer::tier_counts(&records), (2, 1, 1));
    }

    #[test]
    fn test_report() {
        let records = vec![create_record("a", 1200, 40.0, 6.0)];
        let report = KeywordAnalyzer::report(&records);

        assert!(report.contains("Keyword Analysis"));
        assert!(report.contains("Total volume: 1200"));
        assert!(report.contains("Avg KD: 40.0"));
    }
}
