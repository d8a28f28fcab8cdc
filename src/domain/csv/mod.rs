// ============================================================
// KEYWORD IMPORT DOMAIN LAYER
// ============================================================
// Core types and value objects for keyword-export ingestion
// No I/O, no async, no external dependencies

mod column_map;
mod imported_data;
mod import_settings;
mod keyword_record;
mod keyword_stats;

pub use column_map::{ColumnMap, FieldAliases, KeywordField};
pub use imported_data::{ImportedData, Project};
pub use import_settings::ImportSettings;
pub use keyword_record::{FunnelStage, KeywordRecord, RelevanceTier, SearchIntent};
pub use keyword_stats::{KeywordStats, KeywordSummary};

/// A single row of string cells as produced by the tokenizer
pub type Row = Vec<String>;
