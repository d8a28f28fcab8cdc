// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// Tokenizing, column resolution, record mapping, and aggregation

mod column_resolver;
mod csv_parser;
mod keyword_analyzer;
mod record_mapper;

pub use column_resolver::ColumnResolver;
pub use csv_parser::CsvParser;
pub use keyword_analyzer::KeywordAnalyzer;
pub use record_mapper::RecordMapper;
