// ============================================================
// KEYWORD IMPORT USE CASE
// ============================================================
// Orchestrate CSV parsing, column resolution, and record mapping

use std::path::Path;
use std::time::Instant;

use crate::domain::csv::{ColumnMap, ImportSettings, ImportedData, KeywordField, KeywordRecord, Row};
use crate::domain::error::{AppError, Result};
use crate::infrastructure::csv::{ColumnResolver, CsvParser, KeywordAnalyzer, RecordMapper};

/// Keyword import use case
pub struct KeywordImporter {
    settings: ImportSettings,
    parser: CsvParser,
}

impl KeywordImporter {
    /// Create a new keyword importer
    pub fn new(settings: ImportSettings) -> Self {
        Self {
            settings,
            parser: CsvParser::new(),
        }
    }

    /// Create with default configuration
    pub fn default_config() -> Self {
        Self::new(ImportSettings::default())
    }

    /// Import a keyword export from disk
    pub async fn import_file(&self, path: &Path) -> Result<ImportedData> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            AppError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        self.import_bytes(&filename, &bytes)
    }

    /// Import an uploaded file's raw bytes
    pub fn import_bytes(&self, filename: &str, bytes: &[u8]) -> Result<ImportedData> {
        if bytes.len() > self.settings.max_file_bytes {
            return Err(AppError::ValidationError(format!(
                "{} is too large ({} bytes), maximum allowed: {}",
                filename,
                bytes.len(),
                self.settings.max_file_bytes
            )));
        }

        let content = CsvParser::decode(bytes);
        Ok(self.import_content(filename, &content))
    }

    /// Import keyword export text. Never fails: malformed input yields
    /// fewer or emptier records, not an error.
    pub fn import_content(&self, filename: &str, content: &str) -> ImportedData {
        let start = Instant::now();

        let (columns, data_rows) = self.parse_table(content);
        let keywords = RecordMapper::new(&columns).map_rows(&data_rows);

        let processing_time = start.elapsed();
        let stats = KeywordAnalyzer::aggregate(&keywords);
        tracing::info!(
            filename = %filename,
            keyword_count = stats.keyword_count,
            total_volume = stats.total_volume,
            processing_time_ms = processing_time.as_millis() as u64,
            "Keyword export imported"
        );

        ImportedData::new(filename, keywords)
    }

    /// Resolve the header row of some export text
    pub fn resolve_columns(&self, content: &str) -> ColumnMap {
        self.parse_table(content).0
    }

    /// Preview the first N mapped records
    pub fn preview_rows(&self, content: &str, preview_count: usize) -> Vec<KeywordRecord> {
        let (columns, data_rows) = self.parse_table(content);
        let preview: Vec<Row> = data_rows.into_iter().take(preview_count).collect();
        RecordMapper::new(&columns).map_rows(&preview)
    }

    /// Get analysis report without keeping the import
    pub fn analyze_csv(&self, content: &str) -> String {
        let (columns, data_rows) = self.parse_table(content);
        let keywords = RecordMapper::new(&columns).map_rows(&data_rows);

        let resolved: Vec<String> = KeywordField::ALL
            .into_iter()
            .map(|field| match columns.get(field) {
                Some(idx) => format!("{} -> column {}", field, idx + 1),
                None => format!("{} -> not found", field),
            })
            .collect();

        format!(
            "Column Mapping:\n  - {}\n\n{}",
            resolved.join("\n  - "),
            KeywordAnalyzer::report(&keywords)
        )
    }

    /// Split parsed text into a resolved header and the data rows after it
    fn parse_table(&self, content: &str) -> (ColumnMap, Vec<Row>) {
        let mut rows = self.parser.parse(content).into_iter();

        let Some(header) = rows.next() else {
            tracing::warn!("Keyword export is empty");
            return (ColumnMap::default(), Vec::new());
        };

        let columns = ColumnResolver::resolve(&header, &self.settings.aliases);
        let missing = columns.missing_fields();
        if !columns.is_resolved(KeywordField::Keyword) {
            tracing::warn!(headers = ?header, "No keyword column found in export");
        }
        if !missing.is_empty() {
            tracing::debug!(missing = ?missing, "Unresolved columns will use defaults");
        }

        (columns, rows.collect())
    }
}

impl Default for KeywordImporter {
    fn default() -> Self {
        Self::default_config()
    }
}
