// ============================================================
// IMPORTED DATA
// ============================================================
// One successful keyword import and the project built from it

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::KeywordRecord;

/// The result of one successful import.
/// Only the `confirmed` flag of the contained records changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedData {
    pub id: String,
    pub filename: String,
    pub created_at: DateTime<Utc>,
    pub keywords: Vec<KeywordRecord>,
    /// Creation time in epoch milliseconds; keys project conversion
    pub timestamp: String,
}

impl ImportedData {
    pub fn new(filename: impl Into<String>, keywords: Vec<KeywordRecord>) -> Self {
        Self::with_created_at(filename, keywords, Utc::now())
    }

    pub fn with_created_at(
        filename: impl Into<String>,
        keywords: Vec<KeywordRecord>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            filename: filename.into(),
            created_at,
            keywords,
            timestamp: created_at.timestamp_millis().to_string(),
        }
    }

    pub fn confirmed_count(&self) -> usize {
        self.keywords.iter().filter(|k| k.confirmed).count()
    }
}

/// A named project created from an import
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub data: ImportedData,
}

impl Project {
    pub fn new(name: impl Into<String>, data: ImportedData) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            created_at: Utc::now(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_token_matches_creation_time() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let data = ImportedData::with_created_at("export.csv", Vec::new(), at);

        assert_eq!(data.timestamp, at.timestamp_millis().to_string());
        assert_eq!(data.filename, "export.csv");
        assert!(uuid::Uuid::parse_str(&data.id).is_ok());
    }

    #[test]
    fn test_each_import_gets_a_fresh_id() {
        let a = ImportedData::new("a.csv", Vec::new());
        let b = ImportedData::new("a.csv", Vec::new());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serializes_camel_case() {
        let data = ImportedData::new("a.csv", Vec::new());
        let json = serde_json::to_value(&data).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
