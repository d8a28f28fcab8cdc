// ============================================================
// COLUMN MAP
// ============================================================
// Logical keyword fields, their header aliases, and resolved positions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Logical field of a keyword record that can be sourced from a CSV column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordField {
    Keyword,
    Volume,
    Difficulty,
    Relevance,
    Funnel,
    Intent,
    Status,
}

impl KeywordField {
    /// Every field, in record order
    pub const ALL: [KeywordField; 7] = [
        KeywordField::Keyword,
        KeywordField::Volume,
        KeywordField::Difficulty,
        KeywordField::Relevance,
        KeywordField::Funnel,
        KeywordField::Intent,
        KeywordField::Status,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            KeywordField::Keyword => "keyword",
            KeywordField::Volume => "volume",
            KeywordField::Difficulty => "difficulty",
            KeywordField::Relevance => "relevance",
            KeywordField::Funnel => "funnel",
            KeywordField::Intent => "intent",
            KeywordField::Status => "status",
        }
    }
}

impl fmt::Display for KeywordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Header substrings accepted for each logical field.
///
/// Each list is priority-ordered, most specific alias first. Matching is by
/// substring on the lowercased header, and the first header cell (by position)
/// that contains any alias wins. Alias order never changes which column wins,
/// so a broad alias such as `"volume"` will also claim a header like
/// `"search volume (exact)"` if it comes first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldAliases {
    pub keyword: Vec<String>,
    pub volume: Vec<String>,
    pub difficulty: Vec<String>,
    pub relevance: Vec<String>,
    pub funnel: Vec<String>,
    pub intent: Vec<String>,
    pub status: Vec<String>,
}

impl Default for FieldAliases {
    fn default() -> Self {
        fn list(aliases: &[&str]) -> Vec<String> {
            aliases.iter().map(|a| a.to_string()).collect()
        }

        Self {
            keyword: list(&["keyword"]),
            volume: list(&["search volume", "volume"]),
            difficulty: list(&["keyword difficulty", "difficulty", "kd"]),
            relevance: list(&["relevance"]),
            funnel: list(&["funnel"]),
            intent: list(&["intent"]),
            status: list(&["status"]),
        }
    }
}

impl FieldAliases {
    /// Aliases for one field
    pub fn for_field(&self, field: KeywordField) -> &[String] {
        match field {
            KeywordField::Keyword => &self.keyword,
            KeywordField::Volume => &self.volume,
            KeywordField::Difficulty => &self.difficulty,
            KeywordField::Relevance => &self.relevance,
            KeywordField::Funnel => &self.funnel,
            KeywordField::Intent => &self.intent,
            KeywordField::Status => &self.status,
        }
    }

    /// Validate the alias table
    pub fn validate(&self) -> Result<(), String> {
        for field in KeywordField::ALL {
            let aliases = self.for_field(field);
            if aliases.is_empty() {
                return Err(format!("no aliases configured for field '{}'", field));
            }
            if aliases.iter().any(|a| a.trim().is_empty()) {
                return Err(format!("blank alias configured for field '{}'", field));
            }
        }
        Ok(())
    }
}

/// Resolved column position for each logical field.
/// Built once per import and not modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMap {
    positions: HashMap<KeywordField, usize>,
}

impl ColumnMap {
    pub fn from_positions(positions: HashMap<KeywordField, usize>) -> Self {
        Self { positions }
    }

    /// Column index of a field, `None` when no header matched
    pub fn get(&self, field: KeywordField) -> Option<usize> {
        self.positions.get(&field).copied()
    }

    pub fn is_resolved(&self, field: KeywordField) -> bool {
        self.positions.contains_key(&field)
    }

    /// Fields that did not match any header, in record order
    pub fn missing_fields(&self) -> Vec<KeywordField> {
        KeywordField::ALL
            .into_iter()
            .filter(|f| !self.is_resolved(*f))
            .collect()
    }
}
