// ============================================================
// IMPORT SETTINGS
// ============================================================
// Configuration values for keyword-export ingestion

use serde::{Deserialize, Serialize};

use super::FieldAliases;

/// Configuration for keyword imports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    /// Largest upload accepted by the file importer, in bytes (default: 10MB)
    pub max_file_bytes: usize,

    /// Header aliases used by the column resolver
    pub aliases: FieldAliases,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            max_file_bytes: 10 * 1024 * 1024,
            aliases: FieldAliases::default(),
        }
    }
}

impl ImportSettings {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.max_file_bytes == 0 {
            return Err("max_file_bytes must be > 0".to_string());
        }
        self.aliases.validate()
    }
}
