// ============================================================
// KEYWORD RECORD
// ============================================================
// Typed keyword row produced by the record mapper

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marketing funnel stage assigned to a keyword
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FunnelStage {
    /// Top of funnel
    Tofu,
    /// Middle of funnel
    Mofu,
    /// Bottom of funnel
    Bofu,
    /// A non-empty tag we don't recognize, kept verbatim
    Other(String),
    #[default]
    Unassigned,
}

impl FunnelStage {
    /// Interpret a raw cell. Accepts TOFU/MOFU/BOFU and top/middle/bottom.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_lowercase().as_str() {
            "" => Self::Unassigned,
            "tofu" | "top" | "top of funnel" => Self::Tofu,
            "mofu" | "middle" | "middle of funnel" => Self::Mofu,
            "bofu" | "bottom" | "bottom of funnel" => Self::Bofu,
            _ => Self::Other(trimmed.to_string()),
        }
    }
}

impl fmt::Display for FunnelStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tofu => write!(f, "TOFU"),
            Self::Mofu => write!(f, "MOFU"),
            Self::Bofu => write!(f, "BOFU"),
            Self::Other(tag) => write!(f, "{}", tag),
            Self::Unassigned => Ok(()),
        }
    }
}

impl From<String> for FunnelStage {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<FunnelStage> for String {
    fn from(value: FunnelStage) -> Self {
        value.to_string()
    }
}

/// Search intent of a keyword
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SearchIntent {
    Informational,
    Navigational,
    Commercial,
    Transactional,
    /// A non-empty tag we don't recognize, kept verbatim
    Other(String),
    #[default]
    Unassigned,
}

impl SearchIntent {
    /// Interpret a raw cell.
    ///
    /// Exports often list several intents in one cell ("Commercial, Transactional")
    /// or use single-letter codes; the first recognized value wins.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Unassigned;
        }

        trimmed
            .split(&[',', ';', '/'][..])
            .find_map(Self::parse_single)
            .unwrap_or_else(|| Self::Other(trimmed.to_string()))
    }

    fn parse_single(part: &str) -> Option<Self> {
        match part.trim().to_lowercase().as_str() {
            "informational" | "i" => Some(Self::Informational),
            "navigational" | "n" => Some(Self::Navigational),
            "commercial" | "c" => Some(Self::Commercial),
            "transactional" | "t" => Some(Self::Transactional),
            _ => None,
        }
    }
}

impl fmt::Display for SearchIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Informational => write!(f, "Informational"),
            Self::Navigational => write!(f, "Navigational"),
            Self::Commercial => write!(f, "Commercial"),
            Self::Transactional => write!(f, "Transactional"),
            Self::Other(tag) => write!(f, "{}", tag),
            Self::Unassigned => Ok(()),
        }
    }
}

impl From<String> for SearchIntent {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<SearchIntent> for String {
    fn from(value: SearchIntent) -> Self {
        value.to_string()
    }
}

/// Display bucket for a relevance score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelevanceTier {
    High,
    Medium,
    Low,
}

impl RelevanceTier {
    pub fn from_score(relevance: f64) -> Self {
        if relevance >= 7.0 {
            Self::High
        } else if relevance >= 4.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// A typed keyword row.
///
/// `volume` and `difficulty` are always numeric; the mapper coerces
/// unparsable cells to zero. `confirmed` is a user annotation and is never
/// read from the imported file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordRecord {
    pub keyword: String,
    pub volume: u64,
    /// Keyword difficulty, 0 to 100
    pub difficulty: f64,
    pub relevance: f64,
    pub funnel: FunnelStage,
    pub intent: SearchIntent,
    pub status: String,
    #[serde(default)]
    pub confirmed: bool,
}

impl KeywordRecord {
    pub fn relevance_tier(&self) -> RelevanceTier {
        RelevanceTier::from_score(self.relevance)
    }

    /// Copy of this record with the confirmation flag flipped
    pub fn toggled(&self) -> Self {
        Self {
            confirmed: !self.confirmed,
            ..self.clone()
        }
    }
}
