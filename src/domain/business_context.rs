//! Business and traffic context entered before planning
//! Feeds the goal projection with the monthly session target

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use super::projection::ProjectionInput;

/// Content language of the site being planned
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "pt-PT")]
    PtPt,
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "es-ES")]
    EsEs,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::PtPt,
        Language::PtBr,
        Language::EnUs,
        Language::EnGb,
        Language::EsEs,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::PtPt => "pt-PT",
            Self::PtBr => "pt-BR",
            Self::EnUs => "en-US",
            Self::EnGb => "en-GB",
            Self::EsEs => "es-ES",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown language: {}", s))
    }
}

/// Financial and traffic figures for the business being planned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessContext {
    pub language: Language,

    #[validate(length(max = 4096))]
    pub business_context: String,

    #[validate(length(max = 256))]
    pub brand_name: String,

    /// Revenue goal
    #[validate(range(min = 0.0))]
    pub quantitative_goal: f64,

    #[validate(range(min = 0.0))]
    pub current_result: f64,

    /// Conversion rate, in percent
    #[validate(range(min = 0.0, max = 100.0))]
    pub conversion_rate: f64,

    #[validate(range(min = 0.0))]
    pub average_order_value: f64,

    #[validate(range(min = 0.0))]
    pub current_sessions: f64,

    #[validate(range(min = 0.0))]
    pub new_users: f64,

    #[validate(range(min = 0.0))]
    pub required_search_volume: f64,

    #[validate(range(min = 0.0))]
    pub projected_monthly_sessions: f64,
}

impl Default for BusinessContext {
    fn default() -> Self {
        Self {
            language: Language::PtPt,
            business_context: String::new(),
            brand_name: String::new(),
            quantitative_goal: 100_000.0,
            current_result: 70_000.0,
            conversion_rate: 2.0,
            average_order_value: 125.0,
            current_sessions: 40_469.0,
            new_users: 37_000.0,
            required_search_volume: 15_055.0,
            projected_monthly_sessions: 4_818.0,
        }
    }
}

impl BusinessContext {
    pub fn projection_input(&self) -> ProjectionInput {
        ProjectionInput::new(self.projected_monthly_sessions)
    }

    /// Revenue still missing to reach the goal, never negative
    pub fn revenue_gap(&self) -> f64 {
        (self.quantitative_goal - self.current_result).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>().unwrap(), lang);
        }
        assert_eq!("EN-gb".parse::<Language>().unwrap(), Language::EnGb);
        assert!("fr-FR".parse::<Language>().is_err());
    }

    #[test]
    fn test_language_serializes_as_code() {
        let json = serde_json::to_string(&Language::PtBr).unwrap();
        assert_eq!(json, "\"pt-BR\"");
    }

    #[test]
    fn test_defaults_are_valid() {
        let context = BusinessContext::default();
        assert!(context.validate().is_ok());
        assert_eq!(context.projection_input().projected_monthly_sessions, 4818.0);
        assert_eq!(context.revenue_gap(), 30_000.0);
    }

    #[test]
    fn test_conversion_rate_over_100_is_rejected() {
        let context = BusinessContext {
            conversion_rate: 150.0,
            ..Default::default()
        };
        assert!(context.validate().is_err());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let context: BusinessContext =
            serde_json::from_str(r#"{"brandName": "Verde", "language": "es-ES"}"#).unwrap();
        assert_eq!(context.brand_name, "Verde");
        assert_eq!(context.language, Language::EsEs);
        assert_eq!(context.current_sessions, 40_469.0);
    }
}
