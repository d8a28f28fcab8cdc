use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::csv::ImportSettings;
use crate::domain::error::{AppError, Result};

pub const CONFIG_FILE: &str = "seo_planner.toml";
pub const ENV_PREFIX: &str = "SEO_PLANNER_";

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct WebhookConfig {
    /// Endpoint receiving keyword payloads; delivery is disabled when unset
    #[validate(url)]
    pub url: Option<String>,

    #[validate(range(min = 1, max = 300))]
    pub timeout_secs: u64,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the import history snapshot
    pub data_dir: PathBuf,

    /// `tracing_subscriber::EnvFilter` directive
    #[validate(length(min = 1))]
    pub log_filter: String,

    #[validate(nested)]
    pub webhook: WebhookConfig,

    pub import: ImportSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".seo_planner"),
            log_filter: "info".to_string(),
            webhook: WebhookConfig::default(),
            import: ImportSettings::default(),
        }
    }
}

/// Loads configuration from defaults, `seo_planner.toml`, then
/// `SEO_PLANNER_*` environment variables (nested keys split on `__`).
pub struct ConfigService;

impl ConfigService {
    pub fn load() -> Result<AppConfig> {
        dotenvy::dotenv().ok();
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<AppConfig> {
        let config: AppConfig = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        Self::validate(&config)?;
        tracing::debug!(
            config_file = %path.display(),
            data_dir = %config.data_dir.display(),
            webhook_enabled = config.webhook.url.is_some(),
            "Configuration loaded"
        );
        Ok(config)
    }

    pub fn validate(config: &AppConfig) -> Result<()> {
        config.validate()?;
        config
            .import
            .validate()
            .map_err(|e| AppError::ConfigError(format!("Invalid import settings: {}", e)))
    }
}
