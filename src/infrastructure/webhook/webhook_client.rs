use super::{KeywordDelivery, KeywordPayload};
use crate::domain::csv::KeywordRecord;
use crate::domain::error::{AppError, Result};
use crate::infrastructure::config::WebhookConfig;
use async_trait::async_trait;
use std::time::Duration;

pub struct WebhookClient {
    client: reqwest::Client,
    url: Option<String>,
}

impl WebhookClient {
    pub fn new(config: &WebhookConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    fn url(&self) -> Result<&str> {
        self.url
            .as_deref()
            .ok_or_else(|| AppError::ConfigError("Missing webhook URL".to_string()))
    }
}

#[async_trait]
impl KeywordDelivery for WebhookClient {
    async fn send_keywords(&self, keywords: &[KeywordRecord]) -> Result<()> {
        let url = self.url()?;
        let payload = KeywordPayload::new(keywords);

        tracing::info!(url = %url, keyword_count = payload.keyword_count, "Sending keywords to webhook");

        let response = self
            .client
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::DeliveryError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            tracing::error!(url = %url, status = %status, "Webhook rejected keyword payload");
            return Err(AppError::DeliveryError(format!(
                "Webhook error ({}): {}",
                status, text
            )));
        }

        Ok(())
    }
}
