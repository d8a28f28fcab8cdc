pub mod webhook_client;

use crate::domain::csv::KeywordRecord;
use crate::domain::error::Result;
use async_trait::async_trait;
use serde::Serialize;

pub use webhook_client::WebhookClient;

/// Outbound delivery of an import's keywords. Reports success or failure
/// only; callers surface the outcome and never retry.
#[async_trait]
pub trait KeywordDelivery: Send + Sync {
    async fn send_keywords(&self, keywords: &[KeywordRecord]) -> Result<()>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordPayload<'a> {
    pub keywords: &'a [KeywordRecord],
    pub keyword_count: usize,
}

impl<'a> KeywordPayload<'a> {
    pub fn new(keywords: &'a [KeywordRecord]) -> Self {
        Self {
            keywords,
            keyword_count: keywords.len(),
        }
    }
}
