// ============================================================
// IMPORT HISTORY USE CASE
// ============================================================
// Past imports, project conversion, and webhook re-delivery over an
// injected store

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Local};

use crate::domain::csv::{ImportedData, KeywordRecord, KeywordStats, Project};
use crate::domain::error::{AppError, Result};
use crate::infrastructure::csv::KeywordAnalyzer;
use crate::infrastructure::history_store::HistoryStore;
use crate::infrastructure::webhook::KeywordDelivery;

use super::keyword_review;

/// Import history over a caller-supplied store and delivery channel
pub struct ImportHistory<S: HistoryStore> {
    store: S,
    delivery: Arc<dyn KeywordDelivery>,
}

impl<S: HistoryStore> ImportHistory<S> {
    pub fn new(store: S, delivery: Arc<dyn KeywordDelivery>) -> Self {
        Self { store, delivery }
    }

    pub fn record(&mut self, data: ImportedData) -> Result<()> {
        tracing::info!(
            import_id = %data.id,
            filename = %data.filename,
            keyword_count = data.keywords.len(),
            "Recording import"
        );
        self.store.insert(data)
    }

    /// All imports, newest first
    pub fn entries(&self) -> Vec<ImportedData> {
        self.store.list()
    }

    pub fn entry(&self, id: &str) -> Result<ImportedData> {
        self.store
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("Import {}", id)))
    }

    pub fn delete(&mut self, id: &str) -> Result<()> {
        self.store.remove(id)?;
        tracing::info!(import_id = %id, "Import deleted");
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        self.store.clear()?;
        tracing::info!("Import history cleared");
        Ok(())
    }

    /// Flip one keyword's confirmation and return the entry's new record set
    pub fn toggle_confirmed(&mut self, id: &str, index: usize) -> Result<Vec<KeywordRecord>> {
        let mut entry = self.entry(id)?;
        entry.keywords = keyword_review::toggle_confirmed(&entry.keywords, index)?;
        let keywords = entry.keywords.clone();
        let confirmed = entry.confirmed_count();
        self.store.update(entry)?;
        tracing::debug!(import_id = %id, index, confirmed, "Keyword confirmation toggled");
        Ok(keywords)
    }

    /// Statistics over the entry's current records
    pub fn stats(&self, id: &str) -> Result<KeywordStats> {
        Ok(KeywordAnalyzer::aggregate(&self.entry(id)?.keywords))
    }

    /// Create a named project from an import and make it the current project
    pub fn convert_to_project(&mut self, id: &str, name: &str) -> Result<Project> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::ValidationError(
                "Please enter a project name".to_string(),
            ));
        }

        let entry = self.entry(id)?;
        let project = Project::new(name, entry);
        let project_id = project.id.clone();

        self.store.insert_project(project.clone())?;
        self.store.set_current_project(&project_id)?;

        tracing::info!(project_id = %project_id, import_id = %id, name = %name, "Project created");
        Ok(project)
    }

    /// Whether an import (by its timestamp token) has been turned into a project
    pub fn is_converted(&self, timestamp: &str) -> bool {
        self.store
            .projects()
            .iter()
            .any(|p| p.data.timestamp == timestamp)
    }

    pub fn projects(&self) -> Vec<Project> {
        self.store.projects()
    }

    pub fn current_project(&self) -> Option<Project> {
        self.store.current_project()
    }

    pub fn delivery(&self) -> Arc<dyn KeywordDelivery> {
        Arc::clone(&self.delivery)
    }

    /// Send an entry's keywords through the delivery channel again
    pub async fn resend(&self, id: &str) -> Result<()> {
        let entry = self.entry(id)?;
        deliver(self.delivery.as_ref(), &entry).await
    }
}

async fn deliver(delivery: &dyn KeywordDelivery, entry: &ImportedData) -> Result<()> {
    match delivery.send_keywords(&entry.keywords).await {
        Ok(()) => {
            tracing::info!(import_id = %entry.id, "Data sent successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!(import_id = %entry.id, error = %e, "Failed to send data");
            Err(e)
        }
    }
}

/// Thread-safe shared import history
pub struct SharedImportHistory<S: HistoryStore> {
    inner: Arc<Mutex<ImportHistory<S>>>,
}

impl<S: HistoryStore> SharedImportHistory<S> {
    pub fn new(history: ImportHistory<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(history)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, ImportHistory<S>>> {
        self.inner
            .lock()
            .map_err(|_| AppError::Internal("Import history lock poisoned".to_string()))
    }

    pub fn record(&self, data: ImportedData) -> Result<()> {
        self.lock()?.record(data)
    }

    pub fn entries(&self) -> Result<Vec<ImportedData>> {
        Ok(self.lock()?.entries())
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        self.lock()?.delete(id)
    }

    pub fn clear(&self) -> Result<()> {
        self.lock()?.clear()
    }

    pub fn toggle_confirmed(&self, id: &str, index: usize) -> Result<Vec<KeywordRecord>> {
        self.lock()?.toggle_confirmed(id, index)
    }

    pub fn stats(&self, id: &str) -> Result<KeywordStats> {
        self.lock()?.stats(id)
    }

    pub fn convert_to_project(&self, id: &str, name: &str) -> Result<Project> {
        self.lock()?.convert_to_project(id, name)
    }

    pub fn is_converted(&self, timestamp: &str) -> Result<bool> {
        Ok(self.lock()?.is_converted(timestamp))
    }

    /// Re-send an entry without holding the lock across the request
    pub async fn resend(&self, id: &str) -> Result<()> {
        let (entry, delivery) = {
            let history = self.lock()?;
            (history.entry(id)?, history.delivery())
        };
        deliver(delivery.as_ref(), &entry).await
    }
}

impl<S: HistoryStore> Clone for SharedImportHistory<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Format an RFC 3339 creation time for display in local time
pub fn format_created_at(created_at: &str) -> String {
    match DateTime::parse_from_rfc3339(created_at) {
        Ok(dt) => dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string(),
        Err(e) => {
            tracing::error!(value = %created_at, error = %e, "Error formatting date");
            "Invalid date".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::history_store::InMemoryHistoryStore;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct RecordingDelivery {
        calls: AtomicUsize,
        sent: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl KeywordDelivery for RecordingDelivery {
        async fn send_keywords(&self, keywords: &[KeywordRecord]) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(AppError::DeliveryError("status 500".to_string()));
            }
            self.sent.fetch_add(keywords.len(), Ordering::SeqCst);
            Ok(())
        }
    }

    fn sample_import() -> ImportedData {
        ImportedData::new(
            "semrush.csv",
            vec![
                KeywordRecord {
                    keyword: "plantas".to_string(),
                    volume: 2400,
                    difficulty: 35.0,
                    ..Default::default()
                },
                KeywordRecord {
                    keyword: "vasos".to_string(),
                    volume: 1300,
                    difficulty: 28.0,
                    ..Default::default()
                },
            ],
        )
    }

    fn history_with(delivery: Arc<RecordingDelivery>) -> ImportHistory<InMemoryHistoryStore> {
        ImportHistory::new(InMemoryHistoryStore::new(), delivery)
    }

    #[test]
    fn test_record_and_stats() {
        let mut history = history_with(Arc::new(RecordingDelivery::default()));
        let data = sample_import();
        let id = data.id.clone();
        history.record(data).unwrap();

        let stats = history.stats(&id).unwrap();
        assert_eq!(stats.total_volume, 3700);
        assert_eq!(stats.avg_difficulty, 31.5);
        assert_eq!(stats.keyword_count, 2);
        assert_eq!(history.entries().len(), 1);
    }

    #[test]
    fn test_toggle_confirmed_persists_and_leaves_stats() {
        let mut history = history_with(Arc::new(RecordingDelivery::default()));
        let data = sample_import();
        let id = data.id.clone();
        history.record(data).unwrap();

        let before = history.stats(&id).unwrap();
        let keywords = history.toggle_confirmed(&id, 1).unwrap();
        assert!(keywords[1].confirmed);
        assert!(history.entry(&id).unwrap().keywords[1].confirmed);
        assert_eq!(history.entry(&id).unwrap().confirmed_count(), 1);
        assert_eq!(history.stats(&id).unwrap(), before);
    }

    #[test]
    fn test_delete_and_clear() {
        let mut history = history_with(Arc::new(RecordingDelivery::default()));
        let first = sample_import();
        let first_id = first.id.clone();
        history.record(first).unwrap();
        history.record(sample_import()).unwrap();

        history.delete(&first_id).unwrap();
        assert_eq!(history.entries().len(), 1);
        assert!(matches!(history.delete(&first_id), Err(AppError::NotFound(_))));

        history.clear().unwrap();
        assert!(history.entries().is_empty());
    }

    #[test]
    fn test_convert_to_project() {
        let mut history = history_with(Arc::new(RecordingDelivery::default()));
        let data = sample_import();
        let (id, timestamp) = (data.id.clone(), data.timestamp.clone());
        history.record(data).unwrap();

        assert!(!history.is_converted(&timestamp));
        let project = history.convert_to_project(&id, "  Garden shop ").unwrap();

        assert_eq!(project.name, "Garden shop");
        assert_eq!(project.data.id, id);
        assert!(history.is_converted(&timestamp));
        assert_eq!(history.current_project().map(|p| p.id), Some(project.id));
        assert_eq!(history.projects().len(), 1);
    }

    #[test]
    fn test_convert_requires_name() {
        let mut history = history_with(Arc::new(RecordingDelivery::default()));
        let data = sample_import();
        let id = data.id.clone();
        history.record(data).unwrap();

        let err = history.convert_to_project(&id, "   ").unwrap_err();
        assert!(matches!(err, AppError::ValidationError(msg) if msg == "Please enter a project name"));
        assert!(history.projects().is_empty());
    }

    #[tokio::test]
    async fn test_resend_delivers_keywords() {
        let delivery = Arc::new(RecordingDelivery::default());
        let mut history = history_with(Arc::clone(&delivery));
        let data = sample_import();
        let id = data.id.clone();
        history.record(data).unwrap();

        history.resend(&id).await.unwrap();
        assert_eq!(delivery.calls.load(Ordering::SeqCst), 1);
        assert_eq!(delivery.sent.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_resend_failure_is_reported_not_retried() {
        let delivery = Arc::new(RecordingDelivery {
            fail: true,
            ..Default::default()
        });
        let shared = SharedImportHistory::new(history_with(Arc::clone(&delivery)));
        let data = sample_import();
        let id = data.id.clone();
        shared.record(data).unwrap();

        let err = shared.resend(&id).await.unwrap_err();
        assert!(matches!(err, AppError::DeliveryError(_)));
        assert_eq!(delivery.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_resend_unknown_import() {
        let history = history_with(Arc::new(RecordingDelivery::default()));
        assert!(matches!(history.resend("missing").await, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_shared_history_clones_share_state() {
        let shared = SharedImportHistory::new(history_with(Arc::new(RecordingDelivery::default())));
        let other = shared.clone();
        other.record(sample_import()).unwrap();
        assert_eq!(shared.entries().unwrap().len(), 1);
    }

    #[test]
    fn test_format_created_at() {
        assert_eq!(format_created_at("yesterday"), "Invalid date");
        let formatted = format_created_at("2024-03-01T12:00:00Z");
        assert_eq!(formatted.len(), "2024-03-01 12:00:00".len());
        assert!(formatted.starts_with("2024-0"));
    }
}
