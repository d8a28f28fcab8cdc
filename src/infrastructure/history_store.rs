// ============================================================
// IMPORT HISTORY STORE
// ============================================================
// Injected storage for past imports and the projects built from them

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::csv::{ImportedData, Project};
use crate::domain::error::{AppError, Result};

/// Storage contract for the import history collaborator
pub trait HistoryStore: Send {
    fn insert(&mut self, entry: ImportedData) -> Result<()>;

    /// All imports, newest first
    fn list(&self) -> Vec<ImportedData>;

    fn get(&self, id: &str) -> Option<ImportedData>;

    /// Replace an existing entry with the same id
    fn update(&mut self, entry: ImportedData) -> Result<()>;

    fn remove(&mut self, id: &str) -> Result<ImportedData>;

    /// Drop every import; projects are kept
    fn clear(&mut self) -> Result<()>;

    fn insert_project(&mut self, project: Project) -> Result<()>;

    fn projects(&self) -> Vec<Project>;

    fn set_current_project(&mut self, id: &str) -> Result<()>;

    fn current_project(&self) -> Option<Project>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct HistorySnapshot {
    imports: Vec<ImportedData>,
    projects: Vec<Project>,
    current_project_id: Option<String>,
}

/// History kept in memory for the lifetime of the value
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistoryStore {
    snapshot: HistorySnapshot,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for InMemoryHistoryStore {
    fn insert(&mut self, entry: ImportedData) -> Result<()> {
        self.snapshot.imports.insert(0, entry);
        Ok(())
    }

    fn list(&self) -> Vec<ImportedData> {
        self.snapshot.imports.clone()
    }

    fn get(&self, id: &str) -> Option<ImportedData> {
        self.snapshot.imports.iter().find(|e| e.id == id).cloned()
    }

    fn update(&mut self, entry: ImportedData) -> Result<()> {
        let slot = self
            .snapshot
            .imports
            .iter_mut()
            .find(|e| e.id == entry.id)
            .ok_or_else(|| AppError::NotFound(format!("Import {}", entry.id)))?;
        *slot = entry;
        Ok(())
    }

    fn remove(&mut self, id: &str) -> Result<ImportedData> {
        let idx = self
            .snapshot
            .imports
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Import {}", id)))?;
        Ok(self.snapshot.imports.remove(idx))
    }

    fn clear(&mut self) -> Result<()> {
        self.snapshot.imports.clear();
        Ok(())
    }

    fn insert_project(&mut self, project: Project) -> Result<()> {
        self.snapshot.projects.push(project);
        Ok(())
    }

    fn projects(&self) -> Vec<Project> {
        self.snapshot.projects.clone()
    }

    fn set_current_project(&mut self, id: &str) -> Result<()> {
        if !self.snapshot.projects.iter().any(|p| p.id == id) {
            return Err(AppError::NotFound(format!("Project {}", id)));
        }
        self.snapshot.current_project_id = Some(id.to_string());
        Ok(())
    }

    fn current_project(&self) -> Option<Project> {
        let id = self.snapshot.current_project_id.as_deref()?;
        self.snapshot.projects.iter().find(|p| p.id == id).cloned()
    }
}

/// History persisted as a pretty-printed JSON snapshot, rewritten after
/// every mutation
pub struct JsonFileHistoryStore {
    inner: InMemoryHistoryStore,
    path: PathBuf,
}

impl JsonFileHistoryStore {
    /// Open the snapshot at `path`. A missing or unreadable file starts an
    /// empty history.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let snapshot = Self::load_from_file(&path).unwrap_or_default();

        Self {
            inner: InMemoryHistoryStore { snapshot },
            path,
        }
    }

    fn load_from_file(path: &Path) -> Option<HistorySnapshot> {
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(snapshot) => Some(snapshot),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to parse import history");
                    None
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read import history");
                None
            }
        }
    }

    fn save(&self, snapshot: &HistorySnapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Apply a mutation to a staged copy, write it, and keep it only once
    /// the write succeeded
    fn commit<T>(
        &mut self,
        mutate: impl FnOnce(&mut InMemoryHistoryStore) -> Result<T>,
    ) -> Result<T> {
        let mut staged = self.inner.clone();
        let value = mutate(&mut staged)?;

        if let Err(e) = self.save(&staged.snapshot) {
            tracing::error!(path = %self.path.display(), error = %e, "Failed to save import history");
            return Err(e);
        }

        self.inner = staged;
        Ok(value)
    }
}

impl HistoryStore for JsonFileHistoryStore {
    fn insert(&mut self, entry: ImportedData) -> Result<()> {
        self.commit(|store| store.insert(entry))
    }

    fn list(&self) -> Vec<ImportedData> {
        self.inner.list()
    }

    fn get(&self, id: &str) -> Option<ImportedData> {
        self.inner.get(id)
    }

    fn update(&mut self, entry: ImportedData) -> Result<()> {
        self.commit(|store| store.update(entry))
    }

    fn remove(&mut self, id: &str) -> Result<ImportedData> {
        self.commit(|store| store.remove(id))
    }

    fn clear(&mut self) -> Result<()> {
        self.commit(|store| store.clear())
    }

    fn insert_project(&mut self, project: Project) -> Result<()> {
        self.commit(|store| store.insert_project(project))
    }

    fn projects(&self) -> Vec<Project> {
        self.inner.projects()
    }

    fn set_current_project(&mut self, id: &str) -> Result<()> {
        self.commit(|store| store.set_current_project(id))
    }

    fn current_project(&self) -> Option<Project> {
        self.inner.current_project()
    }
}
