//! # SEO Planner
//!
//! Keyword-export ingestion and goal projection for SEO planning.
//!
//! - **Import**: tokenize a loosely structured CSV export, resolve its header
//!   by alias substring, and map each data row onto a typed [`KeywordRecord`]
//! - **Aggregate**: volume, difficulty and review statistics over a record set
//! - **Project**: work back from a monthly session target to the search volume
//!   required and the sessions expected at each SERP position
//!
//! The pipeline itself is pure. Import history, projects and webhook delivery
//! live in a small collaborator layer around it, wired by
//! [`infrastructure::bootstrap::setup`].

mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use app::init_tracing;
pub use application::use_cases::goal_projection::project;
pub use application::{GoalProjector, ImportHistory, KeywordImporter, SharedImportHistory};
pub use domain::csv::{ImportedData, KeywordRecord, KeywordStats};
pub use domain::error::{AppError, Result};
pub use domain::projection::{CtrCurve, ProjectionInput, ProjectionResult};
