pub mod use_cases;

pub use use_cases::goal_projection::GoalProjector;
pub use use_cases::import_history::{ImportHistory, SharedImportHistory};
pub use use_cases::keyword_import::KeywordImporter;
