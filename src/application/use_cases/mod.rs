pub mod goal_projection;
pub mod import_history;
pub mod keyword_import;
pub mod keyword_review;
