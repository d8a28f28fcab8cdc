pub mod business_context;
pub mod error;
pub mod projection;

// Keyword import module
pub mod csv;
