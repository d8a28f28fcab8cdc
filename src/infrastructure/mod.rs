pub mod bootstrap;
pub mod config;
pub mod csv;
pub mod history_store;
pub mod storage;
pub mod webhook;
