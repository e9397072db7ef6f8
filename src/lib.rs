//! taskboard: a minimal task-tracking HTTP service
//!
//! Exposes three routes — list incomplete tasks, create a task, mark a task
//! complete — backed by a SQLite task table.

pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod store;

pub use config::AppConfig;
pub use error::TaskError;
pub use models::Task;
