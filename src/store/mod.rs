//! Task persistence module
//!
//! This module provides the task store interface and its SQL-backed
//! implementation.

pub mod sql_task_store;
pub mod task_store;

pub use sql_task_store::*;
pub use task_store::*;
