//! Task store interface

use async_trait::async_trait;

use crate::error::TaskError;
use crate::models::Task;

/// Persistence seam for tasks.
///
/// Each operation is a single statement inside its own transaction scope;
/// implementations must not hold a connection open across calls.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Incomplete tasks, most recently created first, capped at five.
    async fn list_incomplete(&self) -> Result<Vec<Task>, TaskError>;

    /// Inserts a task with `completed = false` and returns the created
    /// record with its store-assigned id.
    async fn create(&self, title: &str, description: &str) -> Result<Task, TaskError>;

    /// Marks the task complete. Returns whether a matching row existed;
    /// completing an already-complete task succeeds and still reports true.
    async fn complete(&self, id: i64) -> Result<bool, TaskError>;
}
