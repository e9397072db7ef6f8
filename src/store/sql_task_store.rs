//! SQL implementation of TaskStore using sqlx
//!
//! This module provides a persistent task store implementation using sqlx
//! with support for SQLite.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

use crate::error::TaskError;
use crate::models::Task;
use crate::store::task_store::TaskStore;

/// How many tasks a listing returns at most.
pub const LIST_LIMIT: i64 = 5;

/// SQLite implementation of TaskStore
pub struct SqliteTaskStore {
    pool: SqlitePool,
}

impl SqliteTaskStore {
    /// Creates a new SqliteTaskStore with the given connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connects to a SQLite database and initializes the store
    pub async fn connect(url: &str) -> Result<Self, TaskError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| TaskError::storage(&format!("Invalid database URL: {}", e)))?
            .create_if_missing(true);

        // A pooled in-memory database gives each connection its own empty
        // database, so cap the pool at a single connection there.
        let pool_options = if url.contains(":memory:") {
            SqlitePoolOptions::new().max_connections(1)
        } else {
            SqlitePoolOptions::new()
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| TaskError::storage(&format!("Failed to connect to database: {}", e)))?;

        let store = Self::new(pool);
        store.initialize().await?;
        Ok(store)
    }

    /// Initializes the database schema
    pub async fn initialize(&self) -> Result<(), TaskError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS task (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                completed BOOLEAN NOT NULL DEFAULT FALSE,
                created_at TIMESTAMP NOT NULL
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| TaskError::storage(&format!("Failed to initialize database: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl TaskStore for SqliteTaskStore {
    async fn list_incomplete(&self) -> Result<Vec<Task>, TaskError> {
        // id breaks ties between rows sharing a timestamp; ids are monotonic
        // so the tie-break never contradicts creation order.
        let tasks = sqlx::query_as::<_, Task>(
            "SELECT id, title, description FROM task
             WHERE completed = FALSE
             ORDER BY created_at DESC, id DESC
             LIMIT ?",
        )
        .bind(LIST_LIMIT)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TaskError::storage(&format!("Failed to list tasks: {}", e)))?;

        Ok(tasks)
    }

    async fn create(&self, title: &str, description: &str) -> Result<Task, TaskError> {
        let result = sqlx::query(
            "INSERT INTO task (title, description, completed, created_at)
             VALUES (?, ?, FALSE, ?)",
        )
        .bind(title)
        .bind(description)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| TaskError::storage(&format!("Failed to create task: {}", e)))?;

        Ok(Task {
            id: result.last_insert_rowid(),
            title: title.to_string(),
            description: description.to_string(),
        })
    }

    async fn complete(&self, id: i64) -> Result<bool, TaskError> {
        let result = sqlx::query("UPDATE task SET completed = TRUE WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| TaskError::storage(&format!("Failed to complete task: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sqlite_task_store() {
        let store = SqliteTaskStore::connect("sqlite::memory:").await.unwrap();

        // Test create
        let task = store
            .create("Write report", "quarterly numbers")
            .await
            .unwrap();
        assert_eq!(task.title, "Write report");
        assert_eq!(task.description, "quarterly numbers");

        // Test list
        let listed = store.list_incomplete().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], task);

        // Test complete
        let found = store.complete(task.id).await.unwrap();
        assert!(found);
        assert!(store.list_incomplete().await.unwrap().is_empty());

        // Completing again is a no-op write but still reports the row found
        assert!(store.complete(task.id).await.unwrap());

        // Unknown id
        assert!(!store.complete(task.id + 1000).await.unwrap());
    }
}
