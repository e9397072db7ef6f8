//! Core data types

use serde::{Deserialize, Serialize};

/// A persisted to-do item as exposed by the API.
///
/// The backing row also carries `completed` and `created_at`; those columns
/// drive the listing policy but are never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
}

/// Body of `POST /tasks`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
}
