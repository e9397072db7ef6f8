//! Store-level integration tests
//!
//! Exercises the SQLite task store lifecycle against an in-memory database.

use taskboard::store::{SqliteTaskStore, TaskStore};

#[tokio::test]
async fn test_listing_is_capped_and_newest_first() -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteTaskStore::connect("sqlite::memory:").await?;

    for i in 1..=7 {
        store.create(&format!("task-{}", i), "").await?;
    }

    let tasks = store.list_incomplete().await?;
    assert_eq!(tasks.len(), 5);

    let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["task-7", "task-6", "task-5", "task-4", "task-3"]);

    Ok(())
}

#[tokio::test]
async fn test_completed_tasks_leave_the_listing() -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteTaskStore::connect("sqlite::memory:").await?;

    let keep = store.create("keep", "").await?;
    let done = store.create("done", "").await?;

    assert!(store.complete(done.id).await?);

    let tasks = store.list_incomplete().await?;
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, keep.id);

    Ok(())
}

#[tokio::test]
async fn test_created_tasks_get_distinct_ids() -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteTaskStore::connect("sqlite::memory:").await?;

    let first = store.create("first", "a").await?;
    let second = store.create("second", "b").await?;
    assert_ne!(first.id, second.id);

    // The created record echoes its input
    assert_eq!(second.title, "second");
    assert_eq!(second.description, "b");

    Ok(())
}

#[tokio::test]
async fn test_complete_reports_missing_rows() {
    let store = SqliteTaskStore::connect("sqlite::memory:").await.unwrap();
    assert!(!store.complete(999_999).await.unwrap());
}

#[tokio::test]
async fn test_initialize_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteTaskStore::connect("sqlite::memory:").await?;
    store.initialize().await?;

    store.create("survives re-init", "").await?;
    store.initialize().await?;
    assert_eq!(store.list_incomplete().await?.len(), 1);

    Ok(())
}
