//! Integration tests for the in-memory todo repository.
//!
//! Exercises id allocation, insertion-ordered listing, partial updates and
//! deletion through the `TodoRepository` trait.

use std::sync::Arc;

use todo_db::models::todo::{CreateTodo, UpdateTodo};
use todo_db::repositories::{InMemoryTodoRepo, TodoRepository};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_todo(title: &str) -> CreateTodo {
    CreateTodo {
        title: title.to_string(),
        description: None,
    }
}

fn new_todo_with_description(title: &str, description: &str) -> CreateTodo {
    CreateTodo {
        title: title.to_string(),
        description: Some(description.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Create / list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_is_empty_before_any_create() {
    let repo = InMemoryTodoRepo::new();
    assert!(repo.list().await.is_empty());
}

#[tokio::test]
async fn create_assigns_increasing_ids_and_defaults() {
    let repo = InMemoryTodoRepo::new();

    let first = repo.create(new_todo("First")).await;
    let second = repo.create(new_todo_with_description("Second", "details")).await;

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert!(!first.completed);
    assert!(!second.completed);
    assert_eq!(first.description, None);
    assert_eq!(second.description.as_deref(), Some("details"));
    assert!(second.created_at >= first.created_at);
}

#[tokio::test]
async fn list_returns_records_in_creation_order() {
    let repo = InMemoryTodoRepo::new();
    for title in ["a", "b", "c", "d"] {
        repo.create(new_todo(title)).await;
    }

    let titles: Vec<String> = repo.list().await.into_iter().map(|t| t.title).collect();
    assert_eq!(titles, ["a", "b", "c", "d"]);
}

#[tokio::test]
async fn get_returns_none_for_unknown_id() {
    let repo = InMemoryTodoRepo::new();
    repo.create(new_todo("only")).await;

    assert!(repo.get(1).await.is_some());
    assert!(repo.get(2).await.is_none());
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_changes_only_provided_fields() {
    let repo = InMemoryTodoRepo::new();
    let created = repo
        .create(new_todo_with_description("Title", "Keep me"))
        .await;

    let updated = repo
        .update(
            created.id,
            UpdateTodo {
                completed: Some(true),
                ..Default::default()
            },
        )
        .await
        .expect("todo should exist");

    assert!(updated.completed);
    assert_eq!(updated.title, "Title");
    assert_eq!(updated.description.as_deref(), Some("Keep me"));
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(repo.get(created.id).await, Some(updated));
}

#[tokio::test]
async fn update_with_null_description_clears_it() {
    let repo = InMemoryTodoRepo::new();
    let created = repo.create(new_todo_with_description("T", "old")).await;

    let updated = repo
        .update(
            created.id,
            UpdateTodo {
                description: Some(None),
                ..Default::default()
            },
        )
        .await
        .expect("todo should exist");

    assert_eq!(updated.description, None);
    assert_eq!(updated.title, "T");
}

#[tokio::test]
async fn update_unknown_id_returns_none() {
    let repo = InMemoryTodoRepo::new();
    repo.create(new_todo("1")).await;
    repo.create(new_todo("2")).await;

    let result = repo
        .update(
            999,
            UpdateTodo {
                title: Some("x".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(result.is_none());
}

#[tokio::test]
async fn update_keeps_list_position() {
    let repo = InMemoryTodoRepo::new();
    for title in ["a", "b", "c"] {
        repo.create(new_todo(title)).await;
    }

    repo.update(
        1,
        UpdateTodo {
            title: Some("A".to_string()),
            ..Default::default()
        },
    )
    .await;

    let titles: Vec<String> = repo.list().await.into_iter().map(|t| t.title).collect();
    assert_eq!(titles, ["A", "b", "c"]);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_removes_record_and_reports_outcome() {
    let repo = InMemoryTodoRepo::new();
    let created = repo.create(new_todo("gone")).await;

    assert!(repo.delete(created.id).await);
    assert!(!repo.delete(created.id).await);
    assert!(repo.get(created.id).await.is_none());
    assert!(repo.update(created.id, UpdateTodo::default()).await.is_none());
    assert!(repo.list().await.is_empty());
}

#[tokio::test]
async fn deleted_ids_are_never_reused() {
    let repo = InMemoryTodoRepo::new();
    repo.create(new_todo("1")).await;
    let second = repo.create(new_todo("2")).await;

    assert!(repo.delete(second.id).await);
    let third = repo.create(new_todo("3")).await;

    assert_eq!(third.id, 3);
}

#[tokio::test]
async fn delete_preserves_order_of_remaining_records() {
    let repo = InMemoryTodoRepo::new();
    for title in ["a", "b", "c"] {
        repo.create(new_todo(title)).await;
    }

    assert!(repo.delete(2).await);

    let ids: Vec<i64> = repo.list().await.into_iter().map(|t| t.id).collect();
    assert_eq!(ids, [1, 3]);
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_allocate_unique_ids() {
    let repo = Arc::new(InMemoryTodoRepo::new());

    let handles: Vec<_> = (0..50)
        .map(|i| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move { repo.create(new_todo(&format!("todo {i}"))).await.id })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort_unstable();

    assert_eq!(ids, (1..=50).collect::<Vec<i64>>());
    assert_eq!(repo.list().await.len(), 50);
}
