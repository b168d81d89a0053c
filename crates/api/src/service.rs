//! Business logic for todo operations.
//!
//! [`TodoService`] is the only place where repository absence (`None` /
//! `false`) becomes a [`CoreError::NotFound`].

use std::sync::Arc;

use todo_core::error::CoreError;
use todo_core::types::DbId;
use todo_db::models::todo::{CreateTodo, Todo, UpdateTodo};
use todo_db::repositories::TodoRepository;

const ENTITY: &str = "Todo";

/// Todo operations over an injected repository.
///
/// Cheaply cloneable; clones share the same repository.
#[derive(Clone)]
pub struct TodoService {
    repo: Arc<dyn TodoRepository>,
}

impl TodoService {
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_todos(&self) -> Vec<Todo> {
        tracing::info!("Listing todos");
        self.repo.list().await
    }

    pub async fn create_todo(&self, input: CreateTodo) -> Todo {
        tracing::info!(title = %input.title, "Creating todo");
        let todo = self.repo.create(input).await;
        tracing::info!(todo_id = todo.id, "Todo created");
        todo
    }

    pub async fn get_todo(&self, id: DbId) -> Result<Todo, CoreError> {
        self.repo.get(id).await.ok_or_else(|| not_found(id))
    }

    /// Apply a partial update.
    pub async fn update_todo(&self, id: DbId, input: UpdateTodo) -> Result<Todo, CoreError> {
        tracing::info!(todo_id = id, "Updating todo");
        let updated = self.repo.update(id, input).await.ok_or_else(|| not_found(id))?;
        tracing::info!(todo_id = id, completed = updated.completed, "Todo updated");
        Ok(updated)
    }

    pub async fn delete_todo(&self, id: DbId) -> Result<(), CoreError> {
        tracing::info!(todo_id = id, "Deleting todo");
        if !self.repo.delete(id).await {
            return Err(not_found(id));
        }
        tracing::info!(todo_id = id, "Todo deleted");
        Ok(())
    }
}

fn not_found(id: DbId) -> CoreError {
    tracing::warn!(todo_id = id, "Todo not found");
    CoreError::NotFound { entity: ENTITY, id }
}
