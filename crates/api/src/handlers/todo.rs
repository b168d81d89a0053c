//! Handlers for todo CRUD.
//!
//! Payload shape and path parameters are checked by the extractors before
//! any service call; service errors are mapped to HTTP by [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use todo_db::models::todo::{CreateTodo, UpdateTodo};

use crate::error::AppResult;
use crate::extract::{TodoId, ValidatedJson};
use crate::state::AppState;

/// GET /todos
///
/// All todos in creation order.
pub async fn list_todos(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.todos.list_todos().await)
}

/// POST /todos
pub async fn create_todo(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTodo>,
) -> impl IntoResponse {
    let todo = state.todos.create_todo(input).await;

    (StatusCode::CREATED, Json(todo))
}

/// GET /todos/{id}
pub async fn get_todo(
    State(state): State<AppState>,
    TodoId(id): TodoId,
) -> AppResult<impl IntoResponse> {
    let todo = state.todos.get_todo(id).await?;

    Ok(Json(todo))
}

/// PATCH /todos/{id}
///
/// Only the keys present in the body are applied.
pub async fn update_todo(
    State(state): State<AppState>,
    TodoId(id): TodoId,
    ValidatedJson(input): ValidatedJson<UpdateTodo>,
) -> AppResult<impl IntoResponse> {
    let todo = state.todos.update_todo(id, input).await?;

    Ok(Json(todo))
}

/// DELETE /todos/{id}
pub async fn delete_todo(
    State(state): State<AppState>,
    TodoId(id): TodoId,
) -> AppResult<impl IntoResponse> {
    state.todos.delete_todo(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
