//! Route definitions for todo records.

use axum::routing::get;
use axum::Router;

use crate::handlers::todo;
use crate::state::AppState;

/// Todo routes mounted at `/todos`.
///
/// ```text
/// GET    /                  -> list_todos
/// POST   /                  -> create_todo
/// GET    /{id}              -> get_todo
/// PATCH  /{id}              -> update_todo
/// DELETE /{id}              -> delete_todo
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(todo::list_todos).post(todo::create_todo))
        .route(
            "/{id}",
            get(todo::get_todo)
                .patch(todo::update_todo)
                .delete(todo::delete_todo),
        )
}
