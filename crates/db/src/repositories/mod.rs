//! Repository layer.
//!
//! Repositories own the authoritative records and report absence through
//! `Option` / `bool` rather than errors.

pub mod todo_repo;

pub use todo_repo::{InMemoryTodoRepo, TodoRepository};
