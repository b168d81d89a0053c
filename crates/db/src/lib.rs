//! Storage layer for todo records.
//!
//! `models` holds the stored entity and the request DTOs (with their
//! validation rules); `repositories` holds the repository trait and its
//! in-memory implementation.

pub mod models;
pub mod repositories;
