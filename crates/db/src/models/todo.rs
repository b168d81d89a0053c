//! Todo entity and request DTOs.

use serde::{Deserialize, Deserializer, Serialize};
use todo_core::types::{DbId, Timestamp};
use validator::Validate;

/// Maximum title length, in characters.
pub const TITLE_MAX_LEN: usize = 200;

/// Maximum description length, in characters.
pub const DESCRIPTION_MAX_LEN: usize = 2000;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A stored todo record.
///
/// `id` and `created_at` are assigned by the repository and never change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: Timestamp,
}

impl Todo {
    /// Return a copy with the fields present in `patch` applied.
    ///
    /// `id` and `created_at` are carried over untouched.
    pub fn merged(&self, patch: UpdateTodo) -> Self {
        let mut next = self.clone();
        if let Some(title) = patch.title {
            next.title = title;
        }
        if let Some(description) = patch.description {
            next.description = description;
        }
        if let Some(completed) = patch.completed {
            next.completed = completed;
        }
        next
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a todo. Unknown keys (`id`, `completed`, ...) are ignored.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTodo {
    #[validate(length(
        min = 1,
        max = 200,
        message = "title must be between 1 and 200 characters"
    ))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 2000, message = "description must be at most 2000 characters"))]
    pub description: Option<String>,
}

/// DTO for partially updating a todo.
///
/// `description` distinguishes "absent" (`None`, keep the stored value) from
/// an explicit `null` (`Some(None)`, clear it). An explicit `null` for
/// `title` or `completed` is treated the same as the key being absent.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTodo {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 200,
        message = "title must be between 1 and 200 characters"
    ))]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "present")]
    #[validate(length(max = 2000, message = "description must be at most 2000 characters"))]
    pub description: Option<Option<String>>,

    #[serde(default)]
    pub completed: Option<bool>,
}

/// Wrap whatever value was sent (including `null`) in `Some`, so that a key
/// present in the payload can be told apart from a missing one.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
