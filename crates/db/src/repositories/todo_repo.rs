//! Repository for todo records.
//!
//! [`TodoRepository`] is the seam the service depends on; [`InMemoryTodoRepo`]
//! is the process-local implementation used by the server.

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use todo_core::types::DbId;

use crate::models::todo::{CreateTodo, Todo, UpdateTodo};

/// Storage operations for todo records.
///
/// Absence is never an error here: `get` and `update` return `None` and
/// `delete` returns `false` for an unknown id.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// All records in insertion order.
    async fn list(&self) -> Vec<Todo>;

    /// Store a new record with a freshly allocated id.
    async fn create(&self, input: CreateTodo) -> Todo;

    async fn get(&self, id: DbId) -> Option<Todo>;

    /// Merge the fields present in `input` into the stored record.
    async fn update(&self, id: DbId, input: UpdateTodo) -> Option<Todo>;

    /// Returns `true` if a record was removed.
    async fn delete(&self, id: DbId) -> bool;
}

struct Store {
    todos: IndexMap<DbId, Todo>,
    next_id: DbId,
}

/// In-memory todo storage.
///
/// The map and the id counter live behind one `RwLock`, so allocation and
/// insertion happen under a single write guard. Ids are never reused: the
/// counter is not rewound when records are deleted.
pub struct InMemoryTodoRepo {
    store: RwLock<Store>,
}

impl InMemoryTodoRepo {
    /// Create an empty repository whose first id is `1`.
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                todos: IndexMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryTodoRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepo {
    async fn list(&self) -> Vec<Todo> {
        self.store.read().await.todos.values().cloned().collect()
    }

    async fn create(&self, input: CreateTodo) -> Todo {
        let mut store = self.store.write().await;
        let id = store.next_id;
        store.next_id += 1;

        let todo = Todo {
            id,
            title: input.title,
            description: input.description,
            completed: false,
            created_at: chrono::Utc::now(),
        };
        store.todos.insert(id, todo.clone());

        tracing::debug!(todo_id = id, "Allocated todo id");
        todo
    }

    async fn get(&self, id: DbId) -> Option<Todo> {
        self.store.read().await.todos.get(&id).cloned()
    }

    async fn update(&self, id: DbId, input: UpdateTodo) -> Option<Todo> {
        let mut store = self.store.write().await;
        let slot = store.todos.get_mut(&id)?;
        let updated = slot.merged(input);
        *slot = updated.clone();
        Some(updated)
    }

    async fn delete(&self, id: DbId) -> bool {
        // `shift_remove` keeps the remaining records in insertion order.
        self.store.write().await.todos.shift_remove(&id).is_some()
    }
}
