//! Domain types for the todo example.
//!
//! The application state is a record of two slices: the todo list and the
//! visibility filter. Each slice is owned by exactly one reducer. Actions
//! are a closed tagged enum, so every action shape the application can
//! produce is checked at compile time.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a todo item
///
/// Ids are plain integers assigned monotonically by [`TodoIdSequence`];
/// uniqueness is the id source's responsibility, not the reducers'.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from a raw integer
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id source for todos
///
/// Lives outside the reducers: the caller allocates an id, then dispatches
/// `AddTodo` carrying it.
#[derive(Debug, Default)]
pub struct TodoIdSequence {
    next: AtomicU64,
}

impl TodoIdSequence {
    /// Creates a sequence starting at zero
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    /// Allocates the next id
    pub fn next_id(&self) -> TodoId {
        TodoId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier
    pub id: TodoId,
    /// Text of the todo
    pub text: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl Todo {
    /// Creates a new, uncompleted todo
    #[must_use]
    pub const fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }

    /// Returns a copy with `completed` inverted
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// Which todos the consumer should display
///
/// A closed enumeration: there is no unrecognized-filter case, so queries
/// over it are exhaustive by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisibilityFilter {
    /// Show every todo
    #[default]
    ShowAll,
    /// Show only todos that are not completed
    ShowActive,
    /// Show only completed todos
    ShowCompleted,
}

impl std::fmt::Display for VisibilityFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShowAll => write!(f, "all"),
            Self::ShowActive => write!(f, "active"),
            Self::ShowCompleted => write!(f, "completed"),
        }
    }
}

/// Overall application state
///
/// One field per slice; each slice is owned exclusively by one reducer and
/// neither reducer reads or writes its sibling.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// The todo list, in insertion order
    pub todos: Vec<Todo>,
    /// The currently selected visibility filter
    pub visibility_filter: VisibilityFilter,
}

impl AppState {
    /// Creates an empty state showing all todos
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todos: Vec::new(),
            visibility_filter: VisibilityFilter::ShowAll,
        }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }
}

/// Every intent that can change application state
///
/// Serialized form matches the conventional wire shapes, e.g.
/// `{"type": "ADD_TODO", "id": 0, "text": "buy milk"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppAction {
    /// Append a new todo with the given id and text
    AddTodo {
        /// Caller-allocated unique id
        id: TodoId,
        /// Text of the new todo
        text: String,
    },

    /// Invert the `completed` flag of the todo with the given id
    ToggleTodo {
        /// Id of the todo to toggle
        id: TodoId,
    },

    /// Replace the visibility filter
    SetVisibilityFilter {
        /// The filter to switch to
        filter: VisibilityFilter,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_new_is_uncompleted() {
        let todo = Todo::new(TodoId::new(3), "Test".to_string());
        assert_eq!(todo.id, TodoId::new(3));
        assert_eq!(todo.text, "Test");
        assert!(!todo.completed);
    }

    #[test]
    fn todo_toggled_inverts_completed() {
        let todo = Todo::new(TodoId::new(0), "Test".to_string());
        let toggled = todo.toggled();
        assert!(toggled.completed);
        assert!(!toggled.toggled().completed);
        assert_eq!(toggled.text, todo.text);
    }

    #[test]
    fn id_sequence_is_monotonic() {
        let ids = TodoIdSequence::new();
        assert_eq!(ids.next_id(), TodoId::new(0));
        assert_eq!(ids.next_id(), TodoId::new(1));
        assert_eq!(ids.next_id(), TodoId::new(2));
    }

    #[test]
    fn default_state_shows_all() {
        let state = AppState::default();
        assert_eq!(state.count(), 0);
        assert_eq!(state.visibility_filter, VisibilityFilter::ShowAll);
    }

    #[test]
    fn actions_use_conventional_wire_shapes() {
        let action: AppAction =
            serde_json::from_str(r#"{"type": "ADD_TODO", "id": 0, "text": "buy milk"}"#).unwrap();
        assert_eq!(
            action,
            AppAction::AddTodo {
                id: TodoId::new(0),
                text: "buy milk".to_string(),
            }
        );

        let json = serde_json::to_string(&AppAction::SetVisibilityFilter {
            filter: VisibilityFilter::ShowActive,
        })
        .unwrap();
        assert_eq!(
            json,
            r#"{"type":"SET_VISIBILITY_FILTER","filter":"SHOW_ACTIVE"}"#
        );
    }
}
