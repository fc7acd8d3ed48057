//! Todo example demonstrating the Uniflow store end to end.
//!
//! This example shows how to build a small todo-list application:
//!
//! - A closed action enum (`AddTodo`, `ToggleTodo`, `SetVisibilityFilter`)
//! - Two slice reducers scoped and combined into one application reducer
//! - A derived query (`visible_todos`) over the current state
//! - A console consumer subscribing to the store (see `main.rs`)
//! - Testing with `ReducerTest` and proptest
//!
//! # Quick Start
//!
//! ```
//! use todo::{AppAction, TodoIdSequence, app_reducer, visible_todos};
//! use uniflow_runtime::Store;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let ids = TodoIdSequence::new();
//! let store = Store::new(app_reducer());
//!
//! // Add a todo, then complete it.
//! let id = ids.next_id();
//! store.dispatch(AppAction::AddTodo {
//!     id,
//!     text: "Buy milk".to_string(),
//! })?;
//! store.dispatch(AppAction::ToggleTodo { id })?;
//!
//! // Read state.
//! let state = store.snapshot();
//! assert_eq!(state.completed_count(), 1);
//! assert_eq!(visible_todos(&state.todos, state.visibility_filter).len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod queries;
pub mod reducer;
pub mod types;

// Re-export commonly used types
pub use queries::visible_todos;
pub use reducer::{AppReducer, TodosReducer, VisibilityReducer, app_reducer};
pub use types::{AppAction, AppState, Todo, TodoId, TodoIdSequence, VisibilityFilter};
