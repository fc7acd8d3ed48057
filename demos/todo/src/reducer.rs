//! Reducers for the todo application.
//!
//! Two slice reducers, one per field of [`AppState`], scoped onto the
//! parent state and combined into the application reducer. Both are
//! infallible: an action a reducer does not recognize is a pass-through,
//! never an error.

use crate::types::{AppAction, AppState, Todo, TodoId, VisibilityFilter};
use std::convert::Infallible;
use uniflow_core::{CombinedReducer, Reducer, combine_reducers, scope_reducer};

/// The combined application reducer type
pub type AppReducer = CombinedReducer<AppState, AppAction, Infallible>;

/// Reducer owning the `todos` slice
///
/// Manages the ordered todo sequence by delegating per-item work to the
/// single-item helpers: `AddTodo` appends a freshly built todo, and
/// `ToggleTodo` maps every element through the toggle helper, leaving
/// non-matching items as they are.
#[derive(Clone, Debug, Default)]
pub struct TodosReducer;

impl TodosReducer {
    /// Creates a new `TodosReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Builds a fresh todo for an `AddTodo` action
    fn build(id: TodoId, text: &str) -> Todo {
        Todo::new(id, text.to_owned())
    }

    /// Single-item toggle: `None` when the id does not match
    fn toggle(todo: &Todo, id: TodoId) -> Option<Todo> {
        if todo.id == id {
            Some(todo.toggled())
        } else {
            None
        }
    }
}

impl Reducer for TodosReducer {
    type State = Vec<Todo>;
    type Action = AppAction;
    type Error = Infallible;

    fn reduce(
        &self,
        state: &Vec<Todo>,
        action: &AppAction,
    ) -> Result<Option<Vec<Todo>>, Infallible> {
        match action {
            AppAction::AddTodo { id, text } => {
                // Insertion order, no deduplication; id uniqueness is the
                // id source's responsibility.
                let mut next = state.clone();
                next.push(Self::build(*id, text));
                Ok(Some(next))
            },

            AppAction::ToggleTodo { id } => {
                let mut changed = false;
                let next: Vec<Todo> = state
                    .iter()
                    .map(|todo| match Self::toggle(todo, *id) {
                        Some(toggled) => {
                            changed = true;
                            toggled
                        },
                        None => todo.clone(),
                    })
                    .collect();

                // Pass through when nothing matched so the list is not
                // rebuilt for a miss.
                Ok(changed.then_some(next))
            },

            AppAction::SetVisibilityFilter { .. } => Ok(None),
        }
    }
}

/// Reducer owning the `visibility_filter` slice
#[derive(Clone, Debug, Default)]
pub struct VisibilityReducer;

impl VisibilityReducer {
    /// Creates a new `VisibilityReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for VisibilityReducer {
    type State = VisibilityFilter;
    type Action = AppAction;
    type Error = Infallible;

    fn reduce(
        &self,
        _state: &VisibilityFilter,
        action: &AppAction,
    ) -> Result<Option<VisibilityFilter>, Infallible> {
        match action {
            AppAction::SetVisibilityFilter { filter } => Ok(Some(*filter)),
            AppAction::AddTodo { .. } | AppAction::ToggleTodo { .. } => Ok(None),
        }
    }
}

/// Assembles the combined application reducer
///
/// Each slice reducer is scoped onto its own field of [`AppState`]; the
/// combination is mechanical and routes every action to every slice.
#[must_use]
pub fn app_reducer() -> AppReducer {
    combine_reducers(vec![
        Box::new(scope_reducer(
            TodosReducer::new(),
            |app: &AppState| &app.todos,
            |app: &AppState, todos| AppState {
                todos,
                ..app.clone()
            },
        )),
        Box::new(scope_reducer(
            VisibilityReducer::new(),
            |app: &AppState| &app.visibility_filter,
            |app: &AppState, visibility_filter| AppState {
                visibility_filter,
                ..app.clone()
            },
        )),
    ])
}
