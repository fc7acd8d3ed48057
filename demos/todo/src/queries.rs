//! Derived read-only queries over application state.

use crate::types::{Todo, VisibilityFilter};

/// Selects the todos a consumer should display under the given filter
///
/// The match is exhaustive over [`VisibilityFilter`], so there is no
/// fall-through case for an unrecognized filter.
#[must_use]
pub fn visible_todos(todos: &[Todo], filter: VisibilityFilter) -> Vec<&Todo> {
    match filter {
        VisibilityFilter::ShowAll => todos.iter().collect(),
        VisibilityFilter::ShowActive => todos.iter().filter(|t| !t.completed).collect(),
        VisibilityFilter::ShowCompleted => todos.iter().filter(|t| t.completed).collect(),
    }
}
