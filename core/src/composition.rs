//! Reducer composition utilities
//!
//! This module provides utilities for composing reducers in various ways:
//! - **`combine_reducers`**: Run multiple reducers over the same state/action
//! - **`scope_reducer`**: Focus a reducer on one slice of a larger state
//!
//! Together they express the slice pattern: each slice reducer owns exactly
//! one field of the overall state, is scoped onto the parent state with a
//! lens pair, and the scoped reducers are combined into a single mechanical
//! application reducer.

use crate::reducer::Reducer;

/// Boxed reducer type used by [`combine_reducers`].
pub type BoxedReducer<S, A, E> =
    Box<dyn Reducer<State = S, Action = A, Error = E> + Send + Sync>;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer runs in registration order against the latest state. The
/// combination is entirely mechanical: no action type is special-cased, and
/// every member sees every action. The combined reducer passes through
/// (`Ok(None)`) only when every member passed through; otherwise it yields
/// the assembled state. The first error aborts the run and propagates.
///
/// # Examples
///
/// ```
/// use uniflow_core::{Reducer, combine_reducers, scope_reducer};
/// use std::convert::Infallible;
///
/// #[derive(Clone, Debug, Default)]
/// struct AppState {
///     counter: i32,
///     name: String,
/// }
///
/// #[derive(Clone)]
/// enum AppAction {
///     Increment,
///     SetName(String),
/// }
///
/// struct CounterReducer;
///
/// impl Reducer for CounterReducer {
///     type State = i32;
///     type Action = AppAction;
///     type Error = Infallible;
///
///     fn reduce(&self, state: &i32, action: &AppAction) -> Result<Option<i32>, Infallible> {
///         match action {
///             AppAction::Increment => Ok(Some(state + 1)),
///             AppAction::SetName(_) => Ok(None),
///         }
///     }
/// }
///
/// struct NameReducer;
///
/// impl Reducer for NameReducer {
///     type State = String;
///     type Action = AppAction;
///     type Error = Infallible;
///
///     fn reduce(&self, _state: &String, action: &AppAction) -> Result<Option<String>, Infallible> {
///         match action {
///             AppAction::SetName(name) => Ok(Some(name.clone())),
///             AppAction::Increment => Ok(None),
///         }
///     }
/// }
///
/// let combined = combine_reducers(vec![
///     Box::new(scope_reducer(
///         CounterReducer,
///         |app: &AppState| &app.counter,
///         |app: &AppState, counter| AppState { counter, ..app.clone() },
///     )),
///     Box::new(scope_reducer(
///         NameReducer,
///         |app: &AppState| &app.name,
///         |app: &AppState, name| AppState { name, ..app.clone() },
///     )),
/// ]);
///
/// let state = AppState::default();
/// let next = combined.reduce(&state, &AppAction::Increment).unwrap();
/// assert_eq!(next.unwrap().counter, 1);
/// ```
#[must_use]
pub fn combine_reducers<S, A, E>(reducers: Vec<BoxedReducer<S, A, E>>) -> CombinedReducer<S, A, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in registration order.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    reducers: Vec<BoxedReducer<S, A, E>>,
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    type State = S;
    type Action = A;
    type Error = E;

    fn reduce(&self, state: &S, action: &A) -> Result<Option<S>, E> {
        let mut next: Option<S> = None;

        for reducer in &self.reducers {
            // Each member sees the latest state, including changes made by
            // earlier members in this same dispatch.
            let current = next.as_ref().unwrap_or(state);
            if let Some(updated) = reducer.reduce(current, action)? {
                next = Some(updated);
            }
        }

        Ok(next)
    }
}

/// Scopes a reducer to operate on one slice of a larger state.
///
/// The lens pair consists of a projection `fn(&S) -> &Slice` and an
/// embedding `fn(&S, Slice) -> S` (clone-with-override). The scoped reducer
/// passes through whenever the inner reducer passes through, so untouched
/// sibling slices are never rebuilt.
///
/// # Examples
///
/// ```
/// use uniflow_core::{Reducer, scope_reducer};
/// use std::convert::Infallible;
///
/// #[derive(Clone, Debug, Default)]
/// struct AppState {
///     count: i32,
///     label: String,
/// }
///
/// #[derive(Clone)]
/// struct Add(i32);
///
/// struct AddReducer;
///
/// impl Reducer for AddReducer {
///     type State = i32;
///     type Action = Add;
///     type Error = Infallible;
///
///     fn reduce(&self, state: &i32, action: &Add) -> Result<Option<i32>, Infallible> {
///         Ok(Some(state + action.0))
///     }
/// }
///
/// let scoped = scope_reducer(
///     AddReducer,
///     |app: &AppState| &app.count,
///     |app: &AppState, count| AppState { count, ..app.clone() },
/// );
///
/// let state = AppState { count: 5, label: "unchanged".to_string() };
/// let next = scoped.reduce(&state, &Add(3)).unwrap().unwrap();
/// assert_eq!(next.count, 8);
/// assert_eq!(next.label, "unchanged");
/// ```
pub const fn scope_reducer<S, R>(
    reducer: R,
    get_slice: fn(&S) -> &R::State,
    embed_slice: fn(&S, R::State) -> S,
) -> ScopedReducer<S, R>
where
    R: Reducer,
{
    ScopedReducer {
        reducer,
        get_slice,
        embed_slice,
    }
}

/// A reducer focused on one slice of a larger state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, R>
where
    R: Reducer,
{
    reducer: R,
    get_slice: fn(&S) -> &R::State,
    embed_slice: fn(&S, R::State) -> S,
}

impl<S, R> Reducer for ScopedReducer<S, R>
where
    R: Reducer,
{
    type State = S;
    type Action = R::Action;
    type Error = R::Error;

    fn reduce(&self, state: &S, action: &Self::Action) -> Result<Option<S>, Self::Error> {
        match self.reducer.reduce((self.get_slice)(state), action)? {
            Some(slice) => Ok(Some((self.embed_slice)(state, slice))),
            None => Ok(None),
        }
    }
}
