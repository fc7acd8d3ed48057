//! # Uniflow Core
//!
//! Core traits and types for the Uniflow state-management architecture.
//!
//! This crate provides the fundamental abstractions for building
//! unidirectional-data-flow applications around a single store, pure
//! reducers, and synchronous subscriber notification.
//!
//! ## Core Concepts
//!
//! - **State**: Owned domain state for a feature, with `Default` providing
//!   the initial value
//! - **Action**: A closed tagged enum describing every intent to change
//!   state
//! - **Reducer**: Pure function `(&State, &Action) → Result<Option<State>>`
//! - **Slice**: The portion of overall state owned by one reducer within a
//!   combined reducer
//!
//! ## Architecture Principles
//!
//! - Unidirectional Data Flow
//! - Pure reducers (no hidden I/O, no in-place mutation)
//! - Cheap change detection: a reducer that does not recognize an action
//!   returns `Ok(None)` and the previous state value is retained untouched
//! - Explicit ownership: the store is a plain value the caller constructs
//!   and passes to consumers, never an ambient singleton
//!
//! ## Example
//!
//! ```
//! use uniflow_core::Reducer;
//! use std::convert::Infallible;
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct CounterState {
//!     count: i32,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//!     Reset,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Error = Infallible;
//!
//!     fn reduce(
//!         &self,
//!         state: &CounterState,
//!         action: &CounterAction,
//!     ) -> Result<Option<CounterState>, Infallible> {
//!         match action {
//!             CounterAction::Increment => Ok(Some(CounterState {
//!                 count: state.count + 1,
//!             })),
//!             CounterAction::Reset => Ok(Some(CounterState::default())),
//!         }
//!     }
//! }
//!
//! let reducer = CounterReducer;
//! let state = CounterState::default();
//! let next = reducer.reduce(&state, &CounterAction::Increment).unwrap();
//! assert_eq!(next, Some(CounterState { count: 1 }));
//! ```

/// Reducer composition utilities (`combine_reducers`, `scope_reducer`)
pub mod composition;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(&State, &Action) → Result<Option<State>>`
///
/// They contain all state-transition logic and are deterministic and
/// testable in isolation.
pub mod reducer {
    /// The Reducer trait - core abstraction for state transitions
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Error`: The error type for rejected actions; reducers that can
    ///   never fail use [`std::convert::Infallible`]
    ///
    /// # Contract
    ///
    /// - `Ok(Some(next))` replaces the state wholesale with `next`.
    /// - `Ok(None)` means the action does not apply to this reducer; the
    ///   caller keeps the previous state value untouched. Callers can use
    ///   this as a cheap change signal without comparing states.
    /// - `Err(e)` rejects the action; the caller must leave state
    ///   untouched.
    ///
    /// A reducer must be pure: no side effects, no reads of outside
    /// mutable data. It receives the state by shared reference, so it can
    /// never mutate it in place; updates are clone-with-override.
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The error type for actions this reducer rejects
        type Error: std::error::Error + Send + Sync + 'static;

        /// Reduce an action into a state change
        ///
        /// # Arguments
        ///
        /// - `state`: Shared reference to the current state
        /// - `action`: The action to process
        ///
        /// # Returns
        ///
        /// `Some(next)` when the action applied, `None` for a pass-through.
        ///
        /// # Errors
        ///
        /// Returns `Self::Error` when the action is rejected; the caller
        /// keeps the previous state.
        fn reduce(
            &self,
            state: &Self::State,
            action: &Self::Action,
        ) -> Result<Option<Self::State>, Self::Error>;
    }
}

// Re-export commonly used types
pub use composition::{CombinedReducer, ScopedReducer, combine_reducers, scope_reducer};
pub use reducer::Reducer;
