//! # Uniflow Testing
//!
//! Testing utilities and helpers for the Uniflow architecture.
//!
//! This crate provides [`ReducerTest`], a fluent Given-When-Then harness
//! for exercising reducers in isolation, without a store.
//!
//! ## Example
//!
//! ```ignore
//! use uniflow_testing::ReducerTest;
//!
//! ReducerTest::new(TodosReducer)
//!     .given_state(vec![])
//!     .when_action(AppAction::AddTodo { id, text: "Buy milk".to_string() })
//!     .then_changed()
//!     .then_state(|todos| assert_eq!(todos.len(), 1))
//!     .run();
//! ```


// Re-export commonly used items
pub use reducer_test::ReducerTest;
