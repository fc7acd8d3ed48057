//! # Uniflow Runtime
//!
//! Runtime implementation for the Uniflow architecture.
//!
//! This crate provides the Store: the single owner of application state,
//! coordinating reducer execution and synchronous subscriber notification.
//!
//! ## Core Components
//!
//! - **Store**: Holds the current state, runs the reducer on dispatch, and
//!   notifies subscribers in registration order
//! - **Subscription**: Handle returned by [`Store::subscribe`]; removing it
//!   is explicit and idempotent
//!
//! ## Example
//!
//! ```
//! use uniflow_core::Reducer;
//! use uniflow_runtime::Store;
//! use std::convert::Infallible;
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: i32,
//! }
//!
//! #[derive(Clone, Debug)]
//! struct Increment;
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = Increment;
//!     type Error = Infallible;
//!
//!     fn reduce(
//!         &self,
//!         state: &CounterState,
//!         _action: &Increment,
//!     ) -> Result<Option<CounterState>, Infallible> {
//!         Ok(Some(CounterState {
//!             count: state.count + 1,
//!         }))
//!     }
//! }
//!
//! let store = Store::new(CounterReducer);
//! store.dispatch(Increment).unwrap();
//! assert_eq!(store.state(|s| s.count), 1);
//! ```

use uniflow_core::Reducer;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    ///
    /// The taxonomy is deliberately small: an action a reducer does not
    /// recognize is not an error (the reducer passes through), so the only
    /// dispatch failure is the reducer rejecting the action. The store's
    /// state is left at its last-good value when this happens.
    #[derive(Error, Debug)]
    pub enum StoreError<E>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        /// The reducer rejected the dispatched action
        ///
        /// State was not modified and subscribers were not notified.
        #[error("reducer rejected the dispatched action")]
        Reducer(#[source] E),
    }

    impl<E> StoreError<E>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        /// Unwraps the underlying reducer error
        #[must_use]
        pub fn into_reducer_error(self) -> E {
            match self {
                Self::Reducer(error) => error,
            }
        }
    }
}

/// Store module - the runtime for reducers
///
/// The Store manages:
/// 1. State (behind `RwLock` for shared access)
/// 2. Reducer (state-transition logic)
/// 3. Subscribers (notified synchronously after each successful dispatch)
pub mod store {
    use super::{Reducer, error::StoreError};
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::{Arc, Mutex, PoisonError, RwLock, Weak};

    /// Subscriber callback type
    type Listener = Arc<dyn Fn() + Send + Sync>;

    /// Subscriber registry: insertion order is notification order
    type Registry = Mutex<Vec<(u64, Listener)>>;

    /// The Store - single owner of application state
    ///
    /// Cloning a `Store` is cheap and yields a handle to the same state and
    /// subscriber registry; there is no ambient singleton, the caller owns
    /// the store's lifetime and passes it to any consumer that needs it.
    ///
    /// # Type Parameters
    ///
    /// - `R`: Reducer implementation; its associated types fix the state,
    ///   action, and error types of the store
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::new(app_reducer());
    ///
    /// let subscription = store.subscribe(|| println!("state changed"));
    /// store.dispatch(AppAction::AddTodo { id, text })?;
    /// subscription.unsubscribe();
    /// ```
    pub struct Store<R>
    where
        R: Reducer,
    {
        state: Arc<RwLock<R::State>>,
        reducer: Arc<R>,
        subscribers: Arc<Registry>,
        next_subscriber_id: Arc<AtomicU64>,
    }

    impl<R> Store<R>
    where
        R: Reducer,
    {
        /// Create a new store with the default initial state
        ///
        /// Every slice of the state yields its own `Default` value, the
        /// same way a fresh combined reducer would populate an empty state.
        #[must_use]
        pub fn new(reducer: R) -> Self
        where
            R::State: Default,
        {
            Self::with_state(R::State::default(), reducer)
        }

        /// Create a new store with an explicit initial state
        ///
        /// # Arguments
        ///
        /// - `initial_state`: The starting state for the store
        /// - `reducer`: The reducer implementation (state-transition logic)
        #[must_use]
        pub fn with_state(initial_state: R::State, reducer: R) -> Self {
            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer: Arc::new(reducer),
                subscribers: Arc::new(Mutex::new(Vec::new())),
                next_subscriber_id: Arc::new(AtomicU64::new(0)),
            }
        }

        /// Dispatch an action through the reducer
        ///
        /// Runs synchronously to completion: the reducer computes the next
        /// state while the write lock is held, the state is swapped only on
        /// a successful, applicable reduction, and every subscriber that
        /// was registered before this call is then invoked in registration
        /// order. Subscribers receive no arguments; they re-read state via
        /// [`Store::state`] to observe the change.
        ///
        /// The action is returned back on success so wrapping layers can
        /// compose around dispatch.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::Reducer`] when the reducer rejects the
        /// action. State is left at its last-good value and subscribers are
        /// not notified.
        pub fn dispatch(&self, action: R::Action) -> Result<R::Action, StoreError<R::Error>> {
            tracing::trace!("dispatching action");

            {
                // Holding the write lock across the reducer call serializes
                // concurrent dispatches; nothing is written unless the
                // reducer succeeds, so a failure leaves the last-good state.
                let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

                match self.reducer.reduce(&state, &action) {
                    Ok(Some(next)) => {
                        *state = next;
                        tracing::debug!("state replaced");
                    },
                    Ok(None) => {
                        tracing::debug!("action passed through, state unchanged");
                    },
                    Err(error) => {
                        tracing::warn!(%error, "reducer rejected action");
                        return Err(StoreError::Reducer(error));
                    },
                }
            }

            // Snapshot before notifying: subscribers registered during this
            // round are only invoked in subsequent rounds, and callbacks may
            // re-enter subscribe/unsubscribe/state without deadlocking.
            let listeners: Vec<Listener> = {
                let subscribers = self
                    .subscribers
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                subscribers
                    .iter()
                    .map(|(_, listener)| Arc::clone(listener))
                    .collect()
            };

            for listener in listeners {
                listener();
            }

            Ok(action)
        }

        /// Read the current state through a closure
        ///
        /// The closure receives a shared reference under the read lock; no
        /// defensive copy is made. Callers must treat the state as
        /// immutable and derive any owned data they need inside the
        /// closure.
        ///
        /// # Arguments
        ///
        /// - `f`: Closure that receives a reference to state and returns a
        ///   value
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&R::State) -> T,
        {
            let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
            f(&state)
        }

        /// Clone the current state out of the store
        #[must_use]
        pub fn snapshot(&self) -> R::State
        where
            R::State: Clone,
        {
            self.state(Clone::clone)
        }

        /// Register a subscriber callback
        ///
        /// The callback runs after every future successful dispatch, in
        /// registration order relative to other subscribers. It is invoked
        /// with no arguments and should re-read state via [`Store::state`].
        ///
        /// The returned [`Subscription`] removes exactly this callback;
        /// consumers are responsible for unsubscribing before they are torn
        /// down so the store never invokes a callback referencing dead
        /// consumer state.
        #[must_use = "keep the Subscription to be able to unsubscribe"]
        pub fn subscribe<F>(&self, listener: F) -> Subscription
        where
            F: Fn() + Send + Sync + 'static,
        {
            let id = self.next_subscriber_id.fetch_add(1, Ordering::Relaxed);

            let mut subscribers = self
                .subscribers
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            subscribers.push((id, Arc::new(listener)));

            Subscription {
                id,
                registry: Arc::downgrade(&self.subscribers),
            }
        }
    }

    impl<R> Clone for Store<R>
    where
        R: Reducer,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: Arc::clone(&self.reducer),
                subscribers: Arc::clone(&self.subscribers),
                next_subscriber_id: Arc::clone(&self.next_subscriber_id),
            }
        }
    }

    impl<R> std::fmt::Debug for Store<R>
    where
        R: Reducer,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            let subscriber_count = self
                .subscribers
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .len();
            f.debug_struct("Store")
                .field("subscribers", &subscriber_count)
                .finish_non_exhaustive()
        }
    }

    /// Handle for a registered subscriber
    ///
    /// Returned by [`Store::subscribe`]. Unsubscribing is explicit;
    /// dropping the handle leaves the subscription in place.
    #[derive(Debug)]
    pub struct Subscription {
        id: u64,
        registry: Weak<Registry>,
    }

    impl Subscription {
        /// Remove this subscriber from the store
        ///
        /// Removes exactly the callback this handle was returned for.
        /// Calling it again, or after the store has been dropped, is a
        /// no-op.
        pub fn unsubscribe(&self) {
            if let Some(registry) = self.registry.upgrade() {
                let mut subscribers = registry.lock().unwrap_or_else(PoisonError::into_inner);
                subscribers.retain(|(id, _)| *id != self.id);
            }
        }
    }
}

// Re-export for convenience
pub use error::StoreError;
pub use store::{Store, Subscription};
