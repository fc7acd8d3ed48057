//! End-to-end tests driving the todo application through the store.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use todo::{AppAction, TodoId, TodoIdSequence, VisibilityFilter, app_reducer, visible_todos};
use uniflow_runtime::Store;

#[test]
fn add_toggle_filter_scenario() {
    let store = Store::new(app_reducer());

    // Start empty.
    assert_eq!(store.state(|s| s.count()), 0);

    store
        .dispatch(AppAction::AddTodo {
            id: TodoId::new(0),
            text: "buy milk".to_string(),
        })
        .unwrap();

    let state = store.snapshot();
    assert_eq!(state.count(), 1);
    assert_eq!(state.todos[0].id, TodoId::new(0));
    assert_eq!(state.todos[0].text, "buy milk");
    assert!(!state.todos[0].completed);

    store
        .dispatch(AppAction::ToggleTodo { id: TodoId::new(0) })
        .unwrap();
    assert!(store.state(|s| s.todos[0].completed));

    store
        .dispatch(AppAction::SetVisibilityFilter {
            filter: VisibilityFilter::ShowActive,
        })
        .unwrap();

    // The only todo is completed, so the active view is empty.
    let state = store.snapshot();
    assert_eq!(state.visibility_filter, VisibilityFilter::ShowActive);
    assert!(visible_todos(&state.todos, state.visibility_filter).is_empty());
}

#[test]
fn toggle_back_and_forth() {
    let store = Store::new(app_reducer());
    let id = TodoId::new(0);

    store
        .dispatch(AppAction::AddTodo {
            id,
            text: "flip me".to_string(),
        })
        .unwrap();
    assert!(!store.state(|s| s.todos[0].completed));

    store.dispatch(AppAction::ToggleTodo { id }).unwrap();
    assert!(store.state(|s| s.todos[0].completed));

    store.dispatch(AppAction::ToggleTodo { id }).unwrap();
    assert!(!store.state(|s| s.todos[0].completed));
}

#[test]
fn subscriber_sees_every_dispatch() {
    let store = Store::new(app_reducer());
    let ids = TodoIdSequence::new();

    let notifications = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&notifications);
    let subscription = store.subscribe(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    store
        .dispatch(AppAction::AddTodo {
            id: ids.next_id(),
            text: "one".to_string(),
        })
        .unwrap();
    store
        .dispatch(AppAction::AddTodo {
            id: ids.next_id(),
            text: "two".to_string(),
        })
        .unwrap();
    assert_eq!(notifications.load(Ordering::SeqCst), 2);

    // After unsubscribing, dispatches no longer reach the consumer.
    subscription.unsubscribe();
    store
        .dispatch(AppAction::SetVisibilityFilter {
            filter: VisibilityFilter::ShowAll,
        })
        .unwrap();
    assert_eq!(notifications.load(Ordering::SeqCst), 2);
}

#[test]
fn consumer_rerenders_from_current_state() {
    let store = Store::new(app_reducer());
    let ids = TodoIdSequence::new();

    // A miniature "view" that re-reads state on every notification, the
    // way a rendering layer would.
    let rendered = Arc::new(std::sync::Mutex::new(Vec::new()));
    let view_store = store.clone();
    let view_log = Arc::clone(&rendered);
    let subscription = store.subscribe(move || {
        let state = view_store.snapshot();
        let visible: Vec<String> = visible_todos(&state.todos, state.visibility_filter)
            .into_iter()
            .map(|t| t.text.clone())
            .collect();
        view_log.lock().unwrap().push(visible);
    });

    let id = ids.next_id();
    store
        .dispatch(AppAction::AddTodo {
            id,
            text: "buy milk".to_string(),
        })
        .unwrap();
    store.dispatch(AppAction::ToggleTodo { id }).unwrap();
    store
        .dispatch(AppAction::SetVisibilityFilter {
            filter: VisibilityFilter::ShowActive,
        })
        .unwrap();

    subscription.unsubscribe();

    let frames = rendered.lock().unwrap();
    assert_eq!(
        *frames,
        vec![
            vec!["buy milk".to_string()], // after add
            vec!["buy milk".to_string()], // after toggle, still ShowAll
            vec![],                       // active view is empty
        ]
    );
}
