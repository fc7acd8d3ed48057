//! Simple CLI demo for the todo example.
//!
//! The binary is the external consumer: it owns the store, subscribes a
//! console renderer that re-reads state on every notification, dispatches
//! actions, and unsubscribes before exiting.

use todo::{AppAction, TodoIdSequence, VisibilityFilter, app_reducer, visible_todos};
use tracing_subscriber::EnvFilter;
use uniflow_runtime::Store;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Todo Example ===\n");

    let ids = TodoIdSequence::new();
    let store = Store::new(app_reducer());

    // Console renderer: re-reads state after every dispatch.
    let view = store.clone();
    let subscription = store.subscribe(move || {
        let state = view.snapshot();
        let visible = visible_todos(&state.todos, state.visibility_filter);

        println!("showing: {}", state.visibility_filter);
        for item in visible {
            let status = if item.completed { "x" } else { " " };
            println!("  [{}] {}", status, item.text);
        }
        println!(
            "completed: {}/{}\n",
            state.completed_count(),
            state.count()
        );
    });

    let milk = ids.next_id();
    let docs = ids.next_id();
    let deploy = ids.next_id();

    println!("Adding todos...");
    store.dispatch(AppAction::AddTodo {
        id: milk,
        text: "Buy milk".to_string(),
    })?;
    store.dispatch(AppAction::AddTodo {
        id: docs,
        text: "Write documentation".to_string(),
    })?;
    store.dispatch(AppAction::AddTodo {
        id: deploy,
        text: "Deploy to production".to_string(),
    })?;

    println!("Completing 'Buy milk'...");
    store.dispatch(AppAction::ToggleTodo { id: milk })?;

    println!("Showing only active todos...");
    store.dispatch(AppAction::SetVisibilityFilter {
        filter: VisibilityFilter::ShowActive,
    })?;

    println!("Showing only completed todos...");
    store.dispatch(AppAction::SetVisibilityFilter {
        filter: VisibilityFilter::ShowCompleted,
    })?;

    // Tear the renderer down before exiting.
    subscription.unsubscribe();

    println!("=== Demo Complete ===");
    Ok(())
}
