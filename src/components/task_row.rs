//! Task Row Component
//!
//! Individual task in a todolist.

use leptos::prelude::*;
use todo_sync::Task;

use crate::components::EditableSpan;
use crate::context::use_app_context;

/// A single task row: checkbox, editable title, delete
#[component]
pub fn TaskRow(
    todolist_id: String,
    task: Task,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let ctx = use_app_context();

    let completed = task.is_completed();
    let list_id = StoredValue::new(todolist_id);
    let task_id = StoredValue::new(task.id.clone());
    let title = Signal::stored(task.title.clone());

    let on_toggle = move |ev| {
        let is_done = event_target_checked(&ev);
        let (list_id, task_id) = (list_id.get_value(), task_id.get_value());
        ctx.run(move |intents| async move {
            let _ = intents.toggle_task(&list_id, &task_id, is_done).await;
        });
    };

    let on_rename = Callback::new(move |title: String| {
        let (list_id, task_id) = (list_id.get_value(), task_id.get_value());
        ctx.run(move |intents| async move {
            let _ = intents.rename_task(&list_id, &task_id, &title).await;
        });
    });

    let on_remove = move |_| {
        let (list_id, task_id) = (list_id.get_value(), task_id.get_value());
        ctx.run(move |intents| async move {
            let _ = intents.remove_task(&list_id, &task_id).await;
        });
    };

    view! {
        <div class=if completed { "task-row is-done" } else { "task-row" }>
            <input
                type="checkbox"
                prop:checked=completed
                prop:disabled=move || disabled.get()
                on:change=on_toggle
            />
            <EditableSpan value=title on_change=on_rename disabled=disabled />
            <button class="delete-btn" prop:disabled=move || disabled.get() on:click=on_remove>"×"</button>
        </div>
    }
}
