//! Todolist Component
//!
//! One todolist card: title, add-task form, filtered tasks, filter bar.

use leptos::prelude::*;
use todo_sync::Todolist;

use crate::components::{AddItemForm, DeleteConfirmButton, EditableSpan, FilterBar, TaskRow};
use crate::context::use_app_context;
use crate::store::{store_find_todolist, store_visible_tasks, use_app_store};

#[component]
pub fn TodolistView(todolist: Todolist) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = StoredValue::new(todolist.id.clone());
    let added = todolist.added_date.format("%d.%m.%Y").to_string();

    // Follow the live entry; the prop is only the snapshot it was keyed on
    let current = Memo::new(move |_| store_find_todolist(&store, &id.get_value()));
    let title = Signal::derive(move || current.get().map(|tl| tl.title).unwrap_or_default());
    let filter = Signal::derive(move || current.get().map(|tl| tl.filter).unwrap_or_default());
    let disabled = Signal::derive(move || current.get().is_some_and(|tl| tl.entity_status.is_loading()));
    let tasks = Memo::new(move |_| store_visible_tasks(&store, &id.get_value()));

    let on_rename = Callback::new(move |title: String| {
        let list_id = id.get_value();
        ctx.run(move |intents| async move {
            let _ = intents.rename_todolist(&list_id, &title).await;
        });
    });

    let on_remove = Callback::new(move |()| {
        let list_id = id.get_value();
        ctx.run(move |intents| async move {
            let _ = intents.remove_todolist(&list_id).await;
        });
    });

    let on_add_task = Callback::new(move |title: String| {
        let list_id = id.get_value();
        ctx.run(move |intents| async move {
            let _ = intents.add_task(&list_id, &title).await;
        });
    });

    let on_filter = Callback::new(move |value| ctx.set_filter(&id.get_value(), value));

    view! {
        <div class="todolist">
            <h3 class="todolist-title">
                <EditableSpan value=title on_change=on_rename disabled=disabled />
                <DeleteConfirmButton button_class="delete-btn" on_confirm=on_remove disabled=disabled />
            </h3>
            <span class="todolist-date">{added}</span>
            <AddItemForm on_add=on_add_task placeholder="New task" disabled=disabled />
            <div class="task-list">
                <For
                    each=move || tasks.get()
                    // Re-render a row whenever what it shows changes
                    key=|task| (task.id.clone(), task.title.clone(), task.is_completed())
                    children=move |task| view! {
                        <TaskRow todolist_id=id.get_value() task=task disabled=disabled />
                    }
                />
            </div>
            <FilterBar current=filter on_change=on_filter />
        </div>
    }
}
