//! Editable Span Component
//!
//! Text that turns into an input on double click. Enter or blur commits,
//! Escape cancels.

use leptos::prelude::*;

#[component]
pub fn EditableSpan(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
) -> impl IntoView {
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(String::new());

    let activate = move |_| {
        if disabled.get_untracked() {
            return;
        }
        set_draft.set(value.get_untracked());
        set_editing.set(true);
    };

    let commit = move || {
        if !editing.get_untracked() {
            return;
        }
        set_editing.set(false);
        let next = draft.get_untracked();
        let trimmed = next.trim();
        // Blank edits revert instead of reaching the server
        if !trimmed.is_empty() && trimmed != value.get_untracked() {
            on_change.run(trimmed.to_string());
        }
    };

    view! {
        <Show
            when=move || editing.get()
            fallback=move || view! {
                <span class="editable-span" on:dblclick=activate>{move || value.get()}</span>
            }
        >
            <input
                class="editable-input"
                autofocus
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
                on:blur=move |_| commit()
                on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                    "Enter" => commit(),
                    "Escape" => set_editing.set(false),
                    _ => {}
                }
            />
        </Show>
    }
}
