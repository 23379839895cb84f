//! Filter Bar Component
//!
//! All / Active / Completed switch under each todolist.

use leptos::prelude::*;
use todo_sync::FilterValue;

#[component]
pub fn FilterBar(
    #[prop(into)] current: Signal<FilterValue>,
    #[prop(into)] on_change: Callback<FilterValue>,
) -> impl IntoView {
    view! {
        <div class="filter-bar">
            {FilterValue::ALL.iter().map(|&value| {
                let is_selected = move || current.get() == value;
                view! {
                    <button
                        class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                        data-filter=value.as_str()
                        on:click=move |_| on_change.run(value)
                    >
                        {value.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
