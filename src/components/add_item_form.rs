//! Add Item Form Component
//!
//! Single-line form used both for new todolists and for new tasks.

use leptos::prelude::*;
use todo_sync::intents::normalize_title;

/// Inline message for blank input
pub const TITLE_REQUIRED: &str = "Title is required";

/// Trimmed title, or the message to show under the input
pub fn validate_title(raw: &str) -> Result<String, &'static str> {
    normalize_title(raw).map_err(|_| TITLE_REQUIRED)
}

/// Form that hands a trimmed, non-empty title to `on_add`
#[component]
pub fn AddItemForm(
    #[prop(into)] on_add: Callback<String>,
    #[prop(into, optional)] placeholder: Option<String>,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
) -> impl IntoView {
    let (new_text, set_new_text) = signal(String::new());
    let (error, set_error) = signal::<Option<&'static str>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match validate_title(&new_text.get()) {
            Ok(title) => {
                on_add.run(title);
                set_new_text.set(String::new());
            }
            Err(message) => set_error.set(Some(message)),
        }
    };

    view! {
        <form class="add-item-form" on:submit=submit>
            <div class="add-item-row">
                <input
                    type="text"
                    class=move || if error.get().is_some() { "add-item-input error" } else { "add-item-input" }
                    placeholder=placeholder.unwrap_or_else(|| "Title".to_string())
                    prop:value=move || new_text.get()
                    prop:disabled=move || disabled.get()
                    on:input=move |ev| {
                        set_error.set(None);
                        set_new_text.set(event_target_value(&ev));
                    }
                />
                <button type="submit" prop:disabled=move || disabled.get()>"+"</button>
            </div>
            {move || error.get().map(|message| view! { <div class="error-message">{message}</div> })}
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title() {
        assert_eq!(validate_title("  Milk "), Ok("Milk".to_string()));
        assert_eq!(validate_title("   "), Err(TITLE_REQUIRED));
    }
}
