//! UI Components
//!
//! Reusable Leptos components.

mod add_item_form;
mod delete_confirm_button;
mod editable_span;
mod error_banner;
mod filter_bar;
mod login_form;
mod task_row;
mod title_bar;
mod todolist_view;
mod todolists_page;

pub use add_item_form::AddItemForm;
pub use delete_confirm_button::DeleteConfirmButton;
pub use editable_span::EditableSpan;
pub use error_banner::ErrorBanner;
pub use filter_bar::FilterBar;
pub use login_form::LoginForm;
pub use task_row::TaskRow;
pub use title_bar::TitleBar;
pub use todolist_view::TodolistView;
pub use todolists_page::TodolistsPage;
