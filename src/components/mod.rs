//! UI Components
//!
//! Reusable Leptos components.

mod search_panel;
mod todo_list;
mod user_card;

pub use search_panel::SearchPanel;
pub use todo_list::TodoList;
pub use user_card::UserCard;
