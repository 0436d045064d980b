//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod list_card;
mod list_modal;
mod lists_page;
mod nav_bar;
mod pomodoro_page;
mod task_item;
mod task_page;
mod toast_stack;

pub use delete_confirm_button::DeleteConfirmButton;
pub use list_card::ListCardView;
pub use list_modal::{ListModal, ModalForm};
pub use lists_page::ListsPage;
pub use nav_bar::NavBar;
pub use pomodoro_page::PomodoroPage;
pub use task_item::TaskItem;
pub use task_page::TaskPage;
pub use toast_stack::ToastStack;
