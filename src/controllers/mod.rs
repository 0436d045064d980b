//! Page Controllers
//!
//! Each controller owns its collection, its storage key and its injected
//! store, clock and notifier. No controller knows about the others.

mod list;
mod task;
mod theme;
mod timer;

pub use list::{CategoryFilter, ListCard, ListController, ListDraft, ModalMode, PendingDelete};
pub use task::{TaskController, TaskRow};
pub use theme::ThemeController;
pub use timer::{PomodoroTimer, TimerState};
