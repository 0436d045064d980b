//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::clock::SystemClock;
use crate::config::Config;
use crate::controllers::{ListController, PomodoroTimer, TaskController, ThemeController};
use crate::notify::{Notification, Notifier};
use crate::storage::AppStorage;

pub type Tasks = TaskController<AppStorage, SystemClock, ToastNotifier>;
pub type Lists = ListController<AppStorage, SystemClock, ToastNotifier>;
pub type Pomodoro = PomodoroTimer<ToastNotifier>;
pub type ThemePreference = ThemeController<AppStorage>;

/// Top-level pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Tasks,
    Lists,
    Pomodoro,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Tasks, Page::Lists, Page::Pomodoro];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Tasks => "Tarefas",
            Page::Lists => "Listas",
            Page::Pomodoro => "Pomodoro",
        }
    }
}

/// A notification currently on screen
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notification: Notification,
}

/// Notifier that shows toasts and removes them after a delay
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u32>,
    duration_ms: u32,
}

impl ToastNotifier {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
            duration_ms,
        }
    }

    pub fn toasts(&self) -> ReadSignal<Vec<Toast>> {
        self.toasts.read_only()
    }

    pub fn dismiss(&self, id: u32) {
        // The signal is gone once the app unmounts
        let _ = self.toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        log::info!("[notify] {}: {}", notification.kind.as_str(), notification.message);
        let id = self.next_id.get_untracked();
        self.next_id.set(id.wrapping_add(1));
        self.toasts.update(|toasts| toasts.push(Toast { id, notification }));

        let this = *self;
        Timeout::new(self.duration_ms, move || this.dismiss(id)).forget();
    }
}

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: Config,
    pub notifier: ToastNotifier,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            notifier: ToastNotifier::new(config.toast_duration_ms),
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
