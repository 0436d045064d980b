//! Afazeres Frontend App
//!
//! Navbar, the three pages and the toast stack.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::clock::SystemClock;
use crate::components::{ListsPage, NavBar, PomodoroPage, TaskPage, ToastStack};
use crate::config::Config;
use crate::context::{AppContext, Lists, Page, Pomodoro, Tasks, ThemePreference};
use crate::dom;
use crate::storage::AppStorage;

#[component]
pub fn App(config: Config, storage: AppStorage) -> impl IntoView {
    let ctx = AppContext::new(config);
    provide_context(ctx);

    // Controllers load their snapshots once and live for the whole session
    let keys = config.keys;
    let tasks = RwSignal::new(Tasks::load(storage.clone(), SystemClock, ctx.notifier, keys.tasks));
    let lists = RwSignal::new(Lists::load(
        storage.clone(),
        SystemClock,
        ctx.notifier,
        keys.lists,
        config.default_list_color,
    ));
    let pomodoro = RwSignal::new(Pomodoro::new(config.pomodoro_secs(), ctx.notifier));
    let theme = RwSignal::new(ThemePreference::load(storage, keys.theme));
    let (page, set_page) = signal(Page::Tasks);

    Effect::new(move |_| {
        dom::apply_theme(theme.with(|t| t.theme()));
    });

    // One tick per second, only while the timer runs. Dropping the
    // previous Interval cancels it.
    let running = Memo::new(move |_| pomodoro.with(|t| t.is_running()));
    Effect::new(move |previous: Option<Option<Interval>>| {
        drop(previous);
        running
            .get()
            .then(|| Interval::new(1000, move || pomodoro.update(|t| t.tick())))
    });

    view! {
        <div class="app-layout">
            <NavBar page=page set_page=set_page theme=theme />

            <main class="main-content">
                {move || match page.get() {
                    Page::Tasks => view! { <TaskPage tasks=tasks /> }.into_any(),
                    Page::Lists => view! { <ListsPage lists=lists /> }.into_any(),
                    Page::Pomodoro => view! { <PomodoroPage pomodoro=pomodoro /> }.into_any(),
                }}
            </main>

            <ToastStack />
        </div>
    }
}
