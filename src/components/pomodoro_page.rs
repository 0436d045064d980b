//! Pomodoro Page Component

use leptos::prelude::*;

use crate::context::{use_app_context, Pomodoro};
use crate::controllers::TimerState;

fn state_label(state: TimerState) -> &'static str {
    match state {
        TimerState::Idle => "Pronto para começar",
        TimerState::Running => "Foco!",
        TimerState::Paused => "Pausado",
        TimerState::Completed => "Concluído",
    }
}

#[component]
pub fn PomodoroPage(pomodoro: RwSignal<Pomodoro>) -> impl IntoView {
    let ctx = use_app_context();
    let state = Memo::new(move |_| pomodoro.with(|t| t.state()));

    view! {
        <section class="pomodoro-page">
            <h1>"Pomodoro"</h1>
            <p class="pomodoro-length">{format!("Sessões de {} minutos", ctx.config.pomodoro_minutes)}</p>

            <div class="time">{move || pomodoro.with(|t| t.display())}</div>
            <p class=move || format!("timer-state {:?}", state.get()).to_lowercase()>
                {move || state_label(state.get())}
            </p>

            <div class="timer-controls">
                {move || match state.get() {
                    TimerState::Idle => view! {
                        <button class="timer-btn start" on:click=move |_| pomodoro.update(|t| {
                            t.start();
                        })>"Iniciar"</button>
                    }.into_any(),
                    TimerState::Running => view! {
                        <button class="timer-btn pause" on:click=move |_| pomodoro.update(|t| {
                            t.pause();
                        })>"Pausar"</button>
                    }.into_any(),
                    TimerState::Paused => view! {
                        <button class="timer-btn resume" on:click=move |_| pomodoro.update(|t| {
                            t.resume();
                        })>"Continuar"</button>
                    }.into_any(),
                    TimerState::Completed => view! { <span class="timer-done">"🍅"</span> }.into_any(),
                }}
                <button class="timer-btn reset" on:click=move |_| pomodoro.update(|t| t.reset())>
                    "Reiniciar"
                </button>
            </div>
        </section>
    }
}
