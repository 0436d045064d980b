//! Task Page Component
//!
//! Input, filter buttons, counters and the task list.

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::context::Tasks;
use crate::models::TaskFilter;

#[component]
pub fn TaskPage(tasks: RwSignal<Tasks>) -> impl IntoView {
    let (new_text, set_new_text) = signal(String::new());
    let list_view = Memo::new(move |_| tasks.with(|c| c.view()));

    // Input is cleared only when the task was accepted
    let add_task = move || {
        let text = new_text.get_untracked();
        let mut added = false;
        tasks.update(|c| added = c.add(&text).is_ok());
        if added {
            set_new_text.set(String::new());
        }
    };

    view! {
        <section class="tasks-page">
            <div class="task-input-row">
                <input
                    type="text"
                    id="taskInput"
                    placeholder="Adicionar nova tarefa..."
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                    on:keypress=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            add_task();
                        }
                    }
                />
                <button id="addBtn" on:click=move |_| add_task()>"Adicionar"</button>
            </div>

            <div class="filter-row">
                {TaskFilter::ALL.iter().map(|filter| {
                    let filter = *filter;
                    let is_active = move || list_view.with(|v| v.filter == filter);
                    view! {
                        <button
                            class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                            data-filter=filter.as_str()
                            on:click=move |_| tasks.update(|c| c.set_filter(filter))
                        >
                            {filter.label()}
                        </button>
                    }
                }).collect_view()}
            </div>

            <p class="task-stats">
                <span id="taskCount">{move || list_view.with(|v| v.total)}</span>
                " tarefas, "
                <span id="completedCount">{move || list_view.with(|v| v.completed)}</span>
                " concluídas"
            </p>

            <Show
                when=move || !list_view.with(|v| v.is_empty())
                fallback=|| view! {
                    <div id="emptyState" class="empty-state">
                        <p>"Nenhuma tarefa por aqui."</p>
                    </div>
                }
            >
                <ul id="taskList" class="task-list">
                    // Keyed on completion too so a toggled row is redrawn
                    <For
                        each=move || list_view.with(|v| v.rows.clone())
                        key=|row| (row.id, row.completed)
                        children=move |row| view! { <TaskItem row=row tasks=tasks /> }
                    />
                </ul>
            </Show>
        </section>
    }
}
