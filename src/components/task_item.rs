//! Task Item Component
//!
//! Individual row in the task list.

use leptos::prelude::*;

use crate::context::Tasks;
use crate::controllers::TaskRow;

/// A single task row
#[component]
pub fn TaskItem(row: TaskRow, tasks: RwSignal<Tasks>) -> impl IntoView {
    let id = row.id;
    let completed = row.completed;

    view! {
        <li class="task-item" data-id=id.to_string()>
            // Checkbox
            <div
                class=if completed { "task-checkbox checked" } else { "task-checkbox" }
                on:click=move |_| tasks.update(|c| {
                    c.toggle(id);
                })
            ></div>

            // Text (escaped by the controller)
            <span
                class=if completed { "task-text completed" } else { "task-text" }
                inner_html=row.text_html
            ></span>

            <div class="task-actions">
                <button
                    class="delete-btn"
                    aria-label="Excluir tarefa"
                    on:click=move |_| tasks.update(|c| {
                        c.remove(id);
                    })
                >
                    "🗑️"
                </button>
            </div>
        </li>
    }
}
