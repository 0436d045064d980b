//! List Modal Component
//!
//! One dialog for creating and editing lists. The open mode decides what
//! submit does.

use leptos::ev;
use leptos::prelude::*;

use crate::context::Lists;
use crate::controllers::{ListDraft, ModalMode};
use crate::models::CATEGORIES;

/// Color choices, the first one is preselected for new lists
pub const LIST_COLORS: &[&str] = &[
    "#ff6b9d",
    "#4ecdc4",
    "#ffd93d",
    "#6c5ce7",
    "#a8e6cf",
    "#ff8b94",
];

/// Modal open state and form fields
#[derive(Clone, Copy)]
pub struct ModalForm {
    /// None = closed
    pub mode: RwSignal<Option<ModalMode>>,
    name: RwSignal<String>,
    category: RwSignal<String>,
    color: RwSignal<Option<String>>,
}

impl ModalForm {
    pub fn new() -> Self {
        Self {
            mode: RwSignal::new(None),
            name: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            color: RwSignal::new(None),
        }
    }

    /// Open for a fresh list with the first color selected
    pub fn open_create(&self) {
        self.open(
            ModalMode::Create,
            ListDraft {
                color: LIST_COLORS.first().map(|c| c.to_string()),
                ..ListDraft::default()
            },
        );
    }

    pub fn open(&self, mode: ModalMode, draft: ListDraft) {
        self.name.set(draft.name);
        self.category.set(draft.category);
        self.color.set(draft.color);
        self.mode.set(Some(mode));
    }

    /// Close and reset the fields
    pub fn close(&self) {
        self.mode.set(None);
        self.name.set(String::new());
        self.category.set(String::new());
        self.color.set(None);
    }

    fn draft(&self) -> ListDraft {
        ListDraft {
            name: self.name.get_untracked(),
            category: self.category.get_untracked(),
            color: self.color.get_untracked(),
        }
    }
}

#[component]
pub fn ListModal(form: ModalForm, lists: RwSignal<Lists>) -> impl IntoView {
    let name_input: NodeRef<leptos::html::Input> = NodeRef::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(mode) = form.mode.get_untracked() else {
            return;
        };
        let draft = form.draft();
        let mut accepted = false;
        lists.update(|c| accepted = c.submit(mode, draft).is_ok());
        if accepted {
            form.close();
        }
    };

    // Escape closes from anywhere on the page
    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && form.mode.get_untracked().is_some() {
            form.close();
        }
    });
    on_cleanup(move || escape.remove());

    Effect::new(move |_| {
        if form.mode.get().is_some() {
            if let Some(input) = name_input.get() {
                let _ = input.focus();
            }
        }
    });

    view! {
        <Show when=move || form.mode.get().is_some()>
            <div id="listModal" class="modal active" on:click=move |_| form.close()>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h3>{move || form.mode.get().unwrap_or_default().title()}</h3>
                        <button class="close-modal" on:click=move |_| form.close()>"×"</button>
                    </div>

                    <form id="listForm" on:submit=on_submit>
                        <label for="listName">"Nome da lista"</label>
                        <input
                            type="text"
                            id="listName"
                            node_ref=name_input
                            prop:value=move || form.name.get()
                            on:input=move |ev| form.name.set(event_target_value(&ev))
                        />

                        <label for="listCategory">"Categoria"</label>
                        <select
                            id="listCategory"
                            prop:value=move || form.category.get()
                            on:change=move |ev| form.category.set(event_target_value(&ev))
                        >
                            <option value="">"Selecione uma categoria"</option>
                            {CATEGORIES.iter().map(|(key, icon, name)| view! {
                                <option value=*key>{format!("{} {}", icon, name)}</option>
                            }).collect_view()}
                        </select>

                        <div class="color-options">
                            {LIST_COLORS.iter().map(|color| {
                                let color = *color;
                                view! {
                                    <label class="color-option" style=format!("--swatch: {}", color)>
                                        <input
                                            type="radio"
                                            name="listColor"
                                            value=color
                                            prop:checked=move || form.color.get().as_deref() == Some(color)
                                            on:change=move |_| form.color.set(Some(color.to_string()))
                                        />
                                    </label>
                                }
                            }).collect_view()}
                        </div>

                        <div class="modal-actions">
                            <button type="button" class="btn-cancel" on:click=move |_| form.close()>
                                "Cancelar"
                            </button>
                            <button type="submit" class="btn-create">
                                {move || form.mode.get().unwrap_or_default().submit_label()}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
