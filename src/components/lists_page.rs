//! Lists Page Component
//!
//! Search, category filter, the card grid and the create/edit modal.

use leptos::prelude::*;

use crate::components::{ListCardView, ListModal, ModalForm};
use crate::context::Lists;
use crate::controllers::{CategoryFilter, ModalMode};
use crate::models::CATEGORIES;

#[component]
pub fn ListsPage(lists: RwSignal<Lists>) -> impl IntoView {
    let form = ModalForm::new();
    let cards = Memo::new(move |_| lists.with(|c| c.view()));
    let active_category = Memo::new(move |_| lists.with(|c| c.category().as_str().to_string()));

    let on_edit = Callback::new(move |id: i64| {
        if let Some(draft) = lists.with(|c| c.draft_for(id)) {
            form.open(ModalMode::Edit(id), draft);
        }
    });

    // ("all", label) followed by every category key
    let category_buttons = std::iter::once(("all", "Todas".to_string()))
        .chain(CATEGORIES.iter().map(|(key, icon, name)| (*key, format!("{} {}", icon, name))))
        .map(|(key, label)| {
            let is_active = move || active_category.with(|c| c == key);
            view! {
                <button
                    class=move || if is_active() { "category-btn active" } else { "category-btn" }
                    data-category=key
                    on:click=move |_| lists.update(|c| c.set_category(CategoryFilter::parse(key)))
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <section class="lists-page">
            <div class="lists-header">
                <h1>"Minhas Listas"</h1>
                <button id="newListBtn" class="btn-primary" on:click=move |_| form.open_create()>
                    "+ Nova Lista"
                </button>
            </div>

            <input
                type="search"
                id="searchInput"
                placeholder="Buscar listas..."
                prop:value=move || lists.with(|c| c.search().to_string())
                on:input=move |ev| {
                    let term = event_target_value(&ev);
                    lists.update(|c| c.set_search(&term));
                }
            />

            <div class="category-row">{category_buttons}</div>

            <Show
                when=move || !cards.with(|c| c.is_empty())
                fallback=move || view! {
                    <div id="emptyLists" class="empty-state">
                        <p>"Nenhuma lista encontrada."</p>
                        <button id="createFirstList" class="btn-primary" on:click=move |_| form.open_create()>
                            "Criar primeira lista"
                        </button>
                    </div>
                }
            >
                <div id="listsGrid" class="lists-grid">
                    <For
                        each=move || cards.get()
                        key=|card| card.clone()
                        children=move |card| view! {
                            <ListCardView card=card lists=lists on_edit=on_edit />
                        }
                    />
                </div>
            </Show>

            <ListModal form=form lists=lists />
        </section>
    }
}
