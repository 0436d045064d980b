//! List Card Component

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::Lists;
use crate::controllers::{ListCard, PendingDelete};

/// One card in the lists grid
#[component]
pub fn ListCardView(
    card: ListCard,
    lists: RwSignal<Lists>,
    #[prop(into)] on_edit: Callback<i64>,
) -> impl IntoView {
    let id = card.id;
    // This card's delete waiting for the ✓ click
    let pending = RwSignal::new(None::<PendingDelete>);

    let request_delete = move |_: ()| {
        let token = lists.with(|c| c.request_delete(id));
        let found = token.is_some();
        pending.set(token);
        found
    };
    let confirm_delete = move |_: ()| {
        if let Some(token) = pending.get_untracked() {
            pending.set(None);
            lists.update(|c| {
                c.confirm_delete(token);
            });
        }
    };

    view! {
        <div
            class="list-card"
            style=format!("--card-color: {}", card.color)
            on:click=move |_| lists.with(|c| c.open(id))
        >
            <div class="list-header">
                <div>
                    <h3 class="list-title" inner_html=card.name_html></h3>
                    <span class="list-category">{format!("{} {}", card.icon, card.category_name)}</span>
                </div>
            </div>

            <div class="list-stats">
                <span>{card.stats}</span>
                <span>{card.created_on}</span>
            </div>

            <div class="progress-bar">
                <div class="progress-fill" style=format!("width: {}%", card.progress)></div>
            </div>

            <div class="list-actions">
                <button
                    class="list-action-btn"
                    title="Editar"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_edit.run(id);
                    }
                >
                    "✏️"
                </button>
                <DeleteConfirmButton
                    button_class="list-action-btn"
                    on_request=request_delete
                    on_confirm=confirm_delete
                    on_cancel=move |_: ()| pending.set(None)
                />
            </div>
        </div>
    }
}
