//! Toast Stack Component
//!
//! Transient notifications in the top-right corner. Click to dismiss early.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ToastStack() -> impl IntoView {
    let notifier = use_app_context().notifier;
    let toasts = notifier.toasts();

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast toast-{}", toast.notification.kind.as_str())
                            role="status"
                            on:click=move |_| notifier.dismiss(id)
                        >
                            {toast.notification.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
