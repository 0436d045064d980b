//! Navigation Bar Component
//!
//! Page links behind a collapsible menu, plus the theme toggle.

use leptos::prelude::*;

use crate::context::{Page, ThemePreference};

#[component]
pub fn NavBar(
    page: ReadSignal<Page>,
    set_page: WriteSignal<Page>,
    theme: RwSignal<ThemePreference>,
) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="navbar">
            <span class="navbar-brand">"Afazeres"</span>

            <button
                class=move || if menu_open.get() { "navbar-toggle active" } else { "navbar-toggle" }
                aria-label="Menu"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                <span></span>
                <span></span>
                <span></span>
            </button>

            <ul class=move || if menu_open.get() { "navbar-menu active" } else { "navbar-menu" }>
                {Page::ALL.iter().map(|p| {
                    let p = *p;
                    view! {
                        <li>
                            <a
                                href="#"
                                class=move || if page.get() == p { "active" } else { "" }
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    set_page.set(p);
                                    set_menu_open.set(false);
                                }
                            >
                                {p.label()}
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>

            <button
                class="theme-toggle"
                title="Alternar tema"
                on:click=move |_| theme.update(|t| {
                    t.toggle();
                })
            >
                <span class="theme-icon">{move || theme.with(|t| t.theme().icon())}</span>
            </button>
        </nav>
    }
}
