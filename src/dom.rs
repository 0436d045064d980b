//! DOM Access
//!
//! The few places the app touches the page outside of Leptos views.

use wasm_bindgen::JsCast;

use crate::error::{AppError, AppResult};
use crate::models::Theme;

/// Element the app mounts into; fails naming the id when absent
pub fn require_element(id: &'static str) -> AppResult<web_sys::HtmlElement> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or(AppError::MissingElement(id))
}

/// Put the theme class on `<body>`, removing the other one
pub fn apply_theme(theme: Theme) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        log::warn!("[theme] no <body> to style");
        return;
    };
    let classes = body.class_list();
    let stale = theme.toggled().body_class();
    if classes.remove_1(stale).and_then(|_| classes.add_1(theme.body_class())).is_err() {
        log::warn!("[theme] failed to update body classes");
    }
}
