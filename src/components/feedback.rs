//! Feedback Components
//!
//! Spinner, inline error text and the form status line.

use leptos::prelude::*;

use crate::forms::SubmitState;

#[component]
pub fn Spinner(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="spinner-row">
            <span class="spinner"></span>
            <span class="spinner-label">{label.unwrap_or("Loading...")}</span>
        </div>
    }
}

#[component]
pub fn ErrorText(#[prop(into)] message: String) -> impl IntoView {
    view! { <p class="error-text" role="alert">{message}</p> }
}

/// Success or failure line under a form
#[component]
pub fn SubmitMessage(submit: RwSignal<SubmitState>) -> impl IntoView {
    move || {
        submit.with(|state| {
            state.message().map(|message| {
                let class = if state.is_error() { "form-message error" } else { "form-message success" };
                view! { <p class=class role="status">{message.to_string()}</p> }
            })
        })
    }
}
