//! Login Page
//!
//! Accepts an access token issued by the care backend and stores it.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::routes::Route;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let (token, set_token) = signal(String::new());
    let (error, set_error) = signal::<Option<&'static str>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.sign_in(&token.get_untracked()) {
            set_token.set(String::new());
            ctx.navigate(Route::Visits);
        } else {
            set_error.set(Some("Please enter your access token."));
        }
    };

    view! {
        <section class="page login-page">
            <h1>"Sign in"</h1>
            <form class="login-form" on:submit=on_submit>
                <label class="form-label" for="token">"Access token"</label>
                <input
                    id="token"
                    type="password"
                    autocomplete="off"
                    prop:value=move || token.get()
                    on:input=move |ev| set_token.set(event_target_value(&ev))
                />
                {move || error.get().map(|message| view! { <p class="error-text">{message}</p> })}
                <button type="submit">"Sign in"</button>
            </form>
        </section>
    }
}
