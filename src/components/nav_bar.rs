//! Navigation Bar Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::routes::Route;

fn sections() -> [(&'static str, &'static str, Route); 3] {
    [
        ("visits", "Visits", Route::Visits),
        ("care-plans", "Care Plans", Route::CarePlans),
        ("resources", "Resources", Route::Resources),
    ]
}

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="nav-bar">
            <span class="nav-title">"Care Portal"</span>
            <div class="nav-links">
                {sections().into_iter().map(|(section, label, route)| {
                    let is_active = move || ctx.route.with(|r| r.section() == Some(section));
                    view! {
                        <a
                            href=route.to_hash()
                            class=move || if is_active() { "nav-link active" } else { "nav-link" }
                        >
                            {label}
                        </a>
                    }
                }).collect_view()}
            </div>
            <button class="nav-logout" on:click=move |_| ctx.sign_out()>"Log out"</button>
        </nav>
    }
}
