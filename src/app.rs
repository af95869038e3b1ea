//! Care Portal Frontend App
//!
//! Top-level shell: follows the location hash and shows one page at a time.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::context::{current_hash, AppContext};
use crate::components::NavBar;
use crate::pages::{
    CarePlanFormPage, CarePlanListPage, LoginPage, NotFoundPage, ResourceFormPage, ResourceListPage,
    VisitDetailPage, VisitFormPage, VisitListPage,
};
use crate::routes::Route;

#[component]
pub fn App() -> impl IntoView {
    let (route, set_route) = signal(Route::parse(&current_hash()));

    // Provide context to all children
    provide_context(AppContext::new((route, set_route), AppConfig::from_build_env()));

    // Back/forward and typed URLs
    let listener = window_event_listener(leptos::ev::hashchange, move |_| {
        let next = Route::parse(&current_hash());
        if route.with_untracked(|current| *current != next) {
            log::debug!("route -> {}", next.to_hash());
            set_route.set(next);
        }
    });
    on_cleanup(move || listener.remove());

    let page = move || match route.get() {
        Route::Login => view! { <LoginPage /> }.into_any(),
        Route::Visits => view! { <VisitListPage /> }.into_any(),
        Route::VisitNew => view! { <VisitFormPage /> }.into_any(),
        Route::VisitDetail(id) => view! { <VisitDetailPage id=id /> }.into_any(),
        Route::VisitEdit(id) => view! { <VisitFormPage id=id /> }.into_any(),
        Route::CarePlans => view! { <CarePlanListPage /> }.into_any(),
        Route::CarePlanNew => view! { <CarePlanFormPage /> }.into_any(),
        Route::Resources => view! { <ResourceListPage /> }.into_any(),
        Route::ResourceNew => view! { <ResourceFormPage /> }.into_any(),
        Route::NotFound => view! { <NotFoundPage /> }.into_any(),
    };

    view! {
        <div class="app-layout">
            <Show when=move || route.with(|r| r.section().is_some())>
                <NavBar />
            </Show>
            <main class="main-content">{page}</main>
        </div>
    }
}
