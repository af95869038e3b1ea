//! Pages
//!
//! One component per route. Every protected page asks `AppContext::authorize`
//! for a client on mount and does nothing else when it gets `None`.

mod login;
mod visit_list;
mod visit_detail;
mod visit_form;
mod care_plans;
mod care_plan_form;
mod resource_list;
mod resource_form;

pub use login::LoginPage;
pub use visit_list::VisitListPage;
pub use visit_detail::VisitDetailPage;
pub use visit_form::VisitFormPage;
pub use care_plans::CarePlanListPage;
pub use care_plan_form::CarePlanFormPage;
pub use resource_list::ResourceListPage;
pub use resource_form::ResourceFormPage;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::error::{ApiError, SubmitError};
use crate::forms::{self, SubmitState};
use crate::routes::Route;

/// Apply a finished submission: show the outcome, then on success wait
/// for the configured delay and move on.
async fn finish_submit<T>(
    ctx: AppContext,
    submit: RwSignal<SubmitState>,
    result: Result<T, SubmitError>,
    success_message: &str,
    next: Route,
) {
    if let Err(SubmitError::Remote(err)) = &result {
        ctx.check_auth(err);
    }
    let (state, redirect) = forms::settle(result, success_message, next);
    submit.set(state);
    if let Some(route) = redirect {
        TimeoutFuture::new(ctx.config().redirect_delay_ms).await;
        ctx.navigate(route);
    }
}

/// Log a failed in-page action and turn it into display text
fn action_failed(ctx: AppContext, what: &str, err: &ApiError) -> String {
    log::error!("{} failed: {}", what, err);
    ctx.check_auth(err);
    err.user_message()
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page not-found">
            <h1>"Page not found"</h1>
            <a href=Route::Visits.to_hash()>"Back to visits"</a>
        </section>
    }
}
