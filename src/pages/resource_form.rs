//! Resource Form Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{BoundInput, BoundTextArea, SubmitMessage};
use crate::context::use_app_context;
use crate::forms::{self, ResourceDraft, SubmitState, RESOURCE_CREATED};
use crate::models::ResourceCategory;
use crate::routes::Route;
use super::finish_submit;

#[component]
pub fn ResourceFormPage() -> impl IntoView {
    let ctx = use_app_context();
    let draft = RwSignal::new(ResourceDraft::default());
    let submit = RwSignal::new(SubmitState::Idle);
    let locked = Signal::derive(move || submit.with(SubmitState::is_locked));

    // Protected page: bounce to login before anything is typed
    Effect::new(move |_| {
        ctx.authorize();
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submit.with_untracked(SubmitState::is_locked) {
            return;
        }
        let Some(client) = ctx.authorize() else { return };
        let current = draft.get_untracked();
        submit.set(SubmitState::Submitting);
        spawn_local(async move {
            let result = forms::submit_resource(&client, &current).await;
            finish_submit(ctx, submit, result, RESOURCE_CREATED, Route::Resources).await;
        });
    };

    view! {
        <section class="page resource-form-page">
            <a class="back-link" href=Route::Resources.to_hash()>"← Resources"</a>
            <h1>"Add Resource"</h1>

            <form class="resource-form" on:submit=on_submit>
                <div class="form-row">
                    <label class="form-label" for="title">"Title *"</label>
                    <BoundInput
                        id="title"
                        draft=draft
                        get=|d: &ResourceDraft| d.title.clone()
                        set=|d: &mut ResourceDraft, v| d.title = v
                        disabled=locked
                    />
                </div>

                <div class="form-row">
                    <label class="form-label" for="link">"Link *"</label>
                    <BoundInput
                        id="link"
                        kind="url"
                        draft=draft
                        get=|d: &ResourceDraft| d.link.clone()
                        set=|d: &mut ResourceDraft, v| d.link = v
                        disabled=locked
                        placeholder="https://"
                    />
                </div>

                <div class="form-row">
                    <label class="form-label" for="category">"Category"</label>
                    <select
                        id="category"
                        prop:disabled=move || locked.get()
                        on:change=move |ev| draft.update(|d| d.category = ResourceCategory::parse(&event_target_value(&ev)))
                    >
                        {ResourceCategory::ALL.into_iter().map(|c| view! {
                            <option value=c.as_str() selected=move || draft.with(|d| d.category == c)>{c.label()}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-row">
                    <label class="form-label" for="description">"Description"</label>
                    <BoundTextArea
                        id="description"
                        draft=draft
                        get=|d: &ResourceDraft| d.description.clone()
                        set=|d: &mut ResourceDraft, v| d.description = v
                        disabled=locked
                    />
                </div>

                <SubmitMessage submit=submit />
                <button type="submit" class="primary" prop:disabled=move || locked.get()>
                    {move || if submit.with(|s| matches!(s, SubmitState::Submitting)) { "Saving..." } else { "Add resource" }}
                </button>
            </form>
        </section>
    }
}
