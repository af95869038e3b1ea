//! Care Plan Form Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{BoundInput, BoundTextArea, ErrorText, PersonSelect, Spinner, SubmitMessage};
use crate::context::use_app_context;
use crate::forms::{self, CarePlanDraft, SubmitState, CARE_PLAN_CREATED};
use crate::load::LoadState;
use crate::models::Patient;
use crate::routes::Route;
use super::finish_submit;

#[component]
pub fn CarePlanFormPage() -> impl IntoView {
    let ctx = use_app_context();
    let draft = RwSignal::new(CarePlanDraft::default());
    let submit = RwSignal::new(SubmitState::Idle);
    let (patients, set_patients) = signal(LoadState::<Vec<Patient>>::Loading);
    let locked = Signal::derive(move || submit.with(SubmitState::is_locked));

    Effect::new(move |_| {
        let Some(client) = ctx.authorize() else { return };
        spawn_local(async move {
            let result = api::list_patients(&client).await;
            if let Err(err) = &result {
                ctx.check_auth(err);
            }
            set_patients.set(LoadState::from_result("patients", result));
        });
    });

    let options = Signal::derive(move || patients.with(|p| p.loaded().cloned().unwrap_or_default()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submit.with_untracked(SubmitState::is_locked) {
            return;
        }
        let Some(client) = ctx.authorize() else { return };
        let current = draft.get_untracked();
        submit.set(SubmitState::Submitting);
        spawn_local(async move {
            let result = forms::submit_care_plan(&client, &current).await;
            finish_submit(ctx, submit, result, CARE_PLAN_CREATED, Route::CarePlans).await;
        });
    };

    let goal_rows = move || (0..draft.with(|d| d.goals.len())).collect::<Vec<_>>();

    view! {
        <section class="page care-plan-form-page">
            <a class="back-link" href=Route::CarePlans.to_hash()>"← Care Plans"</a>
            <h1>"New Care Plan"</h1>

            {move || match patients.get() {
                LoadState::Loading => view! { <Spinner label="Loading patients..." /> }.into_any(),
                LoadState::Failed(message) => view! { <ErrorText message=message /> }.into_any(),
                LoadState::Loaded(_) => view! {
                    <form class="care-plan-form" on:submit=on_submit>
                        <div class="form-row">
                            <label class="form-label" for="patient">"Patient *"</label>
                            <PersonSelect
                                id="patient"
                                draft=draft
                                get=|d: &CarePlanDraft| d.patient.clone()
                                set=|d: &mut CarePlanDraft, v| d.patient = v
                                options=options
                                disabled=locked
                                placeholder="Select patient"
                            />
                        </div>

                        <div class="form-row">
                            <label class="form-label" for="title">"Title *"</label>
                            <BoundInput
                                id="title"
                                draft=draft
                                get=|d: &CarePlanDraft| d.title.clone()
                                set=|d: &mut CarePlanDraft, v| d.title = v
                                disabled=locked
                            />
                        </div>

                        <div class="form-row">
                            <label class="form-label" for="description">"Description"</label>
                            <BoundTextArea
                                id="description"
                                draft=draft
                                get=|d: &CarePlanDraft| d.description.clone()
                                set=|d: &mut CarePlanDraft, v| d.description = v
                                disabled=locked
                            />
                        </div>

                        <fieldset class="checklist-editor">
                            <legend>"Goals *"</legend>
                            <For
                                each=goal_rows
                                key=|index| *index
                                children=move |index| view! {
                                    <div class="checklist-row">
                                        <input
                                            type="text"
                                            placeholder=format!("Goal {}", index + 1)
                                            prop:value=move || draft.with(|d| d.goals.get(index).map(|g| g.goal.clone()).unwrap_or_default())
                                            prop:disabled=move || locked.get()
                                            on:input=move |ev| {
                                                let text = event_target_value(&ev);
                                                draft.update(|d| d.set_goal_text(index, text))
                                            }
                                        />
                                        <button
                                            type="button"
                                            class="remove-btn"
                                            prop:disabled=move || locked.get() || draft.with(|d| d.goals.len() <= 1)
                                            on:click=move |_| draft.update(|d| d.remove_goal(index))
                                        >
                                            "×"
                                        </button>
                                    </div>
                                }
                            />
                            <button
                                type="button"
                                class="add-row-btn"
                                prop:disabled=move || locked.get()
                                on:click=move |_| draft.update(CarePlanDraft::add_goal)
                            >
                                "+ Add goal"
                            </button>
                        </fieldset>

                        <SubmitMessage submit=submit />
                        <button type="submit" class="primary" prop:disabled=move || locked.get()>
                            {move || if submit.with(|s| matches!(s, SubmitState::Submitting)) { "Saving..." } else { "Create care plan" }}
                        </button>
                    </form>
                }.into_any(),
            }}
        </section>
    }
}
