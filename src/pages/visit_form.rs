//! Visit Form Page
//!
//! Create (`#/visits/new`) or edit (`#/visits/{id}/edit`) a visit. The form
//! is usable once caregivers and patients have both loaded.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{BoundInput, BoundTextArea, ErrorText, PersonSelect, Spinner, SubmitMessage};
use crate::context::use_app_context;
use crate::error::ApiError;
use crate::forms::{self, SubmitState, VisitDraft, VISIT_CREATED, VISIT_UPDATED};
use crate::load::{load_reference_lists, LoadState, ReferenceLists};
use crate::models::{Caregiver, MedicationStatus, Person, VisitStatus};
use crate::routes::Route;
use super::finish_submit;

#[component]
pub fn VisitFormPage(#[prop(optional)] id: Option<String>) -> impl IntoView {
    let ctx = use_app_context();
    let is_edit = id.is_some();
    let editing = StoredValue::new(id);
    let draft = RwSignal::new(VisitDraft::default());
    let submit = RwSignal::new(SubmitState::Idle);
    let (lists, set_lists) = signal(LoadState::<ReferenceLists>::Loading);
    let (only_available, set_only_available) = signal(false);
    let (available, set_available) = signal::<Option<Vec<Caregiver>>>(None);
    let locked = Signal::derive(move || submit.with(SubmitState::is_locked));

    // Reference lists in parallel, then the visit being edited
    Effect::new(move |_| {
        let Some(client) = ctx.authorize() else { return };
        let editing = editing.get_value();
        spawn_local(async move {
            let result = async {
                let lists = load_reference_lists(&client).await?;
                if let Some(id) = &editing {
                    let visit = api::get_visit(&client, id).await?;
                    draft.set(VisitDraft::from_visit(&visit));
                }
                Ok::<_, ApiError>(lists)
            }
            .await;
            if let Err(err) = &result {
                ctx.check_auth(err);
            }
            set_lists.set(LoadState::from_result("visit form data", result));
        });
    });

    // Narrow the caregiver picker to who is free in the chosen slot
    let slot = Memo::new(move |_| {
        draft.with(|d| d.slot().map(|(date, start, end)| (date.to_string(), start.to_string(), end.to_string())))
    });
    Effect::new(move |_| {
        let wanted = only_available.get();
        let Some((date, start, end)) = slot.get().filter(|_| wanted) else {
            set_available.set(None);
            return;
        };
        let Some(client) = ctx.authorize() else { return };
        spawn_local(async move {
            match api::list_available_caregivers(&client, &date, &start, &end).await {
                Ok(caregivers) => {
                    if draft.try_update(|d| d.keep_caregiver_among(&caregivers)).unwrap_or(false) {
                        log::info!("chosen caregiver is not free in this slot, cleared");
                    }
                    set_available.set(Some(caregivers));
                }
                Err(err) => {
                    log::warn!("availability lookup failed: {}", err);
                    set_available.set(None);
                }
            }
        });
    });

    let caregivers = Signal::derive(move || {
        let all = lists.with(|l| l.loaded().map(|l| l.caregivers.clone()).unwrap_or_default());
        match (only_available.get(), available.get()) {
            (true, Some(free)) => free,
            _ => all,
        }
    });
    let patients: Signal<Vec<Person>> =
        Signal::derive(move || lists.with(|l| l.loaded().map(|l| l.patients.clone()).unwrap_or_default()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submit.with_untracked(SubmitState::is_locked) {
            return;
        }
        let Some(client) = ctx.authorize() else { return };
        let current = draft.get_untracked();
        let editing = editing.get_value();
        submit.set(SubmitState::Submitting);
        spawn_local(async move {
            let result = forms::submit_visit(&client, &current, editing.as_deref()).await;
            let (message, next) = match editing {
                Some(id) => (VISIT_UPDATED, Route::VisitDetail(id)),
                None => (VISIT_CREATED, Route::Visits),
            };
            finish_submit(ctx, submit, result, message, next).await;
        });
    };

    view! {
        <section class="page visit-form-page">
            <a class="back-link" href=Route::Visits.to_hash()>"← Visits"</a>
            <h1>{if is_edit { "Edit Visit" } else { "Schedule Visit" }}</h1>

            {move || match lists.get() {
                LoadState::Loading => view! { <Spinner label="Loading caregivers and patients..." /> }.into_any(),
                LoadState::Failed(message) => view! { <ErrorText message=message /> }.into_any(),
                LoadState::Loaded(_) => view! {
                    <form class="visit-form" on:submit=on_submit>
                        <div class="form-row">
                            <label class="form-label" for="patient">"Patient *"</label>
                            <PersonSelect
                                id="patient"
                                draft=draft
                                get=|d: &VisitDraft| d.patient.clone()
                                set=|d: &mut VisitDraft, v| d.patient = v
                                options=patients
                                disabled=locked
                                placeholder="Select patient"
                            />
                        </div>

                        <div class="form-row">
                            <label class="form-label" for="caregiver">"Caregiver *"</label>
                            <PersonSelect
                                id="caregiver"
                                draft=draft
                                get=|d: &VisitDraft| d.caregiver.clone()
                                set=|d: &mut VisitDraft, v| d.caregiver = v
                                options=caregivers
                                disabled=locked
                                placeholder="Select caregiver"
                            />
                            <label class="toggle">
                                <input
                                    type="checkbox"
                                    prop:checked=move || only_available.get()
                                    on:change=move |ev| set_only_available.set(event_target_checked(&ev))
                                />
                                "Only available for this time"
                            </label>
                        </div>

                        <div class="form-row inline">
                            <div>
                                <label class="form-label" for="date">"Date *"</label>
                                <BoundInput
                                    id="date"
                                    kind="date"
                                    draft=draft
                                    get=|d: &VisitDraft| d.date.clone()
                                    set=|d: &mut VisitDraft, v| d.date = v
                                    disabled=locked
                                />
                            </div>
                            <div>
                                <label class="form-label" for="start">"Start *"</label>
                                <BoundInput
                                    id="start"
                                    kind="time"
                                    draft=draft
                                    get=|d: &VisitDraft| d.start_time.clone()
                                    set=|d: &mut VisitDraft, v| d.start_time = v
                                    disabled=locked
                                />
                            </div>
                            <div>
                                <label class="form-label" for="end">"End *"</label>
                                <BoundInput
                                    id="end"
                                    kind="time"
                                    draft=draft
                                    get=|d: &VisitDraft| d.end_time.clone()
                                    set=|d: &mut VisitDraft, v| d.end_time = v
                                    disabled=locked
                                />
                            </div>
                        </div>

                        <div class="form-row">
                            <label class="form-label" for="location">"Location"</label>
                            <BoundInput
                                id="location"
                                draft=draft
                                get=|d: &VisitDraft| d.location.clone()
                                set=|d: &mut VisitDraft, v| d.location = v
                                disabled=locked
                                placeholder="Address or room"
                            />
                        </div>

                        <div class="form-row">
                            <label class="form-label" for="status">"Status"</label>
                            <select
                                id="status"
                                prop:disabled=move || locked.get()
                                on:change=move |ev| draft.update(|d| d.status = VisitStatus::parse(&event_target_value(&ev)))
                            >
                                {VisitStatus::ALL.into_iter().map(|s| view! {
                                    <option value=s.as_str() selected=move || draft.with(|d| d.status == s)>{s.label()}</option>
                                }).collect_view()}
                            </select>
                        </div>

                        <TaskEditor draft=draft disabled=locked />
                        <MedicationEditor draft=draft disabled=locked />

                        <div class="form-row">
                            <label class="form-label" for="notes">"Notes"</label>
                            <BoundTextArea
                                id="notes"
                                draft=draft
                                get=|d: &VisitDraft| d.notes.clone()
                                set=|d: &mut VisitDraft, v| d.notes = v
                                disabled=locked
                            />
                        </div>

                        <SubmitMessage submit=submit />
                        <button type="submit" class="primary" prop:disabled=move || locked.get()>
                            {move || match (submit.get(), is_edit) {
                                (SubmitState::Submitting, _) => "Saving...",
                                (_, true) => "Save changes",
                                (_, false) => "Schedule visit",
                            }}
                        </button>
                    </form>
                }.into_any(),
            }}
        </section>
    }
}

/// Editable task checklist rows
#[component]
fn TaskEditor(draft: RwSignal<VisitDraft>, disabled: Signal<bool>) -> impl IntoView {
    let rows = move || (0..draft.with(|d| d.tasks.len())).collect::<Vec<_>>();

    view! {
        <fieldset class="checklist-editor">
            <legend>"Tasks"</legend>
            <For
                each=rows
                key=|index| *index
                children=move |index| view! {
                    <div class="checklist-row">
                        <input
                            type="text"
                            placeholder="Task name"
                            prop:value=move || draft.with(|d| d.tasks.get(index).map(|t| t.task_name.clone()).unwrap_or_default())
                            prop:disabled=move || disabled.get()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| if let Some(task) = d.tasks.get_mut(index) { task.task_name = value })
                            }
                        />
                        <label class="toggle">
                            <input
                                type="checkbox"
                                prop:checked=move || draft.with(|d| d.tasks.get(index).is_some_and(|t| t.completed))
                                prop:disabled=move || disabled.get()
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    draft.update(|d| if let Some(task) = d.tasks.get_mut(index) { task.completed = checked })
                                }
                            />
                            "Done"
                        </label>
                        <button
                            type="button"
                            class="remove-btn"
                            prop:disabled=move || disabled.get()
                            on:click=move |_| draft.update(|d| d.remove_task(index))
                        >
                            "×"
                        </button>
                    </div>
                }
            />
            <button
                type="button"
                class="add-row-btn"
                prop:disabled=move || disabled.get()
                on:click=move |_| draft.update(VisitDraft::add_task)
            >
                "+ Add task"
            </button>
        </fieldset>
    }
}

/// Editable medication rows
#[component]
fn MedicationEditor(draft: RwSignal<VisitDraft>, disabled: Signal<bool>) -> impl IntoView {
    let rows = move || (0..draft.with(|d| d.medications.len())).collect::<Vec<_>>();

    view! {
        <fieldset class="checklist-editor">
            <legend>"Medications"</legend>
            <For
                each=rows
                key=|index| *index
                children=move |index| view! {
                    <div class="checklist-row">
                        <input
                            type="text"
                            placeholder="Medication"
                            prop:value=move || draft.with(|d| d.medications.get(index).map(|m| m.medication_name.clone()).unwrap_or_default())
                            prop:disabled=move || disabled.get()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| if let Some(med) = d.medications.get_mut(index) { med.medication_name = value })
                            }
                        />
                        <select
                            prop:disabled=move || disabled.get()
                            on:change=move |ev| {
                                let status = MedicationStatus::parse(&event_target_value(&ev));
                                draft.update(|d| if let Some(med) = d.medications.get_mut(index) { med.status = status })
                            }
                        >
                            {MedicationStatus::ALL.into_iter().map(|s| view! {
                                <option
                                    value=s.as_str()
                                    selected=move || draft.with(|d| d.medications.get(index).is_some_and(|m| m.status == s))
                                >
                                    {s.label()}
                                </option>
                            }).collect_view()}
                        </select>
                        <button
                            type="button"
                            class="remove-btn"
                            prop:disabled=move || disabled.get()
                            on:click=move |_| draft.update(|d| d.remove_medication(index))
                        >
                            "×"
                        </button>
                    </div>
                }
            />
            <button
                type="button"
                class="add-row-btn"
                prop:disabled=move || disabled.get()
                on:click=move |_| draft.update(VisitDraft::add_medication)
            >
                "+ Add medication"
            </button>
        </fieldset>
    }
}
