//! Visit Detail Page
//!
//! One visit with its checklist, medications and check-in/out record.
//! Task, medication and status changes are sent one at a time and applied
//! to the local copy once the server accepts them. Every response redraws
//! the controls from that copy, so a rejected change snaps back.

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ConfirmDialog, DeletePrompt, ErrorText, MedicationStatusBadge, Spinner, VisitStatusBadge};
use crate::context::use_app_context;
use crate::load::LoadState;
use crate::models::{MedicationStatus, MedicationUpdate, TaskUpdate, Visit, VisitStatus};
use crate::routes::Route;
use super::action_failed;

fn format_stamp(stamp: Option<DateTime<Utc>>) -> String {
    stamp
        .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn VisitDetailPage(id: String) -> impl IntoView {
    let ctx = use_app_context();
    let (visit, set_visit) = signal(LoadState::<Visit>::Loading);
    let (action_error, set_action_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);
    let prompt = RwSignal::new(DeletePrompt::default());

    let visit_id = StoredValue::new(id);

    Effect::new(move |_| {
        let Some(client) = ctx.authorize() else { return };
        let id = visit_id.get_value();
        spawn_local(async move {
            let result = api::get_visit(&client, &id).await;
            if let Err(err) = &result {
                ctx.check_auth(err);
            }
            set_visit.set(LoadState::from_result("visit", result));
        });
    });

    let toggle_task = move |index: usize| {
        let Some(task) = visit.with_untracked(|v| v.loaded().and_then(|v| v.task_list.get(index).cloned())) else {
            return;
        };
        let Some(client) = ctx.authorize() else { return };
        let key = api::task_key(&task, index);
        let completed = !task.completed;
        let update = TaskUpdate { completed, notes: task.notes.clone() };
        set_busy.set(true);
        spawn_local(async move {
            let result = api::update_task(&client, &visit_id.get_value(), &key, &update).await;
            let mut outcome = Ok(());
            set_visit.update(|state| {
                outcome = state.apply_update(result, |v| {
                    if let Some(task) = v.task_list.get_mut(index) {
                        task.completed = completed;
                    }
                })
            });
            if let Err(err) = outcome {
                set_action_error.set(Some(action_failed(ctx, "update task", &err)));
            }
            set_busy.set(false);
        });
    };

    let set_medication = move |index: usize, status: MedicationStatus| {
        let Some(medication) =
            visit.with_untracked(|v| v.loaded().and_then(|v| v.medication_list.get(index).cloned()))
        else {
            return;
        };
        let Some(client) = ctx.authorize() else { return };
        let key = api::medication_key(&medication, index);
        let update = MedicationUpdate { status, notes: medication.notes.clone() };
        set_busy.set(true);
        spawn_local(async move {
            let result = api::update_medication(&client, &visit_id.get_value(), &key, &update).await;
            let mut outcome = Ok(());
            set_visit.update(|state| {
                outcome = state.apply_update(result, |v| {
                    if let Some(medication) = v.medication_list.get_mut(index) {
                        medication.status = status;
                    }
                })
            });
            if let Err(err) = outcome {
                set_action_error.set(Some(action_failed(ctx, "update medication", &err)));
            }
            set_busy.set(false);
        });
    };

    let set_status = move |status: VisitStatus| {
        let Some(client) = ctx.authorize() else { return };
        set_busy.set(true);
        spawn_local(async move {
            let result = api::update_visit_status(&client, &visit_id.get_value(), status).await;
            let mut outcome = Ok(());
            set_visit.update(|state| outcome = state.apply_update(result, |v| v.status = status));
            if let Err(err) = outcome {
                set_action_error.set(Some(action_failed(ctx, "update status", &err)));
            }
            set_busy.set(false);
        });
    };

    let delete_visit = move |id: String| {
        let Some(client) = ctx.authorize() else { return };
        spawn_local(async move {
            match api::delete_visit(&client, &id).await {
                Ok(()) => {
                    log::info!("deleted visit {}", id);
                    ctx.navigate(Route::Visits);
                }
                Err(err) => set_action_error.set(Some(action_failed(ctx, "delete visit", &err))),
            }
        });
    };

    view! {
        <section class="page visit-detail-page">
            <a class="back-link" href=Route::Visits.to_hash()>"← Visits"</a>
            {move || action_error.get().map(|message| view! { <ErrorText message=message /> })}

            {move || match visit.get() {
                LoadState::Loading => view! { <Spinner label="Loading visit..." /> }.into_any(),
                LoadState::Failed(message) => view! { <ErrorText message=message /> }.into_any(),
                LoadState::Loaded(v) => {
                    let id = v.id.clone();
                    let current_status = v.status;
                    view! {
                        <div class="page-header">
                            <h1>{format!("Visit on {}", v.day())}</h1>
                            <div class="page-actions">
                                <a class="button" href=Route::VisitEdit(v.id.clone()).to_hash()>"Edit"</a>
                                <button
                                    class="delete-btn"
                                    on:click=move |_| prompt.update(|p| p.open(id.clone()))
                                >
                                    "Delete"
                                </button>
                            </div>
                        </div>

                        <dl class="visit-summary">
                            <dt>"Patient"</dt><dd>{v.patient.display_name().to_string()}</dd>
                            <dt>"Caregiver"</dt><dd>{v.caregiver.display_name().to_string()}</dd>
                            <dt>"Time"</dt><dd>{format!("{} - {}", v.start_time, v.end_time)}</dd>
                            <dt>"Location"</dt><dd>{v.location.clone().unwrap_or_else(|| "-".to_string())}</dd>
                            <dt>"Status"</dt>
                            <dd class="status-row">
                                <VisitStatusBadge status=v.status />
                                <select
                                    prop:disabled=move || busy.get()
                                    on:change=move |ev| set_status(VisitStatus::parse(&event_target_value(&ev)))
                                >
                                    {VisitStatus::ALL.into_iter().map(|s| view! {
                                        <option value=s.as_str() selected={s == current_status}>{s.label()}</option>
                                    }).collect_view()}
                                </select>
                            </dd>
                        </dl>

                        <div class="check-record">
                            <div>
                                <h3>"Check-in"</h3>
                                <p>{format_stamp(v.check_in_time)}</p>
                                <p class="muted">{v.check_in_location.clone().unwrap_or_default()}</p>
                            </div>
                            <div>
                                <h3>"Check-out"</h3>
                                <p>{format_stamp(v.check_out_time)}</p>
                                <p class="muted">{v.check_out_location.clone().unwrap_or_default()}</p>
                            </div>
                        </div>

                        <h2>{format!("Tasks ({}/{})", v.tasks_done(), v.task_list.len())}</h2>
                        <ul class="task-list">
                            {v.task_list.iter().enumerate().map(|(index, task)| {
                                let class = if task.completed { "task done" } else { "task" };
                                view! {
                                <li class=class>
                                    <label>
                                        <input
                                            type="checkbox"
                                            prop:checked=task.completed
                                            prop:disabled=move || busy.get()
                                            on:change=move |_| toggle_task(index)
                                        />
                                        {task.task_name.clone()}
                                    </label>
                                    {task.notes.clone().map(|notes| view! { <span class="task-notes">{notes}</span> })}
                                </li>
                                }
                            }).collect_view()}
                        </ul>

                        <h2>"Medications"</h2>
                        <ul class="medication-list">
                            {v.medication_list.iter().enumerate().map(|(index, medication)| {
                                let current = medication.status;
                                view! {
                                <li class="medication">
                                    <span class="medication-name">{medication.medication_name.clone()}</span>
                                    <MedicationStatusBadge status=medication.status />
                                    <select
                                        prop:disabled=move || busy.get()
                                        on:change=move |ev| {
                                            set_medication(index, MedicationStatus::parse(&event_target_value(&ev)))
                                        }
                                    >
                                        {MedicationStatus::ALL.into_iter().map(|s| view! {
                                            <option value=s.as_str() selected={s == current}>{s.label()}</option>
                                        }).collect_view()}
                                    </select>
                                    {medication.notes.clone().map(|notes| view! { <span class="medication-notes">{notes}</span> })}
                                </li>
                                }
                            }).collect_view()}
                        </ul>

                        {v.notes.clone().map(|notes| view! {
                            <h2>"Notes"</h2>
                            <p class="visit-notes">{notes}</p>
                        })}
                    }.into_any()
                }
            }}

            <ConfirmDialog
                prompt=prompt
                message="Delete this visit? This cannot be undone."
                on_confirm=delete_visit
            />
        </section>
    }
}
