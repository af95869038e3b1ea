//! Visit List Page
//!
//! All visits, or only today's, with delete confirmation per row.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{ConfirmDialog, DeletePrompt, ErrorText, Spinner, VisitStatusBadge};
use crate::context::use_app_context;
use crate::load::LoadState;
use crate::models::Visit;
use crate::routes::Route;
use crate::store::{store_remove_visit, VisitBoard, VisitBoardStoreFields};
use super::action_failed;

#[component]
pub fn VisitListPage() -> impl IntoView {
    let ctx = use_app_context();
    let board = Store::new(VisitBoard::default());
    let (load, set_load) = signal(LoadState::<()>::Loading);
    let (action_error, set_action_error) = signal::<Option<String>>(None);
    let prompt = RwSignal::new(DeletePrompt::default());

    // Load on mount and whenever the Today toggle flips
    Effect::new(move |_| {
        let today_only = board.today_only().get();
        let Some(client) = ctx.authorize() else { return };
        set_load.set(LoadState::Loading);
        spawn_local(async move {
            let result = if today_only {
                api::list_today_visits(&client).await
            } else {
                api::list_visits(&client).await
            };
            if let Err(err) = &result {
                ctx.check_auth(err);
            }
            let result = result.map(|visits| board.visits().set(visits));
            set_load.set(LoadState::from_result("visits", result));
        });
    });

    let delete_visit = move |id: String| {
        let Some(client) = ctx.authorize() else { return };
        set_action_error.set(None);
        spawn_local(async move {
            match api::delete_visit(&client, &id).await {
                Ok(()) => {
                    log::info!("deleted visit {}", id);
                    store_remove_visit(&board, &id);
                }
                Err(err) => set_action_error.set(Some(action_failed(ctx, "delete visit", &err))),
            }
        });
    };

    view! {
        <section class="page visit-list-page">
            <div class="page-header">
                <h1>{move || if board.today_only().get() { "Today's Visits" } else { "Visits" }}</h1>
                <div class="page-actions">
                    <label class="toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || board.today_only().get()
                            on:change=move |ev| board.today_only().set(event_target_checked(&ev))
                        />
                        "Today only"
                    </label>
                    <a class="button primary" href=Route::VisitNew.to_hash()>"Schedule visit"</a>
                </div>
            </div>

            {move || action_error.get().map(|message| view! { <ErrorText message=message /> })}

            {move || match load.get() {
                LoadState::Loading => view! { <Spinner label="Loading visits..." /> }.into_any(),
                LoadState::Failed(message) => view! { <ErrorText message=message /> }.into_any(),
                LoadState::Loaded(()) => view! {
                    <Show
                        when=move || !board.visits().with(Vec::is_empty)
                        fallback=|| view! { <p class="empty-message">"No visits found."</p> }
                    >
                        <table class="visit-table">
                            <thead>
                                <tr>
                                    <th>"Date"</th>
                                    <th>"Time"</th>
                                    <th>"Patient"</th>
                                    <th>"Caregiver"</th>
                                    <th>"Status"</th>
                                    <th>"Tasks"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || board.visits().get()
                                    key=|visit| visit.id.clone()
                                    children=move |visit| view! { <VisitRow visit=visit prompt=prompt /> }
                                />
                            </tbody>
                        </table>
                    </Show>
                }.into_any(),
            }}

            <ConfirmDialog
                prompt=prompt
                message="Delete this visit? This cannot be undone."
                on_confirm=delete_visit
            />
        </section>
    }
}

#[component]
fn VisitRow(visit: Visit, prompt: RwSignal<DeletePrompt>) -> impl IntoView {
    let id = visit.id.clone();
    let detail = Route::VisitDetail(visit.id.clone()).to_hash();
    let edit = Route::VisitEdit(visit.id.clone()).to_hash();
    let tasks = format!("{}/{}", visit.tasks_done(), visit.task_list.len());

    view! {
        <tr class="visit-row">
            <td>{visit.day().to_string()}</td>
            <td>{format!("{} - {}", visit.start_time, visit.end_time)}</td>
            <td>{visit.patient.display_name().to_string()}</td>
            <td>{visit.caregiver.display_name().to_string()}</td>
            <td><VisitStatusBadge status=visit.status /></td>
            <td>{tasks}</td>
            <td class="row-actions">
                <a href=detail>"View"</a>
                <a href=edit>"Edit"</a>
                <button
                    class="delete-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        prompt.update(|p| p.open(id.clone()));
                    }
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
