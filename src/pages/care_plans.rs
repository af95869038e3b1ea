//! Care Plan List Page
//!
//! Each plan with its goals. A goal's status is changed in place and the
//! local copy follows once the server accepts it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ErrorText, GoalStatusBadge, Spinner};
use crate::context::use_app_context;
use crate::load::LoadState;
use crate::models::{CarePlan, GoalStatus, GoalUpdate};
use crate::routes::Route;
use crate::store::set_goal_status;
use super::action_failed;

#[component]
pub fn CarePlanListPage() -> impl IntoView {
    let ctx = use_app_context();
    let (plans, set_plans) = signal(LoadState::<Vec<CarePlan>>::Loading);
    let (action_error, set_action_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    Effect::new(move |_| {
        let Some(client) = ctx.authorize() else { return };
        spawn_local(async move {
            let result = api::list_care_plans(&client).await;
            if let Err(err) = &result {
                ctx.check_auth(err);
            }
            set_plans.set(LoadState::from_result("care plans", result));
        });
    });

    let change_goal = Callback::new(move |(plan_id, index, status): (String, usize, GoalStatus)| {
        let Some(client) = ctx.authorize() else { return };
        let update = GoalUpdate { care_plan_id: plan_id.clone(), goal_index: index, status };
        set_busy.set(true);
        set_action_error.set(None);
        spawn_local(async move {
            let result = api::update_goal(&client, &update).await;
            let mut outcome = Ok(());
            set_plans.update(|state| {
                outcome = state.apply_update(result, |plans| {
                    if !set_goal_status(plans, &plan_id, index, status) {
                        log::warn!("goal {} of plan {} no longer listed", index, plan_id);
                    }
                })
            });
            if let Err(err) = outcome {
                set_action_error.set(Some(action_failed(ctx, "update goal", &err)));
            }
            set_busy.set(false);
        });
    });

    view! {
        <section class="page care-plan-page">
            <div class="page-header">
                <h1>"Care Plans"</h1>
                <div class="page-actions">
                    <a class="button primary" href=Route::CarePlanNew.to_hash()>"New care plan"</a>
                </div>
            </div>

            {move || action_error.get().map(|message| view! { <ErrorText message=message /> })}

            {move || match plans.get() {
                LoadState::Loading => view! { <Spinner label="Loading care plans..." /> }.into_any(),
                LoadState::Failed(message) => view! { <ErrorText message=message /> }.into_any(),
                LoadState::Loaded(list) if list.is_empty() => {
                    view! { <p class="empty-message">"No care plans yet."</p> }.into_any()
                }
                LoadState::Loaded(list) => view! {
                    <div class="care-plan-list">
                        {list.into_iter().map(|plan| view! {
                            <CarePlanCard plan=plan busy=busy on_change=change_goal />
                        }).collect_view()}
                    </div>
                }.into_any(),
            }}
        </section>
    }
}

#[component]
fn CarePlanCard(
    plan: CarePlan,
    busy: ReadSignal<bool>,
    on_change: Callback<(String, usize, GoalStatus)>,
) -> impl IntoView {
    let progress = format!("{}/{} goals achieved", plan.achieved_count(), plan.goals.len());
    let plan_id = plan.id.clone();

    view! {
        <article class="care-plan-card">
            <header>
                <h2>{plan.title.clone()}</h2>
                <span class="muted">{plan.patient.display_name().to_string()}</span>
            </header>
            {plan.description.clone().map(|text| view! { <p class="care-plan-description">{text}</p> })}
            <p class="care-plan-progress">{progress}</p>
            <ul class="goal-list">
                {plan.goals.into_iter().enumerate().map(|(index, goal)| {
                    let plan_id = plan_id.clone();
                    let current = goal.status;
                    view! {
                        <li class="goal">
                            <span class="goal-text">{goal.goal}</span>
                            <GoalStatusBadge status=current />
                            <select
                                prop:disabled=move || busy.get()
                                on:change=move |ev| {
                                    let status = GoalStatus::parse(&event_target_value(&ev));
                                    on_change.run((plan_id.clone(), index, status));
                                }
                            >
                                {GoalStatus::ALL.into_iter().map(|s| view! {
                                    <option value=s.as_str() selected={s == current}>{s.label()}</option>
                                }).collect_view()}
                            </select>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </article>
    }
}
