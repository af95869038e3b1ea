//! Status Badges
//!
//! Small colored labels driven by enum props.

use leptos::prelude::*;

use crate::models::{GoalStatus, MedicationStatus, ResourceCategory, VisitStatus};

#[component]
pub fn VisitStatusBadge(status: VisitStatus) -> impl IntoView {
    view! {
        <span class=format!("badge badge-visit-{}", status.as_str())>{status.label()}</span>
    }
}

#[component]
pub fn MedicationStatusBadge(status: MedicationStatus) -> impl IntoView {
    view! {
        <span class=format!("badge badge-med-{}", status.as_str())>{status.label()}</span>
    }
}

#[component]
pub fn GoalStatusBadge(status: GoalStatus) -> impl IntoView {
    view! {
        <span class=format!("badge badge-goal-{}", status.as_str())>{status.label()}</span>
    }
}

#[component]
pub fn CategoryBadge(category: ResourceCategory) -> impl IntoView {
    view! {
        <span class=format!("badge badge-category-{}", category.as_str())>{category.label()}</span>
    }
}
