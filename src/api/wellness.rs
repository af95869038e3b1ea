//! Wellness Endpoints
//!
//! Care plans, goal progress and wellness resources under `/wellness`.

use crate::error::ApiResult;
use crate::models::{CarePlan, CarePlanPayload, GoalUpdate, Resource, ResourcePayload};
use super::{segment, ApiClient, ApiRequest, Transport};

// ========================
// Care Plans
// ========================

pub async fn list_care_plans<T: Transport>(api: &ApiClient<T>) -> ApiResult<Vec<CarePlan>> {
    api.fetch(ApiRequest::get("/wellness/care-plan")).await
}

pub async fn create_care_plan<T: Transport>(
    api: &ApiClient<T>,
    payload: &CarePlanPayload,
) -> ApiResult<CarePlan> {
    api.fetch(ApiRequest::post("/wellness/care-plan", payload)?).await
}

/// Set the status of one goal, addressed by plan id and goal position
pub async fn update_goal<T: Transport>(api: &ApiClient<T>, update: &GoalUpdate) -> ApiResult<()> {
    api.execute(ApiRequest::put("/wellness/care-plan/goal", update)?).await
}

// ========================
// Resources
// ========================

pub async fn list_resources<T: Transport>(api: &ApiClient<T>) -> ApiResult<Vec<Resource>> {
    api.fetch(ApiRequest::get("/wellness/resources")).await
}

pub async fn create_resource<T: Transport>(
    api: &ApiClient<T>,
    payload: &ResourcePayload,
) -> ApiResult<Resource> {
    api.fetch(ApiRequest::post("/wellness/resources", payload)?).await
}

pub async fn delete_resource<T: Transport>(api: &ApiClient<T>, id: &str) -> ApiResult<()> {
    api.execute(ApiRequest::delete(format!("/wellness/resources/{}", segment(id)))).await
}
