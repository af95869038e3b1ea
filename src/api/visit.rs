//! Visit Endpoints
//!
//! Bindings for `/visits` and its task/medication sub-resources.

use crate::error::ApiResult;
use crate::models::{
    MedicationUpdate, TaskUpdate, Visit, VisitMedication, VisitPayload, VisitStatus, VisitStatusPatch,
    VisitTask,
};
use super::{segment, ApiClient, ApiRequest, Transport};

/// Path key for a checklist entry: its id, or its position when the server sent none
pub fn task_key(task: &VisitTask, index: usize) -> String {
    task.id.clone().unwrap_or_else(|| index.to_string())
}

pub fn medication_key(medication: &VisitMedication, index: usize) -> String {
    medication.id.clone().unwrap_or_else(|| index.to_string())
}

// ========================
// Commands
// ========================

pub async fn list_visits<T: Transport>(api: &ApiClient<T>) -> ApiResult<Vec<Visit>> {
    api.fetch(ApiRequest::get("/visits")).await
}

pub async fn list_today_visits<T: Transport>(api: &ApiClient<T>) -> ApiResult<Vec<Visit>> {
    api.fetch(ApiRequest::get("/visits/today")).await
}

pub async fn get_visit<T: Transport>(api: &ApiClient<T>, id: &str) -> ApiResult<Visit> {
    api.fetch(ApiRequest::get(format!("/visits/{}", segment(id)))).await
}

pub async fn create_visit<T: Transport>(api: &ApiClient<T>, payload: &VisitPayload) -> ApiResult<Visit> {
    api.fetch(ApiRequest::post("/visits", payload)?).await
}

pub async fn update_visit<T: Transport>(
    api: &ApiClient<T>,
    id: &str,
    payload: &VisitPayload,
) -> ApiResult<Visit> {
    api.fetch(ApiRequest::patch(format!("/visits/{}", segment(id)), payload)?).await
}

/// Change only the status of a visit. The response body is ignored.
pub async fn update_visit_status<T: Transport>(
    api: &ApiClient<T>,
    id: &str,
    status: VisitStatus,
) -> ApiResult<()> {
    let patch = VisitStatusPatch { status };
    api.execute(ApiRequest::patch(format!("/visits/{}", segment(id)), &patch)?).await
}

pub async fn delete_visit<T: Transport>(api: &ApiClient<T>, id: &str) -> ApiResult<()> {
    api.execute(ApiRequest::delete(format!("/visits/{}", segment(id)))).await
}

pub async fn update_task<T: Transport>(
    api: &ApiClient<T>,
    visit_id: &str,
    task_id: &str,
    update: &TaskUpdate,
) -> ApiResult<()> {
    let path = format!("/visits/{}/tasks/{}", segment(visit_id), segment(task_id));
    api.execute(ApiRequest::patch(path, update)?).await
}

pub async fn update_medication<T: Transport>(
    api: &ApiClient<T>,
    visit_id: &str,
    medication_id: &str,
    update: &MedicationUpdate,
) -> ApiResult<()> {
    let path = format!("/visits/{}/medications/{}", segment(visit_id), segment(medication_id));
    api.execute(ApiRequest::patch(path, update)?).await
}
