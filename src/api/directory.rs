//! Directory Endpoints
//!
//! Caregivers and patients referenced by visits and care plans.

use crate::error::ApiResult;
use crate::models::{Caregiver, Patient};
use super::{ApiClient, ApiRequest, Transport};

pub async fn list_caregivers<T: Transport>(api: &ApiClient<T>) -> ApiResult<Vec<Caregiver>> {
    api.fetch(ApiRequest::get("/caregivers")).await
}

/// Caregivers free for the given slot
pub async fn list_available_caregivers<T: Transport>(
    api: &ApiClient<T>,
    date: &str,
    start_time: &str,
    end_time: &str,
) -> ApiResult<Vec<Caregiver>> {
    let request = ApiRequest::get("/caregivers/available")
        .query("date", date)
        .query("startTime", start_time)
        .query("endTime", end_time);
    api.fetch(request).await
}

pub async fn list_patients<T: Transport>(api: &ApiClient<T>) -> ApiResult<Vec<Patient>> {
    api.fetch(ApiRequest::get("/patients")).await
}
