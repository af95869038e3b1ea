//! Page Loading
//!
//! The idle → loading → loaded | failed lifecycle shared by every page,
//! and the parallel load of form reference lists.

use futures::future::try_join;

use crate::api::{self, ApiClient, Transport};
use crate::error::ApiResult;
use crate::models::{Caregiver, Patient};

/// What a page knows about its data
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    /// Map a finished fetch, logging failures under `what`
    pub fn from_result(what: &str, result: ApiResult<T>) -> Self {
        match result {
            Ok(value) => LoadState::Loaded(value),
            Err(err) => {
                log::error!("failed to load {}: {}", what, err);
                LoadState::Failed(err.user_message())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// Patch loaded data in place; no-op while loading or failed
    pub fn modify(&mut self, f: impl FnOnce(&mut T)) {
        if let LoadState::Loaded(value) = self {
            f(value);
        }
    }

    /// Apply `f` only if the server accepted the change, and hand the
    /// outcome back. Callers run this inside a signal update even on failure,
    /// so controls the user already flipped are redrawn from the data.
    pub fn apply_update(&mut self, result: ApiResult<()>, f: impl FnOnce(&mut T)) -> ApiResult<()> {
        result.map(|()| self.modify(f))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Caregivers and patients a form picks from
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReferenceLists {
    pub caregivers: Vec<Caregiver>,
    pub patients: Vec<Patient>,
}

/// Fetch both lists concurrently; either failure fails the whole load
pub async fn load_reference_lists<T: Transport>(api: &ApiClient<T>) -> ApiResult<ReferenceLists> {
    let (caregivers, patients) = try_join(api::list_caregivers(api), api::list_patients(api)).await?;
    Ok(ReferenceLists { caregivers, patients })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{client, RecordingTransport};
    use crate::error::ApiError;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_both_lists_loaded() {
        let transport = RecordingTransport::new()
            .respond(200, json!([{ "_id": "c1", "name": "Ana" }]))
            .respond(200, json!([{ "_id": "p1", "name": "Ben" }, { "_id": "p2", "name": "Cy" }]));

        let lists = block_on(load_reference_lists(&client(transport.clone()))).unwrap();

        assert_eq!(lists.caregivers.len(), 1);
        assert_eq!(lists.patients.len(), 2);
        let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
        assert!(urls.iter().any(|u| u.ends_with("/caregivers")));
        assert!(urls.iter().any(|u| u.ends_with("/patients")));
    }

    #[test]
    fn test_either_failure_aborts() {
        let transport = RecordingTransport::new()
            .respond(200, json!([{ "_id": "c1", "name": "Ana" }]))
            .respond(500, json!({ "message": "Directory unavailable" }));

        let err = block_on(load_reference_lists(&client(transport))).unwrap_err();
        assert_eq!(err.user_message(), "Directory unavailable");
    }

    #[test]
    fn test_load_state_from_result() {
        let ok: LoadState<u8> = LoadState::from_result("n", Ok(3));
        assert_eq!(ok.loaded(), Some(&3));
        assert!(!ok.is_loading());

        let failed: LoadState<u8> = LoadState::from_result("n", Err(ApiError::Network("down".into())));
        assert_eq!(failed.error(), Some(crate::error::GENERIC_ERROR));
        assert!(LoadState::<u8>::default().is_loading());
    }

    #[test]
    fn test_rejected_update_keeps_accepted_data() {
        let mut state = LoadState::Loaded(vec![false, true]);

        let rejected = state.apply_update(Err(ApiError::Http { status: 400, message: None }), |v| v[0] = true);
        assert!(rejected.is_err());
        assert_eq!(state.loaded(), Some(&vec![false, true]));

        state.apply_update(Ok(()), |v| v[0] = true).unwrap();
        assert_eq!(state.loaded(), Some(&vec![true, true]));
    }

    #[test]
    fn test_modify_only_when_loaded() {
        let mut state = LoadState::Loaded(vec![1, 2]);
        state.modify(|v| v.push(3));
        assert_eq!(state.loaded(), Some(&vec![1, 2, 3]));

        let mut pending: LoadState<Vec<u8>> = LoadState::Loading;
        pending.modify(|v| v.push(1));
        assert!(pending.is_loading());
    }
}
