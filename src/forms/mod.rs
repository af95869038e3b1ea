//! Forms
//!
//! Editable drafts, local validation and the submit lifecycle. Components
//! hold a draft in a signal; everything here is plain data so it can be
//! exercised without a browser.

mod visit;
mod care_plan;
mod resource;

pub use visit::*;
pub use care_plan::*;
pub use resource::*;

use crate::error::SubmitError;
use crate::routes::Route;

/// Submit control lifecycle of one form
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl SubmitState {
    /// Inputs and the submit button are disabled
    pub fn is_locked(&self) -> bool {
        matches!(self, SubmitState::Submitting | SubmitState::Succeeded(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            SubmitState::Succeeded(message) | SubmitState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SubmitState::Failed(_))
    }
}

/// Turn a finished submission into the next form state and, on success,
/// the page to go to once the success message has been shown.
pub fn settle<T>(
    result: Result<T, SubmitError>,
    success_message: &str,
    next: Route,
) -> (SubmitState, Option<Route>) {
    match result {
        Ok(_) => (SubmitState::Succeeded(success_message.to_string()), Some(next)),
        Err(err) => {
            if let SubmitError::Remote(remote) = &err {
                log::error!("submit failed: {}", remote);
            }
            (SubmitState::Failed(err.user_message()), None)
        }
    }
}

/// Trimmed optional text; blank becomes `None`
pub(crate) fn optional_text(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiError, ValidationError};

    #[test]
    fn test_success_locks_and_redirects() {
        let (state, next) = settle(Ok(()), "Visit created", Route::Visits);
        assert_eq!(state, SubmitState::Succeeded("Visit created".into()));
        assert!(state.is_locked());
        assert_eq!(next, Some(Route::Visits));
    }

    #[test]
    fn test_failure_stays_editable() {
        let remote = SubmitError::Remote(ApiError::Http { status: 400, message: Some("Slot taken".into()) });
        let (state, next) = settle::<()>(Err(remote), "ok", Route::Visits);
        assert_eq!(state.message(), Some("Slot taken"));
        assert!(state.is_error());
        assert!(!state.is_locked());
        assert_eq!(next, None);

        let (state, _) = settle::<()>(Err(ValidationError::MissingRequired.into()), "ok", Route::Visits);
        assert_eq!(state.message(), Some("Please fill in all required fields."));
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text("  "), None);
        assert_eq!(optional_text(" hi "), Some("hi".into()));
    }
}
