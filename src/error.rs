//! Error Types
//!
//! Remote failures, local validation failures, and the union a form
//! submission can end in.

use thiserror::Error;

/// Shown when the server gives no usable message
pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure talking to the REST backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Http { status: u16, message: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for the user: the server's message when it sent one
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http { message: Some(message), .. } if !message.trim().is_empty() => {
                message.clone()
            }
            _ => GENERIC_ERROR.to_string(),
        }
    }

    /// The stored token was rejected
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// A form failed its local checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingRequired,
    #[error("Goal {} cannot be empty.", .index + 1)]
    EmptyGoal { index: usize },
    #[error("Please enter a valid date.")]
    InvalidDate,
    #[error("Please enter valid start and end times.")]
    InvalidTime,
    #[error("End time must be after start time.")]
    EndBeforeStart,
    #[error("Link must start with http:// or https://.")]
    InvalidLink,
}

/// Why a form submission did not go through
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Remote(#[from] ApiError),
}

impl SubmitError {
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Invalid(err) => err.to_string(),
            SubmitError::Remote(err) => err.user_message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_preferred() {
        let err = ApiError::Http { status: 409, message: Some("Caregiver is already booked".into()) };
        assert_eq!(err.user_message(), "Caregiver is already booked");
    }

    #[test]
    fn test_generic_fallback() {
        assert_eq!(ApiError::Network("offline".into()).user_message(), GENERIC_ERROR);
        assert_eq!(ApiError::Http { status: 500, message: None }.user_message(), GENERIC_ERROR);
        assert_eq!(ApiError::Http { status: 500, message: Some("  ".into()) }.user_message(), GENERIC_ERROR);
        assert_eq!(ApiError::Decode("eof".into()).user_message(), GENERIC_ERROR);
    }

    #[test]
    fn test_submit_error_messages() {
        let invalid = SubmitError::from(ValidationError::MissingRequired);
        assert_eq!(invalid.user_message(), "Please fill in all required fields.");

        let goal = SubmitError::from(ValidationError::EmptyGoal { index: 2 });
        assert_eq!(goal.user_message(), "Goal 3 cannot be empty.");

        let remote = SubmitError::from(ApiError::Http { status: 400, message: Some("Bad date".into()) });
        assert_eq!(remote.user_message(), "Bad date");
    }

    #[test]
    fn test_unauthorized() {
        assert!(ApiError::Http { status: 401, message: None }.is_unauthorized());
        assert!(!ApiError::Http { status: 403, message: None }.is_unauthorized());
    }
}
