//! Errors of API calls and the notices they surface

use crate::Navigation;

/// Shown when a transport failure leaves no response to explain it
pub const SERVER_UNREACHABLE: &str = "Server error. Please try again later.";

/// Shown after a 401
pub const SESSION_EXPIRED: &str = "Session expired. Please log in again.";

pub const PASSWORD_MISMATCH: &str = "Passwords do not match";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Signup confirmation differs; no request was sent
    #[error("passwords do not match")]
    PasswordMismatch,

    /// The API answered 401; the stored token has been cleared
    #[error("unauthorized, session cleared")]
    Unauthorized,

    /// Any other non-2xx answer
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Transport(anyhow::Error),

    #[error(transparent)]
    Storage(anyhow::Error),
}

impl ApiError {
    /// One user-visible line describing the failure
    ///
    /// `fallback` is the screen's own wording, used when neither the server
    /// nor the error kind gives a better message.
    pub fn notice(&self, fallback: &str) -> String {
        match self {
            ApiError::PasswordMismatch => PASSWORD_MISMATCH.to_string(),
            ApiError::Unauthorized => SESSION_EXPIRED.to_string(),
            ApiError::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            ApiError::Transport(_) => SERVER_UNREACHABLE.to_string(),
            ApiError::Rejected { .. } | ApiError::Decode(_) | ApiError::Storage(_) => {
                fallback.to_string()
            }
        }
    }

    /// Where to send the user after this failure, if anywhere
    pub fn redirect(&self) -> Option<Navigation> {
        match self {
            ApiError::Unauthorized => Some(Navigation::Login),
            _ => None,
        }
    }
}
