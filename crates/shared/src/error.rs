use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message used when a failure carries neither a message nor a status.
pub const FALLBACK_ERROR_MESSAGE: &str = "Server error";

/// The single failure kind of a post fetch.
///
/// Transport failures, non-success statuses and unparseable bodies all
/// collapse into one human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct FetchError {
    message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

/// Raw details of a failed fetch before they are reduced to a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureDetails {
    pub message: Option<String>,
    pub status: Option<u16>,
    pub status_text: Option<String>,
}

impl FailureDetails {
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn from_status(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            status_text: Some(status_text.into()),
            ..Self::default()
        }
    }

    /// Picks the underlying message first, then `"{status} - {statusText}"`,
    /// then [`FALLBACK_ERROR_MESSAGE`]. Empty messages and a zero status
    /// count as absent.
    pub fn describe(&self) -> String {
        if let Some(message) = self.message.as_deref().filter(|m| !m.is_empty()) {
            return message.to_string();
        }
        match self.status.filter(|status| *status != 0) {
            Some(status) => format!(
                "{status} - {}",
                self.status_text.as_deref().unwrap_or_default()
            ),
            None => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<FailureDetails> for FetchError {
    fn from(value: FailureDetails) -> Self {
        Self::new(value.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_failure_formats_code_and_reason() {
        let err = FetchError::from(FailureDetails::from_status(404, "Not Found"));
        assert_eq!(err.message(), "404 - Not Found");
    }

    #[test]
    fn transport_message_wins_over_status() {
        let details = FailureDetails {
            message: Some("Network down".into()),
            status: Some(500),
            status_text: Some("Internal Server Error".into()),
        };
        assert_eq!(details.describe(), "Network down");
    }

    #[test]
    fn empty_details_fall_back_to_server_error() {
        assert_eq!(FailureDetails::default().describe(), "Server error");
        let blank = FailureDetails {
            message: Some(String::new()),
            status: Some(0),
            status_text: None,
        };
        assert_eq!(blank.describe(), "Server error");
    }

    #[test]
    fn status_without_reason_keeps_separator() {
        let details = FailureDetails {
            status: Some(599),
            ..FailureDetails::default()
        };
        assert_eq!(details.describe(), "599 - ");
    }

    #[test]
    fn displays_as_plain_message() {
        let err = FetchError::new("Network down");
        assert_eq!(err.to_string(), "Network down");
    }
}
