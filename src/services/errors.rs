//! Typed errors returned by the media API and the download path
//!
//! The viewer decides what to tell the user from `FetchErrorKind`, never by
//! inspecting error text.

use std::fmt;

/// Broad category of a failed API call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// HTTP 404; the platform answers this for private or missing accounts
    NotFound,
    /// Any other non-success HTTP status
    Http,
    /// Request could not be sent or the connection dropped
    Network,
    /// Response body was not the expected JSON
    Decode,
    /// No response within the configured timeout
    Timeout,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchError {
    pub kind: FetchErrorKind,
    pub status: Option<u16>,
    pub message: String,
}

impl FetchError {
    /// Build an error from a non-success HTTP status
    pub fn from_status(status: u16, status_text: &str) -> Self {
        let kind = if status == 404 {
            FetchErrorKind::NotFound
        } else {
            FetchErrorKind::Http
        };
        Self {
            kind,
            status: Some(status),
            message: status_text.to_string(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Network,
            status: None,
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Decode,
            status: None,
            message: message.into(),
        }
    }

    pub fn timeout(seconds: u32) -> Self {
        Self {
            kind: FetchErrorKind::Timeout,
            status: None,
            message: format!("no response after {}s", seconds),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == FetchErrorKind::NotFound
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.status) {
            (FetchErrorKind::NotFound, _) => write!(f, "Not found (404): {}", self.message),
            (FetchErrorKind::Http, Some(status)) => write!(f, "HTTP {}: {}", status, self.message),
            (FetchErrorKind::Http, None) => write!(f, "HTTP error: {}", self.message),
            (FetchErrorKind::Network, _) => write!(f, "Network error: {}", self.message),
            (FetchErrorKind::Decode, _) => write!(f, "Invalid response: {}", self.message),
            (FetchErrorKind::Timeout, _) => write!(f, "Request timed out: {}", self.message),
        }
    }
}

impl std::error::Error for FetchError {}

/// Failure while saving a media file in the browser
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadError {
    NoWindow,
    Http { status: u16, status_text: String },
    Js(String),
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "No window object"),
            Self::Http { status, status_text } => {
                write!(f, "Failed to fetch media: {} {}", status, status_text)
            }
            Self::Js(msg) => write!(f, "Browser error: {}", msg),
        }
    }
}

impl std::error::Error for DownloadError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(FetchError::from_status(404, "Not Found").is_not_found());

        let err = FetchError::from_status(500, "Internal Server Error");
        assert_eq!(err.kind, FetchErrorKind::Http);
        assert_eq!(err.status, Some(500));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found_is_typed_not_textual() {
        // A message mentioning 404 does not make a network error a NotFound
        let err = FetchError::network("proxy said status: 404");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            FetchError::from_status(503, "Service Unavailable").to_string(),
            "HTTP 503: Service Unavailable"
        );
        assert_eq!(FetchError::timeout(30).to_string(), "Request timed out: no response after 30s");
        assert_eq!(
            DownloadError::Http { status: 403, status_text: "Forbidden".into() }.to_string(),
            "Failed to fetch media: 403 Forbidden"
        );
    }
}
