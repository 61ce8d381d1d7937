//! Request failure taxonomy.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Shown when a failure carries no text of its own.
pub const FALLBACK_MESSAGE: &str = "API request failed";

/// A failed backend call.
///
/// The three variants exist for logging; the UI only ever shows
/// [`ApiError::message`], which is the raw response body for status errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{}", or_fallback(.0))]
    Transport(String),
    /// Non-2xx response; `body` is the response text, possibly empty.
    #[error("{}", or_fallback(.body))]
    Status { status: u16, body: String },
    /// 2xx response that did not parse as the expected JSON.
    #[error("{}", or_fallback(.0))]
    Decode(String),
    /// Request body could not be serialized.
    #[error("{}", or_fallback(.0))]
    Encode(String),
}

impl ApiError {
    /// User-facing text: the backend's body verbatim, or a fallback.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn or_fallback(text: &str) -> &str {
    if text.trim().is_empty() { FALLBACK_MESSAGE } else { text }
}
