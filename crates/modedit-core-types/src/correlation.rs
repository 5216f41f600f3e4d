//! Correlation types for request tracking
//!
//! Every API call carries a RequestId. It is taken from the caller's
//! `x-request-id` header when one is supplied, otherwise generated.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Header used to propagate a caller-supplied request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest caller-supplied id accepted verbatim
const MAX_EXTERNAL_LEN: usize = 128;

/// Unique identifier for a single request or operation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new random RequestId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }

    /// Accept an externally supplied id, or mint a fresh one if it is
    /// empty, too long, or contains non-printable characters.
    pub fn from_external(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v)
                if !v.is_empty()
                    && v.len() <= MAX_EXTERNAL_LEN
                    && v.chars().all(|c| c.is_ascii_graphic()) =>
            {
                Self(v.to_string())
            }
            _ => Self::new(),
        }
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
