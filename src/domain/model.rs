use serde::{Deserialize, Serialize};

/// A single GET target. Immutable for the lifetime of the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub path: String,
}

impl FetchRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Terminal state reported by a transport once the request has completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Which status codes count as a successful fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuccessCriterion {
    /// Status must be exactly 200.
    #[default]
    ExactOk,
    /// Any status in 200..=299.
    AnySuccess,
}

impl SuccessCriterion {
    pub fn accepts(&self, status: u16) -> bool {
        match self {
            SuccessCriterion::ExactOk => status == 200,
            SuccessCriterion::AnySuccess => (200..300).contains(&status),
        }
    }
}
