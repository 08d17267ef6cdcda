//! API response types
//!
//! The skill event and envelope themselves live in `wire`; these are the
//! wrapper's own shapes.

use serde::Serialize;

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Response listing the hosted skills
#[derive(Debug, Serialize)]
pub struct SkillListResponse {
    pub skills: Vec<&'static str>,
}
