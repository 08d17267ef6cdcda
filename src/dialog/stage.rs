//! Dialog stage and its session-attribute encoding

use crate::wire::Attributes;
use serde_json::json;

/// Attribute key holding the stage counter between turns.
pub const STAGE_KEY: &str = "stage";

/// How far the fixed three-step dialog has progressed.
///
/// Encoded as an integer in the session attributes: 0 (or absent) before the
/// dialog starts, 1 once the opening question has been asked, 2 once the
/// follow-up question has been asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogStage {
    Unset,
    IdentityAsked,
    SecretAsked,
}

impl DialogStage {
    /// Decode the stage from session attributes. Absent, zero and malformed
    /// values all read as [`DialogStage::Unset`].
    pub fn from_attributes(attributes: &Attributes) -> Self {
        match attributes.get(STAGE_KEY).and_then(serde_json::Value::as_i64) {
            Some(1) => DialogStage::IdentityAsked,
            Some(2) => DialogStage::SecretAsked,
            _ => DialogStage::Unset,
        }
    }

    pub fn as_int(self) -> i64 {
        match self {
            DialogStage::Unset => 0,
            DialogStage::IdentityAsked => 1,
            DialogStage::SecretAsked => 2,
        }
    }

    pub fn store(self, attributes: &mut Attributes) {
        attributes.insert(STAGE_KEY.to_string(), json!(self.as_int()));
    }
}
