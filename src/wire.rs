//! Voice-platform wire types
//!
//! The inbound event and outbound envelope shapes are fixed by the platform;
//! every field name is camelCase on the wire. The envelope omits
//! `sessionAttributes`, `reprompt` and `card` entirely when absent rather
//! than serializing nulls.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Session attributes: the only state carried between turns. The caller
/// round-trips the previous envelope's `sessionAttributes` verbatim.
pub type Attributes = Map<String, Value>;

pub const ENVELOPE_VERSION: &str = "1.0";

// ============================================================
// Inbound event
// ============================================================

/// A single platform event: one turn of one session.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillEvent {
    pub session: Session,
    pub request: Request,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// True on the first turn of a session.
    #[serde(default)]
    pub new: bool,
    pub session_id: String,
    pub application: Application,
    #[serde(default)]
    pub attributes: Option<Attributes>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

/// The request half of an event. The platform tags the kind in `type`;
/// unrecognized kinds are kept as-is so dispatch can report them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(rename = "type")]
    pub kind: String,
    pub request_id: String,
    #[serde(default)]
    pub intent: Option<Intent>,
    #[serde(default)]
    pub reason: Option<String>,
}

pub const LAUNCH_REQUEST: &str = "LaunchRequest";
pub const INTENT_REQUEST: &str = "IntentRequest";
pub const SESSION_ENDED_REQUEST: &str = "SessionEndedRequest";

/// A named user request with optional slot values. No current skill reads
/// slots, but they arrive on the wire and are preserved.
#[derive(Debug, Clone, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Slot {
    #[allow(dead_code)] // the platform echoes the slot name back
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

// ============================================================
// Outbound envelope
// ============================================================

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_attributes: Option<Attributes>,
    pub response: SpeechletResponse,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpeechletResponse {
    pub output_speech: OutputSpeech,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    pub should_end_session: bool,
}

/// Spoken output, either plain text or pre-marked SSML. The markup is never
/// validated here; it is passed through to the platform untouched.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    #[serde(rename = "PlainText")]
    Plain { text: String },
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub content: String,
}

impl Card {
    pub fn simple(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind: "Simple".to_string(),
            title: title.into(),
            content: content.into(),
        }
    }
}
