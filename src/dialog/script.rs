//! Per-skill scripted lines and per-dialog answer material

use crate::speech::SpeechKind;
use crate::wire::Attributes;
use serde_json::json;

/// Attribute keys for the answer material carried across turns.
pub const SETUP_KEY: &str = "setup";
pub const SPEECH_ANSWER_KEY: &str = "speechAnswer";
pub const CARD_ANSWER_KEY: &str = "cardAnswer";

/// The canned lines one skill speaks, fixed at registration time.
///
/// Fields marked as templates may contain the literal `{setup}`, which the
/// transition function substitutes with the dialog's stored setup text.
#[derive(Debug, Clone)]
pub struct DialogScript {
    /// Title for the card attached to the final answer. Template.
    pub card_title: &'static str,
    /// Spoken when the dialog starts or restarts.
    pub opening: &'static str,
    pub opening_reprompt: &'static str,
    /// Spoken when the identity question is answered in order. Template.
    pub identity_reply: &'static str,
    /// Template; must mention `{setup}` so the reprompt carries it.
    pub identity_reprompt: &'static str,
    /// Prefix spoken before re-asking the opening after an out-of-order
    /// answer.
    pub ordering_error: &'static str,
    pub help_unset: &'static str,
    pub help_identity: &'static str,
    /// Template.
    pub help_secret: &'static str,
    pub goodbye: &'static str,
    /// Wire tagging for the final answer speech.
    pub answer_kind: SpeechKind,
}

/// Answer material generated once per dialog and round-tripped through the
/// session attributes: the setup echoed mid-dialog and the final payoff.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogContent {
    pub setup: String,
    pub speech_answer: String,
    pub card_answer: String,
}

impl DialogContent {
    /// Decode stored answer material; `None` unless all three fields are
    /// present, so a half-written session regenerates rather than limping.
    pub fn from_attributes(attributes: &Attributes) -> Option<Self> {
        let field = |key: &str| {
            attributes
                .get(key)
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        };
        Some(Self {
            setup: field(SETUP_KEY)?,
            speech_answer: field(SPEECH_ANSWER_KEY)?,
            card_answer: field(CARD_ANSWER_KEY)?,
        })
    }

    pub fn store(&self, attributes: &mut Attributes) {
        attributes.insert(SETUP_KEY.to_string(), json!(self.setup));
        attributes.insert(SPEECH_ANSWER_KEY.to_string(), json!(self.speech_answer));
        attributes.insert(CARD_ANSWER_KEY.to_string(), json!(self.card_answer));
    }
}
