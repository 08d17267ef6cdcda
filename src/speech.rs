//! Reply shaping
//!
//! Handlers produce a [`Reply`]; the envelope is assembled from it at the
//! end of dispatch. A card makes it into the envelope only when both the
//! title and the body are non-empty.

use crate::wire::{
    Attributes, Card, OutputSpeech, Reprompt, ResponseEnvelope, SpeechletResponse,
    ENVELOPE_VERSION,
};

/// How answer speech should be tagged on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechKind {
    Plain,
    Ssml,
}

/// Spoken content with its wire tagging. SSML is carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Speech {
    Plain(String),
    Ssml(String),
}

impl Speech {
    pub fn of(kind: SpeechKind, text: impl Into<String>) -> Self {
        match kind {
            SpeechKind::Plain => Speech::Plain(text.into()),
            SpeechKind::Ssml => Speech::Ssml(text.into()),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Speech::Plain(text) | Speech::Ssml(text) => text,
        }
    }

    fn into_output(self) -> OutputSpeech {
        match self {
            Speech::Plain(text) => OutputSpeech::Plain { text },
            Speech::Ssml(ssml) => OutputSpeech::Ssml { ssml },
        }
    }
}

/// One turn's worth of output, before envelope assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub speech: Speech,
    pub reprompt: Option<Speech>,
    pub card: Option<(String, String)>,
    pub end_session: bool,
}

impl Reply {
    /// A mid-dialog reply: the session stays open.
    pub fn ask(speech: Speech, reprompt: Speech) -> Self {
        Self {
            speech,
            reprompt: Some(reprompt),
            card: None,
            end_session: false,
        }
    }

    /// A terminal reply: the session ends with this turn.
    pub fn tell(speech: Speech) -> Self {
        Self {
            speech,
            reprompt: None,
            card: None,
            end_session: true,
        }
    }

    pub fn with_card(mut self, title: impl Into<String>, content: impl Into<String>) -> Self {
        self.card = Some((title.into(), content.into()));
        self
    }

    fn into_speechlet(self) -> SpeechletResponse {
        let card = self
            .card
            .filter(|(title, content)| !title.is_empty() && !content.is_empty())
            .map(|(title, content)| Card::simple(title, content));

        SpeechletResponse {
            output_speech: self.speech.into_output(),
            reprompt: self.reprompt.map(|speech| Reprompt {
                output_speech: speech.into_output(),
            }),
            card,
            should_end_session: self.end_session,
        }
    }
}

/// Wrap a reply in the platform envelope, carrying the session attributes
/// forward when there are any.
pub fn build_envelope(attributes: Option<Attributes>, reply: Reply) -> ResponseEnvelope {
    ResponseEnvelope {
        version: ENVELOPE_VERSION.to_string(),
        session_attributes: attributes,
        response: reply.into_speechlet(),
    }
}
