//! Request dispatch
//!
//! Routes one platform event to one handler, owns the session-attribute
//! lifecycle around the pure transition function, and assembles the reply
//! envelope. Dialog ordering mistakes are conversational branches handled
//! inside the transition; only unauthorized callers, unroutable request
//! kinds and unknown intent names surface as errors.

use crate::dialog::{transition, DialogContent, DialogIntent, DialogStage};
use crate::skills::SkillDefinition;
use crate::speech::build_envelope;
use crate::wire::{
    Attributes, ResponseEnvelope, SkillEvent, INTENT_REQUEST, LAUNCH_REQUEST,
    SESSION_ENDED_REQUEST,
};
use rand::RngCore;
use thiserror::Error;

/// Failures surfaced to the invocation wrapper. One per call, no retries;
/// attribute mutations before a failure are dropped because no envelope is
/// ever returned for the turn.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("unauthorized application id: {0}")]
    UnauthorizedRequest(String),
    #[error("unroutable request type: {0}")]
    UnroutableRequest(String),
    #[error("no handler for intent: {0}")]
    UnknownIntent(String),
}

/// Handle one event end to end. `Ok(None)` means the turn produced no
/// envelope (session-ended notifications).
pub fn handle_event(
    skill: &SkillDefinition,
    expected_app_id: Option<&str>,
    event: SkillEvent,
) -> Result<Option<ResponseEnvelope>, DispatchError> {
    handle_event_with_rng(skill, expected_app_id, event, &mut rand::thread_rng())
}

/// As [`handle_event`], with the randomness source supplied by the caller.
pub fn handle_event_with_rng(
    skill: &SkillDefinition,
    expected_app_id: Option<&str>,
    event: SkillEvent,
    rng: &mut dyn RngCore,
) -> Result<Option<ResponseEnvelope>, DispatchError> {
    let SkillEvent { session, request } = event;

    if let Some(expected) = expected_app_id {
        if session.application.application_id != expected {
            return Err(DispatchError::UnauthorizedRequest(
                session.application.application_id,
            ));
        }
    }

    // The attributes mapping always exists by the time a handler runs.
    let mut attributes = session.attributes.unwrap_or_default();

    if session.new {
        tracing::info!(
            skill = skill.name,
            session_id = %session.session_id,
            request_id = %request.request_id,
            "session started"
        );
    }

    match request.kind.as_str() {
        LAUNCH_REQUEST => {
            tracing::info!(
                skill = skill.name,
                session_id = %session.session_id,
                request_id = %request.request_id,
                "launch"
            );
            Ok(Some(run_intent(
                skill,
                DialogIntent::Start,
                &mut attributes,
                rng,
            )))
        }

        INTENT_REQUEST => {
            let intent = request.intent.as_ref().ok_or_else(|| {
                DispatchError::UnroutableRequest("intent request without an intent".to_string())
            })?;
            let dialog_intent = (skill.classify)(&intent.name)
                .ok_or_else(|| DispatchError::UnknownIntent(intent.name.clone()))?;
            tracing::info!(
                skill = skill.name,
                session_id = %session.session_id,
                request_id = %request.request_id,
                intent = %intent.name,
                "intent"
            );
            Ok(Some(run_intent(skill, dialog_intent, &mut attributes, rng)))
        }

        SESSION_ENDED_REQUEST => {
            tracing::info!(
                skill = skill.name,
                session_id = %session.session_id,
                request_id = %request.request_id,
                reason = ?request.reason,
                "session ended"
            );
            Ok(None)
        }

        other => Err(DispatchError::UnroutableRequest(other.to_string())),
    }
}

/// Run one classified intent: fix up answer material, take the pure
/// transition, persist the new stage and wrap the reply.
fn run_intent(
    skill: &SkillDefinition,
    intent: DialogIntent,
    attributes: &mut Attributes,
    rng: &mut dyn RngCore,
) -> ResponseEnvelope {
    let content = match intent {
        // Starting always draws fresh material, restarts included.
        DialogIntent::Start => {
            let content = (skill.content)(rng);
            content.store(attributes);
            content
        }
        // Answers need material; regenerate if the session lost it.
        DialogIntent::Identity | DialogIntent::Secret => {
            DialogContent::from_attributes(attributes).unwrap_or_else(|| {
                let content = (skill.content)(rng);
                content.store(attributes);
                content
            })
        }
        // Help and farewells read the setup if present, nothing more.
        DialogIntent::Help | DialogIntent::Stop | DialogIntent::Cancel => {
            DialogContent::from_attributes(attributes).unwrap_or_default()
        }
    };

    let stage = DialogStage::from_attributes(attributes);
    let turn = transition(stage, intent, &content, &skill.script);
    turn.stage.store(attributes);

    build_envelope(Some(attributes.clone()), turn.reply)
}
