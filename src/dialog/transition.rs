//! Pure stage transition function
//!
//! One turn of one dialog: current stage plus a classified intent in, the
//! next stage plus a shaped reply out. No I/O, no clock, no randomness;
//! answer material is generated upstream and passed in.

use super::{DialogContent, DialogIntent, DialogScript, DialogStage};
use crate::speech::{Reply, Speech};

/// Result of one dialog turn.
#[derive(Debug, Clone)]
pub struct Turn {
    /// Stage to store back into the session attributes.
    pub stage: DialogStage,
    pub reply: Reply,
}

/// Advance the dialog one turn.
///
/// Policy for out-of-order input (an identity answer while not at stage 1,
/// or a secret answer while not at stage 2): correct conversationally.
/// The reply re-asks the opening question, the stage resets to 1 and the
/// session stays open. A start intent mid-dialog restarts the same way.
pub fn transition(
    stage: DialogStage,
    intent: DialogIntent,
    content: &DialogContent,
    script: &DialogScript,
) -> Turn {
    let setup = content.setup.as_str();

    match (stage, intent) {
        // Help is stage-sensitive but never moves the stage.
        (_, DialogIntent::Help) => {
            let text = match stage {
                DialogStage::Unset => script.help_unset,
                DialogStage::IdentityAsked => script.help_identity,
                DialogStage::SecretAsked => script.help_secret,
            };
            Turn {
                stage,
                reply: Reply::ask(plain(fill(text, setup)), plain(fill(text, setup))),
            }
        }

        (_, DialogIntent::Stop | DialogIntent::Cancel) => Turn {
            stage,
            reply: Reply::tell(plain(script.goodbye.to_string())),
        },

        // Starting always (re)opens the dialog, whatever came before.
        (_, DialogIntent::Start) => Turn {
            stage: DialogStage::IdentityAsked,
            reply: Reply::ask(
                plain(script.opening.to_string()),
                plain(script.opening_reprompt.to_string()),
            ),
        },

        (DialogStage::IdentityAsked, DialogIntent::Identity) => Turn {
            stage: DialogStage::SecretAsked,
            reply: Reply::ask(
                plain(fill(script.identity_reply, setup)),
                plain(fill(script.identity_reprompt, setup)),
            ),
        },

        (DialogStage::SecretAsked, DialogIntent::Secret) => Turn {
            stage,
            reply: Reply::tell(Speech::of(
                script.answer_kind,
                content.speech_answer.clone(),
            ))
            .with_card(fill(script.card_title, setup), content.card_answer.clone()),
        },

        // Out-of-order answer: correct and restart from the opening.
        (_, DialogIntent::Identity | DialogIntent::Secret) => Turn {
            stage: DialogStage::IdentityAsked,
            reply: Reply::ask(
                plain(format!("{} {}", script.ordering_error, script.opening)),
                plain(script.opening_reprompt.to_string()),
            ),
        },
    }
}

fn plain(text: String) -> Speech {
    Speech::Plain(text)
}

fn fill(template: &str, setup: &str) -> String {
    template.replace("{setup}", setup)
}
