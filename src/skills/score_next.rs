//! Next-score-update skill
//!
//! Same dialog as the score skill, but the payoff is the date of the next
//! monthly update: thirty days after the (freshly drawn) last-updated date.

use super::score::{last_updated, next_update, spoken_date, CUSTOMER, SCORE};
use super::SkillDefinition;
use crate::dialog::{classify_builtin, DialogContent, DialogIntent, DialogScript};
use crate::speech::SpeechKind;
use rand::RngCore;

pub fn definition() -> SkillDefinition {
    SkillDefinition {
        name: "score-next",
        script: DialogScript {
            card_title: "Next Score Update",
            opening: "I can tell you when your score is next updated. \
                First, who am I speaking with?",
            opening_reprompt: "Please tell me who you are.",
            identity_reply: "Thanks, {setup}. Now, what is your memorable word?",
            identity_reprompt: "{setup}, please tell me your memorable word.",
            ordering_error: "Sorry, let's take that from the top.",
            help_unset: "Ask when your score will next be updated to begin. \
                I will ask who you are and for your memorable word first.",
            help_identity: "I need to know who you are first. Who am I speaking with?",
            help_secret: "Almost there, {setup}. What is your memorable word?",
            goodbye: "You're welcome.",
            answer_kind: SpeechKind::Plain,
        },
        classify,
        content,
    }
}

fn classify(name: &str) -> Option<DialogIntent> {
    classify_builtin(name).or(match name {
        "NextScoreUpdateIntent" => Some(DialogIntent::Start),
        "WhoAmIIntent" => Some(DialogIntent::Identity),
        "MemorableWordIntent" => Some(DialogIntent::Secret),
        "EndSessionIntent" => Some(DialogIntent::Stop),
        _ => None,
    })
}

fn content(rng: &mut dyn RngCore) -> DialogContent {
    let next = next_update(last_updated(rng));
    DialogContent {
        setup: CUSTOMER.to_string(),
        speech_answer: format!(
            "Your score will be next updated on the {}.",
            spoken_date(next)
        ),
        card_answer: format!(
            "{CUSTOMER}, your score of {SCORE} is next updated on the {}.",
            spoken_date(next)
        ),
    }
}
