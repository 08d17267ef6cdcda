//! Credit score lookup skill
//!
//! The score itself is canned. The "last updated" date is drawn fresh for
//! each dialog from the past thirty days rather than once at process start,
//! so long-lived instances never serve a stale date.

use super::SkillDefinition;
use crate::dialog::{classify_builtin, DialogContent, DialogIntent, DialogScript};
use crate::speech::SpeechKind;
use chrono::{DateTime, Datelike, Duration, Utc};
use rand::{Rng, RngCore};

pub(crate) const SCORE: u32 = 998;
pub(crate) const CUSTOMER: &str = "Pallay";

const THIRTY_DAYS_MS: i64 = 30 * 24 * 60 * 60 * 1000;

pub fn definition() -> SkillDefinition {
    SkillDefinition {
        name: "score",
        script: DialogScript {
            card_title: "Credit Score",
            opening: "Welcome to your credit score service. \
                Before I can share your score, who am I speaking with?",
            opening_reprompt: "Please tell me who you are.",
            identity_reply: "Thanks, {setup}. Now, what is your memorable word?",
            identity_reprompt: "{setup}, please tell me your memorable word.",
            ordering_error: "Sorry, let's take that from the top.",
            help_unset: "Ask for your score to begin. I will ask who you are \
                and for your memorable word before reading it out.",
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
        "WhatsMyScoreIntent" => Some(DialogIntent::Start),
        "WhoAmIIntent" => Some(DialogIntent::Identity),
        "MemorableWordIntent" => Some(DialogIntent::Secret),
        "EndSessionIntent" => Some(DialogIntent::Stop),
        _ => None,
    })
}

fn content(rng: &mut dyn RngCore) -> DialogContent {
    let updated = last_updated(rng);
    DialogContent {
        setup: CUSTOMER.to_string(),
        speech_answer: format!(
            "Your score is {SCORE} and was last updated on the {}.",
            spoken_date(updated)
        ),
        card_answer: format!("{CUSTOMER}, your score is {SCORE}!"),
    }
}

/// A uniformly random instant within the past thirty days.
pub(crate) fn last_updated(rng: &mut dyn RngCore) -> DateTime<Utc> {
    Utc::now() - Duration::milliseconds(rng.gen_range(0..THIRTY_DAYS_MS))
}

pub(crate) fn next_update(updated: DateTime<Utc>) -> DateTime<Utc> {
    updated + Duration::milliseconds(THIRTY_DAYS_MS)
}

/// Render a date the way it is spoken: "3rd of June".
pub(crate) fn spoken_date(date: DateTime<Utc>) -> String {
    let day = date.day();
    format!("{day}{} of {}", ordinal(day), date.format("%B"))
}

fn ordinal(day: u32) -> &'static str {
    if (4..=20).contains(&day) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}
