//! Knock-knock joke skill

use super::SkillDefinition;
use crate::dialog::{classify_builtin, DialogContent, DialogIntent, DialogScript};
use crate::speech::SpeechKind;
use rand::seq::SliceRandom;
use rand::RngCore;

/// Setup / punchline pairs. The punchline is spoken as SSML so the payoff
/// gets a beat of silence before it lands.
const JOKES: &[(&str, &str)] = &[
    ("To", "Correct grammar dictates that you say, to whom"),
    ("Beets", "Beets me"),
    ("Little Old Lady", "I didn't know you could yodel"),
    ("A broken pencil", "Never mind, it's pointless"),
    ("Snow", "Snow use, I forgot my name again"),
    ("Boo", "Don't cry, it's just a joke"),
];

pub fn definition() -> SkillDefinition {
    SkillDefinition {
        name: "jokester",
        script: DialogScript {
            card_title: "Wise Guy",
            opening: "Knock knock!",
            opening_reprompt: "You can ask, who's there?",
            identity_reply: "{setup}!",
            identity_reprompt: "You can ask, {setup} who?",
            ordering_error: "That's not how knock knock jokes work!",
            help_unset: "Knock knock jokes are a call and answer game. \
                To hear one, say, tell me a joke.",
            help_identity: "I just knocked. You can ask, who's there?",
            help_secret: "You can ask, {setup} who?",
            goodbye: "Goodbye!",
            answer_kind: SpeechKind::Ssml,
        },
        classify,
        content,
    }
}

fn classify(name: &str) -> Option<DialogIntent> {
    classify_builtin(name).or(match name {
        "TellMeAJokeIntent" => Some(DialogIntent::Start),
        "WhosThereIntent" => Some(DialogIntent::Identity),
        "SetupNameWhoIntent" => Some(DialogIntent::Secret),
        _ => None,
    })
}

fn content(rng: &mut dyn RngCore) -> DialogContent {
    let &(setup, punchline) = JOKES.choose(rng).unwrap_or(&JOKES[0]);
    DialogContent {
        setup: setup.to_string(),
        speech_answer: format!(
            "<speak>{setup} who? <break time=\"0.4s\"/> {punchline}!</speak>"
        ),
        card_answer: format!("{setup} who? {punchline}!"),
    }
}
