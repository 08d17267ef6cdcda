//! The closed set of dialog intents
//!
//! Platform intent names are mapped onto this enum per skill; anything a
//! skill's classifier does not recognize is rejected by the dispatcher
//! before it reaches the transition function.

/// The roles an intent can play in the fixed three-step dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogIntent {
    /// Begin (or restart) the dialog. Launch requests take this path too.
    Start,
    /// The user's answer to the opening "who" question.
    Identity,
    /// The user's answer to the follow-up question; delivers the payoff.
    Secret,
    Help,
    Stop,
    Cancel,
}

/// Classification shared by every skill: the platform's built-in intents.
pub fn classify_builtin(name: &str) -> Option<DialogIntent> {
    match name {
        "AMAZON.HelpIntent" => Some(DialogIntent::Help),
        "AMAZON.StopIntent" => Some(DialogIntent::Stop),
        "AMAZON.CancelIntent" => Some(DialogIntent::Cancel),
        _ => None,
    }
}
