//! Property-based tests for the dialog stage machine
//!
//! These verify the invariants that hold for every stage/intent/content
//! combination, not just the scripted happy path.

use super::*;
use crate::speech::SpeechKind;
use proptest::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

fn test_script() -> DialogScript {
    DialogScript {
        card_title: "Prop Skill",
        opening: "Knock knock!",
        opening_reprompt: "You can ask, who's there?",
        identity_reply: "{setup}!",
        identity_reprompt: "You can ask, {setup} who?",
        ordering_error: "That's not how this works.",
        help_unset: "Say start to begin.",
        help_identity: "Ask who's there.",
        help_secret: "Ask, {setup} who?",
        goodbye: "Goodbye!",
        answer_kind: SpeechKind::Plain,
    }
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_stage() -> impl Strategy<Value = DialogStage> {
    prop_oneof![
        Just(DialogStage::Unset),
        Just(DialogStage::IdentityAsked),
        Just(DialogStage::SecretAsked),
    ]
}

fn arb_intent() -> impl Strategy<Value = DialogIntent> {
    prop_oneof![
        Just(DialogIntent::Start),
        Just(DialogIntent::Identity),
        Just(DialogIntent::Secret),
        Just(DialogIntent::Help),
        Just(DialogIntent::Stop),
        Just(DialogIntent::Cancel),
    ]
}

fn arb_content() -> impl Strategy<Value = DialogContent> {
    ("[A-Za-z][A-Za-z ]{0,19}", "[A-Za-z !]{1,40}", "[A-Za-z ?!]{1,40}").prop_map(
        |(setup, speech_answer, card_answer)| DialogContent {
            setup,
            speech_answer,
            card_answer,
        },
    )
}

// ============================================================================
// Invariants
// ============================================================================

proptest! {
    /// Help never moves the stage and never ends the session.
    #[test]
    fn prop_help_is_stage_pure(stage in arb_stage(), content in arb_content()) {
        let turn = transition(stage, DialogIntent::Help, &content, &test_script());
        prop_assert_eq!(turn.stage, stage);
        prop_assert!(!turn.reply.end_session);
    }

    /// Help text depends only on the stage value, not on prior turns.
    #[test]
    fn prop_help_text_is_function_of_stage(stage in arb_stage(), content in arb_content()) {
        let first = transition(stage, DialogIntent::Help, &content, &test_script());
        let second = transition(stage, DialogIntent::Help, &content, &test_script());
        prop_assert_eq!(first.reply, second.reply);
    }

    /// Stop and Cancel are terminal from every stage.
    #[test]
    fn prop_stop_cancel_always_end(stage in arb_stage(), content in arb_content()) {
        for intent in [DialogIntent::Stop, DialogIntent::Cancel] {
            let turn = transition(stage, intent, &content, &test_script());
            prop_assert!(turn.reply.end_session);
        }
    }

    /// Starting always lands on stage 1 with the session open.
    #[test]
    fn prop_start_always_restarts(stage in arb_stage(), content in arb_content()) {
        let turn = transition(stage, DialogIntent::Start, &content, &test_script());
        prop_assert_eq!(turn.stage, DialogStage::IdentityAsked);
        prop_assert!(!turn.reply.end_session);
    }

    /// An in-order identity answer advances to stage 2 and carries the
    /// stored setup in the reprompt.
    #[test]
    fn prop_identity_in_order_advances(content in arb_content()) {
        let turn = transition(
            DialogStage::IdentityAsked,
            DialogIntent::Identity,
            &content,
            &test_script(),
        );
        prop_assert_eq!(turn.stage, DialogStage::SecretAsked);
        prop_assert!(!turn.reply.end_session);
        let reprompt = turn.reply.reprompt.expect("mid-dialog reply has a reprompt");
        prop_assert!(reprompt.text().contains(&content.setup));
    }

    /// An in-order secret answer is terminal and delivers the stored
    /// answer verbatim, with a card when material is non-empty.
    #[test]
    fn prop_secret_in_order_is_terminal(content in arb_content()) {
        let turn = transition(
            DialogStage::SecretAsked,
            DialogIntent::Secret,
            &content,
            &test_script(),
        );
        prop_assert!(turn.reply.end_session);
        prop_assert_eq!(turn.reply.speech.text(), content.speech_answer.as_str());
        prop_assert_eq!(
            turn.reply.card,
            Some(("Prop Skill".to_string(), content.card_answer))
        );
    }

    /// Out-of-order answers never end the session and always reset to
    /// stage 1.
    #[test]
    fn prop_out_of_order_resets_without_ending(stage in arb_stage(), content in arb_content()) {
        if stage != DialogStage::IdentityAsked {
            let turn = transition(stage, DialogIntent::Identity, &content, &test_script());
            prop_assert_eq!(turn.stage, DialogStage::IdentityAsked);
            prop_assert!(!turn.reply.end_session);
        }
        if stage != DialogStage::SecretAsked {
            let turn = transition(stage, DialogIntent::Secret, &content, &test_script());
            prop_assert_eq!(turn.stage, DialogStage::IdentityAsked);
            prop_assert!(!turn.reply.end_session);
        }
    }

    /// The only terminal turns are Stop, Cancel and an in-order secret
    /// answer.
    #[test]
    fn prop_session_ends_only_on_terminal_turns(
        stage in arb_stage(),
        intent in arb_intent(),
        content in arb_content(),
    ) {
        let turn = transition(stage, intent, &content, &test_script());
        let terminal = matches!(intent, DialogIntent::Stop | DialogIntent::Cancel)
            || (stage == DialogStage::SecretAsked && intent == DialogIntent::Secret);
        prop_assert_eq!(turn.reply.end_session, terminal);
    }

    /// Every turn leaves the stage in the representable 0..=2 range.
    #[test]
    fn prop_stage_stays_representable(
        stage in arb_stage(),
        intent in arb_intent(),
        content in arb_content(),
    ) {
        let turn = transition(stage, intent, &content, &test_script());
        prop_assert!((0..=2).contains(&turn.stage.as_int()));
    }
}
