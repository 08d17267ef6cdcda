//! Skill variants
//!
//! Every skill is an instance of one capability record: its scripted lines,
//! its platform-intent classification and its answer-material generator.
//! There is no per-skill dispatch code; the shared dispatcher drives all of
//! them through [`SkillDefinition`].

mod jokester;
mod score;
mod score_next;

use crate::dialog::{DialogContent, DialogIntent, DialogScript};
use rand::RngCore;

/// One skill variant, fully described by data and two plain functions.
pub struct SkillDefinition {
    /// Registry key; also the path segment the HTTP surface routes on.
    pub name: &'static str,
    pub script: DialogScript,
    /// Maps a platform intent name onto the closed dialog-intent set.
    /// `None` means the name is unknown to this skill.
    pub classify: fn(&str) -> Option<DialogIntent>,
    /// Generates the answer material for one dialog. Called at dialog
    /// start; any randomness is drawn from the supplied generator.
    pub content: fn(&mut dyn RngCore) -> DialogContent,
}

/// The fixed set of skills this service hosts.
pub struct SkillRegistry {
    skills: Vec<SkillDefinition>,
}

impl SkillRegistry {
    pub fn builtin() -> Self {
        Self {
            skills: vec![
                jokester::definition(),
                score::definition(),
                score_next::definition(),
            ],
        }
    }

    pub fn get(&self, name: &str) -> Option<&SkillDefinition> {
        self.skills.iter().find(|skill| skill.name == name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.skills.iter().map(|skill| skill.name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_registry_hosts_all_three_variants() {
        let registry = SkillRegistry::builtin();
        assert_eq!(registry.names(), vec!["jokester", "score", "score-next"]);
        assert!(registry.get("jokester").is_some());
        assert!(registry.get("no-such-skill").is_none());
    }

    #[test]
    fn test_every_skill_classifies_builtins_and_a_start() {
        let registry = SkillRegistry::builtin();
        for name in registry.names() {
            let skill = registry.get(name).unwrap();
            assert_eq!(
                (skill.classify)("AMAZON.HelpIntent"),
                Some(DialogIntent::Help),
                "{name} must accept help"
            );
            assert_eq!(
                (skill.classify)("AMAZON.StopIntent"),
                Some(DialogIntent::Stop),
                "{name} must accept stop"
            );
            assert_eq!((skill.classify)("NoSuchIntent"), None);
        }
    }

    #[test]
    fn test_every_skill_generates_complete_content() {
        let registry = SkillRegistry::builtin();
        let mut rng = StdRng::seed_from_u64(42);
        for name in registry.names() {
            let skill = registry.get(name).unwrap();
            let content = (skill.content)(&mut rng);
            assert!(!content.setup.is_empty(), "{name} setup");
            assert!(!content.speech_answer.is_empty(), "{name} speech answer");
            assert!(!content.card_answer.is_empty(), "{name} card answer");
        }
    }
}
