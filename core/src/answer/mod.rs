pub mod static_answers;

use crate::keywords::{normalize, Predicate};
use log::debug;
use serde::Serialize;

pub use static_answers::{ANSWER_RULES, DEFAULT_RESPONSE, FALLBACK_RULE_ID};

/// One canned answer and the keywords that trigger it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnswerRule {
    pub id: &'static str,
    pub predicate: Predicate,
    pub response: &'static str,
}

/// Find the first rule whose predicate matches the question.
///
/// The last entry of [`ANSWER_RULES`] always matches, so this never fails.
pub fn resolve_rule(question: &str) -> &'static AnswerRule {
    let text = normalize(question);
    let rule = ANSWER_RULES
        .iter()
        .find(|rule| rule.predicate.matches(&text))
        .unwrap_or(&static_answers::FALLBACK);
    debug!("[resolve] rule={} len={}", rule.id, question.len());
    rule
}

/// Answer a free-text safety question with a canned response.
pub fn resolve(question: &str) -> &'static str {
    resolve_rule(question).response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ppe_at_height() {
        let rule = resolve_rule("What PPE is required for working at height?");
        assert_eq!(rule.id, "ppe-at-height");
        assert!(rule.response.contains("harness"));
    }

    #[test]
    fn test_extinguisher_inspection() {
        let answer = resolve("How often should fire extinguishers be inspected?");
        assert_eq!(answer, resolve_rule("extinguisher inspection").response);
        assert!(answer.contains("monthly"));
        assert_ne!(answer, DEFAULT_RESPONSE);
    }

    #[test]
    fn test_empty_question_gets_default() {
        assert_eq!(resolve(""), DEFAULT_RESPONSE);
        assert_eq!(resolve_rule("").id, FALLBACK_RULE_ID);
    }

    #[test]
    fn test_unrelated_question_gets_default() {
        assert_eq!(resolve("What's for lunch today?"), DEFAULT_RESPONSE);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            resolve("HOW SHOULD A LADDER BE POSITIONED"),
            resolve("how should a ladder be positioned")
        );
        assert_eq!(resolve_rule("LADDER").id, "ladder");
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // Matches both the PPE-at-height rule and the ladder rule.
        let question = "what ppe do I need at height on a ladder";
        assert_eq!(resolve_rule(question).id, "ppe-at-height");
        assert_eq!(resolve_rule("is my ladder safe").id, "ladder");
    }

    #[test]
    fn test_fall_protection_types_before_requirements() {
        assert_eq!(
            resolve_rule("What are the main types of fall protection systems?").id,
            "fall-protection-types"
        );
        assert_eq!(
            resolve_rule("When should fall protection be used?").id,
            "fall-protection-required"
        );
    }

    #[test]
    fn test_sample_questions_have_specific_answers() {
        for question in crate::knowledge::SAMPLE_QUESTIONS {
            assert_ne!(
                resolve(question),
                DEFAULT_RESPONSE,
                "sample question fell through: {question}"
            );
        }
    }
}
