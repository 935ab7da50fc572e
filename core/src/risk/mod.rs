//! HIRARC-style risk classification of free-text workplace scenarios.
//!
//! Classification is two-level: the first hazard rule whose predicate
//! matches picks the category, then that rule's likelihood and severity
//! ladders refine the ratings from secondary keywords. The score is
//! `likelihood * severity`, bucketed into a [`RiskLevel`].

pub mod scale;
pub mod static_hazards;

use crate::keywords::{normalize, Predicate};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use static_hazards::{GENERAL_HAZARD_LABEL, HAZARD_RULES};

/// Scores at or above this are High.
pub const HIGH_THRESHOLD: u8 = 15;
/// Scores at or above this (and below [`HIGH_THRESHOLD`]) are Medium.
pub const MEDIUM_THRESHOLD: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    /// The action statement attached to each level.
    pub fn guidance(&self) -> &'static str {
        match self {
            RiskLevel::High => {
                "HIGH RISK: Immediate action required. Stop work until proper controls are implemented."
            }
            RiskLevel::Medium => {
                "MEDIUM RISK: Planned control measures required before proceeding."
            }
            RiskLevel::Low => "LOW RISK: Acceptable with monitoring and basic precautions.",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bucket a risk score. Thresholds are fixed: `>= 15` High, `>= 5` Medium.
pub fn risk_level_for_score(score: u8) -> RiskLevel {
    if score >= HIGH_THRESHOLD {
        RiskLevel::High
    } else if score >= MEDIUM_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// A rating decided by secondary keywords: the first matching step wins,
/// otherwise the baseline applies.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Ladder {
    pub steps: &'static [(Predicate, u8)],
    pub otherwise: u8,
}

impl Ladder {
    pub const fn fixed(value: u8) -> Self {
        Self {
            steps: &[],
            otherwise: value,
        }
    }

    pub fn rate(&self, normalized: &str) -> u8 {
        self.steps
            .iter()
            .find(|(predicate, _)| predicate.matches(normalized))
            .map_or(self.otherwise, |&(_, value)| value)
    }

    /// Every value this ladder can produce.
    pub fn values(&self) -> impl Iterator<Item = u8> + '_ {
        self.steps
            .iter()
            .map(|&(_, value)| value)
            .chain(std::iter::once(self.otherwise))
    }
}

/// One hazard category with its refinement ladders and control measures.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HazardRule {
    pub id: &'static str,
    pub label: &'static str,
    pub predicate: Predicate,
    pub likelihood: Ladder,
    pub severity: Ladder,
    pub remediations: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub hazard_label: String,
    pub likelihood: u8,
    pub severity: u8,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub remediations: Vec<String>,
}

impl ClassificationResult {
    fn from_rule(rule: &HazardRule, normalized: &str) -> Self {
        let likelihood = rule.likelihood.rate(normalized);
        let severity = rule.severity.rate(normalized);
        let risk_score = likelihood * severity;
        Self {
            hazard_label: rule.label.to_owned(),
            likelihood,
            severity,
            risk_score,
            risk_level: risk_level_for_score(risk_score),
            remediations: rule.remediations.iter().map(|&m| m.to_owned()).collect(),
        }
    }

    /// The first `count` remediations, or all of them when `count` is zero.
    pub fn top_remediations(&self, count: usize) -> &[String] {
        if count == 0 || count >= self.remediations.len() {
            &self.remediations
        } else {
            &self.remediations[..count]
        }
    }

    pub fn is_general(&self) -> bool {
        self.hazard_label == GENERAL_HAZARD_LABEL
    }
}

fn find_rule(normalized: &str) -> &'static HazardRule {
    HAZARD_RULES
        .iter()
        .find(|rule| rule.predicate.matches(normalized))
        .unwrap_or(&static_hazards::GENERAL)
}

/// Find the first hazard rule whose predicate matches the scenario.
pub fn classify_rule(scenario: &str) -> &'static HazardRule {
    find_rule(&normalize(scenario))
}

/// Classify a free-text scenario. Total over all inputs; unrecognized
/// text yields the general hazard at likelihood 2, severity 2.
pub fn classify(scenario: &str) -> ClassificationResult {
    let text = normalize(scenario);
    let rule = find_rule(&text);
    let result = ClassificationResult::from_rule(rule, &text);
    debug!(
        "[classify] rule={} likelihood={} severity={} score={} level={}",
        rule.id, result.likelihood, result.severity, result.risk_score, result.risk_level
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(risk_level_for_score(1), RiskLevel::Low);
        assert_eq!(risk_level_for_score(4), RiskLevel::Low);
        assert_eq!(risk_level_for_score(5), RiskLevel::Medium);
        assert_eq!(risk_level_for_score(14), RiskLevel::Medium);
        assert_eq!(risk_level_for_score(15), RiskLevel::High);
        assert_eq!(risk_level_for_score(25), RiskLevel::High);
    }

    #[test]
    fn test_bucket_is_monotonic() {
        let levels: Vec<_> = (1..=25).map(risk_level_for_score).collect();
        assert!(levels.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_ladder_first_step_wins() {
        const LADDER: Ladder = Ladder {
            steps: &[
                (Predicate::Any(&["without harness"]), 4),
                (Predicate::Any(&["proper"]), 2),
            ],
            otherwise: 3,
        };
        assert_eq!(LADDER.rate("roof work without harness"), 4);
        assert_eq!(LADDER.rate("proper gear but without harness"), 4);
        assert_eq!(LADDER.rate("proper gear"), 2);
        assert_eq!(LADDER.rate("roof work"), 3);
        assert_eq!(LADDER.values().collect::<Vec<_>>(), vec![4, 2, 3]);
    }

    #[test]
    fn test_live_electrical_is_high() {
        let result = classify("electrical work on live panel without lockout");
        assert_eq!(result.hazard_label, "Electrical");
        assert_eq!(result.likelihood, 4);
        assert_eq!(result.severity, 5);
        assert_eq!(result.risk_score, 20);
        assert_eq!(result.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_isolated_electrical_is_low() {
        let result = classify("Electrical panel isolated with lockout applied");
        assert_eq!((result.likelihood, result.severity), (1, 3));
        assert_eq!(result.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_ppe_at_height_question() {
        let result = classify("What PPE is required for working at height?");
        assert_eq!(result.hazard_label, "Work at Height");
        assert_eq!((result.likelihood, result.severity), (3, 3));
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert!(result
            .remediations
            .iter()
            .any(|m| m.contains("harness") || m.contains("fall protection")));
    }

    #[test]
    fn test_ladder_without_harness_in_wind() {
        let result = classify(
            "Working on a ladder 12 feet high to clean windows without safety harness in windy conditions",
        );
        assert_eq!(result.hazard_label, "Work at Height");
        assert_eq!((result.likelihood, result.severity), (4, 4));
        assert_eq!(result.risk_score, 16);
        assert_eq!(result.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_roof_without_harness_is_high() {
        let result = classify("roof work without harness");
        assert_eq!(result.hazard_label, "Work at Height");
        assert_eq!((result.likelihood, result.severity), (4, 5));
        assert_eq!(result.risk_score, 20);
        assert_eq!(result.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_missing_harness_outranks_elevation() {
        let result = classify("third floor scaffold without harness");
        assert_eq!((result.likelihood, result.severity), (4, 5));
        let result = classify("third floor scaffold with proper anchors");
        assert_eq!((result.likelihood, result.severity), (2, 4));
    }

    #[test]
    fn test_office_desk_work_is_general() {
        let result = classify("office desk work");
        assert!(result.is_general());
        assert_eq!(result.risk_score, 4);
        assert_eq!(result.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_empty_scenario_is_general() {
        let result = classify("");
        assert_eq!(result.hazard_label, GENERAL_HAZARD_LABEL);
        assert_eq!((result.likelihood, result.severity), (2, 2));
        assert_eq!(classify_rule("").id, "general");
    }

    #[test]
    fn test_flammable_without_permit_needs_both_keywords() {
        let both = classify("hot work near flammable drums without permit");
        assert_eq!((both.likelihood, both.severity), (4, 5));

        let only_flammable = classify("storing flammable liquids");
        assert_eq!((only_flammable.likelihood, only_flammable.severity), (3, 4));
    }

    #[test]
    fn test_top_remediations() {
        let result = classify("electrical wiring");
        assert_eq!(result.remediations.len(), 6);
        assert_eq!(result.top_remediations(3).len(), 3);
        assert_eq!(result.top_remediations(3)[0], result.remediations[0]);
        assert_eq!(result.top_remediations(0).len(), 6);
        assert_eq!(result.top_remediations(10).len(), 6);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(classify("office desk work")).unwrap();
        assert_eq!(json["hazardLabel"], GENERAL_HAZARD_LABEL);
        assert_eq!(json["riskScore"], 4);
        assert_eq!(json["riskLevel"], "Low");
        assert!(json["remediations"].is_array());
    }
}
