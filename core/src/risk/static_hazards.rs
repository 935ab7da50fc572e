//! Hazard categories, their rating ladders and control measures.
//!
//! Within a ladder, escalating keywords are listed before mitigating ones,
//! so "without harness ... proper anchor" rates as the worse case.

use super::{HazardRule, Ladder};
use crate::keywords::Predicate;

pub const GENERAL_HAZARD_LABEL: &str = "General Workplace Hazard";

// --- Work at height ---

const HEIGHT_UNPROTECTED: Predicate =
    Predicate::Any(&["without harness", "no safety", "wet", "windy"]);
const HEIGHT_PROTECTED: Predicate = Predicate::Any(&["proper", "safety equipment"]);
const HEIGHT_NO_HARNESS: Predicate = Predicate::Any(&["without harness"]);
const HEIGHT_ELEVATED: Predicate = Predicate::Any(&["high", "story", "floor"]);

// --- Electrical ---

const ELECTRICAL_LIVE: Predicate = Predicate::Any(&["live", "energized", "wet"]);
const ELECTRICAL_ISOLATED: Predicate = Predicate::Any(&["lockout", "isolated"]);

// --- Chemical ---

const CHEMICAL_UNCONTROLLED: Predicate =
    Predicate::Any(&["without ppe", "no ventilation", "spill"]);
const CHEMICAL_CONTROLLED: Predicate = Predicate::Any(&["proper ppe", "ventilation"]);

// --- Fire ---

const FIRE_UNPERMITTED: Predicate = Predicate::All(&[
    Predicate::Any(&["flammable"]),
    Predicate::Any(&["without permit"]),
]);
const FIRE_CONTROLLED: Predicate = Predicate::Any(&["fire watch", "permit"]);

// --- Machinery ---

const MACHINE_UNGUARDED: Predicate =
    Predicate::Any(&["without guard", "broken", "damaged", "maintenance"]);
const MACHINE_GUARDED: Predicate = Predicate::Any(&["proper guard", "safety"]);

// --- Confined space ---

const CONFINED_UNCONTROLLED: Predicate =
    Predicate::Any(&["without permit", "no ventilation", "alone"]);
const CONFINED_CONTROLLED: Predicate = Predicate::All(&[
    Predicate::Any(&["permit"]),
    Predicate::Any(&["attendant"]),
]);

pub(super) const GENERAL: HazardRule = HazardRule {
    id: "general",
    label: GENERAL_HAZARD_LABEL,
    predicate: Predicate::Always,
    likelihood: Ladder::fixed(2),
    severity: Ladder::fixed(2),
    remediations: &[
        "Conduct a site-specific hazard assessment",
        "Brief workers on the task and its hazards",
        "Keep the work area clean and well-lit",
        "Report unsafe conditions to your supervisor",
    ],
};

pub const HAZARD_RULES: &[HazardRule] = &[
    HazardRule {
        id: "height",
        label: "Work at Height",
        predicate: Predicate::Any(&["ladder", "height", "roof", "scaffold"]),
        likelihood: Ladder {
            steps: &[(HEIGHT_UNPROTECTED, 4), (HEIGHT_PROTECTED, 2)],
            otherwise: 3,
        },
        severity: Ladder {
            steps: &[(HEIGHT_NO_HARNESS, 5), (HEIGHT_ELEVATED, 4)],
            otherwise: 3,
        },
        remediations: &[
            "Use proper fall protection equipment (harness, lanyard)",
            "Inspect all equipment before use",
            "Ensure stable ladder positioning (4:1 rule)",
            "Maintain three points of contact",
            "Use spotters and barriers",
            "Check weather conditions",
        ],
    },
    HazardRule {
        id: "electrical",
        label: "Electrical",
        predicate: Predicate::Any(&["electrical", "wiring", "power", "voltage"]),
        likelihood: Ladder {
            steps: &[(ELECTRICAL_LIVE, 4), (ELECTRICAL_ISOLATED, 1)],
            otherwise: 3,
        },
        severity: Ladder {
            steps: &[(ELECTRICAL_LIVE, 5), (ELECTRICAL_ISOLATED, 3)],
            otherwise: 4,
        },
        remediations: &[
            "Implement lockout/tagout procedures",
            "Use insulated tools and PPE",
            "Test circuits before work",
            "Maintain safe distances from live parts",
            "Ensure proper grounding",
            "Use qualified electricians only",
        ],
    },
    HazardRule {
        id: "chemical",
        label: "Chemical Exposure",
        predicate: Predicate::Any(&["chemical", "acid", "solvent", "toxic"]),
        likelihood: Ladder {
            steps: &[(CHEMICAL_UNCONTROLLED, 4), (CHEMICAL_CONTROLLED, 2)],
            otherwise: 3,
        },
        severity: Ladder {
            steps: &[(CHEMICAL_UNCONTROLLED, 4), (CHEMICAL_CONTROLLED, 3)],
            otherwise: 3,
        },
        remediations: &[
            "Use appropriate respiratory protection",
            "Wear chemical-resistant gloves and clothing",
            "Ensure adequate ventilation",
            "Have emergency eyewash/shower available",
            "Store chemicals properly",
            "Train workers on SDS information",
        ],
    },
    HazardRule {
        id: "fire",
        label: "Fire/Explosion",
        predicate: Predicate::Any(&["fire", "flammable", "hot work", "welding"]),
        likelihood: Ladder {
            steps: &[(FIRE_UNPERMITTED, 4), (FIRE_CONTROLLED, 2)],
            otherwise: 3,
        },
        severity: Ladder {
            steps: &[(FIRE_UNPERMITTED, 5)],
            otherwise: 4,
        },
        remediations: &[
            "Obtain hot work permits",
            "Remove flammable materials from area",
            "Have fire extinguisher readily available",
            "Assign fire watch personnel",
            "Check area 30 minutes after work completion",
            "Ensure proper ventilation",
        ],
    },
    HazardRule {
        id: "machinery",
        label: "Mechanical Injury",
        predicate: Predicate::Any(&["machine", "equipment", "moving parts", "conveyor"]),
        likelihood: Ladder {
            steps: &[(MACHINE_UNGUARDED, 4), (MACHINE_GUARDED, 2)],
            otherwise: 3,
        },
        severity: Ladder {
            steps: &[(MACHINE_UNGUARDED, 4), (MACHINE_GUARDED, 3)],
            otherwise: 3,
        },
        remediations: &[
            "Ensure all machine guards are in place",
            "Implement lockout/tagout procedures",
            "Provide proper training on equipment use",
            "Conduct regular maintenance and inspections",
            "Use appropriate PPE",
            "Keep work area clean and well-lit",
        ],
    },
    HazardRule {
        id: "confined-space",
        label: "Confined Space Entry",
        predicate: Predicate::Any(&["confined space", "tank", "vessel"]),
        likelihood: Ladder {
            steps: &[(CONFINED_UNCONTROLLED, 4), (CONFINED_CONTROLLED, 2)],
            otherwise: 3,
        },
        severity: Ladder {
            steps: &[(CONFINED_UNCONTROLLED, 5)],
            otherwise: 4,
        },
        remediations: &[
            "Obtain confined space entry permit",
            "Test atmosphere before and during entry",
            "Provide continuous mechanical ventilation",
            "Station trained attendant outside",
            "Use appropriate respiratory protection",
            "Establish emergency rescue procedures",
        ],
    },
    HazardRule {
        id: "manual-handling",
        label: "Manual Handling",
        predicate: Predicate::Any(&["lifting", "carrying", "heavy", "manual handling"]),
        likelihood: Ladder {
            steps: &[(Predicate::Any(&["heavy", "awkward", "repetitive"]), 3)],
            otherwise: 2,
        },
        severity: Ladder::fixed(2),
        remediations: &[
            "Use mechanical lifting aids when possible",
            "Get help for heavy or awkward loads",
            "Keep load close to body",
            "Bend knees, not back",
            "Avoid twisting while lifting",
            "Take regular breaks for repetitive tasks",
        ],
    },
    GENERAL,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::scale;

    #[test]
    fn test_general_is_last() {
        let last = HAZARD_RULES.last().unwrap();
        assert_eq!(last.id, GENERAL.id);
        assert_eq!(last.predicate, Predicate::Always);
        assert_eq!(
            HAZARD_RULES
                .iter()
                .filter(|r| r.predicate == Predicate::Always)
                .count(),
            1
        );
    }

    #[test]
    fn test_all_ratings_in_range() {
        for rule in HAZARD_RULES {
            for value in rule.likelihood.values().chain(rule.severity.values()) {
                assert!(scale::in_range(value), "rule {} rates {value}", rule.id);
            }
        }
    }

    #[test]
    fn test_every_rule_has_remediations() {
        for rule in HAZARD_RULES {
            assert!(!rule.remediations.is_empty(), "rule {}", rule.id);
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for rule in HAZARD_RULES {
            let ladders = rule
                .likelihood
                .steps
                .iter()
                .chain(rule.severity.steps)
                .flat_map(|(p, _)| p.keywords());
            for kw in rule.predicate.keywords().into_iter().chain(ladders) {
                assert_eq!(kw, kw.to_lowercase(), "rule {} has keyword {kw}", rule.id);
            }
        }
    }
}
