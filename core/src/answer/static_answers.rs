//! Canned answers for the safety assistant.
//!
//! Order matters: rules are evaluated top to bottom and the first match
//! wins, so narrow rules (two keyword groups) sit above the broad
//! single-topic rules they overlap with. The fallback is always last.

use super::AnswerRule;
use crate::keywords::Predicate;

pub const FALLBACK_RULE_ID: &str = "default";

pub const DEFAULT_RESPONSE: &str = "I can help with questions about workplace safety, including:
- Working at height: PPE, fall protection, ladders and scaffolding
- Fire safety: extinguishers, classes of fire, evacuation routes and fire drills
- Confined spaces, electrical work and chemical handling
- Common causes of workplace accidents

Try asking something like \"What PPE is required for working at height?\"";

pub(super) const FALLBACK: AnswerRule = AnswerRule {
    id: FALLBACK_RULE_ID,
    predicate: Predicate::Always,
    response: DEFAULT_RESPONSE,
};

pub const ANSWER_RULES: &[AnswerRule] = &[
    // --- Working at height ---
    AnswerRule {
        id: "ppe-at-height",
        predicate: Predicate::All(&[
            Predicate::Any(&["ppe", "personal protective"]),
            Predicate::Any(&["height", "working at height", "elevated"]),
        ]),
        response: "Essential PPE for working at height:
- Full body safety harness with a suitable lanyard or self-retracting lifeline
- Hard hat with chin strap
- Safety boots with good grip
- High-visibility clothing
- Appropriate gloves

All equipment must be regularly inspected and certified. Check your harness and fall protection before every use.",
    },
    AnswerRule {
        id: "fall-protection-types",
        predicate: Predicate::All(&[
            Predicate::Any(&["fall protection", "fall arrest"]),
            Predicate::Any(&["type", "kind", "system"]),
        ]),
        response: "The main types of fall protection are:
- Personal Fall Arrest Systems (PFAS)
- Guardrails
- Safety nets
- Positioning systems
- Travel restraint systems

Each has specific applications and requirements for proper installation and use.",
    },
    AnswerRule {
        id: "fall-protection-required",
        predicate: Predicate::Any(&[
            "fall protection",
            "fall arrest",
            "guardrail",
            "safety net",
            "harness",
        ]),
        response: "Fall protection is required when working at heights of 6 feet (1.8 m) or more in general industry, or 4 feet (1.2 m) in construction.
This includes work platforms, ladders, scaffolding and any elevated surface. Harnesses must be anchored to a rated anchor point and inspected before each use.",
    },
    AnswerRule {
        id: "ladder",
        predicate: Predicate::Any(&["ladder"]),
        response: "Ladder safety:
- Follow the 4:1 rule: for every 4 feet of height, place the base 1 foot away from the wall
- Extend the ladder 3 feet above the landing point
- Maintain three points of contact at all times
- Never exceed the ladder's weight limit
- Inspect rungs, rails and feet before use and set up on firm, level ground",
    },
    AnswerRule {
        id: "scaffolding",
        predicate: Predicate::Any(&["scaffold"]),
        response: "Scaffolding safety:
- Scaffolds must be erected, moved or altered only by trained, competent persons
- Inspect before each shift and after any event that could affect stability
- Fit guardrails, midrails and toe boards on all open sides
- Keep platforms fully planked and free of debris
- Never overload beyond the rated capacity",
    },
    // --- Fire safety ---
    AnswerRule {
        id: "extinguisher-inspection",
        predicate: Predicate::All(&[
            Predicate::Any(&["extinguisher"]),
            Predicate::Any(&["inspect", "check", "often", "maint", "service"]),
        ]),
        response: "Fire extinguisher inspection schedule:
- Visual inspection monthly
- Annual maintenance by qualified personnel
- Internal examination every 6 years

Keep records of all inspections and make sure extinguishers stay easily accessible.",
    },
    AnswerRule {
        id: "extinguisher-use",
        predicate: Predicate::Any(&["extinguisher"]),
        response: "To use a fire extinguisher, remember PASS:
- Pull the pin
- Aim the nozzle at the base of the fire
- Squeeze the handle
- Sweep from side to side

Only fight small, contained fires and always keep a clear exit behind you.",
    },
    AnswerRule {
        id: "fire-classes",
        predicate: Predicate::All(&[
            Predicate::Any(&["class", "type", "kind"]),
            Predicate::Any(&["fire"]),
        ]),
        response: "Classes of fire:
- Class A: ordinary combustibles (wood, paper, textiles)
- Class B: flammable liquids
- Class C: electrical equipment
- Class D: combustible metals
- Class K: cooking oils and fats

Each class requires a specific extinguishing agent.",
    },
    AnswerRule {
        id: "evacuation",
        predicate: Predicate::Any(&[
            "evacuat",
            "exit route",
            "escape route",
            "emergency exit",
            "assembly point",
        ]),
        response: "Maintaining evacuation routes:
- Keep all exits clearly marked and illuminated
- Keep pathways free of obstructions
- Maintain the required route widths
- Regularly test emergency lighting systems",
    },
    AnswerRule {
        id: "fire-drill",
        predicate: Predicate::All(&[
            Predicate::Any(&["drill"]),
            Predicate::Any(&["fire", "alarm", "practice", "procedure"]),
        ]),
        response: "Fire drill procedure:
1. Sound the alarm
2. Evacuate via the nearest safe exit
3. Proceed to the designated assembly point
4. Take a roll call
5. Remain at the assembly point until the all-clear is given

Drills should be practised regularly.",
    },
    // --- Other topics ---
    AnswerRule {
        id: "confined-space",
        predicate: Predicate::Any(&["confined space", "tank entry", "manhole"]),
        response: "Confined space entry checklist:
- Obtain a confined space entry permit
- Test the atmosphere before and during entry (oxygen, flammables, toxics)
- Provide continuous mechanical ventilation
- Station a trained attendant outside at all times
- Use appropriate respiratory protection
- Have an emergency rescue plan and equipment ready",
    },
    AnswerRule {
        id: "accident-causes",
        predicate: Predicate::All(&[
            Predicate::Any(&["cause", "why do", "reason"]),
            Predicate::Any(&["accident", "incident", "injur"]),
        ]),
        response: "The main causes of workplace accidents are:
- Slips, trips and falls
- Falls from height
- Being struck by moving or falling objects
- Manual handling and overexertion
- Contact with machinery
- Electrical and chemical exposure

Most can be prevented with good housekeeping, training, proper PPE and hazard reporting.",
    },
    AnswerRule {
        id: "electrical",
        predicate: Predicate::Any(&["electric", "lockout", "tagout", "live wire", "shock"]),
        response: "Electrical safety essentials:
- Apply lockout/tagout before working on any circuit
- Test circuits before touching them
- Use insulated tools and rated PPE
- Keep safe distances from live parts
- Only qualified electricians should work on electrical systems",
    },
    AnswerRule {
        id: "chemical",
        predicate: Predicate::Any(&["chemical", "sds", "hazardous substance", "solvent"]),
        response: "Chemical handling:
- Read the Safety Data Sheet (SDS) before use
- Wear chemical-resistant gloves, eye protection and clothing
- Ensure adequate ventilation
- Store chemicals by compatibility in labelled containers
- Know where the emergency eyewash and shower are",
    },
    // --- Broad single-topic fallbacks ---
    AnswerRule {
        id: "ppe-general",
        predicate: Predicate::Any(&[
            "ppe",
            "personal protective",
            "hard hat",
            "gloves",
            "goggles",
        ]),
        response: "PPE must be selected for the specific hazard, fit the wearer and be inspected before use.
Common PPE includes hard hats, safety glasses or goggles, hearing protection, gloves, safety boots and high-visibility clothing. Damaged PPE must be replaced immediately.",
    },
    AnswerRule {
        id: "fire-general",
        predicate: Predicate::Any(&["fire", "flammable", "smoke"]),
        response: "General fire safety:
- Keep flammable materials away from ignition sources
- Know the location of extinguishers, alarms and exits
- Never block fire doors or exit routes
- Report fire hazards immediately",
    },
    AnswerRule {
        id: "height-general",
        predicate: Predicate::Any(&["height", "fall", "roof"]),
        response: "When working at height:
- Avoid work at height where possible
- Use collective protection (guardrails, platforms) before personal protection
- Use fall protection where a fall could cause injury
- Make sure everyone involved is trained and competent",
    },
    FALLBACK,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_last_and_unique() {
        let last = ANSWER_RULES.last().unwrap();
        assert_eq!(last.id, FALLBACK_RULE_ID);
        assert_eq!(last.predicate, Predicate::Always);
        let always_count = ANSWER_RULES
            .iter()
            .filter(|r| r.predicate == Predicate::Always)
            .count();
        assert_eq!(always_count, 1);
    }

    #[test]
    fn test_rule_ids_unique() {
        let mut ids: Vec<_> = ANSWER_RULES.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ANSWER_RULES.len());
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for rule in ANSWER_RULES {
            for kw in rule.predicate.keywords() {
                assert_eq!(kw, kw.to_lowercase(), "rule {} has keyword {kw}", rule.id);
            }
        }
    }
}
