//! Browsable FAQ knowledge base and the sample inputs offered to users.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FaqTopic {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub faqs: &'static [Faq],
}

pub const FAQ_TOPICS: &[FaqTopic] = &[
    FaqTopic {
        id: "height",
        name: "Work at Height",
        description: "Safety guidelines and best practices for elevated work",
        faqs: &[
            Faq {
                question: "What PPE is required when working at height?",
                answer: "Essential PPE includes: safety harness with full body support, hard hat, safety boots with good grip, high-visibility clothing, and appropriate gloves. All equipment must be regularly inspected and certified.",
            },
            Faq {
                question: "When should fall protection be used?",
                answer: "Fall protection is required when working at heights of 6 feet (1.8m) or more in general industry, or 4 feet (1.2m) in construction. This includes work platforms, ladders, scaffolding, and any elevated surfaces.",
            },
            Faq {
                question: "How should ladders be positioned safely?",
                answer: "Follow the 4:1 rule - for every 4 feet of height, the base should be 1 foot away from the wall. Ensure the ladder extends 3 feet above the landing point, maintain three points of contact, and never exceed the weight limit.",
            },
            Faq {
                question: "What are the main types of fall protection systems?",
                answer: "Personal Fall Arrest Systems (PFAS), guardrails, safety nets, positioning systems, and travel restraint systems. Each has specific applications and requirements for proper installation and use.",
            },
        ],
    },
    FaqTopic {
        id: "fire",
        name: "Fire Safety",
        description: "Fire prevention, protection, and emergency procedures",
        faqs: &[
            Faq {
                question: "How often should fire extinguishers be inspected?",
                answer: "Visual inspections should be monthly, annual maintenance by qualified personnel, and internal examination every 6 years. Keep records of all inspections and ensure extinguishers are easily accessible.",
            },
            Faq {
                question: "What are the different classes of fires?",
                answer: "Class A (ordinary combustibles), Class B (flammable liquids), Class C (electrical), Class D (metals), and Class K (cooking oils). Each requires specific extinguishing agents.",
            },
            Faq {
                question: "How should evacuation routes be maintained?",
                answer: "Keep all exits clearly marked and illuminated, ensure pathways are free of obstructions, maintain proper width requirements, and regularly test emergency lighting systems.",
            },
            Faq {
                question: "What is the proper fire drill procedure?",
                answer: "Sound alarm, evacuate via nearest safe exit, proceed to designated assembly point, take roll call, remain at assembly point until all-clear is given. Practice should occur regularly.",
            },
        ],
    },
];

/// Look up topics by id or name (case-insensitive). `None` returns all.
pub fn find_topics(filter: Option<&str>) -> Vec<&'static FaqTopic> {
    match filter {
        None => FAQ_TOPICS.iter().collect(),
        Some(wanted) => {
            let wanted = wanted.to_lowercase();
            FAQ_TOPICS
                .iter()
                .filter(|t| t.id == wanted || t.name.to_lowercase() == wanted)
                .collect()
        }
    }
}

pub const GREETING: &str = "Hello! I'm your AI Safety Assistant. Ask me anything about workplace safety, fire safety, or working at height.";

pub const SAMPLE_QUESTIONS: &[&str] = &[
    "What PPE is required for working at height?",
    "How often should fire extinguishers be inspected?",
    "What are the main causes of workplace accidents?",
    "Safety checklist for confined spaces",
];

pub const SAMPLE_SCENARIOS: &[&str] = &[
    "Working on a ladder 12 feet high to clean windows without safety harness in windy conditions",
    "Electrical maintenance on live 480V panel without lockout/tagout procedures",
    "Handling sulfuric acid without proper PPE in poorly ventilated area",
    "Hot work welding near flammable materials without fire watch",
    "Operating metal cutting machine with damaged safety guard",
    "Confined space entry into storage tank without permit or attendant",
];
