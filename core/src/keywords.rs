//! Substring keyword predicates shared by the answer and risk rule tables.
//!
//! Matching is naive: input is lower-cased and each keyword is
//! tested with a raw substring search, so `"ppe"` also matches inside
//! `"stepped"`. Rule tables are written with that in mind.

use serde::{Serialize, Serializer};
use std::fmt;

/// Lower-case the input. No trimming, no tokenization.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// A boolean test over normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// True when any of the keywords occurs as a substring.
    Any(&'static [&'static str]),
    /// True when every clause is true.
    All(&'static [Predicate]),
    /// Always true. Used by fallback rules.
    Always,
}

impl Predicate {
    /// Evaluate against text that has already been passed through [`normalize`].
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            Self::Any(keywords) => keywords.iter().any(|kw| normalized.contains(kw)),
            Self::All(clauses) => clauses.iter().all(|clause| clause.matches(normalized)),
            Self::Always => true,
        }
    }

    /// Every keyword mentioned anywhere in the expression, in declaration order.
    pub fn keywords(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        self.collect_keywords(&mut out);
        out
    }

    fn collect_keywords(&self, out: &mut Vec<&'static str>) {
        match self {
            Self::Any(keywords) => out.extend_from_slice(keywords),
            Self::All(clauses) => {
                for clause in *clauses {
                    clause.collect_keywords(out);
                }
            }
            Self::Always => {}
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any(keywords) => {
                let parts: Vec<String> = keywords.iter().map(|kw| format!("\"{kw}\"")).collect();
                match parts.len() {
                    0 => f.write_str("never"),
                    1 => f.write_str(&parts[0]),
                    _ => write!(f, "({})", parts.join(" | ")),
                }
            }
            Self::All(clauses) => {
                let parts: Vec<String> = clauses.iter().map(ToString::to_string).collect();
                if parts.is_empty() {
                    f.write_str("always")
                } else {
                    f.write_str(&parts.join(" & "))
                }
            }
            Self::Always => f.write_str("always"),
        }
    }
}

/// Predicates serialize as their rendered expression.
impl Serialize for Predicate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
