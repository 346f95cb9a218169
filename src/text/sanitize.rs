//! Makes record text pronounceable
//!
//! Ship names and types arrive with database punctuation (`CARGO_SHIP`,
//! `[TUG]`, `"NAME"`, `HAZ^A`). The voice reads those characters aloud or
//! trips over them, so they are mapped to spaces or dropped. Steps run in a
//! fixed order:
//!
//! 1. trim surrounding whitespace
//! 2. `_`, `/`, `[` and `]` become spaces; `^` and `"` are removed
//! 3. configured corrections, in order, themselves passed through step 2
//! 4. trim again, since step 2 can leave edge spaces
//!
//! Nothing produced by a step is matched by an earlier one, which keeps the
//! result idempotent.

use crate::config::Correction;

/// Character substitutions, applied left to right
const SUBSTITUTIONS: &[(char, &str)] = &[
    ('_', " "),
    ('/', " "),
    ('^', ""),
    ('[', " "),
    (']', " "),
    ('"', ""),
];

/// Strip characters the voice should not read
pub fn readable(text: &str) -> String {
    substitute(text.trim()).trim().to_string()
}

fn substitute(text: &str) -> String {
    let mut text = text.to_string();
    for (from, to) in SUBSTITUTIONS {
        text = text.replace(*from, to);
    }
    text
}

/// `readable` plus pronunciation corrections
#[derive(Debug, Clone, Default)]
pub struct Sanitizer {
    corrections: Vec<Correction>,
}

impl Sanitizer {
    /// Both sides of each correction get the character substitutions, so
    /// replacements never contain a stripped character.
    pub fn new(corrections: Vec<Correction>) -> Self {
        let corrections = corrections
            .into_iter()
            .map(|c| Correction::new(substitute(&c.from), substitute(&c.to)))
            .filter(|c| !c.from.is_empty())
            .collect();
        Self { corrections }
    }

    pub fn apply(&self, text: &str) -> String {
        let mut text = readable(text);
        for correction in &self.corrections {
            text = text.replace(&correction.from, &correction.to);
        }
        text.trim().to_string()
    }
}
