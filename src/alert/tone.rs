//! Alert tone selection by ship category

use std::path::Path;

use crate::config::ToneConfig;

/// Ship categories that have their own alert tone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToneCategory {
    Cargo,
    Tanker,
    Passenger,
    Fishing,
    Tug,
    Sailing,
    Military,
    Generic,
}

/// Lowercase keyword -> category, first match wins
const KEYWORDS: &[(&str, ToneCategory)] = &[
    ("cargo", ToneCategory::Cargo),
    ("tanker", ToneCategory::Tanker),
    ("passenger", ToneCategory::Passenger),
    ("ferry", ToneCategory::Passenger),
    ("fishing", ToneCategory::Fishing),
    ("tug", ToneCategory::Tug),
    ("towing", ToneCategory::Tug),
    ("sailing", ToneCategory::Sailing),
    ("pleasure", ToneCategory::Sailing),
    ("military", ToneCategory::Military),
    ("law enforcement", ToneCategory::Military),
];

impl ToneCategory {
    /// Case-insensitive substring match against the keyword table
    pub fn classify(ship_type: &str) -> Self {
        let ship_type = ship_type.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(keyword, _)| ship_type.contains(keyword))
            .map(|&(_, category)| category)
            .unwrap_or(ToneCategory::Generic)
    }
}

impl ToneConfig {
    /// Tone file for a category
    pub fn path_for(&self, category: ToneCategory) -> &Path {
        match category {
            ToneCategory::Cargo => &self.cargo,
            ToneCategory::Tanker => &self.tanker,
            ToneCategory::Passenger => &self.passenger,
            ToneCategory::Fishing => &self.fishing,
            ToneCategory::Tug => &self.tug,
            ToneCategory::Sailing => &self.sailing,
            ToneCategory::Military => &self.military,
            ToneCategory::Generic => &self.generic,
        }
    }
}
