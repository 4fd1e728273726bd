//! Keyword tables for complaint categorization and urgency detection.
//!
//! All entries are lowercase and matched as plain substrings of the
//! lowercased complaint text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Complaint category, one per department
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Cleanliness")]
    Cleanliness,
    #[serde(rename = "Infrastructure")]
    Infrastructure,
    #[serde(rename = "Safety & Security")]
    SafetySecurity,
    #[serde(rename = "Staff Behavior")]
    StaffBehavior,
    #[serde(rename = "Food & Catering")]
    FoodCatering,
    #[serde(rename = "Electrical & AC")]
    ElectricalAc,
    /// Fallback when no keyword matched
    #[serde(rename = "Other")]
    Other,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 7] = [
        Category::Cleanliness,
        Category::Infrastructure,
        Category::SafetySecurity,
        Category::StaffBehavior,
        Category::FoodCatering,
        Category::ElectricalAc,
        Category::Other,
    ];

    /// Label shared with the department catalog
    pub fn label(&self) -> &'static str {
        match self {
            Category::Cleanliness => "Cleanliness",
            Category::Infrastructure => "Infrastructure",
            Category::SafetySecurity => "Safety & Security",
            Category::StaffBehavior => "Staff Behavior",
            Category::FoodCatering => "Food & Catering",
            Category::ElectricalAc => "Electrical & AC",
            Category::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Trigger substrings; empty for `Other`
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::Cleanliness => CLEANLINESS,
            Category::Infrastructure => INFRASTRUCTURE,
            Category::SafetySecurity => SAFETY_SECURITY,
            Category::StaffBehavior => STAFF_BEHAVIOR,
            Category::FoodCatering => FOOD_CATERING,
            Category::ElectricalAc => ELECTRICAL_AC,
            Category::Other => &[],
        }
    }
}

const CLEANLINESS: &[&str] = &[
    "dirty",
    "clean",
    "toilet",
    "washroom",
    "garbage",
    "trash",
    "smell",
    "hygiene",
    "sanitation",
];

const INFRASTRUCTURE: &[&str] = &[
    "broken", "damage", "crack", "repair", "window", "door", "seat", "berth", "wall",
];

const SAFETY_SECURITY: &[&str] = &[
    "fire",
    "smoke",
    "theft",
    "danger",
    "emergency",
    "accident",
    "unsafe",
    "security",
];

const STAFF_BEHAVIOR: &[&str] = &[
    "rude",
    "staff",
    "conductor",
    "employee",
    "behavior",
    "service",
    "unprofessional",
];

const FOOD_CATERING: &[&str] = &[
    "food", "meal", "pantry", "catering", "water", "quality", "expired", "taste",
];

const ELECTRICAL_AC: &[&str] = &[
    "ac",
    "air conditioning",
    "fan",
    "light",
    "electrical",
    "power",
    "charging",
    "socket",
];

/// Severity indicators that force High urgency
pub const URGENCY_HIGH: &[&str] = &[
    "fire",
    "emergency",
    "danger",
    "urgent",
    "critical",
    "immediate",
    "serious",
    "severe",
    "accident",
    "injury",
    "theft",
    "unsafe",
];

/// Declared for completeness. Medium urgency is the fallback when neither
/// the high nor the low list matches, so this list is never counted.
pub const URGENCY_MEDIUM: &[&str] = &[
    "broken",
    "damage",
    "repair",
    "not working",
    "problem",
    "issue",
];

pub const URGENCY_LOW: &[&str] = &[
    "dirty",
    "clean",
    "minor",
    "request",
    "suggestion",
    "improvement",
];

/// Number of distinct keywords present in `text`.
///
/// Repeated occurrences of one keyword count once.
pub fn count_hits(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| text.contains(**k)).count()
}
