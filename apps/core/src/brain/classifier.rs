//! Complaint classification.
//!
//! Derives category, urgency and department routing from the complaint text
//! with keyword counting only. Deterministic and total over any input.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::catalog::{self, Department};
use super::keywords::{count_hits, Category, URGENCY_HIGH, URGENCY_LOW};

/// Tag recorded when the complaint carries photos or videos
pub const IMAGE_UPLOADED_TAG: &str = "image_uploaded";

const MEDIA_BONUS: f64 = 0.1;

/// Coarse priority tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UrgencyLevel {
    High,
    Medium,
    Low,
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UrgencyLevel::High => "High",
            UrgencyLevel::Medium => "Medium",
            UrgencyLevel::Low => "Low",
        };
        write!(f, "{}", label)
    }
}

/// Explanation attached to every classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysis {
    /// Tags derived from attachments
    pub detected_objects: Vec<String>,
    /// Category confidence (0.5 - 0.95)
    pub confidence: f64,
    /// Human-readable summary of the decision
    pub reasoning: String,
}

/// Result of complaint classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub category: Category,
    pub urgency_level: UrgencyLevel,
    /// Rounded to two decimals, always within [0, 1]
    pub urgency_score: f64,
    /// Absent when no department carries the category name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
    pub ai_analysis: AiAnalysis,
}

/// Keyword-based complaint classifier
pub struct ComplaintClassifier {
    departments: Vec<Department>,
}

impl Default for ComplaintClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ComplaintClassifier {
    /// Create a classifier routing to the built-in department catalog
    pub fn new() -> Self {
        Self::with_departments(catalog::default_departments())
    }

    /// Create a classifier routing to a custom department catalog
    pub fn with_departments(departments: Vec<Department>) -> Self {
        Self { departments }
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    /// Classify a complaint from its title, description and attachment count
    pub fn classify(
        &self,
        title: &str,
        description: &str,
        media_count: usize,
    ) -> ClassificationResult {
        let text = format!("{} {}", title, description).to_lowercase();

        let (category, max_score) = detect_category(&text);
        let (urgency_level, mut urgency_score) = detect_urgency(&text);

        if media_count > 0 {
            urgency_score = (urgency_score + MEDIA_BONUS).min(1.0);
        }
        let urgency_score = round2(urgency_score);

        let department_id =
            catalog::find_by_name(&self.departments, category.label()).map(|d| d.id.clone());

        let detected_objects = if media_count > 0 {
            vec![IMAGE_UPLOADED_TAG.to_string()]
        } else {
            vec![]
        };

        let confidence = if max_score > 0 {
            (0.6 + max_score as f64 * 0.1).min(0.95)
        } else {
            0.5
        };

        debug!(
            "Classified complaint: {} ({} hits), urgency {} ({:.2})",
            category, max_score, urgency_level, urgency_score
        );

        ClassificationResult {
            category,
            urgency_level,
            urgency_score,
            department_id,
            ai_analysis: AiAnalysis {
                detected_objects,
                confidence,
                reasoning: format!(
                    "Categorized as {} based on content analysis. Urgency set to {} based on severity indicators.",
                    category, urgency_level
                ),
            },
        }
    }
}

/// Best-scoring category and its score.
///
/// Strict `>` during the scan keeps the first declared category on ties.
fn detect_category(text: &str) -> (Category, usize) {
    let mut best = Category::Other;
    let mut max_score = 0;

    for category in Category::ALL {
        if category == Category::Other {
            continue;
        }
        let score = count_hits(text, category.keywords());
        if score > max_score {
            max_score = score;
            best = category;
        }
    }

    (best, max_score)
}

fn detect_urgency(text: &str) -> (UrgencyLevel, f64) {
    let high_count = count_hits(text, URGENCY_HIGH);
    let low_count = count_hits(text, URGENCY_LOW);

    if high_count > 0 {
        (UrgencyLevel::High, 0.8 + high_count.min(3) as f64 * 0.05)
    } else if low_count > 0 {
        (UrgencyLevel::Low, 0.2 + low_count as f64 * 0.05)
    } else {
        (UrgencyLevel::Medium, 0.5)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_cleanliness_complaint() {
        let classifier = ComplaintClassifier::new();

        let result = classifier.classify("Dirty toilet", "The washroom smells terrible", 0);

        assert_eq!(result.category, Category::Cleanliness);
        assert_eq!(result.urgency_level, UrgencyLevel::Low);
        assert!(approx(result.urgency_score, 0.25));
        assert_eq!(result.department_id.as_deref(), Some("dept-1"));
        assert!(approx(result.ai_analysis.confidence, 0.95));
    }

    #[test]
    fn test_air_conditioning_complaint() {
        let classifier = ComplaintClassifier::new();

        // Electrical & AC: "ac" + "air conditioning"; Infrastructure: "broken"
        let result = classifier.classify("AC not working", "The air conditioning is broken", 0);

        assert_eq!(result.category, Category::ElectricalAc);
        assert_eq!(result.urgency_level, UrgencyLevel::Medium);
        assert!(approx(result.urgency_score, 0.5));
        assert!(approx(result.ai_analysis.confidence, 0.8));
    }

    #[test]
    fn test_tie_goes_to_first_declared_category() {
        let classifier = ComplaintClassifier::new();

        let result = classifier.classify("dirty window", "", 0);
        assert_eq!(result.category, Category::Cleanliness);

        let result = classifier.classify("broken fan", "", 0);
        assert_eq!(result.category, Category::Infrastructure);
    }

    #[test]
    fn test_empty_input() {
        let classifier = ComplaintClassifier::new();

        let result = classifier.classify("", "", 0);

        assert_eq!(result.category, Category::Other);
        assert_eq!(result.urgency_level, UrgencyLevel::Medium);
        assert!(approx(result.urgency_score, 0.5));
        assert!(approx(result.ai_analysis.confidence, 0.5));
        assert_eq!(result.department_id.as_deref(), Some("dept-7"));
        assert!(result.ai_analysis.detected_objects.is_empty());
    }

    #[test]
    fn test_media_bonus_caps_at_one() {
        let classifier = ComplaintClassifier::new();

        let result = classifier.classify(
            "Fire in coach",
            "Smoke coming from the pantry, emergency!",
            2,
        );

        assert_eq!(result.category, Category::SafetySecurity);
        assert_eq!(result.urgency_level, UrgencyLevel::High);
        assert!(approx(result.urgency_score, 1.0));
        assert_eq!(result.ai_analysis.detected_objects, vec![IMAGE_UPLOADED_TAG]);
    }

    #[test]
    fn test_high_urgency_caps_at_three_hits() {
        let (level, score) =
            detect_urgency("urgent critical serious severe injury accident theft");
        assert_eq!(level, UrgencyLevel::High);
        assert!(approx(round2(score), 0.95));
    }

    #[test]
    fn test_reasoning_names_category_and_urgency() {
        let classifier = ComplaintClassifier::new();

        let result = classifier.classify("Rude conductor", "", 0);

        assert_eq!(
            result.ai_analysis.reasoning,
            "Categorized as Staff Behavior based on content analysis. \
             Urgency set to Medium based on severity indicators."
        );
    }

    #[test]
    fn test_missing_department_yields_no_id() {
        let departments = catalog::default_departments()
            .into_iter()
            .filter(|d| d.name != "Other")
            .collect();
        let classifier = ComplaintClassifier::with_departments(departments);

        let result = classifier.classify("nothing relevant", "", 0);

        assert_eq!(result.category, Category::Other);
        assert!(result.department_id.is_none());
    }

    #[test]
    fn test_result_json_shape() {
        let classifier = ComplaintClassifier::new();

        let json = serde_json::to_value(classifier.classify("dirty seat", "", 1)).unwrap();

        assert_eq!(json["category"], "Cleanliness");
        assert_eq!(json["urgencyLevel"], "Low");
        assert_eq!(json["departmentId"], "dept-1");
        assert_eq!(json["aiAnalysis"]["detectedObjects"][0], "image_uploaded");
    }
}
