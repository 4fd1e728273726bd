//! Department catalog.
//!
//! The fixed set of departments complaints are routed to. Category labels
//! produced by the classifier are joined against department names.

use serde::{Deserialize, Serialize};

/// Organizational unit that handles one complaint category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    /// Stable identifier (e.g. `dept-3`)
    pub id: String,
    /// Display name, equal to a category label
    pub name: String,
    /// What the department handles
    pub description: String,
    /// Where escalations are sent
    pub contact_email: String,
}

impl Department {
    pub fn new(id: &str, name: &str, description: &str, contact_email: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            contact_email: contact_email.to_string(),
        }
    }
}

/// Built-in catalog, one department per category
pub fn default_departments() -> Vec<Department> {
    vec![
        Department::new(
            "dept-1",
            "Cleanliness",
            "Handles complaints related to coach cleanliness, toilets, and hygiene",
            "cleanliness@railmadad.in",
        ),
        Department::new(
            "dept-2",
            "Infrastructure",
            "Manages infrastructure damage, repairs, and maintenance",
            "infrastructure@railmadad.in",
        ),
        Department::new(
            "dept-3",
            "Safety & Security",
            "Addresses safety concerns, security threats, and emergency situations",
            "safety@railmadad.in",
        ),
        Department::new(
            "dept-4",
            "Staff Behavior",
            "Handles complaints about railway staff conduct and service",
            "staff@railmadad.in",
        ),
        Department::new(
            "dept-5",
            "Food & Catering",
            "Manages food quality, catering services, and pantry complaints",
            "catering@railmadad.in",
        ),
        Department::new(
            "dept-6",
            "Electrical & AC",
            "Handles electrical issues, AC problems, and lighting",
            "electrical@railmadad.in",
        ),
        Department::new(
            "dept-7",
            "Other",
            "General complaints that don't fit other categories",
            "support@railmadad.in",
        ),
    ]
}

/// Exact, case-sensitive name lookup
pub fn find_by_name<'a>(departments: &'a [Department], name: &str) -> Option<&'a Department> {
    departments.iter().find(|d| d.name == name)
}

pub fn find_by_id<'a>(departments: &'a [Department], id: &str) -> Option<&'a Department> {
    departments.iter().find(|d| d.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_has_seven_departments() {
        let departments = default_departments();
        assert_eq!(departments.len(), 7);
        assert_eq!(departments[6].name, "Other");
    }

    #[test]
    fn test_lookup_is_exact() {
        let departments = default_departments();

        assert_eq!(
            find_by_name(&departments, "Electrical & AC").map(|d| d.id.as_str()),
            Some("dept-6")
        );
        assert!(find_by_name(&departments, "electrical & ac").is_none());
        assert_eq!(
            find_by_id(&departments, "dept-1").map(|d| d.name.as_str()),
            Some("Cleanliness")
        );
    }

    #[test]
    fn test_department_json_shape() {
        let json = serde_json::to_value(&default_departments()[0]).unwrap();
        assert_eq!(json["contactEmail"], "cleanliness@railmadad.in");
    }
}
