//! Department taxonomy - static routing configuration.
//!
//! An explicit immutable configuration object built once at startup and
//! shared by reference. It never mutates after construction, so it is
//! safe to share across concurrent submissions without locking.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Static complaint-routing configuration: departments, their
/// sub-categories, which pairs mandate photographic evidence, and the
/// urgency vocabulary.
///
/// `IndexMap` keeps departments and sub-category lists in insertion
/// order, so candidate-label lists handed to the classifier are stable
/// across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Taxonomy {
    /// Department name -> ordered sub-category labels.
    departments: IndexMap<String, Vec<String>>,

    /// Department name -> sub-categories that require image evidence.
    image_required: IndexMap<String, Vec<String>>,

    /// Terms whose presence marks a complaint as urgent.
    urgency_terms: Vec<String>,
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::civic_default()
    }
}

impl Taxonomy {
    /// Create an empty taxonomy.
    pub fn new() -> Self {
        Self {
            departments: IndexMap::new(),
            image_required: IndexMap::new(),
            urgency_terms: Vec::new(),
        }
    }

    /// The standard civic deployment: seven departments with their
    /// sub-categories, image-evidence rules, and urgency terms.
    pub fn civic_default() -> Self {
        Self::new()
            .with_department(
                "Electricity Department",
                ["Power Outage", "Streetlight Issue", "Faulty Meter", "Billing Issue"],
            )
            .with_department(
                "Water Supply Department",
                ["No Water", "Water Leakage", "Polluted Water", "Sewage Issue"],
            )
            .with_department(
                "Road & Transport",
                ["Potholes", "Traffic Signal Malfunction", "Public Transport Issue"],
            )
            .with_department(
                "Waste Management",
                ["Garbage Collection Delay", "Illegal Dumping", "Recycling Issue"],
            )
            .with_department(
                "Public Safety",
                ["Crime Report", "Harassment", "Fire Incident", "Accident Report"],
            )
            .with_department(
                "Health & Sanitation",
                ["Hospital Complaint", "Emergency Medical Assistance", "Sanitation Issue"],
            )
            .with_department(
                "Education",
                ["School Infrastructure Issue", "Teacher Misconduct", "Lack of Study Materials"],
            )
            .with_image_required(
                "Waste Management",
                ["Garbage Collection Delay", "Illegal Dumping"],
            )
            .with_image_required("Road & Transport", ["Potholes", "Traffic Signal Malfunction"])
            .with_image_required("Water Supply Department", ["Water Leakage", "Sewage Issue"])
            .with_image_required("Public Safety", ["Fire Incident", "Accident Report"])
            .with_urgency_terms([
                "fire",
                "accident",
                "emergency",
                "life-threatening",
                "collapse",
                "urgent",
                "critical",
                "immediate",
            ])
    }

    /// Add a department with its ordered sub-category labels.
    pub fn with_department(
        mut self,
        name: impl Into<String>,
        sub_categories: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.departments.insert(
            name.into(),
            sub_categories.into_iter().map(|s| s.into()).collect(),
        );
        self
    }

    /// Mark (department, sub-category) pairs as image-required.
    pub fn with_image_required(
        mut self,
        department: impl Into<String>,
        sub_categories: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.image_required.insert(
            department.into(),
            sub_categories.into_iter().map(|s| s.into()).collect(),
        );
        self
    }

    /// Set the urgency vocabulary, replacing any previous terms.
    pub fn with_urgency_terms(
        mut self,
        terms: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.urgency_terms = terms.into_iter().map(|t| t.into().to_lowercase()).collect();
        self
    }

    /// Department names in insertion order - the candidate-label list
    /// for the first classification call.
    pub fn departments(&self) -> Vec<&str> {
        self.departments.keys().map(String::as_str).collect()
    }

    /// Sub-category labels for a department, or `None` if the
    /// department is unknown.
    pub fn sub_categories(&self, department: &str) -> Option<&[String]> {
        self.departments.get(department).map(Vec::as_slice)
    }

    /// Whether a department exists in this taxonomy.
    pub fn contains_department(&self, department: &str) -> bool {
        self.departments.contains_key(department)
    }

    /// Whether this exact (department, sub-category) pair mandates
    /// photographic evidence. Unknown pairs yield `false`, not an error.
    pub fn requires_image(&self, department: &str, sub_category: &str) -> bool {
        self.image_required
            .get(department)
            .is_some_and(|subs| subs.iter().any(|s| s == sub_category))
    }

    /// The urgency vocabulary (already case-folded).
    pub fn urgency_terms(&self) -> &[String] {
        &self.urgency_terms
    }

    /// Number of departments.
    pub fn department_count(&self) -> usize {
        self.departments.len()
    }
}
