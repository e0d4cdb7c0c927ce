//! Washing guides: ordered category suggestions.

use serde::{Deserialize, Serialize};

use crate::search::CategoryFilter;

/// A washing routine listing which category to use at each step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Guide {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub steps: Vec<GuideStep>,
}

/// One step of a guide.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuideStep {
    /// Step caption, e.g. "1. Prelavador".
    pub label: String,
    /// Category the step points to.
    pub category: String,
}

impl GuideStep {
    pub fn new(label: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            category: category.into(),
        }
    }
}

impl Guide {
    /// Category selection for picking step `index`.
    pub fn pick(&self, index: usize) -> Option<CategoryFilter> {
        self.steps
            .get(index)
            .map(|step| CategoryFilter::only(step.category.as_str()))
    }
}
