use serde::Serialize;

use super::skill::CategorizedResult;

/// Final output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionReport {
    pub skills: Vec<String>,
    pub categorized_skills: CategorizedResult,
    pub total_skills: usize,
    pub total_categories: usize,
}

impl ExtractionReport {
    pub fn new(skills: Vec<String>, categorized_skills: CategorizedResult) -> Self {
        Self {
            total_skills: skills.len(),
            total_categories: categorized_skills.len(),
            skills,
            categorized_skills,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}
