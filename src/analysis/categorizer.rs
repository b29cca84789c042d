use crate::models::{CategorizedResult, CategorizedSkill};
use crate::taxonomy::SkillVocabulary;

/// Groups matched skills under every category that declares them.
pub struct Categorizer<'a> {
    vocabulary: &'a SkillVocabulary,
}

impl<'a> Categorizer<'a> {
    pub fn new(vocabulary: &'a SkillVocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn categorize(&self, skills: &[String]) -> CategorizedResult {
        let mut result = CategorizedResult::new();

        for (category, keywords) in self.vocabulary.categories() {
            let matched: Vec<CategorizedSkill> = skills
                .iter()
                .filter(|skill| keywords.contains(skill))
                .map(|skill| CategorizedSkill::exact(skill.as_str()))
                .collect();

            result.insert(category, matched);
        }

        tracing::debug!("Skills fall into {} categories", result.len());
        result
    }
}
