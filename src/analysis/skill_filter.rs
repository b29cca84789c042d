use std::collections::BTreeSet;

use crate::models::CandidateTable;
use crate::taxonomy::FlatSkillSet;

/// Matches candidate phrases against the flat keyword set.
pub struct SkillFilter<'a> {
    skills: &'a FlatSkillSet,
}

impl<'a> SkillFilter<'a> {
    pub fn new(skills: &'a FlatSkillSet) -> Self {
        Self { skills }
    }

    /// The keyword recorded for `phrase`, if any keyword occurs in it.
    ///
    /// A keyword matches when it is a contiguous substring of the phrase.
    /// The longest matching keyword wins; ties go to the keyword declared
    /// first in the vocabulary.
    pub fn best_match(&self, phrase: &str) -> Option<&'a str> {
        let mut best: Option<&'a str> = None;
        for keyword in self.skills.iter() {
            if !phrase.contains(keyword) {
                continue;
            }
            if best.map_or(true, |b| keyword.len() > b.len()) {
                best = Some(keyword);
            }
        }
        best
    }

    /// Sorted, deduplicated keywords matched by any candidate phrase.
    pub fn filter(&self, candidates: &CandidateTable) -> Vec<String> {
        let matched: BTreeSet<&str> = candidates
            .phrases()
            .filter_map(|phrase| self.best_match(phrase))
            .collect();

        tracing::info!(
            "Matched {} skills from {} candidate phrases",
            matched.len(),
            candidates.len()
        );

        matched.into_iter().map(str::to_string).collect()
    }
}
