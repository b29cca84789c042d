use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;

/// Confidence assigned to a keyword found verbatim inside a candidate phrase.
pub const EXACT_MATCH_CONFIDENCE: u8 = 100;

/// A matched skill as reported under a category.
///
/// `confidence` is on a 0-100 scale. Every match is currently exact, but the
/// field is kept so graded scores fit the same record.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, Deserialize)]
pub struct CategorizedSkill {
    pub name: String,
    pub confidence: u8,
}

impl CategorizedSkill {
    pub fn exact(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            confidence: EXACT_MATCH_CONFIDENCE,
        }
    }
}

/// Category name to matched skills, in vocabulary declaration order.
///
/// Categories without any skills are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorizedResult {
    groups: Vec<(String, Vec<CategorizedSkill>)>,
}

impl CategorizedResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a category group. Empty groups are dropped.
    pub fn insert(&mut self, category: impl Into<String>, skills: Vec<CategorizedSkill>) {
        if skills.is_empty() {
            return;
        }
        let category = category.into();
        match self.groups.iter_mut().find(|(name, _)| *name == category) {
            Some((_, existing)) => existing.extend(skills),
            None => self.groups.push((category, skills)),
        }
    }

    pub fn get(&self, category: &str) -> Option<&[CategorizedSkill]> {
        self.groups
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, skills)| skills.as_slice())
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CategorizedSkill])> {
        self.groups
            .iter()
            .map(|(name, skills)| (name.as_str(), skills.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Serialize for CategorizedResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (category, skills) in &self.groups {
            map.serialize_entry(category, skills)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_groups_are_dropped() {
        let mut result = CategorizedResult::new();
        result.insert("Java", Vec::new());
        result.insert("Python", vec![CategorizedSkill::exact("python")]);

        assert_eq!(result.len(), 1);
        assert!(result.get("Java").is_none());
        assert_eq!(result.get("Python").unwrap()[0].confidence, 100);
    }

    #[test]
    fn test_serializes_in_insertion_order() {
        let mut result = CategorizedResult::new();
        result.insert("Web", vec![CategorizedSkill::exact("react")]);
        result.insert("DevOps", vec![CategorizedSkill::exact("docker")]);

        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"Web":[{"name":"react","confidence":100}],"DevOps":[{"name":"docker","confidence":100}]}"#
        );
    }
}
