pub mod defaults;

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

pub use defaults::DEFAULT_CATEGORIES;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Category {
    name: String,
    skills: Vec<String>,
}

/// Union of every keyword in a [`SkillVocabulary`], deduplicated.
///
/// Keywords keep the order of their first declaration, which is what the
/// skill filter falls back on when two keywords of equal length match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatSkillSet {
    keywords: Vec<String>,
}

impl FlatSkillSet {
    fn from_categories(categories: &[Category]) -> Self {
        let mut seen = HashSet::new();
        let keywords = categories
            .iter()
            .flat_map(|c| c.skills.iter())
            .filter(|s| seen.insert(s.as_str()))
            .cloned()
            .collect();
        Self { keywords }
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// Immutable category -> keyword table.
///
/// Keywords are lowercase, trimmed and non-empty. A keyword may belong to
/// several categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillVocabulary {
    categories: Vec<Category>,
    flat: FlatSkillSet,
}

#[derive(Debug, Deserialize)]
struct VocabularyFile {
    #[serde(rename = "category", default)]
    categories: Vec<CategoryEntry>,
}

#[derive(Debug, Deserialize)]
struct CategoryEntry {
    name: String,
    #[serde(default)]
    skills: Vec<String>,
}

impl SkillVocabulary {
    pub fn new<N, S>(categories: impl IntoIterator<Item = (N, Vec<S>)>) -> Result<Self>
    where
        N: Into<String>,
        S: Into<String>,
    {
        let mut validated: Vec<Category> = Vec::new();

        for (name, skills) in categories {
            let name = name.into();
            if name.trim().is_empty() || name.trim() != name {
                return Err(Error::Vocabulary(format!(
                    "category name {:?} must be non-empty and trimmed",
                    name
                )));
            }
            if validated.iter().any(|c| c.name == name) {
                return Err(Error::Vocabulary(format!(
                    "category {:?} is declared twice",
                    name
                )));
            }

            let mut keywords: Vec<String> = Vec::new();
            for skill in skills {
                let skill = skill.into();
                validate_keyword(&name, &skill)?;
                if !keywords.contains(&skill) {
                    keywords.push(skill);
                }
            }

            validated.push(Category {
                name,
                skills: keywords,
            });
        }

        Ok(Self::from_validated(validated))
    }

    fn from_validated(categories: Vec<Category>) -> Self {
        let flat = FlatSkillSet::from_categories(&categories);
        Self { categories, flat }
    }

    /// Parses a vocabulary from TOML made of `[[category]]` tables.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: VocabularyFile = toml::from_str(content)?;
        if file.categories.is_empty() {
            return Err(Error::Vocabulary(
                "vocabulary declares no categories".to_string(),
            ));
        }
        Self::new(file.categories.into_iter().map(|c| (c.name, c.skills)))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading skill vocabulary from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` when given, otherwise returns the built-in vocabulary.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|c| (c.name.as_str(), c.skills.as_slice()))
    }

    pub fn category(&self, name: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.skills.as_slice())
    }

    /// Every category declaring `skill`, in declaration order.
    pub fn categories_of(&self, skill: &str) -> Vec<&str> {
        self.categories
            .iter()
            .filter(|c| c.skills.iter().any(|s| s == skill))
            .map(|c| c.name.as_str())
            .collect()
    }

    pub fn flat(&self) -> &FlatSkillSet {
        &self.flat
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        let categories = DEFAULT_CATEGORIES
            .iter()
            .map(|(name, skills)| Category {
                name: name.to_string(),
                skills: skills.iter().map(|s| s.to_string()).collect(),
            })
            .collect();
        Self::from_validated(categories)
    }
}

fn validate_keyword(category: &str, keyword: &str) -> Result<()> {
    if keyword.is_empty() {
        return Err(Error::Vocabulary(format!(
            "empty keyword in category {:?}",
            category
        )));
    }
    if keyword.trim() != keyword {
        return Err(Error::Vocabulary(format!(
            "keyword {:?} in category {:?} has surrounding whitespace",
            keyword, category
        )));
    }
    if keyword.to_lowercase() != keyword {
        return Err(Error::Vocabulary(format!(
            "keyword {:?} in category {:?} is not lowercase",
            keyword, category
        )));
    }
    Ok(())
}
