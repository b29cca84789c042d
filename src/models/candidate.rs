use std::collections::HashMap;

/// Frequency table of normalized candidate phrases.
///
/// Iteration order carries no meaning; only presence and count do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateTable {
    counts: HashMap<String, u32>,
}

impl CandidateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `phrase`. Empty phrases are ignored.
    pub fn record(&mut self, phrase: impl Into<String>) {
        let phrase = phrase.into();
        if phrase.is_empty() {
            return;
        }
        *self.counts.entry(phrase).or_insert(0) += 1;
    }

    pub fn count(&self, phrase: &str) -> u32 {
        self.counts.get(phrase).copied().unwrap_or(0)
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.counts.contains_key(phrase)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(p, c)| (p.as_str(), *c))
    }
}

impl<S: Into<String>> FromIterator<S> for CandidateTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = Self::new();
        for phrase in iter {
            table.record(phrase);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_skips_empty() {
        let table: CandidateTable = ["python", "", "python", "docker"].into_iter().collect();
        assert_eq!(table.len(), 2);
        assert_eq!(table.count("python"), 2);
        assert_eq!(table.count("docker"), 1);
        assert_eq!(table.count("rust"), 0);
        assert!(!table.contains(""));
    }
}
