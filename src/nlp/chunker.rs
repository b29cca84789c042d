use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::nlp::annotator::NounPhraseChunker;

/// Words keep inner `.`, `-`, `/` and `'` joints (`node.js`, `ci/cd`) and
/// trailing `+`/`#` (`c++`, `c#`). Any other non-space character is its own
/// token.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:[.\-/'][\p{L}\p{N}]+)*[+#]*|\S")
        .expect("token pattern is valid")
});

/// Universal part-of-speech tags understood by the lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Verb,
}

impl PosTag {
    fn is_nominal(self) -> bool {
        matches!(self, PosTag::Noun | PosTag::Propn)
    }

    /// Tags allowed inside a chunk before its head noun.
    fn is_modifier(self) -> bool {
        matches!(self, PosTag::Adj | PosTag::Num) || self.is_nominal()
    }
}

impl FromStr for PosTag {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let tag = match s.to_uppercase().as_str() {
            "ADJ" => PosTag::Adj,
            "ADP" => PosTag::Adp,
            "ADV" => PosTag::Adv,
            "AUX" => PosTag::Aux,
            "CCONJ" | "CONJ" => PosTag::Cconj,
            "DET" => PosTag::Det,
            "INTJ" => PosTag::Intj,
            "NOUN" => PosTag::Noun,
            "NUM" => PosTag::Num,
            "PART" => PosTag::Part,
            "PRON" => PosTag::Pron,
            "PROPN" => PosTag::Propn,
            "PUNCT" => PosTag::Punct,
            "SCONJ" => PosTag::Sconj,
            "VERB" => PosTag::Verb,
            other => return Err(format!("unknown part-of-speech tag {:?}", other)),
        };
        Ok(tag)
    }
}

/// Word -> tag table read from a `word<TAB>TAG` file.
#[derive(Debug, Clone, Default)]
pub struct PosLexicon {
    tags: HashMap<String, PosTag>,
}

impl PosLexicon {
    pub fn parse(content: &str) -> Result<Self> {
        let mut tags = HashMap::new();

        for (lineno, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (word, tag) = line.split_once('\t').ok_or_else(|| {
                Error::ModelLoad(format!("lexicon line {}: expected word<TAB>tag", lineno + 1))
            })?;

            let tag: PosTag = tag
                .trim()
                .parse()
                .map_err(|e| Error::ModelLoad(format!("lexicon line {}: {}", lineno + 1, e)))?;

            tags.insert(word.trim().to_lowercase(), tag);
        }

        if tags.is_empty() {
            return Err(Error::ModelLoad("lexicon has no entries".to_string()));
        }

        Ok(Self { tags })
    }

    pub fn tag(&self, word: &str) -> PosTag {
        let lower = word.to_lowercase();
        if let Some(tag) = self.tags.get(&lower) {
            return *tag;
        }
        if !word.chars().next().is_some_and(char::is_alphanumeric) {
            return PosTag::Punct;
        }
        if lower.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
            return PosTag::Num;
        }
        if lower.len() > 5 && lower.ends_with("ed") {
            return PosTag::Verb;
        }
        PosTag::Noun
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
struct Token {
    start: usize,
    end: usize,
    tag: PosTag,
}

/// Rule-based noun-phrase chunker.
///
/// A chunk is an optional determiner followed by a run of adjectives,
/// numbers and nouns ending in a noun. Punctuation, other tags and line
/// breaks end a run.
pub struct LexiconChunker {
    lexicon: PosLexicon,
}

impl LexiconChunker {
    pub fn new(lexicon: PosLexicon) -> Self {
        Self { lexicon }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let lexicon = PosLexicon::parse(&content)?;
        tracing::info!(
            "Loaded part-of-speech lexicon with {} entries from {}",
            lexicon.len(),
            path.display()
        );
        Ok(Self::new(lexicon))
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        TOKEN_RE
            .find_iter(text)
            .map(|m| Token {
                start: m.start(),
                end: m.end(),
                tag: self.lexicon.tag(m.as_str()),
            })
            .collect()
    }

    /// Byte ranges of every noun chunk in `text`.
    fn chunk_spans(&self, text: &str) -> Vec<(usize, usize)> {
        let tokens = self.tokenize(text);
        let mut spans = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            if !tokens[i].tag.is_modifier() {
                i += 1;
                continue;
            }

            let run_start = i;
            let mut run_end = i + 1;
            while run_end < tokens.len()
                && tokens[run_end].tag.is_modifier()
                && !line_break_between(text, &tokens[run_end - 1], &tokens[run_end])
            {
                run_end += 1;
            }

            // The head is the last noun of the run; trailing modifiers drop out.
            if let Some(head) = (run_start..run_end).rev().find(|&k| tokens[k].tag.is_nominal()) {
                let first = match run_start.checked_sub(1) {
                    Some(prev)
                        if tokens[prev].tag == PosTag::Det
                            && !line_break_between(text, &tokens[prev], &tokens[run_start]) =>
                    {
                        prev
                    }
                    _ => run_start,
                };
                spans.push((tokens[first].start, tokens[head].end));
            }

            i = run_end;
        }

        spans
    }
}

fn line_break_between(text: &str, left: &Token, right: &Token) -> bool {
    text[left.end..right.start].contains('\n')
}

impl NounPhraseChunker for LexiconChunker {
    fn noun_phrases(&self, text: &str) -> Result<Vec<String>> {
        let phrases: Vec<String> = self
            .chunk_spans(text)
            .into_iter()
            .map(|(start, end)| text[start..end].to_string())
            .collect();

        tracing::info!("Chunker found {} noun phrases", phrases.len());
        Ok(phrases)
    }

    fn name(&self) -> &str {
        "lexicon-chunker"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::resource::BUNDLED_LEXICON;

    fn chunker() -> LexiconChunker {
        LexiconChunker::new(PosLexicon::parse(BUNDLED_LEXICON).unwrap())
    }

    #[test]
    fn test_bundled_lexicon_parses() {
        let lexicon = PosLexicon::parse(BUNDLED_LEXICON).unwrap();
        assert!(lexicon.len() > 300);
        assert_eq!(lexicon.tag("the"), PosTag::Det);
        assert_eq!(lexicon.tag("With"), PosTag::Adp);
    }

    #[test]
    fn test_fallback_tags() {
        let lexicon = PosLexicon::parse("the\tDET\n").unwrap();
        assert_eq!(lexicon.tag("kubernetes"), PosTag::Noun);
        assert_eq!(lexicon.tag("2019"), PosTag::Num);
        assert_eq!(lexicon.tag(","), PosTag::Punct);
        assert_eq!(lexicon.tag("containerized"), PosTag::Verb);
    }

    #[test]
    fn test_rejects_bad_lexicon() {
        assert!(PosLexicon::parse("word NOUN\n").is_err());
        assert!(PosLexicon::parse("word\tNOPE\n").is_err());
        assert!(PosLexicon::parse("# only comments\n").is_err());
    }

    #[test]
    fn test_skill_sentence() {
        let phrases = chunker()
            .noun_phrases("I have experience with Python, Docker, and React development")
            .unwrap();
        assert_eq!(
            phrases,
            vec!["experience", "Python", "Docker", "React development"]
        );
    }

    #[test]
    fn test_determiner_joins_chunk() {
        let phrases = chunker()
            .noun_phrases("Led the data engineering team.")
            .unwrap();
        assert_eq!(phrases, vec!["the data engineering team"]);
    }

    #[test]
    fn test_trailing_adjective_is_dropped() {
        let phrases = chunker().noun_phrases("Skills are strong").unwrap();
        assert_eq!(phrases, vec!["Skills"]);
    }

    #[test]
    fn test_technical_tokens_stay_whole() {
        let phrases = chunker()
            .noun_phrases("Languages: C++, C#, node.js and scikit-learn")
            .unwrap();
        assert_eq!(phrases, vec!["Languages", "C++", "C#", "node.js", "scikit-learn"]);
    }

    #[test]
    fn test_line_breaks_end_chunks() {
        let phrases = chunker().noun_phrases("Python\nDocker").unwrap();
        assert_eq!(phrases, vec!["Python", "Docker"]);
    }
}
