use serde::{Deserialize, Serialize};

/// One token-level prediction as produced by a token-classification model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPrediction {
    pub entity: String,
    pub score: f32,
    pub word: String,
    /// Position of the sub-token in the model's tokenization.
    #[serde(default)]
    pub index: Option<usize>,
    #[serde(default)]
    pub start: Option<usize>,
    #[serde(default)]
    pub end: Option<usize>,
}

/// A whole entity after word pieces have been merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub entity_group: String,
    pub word: String,
    pub score: f32,
    #[serde(default)]
    pub start: Option<usize>,
    #[serde(default)]
    pub end: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagPosition {
    Begin,
    Inside,
}

fn split_tag(entity: &str) -> (TagPosition, &str) {
    if let Some(label) = entity.strip_prefix("B-") {
        (TagPosition::Begin, label)
    } else if let Some(label) = entity.strip_prefix("I-") {
        (TagPosition::Inside, label)
    } else {
        (TagPosition::Inside, entity)
    }
}

struct Group<'t> {
    label: &'t str,
    tokens: Vec<&'t TokenPrediction>,
}

impl<'t> Group<'t> {
    fn into_span(self, text: &str) -> EntitySpan {
        let start = self.tokens.first().and_then(|t| t.start);
        let end = self.tokens.last().and_then(|t| t.end);

        let word = match (start, end) {
            (Some(s), Some(e)) => char_slice(text, s, e).map(str::to_string),
            _ => None,
        }
        .unwrap_or_else(|| join_pieces(&self.tokens));

        let score =
            self.tokens.iter().map(|t| t.score).sum::<f32>() / self.tokens.len() as f32;

        EntitySpan {
            entity_group: self.label.to_string(),
            word,
            score,
            start,
            end,
        }
    }
}

/// Whether `next` directly follows `prev` in the source text.
///
/// Hosted pipelines omit `O` tokens from their output, so two predictions
/// listed next to each other may still be words apart.
fn adjacent(text: &str, prev: &TokenPrediction, next: &TokenPrediction) -> bool {
    if let (Some(a), Some(b)) = (prev.index, next.index) {
        return b == a + 1;
    }
    match (prev.end, next.start) {
        (Some(end), Some(start)) if start >= end => text
            .chars()
            .skip(end)
            .take(start - end)
            .all(char::is_whitespace),
        (Some(_), Some(_)) => false,
        _ => true,
    }
}

/// Groups token predictions into entity spans.
///
/// Adjacent tokens sharing a label are merged unless the next token opens
/// a new entity with a `B-` tag. Word pieces (`##...`) always continue the
/// current group, so no span starts in the middle of a word. Groups labelled
/// `O` are dropped. When offsets are present the span text is cut from
/// `text` (character offsets), otherwise the pieces are re-joined.
pub fn aggregate_simple(text: &str, tokens: &[TokenPrediction]) -> Vec<EntitySpan> {
    let mut groups: Vec<Group<'_>> = Vec::new();

    for token in tokens {
        let (position, label) = split_tag(&token.entity);
        let is_piece = token.word.starts_with("##");

        let continues = groups.last().is_some_and(|group| {
            is_piece
                || (group.label == label
                    && position == TagPosition::Inside
                    && group
                        .tokens
                        .last()
                        .is_some_and(|prev| adjacent(text, prev, token)))
        });

        match groups.last_mut() {
            Some(group) if continues => group.tokens.push(token),
            _ => groups.push(Group {
                label,
                tokens: vec![token],
            }),
        }
    }

    groups
        .into_iter()
        .filter(|g| g.label != "O")
        .map(|g| g.into_span(text))
        .collect()
}

fn join_pieces(tokens: &[&TokenPrediction]) -> String {
    let mut word = String::new();
    for token in tokens {
        match token.word.strip_prefix("##") {
            Some(piece) => word.push_str(piece),
            None => {
                if !word.is_empty() {
                    word.push(' ');
                }
                word.push_str(&token.word);
            }
        }
    }
    word
}

/// Slices `text` by character offsets.
fn char_slice(text: &str, start: usize, end: usize) -> Option<&str> {
    if start >= end {
        return None;
    }
    let mut indices = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()));
    let from = indices.nth(start)?;
    let to = indices.nth(end - start - 1)?;
    Some(&text[from..to])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(entity: &str, word: &str, start: usize, end: usize) -> TokenPrediction {
        TokenPrediction {
            entity: entity.to_string(),
            score: 0.9,
            word: word.to_string(),
            index: None,
            start: Some(start),
            end: Some(end),
        }
    }

    #[test]
    fn test_merges_word_pieces() {
        let text = "Worked at Databricks on Spark";
        let tokens = vec![
            token("B-ORG", "Data", 10, 14),
            token("I-ORG", "##bri", 14, 17),
            token("I-ORG", "##cks", 17, 20),
            token("O", "on", 21, 23),
            token("B-MISC", "Spark", 24, 29),
        ];

        let spans = aggregate_simple(text, &tokens);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].word, "Databricks");
        assert_eq!(spans[0].entity_group, "ORG");
        assert_eq!(spans[1].word, "Spark");
        assert_eq!(spans[1].entity_group, "MISC");
    }

    #[test]
    fn test_piece_never_starts_span() {
        let text = "PyTorch";
        let tokens = vec![
            token("B-MISC", "Py", 0, 2),
            token("B-MISC", "##Tor", 2, 5),
            token("B-MISC", "##ch", 5, 7),
        ];

        let spans = aggregate_simple(text, &tokens);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].word, "PyTorch");
    }

    #[test]
    fn test_begin_tag_splits_adjacent_entities() {
        let text = "Google Amazon";
        let tokens = vec![
            token("B-ORG", "Google", 0, 6),
            token("B-ORG", "Amazon", 7, 13),
        ];

        let spans = aggregate_simple(text, &tokens);
        let words: Vec<_> = spans.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words, vec!["Google", "Amazon"]);
    }

    #[test]
    fn test_multi_word_entity_uses_text_offsets() {
        let text = "at Microsoft  Azure";
        let tokens = vec![
            token("B-ORG", "Microsoft", 3, 12),
            token("I-ORG", "Azure", 14, 19),
        ];

        let spans = aggregate_simple(text, &tokens);
        assert_eq!(spans[0].word, "Microsoft  Azure");
    }

    #[test]
    fn test_joins_pieces_without_offsets() {
        let tokens = vec![
            TokenPrediction {
                entity: "B-ORG".to_string(),
                score: 0.8,
                word: "Open".to_string(),
                index: None,
                start: None,
                end: None,
            },
            TokenPrediction {
                entity: "I-ORG".to_string(),
                score: 0.6,
                word: "##AI".to_string(),
                index: None,
                start: None,
                end: None,
            },
        ];

        let spans = aggregate_simple("", &tokens);
        assert_eq!(spans[0].word, "OpenAI");
        assert!((spans[0].score - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_char_offsets_with_multibyte_text() {
        let text = "Café Zürich";
        let tokens = vec![token("B-LOC", "Zürich", 5, 11)];
        let spans = aggregate_simple(text, &tokens);
        assert_eq!(spans[0].word, "Zürich");
    }

    #[test]
    fn test_gap_without_outside_tokens_splits_entities() {
        let text = "Python and Docker";
        let tokens = vec![
            token("I-MISC", "Python", 0, 6),
            token("I-MISC", "Docker", 11, 17),
        ];

        let spans = aggregate_simple(text, &tokens);
        let words: Vec<_> = spans.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words, vec!["Python", "Docker"]);
    }

    #[test]
    fn test_token_index_decides_adjacency() {
        let indexed = |entity: &str, word: &str, index: usize| TokenPrediction {
            entity: entity.to_string(),
            score: 0.9,
            word: word.to_string(),
            index: Some(index),
            start: None,
            end: None,
        };
        let tokens = vec![
            indexed("I-ORG", "Red", 3),
            indexed("I-ORG", "Hat", 4),
            indexed("I-ORG", "IBM", 7),
        ];

        let spans = aggregate_simple("", &tokens);
        let words: Vec<_> = spans.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words, vec!["Red Hat", "IBM"]);
    }

    #[test]
    fn test_outside_tokens_are_dropped() {
        let tokens = vec![token("O", "hello", 0, 5)];
        assert!(aggregate_simple("hello", &tokens).is_empty());
    }
}
