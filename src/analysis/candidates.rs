use crate::config::PipelineConfig;
use crate::error::Result;
use crate::models::CandidateTable;
use crate::nlp::{EntityRecognizer, NounPhraseChunker};

/// Characters stripped from both ends of a phrase.
const EDGE_CHARS: &[char] = &[
    ' ', '\n', '\r', '\t', ',', ';', ':', '-', '–', '—', '(', ')', '[', ']', '{', '}',
];

/// Collapses whitespace runs, strips edge punctuation and lower-cases.
pub fn normalize_phrase(phrase: &str) -> String {
    let collapsed = phrase.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.trim_matches(EDGE_CHARS).to_lowercase()
}

/// Runs both annotators over `text` and counts the normalized phrases.
///
/// Noun phrases outside the configured word-count bounds are discarded.
pub fn generate_candidates(
    text: &str,
    recognizer: &dyn EntityRecognizer,
    chunker: &dyn NounPhraseChunker,
    config: &PipelineConfig,
) -> Result<CandidateTable> {
    let entities = recognizer.recognize(text)?;
    let entity_phrases = entities.iter().map(|e| normalize_phrase(&e.word));

    let noun_phrases = chunker.noun_phrases(text)?;
    let kept_phrases: Vec<String> = noun_phrases
        .iter()
        .filter(|p| {
            let words = p.split_whitespace().count();
            words >= config.min_phrase_words && words <= config.max_phrase_words
        })
        .map(|p| normalize_phrase(p))
        .collect();

    tracing::debug!(
        "{} entities, {} of {} noun phrases kept",
        entities.len(),
        kept_phrases.len(),
        noun_phrases.len()
    );

    let table: CandidateTable = entity_phrases.chain(kept_phrases).collect();
    tracing::info!("Generated {} distinct candidate phrases", table.len());
    Ok(table)
}
