use crate::error::Result;
use crate::nlp::entity::EntitySpan;

/// Named-entity recognizer over free text.
///
/// Implementations must return whole entities: word pieces of one entity are
/// merged before they are returned.
pub trait EntityRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>>;
    fn name(&self) -> &str;
}

/// Noun-phrase chunker returning the surface text of every chunk.
pub trait NounPhraseChunker {
    fn noun_phrases(&self, text: &str) -> Result<Vec<String>>;
    fn name(&self) -> &str;
}

/// Builds the two annotators. Loading is expensive, so callers load once and
/// reuse the result.
pub trait AnnotatorLoader {
    fn load_recognizer(&self) -> Result<Box<dyn EntityRecognizer>>;
    fn load_chunker(&self) -> Result<Box<dyn NounPhraseChunker>>;
}
