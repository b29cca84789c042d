pub mod annotator;
pub mod batcher;
pub mod chunker;
pub mod entity;
pub mod huggingface;
pub mod loader;
pub mod resource;

pub use annotator::{AnnotatorLoader, EntityRecognizer, NounPhraseChunker};
pub use batcher::TextBatcher;
pub use chunker::{LexiconChunker, PosLexicon, PosTag};
pub use entity::{aggregate_simple, EntitySpan, TokenPrediction};
pub use huggingface::HuggingFaceRecognizer;
pub use loader::DefaultAnnotatorLoader;
pub use resource::{load_with_fetch, CacheDirProvider, ResourceProvider};
