pub mod analysis;
pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod nlp;
pub mod output;
pub mod taxonomy;

pub use analysis::SkillPipeline;
pub use config::{Config, PipelineConfig};
pub use error::{Error, ErrorKind, Result};
pub use extract::{DocumentExtractor, TextExtractor};
pub use models::{CategorizedResult, CategorizedSkill, ExtractionReport};
pub use nlp::{AnnotatorLoader, DefaultAnnotatorLoader, EntityRecognizer, NounPhraseChunker};
pub use taxonomy::{FlatSkillSet, SkillVocabulary};
