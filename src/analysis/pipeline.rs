use once_cell::unsync::OnceCell;
use std::path::Path;

use crate::analysis::candidates::generate_candidates;
use crate::analysis::categorizer::Categorizer;
use crate::analysis::skill_filter::SkillFilter;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::extract::TextExtractor;
use crate::models::ExtractionReport;
use crate::nlp::{AnnotatorLoader, EntityRecognizer, NounPhraseChunker};
use crate::taxonomy::SkillVocabulary;

/// Document -> text -> candidates -> skills -> categories, in one pass.
///
/// Annotators are loaded on first use and reused for every later document.
/// The pipeline is single-threaded; run one pipeline per thread if documents
/// must be processed concurrently.
pub struct SkillPipeline {
    extractor: Box<dyn TextExtractor>,
    loader: Box<dyn AnnotatorLoader>,
    recognizer: OnceCell<Box<dyn EntityRecognizer>>,
    chunker: OnceCell<Box<dyn NounPhraseChunker>>,
    vocabulary: SkillVocabulary,
    config: PipelineConfig,
}

impl SkillPipeline {
    pub fn new(
        extractor: impl TextExtractor + 'static,
        loader: impl AnnotatorLoader + 'static,
        vocabulary: SkillVocabulary,
        config: PipelineConfig,
    ) -> Self {
        Self {
            extractor: Box::new(extractor),
            loader: Box::new(loader),
            recognizer: OnceCell::new(),
            chunker: OnceCell::new(),
            vocabulary,
            config,
        }
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    pub fn analyze_document(&self, path: &Path) -> Result<ExtractionReport> {
        tracing::info!("Analyzing {}", path.display());
        let text = self.extractor.extract_text(path)?;
        self.analyze_text(&text)
    }

    pub fn analyze_text(&self, text: &str) -> Result<ExtractionReport> {
        let recognizer = self.recognizer()?;
        let chunker = self.chunker()?;

        let candidates = generate_candidates(text, recognizer, chunker, &self.config)?;
        let skills = SkillFilter::new(self.vocabulary.flat()).filter(&candidates);
        let categorized = Categorizer::new(&self.vocabulary).categorize(&skills);

        Ok(ExtractionReport::new(skills, categorized))
    }

    fn recognizer(&self) -> Result<&dyn EntityRecognizer> {
        self.recognizer
            .get_or_try_init(|| self.loader.load_recognizer())
            .map(|r| &**r)
    }

    fn chunker(&self) -> Result<&dyn NounPhraseChunker> {
        self.chunker
            .get_or_try_init(|| self.loader.load_chunker())
            .map(|c| &**c)
    }
}
