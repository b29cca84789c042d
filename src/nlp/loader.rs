use std::time::Duration;

use crate::config::Config;
use crate::error::Result;
use crate::nlp::annotator::{AnnotatorLoader, EntityRecognizer, NounPhraseChunker};
use crate::nlp::chunker::LexiconChunker;
use crate::nlp::huggingface::HuggingFaceRecognizer;
use crate::nlp::resource::{load_with_fetch, CacheDirProvider, ResourceProvider};

/// Production loader: hosted entity model plus lexicon chunker whose
/// resource comes from a [`ResourceProvider`].
pub struct DefaultAnnotatorLoader {
    config: Config,
    provider: Box<dyn ResourceProvider>,
}

impl DefaultAnnotatorLoader {
    pub fn new(config: Config) -> Self {
        let provider = CacheDirProvider::new(
            config.resource_dir.clone(),
            config.resource_source_url.clone(),
        )
        .with_timeout(Duration::from_secs(config.request_timeout_secs));

        Self::with_provider(config, provider)
    }

    pub fn with_provider(config: Config, provider: impl ResourceProvider + 'static) -> Self {
        Self {
            config,
            provider: Box::new(provider),
        }
    }
}

impl AnnotatorLoader for DefaultAnnotatorLoader {
    fn load_recognizer(&self) -> Result<Box<dyn EntityRecognizer>> {
        tracing::info!("Loading entity recognizer {}", self.config.ner_model);
        Ok(Box::new(HuggingFaceRecognizer::new(&self.config)?))
    }

    fn load_chunker(&self) -> Result<Box<dyn NounPhraseChunker>> {
        tracing::info!("Loading noun-phrase chunker {}", self.config.chunker_resource);
        let chunker = load_with_fetch(
            self.provider.as_ref(),
            &self.config.chunker_resource,
            LexiconChunker::from_path,
        )?;
        Ok(Box::new(chunker))
    }
}
