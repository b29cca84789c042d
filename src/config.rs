use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_NER_MODEL: &str = "dslim/bert-base-NER";
pub const DEFAULT_INFERENCE_URL: &str = "https://router.huggingface.co/hf-inference/models";
pub const DEFAULT_CHUNKER_RESOURCE: &str = "en_pos_lexicon.tsv";

#[derive(Debug, Clone)]
pub struct Config {
    pub ner_model: String,
    pub inference_url: String,
    pub hf_api_token: Option<String>,
    pub ner_max_chars: usize,
    pub request_timeout_secs: u64,
    pub chunker_resource: String,
    pub resource_dir: PathBuf,
    pub resource_source_url: Option<String>,
    pub vocabulary_path: Option<PathBuf>,
    pub max_phrase_words: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let ner_model = env::var("NER_MODEL").unwrap_or_else(|_| DEFAULT_NER_MODEL.to_string());

        let inference_url = env::var("NER_INFERENCE_URL")
            .unwrap_or_else(|_| DEFAULT_INFERENCE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let hf_api_token = env::var("HF_API_TOKEN").ok().filter(|t| !t.is_empty());

        let ner_max_chars = env::var("NER_MAX_CHARS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2_000);

        if ner_max_chars == 0 {
            return Err(Error::Config("NER_MAX_CHARS must be positive".to_string()));
        }

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(120);

        let chunker_resource = env::var("CHUNKER_RESOURCE")
            .unwrap_or_else(|_| DEFAULT_CHUNKER_RESOURCE.to_string());

        let resource_dir = match env::var("RESOURCE_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => dirs::cache_dir()
                .map(|d| d.join("resume-skills"))
                .ok_or_else(|| {
                    Error::Config(
                        "No cache directory available; set RESOURCE_DIR".to_string(),
                    )
                })?,
        };

        let resource_source_url = env::var("RESOURCE_SOURCE_URL")
            .ok()
            .filter(|u| !u.is_empty());

        let vocabulary_path = env::var("SKILL_VOCABULARY").ok().map(PathBuf::from);

        let max_phrase_words = env::var("MAX_PHRASE_WORDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(4);

        if max_phrase_words == 0 {
            return Err(Error::Config("MAX_PHRASE_WORDS must be positive".to_string()));
        }

        Ok(Self {
            ner_model,
            inference_url,
            hf_api_token,
            ner_max_chars,
            request_timeout_secs,
            chunker_resource,
            resource_dir,
            resource_source_url,
            vocabulary_path,
            max_phrase_words,
        })
    }

    /// Full inference endpoint for the configured entity model.
    pub fn ner_endpoint(&self) -> String {
        format!("{}/{}", self.inference_url, self.ner_model)
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub min_phrase_words: usize,
    pub max_phrase_words: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_phrase_words: 1,
            max_phrase_words: 4,
        }
    }
}

impl From<&Config> for PipelineConfig {
    fn from(config: &Config) -> Self {
        Self {
            min_phrase_words: 1,
            max_phrase_words: config.max_phrase_words,
        }
    }
}
