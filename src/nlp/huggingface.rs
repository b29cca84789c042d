use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::nlp::annotator::EntityRecognizer;
use crate::nlp::batcher::TextBatcher;
use crate::nlp::entity::{aggregate_simple, EntitySpan, TokenPrediction};

/// Entity recognizer backed by a hosted token-classification model.
///
/// Requests token-level predictions and merges them locally with
/// [`aggregate_simple`].
pub struct HuggingFaceRecognizer {
    client: Client,
    endpoint: String,
    model: String,
    api_token: Option<String>,
    batcher: TextBatcher,
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
    options: InferenceOptions,
}

#[derive(Serialize)]
struct InferenceParameters {
    aggregation_strategy: &'static str,
}

#[derive(Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Tokens(Vec<TokenPrediction>),
    Error { error: String },
}

impl HuggingFaceRecognizer {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| Error::ModelLoad(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.ner_endpoint(),
            model: config.ner_model.clone(),
            api_token: config.hf_api_token.clone(),
            batcher: TextBatcher::new(config.ner_max_chars),
        })
    }

    fn infer_window(&self, window: &str) -> Result<Vec<TokenPrediction>> {
        let body = InferenceRequest {
            inputs: window,
            parameters: InferenceParameters {
                aggregation_strategy: "none",
            },
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(ref token) = self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .map_err(|e| Error::Annotation(format!("Failed to reach {}: {}", self.model, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Error::Annotation(format!(
                "Inference API error ({}) for {}: {}",
                status, self.model, body
            )));
        }

        let text = response.text()?;
        parse_inference_response(&text)
    }
}

fn parse_inference_response(body: &str) -> Result<Vec<TokenPrediction>> {
    let parsed: InferenceResponse = serde_json::from_str(body)
        .map_err(|e| Error::Annotation(format!("Unexpected inference response: {}", e)))?;

    match parsed {
        InferenceResponse::Tokens(tokens) => Ok(tokens),
        InferenceResponse::Error { error } => Err(Error::Annotation(error)),
    }
}

impl EntityRecognizer for HuggingFaceRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>> {
        let windows = self.batcher.windows(text);
        tracing::debug!(
            "Running {} over {} text window(s)",
            self.model,
            windows.len()
        );

        let mut spans = Vec::new();
        for window in windows {
            let tokens = self.infer_window(window)?;
            spans.extend(aggregate_simple(window, &tokens));
        }

        tracing::info!("{} recognized {} entities", self.model, spans.len());
        Ok(spans)
    }

    fn name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_response() {
        let body = r###"[
            {"entity": "B-ORG", "score": 0.99, "index": 1, "word": "Goo", "start": 0, "end": 3},
            {"entity": "I-ORG", "score": 0.97, "index": 2, "word": "##gle", "start": 3, "end": 6}
        ]"###;

        let tokens = parse_inference_response(body).unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].word, "##gle");
        assert_eq!(tokens[1].end, Some(6));
        assert_eq!(tokens[1].index, Some(2));

        let spans = aggregate_simple("Google", &tokens);
        assert_eq!(spans[0].word, "Google");
    }

    #[test]
    fn test_parse_error_response() {
        let body = r#"{"error": "Model dslim/bert-base-NER is currently loading"}"#;
        let err = parse_inference_response(body).unwrap_err();
        assert!(matches!(err, Error::Annotation(ref m) if m.contains("currently loading")));
    }

    #[test]
    fn test_parse_garbage_response() {
        assert!(parse_inference_response("<html>").is_err());
    }
}
