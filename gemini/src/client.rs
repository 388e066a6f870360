use finpre_common::{FinpreConfig, Presentation};
use tracing::{debug, warn};

use crate::error::GenerationError;
use crate::prompt::{build_prompt, response_schema};
use crate::wire::{GenerateContentRequest, GenerateContentResponse};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client for the Gemini `generateContent` endpoint. One `generate` call
/// issues exactly one request: no retry, no streaming.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    pub model: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self::new_with_model(api_key, FinpreConfig::default().model)
    }

    pub fn new_with_model(api_key: String, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model,
        }
    }

    /// Build a client from configuration, failing up front when no
    /// credential can be resolved.
    pub fn from_config(config: &FinpreConfig) -> Result<Self, GenerationError> {
        let api_key = config
            .resolve_api_key()
            .ok_or(GenerationError::MissingApiKey)?;
        Ok(Self::new_with_model(api_key, config.model.clone()))
    }

    /// Generate a full deck for `topic`. The service is constrained to
    /// schema-conforming JSON; any deviation is a hard failure.
    pub async fn generate(&self, topic: &str) -> Result<Presentation, GenerationError> {
        if self.api_key.trim().is_empty() {
            return Err(GenerationError::MissingApiKey);
        }

        let request = GenerateContentRequest::structured(build_prompt(topic), response_schema());
        let url = format!("{API_BASE}/models/{}:generateContent", self.model);
        debug!(model = %self.model, "requesting deck generation");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "generation request failed");
            return Err(GenerationError::Transport {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: GenerateContentResponse = response.json().await?;
        let text = envelope.text().ok_or(GenerationError::EmptyResponse)?;
        let deck = parse_presentation(&text)?;
        debug!(slides = deck.slide_count(), "deck generated");
        Ok(deck)
    }
}

/// Parse candidate text into a deck, rejecting malformed JSON, shape
/// mismatches, and slide-less decks.
pub fn parse_presentation(text: &str) -> Result<Presentation, GenerationError> {
    let deck: Presentation = serde_json::from_str(text)?;
    if deck.slides.is_empty() {
        return Err(GenerationError::EmptyDeck);
    }
    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DECK_JSON: &str = r#"{
        "topic": "X",
        "totalDuration": "45 mins",
        "slides": [
            {
                "title": "Intro",
                "bulletPoints": ["A", "B"],
                "speakerNotes": "Hello.",
                "visualSuggestion": "Bar chart of X",
                "estimatedDuration": "3 mins"
            }
        ]
    }"#;

    #[test]
    fn parses_conforming_deck_text() {
        let deck = parse_presentation(DECK_JSON).unwrap();
        assert_eq!(deck.topic, "X");
        assert_eq!(deck.slide_count(), 1);
        assert_eq!(deck.slides[0].bullet_points, vec!["A", "B"]);
    }

    #[test]
    fn malformed_json_is_a_schema_error() {
        let err = parse_presentation("not json at all").unwrap_err();
        assert!(matches!(err, GenerationError::Schema(_)));
    }

    #[test]
    fn wrong_shape_is_a_schema_error() {
        let err = parse_presentation(r#"{"topic": "X"}"#).unwrap_err();
        assert!(matches!(err, GenerationError::Schema(_)));
    }

    #[test]
    fn empty_slide_list_is_rejected() {
        let err = parse_presentation(
            r#"{"topic": "X", "totalDuration": "45 mins", "slides": []}"#,
        )
        .unwrap_err();
        assert!(matches!(err, GenerationError::EmptyDeck));
    }

    #[test]
    fn blank_api_key_fails_before_any_network_io() {
        let client = GeminiClient::new(" ".to_string());
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let err = runtime.block_on(client.generate("topic")).unwrap_err();
        assert!(matches!(err, GenerationError::MissingApiKey));
    }
}
