use async_trait::async_trait;
use finpre_common::{FinpreConfig, Presentation, Slide};
use finpre_gemini::{GeminiClient, GenerationError};

/// Seam between the engine and the remote generation service.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn generate(&self, topic: &str) -> Result<Presentation, GenerationError>;
}

/// Production backend wrapping the Gemini structured-output client.
pub struct GeminiBackend {
    inner: GeminiClient,
}

impl GeminiBackend {
    pub fn new(api_key: String) -> Self {
        Self {
            inner: GeminiClient::new(api_key),
        }
    }

    pub fn new_with_model(api_key: String, model: String) -> Self {
        Self {
            inner: GeminiClient::new_with_model(api_key, model),
        }
    }

    pub fn from_config(config: &FinpreConfig) -> Result<Self, GenerationError> {
        Ok(Self {
            inner: GeminiClient::from_config(config)?,
        })
    }
}

#[async_trait]
impl GenerationClient for GeminiBackend {
    async fn generate(&self, topic: &str) -> Result<Presentation, GenerationError> {
        self.inner.generate(topic).await
    }
}

/// A very small offline client for testing the flow.
pub struct StubClient;

#[async_trait]
impl GenerationClient for StubClient {
    async fn generate(&self, topic: &str) -> Result<Presentation, GenerationError> {
        Ok(Presentation {
            topic: topic.to_string(),
            total_duration: "45 mins".to_string(),
            slides: vec![
                Slide {
                    title: format!("Introduction: {topic}"),
                    bullet_points: vec![
                        "Context and framing".to_string(),
                        "Agenda for the session".to_string(),
                    ],
                    speaker_notes: "Welcome the audience and set up the question.".to_string(),
                    visual_suggestion: "Title card with topic headline".to_string(),
                    estimated_duration: "3 mins".to_string(),
                },
                Slide {
                    title: "Conclusion".to_string(),
                    bullet_points: vec!["Key takeaways".to_string()],
                    speaker_notes: "Summarize and open the floor for questions.".to_string(),
                    visual_suggestion: "Summary table of findings".to_string(),
                    estimated_duration: "2 mins".to_string(),
                },
            ],
        })
    }
}
