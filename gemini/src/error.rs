use thiserror::Error;

/// Failure modes of a single generation call. Each one is terminal for the
/// attempt: there is no retry and no partial result.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// Credential absent; detected before any network call is issued.
    #[error("No API key configured. Set GEMINI_API_KEY or run 'finpre login --api-key <your-key>'")]
    MissingApiKey,

    /// The HTTP request itself failed (connect, TLS, timeout, decode).
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("generation service returned HTTP {status}: {message}")]
    Transport { status: u16, message: String },

    /// A 200 response that carried no candidate text.
    #[error("generation service returned no text payload")]
    EmptyResponse,

    /// The returned text failed to parse as a deck of the declared shape.
    #[error("response did not match the expected presentation shape: {0}")]
    Schema(#[from] serde_json::Error),

    /// Structurally valid JSON, but zero slides.
    #[error("response contained an empty slide list")]
    EmptyDeck,
}

impl GenerationError {
    /// True when fixing configuration, not retrying, is the remedy.
    pub fn is_configuration(&self) -> bool {
        matches!(self, GenerationError::MissingApiKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_nonempty_and_specific() {
        let missing = GenerationError::MissingApiKey;
        assert!(missing.to_string().contains("GEMINI_API_KEY"));
        assert!(missing.is_configuration());

        let transport = GenerationError::Transport {
            status: 429,
            message: "quota exceeded".to_string(),
        };
        assert!(transport.to_string().contains("429"));
        assert!(transport.to_string().contains("quota exceeded"));
        assert!(!transport.is_configuration());

        let empty = GenerationError::EmptyResponse;
        assert!(!empty.to_string().is_empty());
    }
}
