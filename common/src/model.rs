use serde::{Deserialize, Serialize};

/// One unit of the deck. Every field is required text; the wire names are
/// part of the schema contract with the generation service and use
/// camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub title: String,
    /// Ordered; list order is presentation order.
    pub bullet_points: Vec<String>,
    /// The script for the presenter.
    pub speaker_notes: String,
    /// Description of an intended chart/image, never a rendered one.
    pub visual_suggestion: String,
    /// Free text, e.g. "3 mins". Never parsed numerically.
    pub estimated_duration: String,
}

/// The full structured output of one generation call. Immutable once
/// received; a new generation replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    pub topic: String,
    pub total_duration: String,
    pub slides: Vec<Slide>,
}

impl Presentation {
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}
