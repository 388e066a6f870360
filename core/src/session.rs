use finpre_common::{Presentation, Slide};

/// Shown when a failure carries no usable message of its own. Deliberately
/// does not name a cause the failure may not have had.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to generate presentation.";

/// Status of the viewer. The deck and the error message live inside their
/// variants, so a Complete state without a deck (or an Error without a
/// message) cannot be represented.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorStatus {
    Idle,
    Generating,
    Complete(Presentation),
    Error(String),
}

impl GeneratorStatus {
    pub fn is_generating(&self) -> bool {
        matches!(self, GeneratorStatus::Generating)
    }

    pub fn presentation(&self) -> Option<&Presentation> {
        match self {
            GeneratorStatus::Complete(deck) => Some(deck),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            GeneratorStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// The single mutable state behind the viewer: topic text, status, and the
/// selected slide. Mutated only by the event handlers below, on one thread.
#[derive(Debug)]
pub struct ViewSession {
    topic: String,
    status: GeneratorStatus,
    current_slide: usize,
}

impl ViewSession {
    pub fn new(topic: String) -> Self {
        Self {
            topic,
            status: GeneratorStatus::Idle,
            current_slide: 0,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn status(&self) -> &GeneratorStatus {
        &self.status
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    /// The topic stays editable in every state except Generating.
    pub fn set_topic(&mut self, topic: String) -> bool {
        if self.status.is_generating() {
            return false;
        }
        self.topic = topic;
        true
    }

    /// Whether a submission would fire right now.
    pub fn can_submit(&self) -> bool {
        !self.status.is_generating() && !self.topic.trim().is_empty()
    }

    /// Idle/Complete/Error + submit -> Generating, clearing any prior error.
    /// A blank topic or an in-flight run makes this a no-op, so at most one
    /// generation is ever outstanding.
    pub fn begin_generation(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.status = GeneratorStatus::Generating;
        true
    }

    /// Generating + success -> Complete, viewing the first slide.
    pub fn complete(&mut self, deck: Presentation) {
        if !self.status.is_generating() {
            return;
        }
        self.status = GeneratorStatus::Complete(deck);
        self.current_slide = 0;
    }

    /// Generating + failure -> Error. Prefers the failure's own text.
    pub fn fail(&mut self, message: String) {
        if !self.status.is_generating() {
            return;
        }
        let message = if message.trim().is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            message
        };
        self.status = GeneratorStatus::Error(message);
    }

    /// Complete + select slide i -> Complete with only the index changed.
    /// Out-of-range indices and other states are ignored.
    pub fn select_slide(&mut self, index: usize) -> bool {
        match self.status.presentation() {
            Some(deck) if index < deck.slide_count() => {
                self.current_slide = index;
                true
            }
            _ => false,
        }
    }

    pub fn select_next_slide(&mut self) -> bool {
        self.select_slide(self.current_slide.saturating_add(1))
    }

    pub fn select_prev_slide(&mut self) -> bool {
        if self.current_slide == 0 {
            return false;
        }
        self.select_slide(self.current_slide - 1)
    }

    pub fn select_last_slide(&mut self) -> bool {
        match self.status.presentation() {
            Some(deck) => self.select_slide(deck.slide_count().saturating_sub(1)),
            None => false,
        }
    }

    pub fn selected_slide(&self) -> Option<&Slide> {
        self.status
            .presentation()
            .and_then(|deck| deck.slides.get(self.current_slide))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(k: usize) -> Presentation {
        Presentation {
            topic: "X".to_string(),
            total_duration: "45 mins".to_string(),
            slides: (0..k)
                .map(|i| Slide {
                    title: format!("Slide {i}"),
                    bullet_points: vec![format!("point {i}")],
                    speaker_notes: format!("notes {i}"),
                    visual_suggestion: format!("chart {i}"),
                    estimated_duration: "3 mins".to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn submit_fires_once_from_idle_complete_and_error() {
        let mut session = ViewSession::new("Topic".to_string());
        assert!(session.begin_generation());
        assert!(session.status().is_generating());

        // Second submit while Generating is a no-op.
        assert!(!session.begin_generation());
        assert!(session.status().is_generating());

        session.complete(deck(3));
        assert!(session.begin_generation());

        session.fail("boom".to_string());
        assert!(session.begin_generation());
    }

    #[test]
    fn blank_topic_never_changes_state() {
        let mut session = ViewSession::new(String::new());
        assert!(!session.begin_generation());
        assert_eq!(*session.status(), GeneratorStatus::Idle);

        session.set_topic("   \n\t".to_string());
        assert!(!session.begin_generation());
        assert_eq!(*session.status(), GeneratorStatus::Idle);
    }

    #[test]
    fn success_lands_on_first_slide() {
        let mut session = ViewSession::new("Topic".to_string());
        session.begin_generation();
        session.select_slide(2); // no deck yet, ignored
        session.complete(deck(5));
        assert_eq!(session.current_slide(), 0);
        assert_eq!(
            session.selected_slide().map(|s| s.title.as_str()),
            Some("Slide 0")
        );
    }

    #[test]
    fn failure_replaces_deck_visibility_with_an_error() {
        let mut session = ViewSession::new("Topic".to_string());
        session.begin_generation();
        session.complete(deck(2));

        session.begin_generation();
        session.fail("transport failed".to_string());
        assert_eq!(session.status().error_message(), Some("transport failed"));
        // The previously shown deck is no longer visible.
        assert!(session.status().presentation().is_none());
        assert!(session.selected_slide().is_none());
    }

    #[test]
    fn empty_failure_message_gets_the_generic_fallback() {
        let mut session = ViewSession::new("Topic".to_string());
        session.begin_generation();
        session.fail("  ".to_string());
        assert_eq!(
            session.status().error_message(),
            Some(FALLBACK_ERROR_MESSAGE)
        );
    }

    #[test]
    fn slide_selection_changes_only_the_index() {
        let mut session = ViewSession::new("Topic".to_string());
        session.begin_generation();
        session.complete(deck(4));
        let before = session.status().presentation().cloned();

        assert!(session.select_slide(3));
        assert_eq!(session.current_slide(), 3);
        assert_eq!(session.status().presentation().cloned(), before);
        assert_eq!(session.topic(), "Topic");

        // Out of range is ignored.
        assert!(!session.select_slide(4));
        assert_eq!(session.current_slide(), 3);
    }

    #[test]
    fn reselecting_the_same_slide_is_idempotent() {
        let mut session = ViewSession::new("Topic".to_string());
        session.begin_generation();
        session.complete(deck(3));
        session.select_slide(1);
        let topic_before = session.topic().to_string();
        let deck_before = session.status().presentation().cloned();

        assert!(session.select_slide(1));
        assert_eq!(session.current_slide(), 1);
        assert_eq!(session.topic(), topic_before);
        assert_eq!(session.status().presentation().cloned(), deck_before);
    }

    #[test]
    fn stepwise_navigation_stays_in_range() {
        let mut session = ViewSession::new("Topic".to_string());
        session.begin_generation();
        session.complete(deck(2));

        assert!(!session.select_prev_slide());
        assert!(session.select_next_slide());
        assert!(!session.select_next_slide());
        assert_eq!(session.current_slide(), 1);
        assert!(session.select_last_slide());
        assert_eq!(session.current_slide(), 1);
    }

    #[test]
    fn topic_is_frozen_while_generating() {
        let mut session = ViewSession::new("Topic".to_string());
        session.begin_generation();
        assert!(!session.set_topic("other".to_string()));
        assert_eq!(session.topic(), "Topic");

        session.fail("x".to_string());
        assert!(session.set_topic("other".to_string()));
        assert_eq!(session.topic(), "other");
    }

    #[test]
    fn completion_events_outside_generating_are_ignored() {
        let mut session = ViewSession::new("Topic".to_string());
        session.complete(deck(1));
        assert_eq!(*session.status(), GeneratorStatus::Idle);
        session.fail("late".to_string());
        assert_eq!(*session.status(), GeneratorStatus::Idle);
    }
}
