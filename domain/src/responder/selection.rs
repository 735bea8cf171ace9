//! Resolution of typed vs. preset question input

use super::presets::PresetQuestions;
use crate::core::question::Question;

/// What the user supplied in the Q&A panel
///
/// `typed` always takes precedence over `preset` when it is non-blank.
/// `preset` is a zero-based index into [`PresetQuestions`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionSelection {
    pub typed: Option<String>,
    pub preset: Option<usize>,
}

impl QuestionSelection {
    pub fn typed(text: impl Into<String>) -> Self {
        Self {
            typed: Some(text.into()),
            preset: None,
        }
    }

    pub fn preset(index: usize) -> Self {
        Self {
            typed: None,
            preset: Some(index),
        }
    }

    pub fn with_preset(mut self, index: usize) -> Self {
        self.preset = Some(index);
        self
    }

    /// Resolve to the question to dispatch, or `None` if nothing usable was given
    pub fn resolve(&self, presets: &PresetQuestions) -> Option<Question> {
        self.typed
            .as_deref()
            .and_then(Question::try_new)
            .or_else(|| {
                self.preset
                    .and_then(|index| presets.get(index))
                    .and_then(Question::try_new)
            })
    }
}
