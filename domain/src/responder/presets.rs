//! Preset question list offered alongside free-text input

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Fixed, ordered list of preset questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetQuestions {
    questions: Vec<String>,
}

impl PresetQuestions {
    pub fn new(questions: Vec<String>) -> Self {
        Self { questions }
    }

    /// The five questions shown in the AI experience panel
    pub fn standard() -> Self {
        Self::new(
            [
                "What do you know about transformer architecture?",
                "How have you used machine learning in your projects?",
                "What's your understanding of prompt engineering?",
                "How would you explain the difference between supervised and unsupervised learning?",
                "What interests you about generative AI?",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(String::as_str)
    }

    /// Zero-based lookup
    pub fn get(&self, index: usize) -> Option<&str> {
        self.questions.get(index).map(String::as_str)
    }

    /// One-based lookup as shown to users (`1..=len`)
    pub fn by_number(&self, number: usize) -> Result<&str, DomainError> {
        number
            .checked_sub(1)
            .and_then(|index| self.get(index))
            .ok_or(DomainError::UnknownPreset {
                index: number,
                available: self.len(),
            })
    }
}

impl Default for PresetQuestions {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_has_five() {
        let presets = PresetQuestions::standard();
        assert_eq!(presets.len(), 5);
        assert_eq!(
            presets.get(2),
            Some("What's your understanding of prompt engineering?")
        );
    }

    #[test]
    fn test_by_number_is_one_based() {
        let presets = PresetQuestions::standard();
        assert_eq!(
            presets.by_number(1).unwrap(),
            "What do you know about transformer architecture?"
        );
        assert_eq!(
            presets.by_number(5).unwrap(),
            "What interests you about generative AI?"
        );
    }

    #[test]
    fn test_by_number_out_of_range() {
        let presets = PresetQuestions::standard();
        assert_eq!(
            presets.by_number(0),
            Err(DomainError::UnknownPreset {
                index: 0,
                available: 5
            })
        );
        assert!(presets.by_number(6).is_err());
    }
}
