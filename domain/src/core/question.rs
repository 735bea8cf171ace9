//! Question value object

use serde::{Deserialize, Serialize};

/// A question submitted to the responder (Value Object)
///
/// Always non-blank. Blank input never becomes a `Question`, which is how
/// "no question, no dispatch" is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Question {
    content: String,
}

impl Question {
    /// Try to create a new question, returning None if blank
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Lowercased form used for keyword matching
    pub fn normalized(&self) -> String {
        self.content.to_lowercase()
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl std::str::FromStr for Question {
    type Err = crate::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
            .ok_or_else(|| crate::DomainError::InvalidQuestion("question is blank".to_string()))
    }
}
