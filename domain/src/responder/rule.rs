//! Keyword rule (value object)

use serde::{Deserialize, Serialize};

/// A single (keyword phrase, response) pair
///
/// The phrase is stored lowercased so that matching against a lowercased
/// question is a plain substring test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    keyword: String,
    response: String,
}

impl KeywordRule {
    pub fn new(keyword: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into().to_lowercase(),
            response: response.into(),
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    /// Check the rule against an already-lowercased question
    pub fn matches_normalized(&self, normalized_question: &str) -> bool {
        normalized_question.contains(&self.keyword)
    }
}
