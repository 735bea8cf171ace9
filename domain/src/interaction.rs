//! Interaction record: a question paired with the answer it produced.
//!
//! Interactions are ephemeral: they are rendered once and optionally written
//! to a transcript, but never fed back into answering.

use crate::core::question::Question;
use crate::responder::rule_set::{Answer, RuleMatch};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub question: Question,
    pub answer: Answer,
}

impl Interaction {
    pub fn new(question: Question, answer: Answer) -> Self {
        Self { question, answer }
    }

    pub fn answer_text(&self) -> &str {
        &self.answer.text
    }

    pub fn matched_rule(&self) -> Option<&RuleMatch> {
        self.answer.matched.as_ref()
    }
}
