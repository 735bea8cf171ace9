//! Ordered rule table with a fallback answer

use super::answers;
use super::rule::KeywordRule;
use crate::core::question::Question;
use serde::{Deserialize, Serialize};

/// Which rule produced an answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMatch {
    /// Zero-based position in the rule table
    pub index: usize,
    /// The keyword phrase that matched
    pub keyword: String,
}

/// Result of dispatching a question through a [`RuleSet`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub text: String,
    /// `None` when the fallback answer was used
    pub matched: Option<RuleMatch>,
}

impl Answer {
    pub fn is_fallback(&self) -> bool {
        self.matched.is_none()
    }
}

/// Immutable, ordered keyword rule table
///
/// Rules are evaluated in insertion order and the first match wins, so a
/// question containing several phrases gets the earliest rule's answer.
/// Built once at startup and shared (typically behind an `Arc`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<KeywordRule>,
    fallback: String,
}

impl RuleSet {
    pub fn new(rules: Vec<KeywordRule>, fallback: impl Into<String>) -> Self {
        Self {
            rules,
            fallback: fallback.into(),
        }
    }

    /// The portfolio's standard AI-experience rule table
    pub fn standard() -> Self {
        Self::new(
            vec![
                KeywordRule::new("transformer architecture", answers::TRANSFORMER_ARCHITECTURE),
                KeywordRule::new(
                    "machine learning in your projects",
                    answers::MACHINE_LEARNING_IN_PROJECTS,
                ),
                KeywordRule::new("prompt engineering", answers::PROMPT_ENGINEERING),
                KeywordRule::new(
                    "supervised and unsupervised learning",
                    answers::SUPERVISED_VS_UNSUPERVISED,
                ),
                KeywordRule::new("generative ai", answers::GENERATIVE_AI),
            ],
            answers::FALLBACK,
        )
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Index of the first rule matching an already-normalized question
    fn first_match(&self, normalized: &str) -> Option<usize> {
        self.rules
            .iter()
            .position(|rule| rule.matches_normalized(normalized))
    }

    /// Answer a validated question, reporting which rule fired
    pub fn respond(&self, question: &Question) -> Answer {
        match self.first_match(&question.normalized()) {
            Some(index) => {
                let rule = &self.rules[index];
                Answer {
                    text: rule.response().to_string(),
                    matched: Some(RuleMatch {
                        index,
                        keyword: rule.keyword().to_string(),
                    }),
                }
            }
            None => Answer {
                text: self.fallback.clone(),
                matched: None,
            },
        }
    }

    /// Answer arbitrary text; any input (even blank) yields some answer
    pub fn respond_str(&self, text: &str) -> &str {
        let index = Question::try_new(text).and_then(|q| self.first_match(&q.normalized()));
        match index {
            Some(index) => self.rules[index].response(),
            None => &self.fallback,
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(text: &str) -> Question {
        Question::try_new(text).unwrap()
    }

    #[test]
    fn test_standard_rule_order() {
        let keywords: Vec<_> = RuleSet::standard()
            .rules()
            .iter()
            .map(|r| r.keyword().to_string())
            .collect();
        assert_eq!(
            keywords,
            vec![
                "transformer architecture",
                "machine learning in your projects",
                "prompt engineering",
                "supervised and unsupervised learning",
                "generative ai",
            ]
        );
    }

    #[test]
    fn test_each_rule_answers_its_topic() {
        let rules = RuleSet::standard();
        let cases = [
            ("What do you know about transformer architecture?", answers::TRANSFORMER_ARCHITECTURE),
            ("How have you used machine learning in your projects?", answers::MACHINE_LEARNING_IN_PROJECTS),
            ("What's your understanding of prompt engineering?", answers::PROMPT_ENGINEERING),
            (
                "How would you explain the difference between supervised and unsupervised learning?",
                answers::SUPERVISED_VS_UNSUPERVISED,
            ),
            ("What interests you about generative AI?", answers::GENERATIVE_AI),
        ];
        for (question, expected) in cases {
            assert_eq!(rules.respond_str(question), expected, "question: {question}");
        }
    }

    #[test]
    fn test_transformer_wins_over_later_rules() {
        let rules = RuleSet::standard();
        let answer = rules.respond(&q(
            "Does transformer architecture matter for generative AI and prompt engineering?",
        ));
        assert_eq!(answer.text, answers::TRANSFORMER_ARCHITECTURE);
        assert_eq!(answer.matched.unwrap().index, 0);
    }

    #[test]
    fn test_first_match_wins_prompt_over_generative() {
        let rules = RuleSet::standard();
        let answer = rules.respond(&q("Is prompt engineering the key to generative AI?"));
        assert_eq!(answer.text, answers::PROMPT_ENGINEERING);
        assert_eq!(
            answer.matched,
            Some(RuleMatch {
                index: 2,
                keyword: "prompt engineering".to_string()
            })
        );
    }

    #[test]
    fn test_no_match_returns_exact_fallback() {
        let rules = RuleSet::standard();
        let answer = rules.respond(&q("What is your favorite color?"));
        assert_eq!(answer.text, answers::FALLBACK);
        assert!(answer.is_fallback());
    }

    #[test]
    fn test_unsupervised_alone_falls_through() {
        let rules = RuleSet::standard();
        assert_eq!(
            rules.respond_str("Tell me about unsupervised learning"),
            answers::FALLBACK
        );
    }

    #[test]
    fn test_case_insensitive() {
        let rules = RuleSet::standard();
        assert_eq!(
            rules.respond_str("TRANSFORMER ARCHITECTURE"),
            rules.respond_str("transformer architecture")
        );
        assert_eq!(
            rules.respond_str("TRANSFORMER ARCHITECTURE"),
            answers::TRANSFORMER_ARCHITECTURE
        );
    }

    #[test]
    fn test_respond_is_idempotent() {
        let rules = RuleSet::standard();
        let question = q("How have you used Machine Learning in your projects?");
        assert_eq!(rules.respond(&question), rules.respond(&question));
    }

    #[test]
    fn test_blank_text_gets_fallback() {
        let rules = RuleSet::standard();
        assert_eq!(rules.respond_str(""), answers::FALLBACK);
    }

    #[test]
    fn test_custom_rule_set() {
        let rules = RuleSet::new(
            vec![
                KeywordRule::new("rust", "Rust answer"),
                KeywordRule::new("rust async", "never reached"),
            ],
            "default",
        );
        assert_eq!(rules.respond_str("Rust async runtimes?"), "Rust answer");
        assert_eq!(rules.respond_str("Go?"), "default");
    }
}
