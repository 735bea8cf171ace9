//! Ask Question use case.
//!
//! Resolves the Q&A panel input, pauses for the configured "thinking"
//! delay, dispatches through the shared [`RuleSet`] and records the
//! resulting [`Interaction`].
//!
//! Answering is infallible: every non-blank question gets either a rule's
//! answer or the fallback.

use crate::config::BehaviorConfig;
use crate::ports::interaction_logger::{InteractionLogger, NoInteractionLogger};
use crate::ports::progress::AskProgressNotifier;
use folio_domain::core::string::truncate;
use folio_domain::{Interaction, PresetQuestions, Question, QuestionSelection, RuleSet};
use std::sync::Arc;
use tracing::{debug, info};

/// Use case for answering portfolio Q&A questions.
#[derive(Clone)]
pub struct AskQuestionUseCase {
    rules: Arc<RuleSet>,
    presets: Arc<PresetQuestions>,
    behavior: BehaviorConfig,
    interaction_logger: Arc<dyn InteractionLogger>,
}

impl AskQuestionUseCase {
    pub fn new(rules: Arc<RuleSet>, presets: Arc<PresetQuestions>) -> Self {
        Self {
            rules,
            presets,
            behavior: BehaviorConfig::default(),
            interaction_logger: Arc::new(NoInteractionLogger),
        }
    }

    /// Set behavior (thinking delay).
    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    /// Create with an interaction logger.
    pub fn with_interaction_logger(mut self, logger: Arc<dyn InteractionLogger>) -> Self {
        self.interaction_logger = logger;
        self
    }

    pub fn presets(&self) -> &PresetQuestions {
        &self.presets
    }

    /// Resolve typed/preset input; `None` means there is nothing to ask.
    pub fn resolve(&self, selection: &QuestionSelection) -> Option<Question> {
        selection.resolve(&self.presets)
    }

    /// Resolve and answer in one step. Returns `None` without pausing or
    /// logging when the selection has no usable question.
    pub async fn ask(
        &self,
        selection: &QuestionSelection,
        progress: &dyn AskProgressNotifier,
    ) -> Option<Interaction> {
        match self.resolve(selection) {
            Some(question) => Some(self.execute(question, progress).await),
            None => {
                debug!("No question resolved from selection; skipping");
                None
            }
        }
    }

    /// Answer a question with progress callbacks.
    pub async fn execute(
        &self,
        question: Question,
        progress: &dyn AskProgressNotifier,
    ) -> Interaction {
        info!("Answering question: {}", truncate(question.content(), 100));

        progress.on_thinking_start(&question);
        if !self.behavior.thinking_delay.is_zero() {
            tokio::time::sleep(self.behavior.thinking_delay).await;
        }
        progress.on_thinking_end();

        let answer = self.rules.respond(&question);
        match &answer.matched {
            Some(rule) => debug!("Matched rule #{} ({:?})", rule.index, rule.keyword),
            None => debug!("No rule matched; using fallback answer"),
        }

        let interaction = Interaction::new(question, answer);
        self.interaction_logger.log(&interaction);
        interaction
    }
}
