//! Progress reporting while a question is being answered

use colored::Colorize;
use folio_application::AskProgressNotifier;
use folio_domain::Question;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Shows an animated "Thinking..." spinner during the answer delay
pub struct ThinkingSpinner {
    bar: Mutex<Option<ProgressBar>>,
}

impl ThinkingSpinner {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ThinkingSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl AskProgressNotifier for ThinkingSpinner {
    fn on_thinking_start(&self, _question: &Question) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message("Thinking...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_thinking_end(&self) {
        if let Ok(mut slot) = self.bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no animation)
pub struct SimpleProgress;

impl AskProgressNotifier for SimpleProgress {
    fn on_thinking_start(&self, _question: &Question) {
        eprintln!("{} {}", "->".cyan(), "Thinking...".dimmed());
    }

    fn on_thinking_end(&self) {}
}
