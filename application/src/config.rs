//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases
//! behave, such as the pause before an answer is revealed.

use std::time::Duration;

/// Default pause before an answer is revealed.
pub const DEFAULT_THINKING_DELAY: Duration = Duration::from_secs(1);

/// Application behavior configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BehaviorConfig {
    /// Presentational pause before revealing an answer. Zero disables it.
    pub thinking_delay: Duration,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            thinking_delay: DEFAULT_THINKING_DELAY,
        }
    }
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig with a delay specified in milliseconds.
    pub fn with_thinking_delay_ms(millis: u64) -> Self {
        Self {
            thinking_delay: Duration::from_millis(millis),
        }
    }

    /// No pause at all (scripts, tests, `--no-delay`).
    pub fn immediate() -> Self {
        Self {
            thinking_delay: Duration::ZERO,
        }
    }
}
