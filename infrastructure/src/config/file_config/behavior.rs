//! Behavior configuration from TOML (`[behavior]` section)

use folio_application::BehaviorConfig;
use serde::{Deserialize, Serialize};

/// Raw behavior configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBehaviorConfig {
    /// Pause before an answer is revealed, in milliseconds
    pub thinking_delay_ms: u64,
}

impl Default for FileBehaviorConfig {
    fn default() -> Self {
        Self {
            thinking_delay_ms: 1000,
        }
    }
}

impl FileBehaviorConfig {
    pub fn to_behavior_config(&self) -> BehaviorConfig {
        BehaviorConfig::with_thinking_delay_ms(self.thinking_delay_ms)
    }
}
