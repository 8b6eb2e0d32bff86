use crate::helpers::config_helper::ConfigHelper;
use serde::{Deserialize, Serialize};

/// Settings for the advanced analysis backend.
///
/// `enabled` plays the role of the original "server installed" switch: when it
/// is off the analyzer never leaves basic mode.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BackendConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_timeout_secs")]
    pub timeout_secs: u64,

    /// Idle window after which the backend is considered stopped again.
    #[serde(default = "ConfigHelper::default_cooldown_secs")]
    pub cooldown_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: ConfigHelper::default_base_url(),
            timeout_secs: ConfigHelper::default_timeout_secs(),
            cooldown_secs: ConfigHelper::default_cooldown_secs(),
        }
    }
}
