use crate::helpers::config_helper::ConfigHelper;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    /// "dashboard" or "json"
    #[serde(default = "ConfigHelper::default_output_format")]
    pub format: String,

    /// Default directory for exported reports; empty disables export.
    #[serde(default)]
    pub export_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ConfigHelper::default_output_format(),
            export_dir: String::new(),
        }
    }
}
