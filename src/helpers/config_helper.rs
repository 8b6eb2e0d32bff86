use crate::config::constants::{
    DEFAULT_BACKEND_URL, DEFAULT_COOLDOWN_SECS, DEFAULT_TIMEOUT_SECS,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_base_url() -> String {
        DEFAULT_BACKEND_URL.to_string()
    }

    pub fn default_timeout_secs() -> u64 {
        DEFAULT_TIMEOUT_SECS
    }

    pub fn default_cooldown_secs() -> u64 {
        DEFAULT_COOLDOWN_SECS
    }

    pub fn default_output_format() -> String {
        "dashboard".to_string()
    }
}
