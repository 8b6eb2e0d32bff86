use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const ANALYZE_ENDPOINT: &str = "/analyze";
pub const HEALTH_ENDPOINT: &str = "/health";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
// Matches the original five-minute idle shutdown of the analysis server.
pub const DEFAULT_COOLDOWN_SECS: u64 = 5 * 60;

pub const CONFIG_DIR_NAME: &str = "notelyzer";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
