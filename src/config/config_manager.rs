use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{NotelyzerError, NotelyzerResult};
use crate::structs::config::config::Config;
use std::fs;
use std::path::{Path, PathBuf};

pub struct ConfigManager;

impl ConfigManager {
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load the user configuration, falling back to defaults when no file exists.
    pub fn load() -> NotelyzerResult<Config> {
        match Self::config_path() {
            Some(path) if path.exists() => {
                log::info!("📋 Loading config from: {}", path.display());
                Self::load_from(&path)
            }
            _ => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> NotelyzerResult<Config> {
        let content = fs::read_to_string(path)
            .map_err(|e| NotelyzerError::config_file_error(&path.display().to_string(), &e.to_string()))?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Write a commented sample config, refusing to overwrite an existing one.
    pub fn create_sample_config() -> NotelyzerResult<PathBuf> {
        let path = Self::config_path().ok_or_else(|| {
            NotelyzerError::system_error("config init", "Could not determine home directory")
        })?;

        if path.exists() {
            return Err(NotelyzerError::config_error(
                &format!("Configuration file already exists at {}", path.display()),
                Some("Edit the existing file or delete it before running 'init' again"),
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, SAMPLE_CONFIG)?;
        Ok(path)
    }

    pub fn validate_config(config: &Config) -> NotelyzerResult<()> {
        if config.backend.base_url.trim().is_empty() {
            return Err(NotelyzerError::config_error(
                "backend.base_url must not be empty",
                Some("Use e.g. http://localhost:5000"),
            ));
        }

        if !config.backend.base_url.starts_with("http://")
            && !config.backend.base_url.starts_with("https://")
        {
            return Err(NotelyzerError::config_error(
                &format!("backend.base_url '{}' is not an http(s) URL", config.backend.base_url),
                Some("Use e.g. http://localhost:5000"),
            ));
        }

        if config.backend.timeout_secs == 0 {
            return Err(NotelyzerError::config_error(
                "backend.timeout_secs must be greater than zero",
                None,
            ));
        }

        if config.output.format != "dashboard" && config.output.format != "json" {
            return Err(NotelyzerError::config_error(
                &format!("output.format '{}' is not supported", config.output.format),
                Some("Valid formats: dashboard, json"),
            ));
        }

        Ok(())
    }
}

const SAMPLE_CONFIG: &str = r#"# Notelyzer Configuration

[backend]
# Enable the advanced analysis backend (topic modeling etc.).
# When disabled, every analysis runs in local basic mode.
enabled = false

# Where the analysis server listens.
base_url = "http://localhost:5000"

# Per-request timeout for backend calls.
timeout_secs = 10

# Idle window (seconds) after which the backend is assumed stopped again.
cooldown_secs = 300

[output]
# Default rendering: "dashboard" or "json"
format = "dashboard"

# Directory for exported reports; leave empty to disable automatic export.
export_dir = ""
"#;
