use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotelyzerError {
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        suggestion: Option<String>,
    },

    #[error("Configuration file error at '{path}': {reason}")]
    ConfigurationFile { path: String, reason: String },

    #[error("Network error during {operation}{}: {reason}", status_suffix(.status_code))]
    Network {
        operation: String,
        status_code: Option<u16>,
        reason: String,
    },

    #[error("Parse error in {content_type}: {reason}")]
    Parse { content_type: String, reason: String },

    #[error("System error during {operation}: {reason}")]
    System { operation: String, reason: String },
}

fn status_suffix(status_code: &Option<u16>) -> String {
    match status_code {
        Some(code) => format!(" (status {code})"),
        None => String::new(),
    }
}

impl NotelyzerError {
    pub fn config_error(message: &str, suggestion: Option<&str>) -> Self {
        Self::Configuration {
            message: message.to_string(),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFile {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn network_error(operation: &str, status_code: Option<u16>, reason: &str) -> Self {
        Self::Network {
            operation: operation.to_string(),
            status_code,
            reason: reason.to_string(),
        }
    }

    pub fn parse_error(content_type: &str, reason: &str) -> Self {
        Self::Parse {
            content_type: content_type.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::System {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Whether retrying the operation could reasonably succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Network { .. } => true,
            Self::Configuration { .. } => true,
            Self::ConfigurationFile { .. } => true,
            Self::Parse { .. } => false,
            Self::System { .. } => false,
        }
    }

    pub fn user_message(&self) -> String {
        let mut msg = self.to_string();
        if let Self::Configuration {
            suggestion: Some(suggestion),
            ..
        } = self
        {
            msg.push_str(&format!("\n💡 Suggestion: {suggestion}"));
        }
        msg
    }
}

impl From<std::io::Error> for NotelyzerError {
    fn from(error: std::io::Error) -> Self {
        NotelyzerError::System {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for NotelyzerError {
    fn from(error: serde_json::Error) -> Self {
        NotelyzerError::Parse {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for NotelyzerError {
    fn from(error: toml::de::Error) -> Self {
        NotelyzerError::Parse {
            content_type: "TOML".to_string(),
            reason: error.message().to_string(),
        }
    }
}

impl From<reqwest::Error> for NotelyzerError {
    fn from(error: reqwest::Error) -> Self {
        NotelyzerError::Network {
            operation: "HTTP request".to_string(),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}

/// Result type alias for notelyzer operations
pub type NotelyzerResult<T> = Result<T, NotelyzerError>;
