use serde::{Deserialize, Serialize};
use std::fmt;

/// Which analysis path produced a result. `Advanced` results may carry topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    Basic,
    Advanced,
}

impl fmt::Display for AnalysisSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => write!(f, "Basic"),
            Self::Advanced => write!(f, "Advanced"),
        }
    }
}
