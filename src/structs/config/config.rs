use crate::structs::config::backend_config::BackendConfig;
use crate::structs::config::output_config::OutputConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub output: OutputConfig,
}
