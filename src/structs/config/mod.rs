pub mod backend_config;
pub mod config;
pub mod output_config;
