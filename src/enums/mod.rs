pub mod analysis_source;
pub mod commands;
pub mod sentiment_label;
pub mod server_state;
