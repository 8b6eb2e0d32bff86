pub mod analysis_report;
pub mod analysis_result;
pub mod analyze_request;
pub mod cli;
pub mod config;
