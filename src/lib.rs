pub mod adapters;
pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod ui;
pub mod workers;

pub use crate::services::analyzer::analyze;
pub use crate::structs::analysis_result::AnalysisResult;
