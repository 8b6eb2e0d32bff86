use crate::adapters::backend_adapter::BackendAdapter;
use crate::config::config_manager::ConfigManager;
use crate::enums::analysis_source::AnalysisSource;
use crate::enums::commands::Commands;
use crate::errors::{NotelyzerError, NotelyzerResult};
use crate::logger::progress_logger::ProgressLogger;
use crate::services::coordinator::AnalysisCoordinator;
use crate::structs::analysis_report::AnalysisReport;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::config::config::Config;
use crate::ui::dashboard_renderer::DashboardRenderer;
use crate::workers::backend_supervisor::BackendSupervisor;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, command: Commands) -> NotelyzerResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Analyze {
                file,
                basic,
                json,
                export,
            } => self.analyze_command(file, basic, json, export).await,
            Commands::Status => self.status_command().await,
            Commands::Validate => self.validate_command(),
        };

        if let Err(e) = &result {
            log::error!("❌ {}", e.user_message());
        }

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> NotelyzerResult<()> {
        log::info!("🚀 Initializing notelyzer configuration...");
        let path = ConfigManager::create_sample_config()?;
        log::info!("✅ Configuration file created at {}", path.display());
        log::info!("📝 Edit it to point at your analysis backend.");
        log::info!("🔧 Run 'notelyzer validate' to check the result.");
        Ok(())
    }

    async fn analyze_command(
        &self,
        file: Option<String>,
        force_basic: bool,
        json: bool,
        export: Option<String>,
    ) -> NotelyzerResult<()> {
        let config = ConfigManager::load()?;
        ConfigManager::validate_config(&config)?;

        let text = self.read_input(file.as_deref())?;
        log::info!("🔍 Analyzing note ({} bytes)...", text.len());

        let adapter = BackendAdapter::from_config(&config.backend)?;
        let mut supervisor =
            BackendSupervisor::new(Duration::from_secs(config.backend.cooldown_secs));

        let advanced_requested = config.backend.enabled && !force_basic;
        let advanced_available = if advanced_requested {
            supervisor.ensure_running(&adapter).await
        } else {
            false
        };

        let result = if advanced_available {
            let spinner = ProgressLogger::start("🔍 Running advanced analysis");
            let result = AnalysisCoordinator::get_analysis(&text, true, &adapter).await;
            match result.source {
                AnalysisSource::Advanced => spinner.finish("Advanced analysis complete").await,
                AnalysisSource::Basic => {
                    spinner.fail("Advanced analysis failed, used basic mode").await
                }
            }
            result
        } else {
            if advanced_requested {
                log::warn!("⚠️ Advanced backend unavailable, using basic mode");
            }
            AnalysisCoordinator::get_analysis(&text, false, &adapter).await
        };

        self.render_result(&result, json, &config)?;

        if let Some(dir) = Self::export_target(export, &config) {
            let path = self.export_report(&dir, result)?;
            log::info!("📁 Report exported to {}", path.display());
        }

        supervisor.begin_cooldown();
        Ok(())
    }

    async fn status_command(&self) -> NotelyzerResult<()> {
        let config = ConfigManager::load()?;
        ConfigManager::validate_config(&config)?;

        if !config.backend.enabled {
            log::info!("💤 Advanced backend is disabled in the configuration");
            return Ok(());
        }

        let adapter = BackendAdapter::from_config(&config.backend)?;
        let mut supervisor =
            BackendSupervisor::new(Duration::from_secs(config.backend.cooldown_secs));

        if supervisor.ensure_running(&adapter).await {
            log::info!(
                "✅ Advanced backend at {} is {}",
                config.backend.base_url,
                supervisor.state()
            );
        } else {
            log::info!(
                "❌ Advanced backend at {} is {}",
                config.backend.base_url,
                supervisor.state()
            );
            log::info!("💡 Analyses will run in basic mode until it comes back.");
        }
        Ok(())
    }

    fn validate_command(&self) -> NotelyzerResult<()> {
        let config = ConfigManager::load()?;
        ConfigManager::validate_config(&config)?;
        log::info!("✅ Configuration is valid");
        if !config.backend.enabled {
            log::info!("💤 Advanced backend is disabled; analyses run in basic mode");
        }
        Ok(())
    }

    fn read_input(&self, file: Option<&str>) -> NotelyzerResult<String> {
        match file {
            Some(path) => fs::read_to_string(path).map_err(|e| {
                NotelyzerError::system_error(
                    "read note",
                    &format!("Could not read '{path}': {e}"),
                )
            }),
            None => {
                let mut input = String::new();
                std::io::stdin()
                    .read_to_string(&mut input)
                    .map_err(|e| NotelyzerError::system_error("read stdin", &e.to_string()))?;
                Ok(input)
            }
        }
    }

    fn render_result(
        &self,
        result: &AnalysisResult,
        json_flag: bool,
        config: &Config,
    ) -> NotelyzerResult<()> {
        if json_flag || config.output.format == "json" {
            println!("{}", serde_json::to_string_pretty(result)?);
        } else {
            println!("{}", DashboardRenderer::render(result));
        }
        Ok(())
    }

    fn export_target(export_flag: Option<String>, config: &Config) -> Option<PathBuf> {
        match export_flag {
            Some(dir) => Some(PathBuf::from(dir)),
            None if !config.output.export_dir.is_empty() => {
                Some(PathBuf::from(&config.output.export_dir))
            }
            None => None,
        }
    }

    fn export_report(&self, dir: &Path, result: AnalysisResult) -> NotelyzerResult<PathBuf> {
        fs::create_dir_all(dir)?;
        let report = AnalysisReport::new(result);
        let filename = format!(
            "analysis-{}.json",
            report.generated_at.format("%Y%m%d-%H%M%S")
        );
        let path = dir.join(filename);
        fs::write(&path, serde_json::to_string_pretty(&report)?)?;
        Ok(path)
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
