//! Assess Command
//!
//! Runs a full five-pillar assessment of an architecture description through
//! the orchestrator and prints the scorecard.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use tokio::runtime::Runtime;
use tracing::{debug, info};

use crate::cli::progress::RunProgress;
use crate::cli::render::{OutputFormat, render_scorecard};
use crate::cli::ui::Output;
use crate::config::ConfigLoader;
use crate::constants::orchestrator::POLL_INTERVAL_MS;
use crate::review::{AgentConfig, Orchestrator};
use crate::types::{AssessmentBundle, Result, RunStatus, ScopeError};

pub struct AssessOptions {
    pub architecture: PathBuf,
    pub cases: Option<PathBuf>,
    pub services: Vec<String>,
    pub no_llm: bool,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub quiet: bool,
}

pub fn run(options: AssessOptions) -> Result<()> {
    let ui = Output::new(options.quiet);

    let mut config = ConfigLoader::load()?;
    if options.no_llm {
        config.llm.enabled = false;
    }

    let architecture_text = fs::read_to_string(&options.architecture)?;
    let reactive_csv = options
        .cases
        .as_ref()
        .map(fs::read_to_string)
        .transpose()?;

    let assessment_id = uuid::Uuid::new_v4().to_string();
    let bundle = AssessmentBundle {
        architecture_text,
        detected_services: options.services,
        reactive_csv,
    };

    let rt = Runtime::new()?;
    let scorecard = rt.block_on(async {
        let agent_config = AgentConfig::from_config(&config).preflight().await;
        match agent_config.active_provider() {
            Some(provider) => ui.info(&format!(
                "Scoring with {} ({})",
                provider.name(),
                provider.model()
            )),
            None => ui.info("Scoring with built-in heuristics (LLM disabled)"),
        }

        let orchestrator = Orchestrator::new(agent_config);
        orchestrator.start_bundle(&assessment_id, bundle)?;
        info!("Assessment {} started", assessment_id);

        let mut progress = RunProgress::new(!options.quiet);
        loop {
            let state = orchestrator.get_state(&assessment_id)?;
            progress.update(&state);
            match state.status {
                RunStatus::Completed => break,
                RunStatus::Failed => {
                    progress.finish();
                    return Err(ScopeError::Validation(
                        state
                            .message
                            .unwrap_or_else(|| "assessment failed".to_string()),
                    ));
                }
                _ => tokio::time::sleep(Duration::from_millis(POLL_INTERVAL_MS)).await,
            }
        }
        progress.finish();

        orchestrator.get_scorecard(&assessment_id)
    })?;

    let rendered = render_scorecard(&scorecard, options.format)?;
    match &options.output {
        Some(path) => {
            fs::write(path, &rendered)?;
            debug!("Wrote {} bytes", rendered.len());
            ui.success(&format!("Scorecard written to {}", path.display()));
        }
        None => println!("{}", rendered.trim_end()),
    }

    Ok(())
}
