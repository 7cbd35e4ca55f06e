//! Cases Command
//!
//! Reactive analysis of an incident export without running the agents.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::cli::render::{OutputFormat, render_reactive};
use crate::config::ConfigLoader;
use crate::review::ReactiveAnalyzer;
use crate::types::Result;

pub fn run(csv_path: &Path, format: OutputFormat) -> Result<()> {
    let config = ConfigLoader::load()?;
    let text = fs::read_to_string(csv_path)?;
    debug!("Read {} bytes from {}", text.len(), csv_path.display());

    let summary = ReactiveAnalyzer::analyze_csv(&text, config.analysis.max_case_records)?;
    print!("{}", render_reactive(&summary, format)?);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
