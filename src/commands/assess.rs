use crate::core::{SecurityLevel, SecurityLevelTriple};
use crate::dataset::Dataset;
use crate::engine::AssessmentEngine;
use crate::report::{self, OutputFormat};
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub struct AssessConfig {
    pub availability: SecurityLevel,
    pub integrity: SecurityLevel,
    pub confidentiality: SecurityLevel,
    pub cost: f64,
    pub format: OutputFormat,
    pub dataset: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

pub fn run(config: AssessConfig) -> Result<()> {
    let engine = match &config.dataset {
        Some(path) => {
            let dataset = Dataset::from_json_file(path)
                .with_context(|| format!("invalid dataset {}", path.display()))?;
            AssessmentEngine::new(std::sync::Arc::new(dataset))
        }
        None => AssessmentEngine::with_default_dataset(),
    };

    let triple = SecurityLevelTriple::new(
        config.availability,
        config.integrity,
        config.confidentiality,
    );
    let assessment = engine.assess(triple, config.cost);
    let rendered = report::render(&assessment, config.format)?;

    match &config.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{rendered}"),
    }
    Ok(())
}
