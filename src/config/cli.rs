use super::sink::{SinkSelector, DEFAULT_OUTPUT_NAME};
use crate::core::FeatureOrder;
use crate::utils::error::Result;
use crate::utils::validation::{validate_output_key, validate_path, Validate};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "feature-matrix")]
#[command(about = "Print every combination of a crate's features as a JSON array for CI matrices")]
pub struct CliConfig {
    /// Manifest whose [features] table is enumerated
    #[arg(long, default_value = "Cargo.toml")]
    pub manifest_path: PathBuf,

    /// Order of feature names inside each combination
    #[arg(long, value_enum, default_value_t = FeatureOrder::Declared)]
    pub order: FeatureOrder,

    /// GitHub Actions output file; when unset the matrix goes to stdout
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub github_output: Option<PathBuf>,

    /// Key of the line appended to the GitHub output file
    #[arg(long, default_value = DEFAULT_OUTPUT_NAME)]
    pub output_name: String,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn sink_selector(&self) -> SinkSelector {
        match &self.github_output {
            Some(path) => SinkSelector::GithubOutput {
                path: path.clone(),
                name: self.output_name.clone(),
            },
            None => SinkSelector::Stdout,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("manifest_path", &self.manifest_path)?;
        if let Some(path) = &self.github_output {
            validate_path("github_output", path)?;
        }
        validate_output_key("output_name", &self.output_name)
    }
}
