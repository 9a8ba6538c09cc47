use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::report::html::DEFAULT_TITLE;
use crate::report::loader::DEFAULT_INPUT;
use crate::report::writer::DEFAULT_OUTPUT_FILE;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "bdd-report",
    version,
    about = "Render BDD audit reports from browser test runner JSON results"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: bdd-report.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a report file from the runner's JSON results
    Render {
        /// Path to the runner's JSON result document
        #[arg(short, long)]
        input: Option<String>,

        /// Output file path (the `outputFile` reporter option)
        #[arg(short, long)]
        output: Option<String>,

        /// Output format: html, console, junit
        #[arg(long)]
        format: Option<String>,

        /// Heading shown at the top of the HTML report
        #[arg(long)]
        title: Option<String>,
    },

    /// Print a pass/fail summary and exit non-zero on failures
    Summary {
        /// Path to the runner's JSON result document
        #[arg(short, long)]
        input: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `bdd-report.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_input")]
    pub input: String,

    #[serde(default = "default_output_file")]
    pub output_file: String,

    #[serde(default = "default_html")]
    pub format: String,

    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output_file: default_output_file(),
            format: default_html(),
            title: default_title(),
        }
    }
}

// Serde default helpers
fn default_input() -> String { DEFAULT_INPUT.to_string() }
fn default_output_file() -> String { DEFAULT_OUTPUT_FILE.to_string() }
fn default_html() -> String { "html".to_string() }
fn default_title() -> String { DEFAULT_TITLE.to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

pub const DEFAULT_CONFIG_FILE: &str = "bdd-report.yaml";

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_FILE);
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("ignoring malformed config {}: {}", config_path, e);
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Settings resolution (CLI > config file > defaults)
// ============================================================================

/// Fully resolved settings for one `render` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    pub input: String,
    pub output_file: String,
    pub format: String,
    pub title: String,
}

pub fn resolve_render_settings(
    config: &AppConfig,
    input: Option<&str>,
    output: Option<&str>,
    format: Option<&str>,
    title: Option<&str>,
) -> RenderSettings {
    let report = &config.report;
    RenderSettings {
        input: input.unwrap_or(&report.input).to_string(),
        output_file: output.unwrap_or(&report.output_file).to_string(),
        format: format.unwrap_or(&report.format).to_string(),
        title: title.unwrap_or(&report.title).to_string(),
    }
}
