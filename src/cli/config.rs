use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::workspace::pending::RecordPolicy;

pub const DEFAULT_CONFIG_PATH: &str = "screen-designer.yaml";

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "screen-designer",
    version,
    about = "Flutter code generation and edit replay for screen designs"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: screen-designer.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate Flutter source from a document JSON file
    Generate {
        /// Path to the document JSON
        #[arg(long)]
        document: String,

        /// Screen id to generate (default: first screen)
        #[arg(long)]
        screen: Option<String>,

        /// Generate every screen as one app with named routes
        #[arg(long)]
        all_screens: bool,

        /// Use the dark theme
        #[arg(long)]
        dark_mode: bool,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print default size and properties as JSON
    Defaults {
        /// Component type, e.g. button or dynamicTable (default: all)
        #[arg(long)]
        kind: Option<String>,
    },

    /// Replay a YAML edit script and print the generated code
    Replay {
        /// Path to the edit script YAML
        #[arg(long)]
        script: String,

        /// Use the dark theme
        #[arg(long)]
        dark_mode: bool,

        /// Queue history records until the next undo, redo or flush
        #[arg(long)]
        deferred: bool,

        /// Output file path for the generated code (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Also write the resulting document as JSON
        #[arg(long)]
        save_document: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `screen-designer.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub generate: GenerateConfig,
    #[serde(default)]
    pub workspace: WorkspaceConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateConfig {
    #[serde(default)]
    pub dark_mode: bool,

    #[serde(default)]
    pub all_screens: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    #[serde(default)]
    pub record_policy: RecordPolicy,
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);
    match std::fs::read_to_string(config_path) {
        Ok(content) => parse_config(&content),
        Err(_) => AppConfig::default(),
    }
}

pub fn parse_config(content: &str) -> AppConfig {
    serde_yaml::from_str(content).unwrap_or_default()
}

// ============================================================================
// Setting Resolution (CLI flag > config file > default)
// ============================================================================

pub fn resolve_dark_mode(flag: bool, config: &AppConfig) -> bool {
    flag || config.generate.dark_mode
}

pub fn resolve_all_screens(flag: bool, config: &AppConfig) -> bool {
    flag || config.generate.all_screens
}

pub fn resolve_record_policy(deferred: bool, config: &AppConfig) -> RecordPolicy {
    if deferred {
        RecordPolicy::Deferred
    } else {
        config.workspace.record_policy
    }
}

/// `tracing` filter directive for a `-v` count.
pub fn verbosity_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
