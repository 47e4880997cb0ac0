use serde::{Deserialize, Serialize};

/// How the CLI prints its report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// User preferences stored in `~/.kalkulus/config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Quantity in GB used when none is given on the command line
    pub default_quantity: f64,
    pub format: OutputFormat,
    pub color: bool,
}
