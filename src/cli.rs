use clap::Parser;

use crate::config::{Config, OutputFormat};
use crate::pricing::{self, PricingError, Tier};

/// Settings for one run after applying command line overrides to the config
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSettings {
    pub quantity: f64,
    pub format: OutputFormat,
    pub color: bool,
}

#[derive(Parser, Debug)]
#[command(name = "kalkulus")]
#[command(version, about = "Storage tier pricing calculator")]
pub struct Cli {
    /// Storage quantity in GB (0-600); defaults to the configured quantity
    #[arg(value_name = "GB", allow_negative_numbers = true)]
    pub quantity: Option<String>,

    /// Only print the cost of this tier (basic, standard, premium)
    #[arg(short = 't', long = "tier", value_name = "TIER")]
    pub tier: Option<Tier>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Disable coloured output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Open the interactive cost chart
    #[arg(short = 'c', long = "chart")]
    pub chart: bool,

    /// Initialize config file
    #[arg(long = "init")]
    pub init: bool,

    /// Print current configuration
    #[arg(long = "print")]
    pub print: bool,

    /// Check configuration
    #[arg(long = "check")]
    pub check: bool,

    /// Log debug output to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Combine flags with `config`; flags win for this run only
    pub fn resolve(&self, config: &Config) -> Result<RunSettings, PricingError> {
        let quantity = match &self.quantity {
            Some(input) => pricing::parse_quantity(input)?,
            None => pricing::validate_quantity(config.default_quantity)?,
        };

        Ok(RunSettings {
            quantity,
            format: self.format.unwrap_or(config.format),
            color: config.color && !self.no_color,
        })
    }
}
