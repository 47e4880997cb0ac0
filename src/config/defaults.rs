use super::types::{Config, OutputFormat};

/// Quantity the calculator starts with when nothing else is configured
pub const DEFAULT_QUANTITY: f64 = 100.0;

impl Default for Config {
    fn default() -> Self {
        let color_enabled = std::env::var("KALKULUS_NO_COLOR").is_err();
        Config {
            default_quantity: DEFAULT_QUANTITY,
            format: OutputFormat::Text,
            color: color_enabled,
        }
    }
}
