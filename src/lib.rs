pub mod cli;
pub mod config;
pub mod pricing;
pub mod report;

#[cfg(feature = "tui")]
pub mod ui;
pub mod utils;
