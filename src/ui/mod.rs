pub mod app;
pub mod chart;
pub mod panels;

pub use app::{AppState, TuiApp};
