pub mod defaults;
pub mod loader;
pub mod types;

pub use defaults::DEFAULT_QUANTITY;
pub use loader::ConfigLoader;
pub use types::*;
