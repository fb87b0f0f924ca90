// Treecol Library - Public API

// Re-export error types
pub mod error;
pub use error::{Result, TreecolError};

// Module declarations
pub mod column;
pub mod core;
pub mod git;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use column::{Cell, Column, HighlightSpan, RenderBatch};
pub use core::config::Config;
pub use core::item::Item;

// Initialize logging
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
