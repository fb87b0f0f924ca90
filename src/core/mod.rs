// Core data model module

pub mod config;
pub mod item;
pub mod tree;

// Re-export commonly used items
pub use config::{Config, IconStyle};
pub use item::Item;
pub use tree::SiblingCache;
