// Highlight and color module

pub mod highlight;

// Re-export commonly used items
pub use highlight::{highlight_groups, icon_group, paint, status_group, IconColor, INDENT_GROUP};
