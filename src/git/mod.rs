// Git integration module

pub mod ignore;
pub mod status;

// Re-export commonly used items
pub use ignore::{is_gitignored, load_gitignore};
pub use status::{GitStatus, GitStatusCache};
