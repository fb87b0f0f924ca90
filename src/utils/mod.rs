// Utility module

pub mod icons;

pub use icons::{file_glyph, glyph_for, FileGlyph};
