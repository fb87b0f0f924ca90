//! File icon table
//!
//! Static mapping from file extension or special case (directory, symlink,
//! opened tree row, exact filename) to a glyph and a named color. Read-only
//! and constant for the process lifetime; every lookup that misses falls back
//! to the default file glyph.

use crate::core::config::IconStyle;
use crate::core::item::Item;
use crate::ui::highlight::IconColor;
use std::path::Path;

/// A display glyph plus the named color its highlight group derives from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileGlyph {
    pub icon: &'static str,
    pub color: IconColor,
}

const fn glyph(icon: &'static str, color: IconColor) -> FileGlyph {
    FileGlyph { icon, color }
}

const DEFAULT_FILE: FileGlyph = glyph("📄", IconColor::White);
const DIR_CLOSED: FileGlyph = glyph("📁", IconColor::Blue);
const DIR_OPENED: FileGlyph = glyph("📂", IconColor::Blue);
const SYMLINK: FileGlyph = glyph("🔗", IconColor::Cyan);

/// Glyph for a row, honoring directory/link/expanded state and icon style.
pub fn glyph_for(item: &Item, style: IconStyle) -> FileGlyph {
    let unicode = if item.is_link {
        SYMLINK
    } else if item.is_dir {
        if item.expanded {
            DIR_OPENED
        } else {
            DIR_CLOSED
        }
    } else {
        file_glyph(&item.name)
    };

    match style {
        IconStyle::Unicode => unicode,
        IconStyle::Plain => {
            let marker = if item.is_link {
                "@"
            } else if item.is_dir {
                if item.expanded {
                    "-"
                } else {
                    "+"
                }
            } else {
                "."
            };
            glyph(marker, unicode.color)
        }
    }
}

/// Returns the glyph for a plain file based on its name
///
/// Exact filenames win over the extension table; anything unknown gets the
/// default file glyph.
///
/// # Examples
///
/// ```
/// use treecol::utils::icons::file_glyph;
///
/// assert_eq!(file_glyph("main.rs").icon, "🦀");
/// assert_eq!(file_glyph("script.py").icon, "🐍");
/// assert_eq!(file_glyph("README.md").icon, "📖");
/// ```
pub fn file_glyph(filename: &str) -> FileGlyph {
    // Exact filenames first
    match filename {
        "Dockerfile" | "Containerfile" | "docker-compose.yml" | "docker-compose.yaml" => {
            return glyph("🐳", IconColor::Cyan)
        }
        "Makefile" | "CMakeLists.txt" => return glyph("⚙", IconColor::Grey),
        ".gitignore" | ".gitattributes" | ".gitmodules" => return glyph("⚙", IconColor::Grey),
        _ => {}
    }

    let path = Path::new(filename);
    if let Some(ext) = path.extension() {
        match ext.to_str().unwrap_or("").to_lowercase().as_str() {
            // Programming languages
            "rs" => glyph("🦀", IconColor::Red),
            "py" => glyph("🐍", IconColor::Green),
            "js" | "jsx" | "mjs" | "cjs" => glyph("🟨", IconColor::Yellow),
            "ts" | "tsx" => glyph("🔷", IconColor::Blue),
            "vue" => glyph("🟩", IconColor::Green),
            "java" => glyph("☕", IconColor::Red),
            "rb" => glyph("💎", IconColor::Red),
            "go" => glyph("🐹", IconColor::Cyan),
            "php" => glyph("🐘", IconColor::Magenta),
            "lua" => glyph("🌙", IconColor::Blue),
            "c" | "h" | "cpp" | "cxx" | "cc" | "hpp" => glyph("📘", IconColor::Blue),
            "sh" | "bash" | "zsh" | "fish" | "bat" | "ps1" => glyph("❓", IconColor::Grey),
            // Web
            "html" | "htm" => glyph("🌐", IconColor::Magenta),
            "css" | "scss" | "sass" | "less" => glyph("🎨", IconColor::Magenta),
            "svg" => glyph("🎨", IconColor::Yellow),
            // Data formats
            "json" => glyph("🔧", IconColor::Yellow),
            "xml" => glyph("📰", IconColor::Grey),
            "yaml" | "yml" | "toml" => glyph("📒", IconColor::Yellow),
            "ini" | "cfg" | "conf" => glyph("⚙", IconColor::Grey),
            "sql" | "db" | "sqlite" | "sqlite3" => glyph("🗄️", IconColor::Cyan),
            // Documents
            "md" | "mdx" => glyph("📖", IconColor::White),
            "txt" => glyph("📝", IconColor::White),
            "pdf" | "doc" | "docx" => glyph("📄", IconColor::White),
            // Media
            "jpg" | "jpeg" | "png" | "gif" | "bmp" | "webp" | "ico" => {
                glyph("🖼️", IconColor::Magenta)
            }
            "mp3" | "wav" | "flac" | "ogg" => glyph("🎵", IconColor::Cyan),
            "mp4" | "avi" | "mkv" | "mov" | "webm" => glyph("🎬", IconColor::Cyan),
            // Archives
            "zip" | "rar" | "7z" | "tar" | "gz" | "tgz" | "bz2" | "xz" | "zst" => {
                glyph("📦", IconColor::Yellow)
            }
            // Lock files
            "lock" => glyph("🔒", IconColor::Grey),
            // Logs and leftovers
            "log" | "bak" | "tmp" | "swp" => glyph("📋", IconColor::Grey),
            // Certificates
            "crt" | "pem" | "key" | "cert" => glyph("🔐", IconColor::Green),

            _ => DEFAULT_FILE,
        }
    } else {
        // Files without extension - check for well-known names
        match filename.to_lowercase().as_str() {
            "makefile" | "dockerfile" | "license" | "readme" | "changelog" | "authors" => {
                glyph("📄", IconColor::White)
            }
            "head" | "config" | "description" | "exclude" => glyph("⚙", IconColor::Grey),
            _ => DEFAULT_FILE,
        }
    }
}
