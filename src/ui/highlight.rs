//! Highlight groups
//!
//! The column never emits ANSI escapes itself; it attaches highlight-group
//! names to byte spans of the cell text. A host registers the groups once
//! (using [`highlight_groups`]) and paints spans however it likes. The demo
//! CLI resolves them straight to terminal colors via [`paint`].

use crate::git::status::GitStatus;
use colored::{ColoredString, Colorize};

/// Group covering the tree-branch glyphs.
pub const INDENT_GROUP: &str = "TreecolIndent";

/// Named colors carried by the static icon table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconColor {
    Blue,
    Cyan,
    Green,
    Yellow,
    Red,
    Magenta,
    White,
    Grey,
}

/// Stable highlight-group name for an icon color.
pub fn icon_group(color: IconColor) -> &'static str {
    match color {
        IconColor::Blue => "TreecolIconBlue",
        IconColor::Cyan => "TreecolIconCyan",
        IconColor::Green => "TreecolIconGreen",
        IconColor::Yellow => "TreecolIconYellow",
        IconColor::Red => "TreecolIconRed",
        IconColor::Magenta => "TreecolIconMagenta",
        IconColor::White => "TreecolIconWhite",
        IconColor::Grey => "TreecolIconGrey",
    }
}

/// Highlight group for a filename, decided by git status first, then by the
/// entry kind. Hidden or gitignored entries dim when they carry no status.
pub fn status_group(status: GitStatus, is_dir: bool, is_dimmed: bool) -> &'static str {
    match status {
        GitStatus::Deleted => "TreecolGitDeleted",
        GitStatus::Untracked => "TreecolGitUntracked",
        GitStatus::Modified => "TreecolGitModified",
        GitStatus::Staged => "TreecolGitStaged",
        GitStatus::Renamed => "TreecolGitRenamed",
        GitStatus::Ignored => "TreecolDimmed",
        GitStatus::Clean => {
            if is_dimmed {
                "TreecolDimmed"
            } else if is_dir {
                "TreecolDirectory"
            } else {
                "TreecolFile"
            }
        }
    }
}

/// Every group the crate can emit, paired with its named color. Hosts that
/// register syntax highlights do it from this table.
pub fn highlight_groups() -> &'static [(&'static str, &'static str)] {
    &[
        ("TreecolIndent", "grey"),
        ("TreecolDirectory", "blue"),
        ("TreecolFile", "white"),
        ("TreecolDimmed", "grey"),
        ("TreecolGitUntracked", "brightgreen"),
        ("TreecolGitModified", "brightgreen"),
        ("TreecolGitStaged", "green"),
        ("TreecolGitRenamed", "brightgreen"),
        ("TreecolGitDeleted", "red"),
        ("TreecolIconBlue", "blue"),
        ("TreecolIconCyan", "cyan"),
        ("TreecolIconGreen", "green"),
        ("TreecolIconYellow", "yellow"),
        ("TreecolIconRed", "red"),
        ("TreecolIconMagenta", "magenta"),
        ("TreecolIconWhite", "white"),
        ("TreecolIconGrey", "grey"),
    ]
}

/// Terminal rendering of a span for the demo CLI.
pub fn paint(text: &str, group: &str) -> ColoredString {
    match group {
        "TreecolIndent" => text.bright_black(),
        "TreecolDirectory" => text.blue().bold(),
        "TreecolFile" => text.white(),
        "TreecolDimmed" => text.bright_black(),
        "TreecolGitUntracked" | "TreecolGitModified" | "TreecolGitRenamed" => text.bright_green(),
        "TreecolGitStaged" => text.green(),
        "TreecolGitDeleted" => text.red().strikethrough(),
        "TreecolIconBlue" => text.blue(),
        "TreecolIconCyan" => text.cyan(),
        "TreecolIconGreen" => text.green(),
        "TreecolIconYellow" => text.yellow(),
        "TreecolIconRed" => text.red(),
        "TreecolIconMagenta" => text.magenta(),
        "TreecolIconWhite" => text.white(),
        "TreecolIconGrey" => text.bright_black(),
        _ => text.normal(),
    }
}
