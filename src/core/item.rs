use std::path::{Path, PathBuf};

/// One visible row of the explorer list.
///
/// The host owns the item: it decides which rows are visible, in what order,
/// and at which tree depth. The column never mutates an item; it only reads
/// it to produce a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Absolute path of the entry.
    pub path: PathBuf,
    /// Display name (the final path component).
    pub name: String,
    /// Tree depth; the root of the listing sits at depth 0.
    pub depth: usize,
    /// Whether the entry is a directory.
    pub is_dir: bool,
    /// Whether the entry is a symbolic link.
    pub is_link: bool,
    /// Whether a directory row is currently opened in the tree.
    pub expanded: bool,
}

impl Item {
    pub fn new(path: impl Into<PathBuf>, depth: usize) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());

        Item {
            path,
            name,
            depth,
            is_dir: false,
            is_link: false,
            expanded: false,
        }
    }

    pub fn directory(path: impl Into<PathBuf>, depth: usize, expanded: bool) -> Self {
        let mut item = Item::new(path, depth);
        item.is_dir = true;
        item.expanded = expanded;
        item
    }

    /// Parent directory of the entry, if any.
    pub fn parent(&self) -> Option<&Path> {
        self.path.parent()
    }

    /// Dotfiles are rendered dimmed when they carry no git status.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}
