// Sibling-order cache and tree-branch glyph selection
use crate::core::item::Item;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Maps a parent directory to the name of its last visible child.
///
/// Rebuilt from the visible rows on every render batch: the batch arrives in
/// display order, so the last row seen under a parent is that parent's last
/// child. A parent with no entry answers "last", which draws the closing
/// glyph instead of an open rail.
#[derive(Debug, Default, Clone)]
pub struct SiblingCache {
    last_child: HashMap<PathBuf, String>,
}

impl SiblingCache {
    pub fn new() -> Self {
        SiblingCache::default()
    }

    /// Rebuild the cache from the currently visible rows.
    pub fn rebuild(&mut self, items: &[Item]) {
        self.last_child.clear();
        for item in items {
            if let Some(parent) = item.parent() {
                self.last_child
                    .insert(parent.to_path_buf(), item.name.clone());
            }
        }
        log::debug!(
            "sibling cache rebuilt: {} parent entries",
            self.last_child.len()
        );
    }

    /// Whether this row is the last visible entry of its parent directory.
    pub fn is_last_child(&self, item: &Item) -> bool {
        match item.parent() {
            Some(parent) => self
                .last_child
                .get(parent)
                .map(|last| *last == item.name)
                .unwrap_or(true),
            None => true,
        }
    }

    fn is_last_path(&self, path: &Path) -> bool {
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy(),
            None => return true,
        };
        match path.parent() {
            Some(parent) => self
                .last_child
                .get(parent)
                .map(|last| *last == name)
                .unwrap_or(true),
            None => true,
        }
    }

    /// Branch glyphs for a row: one segment per tree level.
    ///
    /// Ancestor levels draw `│` while their directory still has siblings
    /// below it, blank otherwise; the item's own level draws `├`, or `└`
    /// when the item closes its directory. Depth-0 rows have no prefix.
    pub fn branch_prefix(&self, item: &Item, indent_width: usize) -> String {
        if item.depth == 0 {
            return String::new();
        }

        let width = indent_width.max(1);
        let mut rails = Vec::with_capacity(item.depth.saturating_sub(1));
        let mut ancestor = item.parent();
        for _ in 1..item.depth {
            match ancestor {
                Some(dir) => {
                    rails.push(!self.is_last_path(dir));
                    ancestor = dir.parent();
                }
                None => rails.push(false),
            }
        }
        rails.reverse();

        let mut prefix = String::new();
        for rail in rails {
            if rail {
                prefix.push('│');
            } else {
                prefix.push(' ');
            }
            for _ in 1..width {
                prefix.push(' ');
            }
        }

        if self.is_last_child(item) {
            prefix.push('└');
        } else {
            prefix.push('├');
        }
        for _ in 1..width {
            prefix.push(' ');
        }

        prefix
    }
}
