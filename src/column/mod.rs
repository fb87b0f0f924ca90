//! Column rendering seam
//!
//! The host UI owns the row list and the render loop; a [`Column`] only
//! answers two questions per row: how many display cells the cell occupies
//! ([`Column::length`]) and what exact text plus highlight spans to draw
//! ([`Column::text`]). A [`RenderBatch`] carries everything shared across
//! one render cycle: the visible rows, the sibling-order cache rebuilt from
//! them, and the optional git lookups.

pub mod filename;

pub use filename::FilenameColumn;

use crate::core::item::Item;
use crate::core::tree::SiblingCache;
use crate::git::ignore::is_gitignored;
use crate::git::status::{GitStatus, GitStatusCache};
use ignore::gitignore::Gitignore;
use once_cell::unsync::OnceCell;

/// A highlight instruction: paint `len` bytes starting at byte `start` of
/// the cell text with the named group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
    pub group: &'static str,
    pub start: usize,
    pub len: usize,
}

/// The rendered cell for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub spans: Vec<HighlightSpan>,
}

/// Shared state for one render cycle over the currently visible rows.
pub struct RenderBatch<'a> {
    items: &'a [Item],
    siblings: SiblingCache,
    git: Option<&'a GitStatusCache>,
    gitignore: Option<&'a Gitignore>,
    width: OnceCell<usize>,
}

impl<'a> RenderBatch<'a> {
    /// Build a batch from the visible rows, rebuilding the sibling cache.
    pub fn new(items: &'a [Item]) -> Self {
        let mut siblings = SiblingCache::new();
        siblings.rebuild(items);

        RenderBatch {
            items,
            siblings,
            git: None,
            gitignore: None,
            width: OnceCell::new(),
        }
    }

    pub fn with_git(mut self, git: &'a GitStatusCache) -> Self {
        self.git = Some(git);
        self
    }

    pub fn with_gitignore(mut self, gitignore: &'a Gitignore) -> Self {
        self.gitignore = Some(gitignore);
        self
    }

    pub fn items(&self) -> &[Item] {
        self.items
    }

    pub fn siblings(&self) -> &SiblingCache {
        &self.siblings
    }

    /// Git status of a row; without a status cache everything is clean.
    pub fn status_of(&self, item: &Item) -> GitStatus {
        match self.git {
            Some(git) => git.status_of(&item.path),
            None => GitStatus::Clean,
        }
    }

    pub fn is_ignored(&self, item: &Item) -> bool {
        is_gitignored(self.gitignore, &item.path, item.is_dir)
    }

    /// Widest natural row of the batch, computed once per cycle.
    pub fn column_width(&self, measure: impl Fn(&Item) -> usize) -> usize {
        *self
            .width
            .get_or_init(|| self.items.iter().map(measure).max().unwrap_or(0))
    }
}

/// One explorer column. The host calls `length` first to lay the list out,
/// then `text` for the cell content of each row.
pub trait Column {
    fn length(&mut self, batch: &RenderBatch<'_>, item: &Item) -> usize;
    fn text(&mut self, batch: &RenderBatch<'_>, item: &Item) -> Cell;
}
