//! The filename column
//!
//! Renders tree-branch glyphs, a file-type icon, and the entry name into one
//! aligned cell per row. All rows of a batch share one column width: the
//! widest natural row, clamped to the configured maximum. Names that do not
//! fit are cut on a display-cell boundary and suffixed with `…`.

use crate::column::{Cell, Column, HighlightSpan, RenderBatch};
use crate::core::config::{Config, IconStyle};
use crate::core::item::Item;
use crate::git::status::GitStatus;
use crate::ui::highlight::{icon_group, status_group, INDENT_GROUP};
use crate::utils::icons::glyph_for;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub struct FilenameColumn {
    config: Config,
}

impl FilenameColumn {
    pub fn new(config: Config) -> Self {
        FilenameColumn { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // Display cells reserved for the icon, independent of the actual glyph.
    fn icon_cell(&self) -> usize {
        match self.config.icon_style {
            IconStyle::Unicode => 2,
            IconStyle::Plain => 1,
        }
    }

    // Width the row would take with nothing truncated or padded.
    fn natural_width(&self, item: &Item) -> usize {
        item.depth * self.config.indent_width + self.icon_cell() + 1 + item.name.width()
    }

    fn shared_width(&self, batch: &RenderBatch<'_>) -> usize {
        batch
            .column_width(|item| self.natural_width(item))
            .min(self.config.max_cell_width)
    }
}

// Cut on a display-cell boundary, leaving room for the ellipsis.
fn truncate_name(name: &str, available: usize) -> String {
    if name.width() <= available {
        return name.to_string();
    }
    let mut out = String::new();
    let mut w = 0usize;
    for ch in name.chars() {
        let cw = ch.width().unwrap_or(0);
        if w + cw > available.saturating_sub(1) {
            break;
        }
        out.push(ch);
        w += cw;
    }
    if available > 0 {
        out.push('…');
    }
    out
}

impl Column for FilenameColumn {
    fn length(&mut self, batch: &RenderBatch<'_>, _item: &Item) -> usize {
        self.shared_width(batch)
    }

    fn text(&mut self, batch: &RenderBatch<'_>, item: &Item) -> Cell {
        let width = self.shared_width(batch);
        let indent_width = self.config.indent_width;

        let prefix = batch.siblings().branch_prefix(item, indent_width);
        let prefix_width = prefix.width();

        let glyph = glyph_for(item, self.config.icon_style);
        let icon_cell = self.icon_cell();
        // Compensation spaces keep narrow glyphs aligned with wide ones
        let icon_pad = icon_cell.saturating_sub(glyph.icon.width());

        let available = width.saturating_sub(prefix_width + icon_cell + 1);
        let name = truncate_name(&item.name, available);
        let name_width = name.width();

        let mut text = String::with_capacity(width + prefix.len());
        let mut spans = Vec::with_capacity(3);

        if !prefix.is_empty() {
            spans.push(HighlightSpan {
                group: INDENT_GROUP,
                start: 0,
                len: prefix.len(),
            });
            text.push_str(&prefix);
        }

        let icon_start = text.len();
        text.push_str(glyph.icon);
        spans.push(HighlightSpan {
            group: icon_group(glyph.color),
            start: icon_start,
            len: glyph.icon.len(),
        });
        for _ in 0..icon_pad {
            text.push(' ');
        }
        text.push(' ');

        let status = if self.config.git_highlights {
            batch.status_of(item)
        } else {
            GitStatus::Clean
        };
        let is_dimmed = item.is_hidden() || batch.is_ignored(item);

        let name_start = text.len();
        text.push_str(&name);
        spans.push(HighlightSpan {
            group: status_group(status, item.is_dir, is_dimmed),
            start: name_start,
            len: name.len(),
        });

        let used = prefix_width + icon_cell + 1 + name_width;
        for _ in 0..width.saturating_sub(used) {
            text.push(' ');
        }

        Cell { text, spans }
    }
}
