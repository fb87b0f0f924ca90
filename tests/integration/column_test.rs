use super::common::{commit_all, init_repo, write_file};
use tempfile::TempDir;
use treecol::column::{Column, FilenameColumn, RenderBatch};
use treecol::core::config::Config;
use treecol::core::item::Item;
use treecol::git::{load_gitignore, GitStatusCache};
use unicode_width::UnicodeWidthStr;

fn visible_rows(root: &std::path::Path) -> Vec<Item> {
    vec![
        Item::directory(root.join("src"), 0, true),
        Item::new(root.join("src/main.rs"), 1),
        Item::new(root.join("Cargo.toml"), 0),
    ]
}

#[test]
fn test_cells_align_and_match_length() {
    let temp = TempDir::new().unwrap();
    let items = visible_rows(temp.path());
    let batch = RenderBatch::new(&items);
    let mut column = FilenameColumn::new(Config::default());

    let width = column.length(&batch, &items[0]);
    for item in &items {
        assert_eq!(column.length(&batch, item), width);
        let cell = column.text(&batch, item);
        assert_eq!(cell.text.width(), width, "row {}", item.name);
    }
}

#[test]
fn test_tree_glyphs_follow_sibling_order() {
    let temp = TempDir::new().unwrap();
    let items = visible_rows(temp.path());
    let batch = RenderBatch::new(&items);
    let mut column = FilenameColumn::new(Config::default());

    let cells: Vec<String> = items
        .iter()
        .map(|item| column.text(&batch, item).text)
        .collect();

    assert!(cells[0].starts_with("📂 src"), "got {:?}", cells[0]);
    assert!(cells[1].starts_with("└ 🦀 main.rs"), "got {:?}", cells[1]);
    assert!(cells[2].starts_with("📒 Cargo.toml"), "got {:?}", cells[2]);
}

#[test]
fn test_modified_file_gets_git_highlight() {
    let temp = TempDir::new().unwrap();
    let repo = init_repo(temp.path());
    write_file(temp.path(), "src/main.rs", "fn main() {}");
    write_file(temp.path(), "Cargo.toml", "[package]");
    commit_all(&repo, "initial");
    write_file(temp.path(), "src/main.rs", "fn main() { todo!() }");

    let mut git = GitStatusCache::open(temp.path()).unwrap();
    git.refresh().unwrap();

    let items = visible_rows(git.workdir());
    let batch = RenderBatch::new(&items).with_git(&git);
    let mut column = FilenameColumn::new(Config::default());

    let main_cell = column.text(&batch, &items[1]);
    let name_span = main_cell.spans.last().unwrap();
    assert_eq!(name_span.group, "TreecolGitModified");

    // The src directory inherits the change; Cargo.toml stays clean
    let src_cell = column.text(&batch, &items[0]);
    assert_eq!(src_cell.spans.last().unwrap().group, "TreecolGitModified");

    let cargo_cell = column.text(&batch, &items[2]);
    assert_eq!(cargo_cell.spans.last().unwrap().group, "TreecolFile");
}

#[test]
fn test_git_highlights_disabled_by_config() {
    let temp = TempDir::new().unwrap();
    let repo = init_repo(temp.path());
    write_file(temp.path(), "src/main.rs", "fn main() {}");
    commit_all(&repo, "initial");
    write_file(temp.path(), "src/main.rs", "changed");

    let mut git = GitStatusCache::open(temp.path()).unwrap();
    git.refresh().unwrap();

    let items = visible_rows(git.workdir());
    let batch = RenderBatch::new(&items).with_git(&git);

    let mut config = Config::default();
    config.git_highlights = false;
    let mut column = FilenameColumn::new(config);

    let cell = column.text(&batch, &items[1]);
    assert_eq!(cell.spans.last().unwrap().group, "TreecolFile");
}

#[test]
fn test_gitignored_entry_dims() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), ".gitignore", "*.log\n");
    write_file(temp.path(), "debug.log", "x");
    let gitignore = load_gitignore(temp.path()).unwrap();

    let items = vec![
        Item::new(temp.path().join("debug.log"), 0),
        Item::new(temp.path().join("main.rs"), 0),
    ];
    let batch = RenderBatch::new(&items).with_gitignore(&gitignore);
    let mut column = FilenameColumn::new(Config::default());

    let ignored = column.text(&batch, &items[0]);
    assert_eq!(ignored.spans.last().unwrap().group, "TreecolDimmed");

    let plain = column.text(&batch, &items[1]);
    assert_eq!(plain.spans.last().unwrap().group, "TreecolFile");
}

#[test]
fn test_item_outside_gitignore_root_stays_plain() {
    let temp = TempDir::new().unwrap();
    write_file(temp.path(), ".gitignore", "*.log\n");
    let gitignore = load_gitignore(temp.path()).unwrap();

    // A host may pair the batch's gitignore with rows from anywhere;
    // out-of-root paths fall back to the plain group instead of failing
    let items = vec![Item::new("/definitely/elsewhere/file.log", 0)];
    let batch = RenderBatch::new(&items).with_gitignore(&gitignore);
    let mut column = FilenameColumn::new(Config::default());

    let cell = column.text(&batch, &items[0]);
    assert_eq!(cell.spans.last().unwrap().group, "TreecolFile");
}

#[test]
fn test_span_bytes_reassemble_the_cell() {
    let temp = TempDir::new().unwrap();
    let items = visible_rows(temp.path());
    let batch = RenderBatch::new(&items);
    let mut column = FilenameColumn::new(Config::default());

    for item in &items {
        let cell = column.text(&batch, item);
        let mut pos = 0;
        for span in &cell.spans {
            assert!(span.start >= pos, "spans overlap in {}", item.name);
            assert!(span.start + span.len <= cell.text.len());
            assert!(cell.text.is_char_boundary(span.start));
            assert!(cell.text.is_char_boundary(span.start + span.len));
            pos = span.start + span.len;
        }
    }
}
