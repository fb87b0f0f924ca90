use anyhow::Result;
use clap::{Arg, Command};
use colored::*;
use std::fs;
use std::path::Path;

// Use modules from the library
use treecol::column::{Cell, Column, FilenameColumn, RenderBatch};
use treecol::core::config::{Config, IconStyle};
use treecol::core::item::Item;
use treecol::git::{load_gitignore, GitStatusCache};
use treecol::ui::paint;

fn main() -> Result<()> {
    treecol::init_logging();

    let matches = Command::new("treecol")
        .version(env!("CARGO_PKG_VERSION"))
        .about("File-explorer filename column: tree glyphs, icons, git-status highlights")
        .arg(
            Arg::new("path")
                .help("Directory to render (defaults to current directory)")
                .index(1),
        )
        .arg(
            Arg::new("all")
                .short('a')
                .long("all")
                .help("Show hidden files")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("depth")
                .short('d')
                .long("depth")
                .help("How many directory levels to expand")
                .value_parser(clap::value_parser!(u32))
                .default_value("2"),
        )
        .arg(
            Arg::new("no-git")
                .long("no-git")
                .help("Skip git status lookups")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("plain")
                .long("plain")
                .help("ASCII markers instead of emoji icons")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let path = matches
        .get_one::<String>("path")
        .map(|s| s.as_str())
        .unwrap_or(".");
    let depth = *matches.get_one::<u32>("depth").unwrap();

    let mut config = Config::load()?;
    if matches.get_flag("all") {
        config.show_hidden = true;
    }
    if matches.get_flag("no-git") {
        config.git_highlights = false;
    }
    if matches.get_flag("plain") {
        config.icon_style = IconStyle::Plain;
    }

    render(path, &config, depth)
}

fn render(path: &str, config: &Config, max_depth: u32) -> Result<()> {
    let dir_path = Path::new(path);

    if !dir_path.exists() {
        println!(
            "{}",
            format!("Error: Directory '{}' does not exist", path).red()
        );
        return Ok(());
    }

    if !dir_path.is_dir() {
        println!("{}", format!("Error: '{}' is not a directory", path).red());
        return Ok(());
    }

    let dir_path = dir_path
        .canonicalize()
        .unwrap_or_else(|_| dir_path.to_path_buf());

    println!(
        "{} {}",
        "Directory:".white(),
        dir_path.to_string_lossy().cyan().bold()
    );
    println!();

    let mut items = Vec::new();
    collect_items(&dir_path, 0, max_depth, config.show_hidden, &mut items);

    if items.is_empty() {
        println!("{}", "Directory is empty".yellow().italic());
        return Ok(());
    }

    // The git side of the batch is optional: outside a repository (or with
    // --no-git) every row renders clean.
    let git = if config.git_highlights {
        match GitStatusCache::open(&dir_path) {
            Ok(mut cache) => {
                cache.refresh()?;
                Some(cache)
            }
            Err(_) => None,
        }
    } else {
        None
    };
    let gitignore = load_gitignore(&dir_path);

    let mut batch = RenderBatch::new(&items);
    if let Some(git) = git.as_ref() {
        batch = batch.with_git(git);
    }
    if let Some(gi) = gitignore.as_ref() {
        batch = batch.with_gitignore(gi);
    }

    let mut column = FilenameColumn::new(config.clone());
    for item in &items {
        let cell = column.text(&batch, item);
        print_cell(&cell);

        let status = batch.status_of(item);
        if !status.is_clean() {
            print!(" {}", status.code().yellow());
        }
        println!();
    }

    Ok(())
}

fn collect_items(dir: &Path, depth: usize, max_depth: u32, show_hidden: bool, items: &mut Vec<Item>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => {
            println!(
                "{}",
                format!("Error reading directory: {}", dir.display())
                    .red()
                    .dimmed()
            );
            return;
        }
    };

    let mut rows = Vec::new();
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().to_string();
        if !show_hidden && name.starts_with('.') {
            continue;
        }
        let file_type = match entry.file_type() {
            Ok(ft) => ft,
            Err(_) => continue,
        };
        rows.push((name, file_type.is_dir(), file_type.is_symlink(), entry.path()));
    }

    // Directories first, then case-insensitive by name
    rows.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| a.0.to_lowercase().cmp(&b.0.to_lowercase()))
    });

    for (_, is_dir, is_link, path) in rows {
        let expand = is_dir && (depth as u32) < max_depth;
        let mut item = if is_dir {
            Item::directory(&path, depth, expand)
        } else {
            Item::new(&path, depth)
        };
        item.is_link = is_link;
        items.push(item);

        if expand {
            collect_items(&path, depth + 1, max_depth, show_hidden, items);
        }
    }
}

fn print_cell(cell: &Cell) {
    let mut pos = 0;
    for span in &cell.spans {
        if span.start > pos {
            print!("{}", &cell.text[pos..span.start]);
        }
        let end = span.start + span.len;
        print!("{}", paint(&cell.text[span.start..end], span.group));
        pos = end;
    }
    if pos < cell.text.len() {
        print!("{}", &cell.text[pos..]);
    }
}
