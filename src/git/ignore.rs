// Gitignore integration
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;

pub fn load_gitignore(dir_path: &Path) -> Option<Gitignore> {
    let mut builder = GitignoreBuilder::new(dir_path);

    let gitignore_path = dir_path.join(".gitignore");
    if gitignore_path.exists() {
        builder.add(&gitignore_path);
    }

    // Walk up to the nearest ancestor carrying its own .gitignore
    let mut current = dir_path.parent();
    while let Some(parent) = current {
        let parent_gitignore = parent.join(".gitignore");
        if parent_gitignore.exists() {
            let _ = builder.add(&parent_gitignore);
            break;
        }
        current = parent.parent();
    }

    builder.build().ok()
}

pub fn is_gitignored(gitignore: Option<&Gitignore>, path: &Path, is_dir: bool) -> bool {
    if let Some(gi) = gitignore {
        // matched_path_or_any_parents asserts the path is under the root;
        // anything outside simply has no ignore rule applying to it
        if !path.starts_with(gi.path()) {
            return false;
        }
        matches!(
            gi.matched_path_or_any_parents(path, is_dir),
            ignore::Match::Ignore(_)
        )
    } else {
        false
    }
}
