use super::common::{commit_all, init_repo, write_file};
use tempfile::TempDir;
use treecol::git::{GitStatus, GitStatusCache};

#[test]
fn test_untracked_file_status() {
    let temp = TempDir::new().unwrap();
    init_repo(temp.path());
    write_file(temp.path(), "new.txt", "hello");

    let mut cache = GitStatusCache::open(temp.path()).unwrap();
    assert!(cache.refresh().unwrap());

    let path = cache.workdir().join("new.txt");
    assert_eq!(cache.status_of(&path), GitStatus::Untracked);
}

#[test]
fn test_modified_after_commit() {
    let temp = TempDir::new().unwrap();
    let repo = init_repo(temp.path());
    write_file(temp.path(), "a.txt", "one");
    commit_all(&repo, "initial");

    write_file(temp.path(), "a.txt", "two");

    let mut cache = GitStatusCache::open(temp.path()).unwrap();
    cache.refresh().unwrap();

    let path = cache.workdir().join("a.txt");
    assert_eq!(cache.status_of(&path), GitStatus::Modified);
}

#[test]
fn test_unknown_path_is_clean() {
    let temp = TempDir::new().unwrap();
    init_repo(temp.path());

    let mut cache = GitStatusCache::open(temp.path()).unwrap();
    cache.refresh().unwrap();

    let path = cache.workdir().join("never-created.txt");
    assert!(cache.status_of(&path).is_clean());
}

#[test]
fn test_refresh_skips_rebuild_when_status_unchanged() {
    let temp = TempDir::new().unwrap();
    init_repo(temp.path());
    write_file(temp.path(), "a.txt", "one");

    let mut cache = GitStatusCache::open(temp.path()).unwrap();
    assert!(cache.refresh().unwrap());
    // Nothing changed between renders: the content hash matches
    assert!(!cache.refresh().unwrap());

    write_file(temp.path(), "b.txt", "two");
    assert!(cache.refresh().unwrap());
    assert!(!cache.refresh().unwrap());
}

#[test]
fn test_directory_inherits_status_of_contents() {
    let temp = TempDir::new().unwrap();
    let repo = init_repo(temp.path());
    write_file(temp.path(), "src/deep/file.rs", "fn main() {}");
    commit_all(&repo, "initial");

    write_file(temp.path(), "src/deep/file.rs", "fn main() { todo!() }");

    let mut cache = GitStatusCache::open(temp.path()).unwrap();
    cache.refresh().unwrap();

    assert_eq!(
        cache.status_of(&cache.workdir().join("src")),
        GitStatus::Modified
    );
    assert_eq!(
        cache.status_of(&cache.workdir().join("src/deep")),
        GitStatus::Modified
    );
    // The workdir root itself carries no status
    assert!(cache.status_of(cache.workdir()).is_clean());
}

#[test]
fn test_ignored_file_reported_without_bubbling() {
    let temp = TempDir::new().unwrap();
    let repo = init_repo(temp.path());
    write_file(temp.path(), ".gitignore", "*.log\n");
    write_file(temp.path(), "sub/keep.txt", "keep");
    commit_all(&repo, "initial");

    write_file(temp.path(), "debug.log", "x");
    write_file(temp.path(), "sub/tmp.log", "x");

    let mut cache = GitStatusCache::open(temp.path()).unwrap();
    cache.refresh().unwrap();

    assert_eq!(
        cache.status_of(&cache.workdir().join("debug.log")),
        GitStatus::Ignored
    );
    // Ignored entries stay on their own path; sub holds only tracked
    // content plus an ignored log, so it stays clean
    assert!(cache.status_of(&cache.workdir().join("sub")).is_clean());
}

#[test]
fn test_deleted_outranks_modified_in_directory() {
    let temp = TempDir::new().unwrap();
    let repo = init_repo(temp.path());
    write_file(temp.path(), "src/keep.rs", "keep");
    write_file(temp.path(), "src/gone.rs", "gone");
    commit_all(&repo, "initial");

    write_file(temp.path(), "src/keep.rs", "changed");
    std::fs::remove_file(temp.path().join("src/gone.rs")).unwrap();

    let mut cache = GitStatusCache::open(temp.path()).unwrap();
    cache.refresh().unwrap();

    assert_eq!(
        cache.status_of(&cache.workdir().join("src")),
        GitStatus::Deleted
    );
    assert_eq!(
        cache.status_of(&cache.workdir().join("src/gone.rs")),
        GitStatus::Deleted
    );
}
