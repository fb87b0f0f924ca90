// Git status integration
use crate::error::{Result, TreecolError};
use git2::{Repository, Status, StatusOptions};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Short per-path status, one letter on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitStatus {
    Untracked, // New file, not yet in the index
    Modified,  // Worktree change
    Staged,    // Index change (new or modified)
    Deleted,   // Removed in worktree or index
    Renamed,   // Rename recorded
    Ignored,   // Matched by gitignore
    Clean,     // No changes
}

impl GitStatus {
    /// One-character status code.
    pub fn code(&self) -> &'static str {
        match self {
            GitStatus::Untracked => "U",
            GitStatus::Modified => "M",
            GitStatus::Staged => "S",
            GitStatus::Deleted => "D",
            GitStatus::Renamed => "R",
            GitStatus::Ignored => "!",
            GitStatus::Clean => "",
        }
    }

    pub fn is_clean(&self) -> bool {
        matches!(self, GitStatus::Clean)
    }

    // Ordering used when a directory inherits the status of its contents.
    fn severity(&self) -> u8 {
        match self {
            GitStatus::Clean => 0,
            GitStatus::Ignored => 1,
            GitStatus::Untracked => 2,
            GitStatus::Renamed => 3,
            GitStatus::Staged => 4,
            GitStatus::Modified => 5,
            GitStatus::Deleted => 6,
        }
    }
}

fn classify(flags: Status) -> GitStatus {
    if flags.contains(Status::WT_DELETED) || flags.contains(Status::INDEX_DELETED) {
        GitStatus::Deleted
    } else if flags.contains(Status::WT_NEW) || flags.contains(Status::INDEX_NEW) {
        if flags.contains(Status::INDEX_NEW) {
            GitStatus::Staged
        } else {
            GitStatus::Untracked
        }
    } else if flags.contains(Status::WT_MODIFIED) {
        GitStatus::Modified
    } else if flags.contains(Status::INDEX_MODIFIED) {
        GitStatus::Staged
    } else if flags.contains(Status::WT_RENAMED) || flags.contains(Status::INDEX_RENAMED) {
        GitStatus::Renamed
    } else if flags.contains(Status::IGNORED) {
        GitStatus::Ignored
    } else {
        GitStatus::Clean
    }
}

/// Absolute-path → status map for one repository.
///
/// `refresh` re-reads the repository status but only rebuilds the map when
/// the SHA-256 of the sorted `path\0code` listing differs from the previous
/// run, so an unchanged repository costs one hash per render. Directories
/// inherit the most significant status found beneath them.
pub struct GitStatusCache {
    repo: Repository,
    workdir: PathBuf,
    hash: Option<[u8; 32]>,
    map: HashMap<PathBuf, GitStatus>,
}

impl GitStatusCache {
    /// Discover the repository containing `dir`.
    pub fn open(dir: &Path) -> Result<Self> {
        let repo = Repository::discover(dir)?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| TreecolError::invalid_path("bare repository has no working directory"))?
            .to_path_buf();

        Ok(GitStatusCache {
            repo,
            workdir,
            hash: None,
            map: HashMap::new(),
        })
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Re-read repository status. Returns `true` when the map was rebuilt.
    pub fn refresh(&mut self) -> Result<bool> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(true)
            .recurse_untracked_dirs(true)
            .include_ignored(true);
        let statuses = self.repo.statuses(Some(&mut opts))?;

        let mut entries: Vec<(String, GitStatus)> = Vec::with_capacity(statuses.len());
        for entry in statuses.iter() {
            let path = match entry.path() {
                Some(p) => p.to_string(),
                None => continue,
            };
            let status = classify(entry.status());
            if status.is_clean() {
                continue;
            }
            entries.push((path, status));
        }
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let mut hasher = Sha256::new();
        for (path, status) in &entries {
            hasher.update(path.as_bytes());
            hasher.update(b"\0");
            hasher.update(status.code().as_bytes());
            hasher.update(b"\n");
        }
        let digest: [u8; 32] = hasher.finalize().into();

        if self.hash == Some(digest) {
            log::debug!("git status unchanged, keeping cached map");
            return Ok(false);
        }
        self.hash = Some(digest);

        self.map.clear();
        for (path, status) in entries {
            let abs = self.workdir.join(&path);

            if status != GitStatus::Ignored {
                // Bubble up so collapsed directories still signal changes.
                let mut dir = abs.parent().map(Path::to_path_buf);
                while let Some(d) = dir {
                    if d == self.workdir || !d.starts_with(&self.workdir) {
                        break;
                    }
                    let slot = self.map.entry(d.clone()).or_insert(GitStatus::Clean);
                    if status.severity() > slot.severity() {
                        *slot = status;
                    }
                    dir = d.parent().map(Path::to_path_buf);
                }
            }

            let slot = self.map.entry(abs).or_insert(GitStatus::Clean);
            if status.severity() > slot.severity() {
                *slot = status;
            }
        }
        log::debug!("git status map rebuilt: {} entries", self.map.len());

        Ok(true)
    }

    /// Status for an absolute path; unknown paths are clean.
    pub fn status_of(&self, path: &Path) -> GitStatus {
        self.map.get(path).copied().unwrap_or(GitStatus::Clean)
    }
}
