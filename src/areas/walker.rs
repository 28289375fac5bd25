//! Parallel directory walk
//!
//! Every immediate subdirectory of the scan root is walked by its own worker
//! on the blocking pool. Each worker keeps what it finds in a local `Vec`;
//! the vectors are merged once every worker is done.

use crate::artifacts::paths::clean_path;
use crate::errors::EvaluationError;
use std::fs::FileType;
use std::path::Path;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Type of a filesystem entry, as seen without following symlinks
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileKind {
    File,
    Dir,
    Symlink,
    Other,
}

impl From<FileType> for FileKind {
    fn from(file_type: FileType) -> Self {
        if file_type.is_symlink() {
            FileKind::Symlink
        } else if file_type.is_dir() {
            FileKind::Dir
        } else if file_type.is_file() {
            FileKind::File
        } else {
            FileKind::Other
        }
    }
}

/// Walk `root` and collect whatever `visit` keeps
///
/// `visit` sees every entry (the root included) exactly once, in no
/// particular order. Symlinks below the root are reported but never followed.
/// Entries that cannot be read are logged and skipped; an unreadable root is
/// an error.
pub async fn walk<T, F>(root: &Path, visit: F) -> Result<Vec<T>, EvaluationError>
where
    T: Send + 'static,
    F: Fn(&Path, FileKind) -> Option<T> + Send + Sync + 'static,
{
    let root = clean_path(root);
    let root_error = |source: std::io::Error| EvaluationError::WalkRoot {
        path: root.clone(),
        source,
    };

    let metadata = std::fs::metadata(&root).map_err(root_error)?;
    let visit = Arc::new(visit);
    let mut found = Vec::new();

    if let Some(item) = (*visit)(&root, metadata.file_type().into()) {
        found.push(item);
    }

    if !metadata.is_dir() {
        return Ok(found);
    }

    let mut workers = JoinSet::new();

    for entry in std::fs::read_dir(&root).map_err(root_error)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(root = %root.display(), error = %err, "Skipping unreadable entry");
                continue;
            }
        };

        let path = clean_path(&root.join(entry.file_name()));
        let kind = match entry.file_type() {
            Ok(file_type) => FileKind::from(file_type),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Skipping entry of unknown type");
                continue;
            }
        };

        if kind == FileKind::Dir {
            let visit = Arc::clone(&visit);
            workers.spawn_blocking(move || walk_subtree(&path, &*visit));
        } else if let Some(item) = (*visit)(&path, kind) {
            found.push(item);
        }
    }

    debug!(root = %root.display(), workers = workers.len(), "Walking subtrees");

    while let Some(batch) = workers.join_next().await {
        found.extend(batch?);
    }

    Ok(found)
}

fn walk_subtree<T, F>(subtree: &Path, visit: &F) -> Vec<T>
where
    F: Fn(&Path, FileKind) -> Option<T>,
{
    WalkDir::new(subtree)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => visit(entry.path(), entry.file_type().into()),
            Err(err) => {
                let path = err.path().map(|p| p.display().to_string());
                warn!(path = ?path, error = %err, "Skipping unreadable subtree");
                None
            }
        })
        .collect()
}
