use crate::areas::refs::Refs;
use crate::areas::walker::FileKind;
use crate::artifacts::paths::clean_path;
use crate::errors::DiscoveryError;
use derive_new::new;
use std::path::{Path, PathBuf};

/// Name of the file or directory that marks a working copy
pub const GIT_MARKER: &str = ".git";

/// Regex pattern for the pointer stored in a `.git` file
const GITDIR_REGEX: &str = r"^gitdir: (.*)";

/// A working copy found during discovery
///
/// `metadata_dir` is where git keeps its data. `work_tree` is always the
/// directory holding the `.git` marker, even when the marker is a file that
/// points somewhere else (submodules, linked worktrees).
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Repository {
    metadata_dir: PathBuf,
    work_tree: PathBuf,
}

impl Repository {
    /// Build a repository from a `.git` marker found by the walker
    ///
    /// A regular file is read as an indirection (`gitdir: <path>`), anything
    /// else is taken as the metadata directory itself.
    pub fn resolve(marker: &Path, kind: FileKind) -> Result<Self, DiscoveryError> {
        let work_tree = match marker.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let metadata_dir = match kind {
            FileKind::File => Self::read_gitdir(marker)?,
            FileKind::Dir | FileKind::Symlink | FileKind::Other => marker.to_path_buf(),
        };

        Ok(Repository::new(metadata_dir, work_tree))
    }

    fn read_gitdir(marker: &Path) -> Result<PathBuf, DiscoveryError> {
        let content =
            std::fs::read_to_string(marker).map_err(|source| DiscoveryError::Unreadable {
                path: marker.to_path_buf(),
                source,
            })?;

        let pointer = regex::Regex::new(GITDIR_REGEX)?
            .captures(&content)
            .map(|captures| captures[1].trim_end().to_string())
            .filter(|pointer| !pointer.is_empty())
            .ok_or_else(|| DiscoveryError::NotAGitDir(marker.to_path_buf()))?;

        let base = marker.parent().unwrap_or_else(|| Path::new("."));

        Ok(clean_path(&base.join(pointer)))
    }

    pub fn metadata_dir(&self) -> &Path {
        &self.metadata_dir
    }

    pub fn work_tree(&self) -> &Path {
        &self.work_tree
    }

    /// Whether the metadata lives somewhere other than `<work_tree>/.git`
    pub fn is_redirected(&self) -> bool {
        clean_path(&self.work_tree.join(GIT_MARKER)) != self.metadata_dir
    }

    pub fn refs(&self) -> Refs {
        Refs::new(self.metadata_dir.clone().into_boxed_path())
    }
}

/// The work tree, followed by the metadata dir when a `.git` file points away
impl std::fmt::Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.work_tree.display())?;
        if self.is_redirected() {
            write!(f, " (gitdir: {})", self.metadata_dir.display())?;
        }
        Ok(())
    }
}
