//! Reference probes
//!
//! Only the loose reference layout is inspected: a repository "has remotes"
//! when `refs/remotes` exists inside its metadata directory, and "has a
//! stash" when `refs/stash` does. Packed refs are not consulted.

use crate::errors::EvaluationError;
use derive_new::new;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const REFS_DIR: &str = "refs";
const REMOTES_DIR: &str = "remotes";
const STASH_REF: &str = "stash";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata directory (typically `.git`)
    path: Box<Path>,
}

impl Refs {
    pub fn refs_path(&self) -> PathBuf {
        self.path.join(REFS_DIR)
    }

    pub fn remotes_path(&self) -> PathBuf {
        self.refs_path().join(REMOTES_DIR)
    }

    pub fn stash_path(&self) -> PathBuf {
        self.refs_path().join(STASH_REF)
    }

    /// Whether any remote-tracking reference directory exists
    ///
    /// A missing path means no remotes; any other I/O failure is an error.
    pub fn has_remotes(&self) -> Result<bool, EvaluationError> {
        Self::probe(&self.remotes_path())
    }

    pub fn has_stash(&self) -> Result<bool, EvaluationError> {
        Self::probe(&self.stash_path())
    }

    fn probe(path: &Path) -> Result<bool, EvaluationError> {
        match std::fs::metadata(path) {
            Ok(_) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(EvaluationError::RefsProbe {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}
