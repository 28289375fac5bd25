//! Error kinds for a scan
//!
//! Two kinds with different blast radius:
//!
//! - [`DiscoveryError`]: a single `.git` candidate could not be resolved. The
//!   candidate is logged and dropped; the scan continues.
//! - [`EvaluationError`]: the environment is broken (git cannot run, refs
//!   cannot be probed, the root cannot be read). The scan stops and the
//!   error is handed back to the caller.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Failure to turn a `.git` marker into a repository.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("cannot read {path:?}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("not a git dir: {0:?}")]
    NotAGitDir(PathBuf),

    #[error("invalid gitdir pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Failure that invalidates the whole report.
#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("cannot read scan root {path:?}")]
    WalkRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to probe {path:?}")]
    RefsProbe {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start `{program} status` in {work_tree:?}")]
    StatusSpawn {
        program: String,
        work_tree: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read status output in {work_tree:?}")]
    StatusRead {
        work_tree: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("`git status` in {work_tree:?} exited with {status}")]
    StatusExit {
        work_tree: PathBuf,
        status: std::process::ExitStatus,
    },

    #[error("`git status` in {work_tree:?} did not finish within {timeout:?}")]
    Timeout {
        work_tree: PathBuf,
        timeout: Duration,
    },

    #[error("walk worker failed")]
    Worker(#[from] tokio::task::JoinError),

    #[error("failed to write report")]
    Output(#[source] std::io::Error),
}
