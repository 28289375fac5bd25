use crate::areas::repository::{GIT_MARKER, Repository};
use crate::areas::walker;
use crate::artifacts::status::git_status::{GitStatus, StatusSource};
use crate::config::ScanConfig;
use crate::errors::EvaluationError;
use std::cell::{RefCell, RefMut};
use std::path::Path;
use tracing::{debug, warn};

/// Everything a scan needs: where to look, how to ask for status, where to
/// print
pub struct Scanner<S: StatusSource = GitStatus> {
    config: ScanConfig,
    status_source: S,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Scanner<GitStatus> {
    pub fn from_config(config: ScanConfig, writer: Box<dyn std::io::Write>) -> Self {
        let status_source = GitStatus::new(config.git_program().to_string(), config.timeout())
            .with_filter(config.filter());
        Scanner::new(config, status_source, writer)
    }
}

impl<S: StatusSource> Scanner<S> {
    pub fn new(config: ScanConfig, status_source: S, writer: Box<dyn std::io::Write>) -> Self {
        Scanner {
            config,
            status_source,
            writer: RefCell::new(writer),
        }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn status_source(&self) -> &S {
        &self.status_source
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub async fn discover(&self) -> Result<Vec<Repository>, EvaluationError> {
        discover_repositories(self.config.root()).await
    }
}

/// Find every working copy below `root`, sorted by working tree
///
/// Markers that cannot be resolved are logged and left out.
pub async fn discover_repositories(root: &Path) -> Result<Vec<Repository>, EvaluationError> {
    let mut repositories = walker::walk(root, |path, kind| {
        if path.file_name()? != GIT_MARKER {
            return None;
        }

        match Repository::resolve(path, kind) {
            Ok(repository) => Some(repository),
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = &err as &dyn std::error::Error,
                    "Failed to resolve repository"
                );
                None
            }
        }
    })
    .await?;

    // byte order, so `a-b` sorts before `a/b`
    repositories.sort_by(|a, b| a.work_tree().as_os_str().cmp(b.work_tree().as_os_str()));
    debug!(count = repositories.len(), root = %root.display(), "Discovered repositories");

    Ok(repositories)
}
