use crate::artifacts::status::status_report::{StatusFilter, StatusReport};
use crate::config::DEFAULT_GIT_PROGRAM;
use crate::errors::EvaluationError;
use derive_new::new;
use std::future::Future;
use std::io;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, ChildStdout, Command};
use tracing::debug;

/// Anything that can tell which files of a working tree have changes
pub trait StatusSource {
    fn status(
        &self,
        work_tree: &Path,
    ) -> impl Future<Output = Result<StatusReport, EvaluationError>>;
}

/// Status source backed by `git status --porcelain`
///
/// The subprocess runs inside the working tree; its stderr goes straight to
/// ours. Without a timeout a hung git hangs the scan. Lines the filter does
/// not admit are dropped before parsing.
#[derive(Debug, Clone, new)]
pub struct GitStatus {
    program: String,
    timeout: Option<Duration>,
    #[new(default)]
    filter: StatusFilter,
}

impl Default for GitStatus {
    fn default() -> Self {
        GitStatus::new(DEFAULT_GIT_PROGRAM.to_string(), None)
    }
}

impl GitStatus {
    pub fn with_filter(mut self, filter: StatusFilter) -> Self {
        self.filter = filter;
        self
    }
}

impl StatusSource for GitStatus {
    async fn status(&self, work_tree: &Path) -> Result<StatusReport, EvaluationError> {
        debug!(program = %self.program, work_tree = %work_tree.display(), "Querying status");

        let mut child = Command::new(&self.program)
            .args(["status", "--porcelain"])
            .current_dir(work_tree)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| EvaluationError::StatusSpawn {
                program: self.program.clone(),
                work_tree: work_tree.to_path_buf(),
                source,
            })?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| EvaluationError::StatusRead {
                work_tree: work_tree.to_path_buf(),
                source: io::Error::other("stdout was not captured"),
            })?;

        let collect = self.collect(work_tree, stdout, &mut child);

        match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, collect).await.map_err(|_| {
                EvaluationError::Timeout {
                    work_tree: work_tree.to_path_buf(),
                    timeout,
                }
            })?,
            None => collect.await,
        }
    }
}

impl GitStatus {
    async fn collect(
        &self,
        work_tree: &Path,
        stdout: ChildStdout,
        child: &mut Child,
    ) -> Result<StatusReport, EvaluationError> {
        let read_error = |source: io::Error| EvaluationError::StatusRead {
            work_tree: work_tree.to_path_buf(),
            source,
        };

        let mut report = StatusReport::default();
        let mut lines = BufReader::new(stdout).split(b'\n');

        // file names are not necessarily UTF-8
        while let Some(line) = lines.next_segment().await.map_err(read_error)? {
            let line = String::from_utf8_lossy(&line);
            let line = line.trim_end_matches('\r');
            if self.filter.admits(line) {
                report.push_line(work_tree, line);
            }
        }

        let status = child.wait().await.map_err(read_error)?;
        if !status.success() {
            return Err(EvaluationError::StatusExit {
                work_tree: work_tree.to_path_buf(),
                status,
            });
        }

        Ok(report)
    }
}
