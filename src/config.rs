//! Scan configuration.

use crate::artifacts::status::status_report::StatusFilter;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default git executable.
pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// Configuration for a single scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory to search for working copies.
    root: PathBuf,
    /// Whether repositories with stashed changes are reported.
    stashes: bool,
    /// Whether a closing clean-ratio line is printed.
    summary: bool,
    /// Upper bound for a single `git status` run.
    timeout: Option<Duration>,
    /// git executable used for status queries.
    git_program: String,
    /// Whether report lines are colored.
    colorize: bool,
    /// Kinds of change that make a repository dirty.
    filter: StatusFilter,
}

impl ScanConfig {
    /// Creates a configuration scanning `root` with everything optional off.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            stashes: false,
            summary: false,
            timeout: None,
            git_program: DEFAULT_GIT_PROGRAM.to_string(),
            colorize: false,
            filter: StatusFilter::default(),
        }
    }

    pub fn with_stashes(mut self, stashes: bool) -> Self {
        self.stashes = stashes;
        self
    }

    pub fn with_summary(mut self, summary: bool) -> Self {
        self.summary = summary;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_git_program(mut self, git_program: String) -> Self {
        self.git_program = git_program;
        self
    }

    pub fn with_colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    pub fn with_filter(mut self, filter: StatusFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn stashes(&self) -> bool {
        self.stashes
    }

    pub fn summary(&self) -> bool {
        self.summary
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn git_program(&self) -> &str {
        &self.git_program
    }

    pub fn colorize(&self) -> bool {
        self.colorize
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }
}
