use crate::areas::repository::Repository;
use crate::artifacts::status::git_status::StatusSource;
use crate::errors::EvaluationError;
use crate::scanner::Scanner;
use colored::Colorize;
use derive_new::new;
use std::fmt::Display;
use std::io::Write;
use tracing::{debug, info};

/// Tally of a finished report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct ReportSummary {
    pub total: usize,
    pub clean: usize,
}

impl ReportSummary {
    pub fn dirty(&self) -> usize {
        self.total - self.clean
    }

    pub fn all_clean(&self) -> bool {
        self.clean == self.total
    }

    /// One line verdict on how many repositories are clean
    pub fn closing_remark(&self) -> String {
        let (clean, total) = (self.clean, self.total);

        if self.all_clean() {
            format!("All of your {total} repositories are clean. Very Nice!")
        } else if clean * 4 >= total * 3 {
            format!(".. you have {clean} clean repositories out of {total}. Nice!")
        } else if clean * 2 >= total {
            format!(".. you have {clean} clean repositories out of {total}. Good!")
        } else if clean * 4 >= total {
            format!(".. you have {clean} clean repositories out of {total}.")
        } else if clean > 0 {
            format!(".. only {clean} of your {total} repositories are clean.")
        } else {
            "You have no clean repositories :-(".to_string()
        }
    }
}

impl<S: StatusSource> Scanner<S> {
    /// Discover repositories under the configured root and report on them
    pub async fn report(&self) -> Result<ReportSummary, EvaluationError> {
        let repositories = self.discover().await?;
        info!(count = repositories.len(), "Found repositories");

        self.report_repositories(&repositories).await
    }

    /// Report on `repositories` in the given order
    ///
    /// Stops at the first evaluation error; whatever was written before it
    /// stays written.
    pub async fn report_repositories(
        &self,
        repositories: &[Repository],
    ) -> Result<ReportSummary, EvaluationError> {
        let mut summary = ReportSummary::default();

        for repository in repositories {
            summary.total += 1;
            if self.report_repository(repository).await? {
                summary.clean += 1;
            }
        }

        if self.config().summary() {
            self.write_line(summary.closing_remark())?;
        }

        self.writer().flush().map_err(EvaluationError::Output)?;

        Ok(summary)
    }

    /// Returns whether the repository is clean
    async fn report_repository(&self, repository: &Repository) -> Result<bool, EvaluationError> {
        let refs = repository.refs();

        if !refs.has_remotes()? {
            self.write_line(format!("{} {}", self.paint("No remotes:"), repository))?;
        }

        if self.config().stashes() && refs.has_stash()? {
            self.write_line(format!("{} {}", self.paint("Stashed:"), repository))?;
        }

        let report = self
            .status_source()
            .status(repository.work_tree())
            .await?;

        if report.is_clean() {
            debug!(repository = %repository, "Clean");
            return Ok(true);
        }

        self.write_line(self.paint(&repository.to_string()))?;
        for (code, count) in report.counts() {
            self.write_line(format!("  {:?}: {}", code, count))?;
        }

        Ok(false)
    }

    fn write_line(&self, line: impl Display) -> Result<(), EvaluationError> {
        writeln!(self.writer(), "{}", line).map_err(EvaluationError::Output)
    }

    fn paint(&self, text: &str) -> String {
        if self.config().colorize() {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }
}
