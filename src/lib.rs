//! Find the git working copies below a directory and point out the ones
//! that have uncommitted changes or no remotes.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;
pub mod scanner;

pub use artifacts::status::status_report::StatusFilter;
pub use commands::report::ReportSummary;
pub use config::ScanConfig;
pub use errors::{DiscoveryError, EvaluationError};
pub use scanner::Scanner;
