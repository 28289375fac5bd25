//! Working tree status
//!
//! - `status_report`: porcelain parsing into per-code path lists
//! - `git_status`: the `StatusSource` seam and its `git status` implementation

pub mod git_status;
pub mod status_report;
