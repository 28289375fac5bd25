//! Filesystem side of a scan
//!
//! - `walker`: parallel traversal of the scan root
//! - `repository`: turning `.git` markers into repositories
//! - `refs`: probes of the loose reference layout

pub mod refs;
pub mod repository;
pub mod walker;
