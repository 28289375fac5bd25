//! Values produced while evaluating a repository
//!
//! - `paths`: lexical path cleaning
//! - `status`: status reports and how to obtain them

pub mod paths;
pub mod status;
