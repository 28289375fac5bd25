//! What a scan does with the repositories it finds
//!
//! - `report`: remote, stash and status checks printed per repository

pub mod report;
