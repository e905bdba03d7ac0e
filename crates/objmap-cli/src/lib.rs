//! CLI library components for objmap.

pub mod commands;
pub mod logging;
pub mod summary;
