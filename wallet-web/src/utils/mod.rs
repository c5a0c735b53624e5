//! Widget utilities

pub mod config;
pub mod format;
