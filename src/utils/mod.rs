//! Utility modules for common functionality
//!
//! Logging, diagnostics naming and output writing.

pub mod logger;
pub mod tag_utils;
pub mod write_utils;
