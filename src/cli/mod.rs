//! CLI interface and argument parsing
//!
//! This module handles command-line parsing, help generation and the
//! dispatch of operation flags.

pub mod app;

// Re-export main types
pub use app::*;
