//! Persistence of the to-do list
//!
//! This module defines the list types and the single JSON document
//! they are stored in.

pub mod file;
pub mod types;

// Re-export main types
pub use file::*;
pub use types::*;
