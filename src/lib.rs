//! todo-cli - A small to-do list manager
//!
//! Items live in a single JSON document; every command loads the whole
//! document, changes it and writes it back.

// Public modules
pub mod cli;
pub mod error;
pub mod ops;
pub mod settings;
pub mod store;
pub mod ui;

// Re-export commonly used types
pub use error::{Result, TodoError};

/// Current version of todo-cli
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
