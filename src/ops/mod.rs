//! Item operations
//!
//! Each operation reads the list through the [`Store`](crate::store::Store),
//! changes it in memory, writes it back and prints one status line.
//! Recoverable failures come back as errors for the caller to report.

pub mod add;
pub mod create;
pub mod edit;
pub mod list;

// Re-export main functions
pub use add::*;
pub use create::*;
pub use edit::*;
pub use list::*;

use crate::error::{Result, TodoError};
use chrono::{Local, NaiveDateTime};

/// Local wall-clock time, as stored in the list
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Split `[id, value]`, rejecting any other number of values
fn id_and_value(values: &[String]) -> Result<(&str, &str)> {
    match values {
        [id, value] => Ok((id.as_str(), value.as_str())),
        _ => Err(TodoError::Mismatched),
    }
}
