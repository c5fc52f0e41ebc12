//! `--list`

use crate::error::Result;
use crate::store::{Filter, Store};
use std::io::Write;

/// Print `<id> <description>` for every item the filter accepts.
///
/// An empty list prints a hint instead, before the filter is even looked at.
pub fn list_items<W: Write>(store: &Store, filter: &str, out: &mut W) -> Result<()> {
    let list = store.read()?;

    if list.is_empty() {
        writeln!(out, "List is empty, use \"--add\" to add new items to the list.")?;
        return Ok(());
    }

    let filter: Filter = filter.parse()?;
    for (id, description) in list.filtered(filter) {
        writeln!(out, "{} {}", id, description)?;
    }
    Ok(())
}
