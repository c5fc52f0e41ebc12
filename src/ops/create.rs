//! `--create`

use crate::error::Result;
use crate::store::Store;
use std::io::Write;

/// Create an empty list unless one already exists
pub fn create_list<W: Write>(store: &Store, out: &mut W) -> Result<()> {
    if store.create()? {
        store
            .reporter()
            .print_info(&format!("List file: {}", store.path().display()));
        writeln!(out, "List has been created")?;
    } else {
        writeln!(out, "List already exists")?;
    }
    Ok(())
}
