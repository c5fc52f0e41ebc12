//! `--update` and `--mark`

use crate::error::{Result, TodoError};
use crate::ops::{id_and_value, now};
use crate::store::{Status, Store};
use std::io::Write;

/// Replace the description of an existing item. `values` is `[id, description]`.
pub fn update_item<W: Write>(store: &Store, values: &[String], out: &mut W) -> Result<()> {
    let (id, description) = id_and_value(values)?;

    let mut list = store.read()?;
    let item = list
        .get_mut(id)
        .ok_or_else(|| TodoError::ItemNotFound(id.to_string()))?;
    item.set_description(description, now());
    store.write(&list)?;

    writeln!(out, "Description has been updated for {}", id)?;
    Ok(())
}

/// Move an existing item to another status. `values` is `[id, status]`.
///
/// The status is validated before the list is read.
pub fn mark_item<W: Write>(store: &Store, values: &[String], out: &mut W) -> Result<()> {
    let (id, status) = id_and_value(values)?;
    let status: Status = status.parse()?;

    let mut list = store.read()?;
    let item = list
        .get_mut(id)
        .ok_or_else(|| TodoError::ItemNotFound(id.to_string()))?;
    item.set_status(status, now());
    store.write(&list)?;

    writeln!(out, "Status has been updated for {}", id)?;
    Ok(())
}
