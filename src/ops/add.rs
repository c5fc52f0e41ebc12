//! `--add`

use crate::error::Result;
use crate::ops::now;
use crate::store::{Item, Store};
use std::io::Write;

/// Append a new `todo` item and return its id
pub fn add_item<W: Write>(store: &Store, description: &str, out: &mut W) -> Result<u64> {
    let mut list = store.read()?;

    let id = list.push(Item::new(description, now()))?;
    store.write(&list)?;

    writeln!(out, "Item {} added", id)?;
    Ok(id)
}
