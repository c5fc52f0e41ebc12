//! The list document on disk

use crate::error::{Result, TodoError};
use crate::store::types::TodoList;
use crate::ui::Reporter;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};

/// Indentation of the pretty-printed document
const INDENT: &[u8] = b"    ";

/// Sole gateway to the persisted list.
///
/// Every read and write loads or replaces the whole document.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    reporter: Reporter,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Store {
            path: path.into(),
            reporter: Reporter::default(),
        }
    }

    pub fn with_reporter(mut self, reporter: Reporter) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Load the whole list
    pub fn read(&self) -> Result<TodoList> {
        self.ensure_exists()?;

        let contents = fs::read_to_string(&self.path)?;
        let list: TodoList = serde_json::from_str(&contents)?;

        self.reporter.print_debug(&format!(
            "Read {} item(s) from {}",
            list.len(),
            self.path.display()
        ));
        Ok(list)
    }

    /// Replace the whole document with `list`
    pub fn write(&self, list: &TodoList) -> Result<()> {
        self.ensure_exists()?;
        self.write_unchecked(list)
    }

    /// Create an empty list. Returns `false`, without writing, when a list
    /// already exists.
    pub fn create(&self) -> Result<bool> {
        if self.exists() {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                self.reporter
                    .print_debug(&format!("Creating directory {}", parent.display()));
                fs::create_dir_all(parent)?;
            }
        }

        self.write_unchecked(&TodoList::new())?;
        Ok(true)
    }

    fn ensure_exists(&self) -> Result<()> {
        if self.exists() {
            Ok(())
        } else {
            self.reporter
                .print_debug(&format!("No list at {}", self.path.display()));
            Err(TodoError::NoList)
        }
    }

    fn write_unchecked(&self, list: &TodoList) -> Result<()> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        list.serialize(&mut serializer)?;

        fs::write(&self.path, buf)?;

        self.reporter.print_debug(&format!(
            "Wrote {} item(s) to {}",
            list.len(),
            self.path.display()
        ));
        Ok(())
    }
}
