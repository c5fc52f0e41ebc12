//! Core list types
//!
//! This module defines the data structures stored in the list document.

use crate::error::{Result, TodoError};
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Lifecycle tag of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl Status {
    /// All recognized statuses, in display order
    pub const ALL: [Status; 3] = [Status::Todo, Status::InProgress, Status::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in-progress",
            Status::Done => "done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = TodoError;

    /// Case-insensitive parse
    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.to_lowercase();
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == lowered)
            .ok_or_else(|| TodoError::InvalidStatus(s.to_string()))
    }
}

/// Status filter accepted by `--list`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    Only(Status),
}

impl Filter {
    pub fn matches(&self, status: Status) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for Filter {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Filter::All)
        } else {
            s.parse().map(Filter::Only)
        }
    }
}

/// An ISO-8601 timestamp as found in the document.
///
/// New timestamps are local and carry no offset. Offset forms and anything
/// else that is not a plain local time are kept as read and written back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Timestamp {
    Local(NaiveDateTime),
    Offset(DateTime<FixedOffset>),
    Raw(String),
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Timestamp::Local(value)
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Item {
    pub description: String,

    /// Set once when the item is added
    pub created_at: Timestamp,

    /// Null until the first description or status change
    #[serde(default)]
    pub updated_at: Option<Timestamp>,

    #[serde(default)]
    pub status: Status,
}

impl Item {
    /// Create a fresh `todo` item
    pub fn new(description: impl Into<String>, now: NaiveDateTime) -> Self {
        Item {
            description: description.into(),
            created_at: now.into(),
            updated_at: None,
            status: Status::Todo,
        }
    }

    pub fn set_description(&mut self, description: impl Into<String>, now: NaiveDateTime) {
        self.description = description.into();
        self.updated_at = Some(now.into());
    }

    pub fn set_status(&mut self, status: Status, now: NaiveDateTime) {
        self.status = status;
        self.updated_at = Some(now.into());
    }
}

/// The whole list: items keyed by their id, in document order.
///
/// Keys are kept exactly as stored so lookups compare against the raw key.
/// Lookups are linear scans; a list is small and read whole on every command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    entries: Vec<(String, Item)>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, item)| item)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Item> {
        self.entries
            .iter_mut()
            .find(|(key, _)| key == id)
            .map(|(_, item)| item)
    }

    /// Insert or replace an item. A replaced item keeps its position.
    pub fn insert(&mut self, id: impl Into<String>, item: Item) {
        let id = id.into();
        match self.get_mut(&id) {
            Some(existing) => *existing = item,
            None => self.entries.push((id, item)),
        }
    }

    /// Next free id: one past the largest existing id, or 1 for an empty list
    ///
    /// Fails on a key that is not a decimal integer, and when the largest id
    /// leaves no room for another.
    pub fn next_id(&self) -> Result<u64> {
        let mut max: u64 = 0;
        for (key, _) in &self.entries {
            let id: u64 = key
                .parse()
                .map_err(|_| TodoError::CorruptId(key.clone()))?;
            max = max.max(id);
        }
        max.checked_add(1)
            .ok_or_else(|| TodoError::IdOverflow(max.to_string()))
    }

    /// Add a new item under the next free id, returning that id
    pub fn push(&mut self, item: Item) -> Result<u64> {
        let id = self.next_id()?;
        self.entries.push((id.to_string(), item));
        Ok(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Item)> {
        self.entries.iter().map(|(key, item)| (key.as_str(), item))
    }

    /// `(id, description)` pairs of the items the filter accepts, in order
    pub fn filtered(&self, filter: Filter) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.iter()
            .filter(move |(_, item)| filter.matches(item.status))
            .map(|(key, item)| (key, item.description.as_str()))
    }
}

impl Serialize for TodoList {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, item) in &self.entries {
            map.serialize_entry(key, item)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TodoList {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(TodoListVisitor)
    }
}

struct TodoListVisitor;

impl<'de> Visitor<'de> for TodoListVisitor {
    type Value = TodoList;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of item ids to items")
    }

    fn visit_map<A: MapAccess<'de>>(
        self,
        mut access: A,
    ) -> std::result::Result<TodoList, A::Error> {
        let mut list = TodoList::new();
        while let Some((key, item)) = access.next_entry::<String, Item>()? {
            list.insert(key, item);
        }
        Ok(list)
    }
}
