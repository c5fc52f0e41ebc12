//! Common test utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use todo_cli::store::Store;

/// A temporary directory with a path for the list file (not yet created)
pub fn temp_list_path() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let list_path = temp_dir.path().join("ToDoList.json");
    (temp_dir, list_path)
}

/// A store with an empty list already created
pub fn created_store() -> (TempDir, Store) {
    let (temp_dir, list_path) = temp_list_path();
    let store = Store::new(list_path);
    store.create().unwrap();
    (temp_dir, store)
}

/// A store whose document is written verbatim
pub fn store_with_document(content: &str) -> (TempDir, Store) {
    let (temp_dir, list_path) = temp_list_path();
    fs::write(&list_path, content).unwrap();
    (temp_dir, Store::new(list_path))
}

pub fn values(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}
