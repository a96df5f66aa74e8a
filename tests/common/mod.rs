// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use printconv::{CallbackProgress, ConvertEvent};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::TempDir;

/// Create a scratch tree from `(relative path, contents)` pairs.
///
/// Returns the TempDir - keep it alive to prevent cleanup.
pub fn setup_tree(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = tempfile::tempdir().unwrap();
    for (rel, contents) in files {
        write_bytes(temp_dir.path(), rel, contents.as_bytes());
    }
    temp_dir
}

/// Write raw bytes to a file in the tree, creating parent directories
pub fn write_bytes(root: &Path, rel: &str, contents: &[u8]) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
}

/// Read a file in the tree as a string
pub fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

/// Bytes and modification time of a file, for untouched-file checks
pub fn snapshot(root: &Path, rel: &str) -> (Vec<u8>, SystemTime) {
    let path = root.join(rel);
    let bytes = fs::read(&path).unwrap();
    let mtime = fs::metadata(&path).unwrap().modified().unwrap();
    (bytes, mtime)
}

/// Collects progress events for later assertions
#[derive(Default)]
pub struct EventLog {
    events: RefCell<Vec<ConvertEvent>>,
}

impl EventLog {
    pub fn progress(&self) -> CallbackProgress<impl Fn(ConvertEvent) + '_> {
        CallbackProgress::new(move |event| self.events.borrow_mut().push(event))
    }

    pub fn events(&self) -> Vec<ConvertEvent> {
        self.events.borrow().clone()
    }

    /// Paths from `Processing` events, in order
    pub fn processed(&self) -> Vec<PathBuf> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                ConvertEvent::Processing(p) => Some(p.clone()),
                _ => None,
            })
            .collect()
    }

    /// Paths from `Updated` events, in order
    pub fn updated(&self) -> Vec<PathBuf> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                ConvertEvent::Updated { path, .. } => Some(path.clone()),
                _ => None,
            })
            .collect()
    }
}
