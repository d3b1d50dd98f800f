//! JSON-backed local database of collected pages.
//!
//! The file holds a JSON array of `{title, url, summary}` records. A missing
//! or unreadable file loads as an empty store; writes are pretty-printed.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use qseek_search::{Database, SearchItem};

/// One stored page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    pub title: String,
    pub url: String,
    pub summary: String,
}

impl SearchItem for Record {
    fn search_key(&self) -> &str {
        &self.title
    }
}

/// Records persisted at a fixed path.
#[derive(Debug)]
pub struct LocalStore {
    path: PathBuf,
    records: Vec<Record>,
}

impl LocalStore {
    /// Open the store at `path`, loading whatever is there.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = Self::load(&path);
        debug!(path = %path.display(), records = records.len(), "opened local store");
        Self { path, records }
    }

    fn load(path: &Path) -> Vec<Record> {
        let Ok(source) = fs::read_to_string(path) else {
            return Vec::new();
        };
        match serde_json::from_str(&source) {
            Ok(records) => records,
            Err(e) => {
                warn!(path = %path.display(), "ignoring unreadable store: {e}");
                Vec::new()
            }
        }
    }

    /// Write all records back to disk.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create store directory: {}", parent.display())
                })?;
            }
        }
        let json = serde_json::to_string_pretty(&self.records)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write store: {}", self.path.display()))
    }

    /// Append records whose `(title, url)` is not stored yet, then save if
    /// anything was added. Returns the number added.
    pub fn add_items(&mut self, items: impl IntoIterator<Item = Record>) -> Result<usize> {
        let mut seen: HashSet<(String, String)> = self
            .records
            .iter()
            .map(|r| (r.title.clone(), r.url.clone()))
            .collect();

        let before = self.records.len();
        for item in items {
            if seen.insert((item.title.clone(), item.url.clone())) {
                self.records.push(item);
            }
        }
        let added = self.records.len() - before;
        if added > 0 {
            self.save()?;
        }
        Ok(added)
    }

    /// Records whose title or summary contains `keyword`.
    pub fn query(&self, keyword: &str) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|r| r.title.contains(keyword) || r.summary.contains(keyword))
            .collect()
    }

    /// Every record, in insertion order.
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    /// Titles as a searchable database.
    pub fn database(&self) -> Database {
        Database::from_items(&self.records)
    }

    /// Where the store lives.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, url: &str, summary: &str) -> Record {
        Record {
            title: title.into(),
            url: url.into(),
            summary: summary.into(),
        }
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path().join("none.json"));
        assert!(store.all().is_empty());
    }

    #[test]
    fn test_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        fs::write(&path, "{not json").unwrap();
        assert!(LocalStore::open(&path).all().is_empty());
    }

    #[test]
    fn test_add_deduplicates_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("db.json");

        let mut store = LocalStore::open(&path);
        let added = store
            .add_items([
                record("Grover", "https://a", "amplitude amplification"),
                record("Grover", "https://a", "duplicate"),
                record("Grover", "https://b", "same title, new url"),
            ])
            .unwrap();
        assert_eq!(added, 2);

        let reopened = LocalStore::open(&path);
        assert_eq!(reopened.all().len(), 2);
        assert_eq!(reopened.all()[0].summary, "amplitude amplification");

        let mut again = reopened;
        assert_eq!(again.add_items([record("Grover", "https://a", "")]).unwrap(), 0);
    }

    #[test]
    fn test_query_matches_title_or_summary() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = LocalStore::open(dir.path().join("db.json"));
        store
            .add_items([
                record("Quantum search", "u1", ""),
                record("Sorting", "u2", "not quantum at all"),
                record("Hashing", "u3", "buckets"),
            ])
            .unwrap();

        let hits: Vec<&str> = store.query("quantum").iter().map(|r| r.url.as_str()).collect();
        assert_eq!(hits, vec!["u2"]);
        assert_eq!(store.query("Quantum").len(), 1);
        assert_eq!(store.database().items(), &["Quantum search", "Sorting", "Hashing"]);
    }

    #[test]
    fn test_records_tolerate_missing_fields() {
        let records: Vec<Record> = serde_json::from_str(r#"[{"title": "only a title"}]"#).unwrap();
        assert_eq!(records[0].url, "");
    }
}
