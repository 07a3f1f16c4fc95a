//! Durable record of the links this tool has created.
//!
//! The filesystem cannot distinguish "our link" from one a human made, so
//! the db is the sole source of truth for what cleanup may remove. It is a
//! flat JSON object mapping source path to link path, plus one reserved key
//! holding the schema version.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::info;

use crate::error::{Error, Result};

pub const LINKS_DB_FILE: &str = "links.json";

pub const SCHEMA_VERSION_KEY: &str = "SCHEMA_VERSION";
pub const SCHEMA_VERSION: u64 = 1;

pub struct LinksDb {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl LinksDb {
    /// Open (or create) the store. A schema version other than ours wipes
    /// the previous contents; there is no migration, a bump means reset.
    pub fn open(path: &Path) -> Result<Self> {
        let mut entries = match fs::read(path) {
            Ok(bytes) => serde_json::from_slice::<Map<String, Value>>(&bytes).map_err(|e| {
                Error::Store(format!("corrupt links db {}: {e}", path.display()))
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Map::new(),
            Err(e) => {
                return Err(Error::Store(format!(
                    "failed to read links db {}: {e}",
                    path.display()
                )));
            }
        };

        if let Some(version) = entries.get(SCHEMA_VERSION_KEY).and_then(Value::as_u64) {
            if version != SCHEMA_VERSION {
                info!(
                    "Found links db with schema version {version} while this tool only \
                     supports {SCHEMA_VERSION}. Wiping previous contents."
                );
                entries.clear();
            }
        }
        entries.insert(SCHEMA_VERSION_KEY.into(), Value::from(SCHEMA_VERSION));

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Record a successfully created link and persist immediately, so a
    /// crash partway through a run leaves the db consistent with the links
    /// actually on disk.
    pub fn record(&mut self, source: &str, link: &str) -> Result<()> {
        self.entries.insert(source.to_string(), Value::from(link));
        self.flush()
    }

    pub fn remove(&mut self, source: &str) {
        self.entries.remove(source);
    }

    pub fn link_for(&self, source: &str) -> Option<&str> {
        self.entries.get(source).and_then(Value::as_str)
    }

    /// Non-reserved entries as (source, link) pairs. Returns owned strings
    /// so callers can delete entries while walking the list.
    pub fn links(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != SCHEMA_VERSION_KEY)
            .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.links().is_empty()
    }

    fn flush(&self) -> Result<()> {
        let body = serde_json::to_string_pretty(&Value::Object(self.entries.clone()))
            .map_err(|e| Error::Store(format!("json encode error: {e}")))?;
        fs::write(&self.path, body).map_err(|e| {
            Error::Store(format!(
                "failed to write links db {}: {e}",
                self.path.display()
            ))
        })
    }

    /// Flush to durable storage. Runs on every exit path, success or
    /// failure.
    pub fn close(self) -> Result<()> {
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_stamps_the_schema_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LINKS_DB_FILE);
        let db = LinksDb::open(&path).unwrap();
        db.close().unwrap();

        let raw: Map<String, Value> =
            serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(raw.get(SCHEMA_VERSION_KEY), Some(&Value::from(SCHEMA_VERSION)));
        assert_eq!(raw.len(), 1);
    }

    #[test]
    fn version_mismatch_wipes_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LINKS_DB_FILE);
        fs::write(
            &path,
            r#"{"SCHEMA_VERSION": 99, "chromium/src/base": "base"}"#,
        )
        .unwrap();

        let db = LinksDb::open(&path).unwrap();
        assert!(db.is_empty());
        assert_eq!(db.link_for("chromium/src/base"), None);
    }

    #[test]
    fn record_persists_without_close() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LINKS_DB_FILE);
        let mut db = LinksDb::open(&path).unwrap();
        db.record("chromium/src/base", "base").unwrap();
        drop(db);

        let reopened = LinksDb::open(&path).unwrap();
        assert_eq!(reopened.link_for("chromium/src/base"), Some("base"));
        assert_eq!(reopened.links(), vec![("chromium/src/base".into(), "base".into())]);
    }
}
