//! Remembers the palette query between openings and runs.
//!
//! Stored as `{"query": "..."}` and written atomically (temp file + rename).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::{Result, TermfolioError};

#[derive(Debug, Serialize, Deserialize)]
struct QueryData {
    query: String,
}

#[derive(Debug, Serialize)]
struct QueryDataRef<'a> {
    query: &'a str,
}

#[derive(Debug, Clone)]
pub struct QueryStore {
    file_path: PathBuf,
}

impl QueryStore {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        QueryStore {
            file_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Read the remembered query. A missing file means nothing was remembered.
    #[instrument(name = "palette_query_load", skip(self))]
    pub fn load(&self) -> Result<Option<String>> {
        if !self.file_path.exists() {
            debug!(path = %self.file_path.display(), "No remembered palette query");
            return Ok(None);
        }

        let content = fs::read_to_string(&self.file_path).map_err(|source| {
            TermfolioError::StoreRead {
                path: self.file_path.display().to_string(),
                source,
            }
        })?;
        let data: QueryData = serde_json::from_str(&content)?;

        info!(path = %self.file_path.display(), "Loaded remembered palette query");
        Ok(Some(data.query).filter(|q| !q.is_empty()))
    }

    /// Persist `query`, replacing the previous one.
    #[instrument(name = "palette_query_save", skip(self))]
    pub fn save(&self, query: &str) -> Result<()> {
        let write_err = |source| TermfolioError::StoreWrite {
            path: self.file_path.display().to_string(),
            source,
        };

        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let json = serde_json::to_string(&QueryDataRef { query })?;
        let temp_path = self.file_path.with_extension("json.tmp");
        fs::write(&temp_path, &json).map_err(write_err)?;
        fs::rename(&temp_path, &self.file_path).map_err(write_err)?;

        debug!(path = %self.file_path.display(), "Saved palette query");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let store = QueryStore::with_path(dir.path().join("query.json"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let store = QueryStore::with_path(dir.path().join("nested").join("query.json"));
        store.save("proj").unwrap();
        assert_eq!(store.load().unwrap(), Some("proj".to_string()));
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("query.json");
        let store = QueryStore::with_path(&path);
        store.save("ct").unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw, r#"{"query":"ct"}"#);
    }

    #[test]
    fn test_load_invalid_json_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("query.json");
        fs::write(&path, "garbage").unwrap();
        let store = QueryStore::with_path(&path);
        assert!(matches!(store.load(), Err(TermfolioError::StoreParse(_))));
    }
}
