//! Whole-document file I/O.
//!
//! Writes go to a sibling `<name>.tmp` file that is then renamed over the
//! target, so readers see either the previous document or the new one.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use apa_core::Document;
use tracing::debug;

use crate::error::{Result, StoreError};

/// The persisted document on disk.
#[derive(Debug, Clone)]
pub struct DocumentFile {
    path: PathBuf,
}

impl DocumentFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the document. `Ok(None)` means the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Read` on I/O failure and `StoreError::Parse` if the
    /// contents do not match the schema.
    pub fn read(&self) -> Result<Option<Document>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        debug!(path = %self.path.display(), bytes = json.len(), "Read app data");

        Document::from_json(&json)
            .map(Some)
            .map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })
    }

    /// Serialize `document` and replace the file with it.
    ///
    /// Creates the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Serialize` or `StoreError::Write`.
    pub fn write(&self, document: &Document) -> Result<()> {
        let json = document.to_json().map_err(StoreError::Serialize)?;
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let tmp = self.tmp_path();
        fs::write(&tmp, &json).map_err(write_err)?;
        if let Err(source) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(write_err(source));
        }

        debug!(path = %self.path.display(), bytes = json.len(), "Wrote app data");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map_or_else(|| OsString::from("app_data"), OsString::from);
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
