//! File-backed session slots: one `<role>.json` per role under the session
//! directory.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fs;
use std::path::{Path, PathBuf};

use gateway::{GatewayError, SessionStore};

#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SessionStore for FileSessionStore {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.slot(key)).ok()
    }

    fn write(&self, key: &str, raw: &str) -> Result<(), GatewayError> {
        fs::create_dir_all(&self.dir).map_err(|e| GatewayError::Storage(format!("{}: {e}", self.dir.display())))?;
        let path = self.slot(key);
        fs::write(&path, raw).map_err(|e| GatewayError::Storage(format!("{}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "session saved");
        Ok(())
    }

    fn remove(&self, key: &str) {
        let path = self.slot(key);
        match fs::remove_file(&path) {
            Ok(()) => tracing::debug!(path = %path.display(), "session removed"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "session remove failed"),
        }
    }
}
