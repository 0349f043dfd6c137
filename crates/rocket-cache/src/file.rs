//! Directory-backed store that persists across sessions.

use crate::{CacheError, KvStore};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use std::io::ErrorKind;
use std::path::PathBuf;

/// A `KvStore` that keeps one file per key inside a directory.
///
/// Keys are base64url-encoded into file names, so any key string is safe
/// on any filesystem. Writes go through a temporary file and a rename.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .map_err(|e| CacheError::OpenError(format!("{}: {}", dir.display(), e)))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir
            .join(format!("{}.kv", URL_SAFE_NO_PAD.encode(key.as_bytes())))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        match std::fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("kv.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        tracing::debug!(key, bytes = value.len(), path = %path.display(), "stored entry");
        Ok(())
    }
}
