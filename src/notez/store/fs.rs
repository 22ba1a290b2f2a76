use super::{DataStore, DEFAULT_STORAGE_KEY};
use crate::error::{NotezError, Result};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-backed storage: the entry for `key` lives in `<root>/<key>.json`.
pub struct FileStore {
    root: PathBuf,
    key: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    pub fn with_key(mut self, key: &str) -> Self {
        self.key = key.to_string();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entry_path(&self) -> PathBuf {
        self.root.join(format!("{}.json", self.key))
    }

    pub fn corrupt_path(&self) -> PathBuf {
        self.root.join(format!("{}.corrupt.json", self.key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(NotezError::Io)?;
        }
        Ok(())
    }

    fn write_atomic(&self, path: &Path, content: &str) -> Result<()> {
        self.ensure_dir()?;
        let tmp_file = self
            .root
            .join(format!(".{}-{}.tmp", self.key, std::process::id()));
        fs::write(&tmp_file, content).map_err(NotezError::Io)?;
        fs::rename(&tmp_file, path).map_err(NotezError::Io)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Option<String>> {
        let path = self.entry_path();
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(NotezError::Io(e)),
        };
        String::from_utf8(bytes).map(Some).map_err(|e| {
            NotezError::Store(format!("{} is not valid UTF-8: {}", path.display(), e))
        })
    }

    fn save(&mut self, blob: &str) -> Result<()> {
        let path = self.entry_path();
        self.write_atomic(&path, blob)?;
        debug!("wrote {} bytes to {}", blob.len(), path.display());
        Ok(())
    }

    fn quarantine(&mut self) -> Result<()> {
        let from = self.entry_path();
        let to = self.corrupt_path();
        match fs::rename(&from, &to) {
            Ok(()) => {
                debug!("moved unusable entry to {}", to.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(NotezError::Io(e)),
        }
    }

    fn location(&self) -> String {
        self.entry_path().display().to_string()
    }
}
