use crate::domain::ports::Storage;
use crate::utils::error::{ConvertError, Result};
use std::fs;
use std::path::Path;

/// Filesystem storage. Each call opens and closes its own handle.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|source| ConvertError::ReadError {
            path: path.display().to_string(),
            source,
        })
    }

    // Parent directories are not created; an existing file is overwritten.
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        fs::write(path, data).map_err(|source| ConvertError::WriteError {
            path: path.display().to_string(),
            source,
        })
    }
}
