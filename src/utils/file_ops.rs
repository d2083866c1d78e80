use std::path::Path;
use std::fs;
use crate::{ConvertError, Result};

pub struct FileManager;

impl FileManager {
    pub fn file_exists(path: impl AsRef<Path>) -> bool {
        path.as_ref().is_file()
    }

    pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
        Ok(fs::read_to_string(path.as_ref())?)
    }

    pub fn read_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>> {
        Ok(fs::read(path.as_ref())?)
    }

    /// Replaces the file's contents in place. A failure part way through can
    /// leave the file truncated.
    pub fn overwrite(path: impl AsRef<Path>, contents: &str) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, contents)
            .map_err(|e| ConvertError::Save(format!("{}: {}", path.display(), e)))
    }
}
