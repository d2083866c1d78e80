use std::path::PathBuf;
use crate::jams::container::Jams;
use crate::utils::file_ops::FileManager;
use crate::{ConvertError, Result};

/// Where a JAMS container lives between a load and a save.
pub trait ContainerStore {
    /// Whether there is a container to update. Conversion never creates one.
    fn exists(&self) -> bool;

    fn load(&self) -> Result<Jams>;

    fn save(&self, jams: &Jams) -> Result<()>;

    fn describe(&self) -> String;
}

/// A JAMS container on disk, rewritten in place as 2-space indented JSON.
pub struct JamsFile {
    path: PathBuf,
}

impl JamsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContainerStore for JamsFile {
    fn exists(&self) -> bool {
        FileManager::file_exists(&self.path)
    }

    fn load(&self) -> Result<Jams> {
        let text = FileManager::read_text(&self.path)
            .map_err(|e| ConvertError::Load(format!("{}: {}", self.path.display(), e)))?;
        serde_json::from_str(&text)
            .map_err(|e| ConvertError::Load(format!("{}: {}", self.path.display(), e)))
    }

    fn save(&self, jams: &Jams) -> Result<()> {
        let text = serde_json::to_string_pretty(jams)
            .map_err(|e| ConvertError::Save(format!("{}: {}", self.path.display(), e)))?;
        FileManager::overwrite(&self.path, &text)?;
        log::debug!("Saved {}", self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jams::container::Annotation;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn save_then_load_returns_the_same_container() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("song.jams");
        fs::write(&path, r#"{"sections": [], "file_metadata": {"title": "Song"}}"#).unwrap();

        let store = JamsFile::new(&path);
        assert!(store.exists());
        let mut jams = store.load().unwrap();
        jams.push_annotation(&Annotation::new("Collin")).unwrap();
        store.save(&jams).unwrap();

        assert_eq!(store.load().unwrap(), jams);
        assert!(fs::read_to_string(&path).unwrap().starts_with("{\n  \"sections\""));
    }

    #[test]
    fn invalid_json_is_a_load_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.jams");
        fs::write(&path, "{\"sections\": [").unwrap();

        let err = JamsFile::new(&path).load().unwrap_err();
        assert!(matches!(err, ConvertError::Load(_)));
    }

    #[test]
    fn wrongly_shaped_container_is_a_load_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shape.jams");
        fs::write(&path, r#"{"sections": {"annotator": "Collin"}}"#).unwrap();

        assert!(matches!(JamsFile::new(&path).load(), Err(ConvertError::Load(_))));
    }
}
