use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::error::Category;
use tracing::debug;

use crate::error::{Result, SkillError};
use crate::skill::SkillDocument;
use crate::ui;

/// Reads and writes the skills document at a fixed path.
#[derive(Debug, Clone)]
pub struct SkillStore {
    path: PathBuf,
}

impl SkillStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the document, treating a missing file or text that is not JSON
    /// at all as an empty collection.
    ///
    /// Malformed JSON is reported to the user. Valid JSON of the wrong shape
    /// and other read errors propagate.
    pub fn load(&self) -> Result<SkillDocument> {
        match self.read() {
            Ok(document) => Ok(document),
            Err(SkillError::SerdeJson(err))
                if matches!(err.classify(), Category::Syntax | Category::Eof) =>
            {
                ui::failed(&format!("Error reading JSON file: {err}"));
                Ok(SkillDocument::default())
            }
            Err(SkillError::SerdeJson(source)) => Err(SkillError::InvalidDocument {
                path: self.path.clone(),
                source,
            }),
            Err(err) => Err(err),
        }
    }

    /// Strict variant of [`SkillStore::load`]: only a missing file is forgiven.
    pub fn read(&self) -> Result<SkillDocument> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if matches!(err.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                debug!(path = %self.path.display(), "skills file missing, starting empty");
                return Ok(SkillDocument::default());
            }
            Err(err) => return Err(err.into()),
        };
        let document: SkillDocument = serde_json::from_str(&content)?;
        debug!(
            path = %self.path.display(),
            count = document.skills.len(),
            "loaded skills"
        );
        Ok(document)
    }

    /// Overwrites the file with the pretty-printed document, creating parent
    /// directories as needed.
    pub fn save(&self, document: &SkillDocument) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|err| self.save_error(err))?;
        }
        let content = serde_json::to_string_pretty(document)?;
        std::fs::write(&self.path, content).map_err(|err| self.save_error(err))?;
        debug!(
            path = %self.path.display(),
            count = document.skills.len(),
            "wrote skills"
        );
        Ok(())
    }

    fn save_error(&self, source: std::io::Error) -> SkillError {
        SkillError::Save {
            path: self.path.clone(),
            source,
        }
    }
}
