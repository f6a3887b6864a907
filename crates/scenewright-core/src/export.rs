//! Packaging the scene buffer as a downloadable file

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// File name every exported scene is saved under
pub const EXPORT_FILE_NAME: &str = "aframe-scene.html";

/// MIME type of exported scenes
pub const EXPORT_CONTENT_TYPE: &str = "text/html";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Export directory does not exist: {0}")]
    MissingDirectory(PathBuf),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A scene document ready to hand to a download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneExport {
    pub file_name: &'static str,
    pub content_type: &'static str,
    pub content: String,
}

impl SceneExport {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            file_name: EXPORT_FILE_NAME,
            content_type: EXPORT_CONTENT_TYPE,
            content: content.into(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }

    /// `Content-Disposition` header value that makes a browser save the file
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.file_name)
    }

    /// Write the file into `dir`, replacing any previous export there
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        if !dir.is_dir() {
            return Err(ExportError::MissingDirectory(dir.to_path_buf()));
        }
        let path = dir.join(self.file_name);
        std::fs::write(&path, self.as_bytes())?;
        info!(path = %path.display(), bytes = self.content.len(), "Wrote scene export");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_export_metadata() {
        let export = SceneExport::new("<html></html>");
        assert_eq!(export.file_name, "aframe-scene.html");
        assert_eq!(export.content_type, "text/html");
        assert_eq!(
            export.content_disposition(),
            "attachment; filename=\"aframe-scene.html\""
        );
    }

    #[test]
    fn test_write_to_dir() {
        let dir = TempDir::new().unwrap();
        let export = SceneExport::new("<html>\n  <body></body>\n</html>\n");

        let path = export.write_to_dir(dir.path()).unwrap();
        assert_eq!(path, dir.path().join("aframe-scene.html"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), export.content);

        // Second export overwrites
        SceneExport::new("changed").write_to_dir(dir.path()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "changed");
    }

    #[test]
    fn test_write_to_missing_dir() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        let err = SceneExport::new("").write_to_dir(&missing).unwrap_err();
        assert!(matches!(err, ExportError::MissingDirectory(p) if p == missing));
    }
}
