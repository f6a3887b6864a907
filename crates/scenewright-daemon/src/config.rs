//! Configuration loading

use anyhow::Result;
use scenewright_core::AttributeMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub daemon: DaemonConfig,
    #[serde(default)]
    pub markup: MarkupConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub web: WebConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Bind address for web server
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarkupConfig {
    /// Escape `& < > " '` in attribute values instead of writing them as typed
    #[serde(default)]
    pub escape_attributes: bool,
}

impl MarkupConfig {
    pub fn attribute_mode(&self) -> AttributeMode {
        if self.escape_attributes {
            AttributeMode::Escaped
        } else {
            AttributeMode::Verbatim
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory for server-side exports (disabled when unset)
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    /// Extra static files served next to the editor page
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    /// Largest hand-edited buffer accepted by `PUT /api/buffer`
    #[serde(default = "default_max_buffer_bytes")]
    pub max_buffer_bytes: usize,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            static_dir: default_static_dir(),
            max_buffer_bytes: default_max_buffer_bytes(),
        }
    }
}

fn default_static_dir() -> String {
    "./web".to_string()
}

fn default_max_buffer_bytes() -> usize {
    64 * 1024 * 1024
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<Config> {
    if path.exists() {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    } else {
        info!(
            path = %path.display(),
            "Configuration file not found, using defaults"
        );
        Ok(Config::default())
    }
}

/// Save default configuration to file
pub fn save_default_config(path: &Path) -> Result<()> {
    let config = Config {
        export: ExportConfig {
            dir: Some(PathBuf::from("./exports")),
        },
        ..Config::default()
    };

    let content = toml::to_string_pretty(&config)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(&dir.path().join("scenewright.toml")).unwrap();

        assert_eq!(config.daemon.bind, "127.0.0.1:8080");
        assert_eq!(config.web.max_buffer_bytes, 64 * 1024 * 1024);
        assert_eq!(config.markup.attribute_mode(), AttributeMode::Verbatim);
        assert!(config.export.dir.is_none());
    }

    #[test]
    fn test_partial_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scenewright.toml");
        std::fs::write(
            &path,
            r#"
[daemon]
bind = "0.0.0.0:9000"

[markup]
escape_attributes = true
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.daemon.bind, "0.0.0.0:9000");
        assert_eq!(config.markup.attribute_mode(), AttributeMode::Escaped);
        assert_eq!(config.web.static_dir, "./web");
    }

    #[test]
    fn test_default_config_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scenewright.toml");
        save_default_config(&path).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.export.dir, Some(PathBuf::from("./exports")));
        assert_eq!(config.daemon.bind, default_bind());
    }
}
