//! Application state management

use scenewright_core::SceneEditor;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::Config;

/// Shared application state
pub struct AppState {
    /// The single editing session. Each request holds the lock for one
    /// editor operation, so actions apply one at a time.
    pub editor: RwLock<SceneEditor>,
    /// Configuration
    pub config: Config,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Arc<Self> {
        let editor = SceneEditor::new(config.markup.attribute_mode());
        Arc::new(Self {
            editor: RwLock::new(editor),
            config,
        })
    }
}
