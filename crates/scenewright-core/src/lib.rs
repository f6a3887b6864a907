//! Scenewright Core - Scene editor state and A-Frame markup generation
//!
//! This crate provides everything behind the scene editor form:
//! - Shape draft fields and committed shape entities
//! - Scene-wide settings (sky, lights, ground plane, camera)
//! - The editor session with its entity list and manual text buffer
//! - Serialization of the scene into a standalone A-Frame document
//! - Packaging the document as a downloadable file

pub mod editor;
pub mod export;
pub mod markup;
pub mod settings;
pub mod shape;

pub use editor::{BufferSync, EditorSnapshot, EntityList, SceneEditor};
pub use export::{ExportError, SceneExport, EXPORT_CONTENT_TYPE, EXPORT_FILE_NAME};
pub use markup::{render_entity, render_scene, AttributeMode};
pub use settings::{SceneSettings, SettingField};
pub use shape::{DraftField, Shape, ShapeDescriptor, ShapeDraft, ShapeError, ShapeKind};
