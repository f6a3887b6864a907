//! Scene editor session state
//!
//! [`SceneEditor`] owns the shape draft, the scene settings, the committed
//! entity list and the manual text buffer. Every user action maps to one
//! method; none of them can fail.
//!
//! The buffer is a one-way snapshot. Generating overwrites it, but adding
//! entities or editing settings afterwards does not update it, and a later
//! generate discards any hand edits.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::export::SceneExport;
use crate::markup::{render_scene, AttributeMode};
use crate::settings::{SceneSettings, SettingField};
use crate::shape::{DraftField, ShapeDescriptor, ShapeDraft};

/// Whether the buffer still matches the last generated document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BufferSync {
    /// Buffer holds exactly what the last generate produced, and no entity
    /// was added since
    InSync,
    /// Buffer was edited, or the entity list or draft moved on
    Diverged,
}

/// Ordered list of committed entities. Append-only until cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityList(Vec<ShapeDescriptor>);

impl EntityList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, entity: ShapeDescriptor) {
        self.0.push(entity);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShapeDescriptor> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[ShapeDescriptor] {
        &self.0
    }
}

/// Serializable view of the whole editor, used to populate a form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorSnapshot {
    pub draft: ShapeDraft,
    pub settings: SceneSettings,
    pub entities: EntityList,
    pub buffer: String,
}

/// One editing session
#[derive(Debug, Clone)]
pub struct SceneEditor {
    draft: ShapeDraft,
    settings: SceneSettings,
    entities: EntityList,
    buffer: String,
    sync: BufferSync,
    mode: AttributeMode,
}

impl Default for SceneEditor {
    fn default() -> Self {
        Self::new(AttributeMode::default())
    }
}

impl SceneEditor {
    pub fn new(mode: AttributeMode) -> Self {
        Self {
            draft: ShapeDraft::default(),
            settings: SceneSettings::default(),
            entities: EntityList::new(),
            buffer: String::new(),
            sync: BufferSync::Diverged,
            mode,
        }
    }

    pub fn draft(&self) -> &ShapeDraft {
        &self.draft
    }

    pub fn settings(&self) -> &SceneSettings {
        &self.settings
    }

    pub fn entities(&self) -> &EntityList {
        &self.entities
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn attribute_mode(&self) -> AttributeMode {
        self.mode
    }

    pub fn sync_state(&self) -> BufferSync {
        self.sync
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            draft: self.draft.clone(),
            settings: self.settings.clone(),
            entities: self.entities.clone(),
            buffer: self.buffer.clone(),
        }
    }

    pub fn set_draft_field(&mut self, field: DraftField) {
        debug!(?field, "Draft field updated");
        self.draft.apply(field);
    }

    /// Settings edits only reach the buffer on the next generate
    pub fn set_setting(&mut self, field: SettingField) {
        debug!(?field, "Scene setting updated");
        self.settings.apply(field);
    }

    /// Replace the buffer with hand-edited text
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.sync = BufferSync::Diverged;
        debug!(bytes = self.buffer.len(), "Buffer edited by hand");
    }

    /// Commit the draft as a new entity and reset the draft to defaults
    pub fn add_entity(&mut self) -> &ShapeDescriptor {
        let descriptor = self.draft.to_descriptor();
        self.draft = ShapeDraft::default();

        if self.sync == BufferSync::InSync {
            warn!("Entity added after generate; buffer no longer reflects the entity list");
            self.sync = BufferSync::Diverged;
        }

        info!(
            kind = %descriptor.kind(),
            color = %descriptor.color,
            position = %descriptor.position,
            entities = self.entities.len() + 1,
            "Entity added"
        );

        self.entities.push(descriptor);
        &self.entities.as_slice()[self.entities.len() - 1]
    }

    /// Render the scene into the buffer, overwriting whatever was there
    pub fn generate(&mut self) -> &str {
        if self.sync == BufferSync::Diverged && !self.buffer.is_empty() {
            debug!(bytes = self.buffer.len(), "Discarding previous buffer contents");
        }

        self.buffer = render_scene(self.entities.as_slice(), &self.settings, self.mode);
        self.sync = BufferSync::InSync;

        info!(
            entities = self.entities.len(),
            bytes = self.buffer.len(),
            "Scene generated"
        );
        &self.buffer
    }

    /// Package the current buffer for download. Does not change state.
    pub fn download(&self) -> SceneExport {
        info!(bytes = self.buffer.len(), "Scene download requested");
        SceneExport::new(self.buffer.clone())
    }

    /// Clear entities and return every field and the buffer to defaults
    pub fn reset_all(&mut self) {
        info!(discarded = self.entities.len(), "Editor reset");
        *self = Self::new(self.mode);
    }
}
