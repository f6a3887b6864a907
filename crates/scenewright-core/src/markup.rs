//! A-Frame markup serialization
//!
//! Renders the entity list and scene settings into a standalone HTML document
//! with a fixed structure: sky, ambient light, directional light, ground
//! plane, camera, then one primitive element per entity in list order.

use quick_xml::escape::escape;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::settings::SceneSettings;
use crate::shape::ShapeDescriptor;

/// A-Frame release loaded by exported documents
pub const AFRAME_SCRIPT_URL: &str = "https://aframe.io/releases/1.6.0/aframe.min.js";

/// Title of exported documents
pub const DOCUMENT_TITLE: &str = "A-Frame Scene";

const SCENE_INDENT: &str = "      ";

/// How attribute values are written into the markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeMode {
    /// Values are written exactly as entered. A value containing `"` will
    /// break out of its attribute.
    #[default]
    Verbatim,
    /// `& < > " '` are replaced with entities
    Escaped,
}

impl AttributeMode {
    fn apply<'a>(&self, value: &'a str) -> Cow<'a, str> {
        match self {
            AttributeMode::Verbatim => Cow::Borrowed(value),
            AttributeMode::Escaped => escape(value),
        }
    }
}

fn push_attr(out: &mut String, name: &str, value: &str, mode: AttributeMode) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&mode.apply(value));
    out.push('"');
}

fn element(tag: &str, attrs: &[(&str, &str)], mode: AttributeMode) -> String {
    let mut out = format!("<{}", tag);
    for (name, value) in attrs {
        push_attr(&mut out, name, value, mode);
    }
    out.push_str(&format!("></{}>", tag));
    out
}

/// Render a single entity element
pub fn render_entity(entity: &ShapeDescriptor, mode: AttributeMode) -> String {
    let mut attrs = vec![("color", entity.color.as_str())];
    attrs.extend(entity.shape.attributes());
    attrs.push(("position", entity.position.as_str()));

    // Both flags are written as soon as either is set
    if entity.has_shadow() {
        attrs.push(("castShadow", bool_str(entity.cast_shadow)));
        attrs.push(("receiveShadow", bool_str(entity.receive_shadow)));
    }

    element(entity.kind().tag(), &attrs, mode)
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Render the complete scene document
pub fn render_scene(
    entities: &[ShapeDescriptor],
    settings: &SceneSettings,
    mode: AttributeMode,
) -> String {
    let scene_lines = [
        element("a-sky", &[("color", settings.sky_color.as_str())], mode),
        element(
            "a-light",
            &[("type", "ambient"), ("color", settings.ambient_light_color.as_str())],
            mode,
        ),
        element(
            "a-light",
            &[
                ("type", "directional"),
                ("position", settings.directional_light_position.as_str()),
                ("intensity", settings.directional_light_intensity.as_str()),
                ("color", settings.directional_light_color.as_str()),
            ],
            mode,
        ),
        element(
            "a-plane",
            &[
                ("rotation", settings.plane_rotation.as_str()),
                ("width", settings.plane_width.as_str()),
                ("height", settings.plane_height.as_str()),
                ("color", settings.plane_color.as_str()),
            ],
            mode,
        ),
        element("a-camera", &[("position", settings.camera_position.as_str())], mode),
    ];

    let mut doc = String::new();
    doc.push_str("<html>\n");
    doc.push_str("  <head>\n");
    doc.push_str("    <meta charset=\"utf-8\">\n");
    doc.push_str(&format!("    <title>{}</title>\n", DOCUMENT_TITLE));
    doc.push_str(&format!("    <script src=\"{}\"></script>\n", AFRAME_SCRIPT_URL));
    doc.push_str("  </head>\n");
    doc.push_str("  <body>\n");
    doc.push_str("    <a-scene>\n");
    let entity_lines = entities.iter().map(|e| render_entity(e, mode));
    for line in scene_lines.into_iter().chain(entity_lines) {
        doc.push_str(SCENE_INDENT);
        doc.push_str(&line);
        doc.push('\n');
    }
    doc.push_str("    </a-scene>\n");
    doc.push_str("  </body>\n");
    doc.push_str("</html>\n");
    doc
}
