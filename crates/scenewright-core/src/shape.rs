//! Shape entities and the per-shape form draft
//!
//! A [`ShapeDraft`] holds what the user is currently typing for the next
//! entity. Committing it produces a [`ShapeDescriptor`] that carries only the
//! dimensions of the selected [`ShapeKind`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Unknown shape type: {0} (expected box, sphere, cylinder or cone)")]
    UnknownShape(String),
}

/// The four primitive shapes the editor can place
///
/// Deserialization goes through [`FromStr`], so `"Box"` and `" cone "` are
/// accepted and anything else fails with [`ShapeError::UnknownShape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ShapeKind {
    Box,
    Sphere,
    Cylinder,
    Cone,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Box,
        ShapeKind::Sphere,
        ShapeKind::Cylinder,
        ShapeKind::Cone,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Box => "box",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Cone => "cone",
        }
    }

    /// A-Frame primitive tag for this shape
    pub fn tag(&self) -> &'static str {
        match self {
            ShapeKind::Box => "a-box",
            ShapeKind::Sphere => "a-sphere",
            ShapeKind::Cylinder => "a-cylinder",
            ShapeKind::Cone => "a-cone",
        }
    }
}

impl Default for ShapeKind {
    fn default() -> Self {
        Self::Box
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ShapeError::UnknownShape(s.to_string()))
    }
}

impl TryFrom<String> for ShapeKind {
    type Error = ShapeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Geometry of a committed entity. Dimensions are kept as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Box {
        depth: String,
        height: String,
        width: String,
    },
    Sphere {
        radius: String,
    },
    Cylinder {
        radius: String,
        height: String,
    },
    Cone {
        radius_bottom: String,
        radius_top: String,
        height: String,
    },
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Box { .. } => ShapeKind::Box,
            Shape::Sphere { .. } => ShapeKind::Sphere,
            Shape::Cylinder { .. } => ShapeKind::Cylinder,
            Shape::Cone { .. } => ShapeKind::Cone,
        }
    }

    /// Dimension attributes in emission order, named as A-Frame expects them
    pub fn attributes(&self) -> Vec<(&'static str, &str)> {
        match self {
            Shape::Box {
                depth,
                height,
                width,
            } => vec![
                ("depth", depth.as_str()),
                ("height", height.as_str()),
                ("width", width.as_str()),
            ],
            Shape::Sphere { radius } => vec![("radius", radius.as_str())],
            Shape::Cylinder { radius, height } => {
                vec![("radius", radius.as_str()), ("height", height.as_str())]
            }
            Shape::Cone {
                radius_bottom,
                radius_top,
                height,
            } => vec![
                ("radius-bottom", radius_bottom.as_str()),
                ("radius-top", radius_top.as_str()),
                ("height", height.as_str()),
            ],
        }
    }
}

/// One entity in the scene, frozen at the moment it was added
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeDescriptor {
    #[serde(flatten)]
    pub shape: Shape,
    /// Hex color, e.g. "#FF0000"
    pub color: String,
    /// "x y z"
    pub position: String,
    #[serde(default)]
    pub cast_shadow: bool,
    #[serde(default)]
    pub receive_shadow: bool,
}

impl ShapeDescriptor {
    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    pub fn has_shadow(&self) -> bool {
        self.cast_shadow || self.receive_shadow
    }
}

/// Per-shape form fields. Values for every shape are kept; `kind` picks
/// which of them go into the next entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeDraft {
    pub kind: ShapeKind,
    pub color: String,
    pub depth: String,
    pub height: String,
    pub width: String,
    pub sphere_radius: String,
    pub cylinder_radius: String,
    pub cylinder_height: String,
    pub cone_radius_bottom: String,
    pub cone_radius_top: String,
    pub cone_height: String,
    pub position: String,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl Default for ShapeDraft {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Box,
            color: "#FF0000".to_string(),
            depth: "1".to_string(),
            height: "1".to_string(),
            width: "1".to_string(),
            sphere_radius: "1".to_string(),
            cylinder_radius: "1".to_string(),
            cylinder_height: "1".to_string(),
            cone_radius_bottom: "1".to_string(),
            cone_radius_top: "0.5".to_string(),
            cone_height: "1".to_string(),
            position: "0 1.5 -3".to_string(),
            cast_shadow: false,
            receive_shadow: false,
        }
    }
}

impl ShapeDraft {
    /// Snapshot the fields relevant to the selected kind
    pub fn to_descriptor(&self) -> ShapeDescriptor {
        let shape = match self.kind {
            ShapeKind::Box => Shape::Box {
                depth: self.depth.clone(),
                height: self.height.clone(),
                width: self.width.clone(),
            },
            ShapeKind::Sphere => Shape::Sphere {
                radius: self.sphere_radius.clone(),
            },
            ShapeKind::Cylinder => Shape::Cylinder {
                radius: self.cylinder_radius.clone(),
                height: self.cylinder_height.clone(),
            },
            ShapeKind::Cone => Shape::Cone {
                radius_bottom: self.cone_radius_bottom.clone(),
                radius_top: self.cone_radius_top.clone(),
                height: self.cone_height.clone(),
            },
        };

        ShapeDescriptor {
            shape,
            color: self.color.clone(),
            position: self.position.clone(),
            cast_shadow: self.cast_shadow,
            receive_shadow: self.receive_shadow,
        }
    }

    /// Replace a single field. No other field is touched.
    pub fn apply(&mut self, field: DraftField) {
        match field {
            DraftField::Kind(v) => self.kind = v,
            DraftField::Color(v) => self.color = v,
            DraftField::Depth(v) => self.depth = v,
            DraftField::Height(v) => self.height = v,
            DraftField::Width(v) => self.width = v,
            DraftField::SphereRadius(v) => self.sphere_radius = v,
            DraftField::CylinderRadius(v) => self.cylinder_radius = v,
            DraftField::CylinderHeight(v) => self.cylinder_height = v,
            DraftField::ConeRadiusBottom(v) => self.cone_radius_bottom = v,
            DraftField::ConeRadiusTop(v) => self.cone_radius_top = v,
            DraftField::ConeHeight(v) => self.cone_height = v,
            DraftField::Position(v) => self.position = v,
            DraftField::CastShadow(v) => self.cast_shadow = v,
            DraftField::ReceiveShadow(v) => self.receive_shadow = v,
        }
    }
}

/// A single edit to a [`ShapeDraft`] field
///
/// On the wire: `{"field": "cone_radius_top", "value": "0.25"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum DraftField {
    Kind(ShapeKind),
    Color(String),
    Depth(String),
    Height(String),
    Width(String),
    SphereRadius(String),
    CylinderRadius(String),
    CylinderHeight(String),
    ConeRadiusBottom(String),
    ConeRadiusTop(String),
    ConeHeight(String),
    Position(String),
    CastShadow(bool),
    ReceiveShadow(bool),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shape_kind() {
        assert_eq!("box".parse::<ShapeKind>().unwrap(), ShapeKind::Box);
        assert_eq!("Cone".parse::<ShapeKind>().unwrap(), ShapeKind::Cone);
        assert_eq!(
            "pyramid".parse::<ShapeKind>(),
            Err(ShapeError::UnknownShape("pyramid".to_string()))
        );
    }

    #[test]
    fn test_descriptor_copies_only_selected_kind() {
        let mut draft = ShapeDraft::default();
        draft.apply(DraftField::Kind(ShapeKind::Cylinder));
        draft.apply(DraftField::CylinderRadius("2".to_string()));
        draft.apply(DraftField::CylinderHeight("4".to_string()));
        draft.apply(DraftField::Depth("99".to_string()));

        let descriptor = draft.to_descriptor();
        assert_eq!(
            descriptor.shape,
            Shape::Cylinder {
                radius: "2".to_string(),
                height: "4".to_string(),
            }
        );
        assert_eq!(descriptor.color, "#FF0000");
        assert_eq!(descriptor.position, "0 1.5 -3");
        assert!(!descriptor.has_shadow());
    }

    #[test]
    fn test_cone_attribute_names() {
        let shape = Shape::Cone {
            radius_bottom: "".to_string(),
            radius_top: "abc".to_string(),
            height: "-1".to_string(),
        };
        let names: Vec<_> = shape.attributes().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["radius-bottom", "radius-top", "height"]);
    }

    #[test]
    fn test_malformed_values_accepted() {
        let mut draft = ShapeDraft::default();
        draft.apply(DraftField::Width("not a number".to_string()));
        draft.apply(DraftField::Position("".to_string()));

        let descriptor = draft.to_descriptor();
        assert_eq!(descriptor.position, "");
        assert_eq!(descriptor.shape.attributes()[2], ("width", "not a number"));
    }

    #[test]
    fn test_draft_field_wire_format() {
        let field: DraftField =
            serde_json::from_str(r#"{"field": "cone_radius_top", "value": "0.25"}"#).unwrap();
        assert_eq!(field, DraftField::ConeRadiusTop("0.25".to_string()));

        let field: DraftField =
            serde_json::from_str(r#"{"field": "kind", "value": "sphere"}"#).unwrap();
        assert_eq!(field, DraftField::Kind(ShapeKind::Sphere));

        let field: DraftField =
            serde_json::from_str(r#"{"field": "kind", "value": "Box"}"#).unwrap();
        assert_eq!(field, DraftField::Kind(ShapeKind::Box));

        let err = serde_json::from_str::<DraftField>(r#"{"field": "kind", "value": "torus"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Unknown shape type: torus"));
    }

    #[test]
    fn test_shape_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ShapeKind::Cylinder).unwrap(), r#""cylinder""#);
        let kind: ShapeKind = serde_json::from_str(r#""CONE""#).unwrap();
        assert_eq!(kind, ShapeKind::Cone);
    }

    #[test]
    fn test_descriptor_json() {
        let descriptor = ShapeDescriptor {
            shape: Shape::Sphere {
                radius: "0.5".to_string(),
            },
            color: "#00FF00".to_string(),
            position: "1 1 1".to_string(),
            cast_shadow: true,
            receive_shadow: false,
        };
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json["type"], "sphere");
        assert_eq!(json["radius"], "0.5");
        assert_eq!(json["cast_shadow"], true);
    }
}
