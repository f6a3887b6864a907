//! Scene-wide settings: sky, lights, ground plane and camera

use serde::{Deserialize, Serialize};

/// Everything in the scene that is not an entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// Camera position "x y z"
    pub camera_position: String,
    pub plane_width: String,
    pub plane_height: String,
    pub plane_color: String,
    /// Ground plane rotation "x y z" in degrees
    pub plane_rotation: String,
    pub sky_color: String,
    pub ambient_light_color: String,
    pub directional_light_color: String,
    /// Directional light position "x y z"
    pub directional_light_position: String,
    pub directional_light_intensity: String,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            camera_position: "0 1.6 4".to_string(),
            plane_width: "10".to_string(),
            plane_height: "10".to_string(),
            plane_color: "#7BC8A4".to_string(),
            plane_rotation: "0 0 0".to_string(),
            sky_color: "#ECECEC".to_string(),
            ambient_light_color: "#FFF".to_string(),
            directional_light_color: "#FFF".to_string(),
            directional_light_position: "1 2 3".to_string(),
            directional_light_intensity: "0.5".to_string(),
        }
    }
}

impl SceneSettings {
    pub fn apply(&mut self, field: SettingField) {
        match field {
            SettingField::CameraPosition(v) => self.camera_position = v,
            SettingField::PlaneWidth(v) => self.plane_width = v,
            SettingField::PlaneHeight(v) => self.plane_height = v,
            SettingField::PlaneColor(v) => self.plane_color = v,
            SettingField::PlaneRotation(v) => self.plane_rotation = v,
            SettingField::SkyColor(v) => self.sky_color = v,
            SettingField::AmbientLightColor(v) => self.ambient_light_color = v,
            SettingField::DirectionalLightColor(v) => self.directional_light_color = v,
            SettingField::DirectionalLightPosition(v) => self.directional_light_position = v,
            SettingField::DirectionalLightIntensity(v) => self.directional_light_intensity = v,
        }
    }
}

/// A single edit to a [`SceneSettings`] field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum SettingField {
    CameraPosition(String),
    PlaneWidth(String),
    PlaneHeight(String),
    PlaneColor(String),
    PlaneRotation(String),
    SkyColor(String),
    AmbientLightColor(String),
    DirectionalLightColor(String),
    DirectionalLightPosition(String),
    DirectionalLightIntensity(String),
}
