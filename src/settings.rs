use crate::CONFY_APP_NAME;
use crate::camera::{DEFAULT_SENSITIVITY, DEFAULT_SPEED};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraSettings {
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
        }
    }
}

impl CameraSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "camera").unwrap_or_default()
    }

    pub fn save(&self) {
        let _ = confy::store(CONFY_APP_NAME, "camera", self);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    pub spin_cubes: bool,
    pub flashlight: bool,
    pub show_lamp: bool,
    pub far_plane: f32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            spin_cubes: true,
            flashlight: false,
            show_lamp: true,
            far_plane: 100.0,
        }
    }
}

impl DisplaySettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "display").unwrap_or_default()
    }

    pub fn save(&self) {
        let _ = confy::store(CONFY_APP_NAME, "display", self);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorSettings {
    pub object_tint: [f32; 3],
    pub clear_color: [f32; 3],
    pub light_color: [f32; 3],
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            object_tint: [1.0, 1.0, 1.0],
            clear_color: [0.1, 0.1, 0.1],
            light_color: [1.0, 1.0, 1.0],
        }
    }
}

impl ColorSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "colors").unwrap_or_default()
    }

    pub fn save(&self) {
        let _ = confy::store(CONFY_APP_NAME, "colors", self);
    }
}

// Aggregate struct for convenience
pub struct Settings {
    pub camera: CameraSettings,
    pub display: DisplaySettings,
    pub colors: ColorSettings,
}

impl Settings {
    pub fn load() -> Self {
        Self {
            camera: CameraSettings::load(),
            display: DisplaySettings::load(),
            colors: ColorSettings::load(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_defaults_match_the_camera() {
        let settings = CameraSettings::default();
        assert_eq!(settings.movement_speed, 2.5);
        assert_eq!(settings.mouse_sensitivity, 0.1);
    }

    #[test]
    fn display_defaults() {
        let settings = DisplaySettings::default();
        assert!(settings.spin_cubes);
        assert!(!settings.flashlight);
        assert!(settings.show_lamp);
        assert_eq!(settings.far_plane, 100.0);
    }
}
