use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SceneError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Orbit rig distance bounds and control speeds.
pub struct CameraOptions {
    /// Closest the camera may get to the focus point.
    #[schemars(title = "Min Distance", range(min = 0.0, max = 100.0), extend("step" = 0.5))]
    pub min_distance: f32,
    /// Farthest the camera may get from the focus point.
    #[schemars(title = "Max Distance", range(min = 1.0, max = 1000.0), extend("step" = 1.0))]
    pub max_distance: f32,
    /// Orbit speed in degrees per second, scaled by pointer travel as a
    /// fraction of the viewport.
    #[schemars(title = "Orbit Speed", range(min = 100.0, max = 50000.0), extend("step" = 100.0))]
    pub orbit_speed: f32,
    /// Pan speed in world units per pixel.
    #[schemars(title = "Pan Speed", range(min = 0.001, max = 1.0), extend("step" = 0.001))]
    pub pan_speed: f32,
    /// Zoom speed in world units per scroll unit.
    #[schemars(title = "Zoom Speed", range(min = 0.1, max = 100.0), extend("step" = 0.1))]
    pub zoom_speed: f32,
    /// How far in front of the camera a synthesized focus point is placed.
    #[schemars(skip)]
    pub fallback_focus_distance: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            min_distance: 2.0,
            max_distance: 50.0,
            orbit_speed: 10000.0,
            pan_speed: 0.1,
            zoom_speed: 10.0,
            fallback_focus_distance: 10.0,
        }
    }
}

impl CameraOptions {
    /// Reject values the rig cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::InvalidOptions`] for non-finite values, a
    /// negative `min_distance`, or `min_distance > max_distance`.
    pub fn validate(&self) -> Result<(), SceneError> {
        let fields = [
            ("min_distance", self.min_distance),
            ("max_distance", self.max_distance),
            ("orbit_speed", self.orbit_speed),
            ("pan_speed", self.pan_speed),
            ("zoom_speed", self.zoom_speed),
            ("fallback_focus_distance", self.fallback_focus_distance),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite())
        {
            return Err(SceneError::InvalidOptions(format!(
                "camera.{name} must be finite, got {value}"
            )));
        }
        if self.min_distance < 0.0 {
            return Err(SceneError::InvalidOptions(format!(
                "camera.min_distance must be non-negative, got {}",
                self.min_distance
            )));
        }
        if self.min_distance > self.max_distance {
            return Err(SceneError::InvalidOptions(format!(
                "camera.min_distance ({}) exceeds camera.max_distance ({})",
                self.min_distance, self.max_distance
            )));
        }
        Ok(())
    }
}
