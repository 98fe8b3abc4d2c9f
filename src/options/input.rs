use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::ModifierKey;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Input interpretation settings.
pub struct InputOptions {
    /// Key that, held with the left mouse button, orbits the camera.
    #[schemars(title = "Orbit Modifier")]
    pub orbit_modifier: ModifierKey,
    /// Longest frame step (seconds) the frame clock reports.
    #[schemars(skip)]
    pub max_frame_step: f32,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            orbit_modifier: ModifierKey::Alt,
            max_frame_step: 0.25,
        }
    }
}
