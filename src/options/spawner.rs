use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::spawner::ShapeKind;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Spawner", inline)]
#[serde(default)]
/// World positions new shapes are placed at.
pub struct SpawnerOptions {
    /// Spawn position for cubes.
    pub cube: [f32; 3],
    /// Spawn position for spheres.
    pub sphere: [f32; 3],
    /// Spawn position for cylinders.
    pub cylinder: [f32; 3],
    /// Spawn position for capsules.
    pub capsule: [f32; 3],
    /// Spawn position for planes.
    pub plane: [f32; 3],
}

impl Default for SpawnerOptions {
    fn default() -> Self {
        Self {
            cube: [10.0, 1.0, 10.0],
            sphere: [0.0, 1.0, 0.0],
            cylinder: [0.0, 1.0, 0.0],
            capsule: [0.0, 1.0, 0.0],
            plane: [0.0, 1.0, 0.0],
        }
    }
}

impl SpawnerOptions {
    /// Configured spawn position for `kind`.
    #[must_use]
    pub fn position_for(&self, kind: ShapeKind) -> Vec3 {
        let p = match kind {
            ShapeKind::Cube => self.cube,
            ShapeKind::Sphere => self.sphere,
            ShapeKind::Cylinder => self.cylinder,
            ShapeKind::Capsule => self.capsule,
            ShapeKind::Plane => self.plane,
        };
        Vec3::from_array(p)
    }
}
