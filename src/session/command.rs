//! The session's discrete interactive vocabulary.
//!
//! Every button-style operation (whether triggered by a key press, a UI
//! button, or a programmatic call) is a `SceneCommand`. Consumers construct
//! commands and pass them to
//! [`SceneSession::execute`](super::SceneSession::execute). Continuous camera
//! input does not go through here; it is sampled per frame instead.

use serde::{Deserialize, Serialize};

use crate::sculpt::BrushMode;
use crate::spawner::ShapeKind;

/// A discrete operation on the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    /// Create a primitive shape.
    Spawn(ShapeKind),
    /// Destroy the most recently created shape.
    UndoLastShape,
    /// Show or hide the hand model.
    ToggleHand,
    /// Enable or disable the external sculpting tool.
    SetSculptingTool(bool),
    /// Begin forwarding the hand position to the sculptor.
    StartSculpting,
    /// Stop forwarding the hand position.
    StopSculpting,
    /// Select the brush for subsequent strokes.
    SetBrushMode(BrushMode),
}

/// Scene actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// undo_last_shape = "KeyZ"
/// spawn_cube = "Digit1"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Spawn a cube.
    SpawnCube,
    /// Spawn a sphere.
    SpawnSphere,
    /// Spawn a cylinder.
    SpawnCylinder,
    /// Spawn a capsule.
    SpawnCapsule,
    /// Spawn a plane.
    SpawnPlane,
    /// Undo the last spawn.
    UndoLastShape,
    /// Show/hide the hand model.
    ToggleHand,
    /// Start sculpting.
    StartSculpting,
    /// Stop sculpting.
    StopSculpting,
    /// Push brush.
    BrushPush,
    /// Pull brush.
    BrushPull,
    /// Smooth brush.
    BrushSmooth,
}

impl KeyAction {
    /// The command this action triggers.
    #[must_use]
    pub const fn to_command(self) -> SceneCommand {
        match self {
            Self::SpawnCube => SceneCommand::Spawn(ShapeKind::Cube),
            Self::SpawnSphere => SceneCommand::Spawn(ShapeKind::Sphere),
            Self::SpawnCylinder => SceneCommand::Spawn(ShapeKind::Cylinder),
            Self::SpawnCapsule => SceneCommand::Spawn(ShapeKind::Capsule),
            Self::SpawnPlane => SceneCommand::Spawn(ShapeKind::Plane),
            Self::UndoLastShape => SceneCommand::UndoLastShape,
            Self::ToggleHand => SceneCommand::ToggleHand,
            Self::StartSculpting => SceneCommand::StartSculpting,
            Self::StopSculpting => SceneCommand::StopSculpting,
            Self::BrushPush => SceneCommand::SetBrushMode(BrushMode::Push),
            Self::BrushPull => SceneCommand::SetBrushMode(BrushMode::Pull),
            Self::BrushSmooth => SceneCommand::SetBrushMode(BrushMode::Smooth),
        }
    }
}
