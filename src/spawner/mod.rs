//! Primitive shape spawning with a single-level undo stack.
//!
//! The spawner never touches the scene graph directly. Instantiation,
//! destruction, and collision meshes go through a [`SceneBackend`] supplied
//! by the host; the spawner only remembers which handles it created, newest
//! last, so [`ShapeSpawner::undo_last_shape`] can hand them back for
//! destruction in reverse order.

use std::fmt;

use glam::{Quat, Vec3};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::options::SpawnerOptions;

/// Primitive shapes the spawner can create.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Unit cube.
    Cube,
    /// Unit sphere.
    Sphere,
    /// Upright cylinder.
    Cylinder,
    /// Upright capsule.
    Capsule,
    /// Flat plane.
    Plane,
}

impl ShapeKind {
    /// Every shape, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Cube,
        Self::Sphere,
        Self::Cylinder,
        Self::Capsule,
        Self::Plane,
    ];
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Cube => "Cube",
            Self::Sphere => "Sphere",
            Self::Cylinder => "Cylinder",
            Self::Capsule => "Capsule",
            Self::Plane => "Plane",
        })
    }
}

/// Outcome of [`SceneBackend::ensure_collision_mesh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionMesh {
    /// The object had no collision mesh and one was added.
    Added,
    /// The object already carried a collision mesh.
    AlreadyPresent,
}

/// Host scene operations the spawner needs.
pub trait SceneBackend {
    /// Template an object is instantiated from.
    type Prefab;
    /// Reference to a live object in the scene.
    type Handle: fmt::Debug;

    /// Create an object from `prefab`. `None` if the host could not.
    fn instantiate(
        &mut self,
        prefab: &Self::Prefab,
        position: Vec3,
        rotation: Quat,
    ) -> Option<Self::Handle>;

    /// Remove an object from the scene.
    fn destroy(&mut self, handle: Self::Handle);

    /// Make sure the object participates in physics/ray queries.
    fn ensure_collision_mesh(&mut self, handle: &Self::Handle) -> CollisionMesh;
}

/// An external component that can be switched on and off.
pub trait Activatable {
    /// Whether the component is currently enabled.
    fn is_active(&self) -> bool;

    /// Enable or disable the component.
    fn set_active(&mut self, active: bool);
}

/// Creates primitive shapes and tracks them for undo.
pub struct ShapeSpawner<B: SceneBackend> {
    backend: B,
    prefabs: FxHashMap<ShapeKind, B::Prefab>,
    positions: SpawnerOptions,
    /// Handles of spawned objects, newest last.
    created: Vec<B::Handle>,
    sculpting_tool: Option<Box<dyn Activatable>>,
    hand: Option<Box<dyn Activatable>>,
}

impl<B: SceneBackend> ShapeSpawner<B> {
    /// Create a spawner with no prefabs registered.
    #[must_use]
    pub fn new(backend: B, positions: SpawnerOptions) -> Self {
        Self {
            backend,
            prefabs: FxHashMap::default(),
            positions,
            created: Vec::new(),
            sculpting_tool: None,
            hand: None,
        }
    }

    /// Register the prefab used for `kind`.
    pub fn set_prefab(&mut self, kind: ShapeKind, prefab: B::Prefab) {
        let _ = self.prefabs.insert(kind, prefab);
    }

    /// Attach (or detach) the sculpting tool toggled by
    /// [`set_sculpting_tool_enabled`](Self::set_sculpting_tool_enabled).
    pub fn set_sculpting_tool(&mut self, tool: Option<Box<dyn Activatable>>) {
        self.sculpting_tool = tool;
    }

    /// Attach (or detach) the hand model toggled by
    /// [`toggle_hand`](Self::toggle_hand).
    pub fn set_hand(&mut self, hand: Option<Box<dyn Activatable>>) {
        self.hand = hand;
    }

    /// Replace the spawn positions.
    pub fn set_positions(&mut self, positions: SpawnerOptions) {
        self.positions = positions;
    }

    /// The host backend.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the host backend.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Number of shapes that can currently be undone.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.created.len()
    }

    /// Spawn a `kind` shape at its configured position.
    ///
    /// Returns whether a shape was created. A missing prefab or a failed
    /// instantiation is logged and leaves the undo stack untouched.
    pub fn spawn(&mut self, kind: ShapeKind) -> bool {
        log::info!("Creating {kind}");
        let Some(prefab) = self.prefabs.get(&kind) else {
            log::error!("No prefab registered for {kind}");
            return false;
        };
        let position = self.positions.position_for(kind);
        let Some(handle) =
            self.backend.instantiate(prefab, position, Quat::IDENTITY)
        else {
            log::error!("Failed to create {kind}");
            return false;
        };

        match self.backend.ensure_collision_mesh(&handle) {
            CollisionMesh::Added => {
                log::debug!("Collision mesh added to {handle:?}");
            }
            CollisionMesh::AlreadyPresent => {
                log::debug!("{handle:?} already has a collision mesh");
            }
        }
        self.created.push(handle);
        log::info!("{kind} created at {position}");
        true
    }

    /// Destroy the most recently spawned shape.
    ///
    /// Returns whether anything was destroyed; an empty stack is a no-op.
    pub fn undo_last_shape(&mut self) -> bool {
        let Some(handle) = self.created.pop() else {
            log::info!("No shapes to undo");
            return false;
        };
        log::info!("Undo: destroying {handle:?}");
        self.backend.destroy(handle);
        true
    }

    /// Enable or disable the external sculpting tool.
    pub fn set_sculpting_tool_enabled(&mut self, enabled: bool) {
        let Some(tool) = self.sculpting_tool.as_mut() else {
            log::error!("No sculpting tool attached");
            return;
        };
        tool.set_active(enabled);
        log::info!(
            "Sculpting mode {}",
            if enabled { "enabled" } else { "disabled" }
        );
    }

    /// Flip the hand model between shown and hidden.
    pub fn toggle_hand(&mut self) {
        let Some(hand) = self.hand.as_mut() else {
            log::error!("No hand model attached");
            return;
        };
        let active = !hand.is_active();
        hand.set_active(active);
        log::debug!("Hand model {}", if active { "shown" } else { "hidden" });
    }
}
