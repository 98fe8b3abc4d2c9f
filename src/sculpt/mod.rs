//! Hand-driven sculpt trigger.
//!
//! While sculpting is active, every frame forwards the tracked hand position
//! to the attached [`Sculptor`] together with the selected [`BrushMode`].
//! The deformation itself lives in the sculptor; this module only gates it.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// How a sculpt stroke deforms the mesh.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BrushMode {
    /// Push the surface away from the brush.
    #[default]
    Push,
    /// Pull the surface toward the brush.
    Pull,
    /// Relax the surface under the brush.
    Smooth,
}

impl fmt::Display for BrushMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Push => "PUSH",
            Self::Pull => "PULL",
            Self::Smooth => "SMOOTH",
        })
    }
}

/// Mesh sculpting collaborator.
pub trait Sculptor {
    /// Apply one brush stroke centred on a world-space point.
    fn sculpt_at_point(&mut self, position: Vec3, brush: BrushMode);
}

/// Something with a world position, typically a tracked fingertip.
pub trait PositionSource {
    /// Current world-space position.
    fn world_position(&self) -> Vec3;
}

impl PositionSource for Vec3 {
    fn world_position(&self) -> Vec3 {
        *self
    }
}

/// Per-frame gate between a hand position and a sculptor.
#[derive(Default)]
pub struct SculptTrigger {
    sculptor: Option<Box<dyn Sculptor>>,
    source: Option<Box<dyn PositionSource>>,
    active: bool,
    brush: BrushMode,
}

impl SculptTrigger {
    /// Create an idle trigger with no collaborators attached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach (or detach, with `None`) the sculptor.
    pub fn set_sculptor(&mut self, sculptor: Option<Box<dyn Sculptor>>) {
        self.sculptor = sculptor;
    }

    /// Attach (or detach, with `None`) the hand position source.
    pub fn set_position_source(
        &mut self,
        source: Option<Box<dyn PositionSource>>,
    ) {
        self.source = source;
    }

    /// Whether sculpting is switched on.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Brush mode passed with every stroke.
    #[must_use]
    pub fn brush_mode(&self) -> BrushMode {
        self.brush
    }

    /// Switch sculpting on.
    pub fn start(&mut self) {
        self.active = true;
        log::info!("Hand sculpting started");
    }

    /// Switch sculpting off.
    pub fn stop(&mut self) {
        self.active = false;
        log::info!("Hand sculpting stopped");
    }

    /// Select the brush used by subsequent strokes.
    ///
    /// Without a sculptor attached this is a configuration error: it is
    /// logged, and the mode is still kept for when one is attached.
    pub fn set_brush_mode(&mut self, brush: BrushMode) {
        self.brush = brush;
        if self.sculptor.is_some() {
            log::info!("Brush mode: {brush}");
        } else {
            log::error!("Brush mode set to {brush} but no sculptor is attached");
        }
    }

    /// Run one frame. Returns whether a stroke was issued.
    pub fn tick(&mut self) -> bool {
        if !self.active {
            return false;
        }
        let (Some(sculptor), Some(source)) =
            (self.sculptor.as_mut(), self.source.as_ref())
        else {
            return false;
        };
        sculptor.sculpt_at_point(source.world_position(), self.brush);
        true
    }
}
