//! Camera system for 3D scene viewing.
//!
//! Provides an orbital camera rig with rotation, panning, and clamped zoom
//! around a focus point.

/// Orbit/pan/zoom rig driven by per-frame input.
pub mod controller;
/// Camera pose type and look-at math.
pub mod core;
/// Focus point abstraction.
pub mod focus;
/// Orbit bookkeeping (focus, offset, distance).
pub mod state;

pub use controller::{CameraRig, RigMode, ZOOM_EPSILON};
pub use self::core::CameraPose;
pub use focus::{FocusPoint, FocusProvider};
pub use state::{clamp_distance, OrbitState};
