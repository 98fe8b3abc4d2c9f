// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests lean on unwrap and wildcard imports
#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::wildcard_imports, clippy::float_cmp)
)]

//! Interactive 3D scene components: an orbit/pan/zoom camera rig, a
//! hand-driven sculpt trigger, and a primitive shape spawner with undo.
//!
//! Everything is frame-driven and single-threaded. Hosts feed raw window
//! events in, call one update per frame, and read back a camera pose. The
//! scene itself (meshes, prefabs, rendering) stays on the host side behind
//! small collaborator traits.
//!
//! # Key entry points
//!
//! - [`camera::CameraRig`] - orbit/pan/zoom math around a focus point
//! - [`input::InputSampler`] - folds window events into one
//!   [`input::FrameInput`] per frame
//! - [`sculpt::SculptTrigger`] - forwards a tracked hand position to a
//!   [`sculpt::Sculptor`]
//! - [`spawner::ShapeSpawner`] - shape creation and LIFO undo over a
//!   [`spawner::SceneBackend`]
//! - [`session::SceneSession`] - owns all of the above and runs the frame
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Logging
//!
//! Configuration problems (no camera, no focus, no sculptor, no prefab) are
//! reported through the [`log`] facade and leave the affected capability
//! inert. Install any `log` backend in the host to see them.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod sculpt;
pub mod session;
pub mod spawner;
pub mod util;

#[cfg(test)]
mod test_support;

pub use error::SceneError;
