//! Input handling: platform-agnostic event types and the sampler that folds
//! them into one [`FrameInput`] per frame.

/// Platform-agnostic input events, buttons, and modifiers.
pub mod event;
/// Per-frame input snapshot.
pub mod frame;
/// Event accumulation between frames.
pub mod sampler;

pub use event::{InputEvent, ModifierKey, Modifiers, MouseButton, MouseButtons};
pub use frame::FrameInput;
pub use sampler::InputSampler;
