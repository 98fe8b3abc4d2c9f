use glam::Vec2;

use super::event::MouseButtons;

/// Everything the camera rig reads in one frame.
///
/// Produced once per tick by [`InputSampler::sample`](super::InputSampler::sample),
/// or built directly by hosts that poll input themselves.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Pointer position in screen pixels (y grows upward).
    pub pointer_position: Vec2,
    /// Pointer motion since the previous frame, in pixels.
    pub pointer_delta: Vec2,
    /// Mouse buttons held this frame.
    pub buttons: MouseButtons,
    /// Whether the configured orbit modifier key is held.
    pub orbit_modifier: bool,
    /// Scroll accumulated since the previous frame.
    pub scroll_delta: f32,
    /// Viewport width and height in pixels.
    pub viewport: Vec2,
    /// Seconds elapsed since the previous frame.
    pub delta_time: f32,
}
