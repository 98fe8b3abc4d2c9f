//! Folds raw input events into one snapshot per frame.
//!
//! The `InputSampler` owns the transient input state between frames: the
//! cursor position, held buttons and modifiers, and the scroll accumulated
//! since the last sample. It is the only thing that sits between raw window
//! events and [`CameraRig::update`](crate::camera::CameraRig::update).

use glam::Vec2;

use super::event::{InputEvent, ModifierKey, Modifiers, MouseButtons};
use super::frame::FrameInput;

/// Accumulates [`InputEvent`]s and yields a [`FrameInput`] per tick.
#[derive(Debug, Clone, Default)]
pub struct InputSampler {
    /// Latest cursor position.
    pointer_position: Vec2,
    /// Cursor position at the previous sample; `None` before the first one.
    last_sampled_position: Option<Vec2>,
    buttons: MouseButtons,
    modifiers: Modifiers,
    /// Scroll accumulated since the previous sample.
    scroll: f32,
    orbit_modifier: ModifierKey,
}

impl InputSampler {
    /// Create a sampler that treats `orbit_modifier` as the orbit key.
    #[must_use]
    pub fn new(orbit_modifier: ModifierKey) -> Self {
        Self {
            orbit_modifier,
            ..Self::default()
        }
    }

    /// Change which modifier key enables orbiting.
    pub fn set_orbit_modifier(&mut self, key: ModifierKey) {
        self.orbit_modifier = key;
    }

    /// Current cursor position in pixels.
    #[must_use]
    pub fn pointer_position(&self) -> Vec2 {
        self.pointer_position
    }

    /// Mouse buttons currently held.
    #[must_use]
    pub fn buttons(&self) -> MouseButtons {
        self.buttons
    }

    /// Modifier keys currently held.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Release every held button, e.g. when the window loses focus and the
    /// release events will never arrive.
    pub fn release_all(&mut self) {
        self.buttons = MouseButtons::NONE;
        self.modifiers = Modifiers::default();
    }

    /// Record a raw event.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.pointer_position = Vec2::new(x, y);
            }
            InputEvent::MouseButton { button, pressed } => {
                self.buttons.set(button, pressed);
            }
            InputEvent::Scroll { delta } => self.scroll += delta,
            InputEvent::ModifiersChanged {
                alt,
                shift,
                control,
            } => {
                self.modifiers = Modifiers {
                    alt,
                    shift,
                    control,
                };
            }
        }
    }

    /// Produce this frame's snapshot.
    ///
    /// The pointer delta is measured against the position at the previous
    /// sample, which is refreshed on every call whether or not the rig acts
    /// on it. Accumulated scroll is consumed.
    pub fn sample(&mut self, viewport: Vec2, delta_time: f32) -> FrameInput {
        let pointer_delta = self
            .last_sampled_position
            .map_or(Vec2::ZERO, |last| self.pointer_position - last);
        self.last_sampled_position = Some(self.pointer_position);

        FrameInput {
            pointer_position: self.pointer_position,
            pointer_delta,
            buttons: self.buttons,
            orbit_modifier: self.modifiers.is_held(self.orbit_modifier),
            scroll_delta: std::mem::take(&mut self.scroll),
            viewport,
            delta_time,
        }
    }
}
