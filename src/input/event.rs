use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Platform-agnostic input events.
///
/// These are fed into an [`InputSampler`](super::InputSampler), which folds
/// everything that arrived between two frames into one
/// [`FrameInput`](super::FrameInput).
///
/// # Example
///
/// ```ignore
/// sampler.handle_event(InputEvent::CursorMoved { x: 100.0, y: 200.0 });
/// let frame = sampler.sample(viewport, dt);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels, growing upward.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel. Positive moves the camera away from the focus.
    Scroll {
        /// Scroll amount in wheel units.
        delta: f32,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether an alt key is held.
        alt: bool,
        /// Whether a shift key is held.
        shift: bool,
        /// Whether a control key is held.
        control: bool,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

impl MouseButton {
    const fn bit(self) -> u8 {
        match self {
            Self::Left => 1,
            Self::Right => 1 << 1,
            Self::Middle => 1 << 2,
        }
    }
}

/// Set of mouse buttons held during a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MouseButtons(u8);

impl MouseButtons {
    /// No buttons held.
    pub const NONE: Self = Self(0);

    /// Whether `button` is in the set.
    #[must_use]
    pub const fn contains(self, button: MouseButton) -> bool {
        self.0 & button.bit() != 0
    }

    /// Copy of the set with `button` added.
    #[must_use]
    pub const fn with(self, button: MouseButton) -> Self {
        Self(self.0 | button.bit())
    }

    /// Add or remove `button`.
    pub fn set(&mut self, button: MouseButton, held: bool) {
        if held {
            self.0 |= button.bit();
        } else {
            self.0 &= !button.bit();
        }
    }

    /// Whether no button is held.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Modifier key that can be bound to orbiting.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ModifierKey {
    /// Either alt/option key.
    #[default]
    Alt,
    /// Either shift key.
    Shift,
    /// Either control key.
    Control,
}

/// Snapshot of the modifier keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Alt held.
    pub alt: bool,
    /// Shift held.
    pub shift: bool,
    /// Control held.
    pub control: bool,
}

impl Modifiers {
    /// Whether `key` is held.
    #[must_use]
    pub const fn is_held(self, key: ModifierKey) -> bool {
        match key {
            ModifierKey::Alt => self.alt,
            ModifierKey::Shift => self.shift,
            ModifierKey::Control => self.control,
        }
    }
}

#[cfg(feature = "viewer")]
impl MouseButton {
    /// Map a winit button. Back, forward and other extra buttons have no
    /// role in the rig and are dropped.
    #[must_use]
    pub const fn from_winit(button: winit::event::MouseButton) -> Option<Self> {
        match button {
            winit::event::MouseButton::Left => Some(Self::Left),
            winit::event::MouseButton::Right => Some(Self::Right),
            winit::event::MouseButton::Middle => Some(Self::Middle),
            winit::event::MouseButton::Back
            | winit::event::MouseButton::Forward
            | winit::event::MouseButton::Other(_) => None,
        }
    }
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Translate a winit window event, if it is one the sampler cares about.
    ///
    /// `window_height` flips winit's downward-growing cursor y so that
    /// pointer deltas grow upward.
    #[must_use]
    pub fn from_window_event(
        event: &winit::event::WindowEvent,
        window_height: f32,
    ) -> Option<Self> {
        use winit::event::{ElementState, MouseScrollDelta, WindowEvent};

        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(Self::CursorMoved {
                    x: position.x as f32,
                    y: window_height - position.y as f32,
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                MouseButton::from_winit(*button).map(|button| {
                    Self::MouseButton {
                        button,
                        pressed: *state == ElementState::Pressed,
                    }
                })
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                Some(Self::Scroll { delta: scroll })
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                let state = modifiers.state();
                Some(Self::ModifiersChanged {
                    alt: state.alt_key(),
                    shift: state.shift_key(),
                    control: state.control_key(),
                })
            }
            _ => None,
        }
    }
}
