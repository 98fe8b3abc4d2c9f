//! Scene session: the composition root that owns input sampling, the camera
//! rig, the sculpt trigger, and the shape spawner, and runs them once per
//! frame.
//!
//! # Usage
//!
//! ```ignore
//! // In the event loop:
//! session.handle_event(event);
//! if let Some(key) = pressed_key {
//!     let _ = session.handle_key_press(key);
//! }
//!
//! // Once per redraw:
//! let report = session.tick(viewport);
//! if let Some(pose) = report.pose {
//!     renderer.set_view(pose.view_matrix());
//! }
//! ```

/// Discrete scene commands and their key-bindable tags.
pub mod command;

pub use command::{KeyAction, SceneCommand};
use glam::Vec2;

use crate::camera::{CameraPose, CameraRig, FocusPoint, FocusProvider, RigMode};
use crate::input::{InputEvent, InputSampler};
use crate::options::{KeybindingOptions, Options};
use crate::sculpt::SculptTrigger;
use crate::spawner::{SceneBackend, ShapeSpawner};
use crate::util::FrameClock;

/// What happened during one [`SceneSession::frame`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Camera pose after the frame, `None` while the rig is inert.
    pub pose: Option<CameraPose>,
    /// Branch the camera rig took.
    pub mode: RigMode,
    /// Whether a sculpt stroke was issued.
    pub sculpted: bool,
}

/// Owns every interactive component of the scene.
pub struct SceneSession<B: SceneBackend, F: FocusProvider = FocusPoint> {
    sampler: InputSampler,
    clock: FrameClock,
    rig: CameraRig<F>,
    sculpt: SculptTrigger,
    spawner: ShapeSpawner<B>,
    keybindings: KeybindingOptions,
}

impl<B: SceneBackend, F: FocusProvider> SceneSession<B, F> {
    /// Assemble a session around an already-built camera rig and the host's
    /// scene backend. The rig is reconfigured from `options.camera`.
    #[must_use]
    pub fn new(options: &Options, rig: CameraRig<F>, backend: B) -> Self {
        let mut session = Self {
            sampler: InputSampler::new(options.input.orbit_modifier),
            clock: FrameClock::new(options.input.max_frame_step),
            rig,
            sculpt: SculptTrigger::new(),
            spawner: ShapeSpawner::new(backend, options.spawner.clone()),
            keybindings: options.keybindings.clone(),
        };
        session.rig.set_options(&options.camera);
        session
    }

    /// Apply new options to every component.
    pub fn apply_options(&mut self, options: &Options) {
        self.rig.set_options(&options.camera);
        self.sampler.set_orbit_modifier(options.input.orbit_modifier);
        self.clock = FrameClock::new(options.input.max_frame_step);
        self.spawner.set_positions(options.spawner.clone());
        self.keybindings = options.keybindings.clone();
    }

    /// Record a raw input event for the next frame.
    pub fn handle_event(&mut self, event: InputEvent) {
        self.sampler.handle_event(event);
    }

    /// Look up the command bound to a physical key string.
    #[must_use]
    pub fn key_command(&self, key: &str) -> Option<SceneCommand> {
        self.keybindings.lookup(key).map(KeyAction::to_command)
    }

    /// Execute the command bound to `key`, if any. Returns whether one was.
    pub fn handle_key_press(&mut self, key: &str) -> bool {
        let Some(command) = self.key_command(key) else {
            return false;
        };
        self.execute(command);
        true
    }

    /// Run a discrete command.
    pub fn execute(&mut self, command: SceneCommand) {
        match command {
            SceneCommand::Spawn(kind) => {
                let _ = self.spawner.spawn(kind);
            }
            SceneCommand::UndoLastShape => {
                let _ = self.spawner.undo_last_shape();
            }
            SceneCommand::ToggleHand => self.spawner.toggle_hand(),
            SceneCommand::SetSculptingTool(enabled) => {
                self.spawner.set_sculpting_tool_enabled(enabled);
            }
            SceneCommand::StartSculpting => self.sculpt.start(),
            SceneCommand::StopSculpting => self.sculpt.stop(),
            SceneCommand::SetBrushMode(brush) => {
                self.sculpt.set_brush_mode(brush);
            }
        }
    }

    /// Run one frame with an explicit time step.
    pub fn frame(&mut self, viewport: Vec2, delta_time: f32) -> FrameReport {
        let input = self.sampler.sample(viewport, delta_time);
        let pose = self.rig.update(&input);
        let sculpted = self.sculpt.tick();
        FrameReport {
            pose,
            mode: self.rig.mode(),
            sculpted,
        }
    }

    /// Run one frame, measuring the time step with the session's clock.
    pub fn tick(&mut self, viewport: Vec2) -> FrameReport {
        let delta_time = self.clock.tick();
        self.frame(viewport, delta_time)
    }

    /// The camera rig.
    #[must_use]
    pub fn rig(&self) -> &CameraRig<F> {
        &self.rig
    }

    /// Mutable access to the camera rig.
    pub fn rig_mut(&mut self) -> &mut CameraRig<F> {
        &mut self.rig
    }

    /// The sculpt trigger.
    #[must_use]
    pub fn sculpt(&self) -> &SculptTrigger {
        &self.sculpt
    }

    /// Mutable access to the sculpt trigger, e.g. to attach collaborators.
    pub fn sculpt_mut(&mut self) -> &mut SculptTrigger {
        &mut self.sculpt
    }

    /// The shape spawner.
    #[must_use]
    pub fn spawner(&self) -> &ShapeSpawner<B> {
        &self.spawner
    }

    /// Mutable access to the shape spawner, e.g. to register prefabs.
    pub fn spawner_mut(&mut self) -> &mut ShapeSpawner<B> {
        &mut self.spawner
    }

    /// Frame clock (smoothed FPS for overlays).
    #[must_use]
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }
}
