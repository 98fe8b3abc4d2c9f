use glam::{Quat, Vec2, Vec3};

use crate::camera::core::CameraPose;
use crate::camera::focus::{FocusPoint, FocusProvider};
use crate::camera::state::{clamp_distance, OrbitState};
use crate::input::{FrameInput, MouseButton};
use crate::options::CameraOptions;

/// Scroll magnitude below which a frame is not treated as a zoom.
pub const ZOOM_EPSILON: f32 = 1e-4;

/// What the rig did with the most recent frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RigMode {
    /// No qualifying input.
    #[default]
    Idle,
    /// Orbit modifier + left button.
    Orbiting,
    /// Middle button.
    Panning,
    /// Scroll wheel.
    Zooming,
}

impl RigMode {
    /// Pick the single branch a frame dispatches to.
    ///
    /// Priority is orbit, then pan, then zoom. Nothing carries over from the
    /// previous frame.
    #[must_use]
    pub fn select(input: &FrameInput) -> Self {
        if input.orbit_modifier && input.buttons.contains(MouseButton::Left) {
            Self::Orbiting
        } else if input.buttons.contains(MouseButton::Middle) {
            Self::Panning
        } else if input.scroll_delta.abs() > ZOOM_EPSILON {
            Self::Zooming
        } else {
            Self::Idle
        }
    }
}

/// Pose plus orbit bookkeeping; only exists once a camera is known.
#[derive(Debug, Clone, Copy)]
struct Tracking {
    pose: CameraPose,
    orbit: OrbitState,
}

impl Tracking {
    fn new(pose: CameraPose, focus: Vec3, options: &CameraOptions) -> Self {
        let mut pose = pose;
        let mut orbit = OrbitState::from_positions(pose.position, focus);
        let clamped = clamp_distance(
            orbit.distance(),
            options.min_distance,
            options.max_distance,
        );
        if clamped != orbit.distance() {
            log::debug!(
                "Initial camera distance {} clamped to {clamped}",
                orbit.distance()
            );
            orbit.rescale(clamped, pose.back());
            pose.position = orbit.camera_position();
        }
        Self { pose, orbit }
    }
}

/// Orbit/pan/zoom camera rig around a focus point.
///
/// Feed it one [`FrameInput`] per frame through [`update`](Self::update).
/// The rig keeps the camera between `min_distance` and `max_distance` of the
/// focus and always aims it at the focus after orbiting.
///
/// Without a camera the rig is inert: updates return `None` until
/// [`attach_camera`](Self::attach_camera) is called.
pub struct CameraRig<F: FocusProvider = FocusPoint> {
    focus: F,
    tracking: Option<Tracking>,
    options: CameraOptions,
    mode: RigMode,
    focus_synthesized: bool,
}

impl CameraRig<FocusPoint> {
    /// Build a rig from the starting camera pose and focus point.
    ///
    /// A missing focus is synthesized `fallback_focus_distance` units in
    /// front of the camera, with a warning. A missing camera leaves the rig
    /// inert, with an error.
    #[must_use]
    pub fn new(
        camera: Option<CameraPose>,
        focus: Option<FocusPoint>,
        options: &CameraOptions,
    ) -> Self {
        match (camera, focus) {
            (_, Some(focus)) => Self::assemble(camera, focus, false, options),
            (Some(pose), None) => {
                let focus = FocusPoint::in_front_of(
                    &pose,
                    options.fallback_focus_distance,
                );
                log::warn!(
                    "No focus point supplied; created one at {}",
                    focus.position()
                );
                Self::assemble(camera, focus, true, options)
            }
            (None, None) => {
                Self::assemble(None, FocusPoint::default(), false, options)
            }
        }
    }
}

impl<F: FocusProvider> CameraRig<F> {
    /// Build a rig around an externally owned focus.
    #[must_use]
    pub fn with_focus(
        camera: Option<CameraPose>,
        focus: F,
        options: &CameraOptions,
    ) -> Self {
        Self::assemble(camera, focus, false, options)
    }

    fn assemble(
        camera: Option<CameraPose>,
        focus: F,
        focus_synthesized: bool,
        options: &CameraOptions,
    ) -> Self {
        let options = sanitize(options);
        let tracking =
            camera.map(|pose| Tracking::new(pose, focus.position(), &options));
        if tracking.is_none() {
            log::error!("No camera supplied; camera rig is inert");
        }
        Self {
            focus,
            tracking,
            options,
            mode: RigMode::Idle,
            focus_synthesized,
        }
    }

    /// Give an inert rig a camera, or replace the current one.
    pub fn attach_camera(&mut self, pose: CameraPose) {
        self.tracking =
            Some(Tracking::new(pose, self.focus.position(), &self.options));
    }

    /// Replace bounds and speeds. The current distance is pulled into the
    /// new bounds if it falls outside them.
    pub fn set_options(&mut self, options: &CameraOptions) {
        self.options = sanitize(options);
        let Some(tracking) = self.tracking.as_mut() else {
            return;
        };
        let distance = tracking.orbit.distance();
        let clamped = clamp_distance(
            distance,
            self.options.min_distance,
            self.options.max_distance,
        );
        if clamped != distance {
            tracking.orbit.set_focus_position(self.focus.position());
            tracking.orbit.rescale(clamped, tracking.pose.back());
            tracking.pose.position = tracking.orbit.camera_position();
        }
    }

    /// Current bounds and speeds.
    #[must_use]
    pub fn options(&self) -> &CameraOptions {
        &self.options
    }

    /// Current camera pose, `None` while inert.
    #[must_use]
    pub fn pose(&self) -> Option<CameraPose> {
        self.tracking.map(|t| t.pose)
    }

    /// Orbit bookkeeping, `None` while inert.
    #[must_use]
    pub fn orbit_state(&self) -> Option<&OrbitState> {
        self.tracking.as_ref().map(|t| &t.orbit)
    }

    /// Camera-to-focus distance, `None` while inert.
    #[must_use]
    pub fn distance(&self) -> Option<f32> {
        self.tracking.map(|t| t.orbit.distance())
    }

    /// Current focus position.
    #[must_use]
    pub fn focus_position(&self) -> Vec3 {
        self.focus.position()
    }

    /// The focus provider.
    #[must_use]
    pub fn focus(&self) -> &F {
        &self.focus
    }

    /// Mutable access to the focus provider.
    pub fn focus_mut(&mut self) -> &mut F {
        &mut self.focus
    }

    /// Branch taken on the most recent update.
    #[must_use]
    pub fn mode(&self) -> RigMode {
        self.mode
    }

    /// Whether the rig has no camera to drive.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.tracking.is_none()
    }

    /// Whether the focus point was created by the rig.
    #[must_use]
    pub fn focus_synthesized(&self) -> bool {
        self.focus_synthesized
    }

    /// Run one frame: dispatch to at most one of orbit, pan, or zoom and
    /// return the resulting pose (`None` while inert).
    pub fn update(&mut self, input: &FrameInput) -> Option<CameraPose> {
        if self.tracking.is_none() {
            self.mode = RigMode::Idle;
            return None;
        }
        self.mode = RigMode::select(input);
        match self.mode {
            RigMode::Idle => {}
            RigMode::Orbiting => {
                self.orbit(input.pointer_delta, input.delta_time, input.viewport);
            }
            RigMode::Panning => self.pan(input.pointer_delta),
            RigMode::Zooming => self.zoom(input.scroll_delta),
        }
        self.pose()
    }

    /// Rotate the camera around the focus.
    ///
    /// Pointer travel is converted to degrees as a fraction of the viewport:
    /// first a yaw about world up, then a pitch about the camera's right
    /// axis as it was before the yaw. The camera is re-aimed at the focus.
    pub fn orbit(&mut self, pointer_delta: Vec2, delta_time: f32, viewport: Vec2) {
        let Some(tracking) = self.tracking.as_mut() else {
            return;
        };
        if !(viewport.is_finite() && viewport.x > 0.0 && viewport.y > 0.0) {
            log::debug!("Skipping orbit for degenerate viewport {viewport}");
            return;
        }
        let scale = self.options.orbit_speed * delta_time;
        let horizontal = pointer_delta.x * scale / viewport.x;
        let vertical = -pointer_delta.y * scale / viewport.y;
        if !(horizontal.is_finite() && vertical.is_finite())
            || (horizontal == 0.0 && vertical == 0.0)
        {
            return;
        }

        let focus = self.focus.position();
        let right = tracking.pose.right();
        tracking.orbit.set_focus_position(focus);
        tracking
            .orbit
            .rotate(Quat::from_axis_angle(Vec3::Y, horizontal.to_radians()));
        tracking
            .orbit
            .rotate(Quat::from_axis_angle(right, vertical.to_radians()));
        tracking.pose.position = tracking.orbit.camera_position();
        tracking.pose.look_at(focus);
    }

    /// Slide camera and focus together across the view plane.
    ///
    /// The translation is applied in the camera's local axes; the focus is
    /// moved by the same world-space vector so later orbits pivot around the
    /// point that is still in front of the camera.
    pub fn pan(&mut self, pointer_delta: Vec2) {
        let Some(tracking) = self.tracking.as_mut() else {
            return;
        };
        let speed = self.options.pan_speed;
        let local =
            Vec3::new(-pointer_delta.x * speed, -pointer_delta.y * speed, 0.0);
        if !local.is_finite() {
            return;
        }

        let world = tracking.pose.translate_local(local);
        self.focus.translate(world);
        let focus = self.focus.position();
        tracking.orbit.set_focus_position(focus);
        tracking.orbit.set_offset(tracking.pose.position - focus);
    }

    /// Move the camera toward (negative) or away from (positive) the focus.
    ///
    /// The distance is clamped to the configured bounds. Orientation is not
    /// touched.
    pub fn zoom(&mut self, scroll_delta: f32) {
        let Some(tracking) = self.tracking.as_mut() else {
            return;
        };
        let requested = scroll_delta * self.options.zoom_speed;
        if !requested.is_finite() {
            return;
        }

        let focus = self.focus.position();
        let distance = clamp_distance(
            tracking.orbit.distance() + requested,
            self.options.min_distance,
            self.options.max_distance,
        );
        tracking.orbit.set_focus_position(focus);
        tracking.orbit.rescale(distance, tracking.pose.back());
        tracking.pose.position = tracking.orbit.camera_position();
    }
}

/// Repair bounds the rig cannot clamp against.
fn sanitize(options: &CameraOptions) -> CameraOptions {
    let mut options = options.clone();
    options.min_distance = options.min_distance.max(0.0);
    if options.min_distance > options.max_distance {
        log::warn!(
            "min_distance {} exceeds max_distance {}; swapping",
            options.min_distance,
            options.max_distance
        );
        std::mem::swap(&mut options.min_distance, &mut options.max_distance);
    }
    options
}

#[cfg(test)]
mod tests {
    use log::Level;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::camera::state::DISTANCE_TOLERANCE;
    use crate::input::MouseButtons;
    use crate::test_support::{capture_logs, count_logs};

    const EPS: f32 = 1e-4;
    const VIEWPORT: Vec2 = Vec2::new(1920.0, 1080.0);

    fn rig_at(camera: Vec3, focus: Vec3) -> CameraRig {
        CameraRig::new(
            Some(CameraPose::looking_at(camera, focus)),
            Some(FocusPoint::new(focus)),
            &CameraOptions::default(),
        )
    }

    fn orbit_frame(delta: Vec2, delta_time: f32) -> FrameInput {
        FrameInput {
            pointer_delta: delta,
            buttons: MouseButtons::NONE.with(MouseButton::Left),
            orbit_modifier: true,
            viewport: VIEWPORT,
            delta_time,
            ..FrameInput::default()
        }
    }

    fn pan_frame(delta: Vec2) -> FrameInput {
        FrameInput {
            pointer_delta: delta,
            buttons: MouseButtons::NONE.with(MouseButton::Middle),
            viewport: VIEWPORT,
            delta_time: 0.016,
            ..FrameInput::default()
        }
    }

    fn zoom_frame(scroll: f32) -> FrameInput {
        FrameInput {
            scroll_delta: scroll,
            viewport: VIEWPORT,
            delta_time: 0.016,
            ..FrameInput::default()
        }
    }

    fn assert_consistent(rig: &CameraRig) {
        let state = rig.orbit_state().unwrap();
        assert!(
            state.is_consistent(DISTANCE_TOLERANCE),
            "|offset| = {} but distance = {}",
            state.offset().length(),
            state.distance()
        );
        let pose = rig.pose().unwrap();
        assert!(pose.is_finite());
        let tolerance = EPS * pose.position.length().max(1.0);
        assert!(pose
            .position
            .abs_diff_eq(state.focus_position() + state.offset(), tolerance));
    }

    // -- dispatch ------------------------------------------------------------

    #[test]
    fn orbit_wins_over_pan_and_zoom() {
        let input = FrameInput {
            buttons: MouseButtons::NONE
                .with(MouseButton::Left)
                .with(MouseButton::Middle),
            orbit_modifier: true,
            scroll_delta: 1.0,
            ..FrameInput::default()
        };
        assert_eq!(RigMode::select(&input), RigMode::Orbiting);
    }

    #[test]
    fn left_button_without_modifier_falls_through() {
        let input = FrameInput {
            buttons: MouseButtons::NONE.with(MouseButton::Left),
            scroll_delta: 1.0,
            ..FrameInput::default()
        };
        assert_eq!(RigMode::select(&input), RigMode::Zooming);

        let input = FrameInput {
            buttons: MouseButtons::NONE.with(MouseButton::Left),
            ..FrameInput::default()
        };
        assert_eq!(RigMode::select(&input), RigMode::Idle);
    }

    #[test]
    fn modifier_without_left_button_does_not_orbit() {
        let input = FrameInput {
            orbit_modifier: true,
            buttons: MouseButtons::NONE.with(MouseButton::Right),
            ..FrameInput::default()
        };
        assert_eq!(RigMode::select(&input), RigMode::Idle);
    }

    #[test]
    fn pan_wins_over_zoom() {
        let input = FrameInput {
            buttons: MouseButtons::NONE.with(MouseButton::Middle),
            scroll_delta: -3.0,
            ..FrameInput::default()
        };
        assert_eq!(RigMode::select(&input), RigMode::Panning);
    }

    #[test]
    fn tiny_scroll_is_idle() {
        assert_eq!(RigMode::select(&zoom_frame(5e-5)), RigMode::Idle);
        assert_eq!(RigMode::select(&zoom_frame(-5e-5)), RigMode::Idle);
        assert_eq!(RigMode::select(&zoom_frame(2e-4)), RigMode::Zooming);
    }

    #[test]
    fn mode_is_reevaluated_every_frame() {
        let mut rig = rig_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        assert_eq!(rig.mode(), RigMode::Idle);
        let _ = rig.update(&pan_frame(Vec2::new(1.0, 0.0)));
        assert_eq!(rig.mode(), RigMode::Panning);
        let _ = rig.update(&FrameInput::default());
        assert_eq!(rig.mode(), RigMode::Idle);
    }

    // -- construction --------------------------------------------------------

    #[test]
    fn construction_is_eager() {
        let rig = rig_at(Vec3::new(0.0, 6.0, 8.0), Vec3::ZERO);
        assert_eq!(rig.distance(), Some(10.0));
        assert_eq!(
            rig.orbit_state().unwrap().offset(),
            Vec3::new(0.0, 6.0, 8.0)
        );
        assert!(!rig.focus_synthesized());
    }

    #[test]
    fn missing_focus_is_synthesized_with_one_warning() {
        capture_logs();
        let pose = CameraPose::new(Vec3::new(0.0, 0.0, 10.0), Quat::IDENTITY);
        let mut rig = CameraRig::new(Some(pose), None, &CameraOptions::default());

        assert!(rig.focus_synthesized());
        assert!(rig.focus_position().abs_diff_eq(Vec3::ZERO, EPS));
        assert!((rig.distance().unwrap() - 10.0).abs() < EPS);

        let _ = rig.update(&zoom_frame(1.0));
        let _ = rig.update(&pan_frame(Vec2::new(3.0, 1.0)));
        let _ = rig.update(&FrameInput::default());
        assert_eq!(count_logs(Level::Warn), 1);
    }

    #[test]
    fn missing_camera_leaves_rig_inert() {
        capture_logs();
        let mut rig = CameraRig::new(
            None,
            Some(FocusPoint::new(Vec3::ONE)),
            &CameraOptions::default(),
        );
        assert!(rig.is_inert());
        assert_eq!(count_logs(Level::Error), 1);

        assert_eq!(rig.update(&zoom_frame(-3.0)), None);
        assert_eq!(rig.mode(), RigMode::Idle);
        rig.pan(Vec2::new(10.0, 10.0));
        assert_eq!(rig.focus_position(), Vec3::ONE);
        assert_eq!(rig.distance(), None);
    }

    #[test]
    fn attaching_a_camera_revives_an_inert_rig() {
        let mut rig = CameraRig::new(None, None, &CameraOptions::default());
        assert!(rig.is_inert());
        rig.attach_camera(CameraPose::looking_at(
            Vec3::new(0.0, 0.0, 20.0),
            Vec3::ZERO,
        ));
        assert!(!rig.is_inert());
        assert_eq!(rig.distance(), Some(20.0));
        let pose = rig.update(&zoom_frame(-1.0)).unwrap();
        assert!(pose.position.abs_diff_eq(Vec3::new(0.0, 0.0, 10.0), EPS));
    }

    #[test]
    fn initial_distance_is_clamped_into_bounds() {
        let rig = rig_at(Vec3::new(0.0, 0.0, 100.0), Vec3::ZERO);
        assert_eq!(rig.distance(), Some(50.0));
        assert!(rig
            .pose()
            .unwrap()
            .position
            .abs_diff_eq(Vec3::new(0.0, 0.0, 50.0), EPS));
        assert_consistent(&rig);
    }

    #[test]
    fn camera_on_top_of_focus_backs_off_along_view_axis() {
        let pose = CameraPose::new(Vec3::ZERO, Quat::IDENTITY);
        let rig = CameraRig::new(
            Some(pose),
            Some(FocusPoint::new(Vec3::ZERO)),
            &CameraOptions::default(),
        );
        assert_eq!(rig.distance(), Some(2.0));
        assert!(rig
            .pose()
            .unwrap()
            .position
            .abs_diff_eq(Vec3::new(0.0, 0.0, 2.0), EPS));
        assert_consistent(&rig);
    }

    #[test]
    fn inverted_bounds_are_swapped_with_warning() {
        capture_logs();
        let options = CameraOptions {
            min_distance: 40.0,
            max_distance: 5.0,
            ..CameraOptions::default()
        };
        let rig = CameraRig::new(
            Some(CameraPose::looking_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO)),
            Some(FocusPoint::default()),
            &options,
        );
        assert_eq!(rig.options().min_distance, 5.0);
        assert_eq!(rig.options().max_distance, 40.0);
        assert_eq!(count_logs(Level::Warn), 1);
    }

    // -- zoom ----------------------------------------------------------------

    #[test]
    fn zoom_in_clamps_to_min_distance() {
        let mut rig = rig_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let pose = rig.update(&zoom_frame(-20.0)).unwrap();
        assert_eq!(rig.mode(), RigMode::Zooming);
        assert_eq!(rig.distance(), Some(2.0));
        assert!(pose.position.abs_diff_eq(Vec3::new(0.0, 0.0, 2.0), EPS));
        assert_consistent(&rig);
    }

    #[test]
    fn zoom_is_idempotent_at_a_bound() {
        let mut rig = rig_at(Vec3::new(3.0, 4.0, 0.0), Vec3::ZERO);
        let _ = rig.update(&zoom_frame(-20.0));
        let at_bound = rig.pose().unwrap();
        for _ in 0..10 {
            let _ = rig.update(&zoom_frame(-1.5));
            assert_eq!(rig.distance(), Some(2.0));
            assert!(rig.pose().unwrap().position.abs_diff_eq(at_bound.position, 1e-5));
        }

        let _ = rig.update(&zoom_frame(1000.0));
        let far = rig.pose().unwrap();
        let _ = rig.update(&zoom_frame(3.0));
        assert_eq!(rig.distance(), Some(50.0));
        assert!(rig.pose().unwrap().position.abs_diff_eq(far.position, 1e-4));
        assert_consistent(&rig);
    }

    #[test]
    fn zoom_keeps_orientation() {
        let mut rig = rig_at(Vec3::new(5.0, 5.0, 5.0), Vec3::ZERO);
        let before = rig.pose().unwrap().orientation;
        let _ = rig.update(&zoom_frame(0.5));
        assert_eq!(rig.pose().unwrap().orientation, before);
        assert!((rig.distance().unwrap() - (75.0_f32.sqrt() + 5.0)).abs() < EPS);
    }

    #[test]
    fn zoom_follows_external_focus_moves() {
        let mut rig = rig_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        rig.focus_mut().translate(Vec3::new(0.0, 5.0, 0.0));
        let pose = rig.update(&zoom_frame(-0.5)).unwrap();
        assert!(pose.position.abs_diff_eq(Vec3::new(0.0, 5.0, 5.0), EPS));
        assert_consistent(&rig);
    }

    // -- orbit ---------------------------------------------------------------

    #[test]
    fn zoom_out_from_the_focus_backs_off_along_view_axis() {
        let options = CameraOptions {
            min_distance: 0.0,
            ..CameraOptions::default()
        };
        let mut rig = CameraRig::new(
            Some(CameraPose::looking_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO)),
            Some(FocusPoint::new(Vec3::ZERO)),
            &options,
        );
        let orientation = rig.pose().unwrap().orientation;

        rig.zoom(-1.0);
        assert_eq!(rig.distance(), Some(0.0));
        assert!(rig.pose().unwrap().position.abs_diff_eq(Vec3::ZERO, EPS));
        assert_eq!(rig.orbit_state().unwrap().offset(), Vec3::ZERO);

        rig.zoom(0.5);
        let pose = rig.pose().unwrap();
        assert!((rig.distance().unwrap() - 5.0).abs() < EPS);
        assert!(pose.position.abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), EPS));
        assert_eq!(pose.orientation, orientation);
        assert_consistent(&rig);
    }

    #[test]
    fn orbit_with_zero_delta_changes_nothing() {
        let mut rig = rig_at(Vec3::new(1.0, 2.0, 10.0), Vec3::new(0.5, 0.0, 0.0));
        let before = rig.pose().unwrap();
        let state_before = *rig.orbit_state().unwrap();
        let after = rig.update(&orbit_frame(Vec2::ZERO, 0.016)).unwrap();
        assert_eq!(rig.mode(), RigMode::Orbiting);
        assert_eq!(after, before);
        assert_eq!(*rig.orbit_state().unwrap(), state_before);
    }

    #[test]
    fn orbit_composes_yaw_then_pitch_about_prior_right_axis() {
        let mut rig = rig_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let right_before = rig.pose().unwrap().right();

        // 5 degrees each way at 10000 deg/s over 10 ms.
        let pose = rig.update(&orbit_frame(Vec2::new(96.0, 54.0), 0.01)).unwrap();

        let yaw = Quat::from_axis_angle(Vec3::Y, 5.0_f32.to_radians());
        let pitch = Quat::from_axis_angle(right_before, (-5.0_f32).to_radians());
        let expected = pitch * (yaw * Vec3::new(0.0, 0.0, 10.0));
        assert!(
            pose.position.abs_diff_eq(expected, EPS),
            "expected {expected}, got {}",
            pose.position
        );
    }

    #[test]
    fn orbit_preserves_distance_and_aims_at_focus() {
        let focus = Vec3::new(2.0, -1.0, 3.0);
        let mut rig = rig_at(Vec3::new(9.0, 4.0, -6.0), focus);
        let distance = rig.distance().unwrap();

        for delta in [
            Vec2::new(120.0, 0.0),
            Vec2::new(0.0, -80.0),
            Vec2::new(-33.0, 47.0),
            Vec2::new(500.0, 300.0),
        ] {
            let pose = rig.update(&orbit_frame(delta, 0.016)).unwrap();
            assert_eq!(rig.distance(), Some(distance));
            assert!((pose.position.distance(focus) - distance).abs() < EPS);
            let to_focus = (focus - pose.position).normalize();
            assert!(pose.forward().abs_diff_eq(to_focus, EPS));
            assert_consistent(&rig);
        }
    }

    #[test]
    fn orbit_over_the_pole_stays_finite() {
        let mut rig = rig_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        for _ in 0..200 {
            let pose = rig
                .update(&orbit_frame(Vec2::new(0.0, 40.0), 0.016))
                .unwrap();
            assert!(pose.is_finite());
        }
        assert_consistent(&rig);
    }

    #[test]
    fn orbit_with_zero_viewport_is_skipped() {
        let mut rig = rig_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let before = rig.pose().unwrap();
        rig.orbit(Vec2::new(50.0, 50.0), 0.016, Vec2::new(0.0, 1080.0));
        assert_eq!(rig.pose().unwrap(), before);
    }

    // -- pan -----------------------------------------------------------------

    #[test]
    fn pan_moves_camera_and_focus_by_local_vector() {
        let mut rig = rig_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let offset_before = rig.orbit_state().unwrap().offset();

        let pose = rig.update(&pan_frame(Vec2::new(10.0, 0.0))).unwrap();
        assert_eq!(rig.mode(), RigMode::Panning);
        assert!(pose.position.abs_diff_eq(Vec3::new(-1.0, 0.0, 10.0), EPS));
        assert!(rig
            .focus_position()
            .abs_diff_eq(Vec3::new(-1.0, 0.0, 0.0), EPS));
        assert!(rig
            .orbit_state()
            .unwrap()
            .offset()
            .abs_diff_eq(offset_before, EPS));
        assert_consistent(&rig);
    }

    #[test]
    fn pan_shift_is_identical_for_camera_and_focus() {
        let mut rig = rig_at(Vec3::new(4.0, 7.0, -3.0), Vec3::new(1.0, 1.0, 1.0));
        for delta in [Vec2::new(12.0, -7.0), Vec2::new(-3.5, 40.0)] {
            let cam_before = rig.pose().unwrap().position;
            let focus_before = rig.focus_position();
            let cam_after = rig.update(&pan_frame(delta)).unwrap().position;
            let focus_after = rig.focus_position();
            assert!((cam_after - cam_before).abs_diff_eq(focus_after - focus_before, EPS));
            assert!(!(cam_after - cam_before).abs_diff_eq(Vec3::ZERO, EPS));
        }
        assert_consistent(&rig);
    }

    #[test]
    fn pan_then_orbit_pivots_around_moved_focus() {
        let mut rig = rig_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let _ = rig.update(&pan_frame(Vec2::new(-50.0, 0.0)));
        let focus = rig.focus_position();
        assert!(focus.abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), EPS));

        let pose = rig.update(&orbit_frame(Vec2::new(200.0, 0.0), 0.016)).unwrap();
        assert!((pose.position.distance(focus) - 10.0).abs() < EPS);
    }

    // -- reconfiguration -----------------------------------------------------

    #[test]
    fn tightening_bounds_pulls_camera_in() {
        let mut rig = rig_at(Vec3::new(0.0, 0.0, 30.0), Vec3::ZERO);
        rig.set_options(&CameraOptions {
            max_distance: 12.0,
            ..CameraOptions::default()
        });
        assert_eq!(rig.distance(), Some(12.0));
        assert!(rig
            .pose()
            .unwrap()
            .position
            .abs_diff_eq(Vec3::new(0.0, 0.0, 12.0), EPS));
        assert_consistent(&rig);
    }

    #[test]
    fn faster_zoom_speed_takes_effect() {
        let mut rig = rig_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        rig.set_options(&CameraOptions {
            zoom_speed: 2.0,
            ..CameraOptions::default()
        });
        let _ = rig.update(&zoom_frame(3.0));
        assert_eq!(rig.distance(), Some(16.0));
    }

    // -- invariants ----------------------------------------------------------

    #[test]
    fn offset_matches_distance_after_every_operation() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let options = CameraOptions::default();
        let mut rig = rig_at(Vec3::new(3.0, 8.0, 14.0), Vec3::new(0.0, 1.0, 0.0));

        for _ in 0..1000 {
            let delta = Vec2::new(
                rng.random_range(-80.0..80.0),
                rng.random_range(-80.0..80.0),
            );
            let input = match rng.random_range(0..4) {
                0 => orbit_frame(delta, rng.random_range(0.0..0.05)),
                1 => pan_frame(delta),
                2 => zoom_frame(rng.random_range(-3.0..3.0)),
                _ => FrameInput::default(),
            };
            let _ = rig.update(&input);

            assert_consistent(&rig);
            // Pan resyncs the distance from positions, so allow rounding.
            let distance = rig.distance().unwrap();
            assert!(
                distance >= options.min_distance - 1e-3
                    && distance <= options.max_distance + 1e-3,
                "distance {distance} escaped bounds"
            );
        }
    }
}
