use glam::{Quat, Vec3};

/// Default tolerance for the `|offset| == distance` invariant.
pub const DISTANCE_TOLERANCE: f32 = 1e-5;

/// Clamp `value` into `[min, max]`.
///
/// Unlike [`f32::clamp`] this never panics; a NaN input collapses to `min`.
/// Callers are expected to pass `min <= max`.
#[must_use]
pub fn clamp_distance(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Orbit bookkeeping: where the pivot is, and where the camera sits relative
/// to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    focus_position: Vec3,
    offset: Vec3,
    distance: f32,
}

impl OrbitState {
    /// Build from the real camera and focus positions.
    #[must_use]
    pub fn from_positions(camera: Vec3, focus: Vec3) -> Self {
        let offset = camera - focus;
        Self {
            focus_position: focus,
            offset,
            distance: offset.length(),
        }
    }

    /// World-space pivot as of the last update.
    #[must_use]
    pub fn focus_position(&self) -> Vec3 {
        self.focus_position
    }

    /// Camera position relative to the focus.
    #[must_use]
    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    /// Cached length of [`offset`](Self::offset).
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Camera position implied by the focus and offset.
    #[must_use]
    pub fn camera_position(&self) -> Vec3 {
        self.focus_position + self.offset
    }

    pub(crate) fn set_focus_position(&mut self, focus: Vec3) {
        self.focus_position = focus;
    }

    /// Replace the offset and resync the distance from it.
    pub(crate) fn set_offset(&mut self, offset: Vec3) {
        self.offset = offset;
        self.distance = offset.length();
    }

    /// Keep the offset direction and change its length to `distance`.
    ///
    /// A zero offset has no direction; `fallback` is used in that case, and
    /// world +Z if the fallback is degenerate too.
    pub(crate) fn rescale(&mut self, distance: f32, fallback: Vec3) {
        let dir = self
            .offset
            .try_normalize()
            .or_else(|| fallback.try_normalize())
            .unwrap_or(Vec3::Z);
        self.offset = dir * distance;
        self.distance = distance;
    }

    /// Rotate the offset about the focus. The cached distance is kept and
    /// the rotated offset is rescaled to it, so repeated orbits don't drift.
    pub(crate) fn rotate(&mut self, rotation: Quat) {
        if let Some(dir) = (rotation * self.offset).try_normalize() {
            self.offset = dir * self.distance;
        }
    }

    /// Whether `|offset|` matches the cached distance within `tolerance`
    /// (relative for distances above one unit).
    #[must_use]
    pub fn is_consistent(&self, tolerance: f32) -> bool {
        (self.offset.length() - self.distance).abs()
            <= tolerance * self.distance.max(1.0)
    }
}
