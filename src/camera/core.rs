use glam::{Mat3, Mat4, Quat, Vec3};

/// Camera position and orientation in world space.
///
/// Orientation follows the right-handed convention: the camera looks down
/// its local -Z axis with +Y as local up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position in world space.
    pub position: Vec3,
    /// Rotation from camera-local to world axes.
    pub orientation: Quat,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Quat::IDENTITY)
    }
}

impl CameraPose {
    /// Create a pose from an explicit position and orientation.
    #[must_use]
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Create a pose at `position` aimed at `target` with world +Y as up.
    ///
    /// Falls back to the identity orientation when no look direction can be
    /// derived (target on top of the eye, or straight above/below it).
    #[must_use]
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        let mut pose = Self::new(position, Quat::IDENTITY);
        pose.look_at(target);
        pose
    }

    /// Local -Z in world space.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Local +Z in world space (the direction the camera backs away along).
    #[must_use]
    pub fn back(&self) -> Vec3 {
        self.orientation * Vec3::Z
    }

    /// Local +X in world space.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    /// Local +Y in world space.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Move the camera by a vector expressed in its own local axes.
    /// Returns the equivalent world-space translation.
    pub fn translate_local(&mut self, local: Vec3) -> Vec3 {
        let world = self.orientation * local;
        self.position += world;
        world
    }

    /// Re-aim the camera at `target`, keeping world +Y as up where possible.
    ///
    /// When the view direction is parallel to world up, the current up and
    /// then the current back vector are tried as the reference instead, so
    /// the orientation never degenerates to NaN. If the target coincides with
    /// the eye the orientation is left alone.
    pub fn look_at(&mut self, target: Vec3) {
        let dir = target - self.position;
        let rotation = look_rotation(dir, Vec3::Y)
            .or_else(|| look_rotation(dir, self.up()))
            .or_else(|| look_rotation(dir, self.back()));
        if let Some(rotation) = rotation {
            self.orientation = rotation;
        }
    }

    /// World-to-view matrix for this pose.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), self.up())
    }

    /// Whether position and orientation are free of NaN/Inf.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.orientation.is_finite()
    }
}

/// Rotation whose -Z axis points along `forward` with `up` as the reference
/// up direction. `None` when `forward` is zero or parallel to `up`.
fn look_rotation(forward: Vec3, up: Vec3) -> Option<Quat> {
    let f = forward.try_normalize()?;
    let r = f.cross(up).try_normalize()?;
    let u = r.cross(f);
    Some(Quat::from_mat3(&Mat3::from_cols(r, u, -f)).normalize())
}
