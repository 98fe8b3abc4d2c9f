use glam::Vec3;

use super::core::CameraPose;

/// The pivot the camera orbits around and looks at.
///
/// Implemented by whatever owns the pivot in the host scene. The rig reads
/// [`position`](Self::position) at the start of every update and moves the
/// pivot with [`translate`](Self::translate) when panning.
pub trait FocusProvider {
    /// Current world-space position of the pivot.
    fn position(&self) -> Vec3;

    /// Move the pivot by a world-space vector.
    fn translate(&mut self, delta: Vec3);
}

impl<T: FocusProvider + ?Sized> FocusProvider for Box<T> {
    fn position(&self) -> Vec3 {
        (**self).position()
    }

    fn translate(&mut self, delta: Vec3) {
        (**self).translate(delta);
    }
}

/// A free-standing pivot point owned by the rig.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FocusPoint {
    position: Vec3,
}

impl FocusPoint {
    /// Pivot at a fixed world position.
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }

    /// Pivot placed `distance` units in front of the given camera pose.
    #[must_use]
    pub fn in_front_of(pose: &CameraPose, distance: f32) -> Self {
        Self::new(pose.position + pose.forward() * distance)
    }
}

impl FocusProvider for FocusPoint {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }
}

impl From<Vec3> for FocusPoint {
    fn from(position: Vec3) -> Self {
        Self::new(position)
    }
}

#[cfg(test)]
mod tests {
    use glam::Quat;

    use super::*;

    #[test]
    fn in_front_of_follows_forward() {
        let pose = CameraPose::new(Vec3::new(0.0, 1.0, 0.0), Quat::IDENTITY);
        let focus = FocusPoint::in_front_of(&pose, 10.0);
        assert_eq!(focus.position(), Vec3::new(0.0, 1.0, -10.0));
    }

    #[test]
    fn boxed_provider_forwards() {
        let mut focus: Box<dyn FocusProvider> =
            Box::new(FocusPoint::new(Vec3::ONE));
        focus.translate(Vec3::X);
        assert_eq!(focus.position(), Vec3::new(2.0, 1.0, 1.0));
    }
}
