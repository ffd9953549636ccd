//! Rigid-body poses and wrench (force + torque) math.
//!
//! All vectors are f64 ([`glam::DVec3`]); orientations are unit quaternions
//! ([`glam::DQuat`]). The wrench transform pipeline is order-sensitive and
//! is implemented exactly as the scheduler's contract requires: shift to the
//! reference point first (in the reference frame), rotate into the target
//! frame, then add the rotated force's moment about the target-to-reference
//! offset.

use glam::{DQuat, DVec3};

/// Position and orientation of a frame in world coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// Frame origin in world coordinates.
    pub position: DVec3,
    /// Frame orientation as a unit quaternion.
    pub orientation: DQuat,
}

impl Pose {
    /// The identity pose: origin, no rotation.
    pub const IDENTITY: Pose = Pose {
        position: DVec3::ZERO,
        orientation: DQuat::IDENTITY,
    };

    /// Construct a pose from a position and orientation.
    pub fn new(position: DVec3, orientation: DQuat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// This pose expressed relative to `base`.
    ///
    /// Both poses must be in the same (world) coordinates. The result is
    /// the transform that takes vectors in `self`'s frame into `base`'s
    /// frame: the pose difference `self - base`.
    ///
    /// # Examples
    ///
    /// ```
    /// use glam::{DQuat, DVec3};
    /// use tether_core::Pose;
    ///
    /// let a = Pose::new(DVec3::new(1.0, 0.0, 0.0), DQuat::IDENTITY);
    /// let b = Pose::IDENTITY;
    /// let rel = a.relative_to(&b);
    /// assert_eq!(rel.position, DVec3::new(1.0, 0.0, 0.0));
    /// ```
    pub fn relative_to(&self, base: &Pose) -> Pose {
        let inv = base.orientation.inverse();
        Pose {
            position: inv * (self.position - base.position),
            orientation: inv * self.orientation,
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A force and torque pair acting on a rigid body.
///
/// Both vectors are expressed in the same frame; which frame that is
/// depends on where in the transform pipeline the value sits.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Wrench {
    /// Linear force component.
    pub force: DVec3,
    /// Rotational torque component.
    pub torque: DVec3,
}

impl Wrench {
    /// Construct a wrench from force and torque vectors.
    pub fn new(force: DVec3, torque: DVec3) -> Self {
        Self { force, torque }
    }

    /// Shift the wrench so it acts at an offset from the frame origin.
    ///
    /// Adds the moment arm `offset × force` to the torque; the force is
    /// unchanged. Applied in the *reference* frame, before any rotation
    /// into the target frame.
    pub fn shifted_by(self, offset: DVec3) -> Wrench {
        Wrench {
            force: self.force,
            torque: self.torque + offset.cross(self.force),
        }
    }

    /// Transform the wrench from a reference frame into a target frame.
    ///
    /// `target_to_reference` is the reference frame's pose expressed in the
    /// target frame (see [`Pose::relative_to`]). Rotates both components,
    /// then adds the moment the rotated force exerts about the
    /// target-to-reference offset.
    ///
    /// # Examples
    ///
    /// A pure translation leaves the force alone but induces torque:
    ///
    /// ```
    /// use glam::{DQuat, DVec3};
    /// use tether_core::{Pose, Wrench};
    ///
    /// let w = Wrench::new(DVec3::new(0.0, 1.0, 0.0), DVec3::ZERO);
    /// let t2r = Pose::new(DVec3::new(1.0, 0.0, 0.0), DQuat::IDENTITY);
    /// let out = w.transformed(&t2r);
    /// assert_eq!(out.force, DVec3::new(0.0, 1.0, 0.0));
    /// assert_eq!(out.torque, DVec3::new(0.0, 0.0, 1.0));
    /// ```
    pub fn transformed(self, target_to_reference: &Pose) -> Wrench {
        let force = target_to_reference.orientation * self.force;
        let torque = target_to_reference.orientation * self.torque;
        Wrench {
            force,
            torque: torque + target_to_reference.position.cross(force),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn yaw_90() -> DQuat {
        DQuat::from_rotation_z(FRAC_PI_2)
    }

    fn assert_vec_close(a: DVec3, b: DVec3) {
        assert!((a - b).length() < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn identity_transform_is_noop() {
        let w = Wrench::new(DVec3::new(1.0, 2.0, 3.0), DVec3::new(-1.0, 0.5, 0.0));
        let out = w.transformed(&Pose::IDENTITY);
        assert_eq!(out, w);
    }

    #[test]
    fn shift_adds_moment_arm() {
        let w = Wrench::new(DVec3::new(0.0, 0.0, 2.0), DVec3::ZERO);
        let out = w.shifted_by(DVec3::new(1.0, 0.0, 0.0));
        assert_eq!(out.force, w.force);
        // x-hat × 2z-hat = -2 y-hat
        assert_vec_close(out.torque, DVec3::new(0.0, -2.0, 0.0));
    }

    #[test]
    fn shift_at_origin_is_noop() {
        let w = Wrench::new(DVec3::new(3.0, 1.0, 0.0), DVec3::new(0.0, 0.0, 4.0));
        assert_eq!(w.shifted_by(DVec3::ZERO), w);
    }

    #[test]
    fn rotation_rotates_both_components() {
        let w = Wrench::new(DVec3::new(1.0, 0.0, 0.0), DVec3::new(0.0, 1.0, 0.0));
        let t2r = Pose::new(DVec3::ZERO, yaw_90());
        let out = w.transformed(&t2r);
        assert_vec_close(out.force, DVec3::new(0.0, 1.0, 0.0));
        assert_vec_close(out.torque, DVec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn translation_moment_uses_rotated_force() {
        // Rotation is applied to the force before the cross product with
        // the offset, so the induced torque uses the rotated direction.
        let w = Wrench::new(DVec3::new(1.0, 0.0, 0.0), DVec3::ZERO);
        let t2r = Pose::new(DVec3::new(0.0, 0.0, 1.0), yaw_90());
        let out = w.transformed(&t2r);
        // Force rotates to +y; z-hat × y-hat = -x-hat.
        assert_vec_close(out.force, DVec3::new(0.0, 1.0, 0.0));
        assert_vec_close(out.torque, DVec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn relative_to_identity_base_is_self() {
        let p = Pose::new(DVec3::new(2.0, -1.0, 3.0), yaw_90());
        let rel = p.relative_to(&Pose::IDENTITY);
        assert_vec_close(rel.position, p.position);
    }

    #[test]
    fn relative_to_self_is_identity() {
        let p = Pose::new(DVec3::new(2.0, -1.0, 3.0), yaw_90());
        let rel = p.relative_to(&p);
        assert_vec_close(rel.position, DVec3::ZERO);
        assert!((rel.orientation.dot(DQuat::IDENTITY).abs() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn relative_to_accounts_for_base_rotation() {
        // Base yawed +90° about z has its local x-axis along world +y,
        // so a world +x offset lands on the base's local -y axis.
        let p = Pose::new(DVec3::new(1.0, 0.0, 0.0), DQuat::IDENTITY);
        let base = Pose::new(DVec3::ZERO, yaw_90());
        let rel = p.relative_to(&base);
        assert_vec_close(rel.position, DVec3::new(0.0, -1.0, 0.0));
    }
}
