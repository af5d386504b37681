//! Physical quantities.

use crate::fph;
use nalgebra::Vector3;
use rigid_motion_math::{Angle, Degrees, Transform};

/// A position in space. Positions relative to a body are expressed in the
/// body's local frame.
pub type Position = Vector3<fph>;

/// A velocity in space.
pub type Velocity = Vector3<fph>;

/// An acceleration in space.
pub type Acceleration = Vector3<fph>;

/// A force.
pub type Force = Vector3<fph>;

/// A momentum.
pub type Momentum = Vector3<fph>;

/// A change in momentum delivered instantaneously, such as the result of a
/// collision.
pub type MomentumChange = Vector3<fph>;

/// A direction. Not required to be normalized.
pub type Direction = Vector3<fph>;

/// The pose (position and orientation) of a body.
pub type Pose = Transform<fph>;

/// An in-plane angular velocity, in degrees per unit time.
pub type AngularVelocity = Degrees<fph>;

/// An in-plane angular acceleration, in degrees per unit time squared.
pub type AngularAcceleration = Degrees<fph>;

/// Computes the translational kinetic energy of a body with the given
/// properties.
#[inline]
pub fn compute_translational_kinetic_energy(mass: fph, velocity: &Velocity) -> fph {
    0.5 * mass * velocity.norm_squared()
}

/// Computes the rotational kinetic energy of a body with the given moment of
/// inertia and angular velocity.
#[inline]
pub fn compute_rotational_kinetic_energy(
    moment_of_inertia: fph,
    angular_velocity: AngularVelocity,
) -> fph {
    0.5 * moment_of_inertia * angular_velocity.radians().powi(2)
}

/// Computes the angular momentum of a body with the given moment of inertia
/// and angular velocity. The result uses radians.
#[inline]
pub fn compute_angular_momentum(moment_of_inertia: fph, angular_velocity: AngularVelocity) -> fph {
    moment_of_inertia * angular_velocity.radians()
}
