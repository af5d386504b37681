//! Planar vector algebra.
//!
//! Vectors are three-dimensional so that bodies can translate freely in
//! space, but all rotation happens about the z-axis. The functions here
//! treat the xy-plane as the rotation plane and leave the z component
//! untouched where rotation is involved.

use crate::{
    angle::{Angle, Radians},
    num::Float,
};
use nalgebra::{Vector3, vector};

/// Computes the z component of the cross product of the two vectors, which
/// is the signed in-plane cross product of their xy parts.
#[inline]
pub fn perp_cross<F: Float>(a: &Vector3<F>, b: &Vector3<F>) -> F {
    a.x * b.y - a.y * b.x
}

/// Returns the given vector rotated 90 degrees counter-clockwise within the
/// xy-plane. Multiplying the result by an angular speed in radians gives the
/// velocity of a point at the given displacement from the rotation axis.
#[inline]
pub fn perpendicular<F: Float>(v: &Vector3<F>) -> Vector3<F> {
    vector![-v.y, v.x, F::ZERO]
}

/// Returns the given vector rotated by the given angle about the z-axis.
#[inline]
pub fn rotated_in_plane<F: Float, A: Angle<F>>(v: &Vector3<F>, angle: A) -> Vector3<F> {
    let (sin_angle, cos_angle) = angle.radians().sin_cos();
    vector![
        v.x * cos_angle - v.y * sin_angle,
        v.x * sin_angle + v.y * cos_angle,
        v.z
    ]
}

/// Returns the given point rotated by the given angle about an axis parallel
/// to the z-axis passing through `origin`.
#[inline]
pub fn rotated_about<F: Float, A: Angle<F>>(
    point: &Vector3<F>,
    angle: A,
    origin: &Vector3<F>,
) -> Vector3<F> {
    origin + rotated_in_plane(&(point - origin), angle)
}

/// Computes the projection of `v` onto the direction of `onto`. The result
/// is zero if `onto` has zero length.
#[inline]
pub fn vector_projection<F: Float>(v: &Vector3<F>, onto: &Vector3<F>) -> Vector3<F> {
    let onto_norm_squared = onto.norm_squared();
    if onto_norm_squared == F::ZERO {
        return Vector3::zeros();
    }
    onto * (v.dot(onto) / onto_norm_squared)
}

/// Returns the normalized vector if the norm of the vector exceeds
/// `min_length`, otherwise [`None`].
#[inline]
pub fn normalized_if_above<F: Float>(v: &Vector3<F>, min_length: F) -> Option<Vector3<F>> {
    v.try_normalize(min_length)
}

/// Returns the vector scaled to the given length, or [`None`] if the vector
/// has zero length and hence no direction.
#[inline]
pub fn with_length<F: Float>(v: &Vector3<F>, length: F) -> Option<Vector3<F>> {
    v.try_normalize(F::ZERO).map(|direction| direction * length)
}

/// Computes the distance between the two points.
#[inline]
pub fn distance<F: Float>(a: &Vector3<F>, b: &Vector3<F>) -> F {
    (a - b).norm()
}

/// Converts an in-plane angular speed to the linear velocity of a point at
/// the given displacement from the rotation axis.
#[inline]
pub fn point_velocity_from_rotation<F: Float>(
    displacement: &Vector3<F>,
    angular_speed: Radians<F>,
) -> Vector3<F> {
    perpendicular(displacement) * angular_speed.radians()
}
