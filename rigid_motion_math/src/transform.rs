//! Poses combining a translation and an in-plane rotation.

use crate::{
    angle::{Angle, Degrees},
    num::Float,
    vector,
};
use approx::AbsDiffEq;
use nalgebra::Vector3;

/// A pose consisting of a position and an orientation angle about the
/// z-axis.
///
/// A transform maps points from the local frame of a body (where the body's
/// origin sits at zero) to the world frame by first rotating them by
/// [`Self::angle`] and then translating them by [`Self::position`].
///
/// Transforms are immutable values: every modification produces a new
/// transform.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform<F: Float> {
    position: Vector3<F>,
    angle: Degrees<F>,
}

impl<F: Float> Transform<F> {
    /// Creates a new transform with the given position and angle.
    #[inline]
    pub fn new(position: Vector3<F>, angle: Degrees<F>) -> Self {
        Self { position, angle }
    }

    /// Creates the identity transform.
    #[inline]
    pub fn identity() -> Self {
        Self::new(Vector3::zeros(), Degrees::zero())
    }

    /// Creates a transform that only translates by the given displacement.
    #[inline]
    pub fn translation(displacement: Vector3<F>) -> Self {
        Self::new(displacement, Degrees::zero())
    }

    /// Creates a transform that only rotates by the given angle.
    #[inline]
    pub fn rotation<A: Angle<F>>(angle: A) -> Self {
        Self::new(Vector3::zeros(), angle.as_degrees())
    }

    /// Returns the position.
    #[inline]
    pub fn position(&self) -> &Vector3<F> {
        &self.position
    }

    /// Returns the orientation angle.
    #[inline]
    pub fn angle(&self) -> Degrees<F> {
        self.angle
    }

    /// Returns a copy of this transform with the position replaced.
    #[inline]
    pub fn with_position(&self, position: Vector3<F>) -> Self {
        Self::new(position, self.angle)
    }

    /// Returns a copy of this transform with the angle replaced.
    #[inline]
    pub fn with_angle<A: Angle<F>>(&self, angle: A) -> Self {
        Self::new(self.position, angle.as_degrees())
    }

    /// Combines this transform with the given one by adding their positions
    /// and angles. This is how incremental changes in pose are accumulated.
    #[inline]
    pub fn plus(&self, other: &Self) -> Self {
        Self::new(self.position + other.position, self.angle + other.angle)
    }

    /// Computes the transform that undoes this one, so that
    /// `t.inverse().transform_point(&t.transform_point(p)) == p`.
    #[inline]
    pub fn inverse(&self) -> Self {
        let inverse_angle = -self.angle;
        Self::new(
            -vector::rotated_in_plane(&self.position, inverse_angle),
            inverse_angle,
        )
    }

    /// Transforms the given point from the local frame to the world frame.
    #[inline]
    pub fn transform_point(&self, local_point: &Vector3<F>) -> Vector3<F> {
        self.position + vector::rotated_in_plane(local_point, self.angle)
    }

    /// Transforms the given point from the world frame to the local frame.
    #[inline]
    pub fn inverse_transform_point(&self, world_point: &Vector3<F>) -> Vector3<F> {
        vector::rotated_in_plane(&(world_point - self.position), -self.angle)
    }

    /// Transforms the given direction from the local frame to the world
    /// frame. Unlike points, directions are unaffected by the translation.
    #[inline]
    pub fn transform_vector(&self, local_vector: &Vector3<F>) -> Vector3<F> {
        vector::rotated_in_plane(local_vector, self.angle)
    }

    /// Transforms the given direction from the world frame to the local
    /// frame.
    #[inline]
    pub fn inverse_transform_vector(&self, world_vector: &Vector3<F>) -> Vector3<F> {
        vector::rotated_in_plane(world_vector, -self.angle)
    }

    /// Rotates the transform by the given angle about the point with the given
    /// position in the local frame. The point itself stays fixed in the world
    /// frame.
    #[inline]
    pub fn rotated_about_relative_point<A: Angle<F>>(
        &self,
        angle: A,
        relative_origin: &Vector3<F>,
    ) -> Self {
        let world_origin = self.transform_point(relative_origin);
        Self::new(
            vector::rotated_about(&self.position, angle, &world_origin),
            self.angle + angle.as_degrees(),
        )
    }
}

impl<F: Float> Default for Transform<F> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<F: Float> AbsDiffEq for Transform<F> {
    type Epsilon = F;

    fn default_epsilon() -> Self::Epsilon {
        F::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        Vector3::abs_diff_eq(&self.position, &other.position, epsilon)
            && Degrees::abs_diff_eq(&self.angle, &other.angle, epsilon)
    }
}
