//! Representations of angles.

use crate::num::Float;
use approx::AbsDiffEq;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Represents an angle.
pub trait Angle<F>: Copy {
    /// Creates a zero angle.
    fn zero() -> Self;

    /// Returns the angle as degrees.
    fn as_degrees(self) -> Degrees<F>;

    /// Returns the angle as radians.
    fn as_radians(self) -> Radians<F>;

    /// Returns the value of the angle in degrees.
    fn degrees(self) -> F;

    /// Returns the value of the angle in radians.
    fn radians(self) -> F;
}

/// An angle in degrees.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Degrees<F>(pub F);

/// An angle in radians.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Radians<F>(pub F);

impl<F> Degrees<F> {
    fn value(self) -> F {
        self.0
    }
}

impl<F> Radians<F> {
    fn value(self) -> F {
        self.0
    }
}

impl<F: Float> Degrees<F> {
    /// Returns the absolute value of the angle.
    pub fn abs(self) -> Self {
        Self(self.value().abs())
    }
}

impl<F: Float> Radians<F> {
    /// Returns the absolute value of the angle.
    pub fn abs(self) -> Self {
        Self(self.value().abs())
    }
}

impl<F: Float> Angle<F> for Degrees<F> {
    fn zero() -> Self {
        Self(F::ZERO)
    }

    fn as_degrees(self) -> Degrees<F> {
        self
    }

    fn as_radians(self) -> Radians<F> {
        Radians::from(self)
    }

    fn degrees(self) -> F {
        self.value()
    }

    fn radians(self) -> F {
        Radians::from(self).value()
    }
}

impl<F: Float> Angle<F> for Radians<F> {
    fn zero() -> Self {
        Self(F::ZERO)
    }

    fn as_degrees(self) -> Degrees<F> {
        Degrees::from(self)
    }

    fn as_radians(self) -> Radians<F> {
        self
    }

    fn degrees(self) -> F {
        Degrees::from(self).value()
    }

    fn radians(self) -> F {
        self.value()
    }
}

impl<F: Float> From<Radians<F>> for Degrees<F> {
    fn from(rad: Radians<F>) -> Self {
        Self(rad.value() * F::from_f64_value(180.0) * F::FRAC_1_PI())
    }
}

impl<F: Float> From<Degrees<F>> for Radians<F> {
    fn from(deg: Degrees<F>) -> Self {
        Self(deg.value() * F::PI() / F::from_f64_value(180.0))
    }
}

impl<F: Add<Output = F>> Add for Degrees<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.value() + rhs.value())
    }
}

impl<F: Add<Output = F>> Add for Radians<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.value() + rhs.value())
    }
}

impl<F: Copy + Add<Output = F>> AddAssign for Degrees<F> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<F: Copy + Add<Output = F>> AddAssign for Radians<F> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<F: Sub<Output = F>> Sub for Degrees<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.value() - rhs.value())
    }
}

impl<F: Sub<Output = F>> Sub for Radians<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.value() - rhs.value())
    }
}

impl<F: Copy + Sub<Output = F>> SubAssign for Degrees<F> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<F: Copy + Sub<Output = F>> SubAssign for Radians<F> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<F: Mul<Output = F>> Mul<F> for Degrees<F> {
    type Output = Self;
    fn mul(self, rhs: F) -> Self {
        Self(self.value() * rhs)
    }
}

impl<F: Mul<Output = F>> Mul<F> for Radians<F> {
    type Output = Self;
    fn mul(self, rhs: F) -> Self {
        Self(self.value() * rhs)
    }
}

impl<F: Div<Output = F>> Div<F> for Degrees<F> {
    type Output = Self;
    fn div(self, rhs: F) -> Self {
        Self(self.value() / rhs)
    }
}

impl<F: Div<Output = F>> Div<F> for Radians<F> {
    type Output = Self;
    fn div(self, rhs: F) -> Self {
        Self(self.value() / rhs)
    }
}

impl<F: Neg<Output = F>> Neg for Degrees<F> {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.value())
    }
}

impl<F: Neg<Output = F>> Neg for Radians<F> {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.value())
    }
}

impl<T: Copy + AbsDiffEq> AbsDiffEq for Degrees<T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        T::abs_diff_eq(&self.value(), &other.value(), epsilon)
    }
}

impl<T: Copy + AbsDiffEq> AbsDiffEq for Radians<T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        T::abs_diff_eq(&self.value(), &other.value(), epsilon)
    }
}
