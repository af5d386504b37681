//! Numbers and numerics.

use nalgebra as na;
use num_traits as nt;

/// Gathers traits useful for working with generic floating point types.
pub trait Float: Copy + nt::FloatConst + na::RealField + na::Scalar {
    const ZERO: Self;
    const ONE: Self;
    const NEG_ONE: Self;
    const ONE_HALF: Self;
    const TWO: Self;

    /// Converts the given `f64` into this type.
    fn from_f64_value(value: f64) -> Self {
        na::convert(value)
    }
}

macro_rules! impl_float {
    ($f:ty) => {
        impl Float for $f {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const NEG_ONE: Self = -1.0;
            const ONE_HALF: Self = 0.5;
            const TWO: Self = 2.0;
        }
    };
}

impl_float!(f32);
impl_float!(f64);
