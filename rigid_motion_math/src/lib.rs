//! Mathematical primitives for rigid body motion.

pub mod angle;
pub mod num;
pub mod transform;
pub mod vector;

pub use angle::{Angle, Degrees, Radians};
pub use num::Float;
pub use transform::Transform;
