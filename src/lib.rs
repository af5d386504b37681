//! Integration of translational and rotational rigid body motion and
//! impulse-based resolution of two-body collisions.
//!
//! Each simulated body owns a [`TranslationalMover`](translation::TranslationalMover)
//! and, if it can rotate, a [`RotationalMover`](rotation::RotationalMover).
//! A host loop drives the movers with a plain ordered call sequence: any
//! number of accumulation calls (forces, moments, impulses, friction and
//! collision response) followed by exactly one `integrate` call per mover
//! per step.

pub mod body;
pub mod collision;
pub mod impulse;
pub mod inertia;
#[cfg(feature = "ron")]
pub mod io;
pub mod quantities;
pub mod rotation;
pub mod schemes;
pub mod translation;

pub use rigid_motion_math as math;

use anyhow::{Result, bail};
use schemes::SteppingScheme;

/// Floating point type used for motion simulation.
#[allow(non_camel_case_types)]
pub type fph = f64;

/// Configuration parameters for the movers.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    /// The scheme used for advancing the orientation and angular velocity of
    /// rotating bodies.
    pub rotation_scheme: SteppingScheme,
    /// Directions shorter than this are considered undefined, which makes
    /// directional operations skip.
    pub min_direction_length: fph,
    /// Post-collision directional momenta with a smaller magnitude than this
    /// are driven to zero instead of being requested as a tiny force.
    pub min_directional_momentum: fph,
    /// Relative sliding speeds below this are treated as no sliding, so that
    /// no friction is applied.
    pub min_relative_speed: fph,
}

impl MotionConfig {
    /// Checks that the configuration parameters are usable.
    ///
    /// # Errors
    /// Returns an error if any of the thresholds is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("minimum direction length", self.min_direction_length),
            ("minimum directional momentum", self.min_directional_momentum),
            ("minimum relative speed", self.min_relative_speed),
        ] {
            if !value.is_finite() || value < 0.0 {
                bail!("Invalid {} for motion simulation: {}", name, value);
            }
        }
        Ok(())
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            rotation_scheme: SteppingScheme::SymplecticEuler,
            min_direction_length: 1e-4,
            min_directional_momentum: 1e-3,
            min_relative_speed: 1e-9,
        }
    }
}
