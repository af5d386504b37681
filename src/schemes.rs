//! Schemes for evolving the rotation of bodies over time.

use crate::fph;
use rigid_motion_math::Degrees;
use std::fmt;

/// Denotes a specific scheme for advancing an in-plane rotation by one step.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SteppingScheme {
    /// The angular velocity is advanced with the accumulated angular
    /// acceleration first, and the new angular velocity then advances the
    /// angle. Translation always uses this scheme.
    #[default]
    SymplecticEuler,
    /// The angle is advanced with the current angular velocity plus half of
    /// the previous step's angular acceleration, and the angular velocity is
    /// advanced with the average of the previous and current angular
    /// accelerations.
    Trapezoidal,
}

/// The outcome of advancing a rotation by one step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AdvancedRotation {
    /// The change in angle during the step.
    pub angle_increment: Degrees<fph>,
    /// The angular velocity at the end of the step.
    pub angular_velocity: Degrees<fph>,
}

impl SteppingScheme {
    /// Advances a rotation with the given angular velocity by a step of the
    /// given duration. `angular_acceleration` has been accumulated during
    /// this step, while `last_angular_acceleration` is the one that was
    /// integrated in the previous step.
    pub fn advance(
        self,
        angular_velocity: Degrees<fph>,
        angular_acceleration: Degrees<fph>,
        last_angular_acceleration: Degrees<fph>,
        step_duration: fph,
    ) -> AdvancedRotation {
        match self {
            Self::SymplecticEuler => {
                let advanced_angular_velocity =
                    angular_velocity + angular_acceleration * step_duration;
                AdvancedRotation {
                    angle_increment: advanced_angular_velocity * step_duration,
                    angular_velocity: advanced_angular_velocity,
                }
            }
            Self::Trapezoidal => {
                let angle_increment = angular_velocity * step_duration
                    + last_angular_acceleration * (0.5 * step_duration.powi(2));
                let average_angular_acceleration =
                    (last_angular_acceleration + angular_acceleration) * 0.5;
                AdvancedRotation {
                    angle_increment,
                    angular_velocity: angular_velocity
                        + average_angular_acceleration * step_duration,
                }
            }
        }
    }
}

impl fmt::Display for SteppingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::SymplecticEuler => "symplectic Euler",
                Self::Trapezoidal => "trapezoidal",
            }
        )
    }
}
