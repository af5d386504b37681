//! Forces acting over a bounded duration.

use crate::{fph, quantities::Force};

/// A force that keeps acting on a body for a limited duration, such as the
/// push from an explosion. Impulses are immutable: a mover consumes an
/// impulse step by step by replacing it with a copy that has less duration
/// left.
#[derive(Clone, Debug, PartialEq)]
pub struct Impulse {
    force: Force,
    remaining_duration: fph,
}

impl Impulse {
    /// Creates a new impulse applying the given force for the given duration.
    ///
    /// # Panics
    /// If the duration does not exceed zero.
    pub fn new(force: Force, duration: fph) -> Self {
        assert!(
            duration > 0.0,
            "Tried creating impulse with duration not exceeding zero"
        );
        Self {
            force,
            remaining_duration: duration,
        }
    }

    /// Returns the force applied while the impulse lasts.
    pub fn force(&self) -> &Force {
        &self.force
    }

    /// Returns how much longer the impulse acts.
    pub fn remaining_duration(&self) -> fph {
        self.remaining_duration
    }

    /// Computes the average force the impulse applies during a step of the
    /// given duration. If the impulse runs out before the step ends, the
    /// force is scaled down accordingly, so that integrating the returned
    /// force over the step yields exactly the momentum the impulse had left.
    ///
    /// # Panics
    /// If the step duration does not exceed zero.
    pub fn force_over_interval(&self, step_duration: fph) -> Force {
        assert!(
            step_duration > 0.0,
            "Tried applying impulse over step duration not exceeding zero"
        );
        if self.remaining_duration >= step_duration {
            self.force
        } else {
            self.force * (self.remaining_duration / step_duration)
        }
    }

    /// Returns the impulse left after the given duration has passed, or
    /// [`None`] if the impulse has been used up.
    pub fn with_reduced_duration(&self, elapsed_duration: fph) -> Option<Self> {
        let remaining_duration = self.remaining_duration - elapsed_duration;
        (remaining_duration > 0.0).then(|| Self {
            force: self.force,
            remaining_duration,
        })
    }
}
