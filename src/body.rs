//! Capabilities of simulated bodies and a concrete rigid body.

use crate::{
    MotionConfig, fph,
    inertia::InertialProperties,
    quantities::{Force, Pose, Position},
    rotation::RotationalMover,
    translation::TranslationalMover,
};

/// A body with a mass.
pub trait Massive {
    /// Returns the mass of the body. Always strictly positive.
    fn mass(&self) -> fph;
}

/// A body with a pose that can be read and replaced.
pub trait Posable {
    fn pose(&self) -> &Pose;

    fn set_pose(&mut self, pose: Pose);
}

/// A body with a moment of inertia about its center of mass.
pub trait Inertial {
    /// Returns the moment of inertia about the center of mass. Always
    /// strictly positive.
    fn default_moment_of_inertia(&self) -> fph;
}

/// A body whose translation is driven by a [`TranslationalMover`].
pub trait Movable: Massive + Posable {
    fn translational_mover(&self) -> &TranslationalMover;

    fn translational_mover_mut(&mut self) -> &mut TranslationalMover;
}

/// A movable body whose rotation is driven by a [`RotationalMover`].
pub trait Rotatable: Movable + Inertial {
    fn rotational_mover(&self) -> &RotationalMover;

    fn rotational_mover_mut(&mut self) -> &mut RotationalMover;

    /// Applies the given world space force at the given world space point.
    /// The full force accelerates the center of mass, and the moment it
    /// exerts about the rotation origin accelerates the rotation.
    fn apply_force_at_point(&mut self, force: &Force, world_point: &Position) {
        let pose = *self.pose();
        let relative_force = pose.inverse_transform_vector(force);
        let relative_point = pose.inverse_transform_point(world_point);

        self.translational_mover_mut().apply_force(force);
        self.rotational_mover_mut()
            .apply_moment(&relative_force, &relative_point);
    }
}

/// A plain pose carries no mass, but movers can write to it directly. This
/// lets a body hand its movers the pose field while they are borrowed
/// mutably from the same body.
impl Posable for Pose {
    fn pose(&self) -> &Pose {
        self
    }

    fn set_pose(&mut self, pose: Pose) {
        *self = pose;
    }
}

impl Massive for InertialProperties {
    fn mass(&self) -> fph {
        InertialProperties::mass(self)
    }
}

impl Inertial for InertialProperties {
    fn default_moment_of_inertia(&self) -> fph {
        self.moment_of_inertia()
    }
}

/// A rigid body that owns its inertial properties, its pose and the movers
/// driving its translation and rotation.
#[derive(Clone, Debug)]
pub struct RigidBody {
    properties: InertialProperties,
    pose: Pose,
    translational_mover: TranslationalMover,
    rotational_mover: RotationalMover,
}

impl RigidBody {
    /// Creates a new body at rest with the given inertial properties and
    /// pose, using the default motion configuration.
    pub fn new(properties: InertialProperties, pose: Pose) -> Self {
        Self::with_config(properties, pose, MotionConfig::default())
    }

    /// Creates a new body at rest with the given inertial properties and
    /// pose, using the given motion configuration for both movers.
    pub fn with_config(properties: InertialProperties, pose: Pose, config: MotionConfig) -> Self {
        Self {
            translational_mover: TranslationalMover::with_config(&properties, config),
            rotational_mover: RotationalMover::with_config(&properties, config),
            properties,
            pose,
        }
    }

    /// Returns the inertial properties of the body.
    pub fn properties(&self) -> &InertialProperties {
        &self.properties
    }

    /// Applies the given force at the center of mass.
    pub fn apply_force(&mut self, force: &Force) {
        self.translational_mover.apply_force(force);
    }

    /// Advances the translation and then the rotation of the body by one step
    /// of the given duration.
    ///
    /// # Panics
    /// If the step duration does not exceed zero.
    pub fn integrate(&mut self, step_duration: fph) {
        self.translational_mover.integrate(&mut self.pose, step_duration);
        self.rotational_mover.integrate(&mut self.pose, step_duration);
    }

    /// Computes the sum of the translational and rotational kinetic energy
    /// of the body.
    pub fn total_kinetic_energy(&self) -> fph {
        self.translational_mover.translational_kinetic_energy()
            + self.rotational_mover.rotational_kinetic_energy()
    }
}

impl Massive for RigidBody {
    fn mass(&self) -> fph {
        self.properties.mass()
    }
}

impl Posable for RigidBody {
    fn pose(&self) -> &Pose {
        &self.pose
    }

    fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }
}

impl Inertial for RigidBody {
    fn default_moment_of_inertia(&self) -> fph {
        self.properties.moment_of_inertia()
    }
}

impl Movable for RigidBody {
    fn translational_mover(&self) -> &TranslationalMover {
        &self.translational_mover
    }

    fn translational_mover_mut(&mut self) -> &mut TranslationalMover {
        &mut self.translational_mover
    }
}

impl Rotatable for RigidBody {
    fn rotational_mover(&self) -> &RotationalMover {
        &self.rotational_mover
    }

    fn rotational_mover_mut(&mut self) -> &mut RotationalMover {
        &mut self.rotational_mover
    }
}
