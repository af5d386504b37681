//! Rotational motion of bodies about the z-axis.

use crate::{
    MotionConfig, fph,
    body::{Inertial, Massive, Posable, Rotatable},
    inertia::compute_parallel_axis_moment_of_inertia,
    quantities::{
        self, AngularAcceleration, AngularVelocity, Direction, Force, MomentumChange, Pose,
        Position, Velocity,
    },
};
use rigid_motion_math::{
    Angle, Degrees, Radians,
    vector::{perp_cross, point_velocity_from_rotation},
};

/// Evolves the orientation and angular velocity of a body over time in
/// response to moments.
///
/// The body rotates about its rotation origin, which is given relative to
/// the body and defaults to the center of mass. The moment of inertia the
/// mover works with is always the one about the rotation origin.
#[derive(Clone, Debug)]
pub struct RotationalMover {
    config: MotionConfig,
    mass: fph,
    default_moment_of_inertia: fph,
    moment_of_inertia: fph,
    rotation_origin: Position,
    rotation_origin_is_default: bool,
    angular_velocity: AngularVelocity,
    angular_acceleration: AngularAcceleration,
    last_angular_acceleration: AngularAcceleration,
}

impl RotationalMover {
    /// Creates a mover for a non-rotating body with the mass and moment of
    /// inertia of the given body, rotating about its center of mass.
    ///
    /// # Panics
    /// If the mass or moment of inertia does not exceed zero.
    pub fn new(body: &(impl Massive + Inertial)) -> Self {
        Self::with_config(body, MotionConfig::default())
    }

    /// Like [`Self::new`], but using the given configuration.
    ///
    /// # Panics
    /// If the mass or moment of inertia does not exceed zero.
    pub fn with_config(body: &(impl Massive + Inertial), config: MotionConfig) -> Self {
        let mass = body.mass();
        let default_moment_of_inertia = body.default_moment_of_inertia();
        assert!(
            mass > 0.0,
            "Tried creating rotational mover for body with mass not exceeding zero"
        );
        assert!(
            default_moment_of_inertia > 0.0,
            "Tried creating rotational mover for body with moment of inertia not exceeding zero"
        );
        Self {
            config,
            mass,
            default_moment_of_inertia,
            moment_of_inertia: default_moment_of_inertia,
            rotation_origin: Position::zeros(),
            rotation_origin_is_default: true,
            angular_velocity: AngularVelocity::zero(),
            angular_acceleration: AngularAcceleration::zero(),
            last_angular_acceleration: AngularAcceleration::zero(),
        }
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Returns the moment of inertia about the current rotation origin.
    pub fn moment_of_inertia(&self) -> fph {
        self.moment_of_inertia
    }

    /// Returns the moment of inertia about the center of mass.
    pub fn default_moment_of_inertia(&self) -> fph {
        self.default_moment_of_inertia
    }

    /// Returns the point the body rotates about, relative to the body.
    pub fn rotation_origin(&self) -> &Position {
        &self.rotation_origin
    }

    pub fn rotation_origin_is_default(&self) -> bool {
        self.rotation_origin_is_default
    }

    pub fn angular_velocity(&self) -> AngularVelocity {
        self.angular_velocity
    }

    /// Returns the angular acceleration accumulated since the last
    /// integration.
    pub fn angular_acceleration(&self) -> AngularAcceleration {
        self.angular_acceleration
    }

    pub fn set_angular_velocity(&mut self, angular_velocity: AngularVelocity) {
        self.angular_velocity = angular_velocity;
    }

    /// Changes the angular velocity immediately by the given amount.
    pub fn increase_rotation(&mut self, angular_velocity_change: AngularVelocity) {
        self.angular_velocity += angular_velocity_change;
    }

    /// Reduces the angular speed immediately by the magnitude of the given
    /// amount, stopping the rotation rather than reversing it. The sign of
    /// the decrease is ignored.
    pub fn diminish_rotation(&mut self, decrease: AngularVelocity) {
        let decrease = decrease.abs();
        let speed = self.angular_velocity.abs();
        self.angular_velocity = if speed <= decrease {
            AngularVelocity::zero()
        } else {
            Degrees(self.angular_velocity.degrees().signum() * (speed - decrease).degrees())
        };
    }

    /// Adds the given angular acceleration to the one applied in the next
    /// integration.
    pub fn apply_angular_acceleration(&mut self, angular_acceleration: AngularAcceleration) {
        self.angular_acceleration += angular_acceleration;
    }

    /// Adds the angular acceleration caused by the given force acting at the
    /// given point to the one applied in the next integration. The force and
    /// point are both expressed in the body's frame.
    pub fn apply_moment(&mut self, relative_force: &Force, relative_effect_point: &Position) {
        let lever_arm = relative_effect_point - self.rotation_origin;
        let moment = perp_cross(&lever_arm, relative_force);
        self.apply_angular_acceleration(Radians(moment / self.moment_of_inertia).as_degrees());
    }

    /// Advances the angular velocity and orientation of the body by one step
    /// of the given duration using the configured stepping scheme. The body
    /// is rotated about the rotation origin.
    ///
    /// # Panics
    /// If the step duration does not exceed zero.
    pub fn integrate(&mut self, body: &mut impl Posable, step_duration: fph) {
        assert!(
            step_duration > 0.0,
            "Tried integrating rotation over step duration not exceeding zero"
        );

        let advanced = self.config.rotation_scheme.advance(
            self.angular_velocity,
            self.angular_acceleration,
            self.last_angular_acceleration,
            step_duration,
        );

        let pose = body.pose();
        let new_pose = if self.rotation_origin_is_default {
            pose.plus(&Pose::rotation(advanced.angle_increment))
        } else {
            pose.rotated_about_relative_point(advanced.angle_increment, &self.rotation_origin)
        };
        body.set_pose(new_pose);

        self.angular_velocity = advanced.angular_velocity;
        self.last_angular_acceleration = self.angular_acceleration;
        self.angular_acceleration = AngularAcceleration::zero();
    }

    /// Moves the rotation origin to the given point relative to the body.
    ///
    /// The moment of inertia is recomputed about the new origin with the
    /// parallel axis theorem, and the angular velocity is rescaled so that
    /// the angular momentum stays the same.
    pub fn set_rotation_origin(&mut self, rotation_origin: Position) {
        if rotation_origin == self.rotation_origin {
            return;
        }
        let old_moment_of_inertia = self.moment_of_inertia;

        if rotation_origin == Position::zeros() {
            self.moment_of_inertia = self.default_moment_of_inertia;
            self.rotation_origin_is_default = true;
        } else {
            self.moment_of_inertia = compute_parallel_axis_moment_of_inertia(
                self.default_moment_of_inertia,
                self.mass,
                rotation_origin.norm(),
            );
            self.rotation_origin_is_default = false;
        }
        self.rotation_origin = rotation_origin;

        let rescaled_angular_velocity =
            self.angular_velocity * (old_moment_of_inertia / self.moment_of_inertia);
        self.increase_rotation(rescaled_angular_velocity - self.angular_velocity);
    }

    /// Returns the angular momentum about the rotation origin.
    pub fn angular_momentum(&self) -> fph {
        quantities::compute_angular_momentum(self.moment_of_inertia, self.angular_velocity)
    }

    pub fn rotational_kinetic_energy(&self) -> fph {
        quantities::compute_rotational_kinetic_energy(self.moment_of_inertia, self.angular_velocity)
    }
}

/// The state of a body at the moment a collision is resolved. Collisions are
/// resolved from snapshots so that no body is read after it has been
/// affected by the collision.
#[derive(Clone, Debug, PartialEq)]
pub struct CollisionParticipant {
    pub position: Position,
    pub velocity: Velocity,
    pub angular_velocity: AngularVelocity,
    pub mass: fph,
    pub moment_of_inertia: fph,
}

impl CollisionParticipant {
    /// Takes a snapshot of the given body.
    ///
    /// Collision impulses treat the body as rotating about its center of
    /// mass, so the snapshot holds the moment of inertia about the center of
    /// mass even when the rotation origin has been moved.
    pub fn of_body(body: &impl Rotatable) -> Self {
        let translational_mover = body.translational_mover();
        let rotational_mover = body.rotational_mover();
        Self {
            position: *body.pose().position(),
            velocity: *translational_mover.velocity(),
            angular_velocity: rotational_mover.angular_velocity(),
            mass: translational_mover.mass(),
            moment_of_inertia: rotational_mover.default_moment_of_inertia(),
        }
    }

    /// Computes the velocity of the material point of the body at the given
    /// world space position.
    pub fn point_velocity(&self, point: &Position) -> Velocity {
        let displacement = point - self.position;
        self.velocity
            + point_velocity_from_rotation(&displacement, self.angular_velocity.as_radians())
    }

    fn inverse_effective_mass_along(&self, point: &Position, normal: &Direction) -> fph {
        let lever_arm = point - self.position;
        let moment_arm = perp_cross(&lever_arm, normal);
        self.mass.recip() + moment_arm.powi(2) / self.moment_of_inertia
    }
}

/// Computes the momentum change body `a` receives when colliding with body
/// `b` at the given world space contact point. Body `b` receives the
/// opposite change.
///
/// The given unit contact normal points from `b` toward `a`, and the
/// returned change always points along it. Its magnitude is the impulse
/// that makes the relative normal velocity of the contact points
/// `-restitution_coef` times its initial value, accounting for both the
/// linear and the angular response of the bodies.
pub fn compute_collision_impulse(
    a: &CollisionParticipant,
    b: &CollisionParticipant,
    restitution_coef: fph,
    normal: &Direction,
    contact_point: &Position,
) -> MomentumChange {
    let relative_velocity = a.point_velocity(contact_point) - b.point_velocity(contact_point);

    let inverse_effective_mass = a.inverse_effective_mass_along(contact_point, normal)
        + b.inverse_effective_mass_along(contact_point, normal);

    let impulse_magnitude =
        -(1.0 + restitution_coef) * relative_velocity.dot(normal) / inverse_effective_mass;

    normal * impulse_magnitude.abs()
}

/// Like [`compute_collision_impulse`], but for a collision with an immovable
/// surface that has infinite mass and moment of inertia and no velocity.
pub fn compute_collision_impulse_against_static(
    body: &CollisionParticipant,
    restitution_coef: fph,
    normal: &Direction,
    contact_point: &Position,
) -> MomentumChange {
    let velocity = body.point_velocity(contact_point);
    let inverse_effective_mass = body.inverse_effective_mass_along(contact_point, normal);

    let impulse_magnitude =
        -(1.0 + restitution_coef) * velocity.dot(normal) / inverse_effective_mass;

    normal * impulse_magnitude.abs()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{body::RigidBody, inertia::InertialProperties, schemes::SteppingScheme};
    use approx::assert_abs_diff_eq;
    use nalgebra::vector;
    use proptest::prelude::*;

    fn disk_mover() -> RotationalMover {
        RotationalMover::new(&InertialProperties::of_disk(2.0, 1.0))
    }

    fn participant(
        position: Position,
        velocity: Velocity,
        angular_velocity: AngularVelocity,
    ) -> CollisionParticipant {
        CollisionParticipant {
            position,
            velocity,
            angular_velocity,
            mass: 2.0,
            moment_of_inertia: 1.0,
        }
    }

    #[test]
    fn should_accelerate_counter_clockwise_for_positive_moment() {
        let mut mover = disk_mover();
        mover.apply_moment(&vector![0.0, 3.0, 0.0], &vector![1.0, 0.0, 0.0]);
        assert_abs_diff_eq!(
            mover.angular_acceleration(),
            Radians(3.0).as_degrees(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn should_exert_no_moment_through_rotation_origin() {
        let mut mover = disk_mover();
        mover.set_rotation_origin(vector![1.0, 1.0, 0.0]);
        mover.apply_moment(&vector![5.0, -2.0, 0.0], &vector![1.0, 1.0, 0.0]);
        assert_eq!(mover.angular_acceleration(), Degrees(0.0));
    }

    #[test]
    fn should_rotate_pose_about_center_by_default() {
        let mut mover = disk_mover();
        let mut pose = Pose::translation(vector![2.0, 0.0, 0.0]);
        mover.set_angular_velocity(Degrees(45.0));
        mover.integrate(&mut pose, 2.0);

        assert_abs_diff_eq!(pose.angle(), Degrees(90.0));
        assert_abs_diff_eq!(pose.position(), &vector![2.0, 0.0, 0.0]);
    }

    #[test]
    fn should_rotate_pose_about_custom_origin() {
        let mut mover = disk_mover();
        let mut pose = Pose::identity();
        mover.set_rotation_origin(vector![1.0, 0.0, 0.0]);
        mover.set_angular_velocity(Degrees(180.0));
        mover.integrate(&mut pose, 1.0);

        assert_abs_diff_eq!(pose.angle(), Degrees(180.0), epsilon = 1e-9);
        assert_abs_diff_eq!(pose.position(), &vector![2.0, 0.0, 0.0], epsilon = 1e-9);
    }

    #[test]
    fn should_integrate_with_configured_scheme() {
        let properties = InertialProperties::of_disk(2.0, 1.0);
        let mut symplectic = RotationalMover::new(&properties);
        let mut trapezoidal = RotationalMover::with_config(
            &properties,
            MotionConfig {
                rotation_scheme: SteppingScheme::Trapezoidal,
                ..Default::default()
            },
        );
        let (mut symplectic_pose, mut trapezoidal_pose) = (Pose::identity(), Pose::identity());

        symplectic.apply_angular_acceleration(Degrees(2.0));
        trapezoidal.apply_angular_acceleration(Degrees(2.0));
        symplectic.integrate(&mut symplectic_pose, 1.0);
        trapezoidal.integrate(&mut trapezoidal_pose, 1.0);

        assert_abs_diff_eq!(symplectic_pose.angle(), Degrees(2.0));
        assert_abs_diff_eq!(symplectic.angular_velocity(), Degrees(2.0));
        assert_abs_diff_eq!(trapezoidal_pose.angle(), Degrees(0.0));
        assert_abs_diff_eq!(trapezoidal.angular_velocity(), Degrees(1.0));

        trapezoidal.integrate(&mut trapezoidal_pose, 1.0);
        assert_abs_diff_eq!(trapezoidal_pose.angle(), Degrees(2.0));
        assert_abs_diff_eq!(trapezoidal.angular_velocity(), Degrees(2.0));
    }

    #[test]
    fn should_apply_parallel_axis_theorem_for_offset_origin() {
        let mut mover = disk_mover();
        mover.set_rotation_origin(vector![0.0, 2.0, 0.0]);
        assert_abs_diff_eq!(mover.moment_of_inertia(), 1.0 + 2.0 * 4.0);
        assert!(!mover.rotation_origin_is_default());
    }

    #[test]
    fn should_conserve_angular_momentum_when_moving_origin() {
        let mut mover = disk_mover();
        mover.set_angular_velocity(Degrees(90.0));
        let angular_momentum = mover.angular_momentum();

        mover.set_rotation_origin(vector![0.5, -1.0, 0.0]);
        assert_abs_diff_eq!(mover.angular_momentum(), angular_momentum, epsilon = 1e-12);

        mover.set_rotation_origin(vector![3.0, 0.0, 0.0]);
        assert_abs_diff_eq!(mover.angular_momentum(), angular_momentum, epsilon = 1e-12);
    }

    #[test]
    fn should_restore_default_inertia_and_angular_velocity_after_origin_round_trip() {
        let mut mover = disk_mover();
        mover.set_angular_velocity(Degrees(-33.0));

        mover.set_rotation_origin(vector![1.5, 0.5, 0.0]);
        mover.set_rotation_origin(Position::zeros());

        assert!(mover.rotation_origin_is_default());
        assert_eq!(mover.moment_of_inertia(), mover.default_moment_of_inertia());
        assert_abs_diff_eq!(mover.angular_velocity(), Degrees(-33.0), epsilon = 1e-12);
    }

    #[test]
    fn should_ignore_unchanged_rotation_origin() {
        let mut mover = disk_mover();
        mover.set_angular_velocity(Degrees(10.0));
        mover.set_rotation_origin(Position::zeros());
        assert_eq!(mover.angular_velocity(), Degrees(10.0));
        assert_eq!(mover.moment_of_inertia(), 1.0);
    }

    #[test]
    fn should_diminish_rotation_without_reversing() {
        let mut mover = disk_mover();
        mover.set_angular_velocity(Degrees(-5.0));

        mover.diminish_rotation(Degrees(2.0));
        assert_abs_diff_eq!(mover.angular_velocity(), Degrees(-3.0));

        mover.diminish_rotation(Degrees(10.0));
        assert_eq!(mover.angular_velocity(), Degrees(0.0));
    }

    #[test]
    fn should_diminish_rotation_by_magnitude_of_negative_decrease() {
        let mut mover = disk_mover();
        mover.set_angular_velocity(Degrees(5.0));
        mover.diminish_rotation(Degrees(-2.0));
        assert_abs_diff_eq!(mover.angular_velocity(), Degrees(3.0));

        mover.set_angular_velocity(Degrees(-5.0));
        mover.diminish_rotation(Degrees(-2.0));
        assert_abs_diff_eq!(mover.angular_velocity(), Degrees(-3.0));
    }

    struct Massless;

    impl Massive for Massless {
        fn mass(&self) -> fph {
            0.0
        }
    }

    impl Inertial for Massless {
        fn default_moment_of_inertia(&self) -> fph {
            1.0
        }
    }

    struct Flat;

    impl Massive for Flat {
        fn mass(&self) -> fph {
            1.0
        }
    }

    impl Inertial for Flat {
        fn default_moment_of_inertia(&self) -> fph {
            0.0
        }
    }

    #[test]
    #[should_panic]
    fn should_panic_for_zero_mass() {
        RotationalMover::new(&Massless);
    }

    #[test]
    #[should_panic]
    fn should_panic_for_zero_moment_of_inertia() {
        RotationalMover::new(&Flat);
    }

    #[test]
    fn should_snapshot_moment_of_inertia_about_center_of_mass() {
        let mut body = RigidBody::new(InertialProperties::of_disk(2.0, 1.0), Pose::identity());
        body.rotational_mover_mut().set_rotation_origin(vector![0.0, 2.0, 0.0]);
        assert_abs_diff_eq!(body.rotational_mover().moment_of_inertia(), 9.0);

        let snapshot = CollisionParticipant::of_body(&body);
        assert_abs_diff_eq!(snapshot.moment_of_inertia, 1.0);
    }

    #[test]
    fn should_include_rotation_in_point_velocity() {
        let body = participant(
            vector![1.0, 1.0, 0.0],
            vector![0.0, 0.0, 0.0],
            Radians(2.0).as_degrees(),
        );
        assert_abs_diff_eq!(
            body.point_velocity(&vector![2.0, 1.0, 0.0]),
            vector![0.0, 2.0, 0.0],
            epsilon = 1e-12
        );
    }

    #[test]
    fn should_compute_head_on_elastic_impulse() {
        let a = participant(vector![-1.0, 0.0, 0.0], vector![1.0, 0.0, 0.0], Degrees(0.0));
        let b = participant(vector![1.0, 0.0, 0.0], vector![-1.0, 0.0, 0.0], Degrees(0.0));
        let impulse = compute_collision_impulse(
            &a,
            &b,
            1.0,
            &vector![-1.0, 0.0, 0.0],
            &Position::zeros(),
        );
        // Equal masses of 2 swap velocities, a change of 4 in momentum each
        assert_abs_diff_eq!(impulse, vector![-4.0, 0.0, 0.0], epsilon = 1e-12);
    }

    #[test]
    fn should_reduce_impulse_for_off_center_contact() {
        let a = participant(vector![0.0, -1.0, 0.0], vector![1.0, 0.0, 0.0], Degrees(0.0));
        let wall_impulse = compute_collision_impulse_against_static(
            &a,
            0.0,
            &vector![-1.0, 0.0, 0.0],
            &vector![1.0, 0.0, 0.0],
        );
        // 1 / (1/2 + 1^2/1) = 2/3 of the unit normal speed
        assert_abs_diff_eq!(wall_impulse, vector![-2.0 / 3.0, 0.0, 0.0], epsilon = 1e-12);
    }

    prop_compose! {
        fn planar_strategy(max_coord: fph)(
            x in -max_coord..max_coord,
            y in -max_coord..max_coord,
        ) -> Position {
            vector![x, y, 0.0]
        }
    }

    proptest! {
        #[test]
        fn should_always_push_along_contact_normal(
            velocity_a in planar_strategy(10.0),
            velocity_b in planar_strategy(10.0),
            contact_point in planar_strategy(2.0),
            minimum_translation in planar_strategy(1.0),
            angular_speed in -360.0..360.0,
            restitution_coef in 0.0..=1.0,
        ) {
            prop_assume!(minimum_translation.norm() > 1e-3);
            let normal = -minimum_translation.normalize();
            let a = participant(vector![-1.0, 0.0, 0.0], velocity_a, Degrees(angular_speed));
            let b = participant(vector![1.0, 0.0, 0.0], velocity_b, Degrees(0.0));

            let impulse = compute_collision_impulse(
                &a,
                &b,
                restitution_coef,
                &normal,
                &contact_point,
            );

            prop_assert!(impulse.dot(&minimum_translation) <= 1e-12);
            prop_assert!(impulse.z.abs() <= 1e-12);
        }
    }
}
