//! Translational motion of bodies.

use crate::{
    MotionConfig, fph,
    body::{Massive, Posable},
    impulse::Impulse,
    quantities::{
        self, Acceleration, Direction, Force, Momentum, MomentumChange, Pose, Velocity,
    },
};
use rigid_motion_math::vector::{normalized_if_above, vector_projection};
use std::mem;

/// Evolves the velocity and position of a body over time in response to
/// forces, impulses, friction and collisions.
///
/// Forces only accumulate until the next call to [`Self::integrate`], which
/// consumes them.
#[derive(Clone, Debug)]
pub struct TranslationalMover {
    config: MotionConfig,
    mass: fph,
    velocity: Velocity,
    acceleration: Acceleration,
    pending_impulses: Vec<Impulse>,
}

/// Computes the force that changes momentum by the given amount when it acts
/// over the given duration.
///
/// # Panics
/// If the duration does not exceed zero.
pub fn force_causing_momentum(momentum_change: &MomentumChange, duration: fph) -> Force {
    assert!(
        duration > 0.0,
        "Tried computing force over duration not exceeding zero"
    );
    momentum_change / duration
}

impl TranslationalMover {
    /// Creates a mover for a body at rest with the mass of the given body.
    ///
    /// # Panics
    /// If the mass does not exceed zero.
    pub fn new(body: &impl Massive) -> Self {
        Self::with_config(body, MotionConfig::default())
    }

    /// Creates a mover for a body at rest with the mass of the given body,
    /// using the given configuration.
    ///
    /// # Panics
    /// If the mass does not exceed zero.
    pub fn with_config(body: &impl Massive, config: MotionConfig) -> Self {
        let mass = body.mass();
        assert!(
            mass > 0.0,
            "Tried creating translational mover for body with mass not exceeding zero"
        );
        Self {
            config,
            mass,
            velocity: Velocity::zeros(),
            acceleration: Acceleration::zeros(),
            pending_impulses: Vec::new(),
        }
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn mass(&self) -> fph {
        self.mass
    }

    pub fn velocity(&self) -> &Velocity {
        &self.velocity
    }

    /// Returns the acceleration accumulated since the last integration.
    pub fn acceleration(&self) -> &Acceleration {
        &self.acceleration
    }

    /// Returns the impulses that will keep acting on the body in coming
    /// steps.
    pub fn pending_impulses(&self) -> &[Impulse] {
        &self.pending_impulses
    }

    /// Replaces the velocity immediately.
    pub fn set_velocity(&mut self, velocity: Velocity) {
        self.velocity = velocity;
    }

    /// Replaces the component of the velocity parallel to the given velocity
    /// with the given velocity, leaving the perpendicular components intact.
    /// Nothing happens if the given velocity is too short to have a
    /// direction.
    pub fn set_directional_velocity(&mut self, velocity: &Velocity) {
        if normalized_if_above(velocity, self.config.min_direction_length).is_none() {
            log::trace!("Skipped setting velocity along undefined direction");
            return;
        }
        self.velocity += velocity - vector_projection(&self.velocity, velocity);
    }

    /// Removes the component of the velocity along the given axis
    /// immediately.
    pub fn negate_directional_velocity(&mut self, axis: &Direction) {
        if normalized_if_above(axis, self.config.min_direction_length).is_none() {
            log::trace!("Skipped negating velocity along undefined direction");
            return;
        }
        self.velocity -= vector_projection(&self.velocity, axis);
    }

    /// Adds the acceleration caused by the given force to the acceleration
    /// applied in the next integration.
    pub fn apply_force(&mut self, force: &Force) {
        self.acceleration += force / self.mass;
    }

    /// Schedules the given impulse to act on the body during the coming
    /// steps.
    pub fn apply_impulse(&mut self, impulse: Impulse) {
        self.pending_impulses.push(impulse);
    }

    /// Cancels all pending impulses.
    pub fn negate_impulses(&mut self) {
        self.pending_impulses.clear();
    }

    /// Advances the velocity of the body by one step of the given duration
    /// with the accumulated acceleration and pending impulses, then moves the
    /// body with the new velocity.
    ///
    /// # Panics
    /// If the step duration does not exceed zero.
    pub fn integrate(&mut self, body: &mut impl Posable, step_duration: fph) {
        assert!(
            step_duration > 0.0,
            "Tried integrating translation over step duration not exceeding zero"
        );

        let mut remaining_impulses = Vec::with_capacity(self.pending_impulses.len());
        for impulse in mem::take(&mut self.pending_impulses) {
            self.apply_force(&impulse.force_over_interval(step_duration));
            remaining_impulses.extend(impulse.with_reduced_duration(step_duration));
        }
        self.pending_impulses = remaining_impulses;

        self.velocity += self.acceleration * step_duration;

        let displacement = self.velocity * step_duration;
        let new_pose = body.pose().plus(&Pose::translation(displacement));
        body.set_pose(new_pose);

        self.acceleration = Acceleration::zeros();
    }

    pub fn momentum(&self) -> Momentum {
        self.velocity * self.mass
    }

    /// Returns the component of the momentum along the given direction.
    pub fn directional_momentum(&self, direction: &Direction) -> Momentum {
        vector_projection(&self.momentum(), direction)
    }

    /// Applies the force required for the momentum to become the given
    /// momentum when integrating over the given duration.
    pub fn set_momentum(&mut self, momentum: &Momentum, duration: fph) {
        let force = force_causing_momentum(&(momentum - self.momentum()), duration);
        self.apply_force(&force);
    }

    /// Applies the force required for the component of the momentum parallel
    /// to the given momentum to become the given momentum when integrating
    /// over the given duration. Nothing happens if the given momentum is too
    /// short to have a direction.
    pub fn set_directional_momentum(&mut self, momentum: &Momentum, duration: fph) {
        if normalized_if_above(momentum, self.config.min_direction_length).is_none() {
            log::trace!("Skipped setting momentum along undefined direction");
            return;
        }
        let momentum_change = momentum - self.directional_momentum(momentum);
        self.apply_force(&force_causing_momentum(&momentum_change, duration));
    }

    /// Applies the force required for the component of the momentum along
    /// the given axis to vanish when integrating over the given duration.
    pub fn negate_directional_momentum(&mut self, axis: &Direction, duration: fph) {
        if normalized_if_above(axis, self.config.min_direction_length).is_none() {
            log::trace!("Skipped negating momentum along undefined direction");
            return;
        }
        let momentum_change = -self.directional_momentum(axis);
        self.apply_force(&force_causing_momentum(&momentum_change, duration));
    }

    /// Computes the momentum of this body after colliding with the given
    /// body, treating both as particles exchanging momentum elastically.
    pub fn momentum_after_collision_with(&self, other: &Self) -> Momentum {
        let total_mass = self.mass + other.mass;
        (self.momentum() * (self.mass - other.mass) + other.momentum() * (2.0 * self.mass))
            / total_mass
    }

    /// Makes this body and the given body exchange momenta as colliding
    /// particles over the given duration. If an axis is given, only the
    /// momentum components along the axis are affected.
    ///
    /// Both post-collision momenta are computed before either body is
    /// affected.
    pub fn handle_collision_with(
        &mut self,
        other: &mut Self,
        duration: fph,
        axis: Option<&Direction>,
    ) {
        let momentum = self.momentum_after_collision_with(other);
        let other_momentum = other.momentum_after_collision_with(self);

        self.assume_momentum_after_collision(&momentum, duration, axis);
        other.assume_momentum_after_collision(&other_momentum, duration, axis);
    }

    fn assume_momentum_after_collision(
        &mut self,
        momentum: &Momentum,
        duration: fph,
        axis: Option<&Direction>,
    ) {
        match axis {
            Some(axis) => {
                let directional_momentum = vector_projection(momentum, axis);
                if directional_momentum.norm() < self.config.min_directional_momentum {
                    self.negate_directional_momentum(axis, duration);
                } else {
                    self.set_directional_momentum(&directional_momentum, duration);
                }
            }
            None => {
                self.set_momentum(momentum, duration);
            }
        }
    }

    /// Applies friction from a surface with the given velocity over a step of
    /// the given duration. Only sliding along the given surface axis is
    /// resisted.
    ///
    /// The kinetic friction force has magnitude `friction_coef *
    /// support_force`. If that exceeds the force that would bring the sliding
    /// to a halt within the step, the halting force is used instead, so that
    /// friction never reverses the direction of sliding.
    pub fn apply_friction(
        &mut self,
        friction_coef: fph,
        duration: fph,
        support_force: fph,
        surface_axis: &Direction,
        surface_velocity: &Velocity,
    ) {
        let relative_velocity =
            vector_projection(&(surface_velocity - self.velocity), surface_axis);

        let Some(sliding_direction) =
            normalized_if_above(&relative_velocity, self.config.min_relative_speed)
        else {
            log::trace!("Skipped friction for body not sliding relative to surface");
            return;
        };

        let kinetic_friction_force = sliding_direction * (friction_coef * support_force);
        let halting_force = force_causing_momentum(&(relative_velocity * self.mass), duration);

        if kinetic_friction_force.norm_squared() > halting_force.norm_squared() {
            log::debug!(
                "Clamped friction force {} to halt sliding",
                kinetic_friction_force.norm()
            );
            if surface_velocity.norm() < self.config.min_relative_speed {
                self.negate_directional_momentum(surface_axis, duration);
            } else {
                self.apply_force(&halting_force);
            }
        } else {
            self.apply_force(&kinetic_friction_force);
        }
    }

    /// Applies friction from a stationary surface resisting the current
    /// motion of the body, whatever its direction.
    pub fn apply_friction_along_motion(
        &mut self,
        friction_coef: fph,
        duration: fph,
        support_force: fph,
    ) {
        let motion_direction = self.velocity;
        self.apply_friction(
            friction_coef,
            duration,
            support_force,
            &motion_direction,
            &Velocity::zeros(),
        );
    }

    pub fn translational_kinetic_energy(&self) -> fph {
        quantities::compute_translational_kinetic_energy(self.mass, &self.velocity)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::inertia::InertialProperties;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use nalgebra::vector;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    fn mover_with_mass(mass: fph) -> TranslationalMover {
        TranslationalMover::new(&InertialProperties::of_point(mass, 1.0))
    }

    struct Massless;

    impl Massive for Massless {
        fn mass(&self) -> fph {
            0.0
        }
    }

    #[test]
    #[should_panic]
    fn should_panic_for_zero_mass() {
        TranslationalMover::new(&Massless);
    }

    fn mover_with_velocity(mass: fph, velocity: Velocity) -> TranslationalMover {
        let mut mover = mover_with_mass(mass);
        mover.set_velocity(velocity);
        mover
    }

    #[test]
    fn should_leave_pose_unchanged_without_force_or_velocity() {
        let mut mover = mover_with_mass(2.0);
        let mut pose = Pose::new(vector![1.0, -2.0, 0.5], rigid_motion_math::Degrees(30.0));
        let initial_pose = pose;
        mover.integrate(&mut pose, 0.37);
        mover.integrate(&mut pose, 12.0);
        assert_eq!(pose, initial_pose);
    }

    #[test]
    fn should_integrate_velocity_before_position() {
        let disk = InertialProperties::of_uniform_disk(10.0, 1.0);
        assert_abs_diff_eq!(disk.mass(), PI * 100.0, epsilon = 1e-12);

        let mut mover = TranslationalMover::new(&disk);
        let mut pose = Pose::identity();
        mover.apply_force(&vector![disk.mass(), 0.0, 0.0]);
        mover.integrate(&mut pose, 1.0);

        assert_abs_diff_eq!(mover.velocity(), &vector![1.0, 0.0, 0.0], epsilon = 1e-12);
        assert_abs_diff_eq!(pose.position(), &vector![1.0, 0.0, 0.0], epsilon = 1e-12);
    }

    #[test]
    fn should_reset_acceleration_after_integration() {
        let mut mover = mover_with_mass(1.0);
        let mut pose = Pose::identity();
        mover.apply_force(&vector![1.0, 1.0, 0.0]);
        mover.integrate(&mut pose, 1.0);
        assert_eq!(mover.acceleration(), &Acceleration::zeros());

        mover.integrate(&mut pose, 1.0);
        assert_abs_diff_eq!(mover.velocity(), &vector![1.0, 1.0, 0.0]);
    }

    #[test]
    fn should_deliver_impulse_momentum_and_discard_it() {
        let mass = 2.0;
        let mut mover = mover_with_mass(mass);
        let mut pose = Pose::identity();
        let force = vector![4.0, 0.0, -2.0];
        mover.apply_impulse(Impulse::new(force, 1.0));

        for _ in 0..4 {
            assert_eq!(mover.pending_impulses().len(), 1);
            mover.integrate(&mut pose, 0.25);
        }

        assert!(mover.pending_impulses().is_empty());
        assert_abs_diff_eq!(mover.velocity(), &(force * 1.0 / mass), epsilon = 1e-12);
    }

    #[test]
    fn should_cancel_pending_impulses() {
        let mut mover = mover_with_mass(1.0);
        let mut pose = Pose::identity();
        mover.apply_impulse(Impulse::new(vector![1.0, 0.0, 0.0], 5.0));
        mover.negate_impulses();
        mover.integrate(&mut pose, 1.0);
        assert_eq!(mover.velocity(), &Velocity::zeros());
    }

    #[test]
    fn should_reach_set_momentum_after_integration() {
        let mut mover = mover_with_velocity(2.0, vector![1.0, 0.0, 0.0]);
        let mut pose = Pose::identity();
        mover.set_momentum(&vector![0.0, 4.0, 0.0], 0.5);
        mover.integrate(&mut pose, 0.5);
        assert_abs_diff_eq!(mover.momentum(), vector![0.0, 4.0, 0.0], epsilon = 1e-12);
    }

    #[test]
    fn should_only_change_directional_momentum_component() {
        let mut mover = mover_with_velocity(1.0, vector![3.0, 5.0, 0.0]);
        let mut pose = Pose::identity();
        mover.set_directional_momentum(&vector![-1.0, 0.0, 0.0], 1.0);
        mover.integrate(&mut pose, 1.0);
        assert_abs_diff_eq!(mover.velocity(), &vector![-1.0, 5.0, 0.0], epsilon = 1e-12);
    }

    #[test]
    fn should_skip_directional_operations_for_undefined_direction() {
        let mut mover = mover_with_velocity(1.0, vector![3.0, 5.0, 0.0]);
        let tiny = vector![1e-6, 0.0, 0.0];
        mover.set_directional_momentum(&tiny, 1.0);
        mover.negate_directional_momentum(&tiny, 1.0);
        assert_eq!(mover.acceleration(), &Acceleration::zeros());

        mover.set_directional_velocity(&tiny);
        mover.negate_directional_velocity(&tiny);
        assert_eq!(mover.velocity(), &vector![3.0, 5.0, 0.0]);
    }

    #[test]
    fn should_negate_directional_momentum_over_duration() {
        let mut mover = mover_with_velocity(3.0, vector![2.0, -1.0, 0.0]);
        let mut pose = Pose::identity();
        mover.negate_directional_momentum(&vector![0.0, 2.0, 0.0], 0.1);
        mover.integrate(&mut pose, 0.1);
        assert_abs_diff_eq!(mover.velocity(), &vector![2.0, 0.0, 0.0], epsilon = 1e-12);
    }

    #[test]
    fn should_modify_directional_velocity_immediately() {
        let mut mover = mover_with_velocity(1.0, vector![3.0, 5.0, 0.0]);
        mover.set_directional_velocity(&vector![0.0, -2.0, 0.0]);
        assert_abs_diff_eq!(mover.velocity(), &vector![3.0, -2.0, 0.0]);

        mover.negate_directional_velocity(&vector![1.0, 0.0, 0.0]);
        assert_abs_diff_eq!(mover.velocity(), &vector![0.0, -2.0, 0.0]);
    }

    #[test]
    fn should_swap_velocities_of_equal_masses_in_collision() {
        let mut a = mover_with_velocity(1.5, vector![2.0, 0.0, 0.0]);
        let mut b = mover_with_velocity(1.5, vector![-1.0, 0.0, 0.0]);
        let (mut pose_a, mut pose_b) = (Pose::identity(), Pose::identity());

        a.handle_collision_with(&mut b, 0.1, None);
        a.integrate(&mut pose_a, 0.1);
        b.integrate(&mut pose_b, 0.1);

        assert_abs_diff_eq!(a.velocity(), &vector![-1.0, 0.0, 0.0], epsilon = 1e-12);
        assert_abs_diff_eq!(b.velocity(), &vector![2.0, 0.0, 0.0], epsilon = 1e-12);
    }

    #[test]
    fn should_only_exchange_momentum_along_axis() {
        let mut a = mover_with_velocity(1.0, vector![2.0, 3.0, 0.0]);
        let mut b = mover_with_velocity(1.0, vector![-1.0, 0.0, 0.0]);
        let (mut pose_a, mut pose_b) = (Pose::identity(), Pose::identity());

        a.handle_collision_with(&mut b, 1.0, Some(&vector![1.0, 0.0, 0.0]));
        a.integrate(&mut pose_a, 1.0);
        b.integrate(&mut pose_b, 1.0);

        assert_abs_diff_eq!(a.velocity(), &vector![-1.0, 3.0, 0.0], epsilon = 1e-12);
        assert_abs_diff_eq!(b.velocity(), &vector![2.0, 0.0, 0.0], epsilon = 1e-12);
    }

    #[test]
    fn should_stop_body_when_post_collision_directional_momentum_is_negligible() {
        let mut a = mover_with_velocity(1.0, vector![1.0, 0.0, 0.0]);
        let mut b = mover_with_velocity(1.0, vector![0.0, 0.0, 0.0]);
        let (mut pose_a, mut pose_b) = (Pose::identity(), Pose::identity());

        a.handle_collision_with(&mut b, 1.0, Some(&vector![1.0, 0.0, 0.0]));
        a.integrate(&mut pose_a, 1.0);
        b.integrate(&mut pose_b, 1.0);

        assert_eq!(a.velocity(), &Velocity::zeros());
        assert_abs_diff_eq!(b.velocity(), &vector![1.0, 0.0, 0.0], epsilon = 1e-12);
    }

    #[test]
    fn should_decelerate_by_kinetic_friction_without_reversing() {
        let mut mover = mover_with_velocity(1.0, vector![10.0, 0.0, 0.0]);
        let mut pose = Pose::identity();
        let axis = vector![1.0, 0.0, 0.0];
        let kinetic_deceleration = 0.3 * 0.098;

        mover.apply_friction(0.3, 1.0, 0.098, &axis, &Velocity::zeros());
        mover.integrate(&mut pose, 1.0);
        assert_abs_diff_eq!(mover.velocity().x, 10.0 - kinetic_deceleration, epsilon = 1e-12);

        let mut steps = 1;
        while mover.velocity().x != 0.0 {
            let speed_before = mover.velocity().x;
            mover.apply_friction(0.3, 1.0, 0.098, &axis, &Velocity::zeros());
            mover.integrate(&mut pose, 1.0);
            let speed_after = mover.velocity().x;

            assert!(speed_after >= 0.0);
            assert!(speed_before - speed_after <= kinetic_deceleration + 1e-12);

            steps += 1;
            assert!(steps < 1000, "friction never brought body to a halt");
        }

        mover.apply_friction(0.3, 1.0, 0.098, &axis, &Velocity::zeros());
        mover.integrate(&mut pose, 1.0);
        assert_eq!(mover.velocity(), &Velocity::zeros());
    }

    #[test]
    fn should_drag_body_along_with_moving_surface_without_overshooting() {
        let mut mover = mover_with_velocity(1.0, vector![0.0, 0.0, 0.0]);
        let mut pose = Pose::identity();
        let surface_velocity = vector![0.01, 0.0, 0.0];

        mover.apply_friction(1.0, 1.0, 1.0, &vector![1.0, 0.0, 0.0], &surface_velocity);
        mover.integrate(&mut pose, 1.0);

        assert_abs_diff_eq!(mover.velocity(), &surface_velocity, epsilon = 1e-12);
    }

    #[test]
    fn should_ignore_sliding_across_friction_axis() {
        let mut mover = mover_with_velocity(1.0, vector![0.0, 5.0, 0.0]);
        mover.apply_friction(1.0, 1.0, 1.0, &vector![1.0, 0.0, 0.0], &Velocity::zeros());
        assert_eq!(mover.acceleration(), &Acceleration::zeros());
    }

    #[test]
    fn should_resist_motion_in_any_direction() {
        let mut mover = mover_with_velocity(1.0, vector![3.0, 4.0, 0.0]);
        mover.apply_friction_along_motion(0.5, 1.0, 2.0);
        assert_abs_diff_eq!(mover.acceleration(), &vector![-0.6, -0.8, 0.0], epsilon = 1e-12);
    }

    #[test]
    #[should_panic]
    fn should_panic_for_zero_step_duration() {
        mover_with_mass(1.0).integrate(&mut Pose::identity(), 0.0);
    }

    prop_compose! {
        fn velocity_strategy(max_speed: fph)(
            x in -max_speed..max_speed,
            y in -max_speed..max_speed,
        ) -> Velocity {
            vector![x, y, 0.0]
        }
    }

    proptest! {
        #[test]
        fn should_conserve_momentum_in_particle_collision(
            mass_a in 0.1..100.0,
            mass_b in 0.1..100.0,
            velocity_a in velocity_strategy(10.0),
            velocity_b in velocity_strategy(10.0),
        ) {
            let mut a = mover_with_velocity(mass_a, velocity_a);
            let mut b = mover_with_velocity(mass_b, velocity_b);
            let initial_momentum = a.momentum() + b.momentum();
            let (mut pose_a, mut pose_b) = (Pose::identity(), Pose::identity());

            a.handle_collision_with(&mut b, 0.05, None);
            a.integrate(&mut pose_a, 0.05);
            b.integrate(&mut pose_b, 0.05);

            prop_assert!(approx::abs_diff_eq!(
                a.momentum() + b.momentum(),
                initial_momentum,
                epsilon = 1e-9 * (1.0 + initial_momentum.norm()) * 100.0
            ));
        }

        #[test]
        fn should_never_reverse_sliding_through_friction(
            speed in 0.0..20.0,
            friction_coef in 0.0..2.0,
            support_force in 0.0..50.0,
            step_duration in 0.01..2.0,
        ) {
            let mut mover = mover_with_velocity(1.0, vector![speed, 0.0, 0.0]);
            let mut pose = Pose::identity();
            mover.apply_friction(
                friction_coef,
                step_duration,
                support_force,
                &vector![1.0, 0.0, 0.0],
                &Velocity::zeros(),
            );
            mover.integrate(&mut pose, step_duration);
            prop_assert!(mover.velocity().x >= -1e-12);
        }
    }

    #[test]
    fn should_compute_kinetic_energy_and_momentum() {
        let mover = mover_with_velocity(4.0, vector![1.0, 2.0, 2.0]);
        assert_relative_eq!(mover.translational_kinetic_energy(), 18.0);
        assert_relative_eq!(mover.momentum(), vector![4.0, 8.0, 8.0]);
    }
}
