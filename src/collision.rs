//! Response of pairs of bodies to detected collisions.

use crate::{
    fph,
    body::{Movable, Posable, Rotatable},
    quantities::{Direction, MomentumChange, Position},
    rotation::{self, CollisionParticipant},
    translation::force_causing_momentum,
};
use rigid_motion_math::vector::normalized_if_above;

/// A contact between two bodies, as reported by collision detection.
#[derive(Clone, Debug, PartialEq)]
pub struct Contact {
    point: Position,
    minimum_translation: Direction,
    duration: fph,
    restitution_coef: fph,
}

impl Contact {
    /// Creates a new contact at the given world space point.
    ///
    /// The minimum translation vector points from the first body of the
    /// contact toward the second, so the contact normal, which is its
    /// reverse, points toward the first body. The collision response is
    /// spread over the given duration.
    ///
    /// # Panics
    /// - If the duration does not exceed zero.
    /// - If the restitution coefficient is outside `[0, 1]`.
    pub fn new(
        point: Position,
        minimum_translation: Direction,
        duration: fph,
        restitution_coef: fph,
    ) -> Self {
        assert!(
            duration > 0.0,
            "Tried creating contact with duration not exceeding zero"
        );
        assert!(
            (0.0..=1.0).contains(&restitution_coef),
            "Tried creating contact with restitution coefficient outside [0, 1]"
        );
        Self {
            point,
            minimum_translation,
            duration,
            restitution_coef,
        }
    }

    pub fn point(&self) -> &Position {
        &self.point
    }

    pub fn minimum_translation(&self) -> &Direction {
        &self.minimum_translation
    }

    pub fn duration(&self) -> fph {
        self.duration
    }

    pub fn restitution_coef(&self) -> fph {
        self.restitution_coef
    }

    /// Returns the unit contact normal pointing toward the first body, or
    /// [`None`] if the minimum translation vector is not longer than the
    /// given length.
    pub fn normal(&self, min_length: fph) -> Option<Direction> {
        normalized_if_above(&-self.minimum_translation, min_length)
    }
}

/// Resolves a collision between two rotatable bodies by applying the
/// collision impulse, as a force spread over the contact duration, at the
/// contact point of `a` and its reverse at the contact point of `b`. Body
/// `a` is then moved back by the minimum translation vector so that the
/// bodies no longer overlap.
///
/// Both bodies are read before either is affected. Returns the momentum
/// change imparted to `a`, which is zero and leaves both bodies untouched
/// when the contact normal is undefined.
pub fn resolve_collision(
    a: &mut impl Rotatable,
    b: &mut impl Rotatable,
    contact: &Contact,
) -> MomentumChange {
    let config = *a.rotational_mover().config();
    let Some(normal) = contact.normal(config.min_direction_length) else {
        log::trace!("Skipped collision with undefined contact normal at {:?}", contact.point());
        return MomentumChange::zeros();
    };

    let participant_a = CollisionParticipant::of_body(&*a);
    let participant_b = CollisionParticipant::of_body(&*b);

    let impulse = rotation::compute_collision_impulse(
        &participant_a,
        &participant_b,
        contact.restitution_coef(),
        &normal,
        contact.point(),
    );

    let force = force_causing_momentum(&impulse, contact.duration());
    a.apply_force_at_point(&force, contact.point());
    b.apply_force_at_point(&-force, contact.point());

    separate(a, contact);

    log::debug!(
        "Applied collision impulse of magnitude {} at {:?}",
        impulse.norm(),
        contact.point()
    );

    impulse
}

/// Resolves a collision between a rotatable body and an immovable surface,
/// where the body is the first body of the contact. The body is moved back
/// by the minimum translation vector after the impulse is applied. Returns
/// the momentum change imparted to the body.
pub fn resolve_collision_with_static(
    body: &mut impl Rotatable,
    contact: &Contact,
) -> MomentumChange {
    let config = *body.rotational_mover().config();
    let Some(normal) = contact.normal(config.min_direction_length) else {
        log::trace!(
            "Skipped static collision with undefined contact normal at {:?}",
            contact.point()
        );
        return MomentumChange::zeros();
    };

    let participant = CollisionParticipant::of_body(&*body);

    let impulse = rotation::compute_collision_impulse_against_static(
        &participant,
        contact.restitution_coef(),
        &normal,
        contact.point(),
    );

    body.apply_force_at_point(
        &force_causing_momentum(&impulse, contact.duration()),
        contact.point(),
    );

    separate(body, contact);

    log::debug!(
        "Applied static collision impulse of magnitude {} at {:?}",
        impulse.norm(),
        contact.point()
    );

    impulse
}

/// Moves the first body of the contact out of the overlap.
fn separate(body: &mut impl Posable, contact: &Contact) {
    let pose = body.pose();
    let separated_pose = pose.with_position(pose.position() - contact.minimum_translation());
    body.set_pose(separated_pose);
}

/// Makes two bodies exchange momenta as colliding particles over the given
/// duration, without any rotational response. If an axis is given, only
/// the momentum components along it are exchanged.
pub fn exchange_momenta(
    a: &mut impl Movable,
    b: &mut impl Movable,
    duration: fph,
    axis: Option<&Direction>,
) {
    a.translational_mover_mut()
        .handle_collision_with(b.translational_mover_mut(), duration, axis);
}
