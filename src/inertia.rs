//! Computation and representation of inertia-related properties.
//!
//! All moments of inertia are about an axis parallel to the z-axis, which is
//! the axis every body rotates about.

use crate::fph;
use approx::{AbsDiffEq, RelativeEq};
use std::f64::consts::PI;

/// The inertia-related properties of a physical body: its mass and its moment
/// of inertia about the center of mass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InertialProperties {
    mass: fph,
    moment_of_inertia: fph,
}

impl InertialProperties {
    /// Creates a new set of inertial properties.
    ///
    /// # Panics
    /// If the given mass or moment of inertia does not exceed zero.
    pub fn new(mass: fph, moment_of_inertia: fph) -> Self {
        assert!(
            mass > 0.0,
            "Tried creating body with mass not exceeding zero"
        );
        assert!(
            moment_of_inertia > 0.0,
            "Tried creating body with moment of inertia not exceeding zero"
        );
        Self {
            mass,
            moment_of_inertia,
        }
    }

    /// Creates the inertial properties of a point-like body at the given
    /// distance from its rotation axis.
    pub fn of_point(mass: fph, radius: fph) -> Self {
        Self::new(mass, compute_point_moment_of_inertia(mass, radius))
    }

    /// Creates the inertial properties of a solid disk or cylinder with the
    /// given radius, rotating about its symmetry axis.
    pub fn of_disk(mass: fph, radius: fph) -> Self {
        Self::new(mass, compute_disk_moment_of_inertia(mass, radius))
    }

    /// Creates the inertial properties of a solid disk with the given radius
    /// and mass per unit area.
    pub fn of_uniform_disk(radius: fph, areal_density: fph) -> Self {
        Self::of_disk(compute_disk_area(radius) * areal_density, radius)
    }

    /// Creates the inertial properties of a thin ring with the given radius.
    pub fn of_ring(mass: fph, radius: fph) -> Self {
        Self::new(mass, compute_ring_moment_of_inertia(mass, radius))
    }

    /// Creates the inertial properties of a thick ring with the given outer
    /// and inner radii.
    pub fn of_annulus(mass: fph, outer_radius: fph, inner_radius: fph) -> Self {
        Self::new(
            mass,
            compute_annulus_moment_of_inertia(mass, outer_radius, inner_radius),
        )
    }

    /// Creates the inertial properties of a thin rod with the given length,
    /// rotating about its center.
    pub fn of_rod(mass: fph, length: fph) -> Self {
        Self::new(
            mass,
            compute_rod_moment_of_inertia(mass, length, RodAxis::Center),
        )
    }

    /// Creates the inertial properties of a flat rectangle with the given
    /// extents, rotating about its center.
    pub fn of_rectangle(mass: fph, width: fph, height: fph) -> Self {
        Self::new(
            mass,
            compute_rectangle_moment_of_inertia(mass, width, height),
        )
    }

    /// Creates the inertial properties of a flat rectangle with the given
    /// extents and mass per unit area.
    pub fn of_uniform_rectangle(width: fph, height: fph, areal_density: fph) -> Self {
        Self::of_rectangle(width * height * areal_density, width, height)
    }

    /// Creates the inertial properties of a solid sphere.
    pub fn of_solid_sphere(mass: fph, radius: fph) -> Self {
        Self::new(mass, compute_solid_sphere_moment_of_inertia(mass, radius))
    }

    /// Creates the inertial properties of a thin spherical shell.
    pub fn of_hollow_sphere(mass: fph, radius: fph) -> Self {
        Self::new(mass, compute_hollow_sphere_moment_of_inertia(mass, radius))
    }

    /// Returns the mass of the body.
    pub fn mass(&self) -> fph {
        self.mass
    }

    /// Returns the moment of inertia of the body about its center of mass.
    pub fn moment_of_inertia(&self) -> fph {
        self.moment_of_inertia
    }

    /// Computes the moment of inertia about a parallel axis at the given
    /// distance from the center of mass.
    pub fn moment_of_inertia_about_offset_axis(&self, distance_from_com: fph) -> fph {
        compute_parallel_axis_moment_of_inertia(
            self.moment_of_inertia,
            self.mass,
            distance_from_com,
        )
    }
}

impl AbsDiffEq for InertialProperties {
    type Epsilon = <fph as AbsDiffEq>::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        fph::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        fph::abs_diff_eq(&self.mass, &other.mass, epsilon)
            && fph::abs_diff_eq(&self.moment_of_inertia, &other.moment_of_inertia, epsilon)
    }
}

impl RelativeEq for InertialProperties {
    fn default_max_relative() -> Self::Epsilon {
        fph::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        fph::relative_eq(&self.mass, &other.mass, epsilon, max_relative)
            && fph::relative_eq(
                &self.moment_of_inertia,
                &other.moment_of_inertia,
                epsilon,
                max_relative,
            )
    }
}

/// Where the rotation axis of a rod passes through the rod.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RodAxis {
    Center,
    End,
}

/// Moment of inertia of a point mass at distance `radius` from the axis.
pub fn compute_point_moment_of_inertia(mass: fph, radius: fph) -> fph {
    mass * radius.powi(2)
}

/// Moment of inertia of a solid disk or cylinder about its symmetry axis.
pub fn compute_disk_moment_of_inertia(mass: fph, radius: fph) -> fph {
    0.5 * compute_point_moment_of_inertia(mass, radius)
}

/// Moment of inertia of a thin ring about its symmetry axis. All the mass
/// sits at the same distance from the axis, as for a point.
pub fn compute_ring_moment_of_inertia(mass: fph, radius: fph) -> fph {
    compute_point_moment_of_inertia(mass, radius)
}

/// Moment of inertia of a thick ring about its symmetry axis.
pub fn compute_annulus_moment_of_inertia(mass: fph, outer_radius: fph, inner_radius: fph) -> fph {
    0.5 * mass * (outer_radius.powi(2) + inner_radius.powi(2))
}

/// Moment of inertia of a thin rod about an axis perpendicular to it.
pub fn compute_rod_moment_of_inertia(mass: fph, length: fph, axis: RodAxis) -> fph {
    let mass_times_squared_length = mass * length.powi(2);
    match axis {
        RodAxis::Center => mass_times_squared_length / 12.0,
        RodAxis::End => mass_times_squared_length / 3.0,
    }
}

/// Moment of inertia of a flat rectangle about the axis through its center
/// perpendicular to its plane.
pub fn compute_rectangle_moment_of_inertia(mass: fph, width: fph, height: fph) -> fph {
    mass * (width.powi(2) + height.powi(2)) / 12.0
}

/// Moment of inertia of a solid sphere about any axis through its center.
pub fn compute_solid_sphere_moment_of_inertia(mass: fph, radius: fph) -> fph {
    2.0 * mass * radius.powi(2) / 5.0
}

/// Moment of inertia of a thin spherical shell about any axis through its
/// center.
pub fn compute_hollow_sphere_moment_of_inertia(mass: fph, radius: fph) -> fph {
    2.0 * mass * radius.powi(2) / 3.0
}

/// Uses the parallel axis theorem to compute the moment of inertia about an
/// axis at the given distance from a parallel axis through the center of
/// mass, given the moment of inertia about the latter.
pub fn compute_parallel_axis_moment_of_inertia(
    moment_of_inertia_about_com: fph,
    mass: fph,
    distance_from_com: fph,
) -> fph {
    moment_of_inertia_about_com + mass * distance_from_com.powi(2)
}

pub fn compute_disk_area(radius: fph) -> fph {
    PI * radius.powi(2)
}
