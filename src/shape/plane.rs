//! Definition of the cutting plane.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use na::{RealField, Unit};
use rand::Rng;

/// An infinite plane, the set of points `p` such that `normal · p == bias`.
///
/// The plane splits the space into two half-spaces. The positive half-space is
/// the one the normal points toward; points lying exactly on the plane are
/// considered to be on the positive side.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Plane {
    /// The plane's unit normal.
    pub normal: UnitVector<Real>,
    /// The signed distance between the origin and the plane, along `normal`.
    pub bias: Real,
}

impl Plane {
    /// Builds a new plane from its normal and its signed distance to the origin.
    #[inline]
    pub fn new(normal: UnitVector<Real>, bias: Real) -> Self {
        Plane { normal, bias }
    }

    /// Builds the plane with the given normal passing through `point`.
    #[inline]
    pub fn from_normal_and_point(normal: UnitVector<Real>, point: &Point<Real>) -> Self {
        Plane {
            normal,
            bias: normal.dot(&point.coords),
        }
    }

    /// Builds the plane containing the triangle `a, b, c`.
    ///
    /// The normal is `(b - a) × (c - a)`, normalized, so it points toward the side
    /// from which the triangle appears counter-clockwise. Returns `None` if the
    /// triangle is degenerate.
    #[inline]
    pub fn from_points(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Option<Self> {
        let normal = Unit::try_new((b - a).cross(&(c - a)), DEFAULT_EPSILON)?;
        Some(Self::from_normal_and_point(normal, a))
    }

    /// Builds a random plane meant to cut through the volume bounded by `aabb`.
    ///
    /// The normal is sampled uniformly on the unit sphere. The point the plane
    /// passes through is sampled uniformly inside `aabb` enlarged by `padding` on
    /// every side, so thin volumes still get cut most of the time. If `aabb` is
    /// invalid (it bounds nothing), the box of half-extent `padding` centered at
    /// the origin is used instead.
    ///
    /// # Panics
    ///
    /// Panics if `padding` is negative.
    pub fn new_random_in_aabb<R: Rng>(rng: &mut R, aabb: &Aabb, padding: Real) -> Self {
        let normal = random_unit_vector(rng);
        let region = if aabb.is_valid() {
            aabb.loosened(padding)
        } else {
            Aabb::from_half_extents(Point::origin(), Vector::repeat(padding))
        };
        let point = Point::new(
            rng.gen_range(region.mins.x..=region.maxs.x),
            rng.gen_range(region.mins.y..=region.maxs.y),
            rng.gen_range(region.mins.z..=region.maxs.z),
        );

        Self::from_normal_and_point(normal, &point)
    }

    /// The point of this plane closest to the origin.
    #[inline]
    pub fn point(&self) -> Point<Real> {
        Point::from(*self.normal * self.bias)
    }

    /// The signed distance between `pt` and this plane.
    ///
    /// Positive on the side the normal points toward.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) - self.bias
    }

    /// Is `pt` on the positive side of this plane (or exactly on it)?
    #[inline]
    pub fn is_on_positive_side(&self, pt: &Point<Real>) -> bool {
        self.signed_distance(pt) >= 0.0
    }

    /// The same plane, with its normal (and hence its sides) flipped.
    #[inline]
    #[must_use]
    pub fn flipped(&self) -> Self {
        Plane {
            normal: -self.normal,
            bias: -self.bias,
        }
    }
}

/// Samples a direction uniformly on the unit sphere.
fn random_unit_vector<R: Rng>(rng: &mut R) -> UnitVector<Real> {
    // Archimedes: the height of a uniform point on the sphere is itself uniform.
    let z: Real = rng.gen_range(-1.0..=1.0);
    let theta: Real = rng.gen_range(0.0..Real::two_pi());
    let r = (1.0 - z * z).max(0.0).sqrt();

    Unit::new_normalize(Vector::new(r * theta.cos(), r * theta.sin(), z))
}
