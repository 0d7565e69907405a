//! Definition of the ray used to locate edge/plane intersections.

use crate::math::{Point, Real, Vector};

/// A ray, i.e., a half-infinite line starting at `origin` and extending along `dir`.
///
/// The direction does not need to be normalized. Points along the ray are
/// `origin + dir * t`, so with `dir = b - a` the parameter `t` of a point is
/// directly its fraction of the way from `a` to `b`.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use shatter3d::query::Ray;
/// use nalgebra::{Point3, Vector3};
///
/// let ray = Ray::new(Point3::new(1.0, 0.0, 0.0), Vector3::new(2.0, 0.0, 0.0));
/// assert_eq!(ray.point_at(0.5), Point3::new(2.0, 0.0, 0.0));
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Direction of the ray.
    pub dir: Vector<Real>,
}

impl Ray {
    /// Creates a new ray starting from `origin` and with the direction `dir`.
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Ray {
        Ray { origin, dir }
    }

    /// Creates the ray starting at `a` and reaching `b` at `t = 1`.
    #[inline]
    pub fn from_segment(a: &Point<Real>, b: &Point<Real>) -> Ray {
        Ray::new(*a, b - a)
    }

    /// Computes the point at the given parameter on this ray.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }
}
