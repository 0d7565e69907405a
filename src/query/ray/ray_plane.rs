use crate::math::{Point, Real, Vector};
use crate::query::Ray;
use crate::shape::Plane;

/// Computes the toi of an unbounded line with a plane described by a point and its normal.
///
/// Returns `None` if the line is parallel to the plane.
#[inline]
pub fn line_toi_with_plane(
    plane_point: &Point<Real>,
    plane_normal: &Vector<Real>,
    line_origin: &Point<Real>,
    line_dir: &Vector<Real>,
) -> Option<Real> {
    let dpos = *plane_point - *line_origin;
    let denom = plane_normal.dot(line_dir);

    if relative_eq!(denom, 0.0) {
        None
    } else {
        Some(plane_normal.dot(&dpos) / denom)
    }
}

impl Plane {
    /// Computes the parameter at which the unbounded line supporting `ray` crosses this plane.
    ///
    /// Negative parameters are returned as well. Returns `None` if the ray is
    /// parallel to the plane.
    #[inline]
    pub fn cast_line(&self, ray: &Ray) -> Option<Real> {
        line_toi_with_plane(&self.point(), &self.normal, &ray.origin, &ray.dir)
    }
}
