//! Low-level utilities for procedural mesh generation.

use crate::math::{Point, Real, Vector};

/// Applies in-place a non-uniform scale to a set of points.
pub fn scale(points: &mut [Point<Real>], scale: &Vector<Real>) {
    for p in points {
        p.coords.component_mul_assign(scale);
    }
}

/// Pushes a discretized counterclockwise circle of the XZ plane, at height `y`, to a buffer.
///
/// The first point is on the positive X axis. Consecutive points are `dtheta` radians apart.
pub fn push_circle(radius: Real, nsubdiv: u32, dtheta: Real, y: Real, out: &mut Vec<Point<Real>>) {
    let mut curr_theta: Real = 0.0;

    for _ in 0..nsubdiv {
        out.push(Point::new(
            curr_theta.cos() * radius,
            y,
            curr_theta.sin() * radius,
        ));
        curr_theta += dtheta;
    }
}

/// Creates the triangle faces connecting two circles of `nsubdiv` points, leaving the ring open.
///
/// The last point of each circle is not connected back to the first one.
///
/// # Panics
///
/// Panics if `nsubdiv` is zero.
pub fn push_open_ring_indices(
    base_lower_circle: u32,
    base_upper_circle: u32,
    nsubdiv: u32,
    out: &mut Vec<[u32; 3]>,
) {
    assert!(nsubdiv > 0);

    for i in 0..nsubdiv - 1 {
        let bli = base_lower_circle + i;
        let bui = base_upper_circle + i;
        push_rectangle_indices(bui + 1, bui, bli + 1, bli, out);
    }
}

/// Pushes the two counter-clockwise triangles of the quad `ul, ur, dr, dl`.
#[inline]
pub fn push_rectangle_indices(ul: u32, ur: u32, dl: u32, dr: u32, out: &mut Vec<[u32; 3]>) {
    out.push([ul, dl, dr]);
    out.push([dr, ur, ul]);
}
