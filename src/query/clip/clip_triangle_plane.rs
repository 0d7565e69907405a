use crate::query::Ray;
use crate::shape::{MeshVertex, Plane};
use arrayvec::ArrayVec;

/// The part of a triangle lying on one side of a plane.
#[derive(Clone, Debug, PartialEq)]
pub enum TriangleClip {
    /// The whole triangle lies on the discarded side.
    Discarded,
    /// The whole triangle lies on the kept side.
    Kept,
    /// The plane crosses the triangle.
    Cut {
        /// The one or two triangles covering the kept part, wound like the input triangle.
        triangles: ArrayVec<[MeshVertex; 3], 2>,
        /// The segment where the plane crosses the triangle.
        ///
        /// Both endpoints carry the normal of the cap closing the kept side, i.e., the
        /// plane normal pointing away from the kept half-space.
        boundary: [MeshVertex; 2],
    },
}

/// Keeps the part of `triangle` lying on one side of `plane`.
///
/// If `keep_positive` is `true`, the part on the positive side of the plane (the
/// side the normal points toward, plane included) is kept. Otherwise the part on
/// the strictly negative side is kept.
///
/// New vertices are placed where the triangle edges cross the plane. Their normal
/// and texture coordinates are linearly interpolated along the edge.
pub fn clip_triangle_with_plane(
    triangle: &[MeshVertex; 3],
    plane: &Plane,
    keep_positive: bool,
) -> TriangleClip {
    let kept = triangle.map(|v| plane.is_on_positive_side(&v.position) == keep_positive);

    match kept.iter().filter(|k| **k).count() {
        0 => return TriangleClip::Discarded,
        3 => return TriangleClip::Kept,
        _ => {}
    }

    // The vertex alone on its side.
    let single = if kept[1] == kept[2] {
        0
    } else if kept[0] == kept[2] {
        1
    } else {
        2
    };
    let next = (single + 1) % 3;
    let prev = (single + 2) % 3;

    let vs = &triangle[single];
    let vn = &triangle[next];
    let vp = &triangle[prev];

    let cap_normal = if keep_positive {
        -*plane.normal
    } else {
        *plane.normal
    };
    let i1 = edge_crossing(vs, vn, plane);
    let i2 = edge_crossing(vs, vp, plane);

    let mut triangles = ArrayVec::new();

    if kept[single] {
        triangles.push([*vs, i1, i2]);
    } else {
        triangles.push([i1, *vn, *vp]);
        triangles.push([i1, *vp, i2]);
    }

    TriangleClip::Cut {
        triangles,
        boundary: [i1.with_normal(cap_normal), i2.with_normal(cap_normal)],
    }
}

fn edge_crossing(a: &MeshVertex, b: &MeshVertex, plane: &Plane) -> MeshVertex {
    let ray = Ray::from_segment(&a.position, &b.position);
    let t = plane.cast_line(&ray).unwrap_or_else(|| {
        log::debug!("Cut edge parallel to the cutting plane, snapping to its first endpoint.");
        0.0
    });

    let mut result = a.lerp(b, t);
    result.position = ray.point_at(t);
    result
}
