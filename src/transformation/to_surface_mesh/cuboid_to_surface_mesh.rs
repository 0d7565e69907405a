use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, TexCoord, Vector};
use crate::shape::SurfaceMesh;
use crate::transformation::utils;

/// Discretizes the boundary of a cuboid centered at the origin as a single-submesh surface mesh.
///
/// The mesh has 8 vertices shared by 12 counter-clockwise triangles. Each vertex
/// normal points away from the center (smooth shading), and texture coordinates
/// are the planar projection of the vertices on the XY plane, mapped to `[0, 1]`.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use shatter3d::transformation::to_surface_mesh;
/// use nalgebra::Vector3;
///
/// let cube = to_surface_mesh::cuboid(&Vector3::new(0.5, 1.0, 2.0));
/// assert_eq!(cube.num_vertices(), 8);
/// assert_eq!(cube.num_triangles(), 12);
/// assert!((cube.signed_volume() - 8.0).abs() < 1.0e-5);
/// # }
/// ```
pub fn cuboid(half_extents: &Vector<Real>) -> SurfaceMesh {
    let (mut vertices, indices) = unit_cuboid();
    utils::scale(&mut vertices, &(half_extents * 2.0));

    let normals = vertices
        .iter()
        .map(|p| p.coords.try_normalize(0.0).unwrap_or_else(Vector::y))
        .collect();
    let uvs = vertices
        .iter()
        .map(|p| {
            TexCoord::new(
                p.x / (half_extents.x * 2.0) + 0.5,
                p.y / (half_extents.y * 2.0) + 0.5,
            )
        })
        .collect();
    let aabb = Aabb::from_half_extents(Point::origin(), *half_extents);

    SurfaceMesh::from_parts_unchecked(vertices, normals, uvs, vec![indices], aabb)
}

/// The cuboid centered at the origin with half extents set to 0.5.
fn unit_cuboid() -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
    let coords = vec![
        Point::new(-0.5, -0.5, 0.5),
        Point::new(-0.5, -0.5, -0.5),
        Point::new(0.5, -0.5, -0.5),
        Point::new(0.5, -0.5, 0.5),
        Point::new(-0.5, 0.5, 0.5),
        Point::new(-0.5, 0.5, -0.5),
        Point::new(0.5, 0.5, -0.5),
        Point::new(0.5, 0.5, 0.5),
    ];

    let faces = vec![
        [4, 5, 0],
        [5, 1, 0],
        [5, 6, 1],
        [6, 2, 1],
        [6, 7, 3],
        [2, 6, 3],
        [7, 4, 0],
        [3, 7, 0],
        [0, 1, 2],
        [3, 0, 2],
        [7, 6, 5],
        [4, 7, 5],
    ];

    (coords, faces)
}
