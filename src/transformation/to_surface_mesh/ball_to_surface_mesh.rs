use crate::bounding_volume::Aabb;
use crate::math::{Real, TexCoord, Vector};
use crate::shape::SurfaceMesh;
use crate::transformation::utils;
use na::RealField;

/// Discretizes the boundary of a ball centered at the origin as a single-submesh surface mesh.
///
/// The ball is a UV sphere made of `nphi_subdiv + 1` rings of `ntheta_subdiv + 1`
/// vertices each, from the south pole to the north pole. The first and last vertex
/// of each ring coincide so the texture coordinates can wrap around: `u` follows the
/// longitude and `v` the latitude, both in `[0, 1]`. Vertex normals point away from
/// the center.
///
/// # Panics
///
/// Panics if `ntheta_subdiv < 3` or `nphi_subdiv < 2`.
pub fn ball(radius: Real, ntheta_subdiv: u32, nphi_subdiv: u32) -> SurfaceMesh {
    assert!(ntheta_subdiv >= 3 && nphi_subdiv >= 2);

    let pi = Real::pi();
    let two_pi = Real::two_pi();
    let pi_two = Real::frac_pi_2();
    let duvtheta = 1.0 / (ntheta_subdiv as Real); // step of uv.x coordinates.
    let duvphi = 1.0 / (nphi_subdiv as Real); // step of uv.y coordinates.
    let dtheta = two_pi * duvtheta;
    let dphi = pi * duvphi;

    let mut coords = Vec::new();
    let mut uvs = Vec::new();
    let mut curr_phi = -pi_two;

    for j in 0..nphi_subdiv + 1 {
        utils::push_circle(
            curr_phi.cos(),
            ntheta_subdiv + 1,
            dtheta,
            curr_phi.sin(),
            &mut coords,
        );
        uvs.extend(
            (0..ntheta_subdiv + 1)
                .map(|i| TexCoord::new(i as Real * duvtheta, j as Real * duvphi)),
        );
        curr_phi += dphi;
    }

    // index buffer
    let mut idx = Vec::new();

    for i in 0..nphi_subdiv {
        let bottom = i * (ntheta_subdiv + 1);
        let up = bottom + (ntheta_subdiv + 1);
        utils::push_open_ring_indices(bottom, up, ntheta_subdiv + 1, &mut idx);
    }

    // The unit sphere's vertices are their own normals.
    let normals = coords.iter().map(|p| p.coords).collect();
    utils::scale(&mut coords, &Vector::repeat(radius));
    let aabb = Aabb::from_points(coords.iter().copied());

    SurfaceMesh::from_parts_unchecked(coords, normals, uvs, vec![idx], aabb)
}
