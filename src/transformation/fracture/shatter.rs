use crate::shape::SurfaceMesh;
use crate::transformation::fracture::{
    PlaneGenerator, RandomPlanes, ShatterError, ShatterParameters,
};
use rand::Rng;

/// Shatters `mesh` into at most `2^parameters.cascades` fragments cut by random planes.
///
/// The parameters are validated first: on error, nothing is computed. See
/// [`shatter_with`] for details on the cascade.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use shatter3d::transformation::fracture::{shatter, ShatterParameters};
/// use shatter3d::transformation::to_surface_mesh;
/// use nalgebra::Vector3;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let cube = to_surface_mesh::cuboid(&Vector3::repeat(0.5));
/// let params = ShatterParameters::new(3, 2.0).unwrap();
/// let fragments = shatter(&cube, &params, &mut StdRng::seed_from_u64(42)).unwrap();
///
/// assert!(fragments.len() <= 8);
/// # }
/// ```
pub fn shatter<R: Rng>(
    mesh: &SurfaceMesh,
    parameters: &ShatterParameters,
    rng: &mut R,
) -> Result<Vec<SurfaceMesh>, ShatterError> {
    parameters.validate()?;
    let mut planes = RandomPlanes::new(rng, parameters.plane_padding);
    Ok(shatter_with(mesh, parameters.cascades, &mut planes))
}

/// Splits `mesh` by `cascades` generations of planes picked by `generator`.
///
/// Each generation splits every fragment of the previous one in two, using one
/// plane per fragment, and replaces the whole fragment list by the resulting
/// `(negative, positive)` pairs. Fragments that are already empty are carried to
/// the next generation as-is. The result therefore has at most `2^cascades`
/// fragments, some of which may be empty. With `cascades == 0`, the result is a
/// copy of `mesh`.
///
/// The number of cascades is not capped here.
pub fn shatter_with<G: PlaneGenerator + ?Sized>(
    mesh: &SurfaceMesh,
    cascades: u32,
    generator: &mut G,
) -> Vec<SurfaceMesh> {
    let mut fragments = vec![mesh.clone()];

    for level in 0..cascades {
        let mut next = Vec::with_capacity(fragments.len() * 2);
        let mut num_empty = 0;

        for fragment in fragments {
            if fragment.is_empty() {
                num_empty += 1;
                next.push(fragment);
                continue;
            }

            let plane = generator.cutting_plane(&fragment);
            let (negative, positive) = fragment.split(&plane);
            next.push(negative);
            next.push(positive);
        }

        log::debug!(
            "Cascade {}/{}: {} fragments ({} empty fragments carried over).",
            level + 1,
            cascades,
            next.len(),
            num_empty
        );
        fragments = next;
    }

    fragments
}
