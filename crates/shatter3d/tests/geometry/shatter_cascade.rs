use na::{Point3, Unit, Vector3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shatter3d::shape::{Plane, SurfaceMesh};
use shatter3d::transformation::fracture::{
    shatter, shatter_with, ShatterError, ShatterParameters, ShatterParametersError, MAX_CASCADES,
};
use shatter3d::transformation::to_surface_mesh;

/// Planes through the vertex centroid of each fragment, cycling through a few normals.
///
/// The centroid lies strictly inside any convex fragment so every plane cuts it in two.
fn centroid_planes() -> impl FnMut(&SurfaceMesh) -> Plane {
    let normals = [
        Vector3::new(1.0, 0.3, 0.1),
        Vector3::new(0.2, 1.0, 0.4),
        Vector3::new(0.3, 0.1, 1.0),
        Vector3::new(1.0, -1.0, 0.5),
    ];
    let mut k = 0;

    move |fragment: &SurfaceMesh| {
        let centroid = fragment
            .vertices()
            .iter()
            .fold(Vector3::zeros(), |acc, p| acc + p.coords)
            / fragment.num_vertices() as f32;
        let normal = Unit::new_normalize(normals[k % normals.len()]);
        k += 1;
        Plane::from_normal_and_point(normal, &Point3::from(centroid))
    }
}

#[test]
fn centroid_planes_double_the_fragments_at_each_cascade() {
    let cube = to_surface_mesh::cuboid(&Vector3::repeat(0.5));
    let ball = to_surface_mesh::ball(1.0, 16, 12);

    for mesh in [&cube, &ball] {
        for cascades in 0..=4 {
            let fragments = shatter_with(mesh, cascades, &mut centroid_planes());

            assert_eq!(fragments.len(), 1usize << cascades);
            assert!(fragments.iter().all(|f| !f.is_empty()));

            let volume: f32 = fragments.iter().map(|f| f.signed_volume()).sum();
            assert_relative_eq!(volume, mesh.signed_volume(), epsilon = 1.0e-3);

            for fragment in &fragments {
                assert_relative_eq!(fragment.vector_area(), Vector3::zeros(), epsilon = 1.0e-3);
            }
        }
    }
}

#[test]
fn random_cascades_never_exceed_the_fragment_bound() {
    let cube = to_surface_mesh::cuboid(&Vector3::repeat(0.5));
    let mut rng = StdRng::seed_from_u64(1234);

    for cascades in 0..=5 {
        let params = ShatterParameters::new(cascades, 1.0).unwrap();
        let fragments = shatter(&cube, &params, &mut rng).unwrap();

        assert!(!fragments.is_empty());
        assert!(fragments.len() <= params.max_fragments());
        assert!(fragments.iter().any(|f| !f.is_empty()));

        let num_triangles: usize = fragments.iter().map(|f| f.num_triangles()).sum();
        assert!(num_triangles >= cube.num_triangles());
    }
}

#[test]
fn seeded_shatters_are_reproducible() {
    let ball = to_surface_mesh::ball(1.0, 12, 8);
    let params = ShatterParameters::new(3, 1.0).unwrap();

    let fragments1 = shatter(&ball, &params, &mut StdRng::seed_from_u64(99)).unwrap();
    let fragments2 = shatter(&ball, &params, &mut StdRng::seed_from_u64(99)).unwrap();
    assert_eq!(fragments1, fragments2);
}

#[test]
fn invalid_parameters_produce_no_fragments() {
    let cube = to_surface_mesh::cuboid(&Vector3::repeat(0.5));
    let mut rng = StdRng::seed_from_u64(0);

    let too_many = ShatterParameters {
        cascades: MAX_CASCADES + 1,
        ..Default::default()
    };
    assert_eq!(
        shatter(&cube, &too_many, &mut rng),
        Err(ShatterError::InvalidParameters(
            ShatterParametersError::TooManyCascades {
                requested: MAX_CASCADES + 1,
                max: MAX_CASCADES,
            }
        ))
    );

    let negative_force = ShatterParameters {
        explode_force: -1.0,
        ..Default::default()
    };
    assert!(matches!(
        shatter(&cube, &negative_force, &mut rng),
        Err(ShatterError::InvalidParameters(
            ShatterParametersError::InvalidExplodeForce(_)
        ))
    ));
}

#[test]
fn submeshes_are_split_independently() {
    // Two disjoint cubes, one per submesh.
    let (mut vertices, mut normals, mut uvs, mut submeshes) =
        to_surface_mesh::cuboid(&Vector3::repeat(0.5)).into_parts();
    let (vertices2, normals2, uvs2, submeshes2) =
        to_surface_mesh::cuboid(&Vector3::repeat(0.5)).into_parts();
    let base = vertices.len() as u32;

    vertices.extend(vertices2.iter().map(|p| p + Vector3::new(0.0, 3.0, 0.0)));
    normals.extend(normals2);
    uvs.extend(uvs2);
    submeshes.push(
        submeshes2[0]
            .iter()
            .map(|idx| idx.map(|i| i + base))
            .collect(),
    );

    let mesh = SurfaceMesh::new(vertices, normals, uvs, submeshes).unwrap();
    let plane = Plane::from_normal_and_point(Vector3::x_axis(), &Point3::origin());
    let split = mesh.split_with_stats(&plane);

    assert_eq!(split.stats.num_cut_triangles, 16);
    assert_eq!(split.stats.num_negative_caps, 14);
    assert_eq!(split.stats.num_positive_caps, 14);

    for fragment in [&split.negative, &split.positive] {
        assert_eq!(fragment.num_submeshes(), 2);
        assert_eq!(fragment.submesh(0).len(), 21);
        assert_eq!(fragment.submesh(1).len(), 21);
        assert_relative_eq!(fragment.vector_area(), Vector3::zeros(), epsilon = 1.0e-5);
        assert_relative_eq!(fragment.signed_volume(), 1.0, epsilon = 1.0e-5);

        // Every triangle stays in the submesh of the cube it comes from.
        for (submesh, (min_y, max_y)) in [(-0.5, 0.5), (2.5, 3.5)].into_iter().enumerate() {
            for idx in fragment.submesh(submesh) {
                for i in idx {
                    let y = fragment.vertices()[*i as usize].y;
                    assert!(y >= min_y - 1.0e-5 && y <= max_y + 1.0e-5);
                }
            }
        }
    }
}
