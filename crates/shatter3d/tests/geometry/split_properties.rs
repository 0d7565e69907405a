use na::Vector3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shatter3d::shape::{Plane, SurfaceMesh};
use shatter3d::transformation::to_surface_mesh;

fn random_planes(mesh: &SurfaceMesh, seed: u64, count: usize) -> Vec<Plane> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Plane::new_random_in_aabb(&mut rng, mesh.aabb(), 0.0))
        .collect()
}

fn is_cap(mesh: &SurfaceMesh, idx: &[u32; 3], cap_normal: &Vector3<f32>) -> bool {
    idx.iter().all(|i| mesh.normals()[*i as usize] == *cap_normal)
}

#[test]
fn split_is_complete() {
    let ball = to_surface_mesh::ball(1.0, 24, 16);

    for plane in random_planes(&ball, 0, 20) {
        let split = ball.split_with_stats(&plane);

        // An uncut triangle lands on one side, a cut one becomes three triangles.
        assert_eq!(
            split.negative.num_triangles() + split.positive.num_triangles()
                - split.stats.num_caps(),
            ball.num_triangles() + 2 * split.stats.num_cut_triangles
        );
    }
}

#[test]
fn fragments_keep_attributes_aligned() {
    let ball = to_surface_mesh::ball(1.0, 12, 8);

    for plane in random_planes(&ball, 1, 10) {
        let (negative, positive) = ball.split(&plane);

        for fragment in [&negative, &positive] {
            assert_eq!(fragment.normals().len(), fragment.num_vertices());
            assert_eq!(fragment.uvs().len(), fragment.num_vertices());
            assert_eq!(fragment.num_submeshes(), 1);
            assert_eq!(fragment.num_vertices(), 3 * fragment.num_triangles());

            for idx in fragment.submesh(0) {
                assert!(idx.iter().all(|i| (*i as usize) < fragment.num_vertices()));
            }

            for p in fragment.vertices() {
                assert!(fragment.aabb().contains_local_point(p));
            }
        }
    }
}

#[test]
fn split_conserves_geometry_and_closes_both_sides() {
    let ball = to_surface_mesh::ball(2.0, 24, 16);
    let volume = ball.signed_volume();

    for plane in random_planes(&ball, 2, 20) {
        let (negative, positive) = ball.split(&plane);

        for v in negative.vertices() {
            assert!(plane.signed_distance(v) <= 1.0e-4);
        }
        for v in positive.vertices() {
            assert!(plane.signed_distance(v) >= -1.0e-4);
        }

        // A plane crossing a convex mesh leaves one convex cross-section, which the
        // caps close exactly.
        assert_relative_eq!(negative.vector_area(), Vector3::zeros(), epsilon = 1.0e-3);
        assert_relative_eq!(positive.vector_area(), Vector3::zeros(), epsilon = 1.0e-3);
        assert_relative_eq!(
            negative.signed_volume() + positive.signed_volume(),
            volume,
            epsilon = 1.0e-3
        );
    }
}

#[test]
fn split_preserves_winding() {
    let ball = to_surface_mesh::ball(1.0, 16, 12);

    for plane in random_planes(&ball, 3, 10) {
        let (negative, positive) = ball.split(&plane);

        for (fragment, cap_normal) in [(&negative, *plane.normal), (&positive, -*plane.normal)] {
            for idx in fragment.submesh(0) {
                let [a, b, c] = idx.map(|i| fragment.vertices()[i as usize]);
                let face_normal = (b - a).cross(&(c - a));

                if is_cap(fragment, idx, &cap_normal) {
                    assert!(face_normal.dot(&cap_normal) >= -1.0e-6);
                } else {
                    // Away from the center, like the source triangles.
                    let outward = (a.coords + b.coords + c.coords) / 3.0;
                    assert!(face_normal.dot(&outward) >= -1.0e-6);
                }
            }
        }
    }
}

#[test]
fn split_is_deterministic() {
    let ball = to_surface_mesh::ball(1.0, 12, 8);
    let plane = random_planes(&ball, 4, 1)[0];

    assert_eq!(ball.split(&plane), ball.split(&plane));
}
