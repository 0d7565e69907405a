use na::{Point3, Vector3};
use shatter3d::shape::{Plane, SurfaceMesh};
use shatter3d::transformation::to_surface_mesh;

fn unit_cube() -> SurfaceMesh {
    to_surface_mesh::cuboid(&Vector3::repeat(0.5))
}

fn cap_triangles(mesh: &SurfaceMesh, cap_normal: &Vector3<f32>) -> Vec<[usize; 3]> {
    mesh.submesh(0)
        .iter()
        .map(|idx| idx.map(|i| i as usize))
        .filter(|idx| idx.iter().all(|i| mesh.normals()[*i] == *cap_normal))
        .collect()
}

#[test]
fn unit_cube_split_by_the_yz_plane() {
    let cube = unit_cube();
    let plane = Plane::from_normal_and_point(Vector3::x_axis(), &Point3::origin());
    let split = cube.split_with_stats(&plane);

    // The four triangles of the ±x faces are untouched, the eight others are cut.
    assert_eq!(split.stats.num_cut_triangles, 8);
    // Eight boundary segments per side, the first one only seeds the fan.
    assert_eq!(split.stats.num_negative_caps, 7);
    assert_eq!(split.stats.num_positive_caps, 7);
    assert_eq!(split.negative.num_triangles(), 21);
    assert_eq!(split.positive.num_triangles(), 21);

    assert_relative_eq!(split.negative.aabb().mins, Point3::new(-0.5, -0.5, -0.5));
    assert_relative_eq!(split.negative.aabb().maxs, Point3::new(0.0, 0.5, 0.5));
    assert_relative_eq!(split.positive.aabb().mins, Point3::new(0.0, -0.5, -0.5));
    assert_relative_eq!(split.positive.aabb().maxs, Point3::new(0.5, 0.5, 0.5));

    for (fragment, cap_normal) in [
        (&split.negative, Vector3::x()),
        (&split.positive, -Vector3::x()),
    ] {
        // Both halves are closed, consistently oriented, boxes.
        assert_relative_eq!(fragment.vector_area(), Vector3::zeros(), epsilon = 1.0e-5);
        assert_relative_eq!(fragment.signed_volume(), 0.5, epsilon = 1.0e-5);

        let caps = cap_triangles(fragment, &cap_normal);
        assert_eq!(caps.len(), 7);

        let mut cap_area = Vector3::zeros();
        for [a, b, c] in caps {
            let [a, b, c] = [a, b, c].map(|i| fragment.vertices()[i]);
            assert_relative_eq!(a.x, 0.0, epsilon = 1.0e-6);
            assert_relative_eq!(b.x, 0.0, epsilon = 1.0e-6);
            assert_relative_eq!(c.x, 0.0, epsilon = 1.0e-6);
            cap_area += (b - a).cross(&(c - a)) * 0.5;
        }

        // The caps exactly cover the cross-section, facing away from the kept side.
        assert_relative_eq!(cap_area, cap_normal, epsilon = 1.0e-5);
    }
}

#[test]
fn plane_outside_of_the_cube_yields_one_empty_fragment() {
    let cube = unit_cube();
    let plane = Plane::from_normal_and_point(Vector3::y_axis(), &Point3::new(0.0, 10.0, 0.0));
    let split = cube.split_with_stats(&plane);

    assert_eq!(split.stats.num_cut_triangles, 0);
    assert_eq!(split.stats.num_caps(), 0);
    assert!(split.positive.is_empty());
    assert_eq!(split.positive.num_submeshes(), 1);
    assert!(!split.positive.aabb().is_valid());

    assert_eq!(split.negative.num_triangles(), cube.num_triangles());
    assert_eq!(split.negative.aabb(), cube.aabb());
    for i in 0..cube.num_triangles() {
        assert_eq!(split.negative.triangle(0, i), cube.triangle(0, i));
    }

    // Same thing with the plane on the other side.
    let (negative, positive) = cube.split(&plane.flipped());
    assert!(negative.is_empty());
    assert_eq!(positive.num_triangles(), cube.num_triangles());
}

#[test]
fn cut_vertices_interpolate_normals_and_uvs() {
    let cube = unit_cube();
    let plane = Plane::from_normal_and_point(Vector3::z_axis(), &Point3::new(0.0, 0.0, 0.25));
    let (negative, _) = cube.split(&plane);

    for (i, p) in negative.vertices().iter().enumerate() {
        if relative_eq!(p.z, 0.25, epsilon = 1.0e-6) && negative.normals()[i] != Vector3::z() {
            // A vertex created on a cut edge. The cube normals are the normalized corners and
            // its uvs the planar projection on XY, both affine along any edge.
            let uv = negative.uvs()[i];
            assert_relative_eq!(uv.x, p.x + 0.5, epsilon = 1.0e-5);
            assert_relative_eq!(uv.y, p.y + 0.5, epsilon = 1.0e-5);
            assert!(negative.normals()[i].norm() <= 1.0 + 1.0e-5);
        }
    }
}
