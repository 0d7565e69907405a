extern crate nalgebra as na;

use na::{Isometry3, Vector3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shatter3d::transformation::fracture::{
    FragmentSpawn, ObjectPose, ShatterParameters, Shatterable,
};
use shatter3d::transformation::to_surface_mesh;

fn main() {
    /*
     * Initialize the object to shatter.
     */
    let cube = to_surface_mesh::cuboid(&Vector3::new(1.0, 0.5, 0.5));
    let pose = ObjectPose::from_isometry(Isometry3::translation(0.0, 3.0, 0.0));
    let params = ShatterParameters::new(3, 5.0).unwrap();
    let object = Shatterable::new(cube, pose, params).unwrap();

    /*
     * Shatter it, printing every fragment instead of spawning a rigid body.
     */
    let mut rng = StdRng::seed_from_u64(42);
    let mut fragments: Vec<FragmentSpawn> = Vec::new();
    let count = object.shatter_now(&mut rng, &mut fragments);

    println!("{} fragments:", count);

    for (i, fragment) in fragments.iter().enumerate() {
        let aabb = fragment.mesh.aabb();
        println!(
            "  #{}: {} triangles, volume {:.3}, bounds [{:.2}, {:.2}, {:.2}] -> [{:.2}, {:.2}, {:.2}], impulse {:?}",
            i,
            fragment.mesh.num_triangles(),
            fragment.mesh.signed_volume(),
            aabb.mins.x,
            aabb.mins.y,
            aabb.mins.z,
            aabb.maxs.x,
            aabb.maxs.y,
            aabb.maxs.z,
            fragment.impulse.as_slice()
        );
    }

    let total: f32 = fragments.iter().map(|f| f.mesh.signed_volume()).sum();
    println!("Total volume: {:.3}", total);
}
