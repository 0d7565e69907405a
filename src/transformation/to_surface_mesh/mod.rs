//! Procedural closed meshes, ready to be shattered.

pub use self::ball_to_surface_mesh::ball;
pub use self::cuboid_to_surface_mesh::cuboid;

mod ball_to_surface_mesh;
mod cuboid_to_surface_mesh;
