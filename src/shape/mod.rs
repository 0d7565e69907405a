//! Shapes and mesh types supported by shatter3d.

pub use self::mesh_vertex::MeshVertex;
pub use self::plane::Plane;
pub use self::surface_mesh::{SurfaceMesh, SurfaceMeshError};
pub use self::surface_mesh_builder::SurfaceMeshBuilder;

mod mesh_vertex;
mod plane;
mod surface_mesh;
mod surface_mesh_builder;
