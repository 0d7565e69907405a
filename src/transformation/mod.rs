//! Procedural mesh generation and mesh fracturing.

pub mod fracture;
pub mod to_surface_mesh;
pub(crate) mod utils;
