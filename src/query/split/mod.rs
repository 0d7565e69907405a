//! Splitting a surface mesh into two closed fragments.

pub use self::boundary_capper::BoundaryCapper;
pub use self::split_surface_mesh::{MeshSplit, SplitStats};

mod boundary_capper;
mod split_surface_mesh;
