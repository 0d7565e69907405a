//! Non-persistent geometric queries.
//!
//! This module provides the building blocks of a mesh split:
//!
//! * [`Ray`] and [`details::line_toi_with_plane`] to locate where a triangle edge crosses a plane.
//! * [`clip::clip_triangle_with_plane`] to keep the part of a triangle lying on one side of a plane.
//! * [`split::BoundaryCapper`] to close a cut with cap triangles.
//!
//! The split itself is exposed as [`SurfaceMesh::split`](crate::shape::SurfaceMesh::split).

pub use self::ray::Ray;
pub use self::split::{MeshSplit, SplitStats};

pub mod clip;
mod ray;
pub mod split;

/// Low-level intersection routines used by the clipper.
pub mod details {
    pub use super::ray::line_toi_with_plane;
}
