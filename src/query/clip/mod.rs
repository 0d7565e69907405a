//! Clipping of triangles by a plane.

pub use self::clip_triangle_plane::{clip_triangle_with_plane, TriangleClip};

mod clip_triangle_plane;
