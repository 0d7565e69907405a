use crate::math::{Point, Real, TexCoord, Vector};

/// A vertex of a [`SurfaceMesh`](crate::shape::SurfaceMesh) with all its attributes.
#[derive(PartialEq, Debug, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshVertex {
    /// The vertex position.
    pub position: Point<Real>,
    /// The vertex normal.
    pub normal: Vector<Real>,
    /// The vertex texture coordinates.
    pub uv: TexCoord<Real>,
}

impl MeshVertex {
    /// Creates a new vertex from its attributes.
    #[inline]
    pub fn new(position: Point<Real>, normal: Vector<Real>, uv: TexCoord<Real>) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }

    /// Linearly interpolates every attribute between `self` (at `t = 0`) and `other` (at `t = 1`).
    ///
    /// The interpolated normal is not renormalized.
    #[inline]
    #[must_use]
    pub fn lerp(&self, other: &Self, t: Real) -> Self {
        Self {
            position: self.position.lerp(&other.position, t),
            normal: self.normal.lerp(&other.normal, t),
            uv: self.uv.lerp(&other.uv, t),
        }
    }

    /// Returns a copy of this vertex with its normal replaced by `normal`.
    #[inline]
    #[must_use]
    pub fn with_normal(mut self, normal: Vector<Real>) -> Self {
        self.normal = normal;
        self
    }
}
