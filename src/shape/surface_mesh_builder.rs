use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, TexCoord, Vector};
use crate::shape::{MeshVertex, SurfaceMesh};

/// Growable buffers accumulating the triangles of a fragment.
///
/// Vertices are never shared between triangles: every pushed triangle appends
/// three new vertices (with their own normal and texture coordinates), so the
/// attributes of a vertex can differ from one triangle to another. The AABB of
/// all the pushed vertices is maintained incrementally.
///
/// Once every triangle has been pushed, [`SurfaceMeshBuilder::build`] freezes the
/// buffers into an immutable [`SurfaceMesh`].
#[derive(Clone, Debug)]
pub struct SurfaceMeshBuilder {
    vertices: Vec<Point<Real>>,
    normals: Vec<Vector<Real>>,
    uvs: Vec<TexCoord<Real>>,
    submeshes: Vec<Vec<[u32; 3]>>,
    aabb: Aabb,
}

impl Default for SurfaceMeshBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceMeshBuilder {
    /// Creates an empty builder without any submesh.
    pub fn new() -> Self {
        Self::with_submeshes(0)
    }

    /// Creates an empty builder with `num_submeshes` empty submeshes.
    ///
    /// Submeshes that never receive any triangle are kept (empty) in the built
    /// mesh, so submesh indices stay aligned with the source mesh.
    pub fn with_submeshes(num_submeshes: usize) -> Self {
        Self {
            vertices: Vec::new(),
            normals: Vec::new(),
            uvs: Vec::new(),
            submeshes: vec![Vec::new(); num_submeshes],
            aabb: Aabb::new_invalid(),
        }
    }

    /// Appends a triangle to the `submesh`-th submesh.
    ///
    /// The submesh list grows if `submesh` doesn't exist yet. The vertices are
    /// appended in the given order, which defines the triangle's winding.
    pub fn push_triangle(&mut self, submesh: usize, triangle: &[MeshVertex; 3]) {
        if submesh >= self.submeshes.len() {
            self.submeshes.resize_with(submesh + 1, Vec::new);
        }

        let base = self.vertices.len() as u32;

        for vertex in triangle {
            self.vertices.push(vertex.position);
            self.normals.push(vertex.normal);
            self.uvs.push(vertex.uv);
            self.aabb.take_point(vertex.position);
        }

        self.submeshes[submesh].push([base, base + 1, base + 2]);
    }

    /// The number of triangles pushed so far, all submeshes included.
    pub fn num_triangles(&self) -> usize {
        self.submeshes.iter().map(|s| s.len()).sum()
    }

    /// The number of vertices pushed so far.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// The AABB of the vertices pushed so far.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// Copies the accumulated buffers into a new immutable mesh.
    ///
    /// The builder is left untouched: building twice yields two identical meshes.
    pub fn build(&self) -> SurfaceMesh {
        SurfaceMesh::from_parts_unchecked(
            self.vertices.clone(),
            self.normals.clone(),
            self.uvs.clone(),
            self.submeshes.clone(),
            self.aabb,
        )
    }

    /// Moves the accumulated buffers into a new immutable mesh.
    pub fn into_surface_mesh(self) -> SurfaceMesh {
        SurfaceMesh::from_parts_unchecked(
            self.vertices,
            self.normals,
            self.uvs,
            self.submeshes,
            self.aabb,
        )
    }
}
