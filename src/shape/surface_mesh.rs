use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, TexCoord, Vector};
use crate::shape::MeshVertex;

/// Indicated an inconsistency while building a surface mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum SurfaceMeshError {
    /// The normal buffer doesn't have one normal per vertex.
    #[error("the mesh has {vertices} vertices but {normals} normals.")]
    NormalCountMismatch {
        /// The number of vertices.
        vertices: usize,
        /// The number of normals.
        normals: usize,
    },
    /// The texture-coordinate buffer doesn't have one entry per vertex.
    #[error("the mesh has {vertices} vertices but {uvs} texture coordinates.")]
    UvCountMismatch {
        /// The number of vertices.
        vertices: usize,
        /// The number of texture coordinates.
        uvs: usize,
    },
    /// A flat index buffer doesn't describe a whole number of triangles.
    #[error("the index buffer of the submesh {submesh} has {len} indices, which is not a multiple of 3.")]
    IndexCountNotMultipleOfThree {
        /// The submesh with the faulty index buffer.
        submesh: usize,
        /// The length of the faulty index buffer.
        len: usize,
    },
    /// A triangle references a vertex that doesn't exist.
    #[error("the triangle {triangle} of the submesh {submesh} references the vertex {index} but the mesh only has {vertices} vertices.")]
    IndexOutOfBounds {
        /// The submesh containing the faulty triangle.
        submesh: usize,
        /// The faulty triangle, relative to its submesh.
        triangle: usize,
        /// The out-of-bounds vertex index.
        index: u32,
        /// The number of vertices of the mesh.
        vertices: usize,
    },
}

/// A triangle mesh with per-vertex normals and texture coordinates, partitioned into submeshes.
///
/// All submeshes share the same vertex, normal and texture-coordinate buffers. Each
/// submesh is a list of triangles, each triangle being three indices into these
/// buffers, in counter-clockwise order when seen from outside of the mesh.
///
/// This is both the input of the fracturing process and the type of every fragment
/// it outputs. A `SurfaceMesh` is immutable once built and always satisfies:
/// - `vertices().len() == normals().len() == uvs().len()`.
/// - Every index of every submesh is smaller than `vertices().len()`.
/// - `aabb()` bounds every vertex (it is invalid if there are no vertices).
///
/// Fragments are built with a [`SurfaceMeshBuilder`](crate::shape::SurfaceMeshBuilder).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurfaceMesh {
    vertices: Vec<Point<Real>>,
    normals: Vec<Vector<Real>>,
    uvs: Vec<TexCoord<Real>>,
    submeshes: Vec<Vec<[u32; 3]>>,
    aabb: Aabb,
}

impl SurfaceMesh {
    /// Creates a new surface mesh from its attribute buffers and its submeshes.
    ///
    /// Fails if the attribute buffers don't have the same length, or if any
    /// triangle references an out-of-bounds vertex.
    pub fn new(
        vertices: Vec<Point<Real>>,
        normals: Vec<Vector<Real>>,
        uvs: Vec<TexCoord<Real>>,
        submeshes: Vec<Vec<[u32; 3]>>,
    ) -> Result<Self, SurfaceMeshError> {
        if normals.len() != vertices.len() {
            return Err(SurfaceMeshError::NormalCountMismatch {
                vertices: vertices.len(),
                normals: normals.len(),
            });
        }

        if uvs.len() != vertices.len() {
            return Err(SurfaceMeshError::UvCountMismatch {
                vertices: vertices.len(),
                uvs: uvs.len(),
            });
        }

        for (submesh, triangles) in submeshes.iter().enumerate() {
            for (triangle, idx) in triangles.iter().enumerate() {
                if let Some(index) = idx.iter().find(|i| **i as usize >= vertices.len()) {
                    return Err(SurfaceMeshError::IndexOutOfBounds {
                        submesh,
                        triangle,
                        index: *index,
                        vertices: vertices.len(),
                    });
                }
            }
        }

        let aabb = Aabb::from_points(vertices.iter().copied());
        Ok(Self::from_parts_unchecked(vertices, normals, uvs, submeshes, aabb))
    }

    /// Creates a new surface mesh from flat index buffers.
    ///
    /// Each consecutive triple of indices of a submesh is one triangle. Fails if
    /// an index buffer length isn't a multiple of 3, or for any of the reasons
    /// listed in [`SurfaceMesh::new`].
    pub fn from_flat_indices(
        vertices: Vec<Point<Real>>,
        normals: Vec<Vector<Real>>,
        uvs: Vec<TexCoord<Real>>,
        submeshes: Vec<Vec<u32>>,
    ) -> Result<Self, SurfaceMeshError> {
        let submeshes = submeshes
            .into_iter()
            .enumerate()
            .map(|(submesh, flat)| {
                if flat.len() % 3 != 0 {
                    return Err(SurfaceMeshError::IndexCountNotMultipleOfThree {
                        submesh,
                        len: flat.len(),
                    });
                }

                Ok(flat.chunks_exact(3).map(|t| [t[0], t[1], t[2]]).collect())
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(vertices, normals, uvs, submeshes)
    }

    /// Assembles a mesh from buffers known to be consistent.
    pub(crate) fn from_parts_unchecked(
        vertices: Vec<Point<Real>>,
        normals: Vec<Vector<Real>>,
        uvs: Vec<TexCoord<Real>>,
        submeshes: Vec<Vec<[u32; 3]>>,
        aabb: Aabb,
    ) -> Self {
        debug_assert_eq!(vertices.len(), normals.len());
        debug_assert_eq!(vertices.len(), uvs.len());

        Self {
            vertices,
            normals,
            uvs,
            submeshes,
            aabb,
        }
    }

    /// The vertex positions of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The vertex normals of this mesh.
    #[inline]
    pub fn normals(&self) -> &[Vector<Real>] {
        &self.normals
    }

    /// The vertex texture coordinates of this mesh.
    #[inline]
    pub fn uvs(&self) -> &[TexCoord<Real>] {
        &self.uvs
    }

    /// The triangles of every submesh.
    #[inline]
    pub fn submeshes(&self) -> &[Vec<[u32; 3]>] {
        &self.submeshes
    }

    /// The triangles of the `i`-th submesh.
    #[inline]
    pub fn submesh(&self, i: usize) -> &[[u32; 3]] {
        &self.submeshes[i]
    }

    /// The flat index buffer of the `i`-th submesh, as expected by most rendering APIs.
    pub fn submesh_flat_indices(&self, i: usize) -> Vec<u32> {
        self.submeshes[i].iter().flatten().copied().collect()
    }

    /// The number of submeshes.
    #[inline]
    pub fn num_submeshes(&self) -> usize {
        self.submeshes.len()
    }

    /// The number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// The total number of triangles, all submeshes included.
    pub fn num_triangles(&self) -> usize {
        self.submeshes.iter().map(|s| s.len()).sum()
    }

    /// Does this mesh have no triangle at all?
    ///
    /// Splitting a mesh with a plane that doesn't cross it yields an empty mesh
    /// on one side. Empty meshes must not be rendered nor given a collider.
    pub fn is_empty(&self) -> bool {
        self.submeshes.iter().all(|s| s.is_empty())
    }

    /// The AABB of this mesh's vertices.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// The `i`-th vertex with all its attributes.
    #[inline]
    pub fn vertex(&self, i: usize) -> MeshVertex {
        MeshVertex::new(self.vertices[i], self.normals[i], self.uvs[i])
    }

    /// The `i`-th triangle of the `submesh`-th submesh.
    #[inline]
    pub fn triangle(&self, submesh: usize, i: usize) -> [MeshVertex; 3] {
        let idx = self.submeshes[submesh][i];
        idx.map(|id| self.vertex(id as usize))
    }

    /// An iterator through the triangles of the `submesh`-th submesh.
    pub fn triangles(&self, submesh: usize) -> impl ExactSizeIterator<Item = [MeshVertex; 3]> + '_ {
        self.submeshes[submesh]
            .iter()
            .map(move |idx| (*idx).map(|id| self.vertex(id as usize)))
    }

    /// The sum of the area-weighted normals of every triangle.
    ///
    /// This is zero (up to rounding errors) for a closed mesh.
    pub fn vector_area(&self) -> Vector<Real> {
        self.submeshes
            .iter()
            .flatten()
            .map(|&idx| {
                let [a, b, c] = idx.map(|id| self.vertices[id as usize]);
                (b - a).cross(&(c - a)) * 0.5
            })
            .sum()
    }

    /// The signed volume enclosed by this mesh.
    ///
    /// Positive for a closed mesh with triangles oriented counter-clockwise when
    /// seen from outside. Meaningless if the mesh isn't closed.
    pub fn signed_volume(&self) -> Real {
        self.submeshes
            .iter()
            .flatten()
            .map(|&idx| {
                let [a, b, c] = idx.map(|id| self.vertices[id as usize].coords);
                a.dot(&b.cross(&c)) / 6.0
            })
            .sum()
    }

    /// Consumes this mesh and returns its vertex, normal, texture-coordinate and submesh buffers.
    pub fn into_parts(
        self,
    ) -> (
        Vec<Point<Real>>,
        Vec<Vector<Real>>,
        Vec<TexCoord<Real>>,
        Vec<Vec<[u32; 3]>>,
    ) {
        (self.vertices, self.normals, self.uvs, self.submeshes)
    }
}
