use crate::query::clip::{clip_triangle_with_plane, TriangleClip};
use crate::query::split::BoundaryCapper;
use crate::shape::{MeshVertex, Plane, SurfaceMesh, SurfaceMeshBuilder};

/// The two fragments resulting from the split of a surface mesh by a plane.
#[derive(Clone, Debug)]
pub struct MeshSplit {
    /// The part of the mesh on the strictly negative side of the plane, capped.
    pub negative: SurfaceMesh,
    /// The part of the mesh on the positive side of the plane (plane included), capped.
    pub positive: SurfaceMesh,
    /// Counters describing the split.
    pub stats: SplitStats,
}

/// Counters gathered while splitting a surface mesh.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SplitStats {
    /// Number of source triangles crossed by the plane.
    pub num_cut_triangles: usize,
    /// Number of cap triangles added to the negative fragment.
    pub num_negative_caps: usize,
    /// Number of cap triangles added to the positive fragment.
    pub num_positive_caps: usize,
}

impl SplitStats {
    /// Total number of cap triangles, both fragments included.
    pub fn num_caps(&self) -> usize {
        self.num_negative_caps + self.num_positive_caps
    }
}

struct SideAccumulator {
    keep_positive: bool,
    builder: SurfaceMeshBuilder,
    capper: BoundaryCapper,
    num_caps: usize,
}

impl SideAccumulator {
    fn new(plane: &Plane, keep_positive: bool, num_submeshes: usize) -> Self {
        let cap_normal = if keep_positive {
            -*plane.normal
        } else {
            *plane.normal
        };

        Self {
            keep_positive,
            builder: SurfaceMeshBuilder::with_submeshes(num_submeshes),
            capper: BoundaryCapper::new(cap_normal),
            num_caps: 0,
        }
    }

    /// Clips `triangle` and pushes the kept part and its cap. Returns `true` if the triangle was cut.
    fn push(&mut self, submesh: usize, triangle: &[MeshVertex; 3], plane: &Plane) -> bool {
        match clip_triangle_with_plane(triangle, plane, self.keep_positive) {
            TriangleClip::Discarded => false,
            TriangleClip::Kept => {
                self.builder.push_triangle(submesh, triangle);
                false
            }
            TriangleClip::Cut {
                triangles,
                boundary,
            } => {
                for tri in &triangles {
                    self.builder.push_triangle(submesh, tri);
                }

                if let Some(cap) = self.capper.add_segment(&boundary) {
                    self.builder.push_triangle(submesh, &cap);
                    self.num_caps += 1;
                }

                true
            }
        }
    }

    fn end_submesh(&mut self, submesh: usize) {
        log::trace!(
            "Submesh {} ({} side): {} boundary segments.",
            submesh,
            if self.keep_positive {
                "positive"
            } else {
                "negative"
            },
            self.capper.num_segments()
        );
        self.capper.reset();
    }
}

impl SurfaceMesh {
    /// Splits this mesh by `plane`, returning the `(negative, positive)` fragments.
    ///
    /// See [`SurfaceMesh::split_with_stats`] for details.
    pub fn split(&self, plane: &Plane) -> (SurfaceMesh, SurfaceMesh) {
        let split = self.split_with_stats(plane);
        (split.negative, split.positive)
    }

    /// Splits this mesh by `plane` into two capped fragments.
    ///
    /// Every triangle is clipped against both sides of the plane. Triangles lying
    /// entirely on one side are copied to that side's fragment; triangles crossed by
    /// the plane are replaced by their clipped parts on both sides, with positions,
    /// normals and texture coordinates interpolated along the cut edges. Each side
    /// closes its cut with cap triangles facing away from the kept half-space (the
    /// positive fragment's cap faces `-plane.normal`).
    ///
    /// Both fragments have the same number of submeshes as `self`; triangles (caps
    /// included) stay in the submesh of the triangle they come from. One of the
    /// fragments is empty if the plane doesn't cross the mesh.
    ///
    /// # Example
    ///
    /// ```rust
    /// # #[cfg(feature = "f32")] {
    /// use shatter3d::shape::Plane;
    /// use shatter3d::transformation::to_surface_mesh;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let cube = to_surface_mesh::cuboid(&Vector3::repeat(0.5));
    /// let plane = Plane::from_normal_and_point(Vector3::x_axis(), &Point3::origin());
    /// let split = cube.split_with_stats(&plane);
    ///
    /// assert_eq!(split.stats.num_cut_triangles, 8);
    /// assert!(split.negative.aabb().maxs.x <= 1.0e-6);
    /// assert!(split.positive.aabb().mins.x >= -1.0e-6);
    /// # }
    /// ```
    pub fn split_with_stats(&self, plane: &Plane) -> MeshSplit {
        let num_submeshes = self.num_submeshes();
        let mut negative = SideAccumulator::new(plane, false, num_submeshes);
        let mut positive = SideAccumulator::new(plane, true, num_submeshes);
        let mut num_cut_triangles = 0;

        for submesh in 0..num_submeshes {
            for triangle in self.triangles(submesh) {
                let cut = positive.push(submesh, &triangle, plane);
                let negative_cut = negative.push(submesh, &triangle, plane);
                debug_assert_eq!(
                    cut, negative_cut,
                    "Both sides must agree on whether a triangle is cut."
                );

                if cut {
                    num_cut_triangles += 1;
                }
            }

            positive.end_submesh(submesh);
            negative.end_submesh(submesh);
        }

        let stats = SplitStats {
            num_cut_triangles,
            num_negative_caps: negative.num_caps,
            num_positive_caps: positive.num_caps,
        };

        log::trace!(
            "Split {} triangles by the plane (n = {:?}, bias = {}): {:?}",
            self.num_triangles(),
            plane.normal,
            plane.bias,
            stats
        );

        MeshSplit {
            negative: negative.builder.into_surface_mesh(),
            positive: positive.builder.into_surface_mesh(),
            stats,
        }
    }
}
