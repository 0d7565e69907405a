use crate::math::{Real, Vector};
use crate::shape::{MeshVertex, Plane};

/// Closes the hole left by a cut with a fan of cap triangles.
///
/// Boundary segments are fed one at a time, in the order the cut triangles are
/// visited. The first endpoint of the first segment becomes the fan's apex; every
/// later segment is joined to that apex by one cap triangle, wound so that it faces
/// `cap_normal`. The first segment itself never yields a triangle.
///
/// This assumes the cross-section of the cut is a single convex loop. Cuts producing
/// several loops (or concave ones) get overlapping or misplaced caps.
#[derive(Clone, Debug)]
pub struct BoundaryCapper {
    cap_normal: Vector<Real>,
    apex: Option<MeshVertex>,
    num_segments: usize,
}

impl BoundaryCapper {
    /// Creates a capper whose triangles face `cap_normal`.
    pub fn new(cap_normal: Vector<Real>) -> Self {
        Self {
            cap_normal,
            apex: None,
            num_segments: 0,
        }
    }

    /// The normal every cap triangle faces.
    #[inline]
    pub fn cap_normal(&self) -> &Vector<Real> {
        &self.cap_normal
    }

    /// The number of segments fed to this capper so far.
    #[inline]
    pub fn num_segments(&self) -> usize {
        self.num_segments
    }

    /// Forgets the apex and the segment count.
    pub fn reset(&mut self) {
        self.apex = None;
        self.num_segments = 0;
    }

    /// Feeds one boundary segment, returning the cap triangle it closes, if any.
    ///
    /// Cap vertices keep the texture coordinates of the segment endpoints and get
    /// `cap_normal` as their normal. Degenerate cap triangles are returned as well.
    pub fn add_segment(&mut self, segment: &[MeshVertex; 2]) -> Option<[MeshVertex; 3]> {
        self.num_segments += 1;

        let Some(apex) = self.apex else {
            self.apex = Some(segment[0].with_normal(self.cap_normal));
            return None;
        };

        let e1 = segment[0].with_normal(self.cap_normal);
        let e2 = segment[1].with_normal(self.cap_normal);
        let faces_cap_normal = Plane::from_points(&apex.position, &e1.position, &e2.position)
            .is_some_and(|face| face.is_on_positive_side(&(apex.position + self.cap_normal)));

        if faces_cap_normal {
            Some([apex, e1, e2])
        } else {
            Some([apex, e2, e1])
        }
    }
}
