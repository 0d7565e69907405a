use crate::math::{Isometry, Point, Real, TexCoord, Vector};
use crate::shape::SurfaceMesh;
use crate::transformation::fracture::{
    shatter_with, PlaneGenerator, RandomPlanes, ShatterError, ShatterParameters,
};
use rand::Rng;

/// The placement of a shatterable object in the world.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectPose {
    /// The position and orientation of the object.
    pub isometry: Isometry<Real>,
    /// The non-uniform scale applied to the mesh before `isometry`.
    pub scale: Vector<Real>,
}

impl Default for ObjectPose {
    fn default() -> Self {
        Self::identity()
    }
}

impl ObjectPose {
    /// Creates a new pose.
    pub fn new(isometry: Isometry<Real>, scale: Vector<Real>) -> Self {
        Self { isometry, scale }
    }

    /// The pose at the origin, without rotation nor scaling.
    pub fn identity() -> Self {
        Self::from_isometry(Isometry::identity())
    }

    /// A pose without scaling.
    pub fn from_isometry(isometry: Isometry<Real>) -> Self {
        Self::new(isometry, Vector::repeat(1.0))
    }

    /// The world-space position of the object's origin.
    #[inline]
    pub fn position(&self) -> Point<Real> {
        self.isometry.translation.vector.into()
    }

    /// Maps a point of the mesh to world-space.
    #[inline]
    pub fn transform_point(&self, pt: &Point<Real>) -> Point<Real> {
        self.isometry * Point::from(pt.coords.component_mul(&self.scale))
    }
}

/// Everything needed to turn one fragment into a physical object.
#[derive(Clone, Debug)]
pub struct FragmentSpawn {
    /// The fragment geometry, in the same local space as the shattered mesh.
    pub mesh: SurfaceMesh,
    /// The pose of the fragment, equal to the pose of the shattered object.
    pub pose: ObjectPose,
    /// The initial impulse: the fragment's bounding-box center multiplied by the explode force.
    pub impulse: Vector<Real>,
    /// The world-space point the impulse is applied at: the shattered object's position.
    pub impulse_point: Point<Real>,
    /// The parameters the fragment inherits from the shattered object.
    pub parameters: ShatterParameters,
}

impl FragmentSpawn {
    /// Makes this fragment shatterable in turn, with its current parameters.
    ///
    /// The parameters are public and may have been edited since the fragment was
    /// spawned, so they are validated again, as by [`Shatterable::new`].
    pub fn into_shatterable(self) -> Result<Shatterable, ShatterError> {
        Shatterable::new(self.mesh, self.pose, self.parameters)
    }
}

/// Turns fragments into renderable and physical objects.
///
/// This is implemented by the host application, typically by creating, for each
/// fragment, a render mesh, a convex collider and a dynamic rigid body to which
/// the impulse is applied. Any `FnMut(FragmentSpawn)` closure is a materializer, and a
/// `Vec<FragmentSpawn>` simply collects the fragments.
pub trait FragmentMaterializer {
    /// Creates the object of one non-empty fragment.
    fn spawn_fragment(&mut self, fragment: FragmentSpawn);
}

impl<F: FnMut(FragmentSpawn)> FragmentMaterializer for F {
    fn spawn_fragment(&mut self, fragment: FragmentSpawn) {
        self(fragment)
    }
}

impl FragmentMaterializer for Vec<FragmentSpawn> {
    fn spawn_fragment(&mut self, fragment: FragmentSpawn) {
        self.push(fragment)
    }
}

/// An object that can be shattered into fragments.
///
/// Its parameters are validated when it is created, so triggering the fracture
/// itself never fails.
#[derive(Clone, Debug)]
pub struct Shatterable {
    mesh: SurfaceMesh,
    pose: ObjectPose,
    parameters: ShatterParameters,
}

impl Shatterable {
    /// Creates a shatterable object, checking its parameters.
    pub fn new(
        mesh: SurfaceMesh,
        pose: ObjectPose,
        parameters: ShatterParameters,
    ) -> Result<Self, ShatterError> {
        parameters.validate()?;
        Ok(Self {
            mesh,
            pose,
            parameters,
        })
    }

    /// Creates a shatterable object from raw mesh buffers, checking both the mesh and the parameters.
    ///
    /// Each submesh is a flat list of indices, three per triangle.
    pub fn from_buffers(
        vertices: Vec<Point<Real>>,
        normals: Vec<Vector<Real>>,
        uvs: Vec<TexCoord<Real>>,
        submeshes: Vec<Vec<u32>>,
        pose: ObjectPose,
        parameters: ShatterParameters,
    ) -> Result<Self, ShatterError> {
        let mesh = SurfaceMesh::from_flat_indices(vertices, normals, uvs, submeshes)?;
        Self::new(mesh, pose, parameters)
    }

    /// The mesh that will be shattered.
    pub fn mesh(&self) -> &SurfaceMesh {
        &self.mesh
    }

    /// The pose of the object.
    pub fn pose(&self) -> &ObjectPose {
        &self.pose
    }

    /// Moves the object.
    pub fn set_pose(&mut self, pose: ObjectPose) {
        self.pose = pose;
    }

    /// The shatter parameters, inherited by every fragment.
    pub fn parameters(&self) -> &ShatterParameters {
        &self.parameters
    }

    /// Replaces the shatter parameters if they are valid.
    pub fn set_parameters(&mut self, parameters: ShatterParameters) -> Result<(), ShatterError> {
        parameters.validate()?;
        self.parameters = parameters;
        Ok(())
    }

    /// Shatters this object with random planes and hands every non-empty fragment to `materializer`.
    ///
    /// The object is consumed: only its fragments remain. Returns the number of
    /// fragments handed to `materializer`.
    pub fn shatter_now<R: Rng, M: FragmentMaterializer + ?Sized>(
        self,
        rng: &mut R,
        materializer: &mut M,
    ) -> usize {
        let mut planes = RandomPlanes::new(rng, self.parameters.plane_padding);
        self.shatter_now_with(&mut planes, materializer)
    }

    /// Shatters this object with planes picked by `generator`.
    ///
    /// See [`Shatterable::shatter_now`].
    pub fn shatter_now_with<G: PlaneGenerator + ?Sized, M: FragmentMaterializer + ?Sized>(
        self,
        generator: &mut G,
        materializer: &mut M,
    ) -> usize {
        let fragments = shatter_with(&self.mesh, self.parameters.cascades, generator);
        let impulse_point = self.pose.position();
        let mut num_spawned = 0;

        for mesh in fragments {
            if mesh.is_empty() {
                log::debug!("Skipping an empty fragment.");
                continue;
            }

            let impulse = mesh.aabb().center().coords * self.parameters.explode_force;
            materializer.spawn_fragment(FragmentSpawn {
                mesh,
                pose: self.pose,
                impulse,
                impulse_point,
                parameters: self.parameters,
            });
            num_spawned += 1;
        }

        num_spawned
    }
}
