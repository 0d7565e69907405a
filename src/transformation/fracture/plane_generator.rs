use crate::math::Real;
use crate::shape::{Plane, SurfaceMesh};
use rand::Rng;

/// Picks the plane cutting a fragment during a cascade.
///
/// Any `FnMut(&SurfaceMesh) -> Plane` closure is a plane generator.
pub trait PlaneGenerator {
    /// The plane that will split `fragment` in two.
    fn cutting_plane(&mut self, fragment: &SurfaceMesh) -> Plane;
}

impl<F: FnMut(&SurfaceMesh) -> Plane> PlaneGenerator for F {
    fn cutting_plane(&mut self, fragment: &SurfaceMesh) -> Plane {
        self(fragment)
    }
}

/// Random planes going through the padded bounding box of each fragment.
///
/// See [`Plane::new_random_in_aabb`] for the sampling distribution.
#[derive(Clone, Debug)]
pub struct RandomPlanes<R> {
    rng: R,
    padding: Real,
}

impl<R: Rng> RandomPlanes<R> {
    /// Creates a generator drawing its random numbers from `rng`.
    ///
    /// # Panics
    ///
    /// Panics if `padding` is negative.
    pub fn new(rng: R, padding: Real) -> Self {
        assert!(padding >= 0.0, "The plane padding must not be negative.");
        Self { rng, padding }
    }

    /// The padding added on every side of a fragment's bounding box.
    pub fn padding(&self) -> Real {
        self.padding
    }

    /// Retrieves the random number generator.
    pub fn into_rng(self) -> R {
        self.rng
    }
}

impl<R: Rng> PlaneGenerator for RandomPlanes<R> {
    fn cutting_plane(&mut self, fragment: &SurfaceMesh) -> Plane {
        Plane::new_random_in_aabb(&mut self.rng, fragment.aabb(), self.padding)
    }
}
