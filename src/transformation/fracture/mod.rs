//! Fracturing of a closed mesh into fragments by a cascade of random planes.
//!
//! The entry points are [`shatter`], which returns the fragments, and
//! [`Shatterable::shatter_now`], which hands each fragment, with its pose and its
//! initial impulse, to a [`FragmentMaterializer`] provided by the host application.

pub use self::error::ShatterError;
pub use self::materializer::{FragmentMaterializer, FragmentSpawn, ObjectPose, Shatterable};
pub use self::parameters::{ShatterParameters, ShatterParametersError, MAX_CASCADES};
pub use self::plane_generator::{PlaneGenerator, RandomPlanes};
pub use self::shatter::{shatter, shatter_with};

mod error;
mod materializer;
mod parameters;
mod plane_generator;
mod shatter;
