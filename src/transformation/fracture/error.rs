use crate::shape::SurfaceMeshError;
use crate::transformation::fracture::ShatterParametersError;

/// Errors preventing a mesh from being shattered.
///
/// A rejected mesh or configuration never produces any fragment.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ShatterError {
    /// The mesh buffers are inconsistent.
    #[error("invalid mesh: {0}")]
    InvalidMesh(SurfaceMeshError),
    /// The shatter parameters are out of range.
    #[error("invalid shatter parameters: {0}")]
    InvalidParameters(ShatterParametersError),
}

impl From<SurfaceMeshError> for ShatterError {
    fn from(value: SurfaceMeshError) -> Self {
        ShatterError::InvalidMesh(value)
    }
}

impl From<ShatterParametersError> for ShatterError {
    fn from(value: ShatterParametersError) -> Self {
        ShatterError::InvalidParameters(value)
    }
}
