use crate::math::Real;

/// The largest number of cascades accepted by [`ShatterParameters::validate`].
///
/// Each cascade doubles the number of fragments, so this caps the output to 4096 fragments.
pub const MAX_CASCADES: u32 = 12;

/// Indicates out-of-range [`ShatterParameters`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ShatterParametersError {
    /// The number of cascades exceeds [`MAX_CASCADES`].
    #[error("{requested} cascades requested but at most {max} are supported.")]
    TooManyCascades {
        /// The requested number of cascades.
        requested: u32,
        /// The largest accepted number of cascades.
        max: u32,
    },
    /// The explode force is negative, infinite or NaN.
    #[error("the explode force must be finite and non-negative, got {0}.")]
    InvalidExplodeForce(Real),
    /// The plane padding is negative, infinite or NaN.
    #[error("the plane padding must be finite and non-negative, got {0}.")]
    InvalidPlanePadding(Real),
}

/// Parameters controlling how a mesh is shattered.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShatterParameters {
    /// The number of times every fragment is split in two.
    ///
    /// The mesh ends up in at most `2^cascades` fragments.
    ///
    /// Default: `3`
    pub cascades: u32,
    /// The factor applied to a fragment's bounding-box center to get its initial impulse.
    ///
    /// Default: `1.0`
    pub explode_force: Real,
    /// How much a fragment's bounding box is enlarged, on each side, before picking the point
    /// a cutting plane goes through.
    ///
    /// Default: `0.5`
    pub plane_padding: Real,
}

impl Default for ShatterParameters {
    fn default() -> Self {
        Self {
            cascades: 3,
            explode_force: 1.0,
            plane_padding: 0.5,
        }
    }
}

impl ShatterParameters {
    /// Creates validated parameters with the default plane padding.
    pub fn new(cascades: u32, explode_force: Real) -> Result<Self, ShatterParametersError> {
        let result = Self {
            cascades,
            explode_force,
            ..Self::default()
        };
        result.validate()?;
        Ok(result)
    }

    /// Checks that every parameter is in range.
    pub fn validate(&self) -> Result<(), ShatterParametersError> {
        if self.cascades > MAX_CASCADES {
            return Err(ShatterParametersError::TooManyCascades {
                requested: self.cascades,
                max: MAX_CASCADES,
            });
        }

        if !self.explode_force.is_finite() || self.explode_force < 0.0 {
            return Err(ShatterParametersError::InvalidExplodeForce(
                self.explode_force,
            ));
        }

        if !self.plane_padding.is_finite() || self.plane_padding < 0.0 {
            return Err(ShatterParametersError::InvalidPlanePadding(
                self.plane_padding,
            ));
        }

        Ok(())
    }

    /// The largest number of fragments these parameters can produce.
    #[inline]
    pub fn max_fragments(&self) -> usize {
        1 << self.cascades.min(MAX_CASCADES)
    }
}
