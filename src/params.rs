use serde::{Deserialize, Serialize};

use crate::error::{Result, TessellationError};

/// The three scalars that fully determine a tessellation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TessellationParams {
    /// Radius of the disk or hemisphere.
    pub radius: f64,
    /// Exact number of patches to create.
    pub n_patches: u32,
    /// Target ratio between the radial (zenithal) extent of a patch and its
    /// azimuthal arc length.
    pub patch_aspect: f64,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            radius: 1.,
            n_patches: 288,
            patch_aspect: 1.,
        }
    }
}

impl TessellationParams {
    pub fn new(radius: f64, n_patches: u32, patch_aspect: f64) -> Self {
        Self {
            radius,
            n_patches,
            patch_aspect,
        }
    }

    /// Check the parameters before running any recurrence.
    pub fn validate(&self) -> Result<()> {
        if !(self.radius.is_finite() && self.radius > 0.) {
            return Err(TessellationError::invalid(format!(
                "radius must be positive and finite, got {}",
                self.radius
            )));
        }
        if self.n_patches < 1 {
            return Err(TessellationError::invalid("n_patches must be at least 1"));
        }
        if !(self.patch_aspect.is_finite() && self.patch_aspect > 0.) {
            return Err(TessellationError::invalid(format!(
                "patch_aspect must be positive and finite, got {}",
                self.patch_aspect
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(TessellationParams::default().validate().is_ok());
        assert!(TessellationParams::new(0., 10, 1.).validate().is_err());
        assert!(TessellationParams::new(-1., 10, 1.).validate().is_err());
        assert!(TessellationParams::new(f64::NAN, 10, 1.).validate().is_err());
        assert!(TessellationParams::new(1., 0, 1.).validate().is_err());
        assert!(TessellationParams::new(1., 10, 0.).validate().is_err());
        assert!(TessellationParams::new(1., 10, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let params: TessellationParams =
            serde_json::from_str(r#"{"n_patches": 1000, "patch_aspect": 2.0}"#).unwrap();
        assert_eq!(params, TessellationParams::new(1., 1000, 2.));
    }
}
