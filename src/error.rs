//! Error types for tessellation construction.

use thiserror::Error;

/// Errors that can occur while building or exporting a tessellation.
#[derive(Error, Debug)]
pub enum TessellationError {
    /// The requested parameters cannot describe a tessellation.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// What was wrong with the input.
        reason: String,
    },

    /// The rounded recurrence produced a ring without patches, or ran out of
    /// patches before reaching the innermost ring.
    #[error(
        "recurrence did not converge at ring {ring}: {previous} patches remaining, {next} after rounding"
    )]
    NumericalNonConvergence {
        /// Index `l` of the offending ring (1-based, counted from the outside).
        ring: usize,
        /// Patches remaining inside the previous ring (`k_{l-1}`).
        previous: i64,
        /// Patches remaining inside this ring (`k_l`).
        next: i64,
    },

    /// The finished tessellation does not hold the requested number of patches.
    ///
    /// This is a final guard: with every ring checked during the recurrence
    /// the patch counts add up, so it is not expected to fire.
    #[error("tessellation holds {actual} patches, {expected} were requested")]
    PatchCountMismatch {
        /// Requested number of patches.
        expected: u32,
        /// Number of patches actually produced.
        actual: u32,
    },

    /// Writing a rendered tessellation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl TessellationError {
    pub(crate) fn invalid<S: Into<String>>(reason: S) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Whether this error signals that the rounding in the recurrence diverged
    /// from an exact equal-area tessellation.
    ///
    /// Retrying with the same input gives the same result; adjust the
    /// `patch_aspect` instead.
    pub fn is_non_convergence(&self) -> bool {
        matches!(
            self,
            Self::NumericalNonConvergence { .. } | Self::PatchCountMismatch { .. }
        )
    }
}

/// Result type for tessellation operations.
pub type Result<T> = std::result::Result<T, TessellationError>;
