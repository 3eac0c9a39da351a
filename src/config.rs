//! Tuning knobs for [`Earcut`](crate::Earcut).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the triangulator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EarcutConfig {
    /// Polygons with more vertices than this (holes included) get a z-order
    /// index for the ear test. Below it, the brute force scan is faster.
    pub hash_threshold: usize,

    /// Maximum nesting of polygon splits before giving up with
    /// [`EarcutError::SplitDepthExceeded`](crate::EarcutError::SplitDepthExceeded).
    pub max_split_depth: usize,

    /// Check dimension, alignment and hole indices before triangulating.
    ///
    /// When disabled, out-of-range hole indices are clamped instead of reported.
    pub validate_input: bool,
}

impl Default for EarcutConfig {
    fn default() -> Self {
        Self {
            hash_threshold: 80,
            max_split_depth: 1024,
            validate_input: true,
        }
    }
}

impl EarcutConfig {
    /// Sets [`hash_threshold`](Self::hash_threshold).
    pub fn with_hash_threshold(mut self, vertices: usize) -> Self {
        self.hash_threshold = vertices;
        self
    }

    /// Sets [`max_split_depth`](Self::max_split_depth).
    pub fn with_max_split_depth(mut self, depth: usize) -> Self {
        self.max_split_depth = depth;
        self
    }

    /// Turns input validation on or off.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate_input = validate;
        self
    }
}
