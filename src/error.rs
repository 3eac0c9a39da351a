//! Errors reported for inputs that break the calling contract.
//!
//! Degenerate geometry is not an error: it produces fewer (or no) triangles and
//! shows up in [`Report`](crate::Report).

/// Error type for triangulation and flattening.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EarcutError {
    /// Fewer than two coordinates per vertex, or points of mixed dimension.
    #[error("invalid vertex dimension: {0} (at least 2 required)")]
    InvalidDimensions(usize),

    /// The coordinate buffer does not hold a whole number of vertices.
    #[error("coordinate count {len} is not a multiple of the dimension {dim}")]
    UnalignedData { len: usize, dim: usize },

    /// A hole index is smaller than the one before it.
    #[error("hole index at position {position} is smaller than its predecessor")]
    HoleIndicesNotAscending { position: usize },

    /// A hole index points past the last vertex.
    #[error("hole index {index} is out of range for {vertices} vertices")]
    HoleIndexOutOfRange { index: usize, vertices: usize },

    /// The output index type cannot address every vertex.
    #[error("{vertices} vertices exceed the output index range (max index {max})")]
    TooManyVertices { vertices: usize, max: usize },

    /// Polygon splitting recursed deeper than the configured limit.
    #[error("polygon splitting exceeded the maximum depth of {0}")]
    SplitDepthExceeded(usize),
}
