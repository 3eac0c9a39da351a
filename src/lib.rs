//! Polygon triangulation by ear clipping, after [Earcut](https://github.com/mapbox/earcut).
//!
//! Holes are bridged into the outer ring, large polygons get a z-order curve index
//! for the ear test, and rings the plain ear scan cannot finish go through
//! filtering, local self-intersection curing and polygon splitting.
//!
//! ```
//! use ringcut::{deviation, Earcut};
//!
//! // a square with a square hole
//! let data = [0., 0., 4., 0., 4., 4., 0., 4., 1., 1., 3., 1., 3., 3., 1., 3.];
//! let hole_indices: &[u32] = &[4];
//! let mut triangles = vec![];
//!
//! let report = Earcut::new().earcut(&data, hole_indices, 2, &mut triangles).unwrap();
//! assert_eq!(report.triangles, 8);
//! assert_eq!(deviation(&data, hole_indices, 2, &triangles), 0.0);
//! ```

#![no_std]

extern crate alloc;

mod config;
mod diagnostics;
mod ear;
mod error;
mod geom;
mod holes;
mod node;
mod repair;
mod ring;
mod sample;
mod triangulator;
mod zorder;

use alloc::vec::Vec;
use num_traits::float::Float;

pub use config::EarcutConfig;
pub use diagnostics::{deviation, flatten, Flattened};
pub use error::EarcutError;
pub use sample::TriangleSampler;
pub use triangulator::{Earcut, Report};

/// Index of a vertex
///
/// With input validation turned off, vertex indices above [`Index::MAX`] wrap.
pub trait Index: Copy {
    /// Largest vertex index the type can hold.
    const MAX: usize;

    fn into_usize(self) -> usize;
    fn from_usize(v: usize) -> Self;
}

macro_rules! impl_index {
    ($($t:ty),*) => {
        $(
            impl Index for $t {
                const MAX: usize = <$t>::MAX as usize;

                fn into_usize(self) -> usize {
                    self as usize
                }
                fn from_usize(v: usize) -> Self {
                    v as Self
                }
            }
        )*
    };
}

impl_index!(u16, u32, usize);

/// Triangulates a polygon with the default configuration.
///
/// Convenience wrapper around [`Earcut::earcut`] for one-off calls.
pub fn earcut<T: Float>(
    data: &[T],
    hole_indices: &[usize],
    dim: usize,
) -> Result<Vec<usize>, EarcutError> {
    let mut triangles = Vec::new();
    Earcut::new().earcut(data, hole_indices, dim, &mut triangles)?;
    Ok(triangles)
}

/// Vertex ranges `(start, end)` of the hole rings, clamped to `vertices`.
pub(crate) fn hole_ranges<N: Index>(
    hole_indices: &[N],
    vertices: usize,
) -> impl Iterator<Item = (usize, usize)> + '_ {
    hole_indices.iter().enumerate().map(move |(i, h)| {
        let start = h.into_usize().min(vertices);
        let end = hole_indices
            .get(i + 1)
            .map_or(vertices, |next| next.into_usize().min(vertices));
        (start, end.max(start))
    })
}
