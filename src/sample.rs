//! Uniform random points over a triangulated polygon.
//!
//! Triangles are picked with probability proportional to their area, then a point
//! is drawn uniformly inside the picked triangle.

use alloc::vec::Vec;
use num_traits::float::Float;
use rand::Rng;

use crate::Index;

/// Area-weighted sampler over the triangles of a triangulation.
#[derive(Debug, Clone)]
pub struct TriangleSampler<T> {
    triangles: Vec<[[T; 2]; 3]>,
    /// running share of the total area, ending at one
    cumulative: Vec<T>,
    total_area: T,
}

impl<T: Float> TriangleSampler<T> {
    /// Builds the distribution from flat coordinates and triangle indices as
    /// produced by [`Earcut::earcut`](crate::Earcut::earcut).
    ///
    /// Triangles referring to missing vertices are skipped.
    pub fn new<N: Index>(data: &[T], dim: usize, triangles: &[N]) -> Self {
        let vertex = |i: N| {
            let i = i.into_usize();
            data.get(i * dim..i * dim + 2).map(|c| [c[0], c[1]])
        };

        let mut tris = Vec::with_capacity(triangles.len() / 3);
        let mut cumulative = Vec::with_capacity(triangles.len() / 3);
        let mut total_area = T::zero();
        if dim >= 2 {
            for t in triangles.chunks_exact(3) {
                let (Some(a), Some(b), Some(c)) = (vertex(t[0]), vertex(t[1]), vertex(t[2])) else {
                    continue;
                };
                total_area = total_area + triangle_area(a, b, c);
                tris.push([a, b, c]);
                cumulative.push(total_area);
            }
        }

        if total_area > T::zero() {
            cumulative.iter_mut().for_each(|v| *v = *v / total_area);
        } else {
            tris.clear();
            cumulative.clear();
        }

        Self {
            triangles: tris,
            cumulative,
            total_area,
        }
    }

    /// Number of triangles in the distribution.
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Summed area of all triangles.
    pub fn total_area(&self) -> T {
        self.total_area
    }

    /// Index of the triangle a uniform draw `u` in `[0, 1)` selects: the first one
    /// whose cumulative share exceeds `u`.
    pub fn pick(&self, u: T) -> Option<usize> {
        self.cumulative
            .iter()
            .position(|&share| share > u)
            .or_else(|| self.cumulative.len().checked_sub(1))
    }

    /// Draw a random point from the covered area.
    ///
    /// Returns `None` when the triangulation covers no area.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<[T; 2]> {
        let u = T::from(rng.random::<f64>())?;
        let [a, b, c] = self.triangles[self.pick(u)?];

        let mut wb = T::from(rng.random::<f64>())?;
        let mut wc = T::from(rng.random::<f64>())?;
        // the point would land in the mirrored half of the parallelogram
        if wb + wc > T::one() {
            wb = T::one() - wb;
            wc = T::one() - wc;
        }

        Some([
            a[0] + wb * (b[0] - a[0]) + wc * (c[0] - a[0]),
            a[1] + wb * (b[1] - a[1]) + wc * (c[1] - a[1]),
        ])
    }
}

fn triangle_area<T: Float>(a: [T; 2], b: [T; 2], c: [T; 2]) -> T {
    let two = T::one() + T::one();
    ((b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1])).abs() / two
}
