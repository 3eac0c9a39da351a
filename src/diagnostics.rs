//! Quality check for triangulations, and conversion from nested rings.

use alloc::vec::Vec;
use num_traits::float::Float;

use crate::error::EarcutError;
use crate::geom::ring_area;
use crate::{hole_ranges, Index};

/// Returns a percentage difference between the polygon area and its triangulation area;
/// used to verify correctness of triangulation
pub fn deviation<T: Float, N: Index>(
    data: &[T],
    hole_indices: &[N],
    dim: usize,
    triangles: &[N],
) -> T {
    let points: Vec<[T; 2]> = if dim < 2 {
        Vec::new()
    } else {
        data.chunks_exact(dim).map(|c| [c[0], c[1]]).collect()
    };
    let vertices = points.len();

    let polygon_area = if vertices < 3 {
        T::zero()
    } else {
        let outer_len = hole_indices
            .first()
            .map_or(vertices, |h| h.into_usize().min(vertices));
        hole_ranges(hole_indices, vertices)
            .filter(|(start, end)| end - start >= 3)
            .fold(ring_area(&points[..outer_len]).abs(), |area, (start, end)| {
                area - ring_area(&points[start..end]).abs()
            })
    };

    let triangles_area = triangles
        .chunks_exact(3)
        .filter_map(|t| {
            let [a, b, c] = [t[0], t[1], t[2]].map(|i| points.get(i.into_usize()));
            Some((a?, b?, c?))
        })
        .fold(T::zero(), |sum, (a, b, c)| {
            sum + ((a[0] - c[0]) * (b[1] - a[1]) - (a[0] - b[0]) * (c[1] - a[1])).abs()
        });

    if polygon_area == T::zero() && triangles_area == T::zero() {
        T::zero()
    } else {
        ((polygon_area - triangles_area) / polygon_area).abs()
    }
}

/// A polygon in the flat layout [`Earcut::earcut`](crate::Earcut::earcut) takes.
#[derive(Debug, Clone, PartialEq)]
pub struct Flattened<T> {
    pub vertices: Vec<T>,
    /// first vertex index of each hole ring
    pub holes: Vec<usize>,
    pub dimensions: usize,
}

/// Turn a polygon in nested ring form (e.g. as in GeoJSON) into flat coordinates.
///
/// The first ring is the outer ring, the rest are holes. Every point must have the
/// same number of coordinates, at least two.
pub fn flatten<T, R, P>(rings: &[R]) -> Result<Flattened<T>, EarcutError>
where
    T: Copy,
    R: AsRef<[P]>,
    P: AsRef<[T]>,
{
    let dimensions = rings
        .iter()
        .flat_map(|ring| ring.as_ref().first())
        .map(|point| point.as_ref().len())
        .next()
        .unwrap_or(2);
    if dimensions < 2 {
        return Err(EarcutError::InvalidDimensions(dimensions));
    }

    let mut vertices = Vec::new();
    let mut holes = Vec::with_capacity(rings.len().saturating_sub(1));
    let mut hole_index = 0;
    for (i, ring) in rings.iter().enumerate() {
        let ring = ring.as_ref();
        if i > 0 {
            holes.push(hole_index);
        }
        for point in ring {
            let point = point.as_ref();
            if point.len() != dimensions {
                return Err(EarcutError::InvalidDimensions(point.len()));
            }
            vertices.extend_from_slice(point);
        }
        hole_index += ring.len();
    }

    Ok(Flattened {
        vertices,
        holes,
        dimensions,
    })
}
