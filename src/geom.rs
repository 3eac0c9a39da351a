//! Scalar geometry predicates on `[x, y]` pairs.

use num_traits::float::Float;

/// Signed area of a triangle.
///
/// Negative for the winding the triangulator produces ears in.
#[inline]
pub(crate) fn area<T: Float>(p: [T; 2], q: [T; 2], r: [T; 2]) -> T {
    (q[1] - p[1]) * (r[0] - q[0]) - (q[0] - p[0]) * (r[1] - q[1])
}

/// Whether `p` lies within the triangle `abc`, boundary included.
#[inline]
pub(crate) fn point_in_triangle<T: Float>(a: [T; 2], b: [T; 2], c: [T; 2], p: [T; 2]) -> bool {
    let [ax, ay] = [a[0] - p[0], a[1] - p[1]];
    let [bx, by] = [b[0] - p[0], b[1] - p[1]];
    let [cx, cy] = [c[0] - p[0], c[1] - p[1]];
    cx * ay >= ax * cy && ax * by >= bx * ay && bx * cy >= cx * by
}

#[inline]
pub(crate) fn sign<T: Float>(v: T) -> i8 {
    (v > T::zero()) as i8 - (v < T::zero()) as i8
}

/// For collinear `p`, `q`, `r`: whether `q` lies on segment `pr`.
#[inline]
pub(crate) fn on_segment<T: Float>(p: [T; 2], q: [T; 2], r: [T; 2]) -> bool {
    q[0] <= p[0].max(r[0])
        && q[0] >= p[0].min(r[0])
        && q[1] <= p[1].max(r[1])
        && q[1] >= p[1].min(r[1])
}

/// Whether segments `p1q1` and `p2q2` intersect, touching included.
pub(crate) fn intersects<T: Float>(p1: [T; 2], q1: [T; 2], p2: [T; 2], q2: [T; 2]) -> bool {
    let o1 = sign(area(p1, q1, p2));
    let o2 = sign(area(p1, q1, q2));
    let o3 = sign(area(p2, q2, p1));
    let o4 = sign(area(p2, q2, q1));

    if o1 != o2 && o3 != o4 {
        return true;
    }
    // collinear endpoints lying on the other segment
    (o3 == 0 && on_segment(p2, p1, q2))
        || (o4 == 0 && on_segment(p2, q1, q2))
        || (o2 == 0 && on_segment(p1, q2, q1))
        || (o1 == 0 && on_segment(p1, p2, q1))
}

/// Twice the signed area of a closed ring, positive for counter-clockwise rings
/// in a y-up frame (clockwise on a y-down screen).
pub(crate) fn ring_area<T: Float>(ring: &[[T; 2]]) -> T {
    let Some(&last) = ring.last() else {
        return T::zero();
    };
    let (sum, _) = ring.iter().fold((T::zero(), last), |(sum, [bx, by]), &[ax, ay]| {
        (sum + (bx - ax) * (ay + by), [ax, ay])
    });
    sum
}

/// Bounding box of a set of points as `([min_x, min_y], [max_x, max_y])`.
pub(crate) fn bbox<T: Float>(points: &[[T; 2]]) -> Option<([T; 2], [T; 2])> {
    let (&first, rest) = points.split_first()?;
    Some(rest.iter().fold((first, first), |(lo, hi), &[x, y]| {
        ([lo[0].min(x), lo[1].min(y)], [hi[0].max(x), hi[1].max(y)])
    }))
}
