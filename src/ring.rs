//! Ring builder and the collinear/duplicate filter.

use num_traits::float::Float;

use crate::geom;
use crate::node::{NodeId, Nodes};

/// Create a circular doubly linked ring from `data[start..end]`.
///
/// `clockwise` refers to screen coordinates (y pointing down); the point range is
/// walked backwards when its own winding does not match.
pub(crate) fn linked_list<T: Float>(
    nodes: &mut Nodes<T>,
    data: &[[T; 2]],
    start: usize,
    end: usize,
    clockwise: bool,
) -> Option<NodeId> {
    let mut last = None;
    let mut push = |nodes: &mut Nodes<T>, i: usize| {
        let [x, y] = data[i];
        last = Some(nodes.insert(i as u32, x, y, last));
    };

    if clockwise == (geom::ring_area(&data[start..end]) > T::zero()) {
        (start..end).for_each(|i| push(nodes, i));
    } else {
        (start..end).rev().for_each(|i| push(nodes, i));
    }

    let last = last?;
    if nodes.equals(last, nodes.next(last)) {
        let (_, next) = nodes.remove(last);
        return Some(next);
    }
    Some(last)
}

/// Remove duplicate and collinear nodes between `start` and `end` (the whole
/// ring when `end` is `None`).
///
/// Steiner nodes are kept. Returns a node that is still linked.
pub(crate) fn filter_points<T: Float>(
    nodes: &mut Nodes<T>,
    start: NodeId,
    end: Option<NodeId>,
) -> NodeId {
    let mut end = end.unwrap_or(start);
    let mut p = start;
    loop {
        let next = nodes.next(p);
        let degenerate = !nodes.v(p).steiner
            && (nodes.equals(p, next) || nodes.area(nodes.prev(p), p, next) == T::zero());

        if degenerate {
            let (prev, _) = nodes.remove(p);
            p = prev;
            end = prev;
            if nodes.next(p) == p {
                return end;
            }
        } else {
            p = next;
            if p == end {
                return end;
            }
        }
    }
}

/// Leftmost node of a ring, lowest y on ties.
pub(crate) fn leftmost<T: Float>(nodes: &Nodes<T>, start: NodeId) -> NodeId {
    let mut best = start;
    let mut p = nodes.next(start);
    while p != start {
        let (v, b) = (nodes.v(p), nodes.v(best));
        if v.x < b.x || (v.x == b.x && v.y < b.y) {
            best = p;
        }
        p = nodes.next(p);
    }
    best
}

/// Whether the diagonal `a -> b` starts into the polygon interior at `a`.
pub(crate) fn locally_inside<T: Float>(nodes: &Nodes<T>, a: NodeId, b: NodeId) -> bool {
    let (prev, next) = (nodes.prev(a), nodes.next(a));
    if nodes.area(prev, a, next) < T::zero() {
        nodes.area(a, b, next) >= T::zero() && nodes.area(a, prev, b) >= T::zero()
    } else {
        nodes.area(a, b, prev) < T::zero() || nodes.area(a, next, b) < T::zero()
    }
}
