//! Fallback passes for rings the plain ear scan cannot finish.

use alloc::vec::Vec;
use num_traits::float::Float;

use crate::geom;
use crate::node::{NodeId, Nodes};
use crate::ring::{filter_points, locally_inside};
use crate::triangulator::emit;
use crate::Index;

/// Go through all nodes and cure small local self-intersections.
///
/// Where the edges `a -> p` and `p.next -> b` cross, the triangle `a, p, b` is
/// emitted and `p` and `p.next` are dropped from the ring.
pub(crate) fn cure_local_intersections<T: Float, N: Index>(
    nodes: &mut Nodes<T>,
    mut start: NodeId,
    triangles: &mut Vec<N>,
) -> NodeId {
    let mut p = start;
    loop {
        let a = nodes.prev(p);
        let p_next = nodes.next(p);
        let b = nodes.next(p_next);

        if !nodes.equals(a, b)
            && geom::intersects(
                nodes.v(a).pos(),
                nodes.v(p).pos(),
                nodes.v(p_next).pos(),
                nodes.v(b).pos(),
            )
            && locally_inside(nodes, a, b)
            && locally_inside(nodes, b, a)
        {
            emit(nodes, triangles, a, p, b);
            nodes.remove(p);
            nodes.remove(p_next);
            p = b;
            start = b;
        }

        p = nodes.next(p);
        if p == start {
            return filter_points(nodes, p, None);
        }
    }
}

/// Look for a diagonal that divides the ring through `start` into two.
pub(crate) fn find_split<T: Float>(nodes: &Nodes<T>, start: NodeId) -> Option<(NodeId, NodeId)> {
    let mut a = start;
    loop {
        let stop = nodes.prev(a);
        let mut b = nodes.next(nodes.next(a));
        while b != stop {
            if nodes.v(a).i != nodes.v(b).i && is_valid_diagonal(nodes, a, b) {
                return Some((a, b));
            }
            b = nodes.next(b);
        }
        a = nodes.next(a);
        if a == start {
            return None;
        }
    }
}

/// Whether the diagonal `a -> b` lies in the polygon interior.
pub(crate) fn is_valid_diagonal<T: Float>(nodes: &Nodes<T>, a: NodeId, b: NodeId) -> bool {
    let (a_prev, a_next) = (nodes.prev(a), nodes.next(a));
    let (b_prev, b_next) = (nodes.prev(b), nodes.next(b));
    let bi = nodes.v(b).i;

    // not an edge, and crosses no edge
    if nodes.v(a_next).i == bi || nodes.v(a_prev).i == bi || intersects_polygon(nodes, a, b) {
        return false;
    }

    let visible = locally_inside(nodes, a, b)
        && locally_inside(nodes, b, a)
        && middle_inside(nodes, a, b)
        // no opposite-facing sectors
        && (nodes.area(a_prev, a, b_prev) != T::zero() || nodes.area(a, b_prev, b) != T::zero());

    // zero-length diagonal between two convex corners
    let touching = nodes.equals(a, b)
        && nodes.area(a_prev, a, a_next) > T::zero()
        && nodes.area(b_prev, b, b_next) > T::zero();

    visible || touching
}

/// Whether the segment `a -> b` crosses any ring edge not incident to `a` or `b`.
fn intersects_polygon<T: Float>(nodes: &Nodes<T>, a: NodeId, b: NodeId) -> bool {
    let (ai, bi) = (nodes.v(a).i, nodes.v(b).i);
    let (pa, pb) = (nodes.v(a).pos(), nodes.v(b).pos());
    let mut p = a;
    loop {
        let p_next = nodes.next(p);
        let (v, vn) = (nodes.v(p), nodes.v(p_next));
        if v.i != ai
            && v.i != bi
            && vn.i != ai
            && vn.i != bi
            && geom::intersects(v.pos(), vn.pos(), pa, pb)
        {
            return true;
        }
        p = p_next;
        if p == a {
            return false;
        }
    }
}

/// Whether the midpoint of `a -> b` is inside the ring (even-odd ray cast).
fn middle_inside<T: Float>(nodes: &Nodes<T>, a: NodeId, b: NodeId) -> bool {
    let two = T::one() + T::one();
    let (va, vb) = (nodes.v(a), nodes.v(b));
    let (px, py) = ((va.x + vb.x) / two, (va.y + vb.y) / two);

    let mut inside = false;
    let mut p = a;
    loop {
        let p_next = nodes.next(p);
        let (v, vn) = (nodes.v(p), nodes.v(p_next));
        if (v.y > py) != (vn.y > py)
            && vn.y != v.y
            && px < (vn.x - v.x) * (py - v.y) / (vn.y - v.y) + v.x
        {
            inside = !inside;
        }
        p = p_next;
        if p == a {
            return inside;
        }
    }
}
