//! Ear validity tests, brute force and z-order windowed.

use num_traits::float::Float;

use crate::geom;
use crate::node::{NodeId, Nodes};
use crate::zorder::ZSpace;

/// A convex corner `a -> b -> c` being considered for clipping.
struct Candidate<T> {
    a: NodeId,
    c: NodeId,
    tri: [[T; 2]; 3],
    lo: [T; 2],
    hi: [T; 2],
}

impl<T: Float> Candidate<T> {
    /// `None` when the corner at `ear` is reflex or flat.
    fn new(nodes: &Nodes<T>, ear: NodeId) -> Option<Self> {
        let (a, c) = (nodes.prev(ear), nodes.next(ear));
        if nodes.area(a, ear, c) >= T::zero() {
            return None;
        }
        let [pa, pb, pc] = [nodes.v(a).pos(), nodes.v(ear).pos(), nodes.v(c).pos()];
        Some(Self {
            a,
            c,
            tri: [pa, pb, pc],
            lo: [pa[0].min(pb[0].min(pc[0])), pa[1].min(pb[1].min(pc[1]))],
            hi: [pa[0].max(pb[0].max(pc[0])), pa[1].max(pb[1].max(pc[1]))],
        })
    }

    /// Whether `p` sits inside the triangle on a non-reflex corner, which
    /// forbids cutting it.
    fn blocked_by(&self, nodes: &Nodes<T>, p: NodeId) -> bool {
        if p == self.a || p == self.c {
            return false;
        }
        let [x, y] = nodes.v(p).pos();
        let [a, b, c] = self.tri;
        x >= self.lo[0]
            && x <= self.hi[0]
            && y >= self.lo[1]
            && y <= self.hi[1]
            && geom::point_in_triangle(a, b, c, [x, y])
            && nodes.area(nodes.prev(p), p, nodes.next(p)) >= T::zero()
    }
}

/// Check whether `ear` forms a valid ear with its neighbours by scanning the whole ring.
pub(crate) fn is_ear<T: Float>(nodes: &Nodes<T>, ear: NodeId) -> bool {
    let Some(cand) = Candidate::new(nodes, ear) else {
        return false;
    };

    let mut p = nodes.next(cand.c);
    while p != cand.a {
        if cand.blocked_by(nodes, p) {
            return false;
        }
        p = nodes.next(p);
    }
    true
}

/// Same as [`is_ear`], but only visits nodes whose z-order key falls within the
/// key range of the triangle's bounding box.
pub(crate) fn is_ear_hashed<T: Float>(nodes: &Nodes<T>, ear: NodeId, space: &ZSpace<T>) -> bool {
    let Some(cand) = Candidate::new(nodes, ear) else {
        return false;
    };

    let min_z = space.key(cand.lo[0], cand.lo[1]);
    let max_z = space.key(cand.hi[0], cand.hi[1]);
    let below = |id: &NodeId| nodes.v(*id).z >= min_z;
    let above = |id: &NodeId| nodes.v(*id).z <= max_z;

    let mut p = nodes.prev_z(ear).filter(below);
    let mut n = nodes.next_z(ear).filter(above);

    // walk both directions at once while both stay in range
    while let (Some(pp), Some(nn)) = (p, n) {
        if cand.blocked_by(nodes, pp) {
            return false;
        }
        p = nodes.prev_z(pp).filter(below);

        if cand.blocked_by(nodes, nn) {
            return false;
        }
        n = nodes.next_z(nn).filter(above);
    }

    while let Some(pp) = p {
        if cand.blocked_by(nodes, pp) {
            return false;
        }
        p = nodes.prev_z(pp).filter(below);
    }

    while let Some(nn) = n {
        if cand.blocked_by(nodes, nn) {
            return false;
        }
        n = nodes.next_z(nn).filter(above);
    }

    true
}
