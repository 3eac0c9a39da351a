//! Hole elimination: every hole ring is bridged into the outer ring so the ear
//! slicer only ever sees a single ring.

use alloc::vec::Vec;
use core::cmp::Ordering;
use num_traits::float::Float;

use crate::geom;
use crate::node::{NodeId, Nodes};
use crate::ring::{filter_points, leftmost, linked_list, locally_inside};

/// Link every hole into the outer ring, processing holes from left to right.
///
/// `queue` is scratch space reused between calls. Returns the new outer anchor and
/// the number of holes for which no bridge could be found; those are left out of
/// the ring.
pub(crate) fn eliminate_holes<T: Float>(
    nodes: &mut Nodes<T>,
    data: &[[T; 2]],
    holes: impl Iterator<Item = (usize, usize)>,
    mut outer: NodeId,
    queue: &mut Vec<NodeId>,
) -> (NodeId, usize) {
    queue.clear();
    for (start, end) in holes {
        let Some(list) = linked_list(nodes, data, start, end, false) else {
            continue;
        };
        if nodes.next(list) == list {
            nodes.v_mut(list).steiner = true;
        }
        queue.push(leftmost(nodes, list));
    }

    queue.sort_by(|&a, &b| {
        nodes
            .v(a)
            .x
            .partial_cmp(&nodes.v(b).x)
            .unwrap_or(Ordering::Equal)
    });

    let mut unmerged = 0;
    for &hole in queue.iter() {
        match find_hole_bridge(nodes, hole, outer) {
            Some(bridge) => outer = splice_hole(nodes, bridge, hole),
            None => {
                let v = nodes.v(hole);
                log::debug!("no bridge for hole at vertex {}, leaving it open", v.i);
                unmerged += 1;
            }
        }
    }
    (outer, unmerged)
}

/// Splice the hole ring into the outer ring along `bridge -> hole`.
fn splice_hole<T: Float>(nodes: &mut Nodes<T>, bridge: NodeId, hole: NodeId) -> NodeId {
    let bridge_back = nodes.split(bridge, hole);

    // filter collinear points around the cuts
    let end = nodes.next(bridge_back);
    filter_points(nodes, bridge_back, Some(end));
    let end = nodes.next(bridge);
    filter_points(nodes, bridge, Some(end))
}

/// David Eberly's bridge search between a hole's leftmost point and the outer ring.
fn find_hole_bridge<T: Float>(nodes: &Nodes<T>, hole: NodeId, outer: NodeId) -> Option<NodeId> {
    let [hx, hy] = nodes.v(hole).pos();
    let mut qx = T::neg_infinity();
    let mut m = None;

    // find the nearest segment crossed by a ray cast left from the hole point;
    // its endpoint with the lesser x is the first connection candidate
    let mut p = outer;
    loop {
        let p_next = nodes.next(p);
        let (v, vn) = (nodes.v(p), nodes.v(p_next));
        if hy <= v.y && hy >= vn.y && vn.y != v.y {
            let x = v.x + (hy - v.y) * (vn.x - v.x) / (vn.y - v.y);
            if x <= hx && x > qx {
                qx = x;
                let endpoint = if v.x < vn.x { p } else { p_next };
                if x == hx {
                    // the hole touches this segment
                    return Some(endpoint);
                }
                m = Some(endpoint);
            }
        }
        p = p_next;
        if p == outer {
            break;
        }
    }

    let mut m = m?;

    // outer points inside the triangle (hole point, ray hit, candidate) would block
    // the connection; pick the one with the smallest angle to the ray instead
    let stop = m;
    let [mx, my] = nodes.v(m).pos();
    let (left, right) = if hy < my { (hx, qx) } else { (qx, hx) };
    let mut tan_min = T::infinity();

    let mut p = m;
    loop {
        let [px, py] = nodes.v(p).pos();
        if hx >= px
            && px >= mx
            && hx != px
            && geom::point_in_triangle([left, hy], [mx, my], [right, hy], [px, py])
        {
            let tan = (hy - py).abs() / (hx - px);
            let mx_now = nodes.v(m).x;
            let better = tan < tan_min
                || (tan == tan_min
                    && (px > mx_now || (px == mx_now && sector_contains_sector(nodes, m, p))));
            if better && locally_inside(nodes, p, hole) {
                m = p;
                tan_min = tan;
            }
        }

        p = nodes.next(p);
        if p == stop {
            return Some(m);
        }
    }
}

/// Whether the sector at `m` contains the sector at `p`, both at the same point.
fn sector_contains_sector<T: Float>(nodes: &Nodes<T>, m: NodeId, p: NodeId) -> bool {
    nodes.area(nodes.prev(m), m, nodes.prev(p)) < T::zero()
        && nodes.area(nodes.next(p), m, nodes.next(m)) < T::zero()
}
