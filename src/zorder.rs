//! Z-order (Morton) spatial index.
//!
//! Every node of the ring gets a key that interleaves its quantized x and y, and the
//! nodes are threaded into a second list sorted by that key. Points inside a box
//! always have keys between the keys of the box's min and max corners, so the ear
//! test only has to walk that window of the list.

use num_traits::float::Float;

use crate::geom;
use crate::node::{NodeId, Nodes};

/// Largest quantized coordinate; keys use 15 bits per axis.
const KEY_MAX: u32 = 32767;

/// Maps polygon coordinates into z-order key space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ZSpace<T> {
    min_x: T,
    min_y: T,
    /// `KEY_MAX / max(width, height)` of the bounding box
    scale: T,
}

impl<T: Float> ZSpace<T> {
    /// Key space spanning the bounding box of `points`.
    ///
    /// `None` for an empty or zero-sized box, where hashing cannot help.
    pub fn from_points(points: &[[T; 2]]) -> Option<Self> {
        let ([min_x, min_y], [max_x, max_y]) = geom::bbox(points)?;
        let size = (max_x - min_x).max(max_y - min_y);
        if size == T::zero() || !size.is_finite() {
            return None;
        }
        let inv_size = T::one() / size;
        Some(Self {
            min_x,
            min_y,
            scale: T::from(KEY_MAX)? * inv_size,
        })
    }

    /// Z-order key of a point.
    pub fn key(&self, x: T, y: T) -> u32 {
        let quantize = |v: T| {
            if v > T::zero() {
                v.to_u32().map_or(KEY_MAX, |q| q.min(KEY_MAX))
            } else {
                0
            }
        };
        let qx = quantize((x - self.min_x) * self.scale);
        let qy = quantize((y - self.min_y) * self.scale);
        interleave(qx, qy)
    }
}

/// Spread the low 16 bits of `v` into the even bit positions.
#[inline]
fn spread(v: u32) -> u32 {
    let mut v = v & 0xFFFF;
    v = (v | (v << 8)) & 0x00FF_00FF;
    v = (v | (v << 4)) & 0x0F0F_0F0F;
    v = (v | (v << 2)) & 0x3333_3333;
    (v | (v << 1)) & 0x5555_5555
}

/// x bits in even positions, y bits in odd positions
#[inline]
fn interleave(x: u32, y: u32) -> u32 {
    spread(x) | (spread(y) << 1)
}

/// Key every node on the ring through `start` and link them in ascending key order.
pub(crate) fn index_curve<T: Float>(nodes: &mut Nodes<T>, start: NodeId, space: &ZSpace<T>) {
    let mut p = start;
    loop {
        let v = nodes.v(p);
        let z = space.key(v.x, v.y);
        nodes.v_mut(p).z = z;
        nodes.set_prev_z(p, Some(nodes.prev(p)));
        nodes.set_next_z(p, Some(nodes.next(p)));
        p = nodes.next(p);
        if p == start {
            break;
        }
    }

    // cut the circle open before sorting
    let tail = nodes.prev(start);
    nodes.set_next_z(tail, None);
    nodes.set_prev_z(start, None);

    sort_linked(nodes, start);
}

/// Bottom-up merge sort of the z-list by key (Simon Tatham's linked list mergesort).
///
/// Stable, in place, O(n log n). Returns the new head.
fn sort_linked<T: Float>(nodes: &mut Nodes<T>, head: NodeId) -> Option<NodeId> {
    let mut list = Some(head);
    let mut in_size = 1usize;

    loop {
        let mut p = list;
        list = None;
        let mut tail: Option<NodeId> = None;
        let mut merges = 0;

        while p.is_some() {
            merges += 1;

            // the second run starts `in_size` steps after the first
            let mut q = p;
            let mut p_size = 0;
            for _ in 0..in_size {
                match q {
                    Some(id) => {
                        p_size += 1;
                        q = nodes.next_z(id);
                    }
                    None => break,
                }
            }
            let mut q_size = in_size;

            loop {
                let from_p = p.filter(|_| p_size > 0);
                let from_q = q.filter(|_| q_size > 0);
                let e = match (from_p, from_q) {
                    (None, None) => break,
                    (Some(pe), Some(qe)) if nodes.v(pe).z > nodes.v(qe).z => {
                        q_size -= 1;
                        q = nodes.next_z(qe);
                        qe
                    }
                    (Some(pe), _) => {
                        p_size -= 1;
                        p = nodes.next_z(pe);
                        pe
                    }
                    (None, Some(qe)) => {
                        q_size -= 1;
                        q = nodes.next_z(qe);
                        qe
                    }
                };

                nodes.set_prev_z(e, tail);
                match tail {
                    Some(t) => nodes.set_next_z(t, Some(e)),
                    None => list = Some(e),
                }
                tail = Some(e);
            }

            p = q;
        }

        if let Some(t) = tail {
            nodes.set_next_z(t, None);
        }
        if merges <= 1 {
            return list;
        }
        in_size *= 2;
    }
}
