//! Index arena for the vertex nodes shared by the polygon rings and the z-order list.
//!
//! Nodes are addressed by [`NodeId`]. Ring links and z-order links live in two
//! parallel arrays keyed by the same id, so a node can sit in both lists at once
//! without any shared references. Nodes are never freed one by one: unlinking is
//! O(1) and the whole arena is cleared before the next triangulation.

use alloc::vec::Vec;
use num_traits::float::Float;

use crate::geom;

pub(crate) type NodeId = u32;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Vertex<T> {
    /// vertex index in the caller's coordinate array
    pub i: u32,
    pub x: T,
    pub y: T,
    /// z-order curve value, meaningful once the ring has been indexed
    pub z: u32,
    /// a single-point hole that must survive filtering
    pub steiner: bool,
}

impl<T: Float> Vertex<T> {
    #[inline]
    pub fn pos(&self) -> [T; 2] {
        [self.x, self.y]
    }
}

#[derive(Clone, Copy, Debug)]
struct RingLink {
    prev: NodeId,
    next: NodeId,
}

#[derive(Clone, Copy, Debug, Default)]
struct ZLink {
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

pub(crate) struct Nodes<T> {
    verts: Vec<Vertex<T>>,
    ring: Vec<RingLink>,
    zlinks: Vec<ZLink>,
}

impl<T: Float> Nodes<T> {
    pub fn new() -> Self {
        Self {
            verts: Vec::new(),
            ring: Vec::new(),
            zlinks: Vec::new(),
        }
    }

    /// Drop every node while keeping the allocations around.
    pub fn reset(&mut self, capacity: usize) {
        self.verts.clear();
        self.ring.clear();
        self.zlinks.clear();
        self.verts.reserve(capacity);
        self.ring.reserve(capacity);
        self.zlinks.reserve(capacity);
    }

    #[inline]
    pub fn v(&self, id: NodeId) -> &Vertex<T> {
        &self.verts[id as usize]
    }

    #[inline]
    pub fn v_mut(&mut self, id: NodeId) -> &mut Vertex<T> {
        &mut self.verts[id as usize]
    }

    #[inline]
    pub fn next(&self, id: NodeId) -> NodeId {
        self.ring[id as usize].next
    }

    #[inline]
    pub fn prev(&self, id: NodeId) -> NodeId {
        self.ring[id as usize].prev
    }

    #[inline]
    pub fn next_z(&self, id: NodeId) -> Option<NodeId> {
        self.zlinks[id as usize].next
    }

    #[inline]
    pub fn prev_z(&self, id: NodeId) -> Option<NodeId> {
        self.zlinks[id as usize].prev
    }

    #[inline]
    pub fn set_next_z(&mut self, id: NodeId, next: Option<NodeId>) {
        self.zlinks[id as usize].next = next;
    }

    #[inline]
    pub fn set_prev_z(&mut self, id: NodeId, prev: Option<NodeId>) {
        self.zlinks[id as usize].prev = prev;
    }

    /// Signed area of the triangle formed by three nodes.
    #[inline]
    pub fn area(&self, p: NodeId, q: NodeId, r: NodeId) -> T {
        geom::area(self.v(p).pos(), self.v(q).pos(), self.v(r).pos())
    }

    /// Whether two nodes share coordinates.
    #[inline]
    pub fn equals(&self, a: NodeId, b: NodeId) -> bool {
        let (a, b) = (self.v(a), self.v(b));
        a.x == b.x && a.y == b.y
    }

    fn push(&mut self, vertex: Vertex<T>, link: RingLink) -> NodeId {
        let id = self.verts.len() as NodeId;
        self.verts.push(vertex);
        self.ring.push(link);
        self.zlinks.push(ZLink::default());
        id
    }

    /// Create a node and link it after `last`, or start a new one-node ring.
    pub fn insert(&mut self, i: u32, x: T, y: T, last: Option<NodeId>) -> NodeId {
        let vertex = Vertex {
            i,
            x,
            y,
            z: 0,
            steiner: false,
        };
        let id = self.verts.len() as NodeId;
        match last {
            Some(last) => {
                let next = self.next(last);
                let id = self.push(vertex, RingLink { prev: last, next });
                self.ring[last as usize].next = id;
                self.ring[next as usize].prev = id;
                id
            }
            None => self.push(vertex, RingLink { prev: id, next: id }),
        }
    }

    /// Unlink a node from its ring and from the z-order list.
    ///
    /// Returns the former `(prev, next)` ring neighbours.
    pub fn remove(&mut self, id: NodeId) -> (NodeId, NodeId) {
        let RingLink { prev, next } = self.ring[id as usize];
        self.ring[next as usize].prev = prev;
        self.ring[prev as usize].next = next;

        let ZLink {
            prev: prev_z,
            next: next_z,
        } = self.zlinks[id as usize];
        if let Some(p) = prev_z {
            self.zlinks[p as usize].next = next_z;
        }
        if let Some(n) = next_z {
            self.zlinks[n as usize].prev = prev_z;
        }
        (prev, next)
    }

    /// Connect `a` and `b` with a two-way bridge.
    ///
    /// Both endpoints are duplicated. When `a` and `b` are on the same ring the ring
    /// is split in two (`a -> b ...` and `b2 -> a2 ...`); when they are on different
    /// rings, the rings are merged into one. Returns the duplicate of `b`.
    pub fn split(&mut self, a: NodeId, b: NodeId) -> NodeId {
        let a2 = self.verts.len() as NodeId;
        let b2 = a2 + 1;
        let an = self.next(a);
        let bp = self.prev(b);

        let va = Vertex {
            z: 0,
            steiner: false,
            ..*self.v(a)
        };
        let vb = Vertex {
            z: 0,
            steiner: false,
            ..*self.v(b)
        };
        self.push(va, RingLink { prev: b2, next: an });
        self.push(vb, RingLink { prev: bp, next: a2 });

        self.ring[a as usize].next = b;
        self.ring[b as usize].prev = a;
        self.ring[an as usize].prev = a2;
        self.ring[bp as usize].next = b2;
        b2
    }

    /// Number of nodes on the ring through `start`.
    pub fn ring_len(&self, start: NodeId) -> usize {
        let mut len = 1;
        let mut p = self.next(start);
        while p != start {
            len += 1;
            p = self.next(p);
        }
        len
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn square(nodes: &mut Nodes<f64>) -> NodeId {
        let mut last = None;
        for (i, [x, y]) in [[0., 0.], [1., 0.], [1., 1.], [0., 1.]].into_iter().enumerate() {
            last = Some(nodes.insert(i as u32, x, y, last));
        }
        last.unwrap()
    }

    #[test]
    fn test_insert_links_ring() {
        let mut nodes = Nodes::new();
        let last = square(&mut nodes);
        assert_eq!(nodes.ring_len(last), 4);
        assert_eq!(nodes.next(last), 0);
        assert_eq!(nodes.prev(0), last);
    }

    #[test]
    fn test_remove_patches_both_lists() {
        let mut nodes = Nodes::new();
        square(&mut nodes);
        nodes.set_next_z(0, Some(1));
        nodes.set_prev_z(1, Some(0));
        nodes.set_next_z(1, Some(2));
        nodes.set_prev_z(2, Some(1));

        assert_eq!(nodes.remove(1), (0, 2));
        assert_eq!(nodes.next(0), 2);
        assert_eq!(nodes.prev(2), 0);
        assert_eq!(nodes.next_z(0), Some(2));
        assert_eq!(nodes.prev_z(2), Some(0));
        assert_eq!(nodes.ring_len(0), 3);
    }

    #[test]
    fn test_split_divides_ring() {
        let mut nodes = Nodes::new();
        square(&mut nodes);
        let b2 = nodes.split(0, 2);
        assert_eq!(nodes.ring_len(0), 3);
        assert_eq!(nodes.ring_len(b2), 3);
        assert_eq!(nodes.v(b2).i, 2);
        assert_eq!(nodes.v(nodes.next(b2)).i, 0);
    }
}
