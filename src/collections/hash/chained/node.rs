use std::ops::{Index, IndexMut};

/// A handle to a [`Node`] stored in a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

pub(crate) type Link = Option<NodeId>;

#[derive(Debug)]
pub(crate) struct Node {
    pub key: i32,
    pub value: i32,
    pub next: Link,
}

#[derive(Debug)]
enum Cell {
    Live(Node),
    /// A released cell, linking to the next free cell.
    Free(Option<usize>),
}

// NOTE: Nodes are stored in a slab rather than individually boxed. A chain is then just a series of
// indices, so unlinking a node is an O(1) rewrite of its predecessor's `next` and the freed cell is
// recycled by the next allocation.

/// A growable slab of chain nodes addressed by [`NodeId`].
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    cells: Vec<Cell>,
    free: Option<usize>,
    live: usize,
}

impl NodeArena {
    /// Returns the number of live nodes.
    pub const fn live(&self) -> usize {
        self.live
    }

    /// Stores `node`, reusing a released cell if one is available.
    pub fn alloc(&mut self, node: Node) -> NodeId {
        self.live += 1;

        match self.free {
            Some(index) => {
                let Cell::Free(next_free) = self.cells[index] else {
                    unreachable!("free list points at a live node");
                };
                self.free = next_free;
                self.cells[index] = Cell::Live(node);
                NodeId(index)
            },
            None => {
                self.cells.push(Cell::Live(node));
                NodeId(self.cells.len() - 1)
            },
        }
    }

    /// Releases the node behind `id`, returning it. The handle must not be used afterwards.
    pub fn release(&mut self, id: NodeId) -> Node {
        let cell = std::mem::replace(&mut self.cells[id.0], Cell::Free(self.free));

        match cell {
            Cell::Live(node) => {
                self.free = Some(id.0);
                self.live -= 1;
                node
            },
            Cell::Free(_) => unreachable!("node {} released twice", id.0),
        }
    }

    /// Reserves room for at least `additional` more nodes.
    pub fn reserve(&mut self, additional: usize) {
        self.cells.reserve(additional);
    }

    /// Returns the number of nodes the arena can hold without reallocating.
    #[cfg(test)]
    pub fn reserved(&self) -> usize {
        self.cells.capacity()
    }

    /// Drops every node, keeping the allocation.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.free = None;
        self.live = 0;
    }
}

impl Index<NodeId> for NodeArena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        match &self.cells[id.0] {
            Cell::Live(node) => node,
            Cell::Free(_) => unreachable!("dangling node handle {}", id.0),
        }
    }
}

impl IndexMut<NodeId> for NodeArena {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        match &mut self.cells[id.0] {
            Cell::Live(node) => node,
            Cell::Free(_) => unreachable!("dangling node handle {}", id.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(key: i32) -> Node {
        Node { key, value: key * 10, next: None }
    }

    #[test]
    fn test_reuses_released_cells() {
        let mut arena = NodeArena::default();
        let a = arena.alloc(node(1));
        let b = arena.alloc(node(2));
        let c = arena.alloc(node(3));

        assert_eq!(arena.release(b).key, 2);
        assert_eq!(arena.release(a).key, 1);
        assert_eq!(arena.live(), 1);

        assert_eq!(arena.alloc(node(4)), a, "The most recently released cell should be reused first.");
        assert_eq!(arena.alloc(node(5)), b);
        assert_eq!(arena[c].key, 3, "Live nodes shouldn't be disturbed by reuse.");
        assert_eq!(arena[a].value, 40);
        assert_eq!(arena.live(), 3);
    }

    #[test]
    fn test_clear() {
        let mut arena = NodeArena::default();
        arena.reserve(4);
        assert!(arena.reserved() >= 4);
        let a = arena.alloc(node(1));
        arena.release(a);
        arena.clear();

        assert_eq!(arena.live(), 0);
        assert_eq!(arena.alloc(node(2)), NodeId(0), "A cleared arena should start from scratch.");
    }
}
