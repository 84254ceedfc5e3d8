use std::ptr::NonNull;

use derive_more::IsVariant;

pub(crate) type Link<K, V> = Option<NodeRef<K, V>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub(crate) enum Color {
    Red,
    Black,
}

pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) color: Color,
    pub(crate) parent: Link<K, V>,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

// NOTE: Nodes are allocated through Box<T> so that a node can be moved back out of the heap in
// one piece when it is removed.

/// A copyable handle to a heap allocated [`Node`]. Every NodeRef reachable from a map's root is
/// owned by that map, and the references returned by the accessors are only valid for as long as
/// the map is borrowed. The accessors are unchecked for that reason and must stay crate-private.
pub(crate) struct NodeRef<K, V>(NonNull<Node<K, V>>);

impl<K, V> NodeRef<K, V> {
    pub(crate) fn from_node(node: Node<K, V>) -> NodeRef<K, V> {
        NodeRef(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Deallocates the node and returns its contents.
    ///
    /// # Safety
    /// The node must be unlinked from its map, and no other NodeRef to it may be used again.
    pub(crate) unsafe fn take_node(self) -> Node<K, V> {
        // SAFETY: The pointer came from Box::leak in from_node and, per the caller's guarantee,
        // hasn't been reclaimed yet.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    /// The reference is only valid while the owning map is borrowed and the node stays linked.
    pub(crate) fn key<'a>(self) -> &'a K {
        // SAFETY: Every NodeRef in use points to a node owned by a live map, which is only freed
        // by take_node once it has been unlinked.
        unsafe { &(*self.0.as_ptr()).key }
    }

    /// The reference is only valid while the owning map is borrowed and the node stays linked.
    pub(crate) fn value<'a>(self) -> &'a V {
        // SAFETY: The node is live, as in key.
        unsafe { &(*self.0.as_ptr()).value }
    }

    /// The reference is only valid while the owning map is mutably borrowed, and no other
    /// reference to this node's value may exist at the same time.
    pub(crate) fn value_mut<'a>(self) -> &'a mut V {
        // SAFETY: The node is live, see above. The map's exclusive borrow guarantees that no
        // other reference to the value exists.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub(crate) fn color(self) -> Color {
        // SAFETY: The node is live, as in key.
        unsafe { (*self.0.as_ptr()).color }
    }

    pub(crate) fn set_color(self, color: Color) {
        // SAFETY: The node is live, as in key.
        unsafe { (*self.0.as_ptr()).color = color }
    }

    pub(crate) fn parent(self) -> Link<K, V> {
        // SAFETY: The node is live, as in key.
        unsafe { (*self.0.as_ptr()).parent }
    }

    pub(crate) fn set_parent(self, parent: Link<K, V>) {
        // SAFETY: The node is live, as in key.
        unsafe { (*self.0.as_ptr()).parent = parent }
    }

    pub(crate) fn left(self) -> Link<K, V> {
        // SAFETY: The node is live, as in key.
        unsafe { (*self.0.as_ptr()).left }
    }

    pub(crate) fn set_left(self, left: Link<K, V>) {
        // SAFETY: The node is live, as in key.
        unsafe { (*self.0.as_ptr()).left = left }
    }

    pub(crate) fn right(self) -> Link<K, V> {
        // SAFETY: The node is live, as in key.
        unsafe { (*self.0.as_ptr()).right }
    }

    pub(crate) fn set_right(self, right: Link<K, V>) {
        // SAFETY: The node is live, as in key.
        unsafe { (*self.0.as_ptr()).right = right }
    }

    pub(crate) fn is_left_child(self) -> bool {
        self.parent().is_some_and(|p| p.left() == Some(self))
    }

    /// Returns the leftmost node of the subtree rooted at self.
    pub(crate) fn minimum(self) -> NodeRef<K, V> {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    /// Returns the rightmost node of the subtree rooted at self.
    pub(crate) fn maximum(self) -> NodeRef<K, V> {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }

    /// Returns the next node in order: the minimum of the right subtree if there is one, otherwise
    /// the first ancestor reached from its left side.
    pub(crate) fn successor(self) -> Link<K, V> {
        if let Some(right) = self.right() {
            return Some(right.minimum());
        }

        let mut child = self;
        while let Some(parent) = child.parent() {
            if parent.left() == Some(child) {
                return Some(parent);
            }
            child = parent;
        }
        None
    }

    /// Returns the previous node in order, mirroring [`successor`](NodeRef::successor).
    pub(crate) fn predecessor(self) -> Link<K, V> {
        if let Some(left) = self.left() {
            return Some(left.maximum());
        }

        let mut child = self;
        while let Some(parent) = child.parent() {
            if parent.right() == Some(child) {
                return Some(parent);
            }
            child = parent;
        }
        None
    }
}

impl<K, V> Clone for NodeRef<K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for NodeRef<K, V> {}

impl<K, V> PartialEq for NodeRef<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<K, V> Eq for NodeRef<K, V> {}

/// Returns true for red nodes. Empty links count as black.
pub(crate) fn is_red<K, V>(link: Link<K, V>) -> bool {
    link.is_some_and(|node| node.color().is_red())
}
