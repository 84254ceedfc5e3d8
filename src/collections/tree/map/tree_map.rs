use std::cmp::Ordering::{self, Equal, Greater, Less};
use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::mem;

use super::Color::{Black, Red};
use super::{Comparator, Iter, Keys, Link, NaturalOrder, Node, NodeRef, Values, ValuesMut, is_red};
use crate::util::fmt::write_pairs;
use crate::util::option::OptionExtension;

/// An ordered map based on a red-black tree, with keys arranged by a [`Comparator`].
///
/// Every node holds a link to its parent as well as its children, which lets in-order iteration
/// and neighbour lookups walk the tree without a stack. Insertion and removal recolour and rotate
/// nodes so that the tree's height stays logarithmic in its length.
///
/// It is a logic error for a key to be modified in a way that changes its order relative to the
/// other keys while it is in the map.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the TreeMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `set` | `O(log n)` |
/// | `get` | `O(log n)` |
/// | `remove` | `O(log n)` |
/// | `get_first_key` | `O(log n)` |
/// | `get_lower_key` | `O(log n)` |
/// | `has_value` | `O(n)` |
pub struct TreeMap<K, V, C: Comparator<K> = NaturalOrder> {
    pub(crate) root: Link<K, V>,
    pub(crate) len: usize,
    pub(crate) comparator: C,
    pub(crate) _phantom: PhantomData<Box<Node<K, V>>>,
}

impl<K: Ord, V> TreeMap<K, V> {
    /// Creates a new, empty TreeMap ordered by the keys' [`Ord`] implementation.
    pub const fn new() -> TreeMap<K, V> {
        TreeMap::with_comparator(NaturalOrder)
    }
}

impl<K, V, C: Comparator<K>> TreeMap<K, V, C> {
    /// Creates a new, empty TreeMap ordered by `comparator`.
    pub const fn with_comparator(comparator: C) -> TreeMap<K, V, C> {
        TreeMap {
            root: None,
            len: 0,
            comparator,
            _phantom: PhantomData,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Associates `value` with `key`. If an equal key is already present, only its value is
    /// replaced and the previous value is returned.
    ///
    /// # Examples
    /// ```
    /// # use app_containers::collections::tree::TreeMap;
    /// let mut map = TreeMap::new();
    /// for key in [5, 3, 8, 1, 4] {
    ///     map.set(key, key * 10);
    /// }
    /// assert_eq!(map.get_first_key(), Some(&1));
    /// assert_eq!(map.get_last_key(), Some(&8));
    /// assert_eq!(map.get_lower_key(&5), Some(&4));
    /// assert_eq!(map.get_higher_key(&5), Some(&8));
    /// ```
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        let mut parent = None;
        let mut link = self.root;
        let mut went_left = false;

        while let Some(node) = link {
            match self.comparator.compare(&key, node.key()) {
                Less => {
                    went_left = true;
                    link = node.left();
                },
                Greater => {
                    went_left = false;
                    link = node.right();
                },
                Equal => return Some(mem::replace(node.value_mut(), value)),
            }
            parent = Some(node);
        }

        let node = NodeRef::from_node(Node {
            key,
            value,
            color: Red,
            parent,
            left: None,
            right: None,
        });

        match parent {
            None => self.root = Some(node),
            Some(p) if went_left => p.set_left(Some(node)),
            Some(p) => p.set_right(Some(node)),
        }

        self.len += 1;
        self.insert_fixup(node);
        None
    }

    /// Sets every entry of `other` on this map, cloning each key and value.
    pub fn set_all<D: Comparator<K>>(&mut self, other: &TreeMap<K, V, D>)
    where
        K: Clone,
        V: Clone,
    {
        for (key, value) in other.iter() {
            self.set(key.clone(), value.clone());
        }
    }

    /// Replaces the value associated with `key`, only if the key is already present. Returns
    /// whether a replacement happened.
    pub fn replace(&mut self, key: &K, value: V) -> bool {
        match self.get_mut(key) {
            Some(existing) => {
                *existing = value;
                true
            },
            None => false,
        }
    }

    pub fn get_entry(&self, key: &K) -> Option<(&K, &V)> {
        self.find_node(key).map(|node| (node.key(), node.value()))
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.find_node(key).map(|node| node.value())
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.find_node(key).map(|node| node.value_mut())
    }

    pub fn has_key(&self, key: &K) -> bool {
        self.find_node(key).is_some()
    }

    /// Returns true if any key is associated with a value equal to `value`. Values aren't ordered
    /// by the comparator, so this visits every entry in order.
    pub fn has_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|v| v == value)
    }

    /// Removes the entry for `key`, returning it if it was present.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let node = self.find_node(key)?;
        Some(self.remove_node(node))
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Returns the smallest key according to the comparator.
    pub fn get_first_key(&self) -> Option<&K> {
        self.first_entry().map(|(k, _)| k)
    }

    /// Returns the largest key according to the comparator.
    pub fn get_last_key(&self) -> Option<&K> {
        self.last_entry().map(|(k, _)| k)
    }

    pub fn first_entry(&self) -> Option<(&K, &V)> {
        self.root.map(|root| {
            let node = root.minimum();
            (node.key(), node.value())
        })
    }

    pub fn last_entry(&self) -> Option<(&K, &V)> {
        self.root.map(|root| {
            let node = root.maximum();
            (node.key(), node.value())
        })
    }

    /// Removes and returns the entry with the smallest key.
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let node = self.root?.minimum();
        Some(self.remove_node(node))
    }

    /// Removes and returns the entry with the largest key.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let node = self.root?.maximum();
        Some(self.remove_node(node))
    }

    /// Returns the key that comes directly before `key`.
    ///
    /// If `key` is present, this is the largest key of its left subtree or, failing that, the
    /// first ancestor it descends to the right of. Otherwise it is the largest key that is
    /// strictly lower than `key`. Returns None if there is no such key.
    pub fn get_lower_key(&self, key: &K) -> Option<&K> {
        match self.find_node(key) {
            Some(node) => node.predecessor().map(|n| n.key()),
            None => self.nearest(key, Greater).map(|n| n.key()),
        }
    }

    /// Returns the key that comes directly after `key`, mirroring
    /// [`get_lower_key`](TreeMap::get_lower_key).
    pub fn get_higher_key(&self, key: &K) -> Option<&K> {
        match self.find_node(key) {
            Some(node) => node.successor().map(|n| n.key()),
            None => self.nearest(key, Less).map(|n| n.key()),
        }
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        if let Some(root) = self.root.take() {
            // SAFETY: The root has just been unlinked, so the whole tree is unreachable.
            unsafe { drop_subtree(root) };
        }
        self.len = 0;
    }

    /// Calls `f` with every value, its key and the map itself, in key order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&V, &K, &Self),
    {
        for (key, value) in self.iter() {
            f(value, key, self);
        }
    }

    /// Returns an iterator over all entries in key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            front: self.root.map(NodeRef::minimum),
            back: self.root.map(NodeRef::maximum),
            len: self.len,
            _phantom: PhantomData,
        }
    }

    /// An alias of [`iter`](TreeMap::iter).
    pub fn entries(&self) -> Iter<'_, K, V> {
        self.iter()
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            front: self.root.map(NodeRef::minimum),
            len: self.len,
            _phantom: PhantomData,
        }
    }
}

impl<K, V, C: Comparator<K>> TreeMap<K, V, C> {
    pub(crate) fn find_node(&self, key: &K) -> Link<K, V> {
        let mut link = self.root;
        while let Some(node) = link {
            link = match self.comparator.compare(key, node.key()) {
                Less => node.left(),
                Greater => node.right(),
                Equal => return Some(node),
            };
        }
        None
    }

    /// Finds the closest node to an absent `key`, on the side where `key` compares as `side` to
    /// the node. `Greater` finds the largest lower key, `Less` the smallest higher key.
    fn nearest(&self, key: &K, side: Ordering) -> Link<K, V> {
        let mut best = None;
        let mut link = self.root;
        while let Some(node) = link {
            let ordering = self.comparator.compare(key, node.key());
            if ordering == side {
                best = Some(node);
            }
            link = match ordering {
                Less => node.left(),
                _ => node.right(),
            };
        }
        best
    }

    fn rotate_left(&mut self, x: NodeRef<K, V>) {
        // UNREACHABLE: Rotations are only performed towards an existing child.
        let y = unsafe { x.right().unreachable() };

        x.set_right(y.left());
        if let Some(inner) = y.left() {
            inner.set_parent(Some(x));
        }
        self.replace_child(x, Some(y));
        y.set_left(Some(x));
        x.set_parent(Some(y));
    }

    fn rotate_right(&mut self, x: NodeRef<K, V>) {
        // UNREACHABLE: Rotations are only performed towards an existing child.
        let y = unsafe { x.left().unreachable() };

        x.set_left(y.right());
        if let Some(inner) = y.right() {
            inner.set_parent(Some(x));
        }
        self.replace_child(x, Some(y));
        y.set_right(Some(x));
        x.set_parent(Some(y));
    }

    /// Puts `new` in the place of `old` under old's parent (or as the root), setting new's parent
    /// link. Old's own links are left as they are.
    fn replace_child(&mut self, old: NodeRef<K, V>, new: Link<K, V>) {
        match old.parent() {
            None => self.root = new,
            Some(parent) if old.is_left_child() => parent.set_left(new),
            Some(parent) => parent.set_right(new),
        }
        if let Some(new) = new {
            new.set_parent(old.parent());
        }
    }

    fn insert_fixup(&mut self, mut node: NodeRef<K, V>) {
        while let Some(mut parent) = node.parent()
            && parent.color().is_red()
        {
            // UNREACHABLE: The root is black, so a red parent always has a parent of its own.
            let grandparent = unsafe { parent.parent().unreachable() };

            if grandparent.left() == Some(parent) {
                let uncle = grandparent.right();
                if let Some(uncle) = uncle
                    && uncle.color().is_red()
                {
                    parent.set_color(Black);
                    uncle.set_color(Black);
                    grandparent.set_color(Red);
                    node = grandparent;
                    continue;
                }

                if parent.right() == Some(node) {
                    node = parent;
                    self.rotate_left(node);
                    // UNREACHABLE: node has just been rotated below a new parent.
                    parent = unsafe { node.parent().unreachable() };
                }
                parent.set_color(Black);
                grandparent.set_color(Red);
                self.rotate_right(grandparent);
            } else {
                let uncle = grandparent.left();
                if let Some(uncle) = uncle
                    && uncle.color().is_red()
                {
                    parent.set_color(Black);
                    uncle.set_color(Black);
                    grandparent.set_color(Red);
                    node = grandparent;
                    continue;
                }

                if parent.left() == Some(node) {
                    node = parent;
                    self.rotate_right(node);
                    // UNREACHABLE: node has just been rotated below a new parent.
                    parent = unsafe { node.parent().unreachable() };
                }
                parent.set_color(Black);
                grandparent.set_color(Red);
                self.rotate_left(grandparent);
            }
        }

        if let Some(root) = self.root {
            root.set_color(Black);
        }
    }

    /// Unlinks `node` from the tree, rebalances and returns the node's contents.
    pub(crate) fn remove_node(&mut self, node: NodeRef<K, V>) -> (K, V) {
        let mut removed_color = node.color();
        // The link that moves into the removed position and its parent, which has to be tracked
        // separately because the link may be empty.
        let replacement;
        let replacement_parent;

        match (node.left(), node.right()) {
            (None, right) => {
                replacement = right;
                replacement_parent = node.parent();
                self.replace_child(node, right);
            },
            (left, None) => {
                replacement = left;
                replacement_parent = node.parent();
                self.replace_child(node, left);
            },
            (Some(left), Some(right)) => {
                let successor = right.minimum();
                removed_color = successor.color();
                replacement = successor.right();

                if successor == right {
                    replacement_parent = Some(successor);
                } else {
                    replacement_parent = successor.parent();
                    self.replace_child(successor, successor.right());
                    successor.set_right(Some(right));
                    right.set_parent(Some(successor));
                }

                self.replace_child(node, Some(successor));
                successor.set_left(Some(left));
                left.set_parent(Some(successor));
                successor.set_color(node.color());
            },
        }

        self.len -= 1;
        if removed_color.is_black() {
            self.remove_fixup(replacement, replacement_parent);
        }

        // SAFETY: The node has been unlinked from every other node and the root above.
        let Node { key, value, .. } = unsafe { node.take_node() };
        (key, value)
    }

    /// Restores the black height after a black node was removed, where `node` carries an extra
    /// black and `parent` is its parent.
    fn remove_fixup(&mut self, mut node: Link<K, V>, mut parent: Link<K, V>) {
        while node != self.root && !is_red(node) {
            // UNREACHABLE: node isn't the root, so it has a parent.
            let p = unsafe { parent.unreachable() };

            if p.left() == node {
                // UNREACHABLE: node carries an extra black, so its sibling subtree has a black
                // height of at least one.
                let mut sibling = unsafe { p.right().unreachable() };
                if sibling.color().is_red() {
                    sibling.set_color(Black);
                    p.set_color(Red);
                    self.rotate_left(p);
                    // UNREACHABLE: The rotation left p with a child on the sibling's side.
                    sibling = unsafe { p.right().unreachable() };
                }

                if !is_red(sibling.left()) && !is_red(sibling.right()) {
                    sibling.set_color(Red);
                    node = Some(p);
                    parent = p.parent();
                    continue;
                }

                if !is_red(sibling.right()) {
                    if let Some(inner) = sibling.left() {
                        inner.set_color(Black);
                    }
                    sibling.set_color(Red);
                    self.rotate_right(sibling);
                    // UNREACHABLE: The rotation left p with a child on the sibling's side.
                    sibling = unsafe { p.right().unreachable() };
                }
                sibling.set_color(p.color());
                p.set_color(Black);
                if let Some(outer) = sibling.right() {
                    outer.set_color(Black);
                }
                self.rotate_left(p);
            } else {
                // UNREACHABLE: Mirrors the left case.
                let mut sibling = unsafe { p.left().unreachable() };
                if sibling.color().is_red() {
                    sibling.set_color(Black);
                    p.set_color(Red);
                    self.rotate_right(p);
                    // UNREACHABLE: The rotation left p with a child on the sibling's side.
                    sibling = unsafe { p.left().unreachable() };
                }

                if !is_red(sibling.left()) && !is_red(sibling.right()) {
                    sibling.set_color(Red);
                    node = Some(p);
                    parent = p.parent();
                    continue;
                }

                if !is_red(sibling.left()) {
                    if let Some(inner) = sibling.right() {
                        inner.set_color(Black);
                    }
                    sibling.set_color(Red);
                    self.rotate_left(sibling);
                    // UNREACHABLE: The rotation left p with a child on the sibling's side.
                    sibling = unsafe { p.left().unreachable() };
                }
                sibling.set_color(p.color());
                p.set_color(Black);
                if let Some(outer) = sibling.left() {
                    outer.set_color(Black);
                }
                self.rotate_right(p);
            }

            node = self.root;
            parent = None;
        }

        if let Some(node) = node {
            node.set_color(Black);
        }
    }
}

/// Deallocates every node in the subtree rooted at `node`.
///
/// # Safety
/// The subtree must already be unreachable from its map.
unsafe fn drop_subtree<K, V>(node: NodeRef<K, V>) {
    if let Some(left) = node.left() {
        // SAFETY: Children of an unreachable subtree are unreachable too.
        unsafe { drop_subtree(left) };
    }
    if let Some(right) = node.right() {
        // SAFETY: As above.
        unsafe { drop_subtree(right) };
    }
    // SAFETY: Both children have been freed and nothing else links to this node, so it is freed
    // exactly once.
    drop(unsafe { node.take_node() });
}

fn clone_subtree<K: Clone, V: Clone>(node: NodeRef<K, V>, parent: Link<K, V>) -> NodeRef<K, V> {
    let cloned = NodeRef::from_node(Node {
        key: node.key().clone(),
        value: node.value().clone(),
        color: node.color(),
        parent,
        left: None,
        right: None,
    });
    cloned.set_left(node.left().map(|left| clone_subtree(left, Some(cloned))));
    cloned.set_right(node.right().map(|right| clone_subtree(right, Some(cloned))));
    cloned
}

impl<K: Ord, V> Default for TreeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C: Comparator<K>> Drop for TreeMap<K, V, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

// SAFETY: A TreeMap exclusively owns all of its nodes, like a Box would.
unsafe impl<K: Send, V: Send, C: Comparator<K> + Send> Send for TreeMap<K, V, C> {}

// SAFETY: Shared references only ever hand out shared references to keys and values.
unsafe impl<K: Sync, V: Sync, C: Comparator<K> + Sync> Sync for TreeMap<K, V, C> {}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for TreeMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for TreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = TreeMap::new();
        map.extend(iter);
        map
    }
}

/// Clones the tree node for node, keeping its exact shape and colours.
impl<K: Clone, V: Clone, C: Comparator<K> + Clone> Clone for TreeMap<K, V, C> {
    fn clone(&self) -> Self {
        TreeMap {
            root: self.root.map(|root| clone_subtree(root, None)),
            len: self.len,
            comparator: self.comparator.clone(),
            _phantom: PhantomData,
        }
    }
}

/// Two maps are equal if they hold equal entries in the same order.
impl<K: PartialEq, V: PartialEq, C: Comparator<K>> PartialEq for TreeMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K: Debug, V: Debug, C: Comparator<K>> Debug for TreeMap<K, V, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Writes the entries as `key:value` pairs separated by commas, in key order.
impl<K: Display, V: Display, C: Comparator<K>> Display for TreeMap<K, V, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_pairs(f, self.iter())
    }
}
