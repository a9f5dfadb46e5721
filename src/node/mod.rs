
use compare::Compare;
use std::cmp::Ordering::*;
use std::num::NonZeroUsize;

/// A stable reference to a node in a `Nodes` arena.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Handle(NonZeroUsize);

impl Handle {
    fn from_index(index: usize) -> Self {
        Handle(NonZeroUsize::new(index + 1).expect("`Handle::from_index()` - index overflow"))
    }

    fn index(self) -> usize { self.0.get() - 1 }
}

/// A single entry of the tree.
///
/// `left` and `right` are the node's children; `parent` points back at the node whose child this
/// node is, and is `None` only for the root.
#[derive(Clone, Debug)]
pub struct Node<K, V> {
    pub key: K,
    pub value: V,
    parent: Option<Handle>,
    left: Option<Handle>,
    right: Option<Handle>,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V, parent: Option<Handle>) -> Self {
        Node { key: key, value: value, parent: parent, left: None, right: None }
    }
}

/// Storage for every node of one tree.
///
/// Nodes are never removed individually, so a handle stays valid until the arena is cleared.
#[derive(Clone, Debug)]
pub struct Nodes<K, V>(Vec<Node<K, V>>);

impl<K, V> Nodes<K, V> {
    pub fn new() -> Self { Nodes(Vec::new()) }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn get(&self, handle: Handle) -> &Node<K, V> { &self.0[handle.index()] }

    pub fn get_mut(&mut self, handle: Handle) -> &mut Node<K, V> { &mut self.0[handle.index()] }

    pub fn clear(&mut self) { self.0.clear(); }

    fn alloc(&mut self, node: Node<K, V>) -> Handle {
        self.0.push(node);
        Handle::from_index(self.0.len() - 1)
    }

    /// Consumes the arena, returning its entries in the order given by `handles`.
    ///
    /// `handles` must name every node exactly once.
    pub fn into_entries(self, handles: &[Handle]) -> Vec<(K, V)> {
        let mut slots: Vec<_> = self.0.into_iter().map(|node| Some((node.key, node.value))).collect();
        handles.iter()
            .map(|handle| slots[handle.index()].take().expect("node visited twice"))
            .collect()
    }

    /// Returns the entries in the order given by `handles`, with mutable references to the values.
    ///
    /// `handles` must name every node at most once.
    pub fn entries_mut(&mut self, handles: &[Handle]) -> Vec<(&K, &mut V)> {
        let mut slots: Vec<_> = self.0.iter_mut().map(|node| Some((&node.key, &mut node.value))).collect();
        handles.iter()
            .map(|handle| slots[handle.index()].take().expect("node visited twice"))
            .collect()
    }
}

/// Returns the handle of the node whose key is equivalent to the given key, if any.
pub fn find<K, V, C, Q: ?Sized>(nodes: &Nodes<K, V>, root: Option<Handle>, cmp: &C, key: &Q)
    -> Option<Handle> where C: Compare<Q, K> {

    let mut link = root;

    while let Some(handle) = link {
        let node = nodes.get(handle);
        link = match cmp.compare(key, &node.key) {
            Equal => return Some(handle),
            Less => node.left,
            Greater => node.right,
        };
    }

    None
}

/// Links a new leaf holding the given entry below the appropriate node, returning its handle.
///
/// The key must not already be present in the tree.
pub fn link<K, V, C>(nodes: &mut Nodes<K, V>, root: &mut Option<Handle>, cmp: &C, key: K, value: V)
    -> Handle where C: Compare<K> {

    let mut parent = match *root {
        None => {
            let handle = nodes.alloc(Node::new(key, value, None));
            *root = Some(handle);
            return handle;
        }
        Some(root) => root,
    };

    loop {
        let node = nodes.get(parent);
        debug_assert!(!cmp.compares_eq(&key, &node.key), "duplicate key reached a leaf");

        let left = cmp.compares_lt(&key, &node.key);
        let child = if left { node.left } else { node.right };

        match child {
            Some(child) => parent = child,
            None => {
                let handle = nodes.alloc(Node::new(key, value, Some(parent)));
                let node = nodes.get_mut(parent);
                if left { node.left = Some(handle); } else { node.right = Some(handle); }
                return handle;
            }
        }
    }
}

/// Checks if two nodes hold equivalent keys and equal values.
pub fn content_eq<K, V, C>(cmp: &C, l: &Node<K, V>, r: &Node<K, V>) -> bool
    where V: PartialEq, C: Compare<K> {

    cmp.compares_eq(&l.key, &r.key) && l.value == r.value
}

/// Returns the handles of the nodes in ascending order, starting at `first`.
pub fn in_order<K, V>(nodes: &Nodes<K, V>, first: Option<Handle>) -> Vec<Handle> {
    let mut handles = Vec::with_capacity(nodes.len());
    let mut next = first;

    while let Some(handle) = next {
        handles.push(handle);
        next = Right::neighbor(nodes, handle);
    }

    handles
}

/// A direction in the tree.
///
/// `Left` walks towards smaller keys and `Right` towards larger ones.
pub trait Dir: Sized {
    type Opposite: Dir<Opposite=Self>;

    fn child<K, V>(node: &Node<K, V>) -> Option<Handle>;

    /// Returns the last node reached by repeatedly following this direction from `handle`.
    fn extremum<K, V>(nodes: &Nodes<K, V>, mut handle: Handle) -> Handle {
        while let Some(child) = Self::child(nodes.get(handle)) { handle = child; }
        handle
    }

    /// Returns the node adjacent to `handle` in this direction of an in-order walk, if any.
    ///
    /// `Right::neighbor` is the successor and `Left::neighbor` the predecessor. Runs in time
    /// proportional to the height of the tree.
    fn neighbor<K, V>(nodes: &Nodes<K, V>, handle: Handle) -> Option<Handle> {
        if let Some(child) = Self::child(nodes.get(handle)) {
            return Some(Self::Opposite::extremum(nodes, child));
        }

        let mut current = handle;

        while let Some(parent) = nodes.get(current).parent {
            if Self::child(nodes.get(parent)) != Some(current) { return Some(parent); }
            current = parent;
        }

        None
    }
}

pub enum Left {}

impl Dir for Left {
    type Opposite = Right;

    fn child<K, V>(node: &Node<K, V>) -> Option<Handle> { node.left }
}

pub enum Right {}

impl Dir for Right {
    type Opposite = Left;

    fn child<K, V>(node: &Node<K, V>) -> Option<Handle> { node.right }
}
