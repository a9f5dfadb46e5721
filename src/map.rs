//! An ordered map based on a binary search tree.

mod cursor;
mod iter;

use compare::{Compare, Natural};
use std::default::Default;
use std::fmt::{self, Debug};
use std::iter::FromIterator;
use std::mem;
use std::ops;
use super::node::{self, Dir, Handle, Left, Nodes, Right};
use super::Error;

pub use self::cursor::{Cursor, CursorMut};
pub use self::iter::{IntoIter, Iter, IterMut};

use self::cursor::Position;

/// An ordered map based on a binary search tree.
///
/// The tree is not rebalanced, so lookups and cursor steps take time proportional to its height:
/// logarithmic in the number of entries for keys inserted in random order, linear in the worst
/// case (e.g. keys inserted in ascending order).
///
/// The behavior of this map is undefined if a key's ordering relative to any other key changes
/// while the key is in the map. This is normally only possible through `Cell`, `RefCell`, or
/// unsafe code.
pub struct Map<K, V, C = Natural<K>> where C: Compare<K> {
    nodes: Nodes<K, V>,
    root: Option<Handle>,
    first: Option<Handle>,
    last: Option<Handle>,
    cmp: C,
}

impl<K, V> Map<K, V> where K: Ord {
    /// Creates an empty map ordered according to the natural order of its keys.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { Map::with_cmp(compare::natural()) }
}

impl<K, V, C> Map<K, V, C> where C: Compare<K> {
    /// Creates an empty map ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut map = bstree::Map::with_cmp(natural().rev());
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        Map { nodes: Nodes::new(), root: None, first: None, last: None, cmp: cmp }
    }

    /// Checks if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    /// assert!(map.is_empty());
    ///
    /// map.insert(2, "b");
    /// assert!(!map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    /// assert_eq!(map.len(), 0);
    ///
    /// map.insert(2, "b");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.nodes.len() }

    /// Returns a reference to the map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let map: bstree::Map<i32, &str> = bstree::Map::new();
    /// assert!(map.cmp().compares_lt(&1, &2));
    ///
    /// let map: bstree::Map<i32, &str, _> = bstree::Map::with_cmp(natural().rev());
    /// assert!(map.cmp().compares_gt(&1, &2));
    /// ```
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all entries from the map.
    ///
    /// Any cursor obtained before the call has already been released, as cursors borrow the map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.len(), 3);
    /// assert_eq!(map.iter().next(), Some((&1, &"a")));
    ///
    /// map.clear();
    ///
    /// assert_eq!(map.len(), 0);
    /// assert_eq!(map.iter().next(), None);
    /// ```
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.first = None;
        self.last = None;
    }

    /// Inserts an entry into the map, taking ownership of the key and value.
    ///
    /// If the map already contains an equivalent key, its value is overwritten and the key is left
    /// untouched. Returns a cursor positioned on the entry and whether a new entry was created.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    ///
    /// let (cursor, inserted) = map.insert(1, "a");
    /// assert_eq!(cursor.key_value(), Some((&1, &"a")));
    /// assert!(inserted);
    ///
    /// let (cursor, inserted) = map.insert(1, "b");
    /// assert_eq!(cursor.key_value(), Some((&1, &"b")));
    /// assert!(!inserted);
    ///
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> (CursorMut<K, V, C>, bool) {
        if let Some(handle) = node::find(&self.nodes, self.root, &self.cmp, &key) {
            self.nodes.get_mut(handle).value = value;
            return (CursorMut::at(self, handle), false);
        }

        let handle = self.link(key, value);
        (CursorMut::at(self, handle), true)
    }

    /// Inserts a copy of the given entry into the map.
    ///
    /// The key is cloned only if no equivalent key is present; otherwise the stored value is
    /// overwritten with a clone of `value`. Returns a cursor positioned on the entry and whether a
    /// new entry was created.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    /// let key = String::from("a");
    ///
    /// assert!(map.insert_cloned(&key, &1).1);
    /// assert!(!map.insert_cloned(&key, &2).1);
    ///
    /// assert_eq!(map[&key], 2);
    /// assert_eq!(key, "a");
    /// ```
    pub fn insert_cloned(&mut self, key: &K, value: &V) -> (CursorMut<K, V, C>, bool)
        where K: Clone, V: Clone {

        if let Some(handle) = node::find(&self.nodes, self.root, &self.cmp, key) {
            self.nodes.get_mut(handle).value.clone_from(value);
            return (CursorMut::at(self, handle), false);
        }

        let handle = self.link(key.clone(), value.clone());
        (CursorMut::at(self, handle), true)
    }

    fn link(&mut self, key: K, value: V) -> Handle {
        let first = match self.first {
            None => true,
            Some(first) => self.cmp.compares_lt(&key, &self.nodes.get(first).key),
        };

        let last = match self.last {
            None => true,
            Some(last) => self.cmp.compares_gt(&key, &self.nodes.get(last).key),
        };

        let handle = node::link(&mut self.nodes, &mut self.root, &self.cmp, key, value);
        if first { self.first = Some(handle); }
        if last { self.last = Some(handle); }
        handle
    }

    // Recomputes the cached extremes from the current shape of the tree.
    fn reset_extrema(&mut self) {
        self.first = self.root.map(|root| Left::extremum(&self.nodes, root));
        self.last = self.root.map(|root| Right::extremum(&self.nodes, root));
    }

    /// Returns a cursor positioned on the entry whose key is equivalent to the given key, or
    /// [`end`](#method.end) if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    /// map.insert(1, "a");
    ///
    /// assert_eq!(map.find(&1).value(), Some(&"a"));
    /// assert!(map.find(&2) == map.end());
    /// ```
    pub fn find<Q: ?Sized>(&self, key: &Q) -> Cursor<K, V, C> where C: Compare<Q, K> {
        match node::find(&self.nodes, self.root, &self.cmp, key) {
            Some(handle) => Cursor::at(self, handle),
            None => self.end(),
        }
    }

    /// Returns a mutable cursor positioned on the entry whose key is equivalent to the given key,
    /// or [`end_mut`](#method.end_mut) if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    /// map.insert(1, "a");
    ///
    /// if let Some(value) = map.find_mut(&1).value_mut() {
    ///     *value = "b";
    /// }
    ///
    /// assert_eq!(map[&1], "b");
    /// ```
    pub fn find_mut<Q: ?Sized>(&mut self, key: &Q) -> CursorMut<K, V, C> where C: Compare<Q, K> {
        match node::find(&self.nodes, self.root, &self.cmp, key) {
            Some(handle) => CursorMut::at(self, handle),
            None => self.end_mut(),
        }
    }

    /// Checks if the map contains the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    /// assert!(!map.contains_key(&1));
    /// map.insert(1, "a");
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, K> {
        node::find(&self.nodes, self.root, &self.cmp, key).is_some()
    }

    /// Returns a reference to the value associated with the given key, or `None` if the
    /// map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    /// assert_eq!(map.get(&1), None);
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// ```
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V> where C: Compare<Q, K> {
        node::find(&self.nodes, self.root, &self.cmp, key).map(|handle| &self.nodes.get(handle).value)
    }

    /// Returns a mutable reference to the value associated with the given key, or `None`
    /// if the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    /// assert_eq!(map.get(&1), None);
    /// map.insert(1, "a");
    ///
    /// {
    ///     let value = map.get_mut(&1).unwrap();
    ///     assert_eq!(*value, "a");
    ///     *value = "b";
    /// }
    ///
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V> where C: Compare<Q, K> {
        match node::find(&self.nodes, self.root, &self.cmp, key) {
            Some(handle) => Some(&mut self.nodes.get_mut(handle).value),
            None => None,
        }
    }

    /// Returns a reference to the map's minimum key and a reference to its associated
    /// value, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    /// assert_eq!(map.first(), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.first(), Some((&1, &"a")));
    /// ```
    pub fn first(&self) -> Option<(&K, &V)> {
        self.first.map(|handle| { let node = self.nodes.get(handle); (&node.key, &node.value) })
    }

    /// Returns a reference to the map's maximum key and a reference to its associated
    /// value, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    /// assert_eq!(map.last(), None);
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.last(), Some((&3, &"c")));
    /// ```
    pub fn last(&self) -> Option<(&K, &V)> {
        self.last.map(|handle| { let node = self.nodes.get(handle); (&node.key, &node.value) })
    }

    /// Returns a reference to the value associated with the map's minimum key.
    ///
    /// # Panics
    ///
    /// Panics if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// assert_eq!(*map.front(), "a");
    /// ```
    pub fn front(&self) -> &V { self.try_front().expect("front of an empty map") }

    /// Returns a mutable reference to the value associated with the map's minimum key.
    ///
    /// # Panics
    ///
    /// Panics if the map is empty.
    pub fn front_mut(&mut self) -> &mut V {
        let handle = self.first.expect("front of an empty map");
        &mut self.nodes.get_mut(handle).value
    }

    /// Returns a reference to the value associated with the map's minimum key, or
    /// `Error::Empty` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    /// assert_eq!(map.try_front(), Err(bstree::Error::Empty));
    ///
    /// map.insert(1, "a");
    /// assert_eq!(map.try_front(), Ok(&"a"));
    /// ```
    pub fn try_front(&self) -> Result<&V, Error> {
        self.first().map(|e| e.1).ok_or(Error::Empty)
    }

    /// Returns a reference to the value associated with the map's maximum key.
    ///
    /// # Panics
    ///
    /// Panics if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// assert_eq!(*map.back(), "b");
    /// ```
    pub fn back(&self) -> &V { self.try_back().expect("back of an empty map") }

    /// Returns a mutable reference to the value associated with the map's maximum key.
    ///
    /// # Panics
    ///
    /// Panics if the map is empty.
    pub fn back_mut(&mut self) -> &mut V {
        let handle = self.last.expect("back of an empty map");
        &mut self.nodes.get_mut(handle).value
    }

    /// Returns a reference to the value associated with the map's maximum key, or
    /// `Error::Empty` if the map is empty.
    pub fn try_back(&self) -> Result<&V, Error> {
        self.last().map(|e| e.1).ok_or(Error::Empty)
    }

    /// Returns a cursor positioned on the map's minimum key, or past the end if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    /// assert!(map.begin() == map.end());
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// let mut cursor = map.begin();
    /// assert_eq!(cursor.key_value(), Some((&1, &"a")));
    /// cursor.move_next();
    /// cursor.move_next();
    /// assert!(cursor == map.end());
    /// ```
    pub fn begin(&self) -> Cursor<K, V, C> { Cursor::with_position(self, self.begin_position()) }

    /// Returns a cursor positioned one step past the map's maximum key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// let mut cursor = map.end();
    /// assert_eq!(cursor.key_value(), None);
    /// cursor.move_prev();
    /// assert_eq!(cursor.key_value(), Some((&2, &"b")));
    /// ```
    pub fn end(&self) -> Cursor<K, V, C> { Cursor::with_position(self, self.end_position()) }

    /// Returns a mutable cursor positioned on the map's minimum key, or past the end if the map
    /// is empty.
    pub fn begin_mut(&mut self) -> CursorMut<K, V, C> {
        let position = self.begin_position();
        CursorMut::with_position(self, position)
    }

    /// Returns a mutable cursor positioned one step past the map's maximum key.
    pub fn end_mut(&mut self) -> CursorMut<K, V, C> {
        let position = self.end_position();
        CursorMut::with_position(self, position)
    }

    fn begin_position(&self) -> Position {
        match self.first {
            Some(first) => Position::At(first),
            None => Position::empty(),
        }
    }

    fn end_position(&self) -> Position {
        match self.last {
            Some(last) => Position::At(last).next(&self.nodes),
            None => Position::empty(),
        }
    }

    /// Moves every entry out of the map into a new one, leaving this map empty.
    ///
    /// The returned map takes over the comparator; this map keeps a clone of it.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    ///
    /// let moved = map.take();
    /// assert_eq!(moved.len(), 2);
    /// assert!(map.is_empty());
    /// ```
    pub fn take(&mut self) -> Self where C: Clone {
        let empty = Map::with_cmp(self.cmp.clone());
        mem::replace(self, empty)
    }

    /// Returns an iterator over the map's entries with immutable references to the values.
    ///
    /// The iterator yields the entries in ascending order according to the map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next_back(), Some((&3, &"c")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<K, V, C> {
        let back = match self.last {
            Some(last) => Position::At(last),
            None => Position::empty(),
        };

        Iter::new(self.begin(), Cursor::with_position(self, back), self.len())
    }

    /// Returns an iterator over the map's entries with mutable references to the values.
    ///
    /// The iterator yields the entries in ascending order according to the map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    ///
    /// map.insert("b", 2);
    /// map.insert("a", 1);
    /// map.insert("c", 3);
    ///
    /// let mut i = 1;
    ///
    /// for (_, value) in map.iter_mut() {
    ///     assert_eq!(i, *value);
    ///     *value *= 2;
    ///     i += 1;
    /// }
    ///
    /// assert_eq!(map[&"a"], 2);
    /// assert_eq!(map[&"b"], 4);
    /// assert_eq!(map[&"c"], 6);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<K, V> {
        let handles = node::in_order(&self.nodes, self.first);
        IterMut::new(self.nodes.entries_mut(&handles))
    }

    /// Returns an iterator that consumes the map.
    ///
    /// The iterator yields the entries in ascending order according to the map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.into_iter();
    /// assert_eq!(it.next(), Some((1, "a")));
    /// assert_eq!(it.next(), Some((2, "b")));
    /// assert_eq!(it.next(), Some((3, "c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn into_iter(self) -> IntoIter<K, V> {
        let handles = node::in_order(&self.nodes, self.first);
        IntoIter::new(self.nodes.into_entries(&handles))
    }

    #[cfg(test)]
    fn assert_extrema(&self) {
        let root = self.root;
        assert_eq!(self.first, root.map(|root| Left::extremum(&self.nodes, root)));
        assert_eq!(self.last, root.map(|root| Right::extremum(&self.nodes, root)));
    }
}

impl<K, V, C> Clone for Map<K, V, C> where K: Clone, V: Clone, C: Compare<K> + Clone {
    fn clone(&self) -> Self {
        let mut map = Map {
            nodes: self.nodes.clone(),
            root: self.root,
            first: None,
            last: None,
            cmp: self.cmp.clone(),
        };

        map.reset_extrema();
        map
    }

    fn clone_from(&mut self, other: &Self) {
        self.clear();
        self.cmp = other.cmp.clone();
        self.nodes.clone_from(&other.nodes);
        self.root = other.root;
        self.reset_extrema();
    }
}

impl<K, V, C> Debug for Map<K, V, C> where K: Debug, V: Debug, C: Compare<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C> Default for Map<K, V, C> where C: Compare<K> + Default {
    fn default() -> Self { Map::with_cmp(Default::default()) }
}

impl<K, V, C> Extend<(K, V)> for Map<K, V, C> where C: Compare<K> {
    fn extend<I: IntoIterator<Item=(K, V)>>(&mut self, it: I) {
        for (k, v) in it { self.insert(k, v); }
    }
}

impl<K, V, C> FromIterator<(K, V)> for Map<K, V, C> where C: Compare<K> + Default {
    fn from_iter<I: IntoIterator<Item=(K, V)>>(it: I) -> Self {
        let mut map: Self = Default::default();
        map.extend(it);
        map
    }
}

impl<'a, K, V, C, Q: ?Sized> ops::Index<&'a Q> for Map<K, V, C>
    where C: Compare<K> + Compare<Q, K> {

    type Output = V;
    fn index(&self, key: &Q) -> &V { self.get(key).expect("key not found") }
}

impl<'a, K, V, C> IntoIterator for &'a Map<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, C>;
    fn into_iter(self) -> Iter<'a, K, V, C> { self.iter() }
}

impl<'a, K, V, C> IntoIterator for &'a mut Map<K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;
    fn into_iter(self) -> IterMut<'a, K, V> { self.iter_mut() }
}

impl<K, V, C> IntoIterator for Map<K, V, C> where C: Compare<K> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;
    fn into_iter(self) -> IntoIter<K, V> { self.into_iter() }
}

impl<K, V, C> PartialEq for Map<K, V, C> where V: PartialEq, C: Compare<K> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() { return false; }

        let mut l = self.begin();
        let mut r = other.begin();

        for _ in 0..self.len() {
            if l != r { return false; }
            l.move_next();
            r.move_next();
        }

        true
    }
}

impl<K, V, C> Eq for Map<K, V, C> where V: Eq, C: Compare<K> {}

#[cfg(test)]
mod test {
    use super::Map;

    #[test]
    fn extrema_follow_inserts() {
        let mut map = Map::new();
        map.assert_extrema();

        for &key in &[5, 3, 8, 1, 4, 9, 7, 2, 6, 0] {
            map.insert(key, ());
            map.assert_extrema();
        }

        assert_eq!(map.first(), Some((&0, &())));
        assert_eq!(map.last(), Some((&9, &())));
    }

    #[test]
    fn extrema_recomputed_on_clone() {
        let mut map = Map::new();
        for key in (0..16).rev() { map.insert(key, key * 2); }

        let copy = map.clone();
        copy.assert_extrema();

        let mut other = Map::new();
        other.insert(100, 0);
        other.clone_from(&map);
        other.assert_extrema();
        assert_eq!(other.first(), Some((&0, &0)));
        assert_eq!(other.last(), Some((&15, &30)));
    }

    #[test]
    fn extrema_reset_on_clear() {
        let mut map = Map::new();
        map.insert(1, "a");
        map.insert(2, "b");
        map.clear();
        map.assert_extrema();
        assert_eq!(map.first(), None);

        map.insert(3, "c");
        map.assert_extrema();
        assert_eq!(map.first(), map.last());
    }
}
