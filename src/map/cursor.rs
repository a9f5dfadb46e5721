use compare::{Compare, Natural};
use std::fmt::{self, Debug};
use std::mem;
use super::Map;
use super::super::node::{self, Dir, Handle, Left, Node, Nodes, Right};
use super::super::Error;

/// Where a cursor points.
///
/// A cursor that steps off either end of the map remembers the edge node it left and how many
/// steps it has taken beyond it, so that stepping back the same number of times returns to that
/// node. `edge` is `None` only for cursors into an empty map.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Position {
    Unbound,
    At(Handle),
    After { edge: Option<Handle>, steps: usize },
    Before { edge: Option<Handle>, steps: usize },
}

impl Position {
    /// The position of both `begin` and `end` in an empty map.
    pub fn empty() -> Self { Position::After { edge: None, steps: 1 } }

    pub fn next<K, V>(self, nodes: &Nodes<K, V>) -> Self {
        match self {
            Position::Unbound => Position::Unbound,
            Position::At(handle) => match Right::neighbor(nodes, handle) {
                Some(next) => Position::At(next),
                None => Position::After { edge: Some(handle), steps: 1 },
            },
            Position::After { edge, steps } =>
                Position::After { edge: edge, steps: steps.saturating_add(1) },
            Position::Before { edge, steps } if steps > 1 =>
                Position::Before { edge: edge, steps: steps - 1 },
            Position::Before { edge: Some(edge), .. } => Position::At(edge),
            Position::Before { edge: None, .. } => Position::empty(),
        }
    }

    pub fn prev<K, V>(self, nodes: &Nodes<K, V>) -> Self {
        match self {
            Position::Unbound => Position::Unbound,
            Position::At(handle) => match Left::neighbor(nodes, handle) {
                Some(prev) => Position::At(prev),
                None => Position::Before { edge: Some(handle), steps: 1 },
            },
            Position::Before { edge, steps } =>
                Position::Before { edge: edge, steps: steps.saturating_add(1) },
            Position::After { edge, steps } if steps > 1 =>
                Position::After { edge: edge, steps: steps - 1 },
            Position::After { edge: Some(edge), .. } => Position::At(edge),
            Position::After { edge: None, .. } => Position::Before { edge: None, steps: 1 },
        }
    }

    fn check(self) -> Result<Handle, Error> {
        match self {
            Position::At(handle) => Ok(handle),
            Position::Unbound => Err(Error::Unbound),
            Position::After { .. } | Position::Before { .. } => Err(Error::OutOfBounds),
        }
    }

    // Out-of-bounds positions compare by direction only; step counts and edges are ignored.
    fn same_side(self, other: Self) -> bool { mem::discriminant(&self) == mem::discriminant(&other) }
}

/// A cursor over a map's entries with immutable access to the values.
///
/// A cursor is either positioned on an entry, stepped past one end of its map, or unbound (not
/// associated with any map). Acquire a bound cursor through [`Map::begin`], [`Map::end`] or
/// [`Map::find`].
///
/// Two cursors are equal if both are positioned on entries with equivalent keys and equal
/// values, if both are past the end, if both are before the beginning, or if both are unbound.
///
/// [`Map::begin`]: struct.Map.html#method.begin
/// [`Map::end`]: struct.Map.html#method.end
/// [`Map::find`]: struct.Map.html#method.find
pub struct Cursor<'a, K: 'a, V: 'a, C: 'a = Natural<K>> where C: Compare<K> {
    map: Option<&'a Map<K, V, C>>,
    position: Position,
}

impl<'a, K, V, C> Cursor<'a, K, V, C> where C: Compare<K> {
    /// Creates a cursor that is not associated with any map.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::map::Cursor;
    ///
    /// let mut cursor: Cursor<i32, &str> = Cursor::new();
    /// assert!(!cursor.is_bound());
    ///
    /// cursor.move_next();
    /// assert_eq!(cursor.get(), Err(bstree::Error::Unbound));
    /// ```
    pub fn new() -> Self { Cursor { map: None, position: Position::Unbound } }

    pub(super) fn at(map: &'a Map<K, V, C>, handle: Handle) -> Self {
        Cursor::with_position(map, Position::At(handle))
    }

    pub(super) fn with_position(map: &'a Map<K, V, C>, position: Position) -> Self {
        Cursor { map: Some(map), position: position }
    }

    /// Checks if the cursor is associated with a map.
    pub fn is_bound(&self) -> bool { self.map.is_some() }

    /// Checks if the cursor has been stepped past either end of its map.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    /// map.insert(1, "a");
    ///
    /// let mut cursor = map.begin();
    /// assert!(!cursor.is_out_of_bounds());
    /// cursor.move_prev();
    /// assert!(cursor.is_out_of_bounds());
    /// ```
    pub fn is_out_of_bounds(&self) -> bool { self.position.check() == Err(Error::OutOfBounds) }

    /// Moves the cursor to the next entry in ascending order.
    ///
    /// Stepping from the last entry moves the cursor past the end; further steps move it further
    /// out. Has no effect on an unbound cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// let mut cursor = map.begin();
    /// cursor.move_next();
    /// assert_eq!(cursor.key(), Some(&2));
    /// cursor.move_next();
    /// assert_eq!(cursor.key(), None);
    /// ```
    pub fn move_next(&mut self) {
        if let Some(map) = self.map { self.position = self.position.next(&map.nodes); }
    }

    /// Moves the cursor to the previous entry in ascending order.
    ///
    /// Stepping from the first entry moves the cursor before the beginning; further steps move it
    /// further out. Has no effect on an unbound cursor.
    pub fn move_prev(&mut self) {
        if let Some(map) = self.map { self.position = self.position.prev(&map.nodes); }
    }

    /// Returns the key and value at the cursor, or `None` if the cursor is not positioned on an
    /// entry.
    pub fn key_value(&self) -> Option<(&'a K, &'a V)> { self.get().ok() }

    /// Returns the key at the cursor, or `None` if the cursor is not positioned on an entry.
    pub fn key(&self) -> Option<&'a K> { self.key_value().map(|e| e.0) }

    /// Returns the value at the cursor, or `None` if the cursor is not positioned on an entry.
    pub fn value(&self) -> Option<&'a V> { self.key_value().map(|e| e.1) }

    /// Returns the key and value at the cursor.
    ///
    /// Fails with `Error::OutOfBounds` if the cursor has been stepped past either end of its map
    /// and with `Error::Unbound` if it is not associated with a map.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Error;
    ///
    /// let mut map = bstree::Map::new();
    /// map.insert(1, "a");
    ///
    /// assert_eq!(map.begin().get(), Ok((&1, &"a")));
    /// assert_eq!(map.end().get(), Err(Error::OutOfBounds));
    /// ```
    pub fn get(&self) -> Result<(&'a K, &'a V), Error> {
        let handle = self.position.check()?;
        let map = self.map.ok_or(Error::Unbound)?;
        let node = map.nodes.get(handle);
        Ok((&node.key, &node.value))
    }

    fn node(&self) -> Option<&'a Node<K, V>> {
        match (self.map, self.position) {
            (Some(map), Position::At(handle)) => Some(map.nodes.get(handle)),
            _ => None,
        }
    }
}

impl<'a, K, V, C> Clone for Cursor<'a, K, V, C> where C: Compare<K> {
    fn clone(&self) -> Self { *self }
}

impl<'a, K, V, C> Copy for Cursor<'a, K, V, C> where C: Compare<K> {}

impl<'a, K, V, C> Default for Cursor<'a, K, V, C> where C: Compare<K> {
    fn default() -> Self { Cursor::new() }
}

impl<'a, K, V, C> Debug for Cursor<'a, K, V, C> where K: Debug, V: Debug, C: Compare<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("entry", &self.key_value())
            .finish()
    }
}

impl<'a, K, V, C> PartialEq for Cursor<'a, K, V, C> where V: PartialEq, C: Compare<K> {
    fn eq(&self, other: &Self) -> bool {
        match (self.map, self.node(), other.node()) {
            (Some(map), Some(l), Some(r)) => node::content_eq(&map.cmp, l, r),
            (_, None, None) => self.position.same_side(other.position),
            _ => false,
        }
    }
}

impl<'a, K, V, C> From<CursorMut<'a, K, V, C>> for Cursor<'a, K, V, C> where C: Compare<K> {
    fn from(cursor: CursorMut<'a, K, V, C>) -> Self { cursor.into_cursor() }
}

/// A cursor over a map's entries with mutable access to the values.
///
/// Behaves like [`Cursor`](struct.Cursor.html), but borrows its map mutably. Acquire a bound
/// cursor through [`Map::begin_mut`], [`Map::end_mut`], [`Map::find_mut`] or [`Map::insert`].
///
/// [`Map::begin_mut`]: struct.Map.html#method.begin_mut
/// [`Map::end_mut`]: struct.Map.html#method.end_mut
/// [`Map::find_mut`]: struct.Map.html#method.find_mut
/// [`Map::insert`]: struct.Map.html#method.insert
pub struct CursorMut<'a, K: 'a, V: 'a, C: 'a = Natural<K>> where C: Compare<K> {
    map: Option<&'a mut Map<K, V, C>>,
    position: Position,
}

impl<'a, K, V, C> CursorMut<'a, K, V, C> where C: Compare<K> {
    /// Creates a cursor that is not associated with any map.
    pub fn new() -> Self { CursorMut { map: None, position: Position::Unbound } }

    pub(super) fn at(map: &'a mut Map<K, V, C>, handle: Handle) -> Self {
        CursorMut::with_position(map, Position::At(handle))
    }

    pub(super) fn with_position(map: &'a mut Map<K, V, C>, position: Position) -> Self {
        CursorMut { map: Some(map), position: position }
    }

    /// Returns an immutable cursor at the same position, borrowing this one.
    pub fn as_cursor(&self) -> Cursor<K, V, C> {
        Cursor { map: self.map.as_ref().map(|map| &**map), position: self.position }
    }

    /// Converts the cursor into an immutable cursor at the same position.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    /// map.insert(1, "a");
    ///
    /// let (cursor, _) = map.insert(2, "b");
    /// let mut cursor = cursor.into_cursor();
    /// cursor.move_prev();
    /// assert_eq!(cursor.key_value(), Some((&1, &"a")));
    /// ```
    pub fn into_cursor(self) -> Cursor<'a, K, V, C> {
        let CursorMut { map, position } = self;
        Cursor { map: map.map(|map| &*map), position: position }
    }

    /// Checks if the cursor is associated with a map.
    pub fn is_bound(&self) -> bool { self.map.is_some() }

    /// Checks if the cursor has been stepped past either end of its map.
    pub fn is_out_of_bounds(&self) -> bool { self.position.check() == Err(Error::OutOfBounds) }

    /// Moves the cursor to the next entry in ascending order.
    ///
    /// Stepping from the last entry moves the cursor past the end; further steps move it further
    /// out. Has no effect on an unbound cursor.
    pub fn move_next(&mut self) {
        if let Some(ref map) = self.map { self.position = self.position.next(&map.nodes); }
    }

    /// Moves the cursor to the previous entry in ascending order.
    ///
    /// Stepping from the first entry moves the cursor before the beginning; further steps move it
    /// further out. Has no effect on an unbound cursor.
    pub fn move_prev(&mut self) {
        if let Some(ref map) = self.map { self.position = self.position.prev(&map.nodes); }
    }

    /// Returns the key and value at the cursor, or `None` if the cursor is not positioned on an
    /// entry.
    pub fn key_value(&self) -> Option<(&K, &V)> { self.get().ok() }

    /// Returns the key and a mutable reference to the value at the cursor, or `None` if the
    /// cursor is not positioned on an entry.
    pub fn key_value_mut(&mut self) -> Option<(&K, &mut V)> { self.get_mut().ok() }

    /// Returns the key at the cursor, or `None` if the cursor is not positioned on an entry.
    pub fn key(&self) -> Option<&K> { self.key_value().map(|e| e.0) }

    /// Returns the value at the cursor, or `None` if the cursor is not positioned on an entry.
    pub fn value(&self) -> Option<&V> { self.key_value().map(|e| e.1) }

    /// Returns a mutable reference to the value at the cursor, or `None` if the cursor is not
    /// positioned on an entry.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstree::Map::new();
    /// map.insert(1, "a");
    ///
    /// {
    ///     let mut cursor = map.begin_mut();
    ///     *cursor.value_mut().unwrap() = "b";
    ///     cursor.move_next();
    ///     assert_eq!(cursor.value_mut(), None);
    /// }
    ///
    /// assert_eq!(map[&1], "b");
    /// ```
    pub fn value_mut(&mut self) -> Option<&mut V> { self.key_value_mut().map(|e| e.1) }

    /// Returns the key and value at the cursor.
    ///
    /// Fails with `Error::OutOfBounds` if the cursor has been stepped past either end of its map
    /// and with `Error::Unbound` if it is not associated with a map.
    pub fn get(&self) -> Result<(&K, &V), Error> {
        let handle = self.position.check()?;
        let map = self.map.as_ref().ok_or(Error::Unbound)?;
        let node = map.nodes.get(handle);
        Ok((&node.key, &node.value))
    }

    /// Returns the key and a mutable reference to the value at the cursor.
    ///
    /// Fails like [`get`](#method.get).
    pub fn get_mut(&mut self) -> Result<(&K, &mut V), Error> {
        let handle = self.position.check()?;
        let map = self.map.as_mut().ok_or(Error::Unbound)?;
        let node = map.nodes.get_mut(handle);
        Ok((&node.key, &mut node.value))
    }

    /// Converts the cursor into the key and a mutable reference to the value at its position,
    /// with the same lifetime as the map.
    pub fn into_key_value_mut(self) -> Result<(&'a K, &'a mut V), Error> {
        let handle = self.position.check()?;
        let map = self.map.ok_or(Error::Unbound)?;
        let node = map.nodes.get_mut(handle);
        Ok((&node.key, &mut node.value))
    }
}

impl<'a, K, V, C> Default for CursorMut<'a, K, V, C> where C: Compare<K> {
    fn default() -> Self { CursorMut::new() }
}

impl<'a, K, V, C> Debug for CursorMut<'a, K, V, C> where K: Debug, V: Debug, C: Compare<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("position", &self.position)
            .field("entry", &self.key_value())
            .finish()
    }
}

impl<'a, K, V, C> PartialEq for CursorMut<'a, K, V, C> where V: PartialEq, C: Compare<K> {
    fn eq(&self, other: &Self) -> bool { self.as_cursor() == other.as_cursor() }
}
