use compare::{Compare, Natural};
use std::vec;
use super::Cursor;

/// An iterator over the map's entries with immutable references to the values.
///
/// The iterator yields the entries in ascending order according to the map's comparator.
///
/// # Examples
///
/// Acquire through [`Map::iter`](struct.Map.html#method.iter) or the `IntoIterator` trait:
///
/// ```
/// let mut map = bstree::Map::new();
///
/// map.insert(2, "b");
/// map.insert(1, "a");
/// map.insert(3, "c");
///
/// for (key, value) in &map {
///     println!("{:?}: {:?}", key, value);
/// }
/// ```
pub struct Iter<'a, K: 'a, V: 'a, C: 'a = Natural<K>> where C: Compare<K> {
    front: Cursor<'a, K, V, C>,
    back: Cursor<'a, K, V, C>,
    len: usize,
}

impl<'a, K, V, C> Iter<'a, K, V, C> where C: Compare<K> {
    pub(super) fn new(front: Cursor<'a, K, V, C>, back: Cursor<'a, K, V, C>, len: usize) -> Self {
        Iter { front: front, back: back, len: len }
    }
}

impl<'a, K, V, C> Clone for Iter<'a, K, V, C> where C: Compare<K> {
    fn clone(&self) -> Self { Iter { front: self.front, back: self.back, len: self.len } }
}

impl<'a, K, V, C> Iterator for Iter<'a, K, V, C> where C: Compare<K> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        if self.len == 0 { return None; }
        let entry = self.front.key_value();
        self.front.move_next();
        self.len -= 1;
        entry
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.len, Some(self.len)) }
}

impl<'a, K, V, C> DoubleEndedIterator for Iter<'a, K, V, C> where C: Compare<K> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> {
        if self.len == 0 { return None; }
        let entry = self.back.key_value();
        self.back.move_prev();
        self.len -= 1;
        entry
    }
}

impl<'a, K, V, C> ExactSizeIterator for Iter<'a, K, V, C> where C: Compare<K> {}

/// An iterator over the map's entries with mutable references to the values.
///
/// The iterator yields the entries in ascending order according to the map's comparator.
///
/// # Examples
///
/// Acquire through [`Map::iter_mut`](struct.Map.html#method.iter_mut) or the
/// `IntoIterator` trait:
///
/// ```
/// let mut map = bstree::Map::new();
///
/// map.insert(2, "b");
/// map.insert(1, "a");
/// map.insert(3, "c");
///
/// for (key, value) in &mut map {
///     println!("{:?}: {:?}", key, value);
/// }
/// ```
pub struct IterMut<'a, K: 'a, V: 'a>(vec::IntoIter<(&'a K, &'a mut V)>);

impl<'a, K, V> IterMut<'a, K, V> {
    pub(super) fn new(entries: Vec<(&'a K, &'a mut V)>) -> Self { IterMut(entries.into_iter()) }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);
    fn next(&mut self) -> Option<(&'a K, &'a mut V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for IterMut<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a mut V)> { self.0.next_back() }
}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {}

/// An iterator that consumes the map.
///
/// The iterator yields the entries in ascending order according to the map's comparator.
///
/// # Examples
///
/// Acquire through [`Map::into_iter`](struct.Map.html#method.into_iter) or the
/// `IntoIterator` trait:
///
/// ```
/// let mut map = bstree::Map::new();
///
/// map.insert(2, "b");
/// map.insert(1, "a");
/// map.insert(3, "c");
///
/// for (key, value) in map {
///     println!("{:?}: {:?}", key, value);
/// }
/// ```
#[derive(Clone)]
pub struct IntoIter<K, V>(vec::IntoIter<(K, V)>);

impl<K, V> IntoIter<K, V> {
    pub(super) fn new(entries: Vec<(K, V)>) -> Self { IntoIter(entries.into_iter()) }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);
    fn next(&mut self) -> Option<(K, V)> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> { self.0.next_back() }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
