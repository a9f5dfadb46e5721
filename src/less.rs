//! Comparators built from "less than" predicates.

use compare::Compare;
use std::cmp::Ordering;

/// A comparator that orders keys using a strict weak ordering predicate.
///
/// Two keys `a` and `b` are equivalent when neither `f(a, b)` nor `f(b, a)` holds.
///
/// Acquire through [`less`](fn.less.html).
#[derive(Clone, Copy, Debug, Default)]
pub struct Less<F>(F);

/// Returns a comparator that orders keys using the given "less than" predicate.
///
/// # Examples
///
/// ```
/// let mut map = bstree::Map::with_cmp(bstree::less(|l: &i32, r: &i32| l > r));
///
/// map.insert(2, "b");
/// map.insert(1, "a");
/// map.insert(3, "c");
///
/// assert_eq!(map.iter().map(|e| *e.0).collect::<Vec<_>>(), [3, 2, 1]);
/// ```
pub fn less<F>(f: F) -> Less<F> { Less(f) }

impl<F, T: ?Sized> Compare<T> for Less<F> where F: Fn(&T, &T) -> bool {
    fn compare(&self, l: &T, r: &T) -> Ordering {
        if (self.0)(l, r) {
            Ordering::Less
        } else if (self.0)(r, l) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}
