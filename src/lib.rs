//! An ordered map based on an unbalanced binary search tree.
//!
//! [`Map`](map/struct.Map.html) keeps its entries sorted by a user-supplied comparator and exposes
//! bidirectional [`Cursor`](map/struct.Cursor.html)s in addition to ordinary iterators. The tree is
//! never rebalanced.
//!
//! # Examples
//!
//! ```
//! let mut map = bstree::Map::new();
//!
//! map.insert(3, "c");
//! map.insert(1, "a");
//! map.insert(2, "b");
//!
//! assert_eq!(*map.front(), "a");
//! assert_eq!(*map.back(), "c");
//!
//! let mut cursor = map.end();
//! cursor.move_prev();
//! assert_eq!(cursor.key_value(), Some((&3, &"c")));
//! ```

#![deny(missing_docs)]

extern crate compare;

mod error;
mod less;
mod node;
pub mod map;

#[cfg(feature = "ordered_iter")]
mod ordered_iter;

#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use error::Error;
pub use less::{less, Less};
pub use map::{Cursor, CursorMut, Map};
