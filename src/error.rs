use std::error;
use std::fmt;

/// An error returned by the checked accessors of a map or cursor.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Error {
    /// The map holds no entries.
    Empty,
    /// The cursor has been stepped past the first or last entry of its map.
    OutOfBounds,
    /// The cursor is not associated with a map.
    Unbound,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Error::Empty => "map is empty",
            Error::OutOfBounds => "cursor is out of bounds",
            Error::Unbound => "cursor is not bound to a map",
        })
    }
}

impl error::Error for Error {}
