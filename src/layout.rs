//! Values decoded from record payloads.
//!
//! Each value is produced by a single field decoder, published to a receiver,
//! and dropped. Nothing here is retained by the decoder.

use alloc::vec::Vec;
use core::fmt;

/// The longest name a record may carry, in bytes.
pub const NAME_CAPACITY: usize = 32;

/// A library, structure or reference name.
///
/// Holds 1 to 32 characters, each one of `A-Z`, `a-z`, `0-9`, `_`, `?` or
/// `$`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Name {
    bytes: [u8; NAME_CAPACITY],
    len: u8,
}

impl Name {
    /// Whether a byte may appear in a name.
    pub const fn is_name_byte(b: u8) -> bool {
        matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'_' | b'?' | b'$')
    }

    /// Build a name from bytes already checked for length and characters.
    pub(crate) fn from_checked(r: &[u8]) -> Self {
        let mut bytes = [0; NAME_CAPACITY];
        bytes[..r.len()].copy_from_slice(r);

        Self {
            bytes,
            len: r.len() as u8,
        }
    }

    /// The characters of the name.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn as_str(&self) -> &str {
        // Every name byte is ASCII.
        core::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Always false for a decoded name; present for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Name").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A drawing layer identifier in `0..=63`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Layer(u8);

impl Layer {
    pub const MAX: u8 = 63;

    /// Create a layer, if the identifier is in range.
    pub const fn new(id: i16) -> Option<Self> {
        if id >= 0 && id <= Self::MAX as i16 {
            Some(Self(id as u8))
        } else {
            None
        }
    }

    pub const fn id(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A point in database units.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An ordered, non-empty sequence of points.
///
/// Chains published as boundaries additionally hold at least three points and
/// are closed: the first point equals the last.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chain(Vec<Point>);

impl Chain {
    pub(crate) fn from_points(points: Vec<Point>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a decoded chain.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<Point> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.0.last().copied()
    }

    /// Whether the first point equals the last.
    pub fn is_closed(&self) -> bool {
        self.first() == self.last()
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Point;
    type IntoIter = core::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
