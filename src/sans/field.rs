//! Decoders for record payloads.

use alloc::vec::Vec;

use thiserror::Error;
use zerocopy::{
    FromBytes, Immutable, KnownLayout,
    byteorder::big_endian::{I16, I32},
};

use crate::layout::{Chain, Layer, NAME_CAPACITY, Name, Point};

/// An error decoding a record payload.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Payload is not the required size.
    #[error("Invalid payload length ({found} words), must be {required}.")]
    Length { found: u16, required: u16 },
    /// Name payload is empty or longer than a name may be.
    #[error("Invalid name length ({0} bytes), must be 1 to 32.")]
    NameLength(usize),
    /// Name holds a disallowed character.
    #[error("Invalid name character ({byte:#04X}) at position {position}.")]
    NameCharacter { byte: u8, position: usize },
    /// Layer identifier is outside `0..=63`.
    #[error("Layer ({0}) out of range, must be 0 to 63.")]
    LayerRange(i16),
    /// Chain payload does not hold a whole number of points.
    #[error("Invalid point chain length ({0} words), must be a multiple of 4.")]
    ChainLength(u16),
    /// Chain payload holds no points.
    #[error("Found empty point chain.")]
    EmptyChain,
    /// Boundary chain has too few points to enclose an area.
    #[error("Boundary has {0} points, must have at least 3.")]
    BoundaryPoints(usize),
    /// Boundary chain does not end where it starts.
    #[error("Boundary is not closed, starts at {first} and ends at {last}.")]
    OpenBoundary { first: Point, last: Point },
}

/// Words per encoded point.
pub const POINT_WORDS: u16 = 4;

/// Fewest points in a boundary chain.
pub const MIN_BOUNDARY_POINTS: usize = 3;

/// How a record's payload is handled.
///
/// Returned by the grammar for each accepted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content {
    /// A payload of exactly this many words, read and discarded.
    Skip(u16),
    /// The library name.
    LibraryName,
    /// The name of a structure.
    StructureName,
    /// The layer of a boundary.
    Layer,
    /// The closed point chain of a boundary.
    Boundary,
    /// The name of the structure a reference points to.
    ReferenceName,
    /// The placement point of a reference.
    ReferenceOrigin,
}

impl Content {
    /// Check the declared payload size before any payload is read.
    pub fn expect(self, words: u16) -> Result<(), FieldError> {
        let exact = |required| {
            if words == required {
                Ok(())
            } else {
                Err(FieldError::Length {
                    found: words,
                    required,
                })
            }
        };

        match self {
            Content::Skip(required) => exact(required),
            Content::LibraryName | Content::StructureName | Content::ReferenceName => {
                let size = usize::from(words) * 2;
                if size == 0 || size > NAME_CAPACITY {
                    Err(FieldError::NameLength(size))?;
                }
                Ok(())
            }
            Content::Layer => exact(1),
            Content::ReferenceOrigin => exact(POINT_WORDS),
            Content::Boundary => {
                if !words.is_multiple_of(POINT_WORDS) {
                    Err(FieldError::ChainLength(words))?;
                }
                if words == 0 {
                    Err(FieldError::EmptyChain)?;
                }
                Ok(())
            }
        }
    }

    /// Decode a payload whose size has passed [`Content::expect`].
    pub fn decode(self, r: &[u8]) -> Result<Field, FieldError> {
        Ok(match self {
            Content::Skip(_) => Field::Skipped,
            Content::LibraryName => Field::LibraryName(decode_name(r)?),
            Content::StructureName => Field::StructureName(decode_name(r)?),
            Content::ReferenceName => Field::ReferenceName(decode_name(r)?),
            Content::Layer => Field::Layer(decode_layer(words(r)?)?),
            Content::ReferenceOrigin => Field::ReferenceOrigin(decode_point(words(r)?)),
            Content::Boundary => Field::Boundary(decode_boundary(r)?),
        })
    }
}

/// A decoded payload, tagged with the role it plays in the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Skipped,
    LibraryName(Name),
    StructureName(Name),
    Layer(Layer),
    Boundary(Chain),
    ReferenceName(Name),
    ReferenceOrigin(Point),
}

fn words<const N: usize>(r: &[u8]) -> Result<[u8; N], FieldError> {
    r.try_into().map_err(|_| FieldError::Length {
        found: (r.len() / 2) as u16,
        required: (N / 2) as u16,
    })
}

/// Decode a null-padded name.
pub fn decode_name(r: &[u8]) -> Result<Name, FieldError> {
    if r.is_empty() || r.len() > NAME_CAPACITY {
        Err(FieldError::NameLength(r.len()))?;
    }

    let r = match r.split_last() {
        Some((&0, rest)) => rest,
        _ => r,
    };

    if r.is_empty() {
        Err(FieldError::NameLength(0))?;
    }

    if let Some(position) = r.iter().position(|b| !Name::is_name_byte(*b)) {
        Err(FieldError::NameCharacter {
            byte: r[position],
            position,
        })?;
    }

    Ok(Name::from_checked(r))
}

/// Decode a layer identifier.
pub fn decode_layer(r: [u8; 2]) -> Result<Layer, FieldError> {
    let id = I16::from_bytes(r).get();
    Layer::new(id).ok_or(FieldError::LayerRange(id))
}

#[repr(C)]
#[derive(FromBytes, KnownLayout, Immutable)]
struct XyPair {
    x: I32,
    y: I32,
}

impl From<&XyPair> for Point {
    fn from(p: &XyPair) -> Self {
        Point::new(p.x.get(), p.y.get())
    }
}

/// Decode a single point.
pub fn decode_point(r: [u8; 8]) -> Point {
    let pair: XyPair = zerocopy::transmute!(r);
    Point::from(&pair)
}

/// Decode a non-empty chain of points.
pub fn decode_chain(r: &[u8]) -> Result<Chain, FieldError> {
    let pairs = <[XyPair]>::ref_from_bytes(r)
        .map_err(|_| FieldError::ChainLength((r.len() / 2) as u16))?;

    if pairs.is_empty() {
        Err(FieldError::EmptyChain)?;
    }

    Ok(Chain::from_points(pairs.iter().map(Point::from).collect::<Vec<_>>()))
}

/// Decode a chain, and check that it forms a closed boundary.
pub fn decode_boundary(r: &[u8]) -> Result<Chain, FieldError> {
    let chain = decode_chain(r)?;

    if chain.len() < MIN_BOUNDARY_POINTS {
        Err(FieldError::BoundaryPoints(chain.len()))?;
    }

    if let (Some(first), Some(last)) = (chain.first(), chain.last())
        && first != last
    {
        Err(FieldError::OpenBoundary { first, last })?;
    }

    Ok(chain)
}
