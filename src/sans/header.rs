//! States processing record headers.

use either::Either::{self, Left, Right};
use thiserror::Error;
use zerocopy::byteorder::big_endian::U16;

use super::tag::Tag;

/// An error advancing over a record header.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HeaderError {
    /// Found a zero record length, used only as padding between volumes.
    #[error("Found zero-length padding between records.")]
    Padding,
    /// Record length is odd.
    #[error("Odd record length ({0}).")]
    OddLength(u16),
    /// Record length does not cover the header itself.
    #[error("Insufficient record length ({0}).")]
    ShortLength(u16),
}

impl From<Padding> for HeaderError {
    fn from(_: Padding) -> Self {
        Self::Padding
    }
}

/// The bytes of a record header.
pub const HEADER_SIZE: u16 = 4;

/// A record, as framed from its header.
///
/// Built by a driver for each record and discarded once the record has been
/// processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord {
    /// The dispatch key of the record.
    pub tag: Tag,
    /// The number of 16-bit words following the header.
    pub words: u16,
    /// The stream offset of the record's first byte.
    pub offset: u64,
}

/// A padding word found in place of a record length.
#[derive(Debug)]
pub struct Padding;

/// State token to decode the length word of a record header.
#[derive(Debug)]
pub struct RecordLength(pub(super) ());

impl RecordLength {
    /// Transition to another state by decoding a record length.
    ///
    /// Returns a padding marker for a zero length, otherwise a successor
    /// state token holding the number of payload words.
    pub fn advance(self, r: [u8; 2]) -> Result<Either<Padding, RecordTag>, HeaderError> {
        let length = U16::from_bytes(r).get();

        if length == 0 {
            return Ok(Left(Padding));
        }

        if !length.is_multiple_of(2) {
            Err(HeaderError::OddLength(length))?;
        }

        if length < HEADER_SIZE {
            Err(HeaderError::ShortLength(length))?;
        }

        Ok(Right(RecordTag {
            words: length / 2 - HEADER_SIZE / 2,
        }))
    }
}

/// State token to decode the tag word of a record header.
#[derive(Debug)]
pub struct RecordTag {
    pub(super) words: u16,
}

impl RecordTag {
    /// Transition to another state by decoding a record tag.
    ///
    /// Returns the tag and the number of payload words.
    pub fn advance(self, r: [u8; 2]) -> (Tag, u16) {
        (Tag(U16::from_bytes(r).get()), self.words)
    }
}

/// Entry state for framing the next record.
pub fn record() -> RecordLength {
    RecordLength(())
}
