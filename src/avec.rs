//! Convenience interfaces for decoding whole streams.
//!
//! The functions in this module decode streams from readers and slices,
//! publishing every decoded value to a [`Receiver`]. Pass `&mut ()` to only
//! validate a stream.

mod error;
#[cfg(feature = "std")]
pub mod reader;
pub mod slice;

pub use error::{Error, ErrorKind};
#[cfg(feature = "std")]
pub use reader::{decode as decode_reader, decode_with as decode_reader_with};
pub use slice::{decode as decode_slice, decode_with as decode_slice_with};

use either::Either::{Left, Right};

use crate::{
    layout::{Chain, Layer, Name, Point},
    sans::{
        Decoder,
        field::{Content, Field},
        header::{self, HeaderError, RawRecord},
    },
};

/// Receive records and values as they are decoded.
///
/// Values are published once they pass validation and are dropped when the
/// call returns.
///
/// The default implementation of each method ignores received values.
#[allow(unused_variables)]
pub trait Receiver {
    /// Add a record accepted by the grammar, before its payload is checked.
    fn add_record(&mut self, record: &RawRecord) {}
    /// Add the library name.
    fn add_library_name(&mut self, name: &Name) {}
    /// Add the name of a structure.
    fn add_structure_name(&mut self, name: &Name) {}
    /// Add the layer of a boundary.
    fn add_layer(&mut self, layer: Layer) {}
    /// Add the closed outline of a boundary.
    fn add_boundary(&mut self, xy: &Chain) {}
    /// Add the name of the structure a reference points to.
    fn add_reference_name(&mut self, name: &Name) {}
    /// Add the placement point of a reference.
    fn add_reference_origin(&mut self, origin: Point) {}
}

impl Receiver for () {}

/// Decoding policy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Consume zero length words between records as padding.
    ///
    /// By default, a zero length is a malformed header.
    pub skip_padding: bool,
}

/// A source of whole 16-bit words.
pub(crate) trait Source {
    /// Offset of the next unread byte.
    fn offset(&self) -> u64;

    /// Read exactly `n` words, or fail without consuming a partial read.
    fn read_words(&mut self, n: usize) -> Result<&[u8], Error>;

    /// Read and discard exactly `n` words.
    fn skip_words(&mut self, n: usize) -> Result<(), Error>;

    /// Whether no bytes remain.
    fn is_exhausted(&mut self) -> Result<bool, Error>;

    fn read_word(&mut self) -> Result<[u8; 2], Error> {
        let r = self.read_words(1)?;
        Ok([r[0], r[1]])
    }
}

/// Run the state machine over a source until `ENDLIB`, then check that the
/// source is exhausted.
pub(crate) fn drive(
    s: &mut impl Source,
    o: &mut impl Receiver,
    options: &Options,
) -> Result<(), Error> {
    let mut state = Decoder::default();

    let end = loop {
        let offset = s.offset();

        let record_tag = match header::record().advance(s.read_word()?) {
            Ok(Right(record_tag)) => record_tag,
            Ok(Left(_)) if options.skip_padding => {
                tracing::debug!(offset, "skipped padding word");
                continue;
            }
            Ok(Left(padding)) => Err(Error::Header {
                offset,
                source: HeaderError::from(padding),
            })?,
            Err(source) => Err(Error::Header { offset, source })?,
        };

        let (tag, words) = record_tag.advance(s.read_word()?);
        let record = RawRecord { tag, words, offset };

        tracing::trace!(offset, tag = %tag, words, "record");

        let (content, successor) = state
            .advance(tag)
            .map_err(|source| Error::Grammar { offset, source })?;

        o.add_record(&record);

        decode_payload(s, o, content, &record)?;

        state = match successor {
            Left(state) => state,
            Right(end) => break end,
        };
    };

    let offset = s.offset();
    tracing::debug!(offset, "accepted ENDLIB");

    end.advance(s.is_exhausted()?)
        .map_err(|source| Error::TrailingData { offset, source })
}

fn decode_payload(
    s: &mut impl Source,
    o: &mut impl Receiver,
    content: Content,
    record: &RawRecord,
) -> Result<(), Error> {
    let field_error = |source| Error::Field {
        offset: record.offset,
        tag: record.tag,
        source,
    };

    content.expect(record.words).map_err(field_error)?;

    let words = usize::from(record.words);

    let field = match content {
        Content::Skip(_) => {
            s.skip_words(words)?;
            Field::Skipped
        }
        content => content.decode(s.read_words(words)?).map_err(field_error)?,
    };

    match field {
        Field::Skipped => {}
        Field::LibraryName(name) => o.add_library_name(&name),
        Field::StructureName(name) => {
            tracing::debug!(%name, "structure");
            o.add_structure_name(&name)
        }
        Field::Layer(layer) => o.add_layer(layer),
        Field::Boundary(xy) => o.add_boundary(&xy),
        Field::ReferenceName(name) => o.add_reference_name(&name),
        Field::ReferenceOrigin(origin) => o.add_reference_origin(origin),
    }

    Ok(())
}
