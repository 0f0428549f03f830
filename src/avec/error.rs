//! Errors occurring while decoding a stream.

use thiserror::Error;

use crate::sans::{
    field::FieldError,
    grammar::{GrammarError, TrailingData},
    header::HeaderError,
    tag::Tag,
};

#[cfg(feature = "std")]
extern crate std;

/// Errors occurring while decoding a stream.
///
/// Every error is fatal. Offsets are those of the first byte of the record
/// at fault, or of the failed read.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Unexpectedly reached the end of the stream.
    #[error("Unexpectedly reached the end of the stream at offset {offset}.")]
    UnexpectedEof { offset: u64 },
    /// Malformed record header.
    #[error("Malformed record header at offset {offset}: {source}")]
    Header { offset: u64, source: HeaderError },
    /// Record not allowed at this point in the stream.
    #[error("Out of order record at offset {offset}: {source}")]
    Grammar { offset: u64, source: GrammarError },
    /// Invalid record payload.
    #[error("Invalid {tag} payload at offset {offset}: {source}")]
    Field {
        offset: u64,
        tag: Tag,
        source: FieldError,
    },
    /// Bytes follow the terminating record.
    #[error("Found data at offset {offset}: {source}")]
    TrailingData { offset: u64, source: TrailingData },
}

/// The category of rule a decoding error violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Short read, or a failure of the underlying reader.
    Io,
    /// Malformed record length or payload size.
    Format,
    /// Record tag not allowed in the current state.
    Grammar,
    /// Layer identifier or boundary point count out of bounds.
    Range,
    /// Name of invalid length or holding disallowed characters.
    Encoding,
    /// Unclosed boundary, or data after the terminating record.
    Consistency,
    /// Point chain holding no points.
    EmptyChain,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            #[cfg(feature = "std")]
            Error::Io(_) => ErrorKind::Io,
            Error::UnexpectedEof { .. } => ErrorKind::Io,
            Error::Header { .. } => ErrorKind::Format,
            Error::Grammar { .. } => ErrorKind::Grammar,
            Error::Field { source, .. } => source.kind(),
            Error::TrailingData { .. } => ErrorKind::Consistency,
        }
    }

    /// The stream offset the error was found at, if known.
    pub fn offset(&self) -> Option<u64> {
        match self {
            #[cfg(feature = "std")]
            Error::Io(_) => None,
            Error::UnexpectedEof { offset }
            | Error::Header { offset, .. }
            | Error::Grammar { offset, .. }
            | Error::Field { offset, .. }
            | Error::TrailingData { offset, .. } => Some(*offset),
        }
    }
}

impl FieldError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FieldError::Length { .. } | FieldError::ChainLength(_) => ErrorKind::Format,
            FieldError::NameLength(_) | FieldError::NameCharacter { .. } => ErrorKind::Encoding,
            FieldError::LayerRange(_) | FieldError::BoundaryPoints(_) => ErrorKind::Range,
            FieldError::EmptyChain => ErrorKind::EmptyChain,
            FieldError::OpenBoundary { .. } => ErrorKind::Consistency,
        }
    }
}
