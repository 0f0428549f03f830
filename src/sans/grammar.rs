//! States enforcing record order.

use core::fmt;

use either::Either::{self, Left, Right};
use thiserror::Error;

use super::{
    field::Content,
    tag::{Tag, TagSet},
};

/// An error advancing over a record not allowed in the current state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Unexpected {found} in state {state}, expected {expected}.")]
pub struct GrammarError {
    /// The state the record arrived in.
    pub state: State,
    /// The tag of the record.
    pub found: Tag,
    /// The tags the state accepts.
    pub expected: TagSet,
}

/// An error finding bytes after the terminating record.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Found trailing data after ENDLIB.")]
pub struct TrailingData;

/// The position of the decoder within the stream grammar.
///
/// Each state names the record(s) it accepts next. The value is owned by the
/// decoding loop and replaced on every accepted record.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Expecting `HEADER`.
    #[default]
    Header,
    /// Expecting `BGNLIB`.
    BeginLibrary,
    /// Expecting `LIBNAME`.
    LibraryName,
    /// Expecting `UNITS`.
    Units,
    /// Expecting `BGNSTR` or `ENDLIB`.
    Library,
    /// Expecting `STRNAME`.
    StructureName,
    /// Expecting `BOUNDARY`, `SREF` or `ENDSTR`.
    Structure,
    /// Expecting `LAYER` within a boundary.
    Layer,
    /// Expecting `DATATYPE` within a boundary.
    DataType,
    /// Expecting `XY` within a boundary.
    BoundaryXy,
    /// Expecting `SNAME` within a reference.
    ReferenceName,
    /// Expecting `XY` within a reference.
    ReferenceXy,
    /// Expecting `ENDEL`.
    EndElement,
}

impl State {
    /// The tags this state accepts.
    pub const fn expected(self) -> TagSet {
        TagSet(match self {
            State::Header => &[Tag::HEADER],
            State::BeginLibrary => &[Tag::BGNLIB],
            State::LibraryName => &[Tag::LIBNAME],
            State::Units => &[Tag::UNITS],
            State::Library => &[Tag::BGNSTR, Tag::ENDLIB],
            State::StructureName => &[Tag::STRNAME],
            State::Structure => &[Tag::BOUNDARY, Tag::SREF, Tag::ENDSTR],
            State::Layer => &[Tag::LAYER],
            State::DataType => &[Tag::DATATYPE],
            State::BoundaryXy | State::ReferenceXy => &[Tag::XY],
            State::ReferenceName => &[Tag::SNAME],
            State::EndElement => &[Tag::ENDEL],
        })
    }

    /// Transition to another state by accepting a record tag.
    ///
    /// Returns how the record's payload must be handled, and either the
    /// successor state or, after `ENDLIB`, the terminal state.
    pub fn advance(self, tag: Tag) -> Result<(Content, Either<State, End>), GrammarError> {
        use Content::Skip;

        let step = match (self, tag) {
            (State::Header, Tag::HEADER) => (Skip(1), Left(State::BeginLibrary)),
            (State::BeginLibrary, Tag::BGNLIB) => (Skip(12), Left(State::LibraryName)),
            (State::LibraryName, Tag::LIBNAME) => (Content::LibraryName, Left(State::Units)),
            (State::Units, Tag::UNITS) => (Skip(8), Left(State::Library)),

            (State::Library, Tag::BGNSTR) => (Skip(12), Left(State::StructureName)),
            (State::Library, Tag::ENDLIB) => (Skip(0), Right(End(()))),

            (State::StructureName, Tag::STRNAME) => (Content::StructureName, Left(State::Structure)),
            (State::Structure, Tag::BOUNDARY) => (Skip(0), Left(State::Layer)),
            (State::Structure, Tag::SREF) => (Skip(0), Left(State::ReferenceName)),
            (State::Structure, Tag::ENDSTR) => (Skip(0), Left(State::Library)),

            (State::Layer, Tag::LAYER) => (Content::Layer, Left(State::DataType)),
            (State::DataType, Tag::DATATYPE) => (Skip(1), Left(State::BoundaryXy)),
            (State::BoundaryXy, Tag::XY) => (Content::Boundary, Left(State::EndElement)),

            (State::ReferenceName, Tag::SNAME) => (Content::ReferenceName, Left(State::ReferenceXy)),
            (State::ReferenceXy, Tag::XY) => (Content::ReferenceOrigin, Left(State::EndElement)),

            (State::EndElement, Tag::ENDEL) => (Skip(0), Left(State::Structure)),

            (state, found) => Err(GrammarError {
                state,
                found,
                expected: state.expected(),
            })?,
        };

        Ok(step)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            State::Header => "HEADER",
            State::BeginLibrary => "BGNLIB",
            State::LibraryName => "LIBNAME",
            State::Units => "UNITS",
            State::Library => "library",
            State::StructureName => "STRNAME",
            State::Structure => "structure",
            State::Layer => "LAYER",
            State::DataType => "DATATYPE",
            State::BoundaryXy => "boundary XY",
            State::ReferenceName => "SNAME",
            State::ReferenceXy => "reference XY",
            State::EndElement => "ENDEL",
        })
    }
}

/// State token reached once `ENDLIB` has been accepted.
#[derive(Debug)]
pub struct End(pub(super) ());

impl End {
    /// Finish decoding, given whether the stream holds no further bytes.
    pub fn advance(self, exhausted: bool) -> Result<(), TrailingData> {
        if exhausted { Ok(()) } else { Err(TrailingData) }
    }
}
