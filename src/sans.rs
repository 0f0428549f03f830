//! Internal finite-state machine for implementing decoders.
//!
//! This module is intended for applications that manage their own I/O. See
//! [`crate::avec`] for implementations covering readers and slices.
//!
//! # Architecture
//!
//! Decoding a record takes three steps, none of which read bytes themselves:
//!
//! 1. Framing. Starting from [`header::record`], advance over the two header
//!    words to obtain the record's [`Tag`](tag::Tag) and payload word count.
//!    A zero length word advances to a [`Padding`](header::Padding) marker
//!    instead, which an application may reject or consume.
//!
//! 2. Grammar. Advance the current [`State`](grammar::State) with the tag. This
//!    returns how the payload is to be handled, and either the successor
//!    state or, once `ENDLIB` is accepted, the [`End`](grammar::End) token.
//!
//! 3. Payload. Check the word count against the returned
//!    [`Content`](field::Content), then either discard the payload or decode
//!    it into a [`Field`](field::Field).
//!
//! Only the initial grammar state, re-exported for convenience as
//! [`Decoder`], and the framing entry point can be constructed.
//!
//! Some areas of the decoding process are not represented in the state
//! machine and must be carefully written:
//!
//! - Reading whole payloads, and reading nothing past a failed check.
//!
//! - Confirming the stream is exhausted once the `End` token is reached.
//!
//! Implementers are recommended to begin by studying the decoder loop in
//! [`crate::avec`].

pub mod field;
pub mod grammar;
pub mod header;
pub mod tag;

/// Entrypoint to the finite-state machine.
pub type Decoder = grammar::State;
