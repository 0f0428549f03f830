#![no_std]

//! A validating reader for a minimal subset of the GDSII layout stream
//! format.
//!
//! A stream is a sequence of length-prefixed, big-endian records: a library
//! header, zero or more named structures holding boundary polygons and
//! structure references, and a terminating `ENDLIB`. Gdstream frames each
//! record, checks it against a fixed grammar, decodes the fields it carries
//! (names, layers, points and point chains) and validates them. The first
//! violation ends decoding.
//!
//! Most users should begin with the functions in the [`avec`] module, which
//! decode from readers and slices and publish decoded values to a
//! [`Receiver`](avec::Receiver). The underlying state machine is exposed in
//! the [`sans`] module for applications that manage their own I/O.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based decoder (default).
//! - `cli`: build the `gdscheck` command-line checker.

extern crate alloc;

pub mod avec;
pub mod layout;
pub mod sans;
