//! Reader-based decoder implementation.
//!
//! _Requires Cargo feature `std`._

use std::{
    io::{self, Read},
    vec::Vec,
};

use super::{Error, Options, Receiver, Source, drive};

extern crate std;

/// Decode a stream from a reader, publishing to a receiver.
///
/// This method is also re-exported as `gdstream::avec::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode(r: &mut impl Read, o: &mut impl Receiver) -> Result<(), Error> {
    decode_with(r, o, &Options::default())
}

/// Decode a stream from a reader with explicit options, publishing to a
/// receiver.
///
/// _Requires Cargo feature `std`._
pub fn decode_with(
    r: &mut impl Read,
    o: &mut impl Receiver,
    options: &Options,
) -> Result<(), Error> {
    let mut s = ReadSource {
        r,
        i: 0,
        buf: Vec::new(),
    };

    drive(&mut s, o, options)
}

struct ReadSource<'a, R> {
    r: &'a mut R,
    /// Counter of bytes read.
    i: u64,
    /// Holds the most recently read words.
    buf: Vec<u8>,
}

impl<R: Read> Source for ReadSource<'_, R> {
    fn offset(&self) -> u64 {
        self.i
    }

    fn read_words(&mut self, n: usize) -> Result<&[u8], Error> {
        self.buf.clear();
        self.buf.resize(n * 2, 0);

        self.r.read_exact(&mut self.buf).map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof => Error::UnexpectedEof { offset: self.i },
            _ => Error::Io(e),
        })?;

        self.i += self.buf.len() as u64;

        Ok(&self.buf)
    }

    fn skip_words(&mut self, n: usize) -> Result<(), Error> {
        let n = n as u64 * 2;
        let skipped = io::copy(&mut self.r.by_ref().take(n), &mut io::sink())?;

        if skipped != n {
            Err(Error::UnexpectedEof { offset: self.i })?;
        }

        self.i += n;

        Ok(())
    }

    fn is_exhausted(&mut self) -> Result<bool, Error> {
        let mut b = [0; 1];

        loop {
            match self.r.read(&mut b) {
                Ok(n) => return Ok(n == 0),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}
