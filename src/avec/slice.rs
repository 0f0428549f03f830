//! Slice-based decoder implementation.

use super::{Error, Options, Receiver, Source, drive};

/// Decode a stream from a slice, publishing to a receiver.
///
/// This method is also re-exported as `gdstream::avec::decode_slice`.
pub fn decode(r: &[u8], o: &mut impl Receiver) -> Result<(), Error> {
    decode_with(r, o, &Options::default())
}

/// Decode a stream from a slice with explicit options, publishing to a
/// receiver.
pub fn decode_with(r: &[u8], o: &mut impl Receiver, options: &Options) -> Result<(), Error> {
    drive(&mut SliceSource { r, i: 0 }, o, options)
}

struct SliceSource<'a> {
    r: &'a [u8],
    /// Offset of the tip.
    i: usize,
}

impl<'a> SliceSource<'a> {
    /// Take an exact number of bytes from the tip, advancing it.
    fn take(&mut self, n: usize) -> Result<&'a [u8], Error> {
        let (r, s) = (self.r, self.i);
        let r = s
            .checked_add(n)
            .and_then(|e| r.get(s..e))
            .ok_or(Error::UnexpectedEof { offset: s as u64 })?;

        self.i += n;

        Ok(r)
    }
}

impl Source for SliceSource<'_> {
    fn offset(&self) -> u64 {
        self.i as u64
    }

    fn read_words(&mut self, n: usize) -> Result<&[u8], Error> {
        self.take(n * 2)
    }

    fn skip_words(&mut self, n: usize) -> Result<(), Error> {
        self.take(n * 2).map(|_| ())
    }

    fn is_exhausted(&mut self) -> Result<bool, Error> {
        Ok(self.i == self.r.len())
    }
}
