//! Record tags.

use core::fmt;

/// A record tag.
///
/// The 16-bit value packs a record type and a data type, but is only ever
/// compared whole.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Tag(pub u16);

impl Tag {
    pub const HEADER: Tag = Tag(0x0002);
    pub const BGNLIB: Tag = Tag(0x0102);
    pub const LIBNAME: Tag = Tag(0x0206);
    pub const UNITS: Tag = Tag(0x0305);
    pub const ENDLIB: Tag = Tag(0x0400);
    pub const BGNSTR: Tag = Tag(0x0502);
    pub const STRNAME: Tag = Tag(0x0606);
    pub const ENDSTR: Tag = Tag(0x0700);
    pub const BOUNDARY: Tag = Tag(0x0800);
    pub const SREF: Tag = Tag(0x0A00);
    pub const LAYER: Tag = Tag(0x0D02);
    pub const DATATYPE: Tag = Tag(0x0E02);
    pub const XY: Tag = Tag(0x1003);
    pub const ENDEL: Tag = Tag(0x1100);
    pub const SNAME: Tag = Tag(0x1206);

    /// The mnemonic of a recognized tag.
    pub const fn name(self) -> Option<&'static str> {
        Some(match self {
            Tag::HEADER => "HEADER",
            Tag::BGNLIB => "BGNLIB",
            Tag::LIBNAME => "LIBNAME",
            Tag::UNITS => "UNITS",
            Tag::ENDLIB => "ENDLIB",
            Tag::BGNSTR => "BGNSTR",
            Tag::STRNAME => "STRNAME",
            Tag::ENDSTR => "ENDSTR",
            Tag::BOUNDARY => "BOUNDARY",
            Tag::SREF => "SREF",
            Tag::LAYER => "LAYER",
            Tag::DATATYPE => "DATATYPE",
            Tag::XY => "XY",
            Tag::ENDEL => "ENDEL",
            Tag::SNAME => "SNAME",
            _ => return None,
        })
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({self})")
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name} ({:#06X})", self.0),
            None => write!(f, "{:#06X}", self.0),
        }
    }
}

/// A set of tags accepted by a grammar state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSet(pub &'static [Tag]);

impl TagSet {
    pub fn contains(&self, tag: Tag) -> bool {
        self.0.contains(&tag)
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tag) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(" or ")?;
            }
            write!(f, "{tag}")?;
        }
        Ok(())
    }
}
