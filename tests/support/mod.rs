#![allow(dead_code)]

//! In-memory stream builder.

use gdstream::sans::tag::Tag;

#[derive(Debug, Default, Clone)]
pub struct Stream(pub Vec<u8>);

impl Stream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record with a raw byte payload.
    pub fn record(mut self, tag: Tag, payload: &[u8]) -> Self {
        let length = (4 + payload.len()) as u16;
        self.0.extend_from_slice(&length.to_be_bytes());
        self.0.extend_from_slice(&tag.0.to_be_bytes());
        self.0.extend_from_slice(payload);
        self
    }

    /// Append a record with a payload of `n` zero words.
    pub fn words(self, tag: Tag, n: usize) -> Self {
        self.record(tag, &vec![0; n * 2])
    }

    pub fn name(self, tag: Tag, name: &str) -> Self {
        let mut payload = name.as_bytes().to_vec();
        if !payload.len().is_multiple_of(2) {
            payload.push(0);
        }
        self.record(tag, &payload)
    }

    pub fn xy(self, points: &[(i32, i32)]) -> Self {
        let payload: Vec<u8> = points
            .iter()
            .flat_map(|(x, y)| [x.to_be_bytes(), y.to_be_bytes()])
            .flatten()
            .collect();
        self.record(Tag::XY, &payload)
    }

    pub fn layer(self, id: i16) -> Self {
        self.record(Tag::LAYER, &id.to_be_bytes())
    }

    /// Append raw bytes.
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.0.extend_from_slice(bytes);
        self
    }

    /// `HEADER` through `UNITS`.
    pub fn library(self) -> Self {
        self.words(Tag::HEADER, 1)
            .words(Tag::BGNLIB, 12)
            .name(Tag::LIBNAME, "LIB")
            .words(Tag::UNITS, 8)
    }

    pub fn begin_structure(self, name: &str) -> Self {
        self.words(Tag::BGNSTR, 12).name(Tag::STRNAME, name)
    }

    pub fn end_structure(self) -> Self {
        self.words(Tag::ENDSTR, 0)
    }

    pub fn boundary(self, layer: i16, points: &[(i32, i32)]) -> Self {
        self.words(Tag::BOUNDARY, 0)
            .layer(layer)
            .words(Tag::DATATYPE, 1)
            .xy(points)
            .words(Tag::ENDEL, 0)
    }

    pub fn reference(self, name: &str, origin: (i32, i32)) -> Self {
        self.words(Tag::SREF, 0)
            .name(Tag::SNAME, name)
            .xy(&[origin])
            .words(Tag::ENDEL, 0)
    }

    pub fn end_library(self) -> Self {
        self.words(Tag::ENDLIB, 0)
    }

    /// A library holding one structure with a single element.
    pub fn with_boundary(points: &[(i32, i32)]) -> Self {
        Self::new()
            .library()
            .begin_structure("TOP")
            .boundary(1, points)
            .end_structure()
            .end_library()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.0
    }
}

pub const SQUARE: &[(i32, i32)] = &[(0, 0), (10, 0), (10, 10), (0, 10), (0, 0)];
