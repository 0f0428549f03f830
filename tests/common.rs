#![cfg(feature = "std")]

use std::path::Path;

use csv::ReaderBuilder;
use gdstream::{
    avec::Receiver,
    layout::{Chain, Layer, Name, Point},
    sans::{header::RawRecord, tag::Tag},
};

#[test]
fn decode_slice_inverter() {
    const PATH: &str = "fixtures/inverter.gds";
    let data = std::fs::read(PATH).unwrap();
    let mut validator = Validator::new(PATH);
    gdstream::avec::decode_slice(&data, &mut validator).unwrap();
    validator.finish(data.len());
}

#[test]
fn decode_slice_empty_library() {
    const PATH: &str = "fixtures/empty.gds";
    let data = std::fs::read(PATH).unwrap();
    let mut validator = Validator::new(PATH);
    gdstream::avec::decode_slice(&data, &mut validator).unwrap();
    validator.finish(data.len());
}

#[test]
fn decode_reader_inverter() {
    const PATH: &str = "fixtures/inverter.gds";
    let len = std::fs::metadata(PATH).unwrap().len() as usize;
    let mut file = std::fs::File::open(PATH).unwrap();
    let mut validator = Validator::new(PATH);
    gdstream::avec::decode_reader(&mut file, &mut validator).unwrap();
    validator.finish(len);
}

#[test]
fn decode_reader_empty_library() {
    const PATH: &str = "fixtures/empty.gds";
    let len = std::fs::metadata(PATH).unwrap().len() as usize;
    let mut file = std::fs::File::open(PATH).unwrap();
    let mut validator = Validator::new(PATH);
    gdstream::avec::decode_reader(&mut file, &mut validator).unwrap();
    validator.finish(len);
}

#[test]
fn decode_truncated_inverter() {
    const PATH: &str = "fixtures/inverter.gds";
    let data = std::fs::read(PATH).unwrap();
    let err = gdstream::avec::decode_slice(&data[..data.len() - 2], &mut ()).unwrap_err();
    assert_eq!(err.kind(), gdstream::avec::ErrorKind::Io);
}

/// Checks published values against the rows of a sibling CSV file, and
/// records against the byte layout they were framed from.
struct Validator {
    expected: Vec<Vec<String>>,
    next_offset: u64,
    last_tag: Option<Tag>,
}

impl Validator {
    fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().with_extension("csv");

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_path(path)
            .unwrap();

        let expected: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(|f| f.to_string()).collect())
            .collect();

        Self {
            expected,
            next_offset: 0,
            last_tag: None,
        }
    }

    fn validate(&mut self, row: Vec<String>) {
        assert_eq!(self.expected.remove(0), row);
    }

    fn finish(self, len: usize) {
        assert!(self.expected.is_empty(), "unpublished rows: {:?}", self.expected);
        assert_eq!(self.last_tag, Some(Tag::ENDLIB));
        assert_eq!(self.next_offset, len as u64);
    }
}

impl Receiver for Validator {
    fn add_record(&mut self, record: &RawRecord) {
        assert_eq!(record.offset, self.next_offset);
        self.next_offset += 4 + 2 * u64::from(record.words);
        self.last_tag = Some(record.tag);
    }
    fn add_library_name(&mut self, name: &Name) {
        self.validate(vec!["LIBNAME".into(), name.to_string()]);
    }
    fn add_structure_name(&mut self, name: &Name) {
        self.validate(vec!["STRNAME".into(), name.to_string()]);
    }
    fn add_layer(&mut self, layer: Layer) {
        self.validate(vec!["LAYER".into(), layer.to_string()]);
    }
    fn add_boundary(&mut self, xy: &Chain) {
        assert!(xy.is_closed());
        let mut row = vec!["BOUNDARY".to_string()];
        for p in xy {
            row.push(p.x.to_string());
            row.push(p.y.to_string());
        }
        self.validate(row);
    }
    fn add_reference_name(&mut self, name: &Name) {
        self.validate(vec!["SNAME".into(), name.to_string()]);
    }
    fn add_reference_origin(&mut self, origin: Point) {
        self.validate(vec!["SREF".into(), origin.x.to_string(), origin.y.to_string()]);
    }
}
