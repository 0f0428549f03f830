use std::{fs::File, io::BufReader, path::PathBuf, process::ExitCode};

use clap::Parser;

use gdstream::{
    avec::{self, Options, Receiver},
    layout::{Chain, Layer, Name, Point},
    sans::header::RawRecord,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The stream file to check.
    file: PathBuf,
    /// Print each record and decoded value as it is read.
    #[arg(short, long)]
    verbose: bool,
    /// Skip zero-length padding words between records.
    #[arg(long)]
    skip_padding: bool,
}

struct Progress;

impl Receiver for Progress {
    fn add_record(&mut self, record: &RawRecord) {
        println!("{:08X} {}", record.offset, record.tag);
    }
    fn add_library_name(&mut self, name: &Name) {
        println!("    library {name}");
    }
    fn add_structure_name(&mut self, name: &Name) {
        println!("    structure {name}");
    }
    fn add_layer(&mut self, layer: Layer) {
        println!("    layer {layer}");
    }
    fn add_boundary(&mut self, xy: &Chain) {
        let points: Vec<_> = xy.into_iter().map(|p| p.to_string()).collect();
        println!("    xy {}", points.join(" "));
    }
    fn add_reference_name(&mut self, name: &Name) {
        println!("    sname {name}");
    }
    fn add_reference_origin(&mut self, origin: Point) {
        println!("    xy {origin}");
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let file = match File::open(&args.file) {
        Ok(file) => file,
        Err(error) => {
            eprintln!("Error opening file {:?}: {}", &args.file, error);
            return ExitCode::FAILURE;
        }
    };

    let options = Options {
        skip_padding: args.skip_padding,
    };

    let mut reader = BufReader::new(file);
    let result = if args.verbose {
        avec::decode_reader_with(&mut reader, &mut Progress, &options)
    } else {
        avec::decode_reader_with(&mut reader, &mut (), &options)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            match error.offset() {
                Some(offset) => eprintln!(
                    "{:?} error in {:?} at offset {offset:#X}: {}",
                    error.kind(),
                    &args.file,
                    error
                ),
                None => eprintln!("{:?} error in {:?}: {}", error.kind(), &args.file, error),
            }
            ExitCode::FAILURE
        }
    }
}
