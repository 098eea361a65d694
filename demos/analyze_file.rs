//! Example: Analyze a single audio file
//!
//! Decodes the file given on the command line, runs the spectral pipeline
//! with a status-printing observer, and prints the rendered report.
//!
//! Usage: `cargo run --example analyze_file -- path/to/audio.flac`

use std::path::Path;

use crest_dsp::{AnalysisObserver, Pipeline};

/// Prints busy/done status lines around the run, standing in for the
/// wait indicator a GUI host would show
struct StatusLine;

impl AnalysisObserver for StatusLine {
    fn started(&mut self) {
        eprintln!("analyzing...");
    }

    fn finished(&mut self) {
        eprintln!("done");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: analyze_file <audio-file>")?;

    let mut pipeline = Pipeline::with_observer(Box::new(StatusLine));
    let report = pipeline.run(Path::new(&path))?;

    println!("{}", report);
    println!("processing time: {:.2} ms", report.metadata.processing_time_ms);

    Ok(())
}
