pub use self::error::{Error, Result};

use clap::Parser;
use std::path::PathBuf;
use wild::ArgsOs;

use matcher::PaletteMatcher;

mod arg_validators;
mod error;
mod matcher;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Folder image files to rank (glob patterns allowed)
    #[arg(required(true))]
    files: Vec<String>,
    /// Reference photo to rank against
    #[arg(short, long)]
    reference: PathBuf,
    /// Maximum similarity score for a candidate to count as a match
    #[arg(short, long, default_value_t = 60.0, value_parser = arg_validators::validate_threshold)]
    threshold: f32,
    /// Number of colors to extract per palette
    #[arg(short, long, default_value_t = 8, value_parser = arg_validators::validate_palette_size)]
    palette_size: u8,
    /// Verbose messages
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

pub fn run(args: ArgsOs) -> Result<()> {
    let args = Args::parse_from(args);
    let matcher = PaletteMatcher::new(&args);
    matcher.process(&args.files, &args.reference)
}
