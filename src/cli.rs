use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};

/// Generate exif.inf files for mig from the DATA.HTM index written by a Casio QV-7000SX.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Input File
    #[clap(short, long, default_value = DEFAULT_INPUT_FILE)]
    pub input: PathBuf,
    /// Output File
    #[clap(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,
    /// Debug Output
    #[clap(short, long, default_value_t = false)]
    pub debug: bool,
    /// Help
    #[clap(short, long, action = ArgAction::SetTrue)]
    pub help: bool,
}
