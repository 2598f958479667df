pub mod cli;
pub mod config;
pub mod extract;
pub mod format;
pub mod grabexif_error;
pub mod record;
pub mod util;

pub const DEFAULT_INPUT_FILE: &str = "DATA.HTM";
pub const DEFAULT_OUTPUT_FILE: &str = "exif.inf";
