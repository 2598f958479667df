use chrono::{DateTime, Local};
use regex::Regex;
use std::{fs, path::Path, sync::OnceLock};

/// Timestamp layout used by exif.inf for both the file date and the capture date.
pub const EXIF_DATE_F_STR: &str = "%Y:%m:%d %H:%M:%S";

/// Modification time of `path`, or the current time when it can't be read.
///
/// Relative names resolve against the working directory, which is where the
/// tool expects the photos to sit next to DATA.HTM.
pub fn file_date(path: &Path) -> DateTime<Local> {
    fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map(DateTime::<Local>::from)
        .unwrap_or_else(|_| Local::now())
}

/// First whitespace-delimited word of `text`.
pub fn first_token(text: &str) -> Option<&str> {
    text.split_whitespace().next()
}

/// Signed decimal at the start of `text`, after optional leading whitespace.
pub fn leading_int(text: &str) -> Option<i64> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^\s*([+-]?\d+)").unwrap());
    re.captures(text).and_then(|caps| caps[1].parse().ok())
}

/// True when the fourth byte from the end of a raw line is a `p` or `P`.
///
/// Lines keep their terminator, so on the camera's CRLF pages this is the
/// first letter of the trailing `PM`.
pub fn ends_with_pm(line: &[u8]) -> bool {
    line.len() >= 4 && line[line.len() - 4].to_ascii_lowercase() == b'p'
}
