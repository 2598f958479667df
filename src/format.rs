use chrono::{DateTime, Local};
use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::{
    extract::RecordSink,
    grabexif_error::GrabExifError,
    record::PhotoRecord,
    util::{file_date, EXIF_DATE_F_STR},
};

pub const CAMERA_MAKE: &str = "Casio";
pub const CAMERA_MODEL: &str = "Casio QV-7000SX";
const UNKNOWN: &str = "Unknown";

fn or_unknown(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(UNKNOWN)
}

/// Render one exif.inf block, blank separator line included.
pub fn render(record: &PhotoRecord, modified: &DateTime<Local>) -> String {
    let t = &record.capture_time;
    format!(
        "File name    : {}\n\
         File size    : {} bytes\n\
         File date    : {}\n\
         Camera make  : {}\n\
         Camera model : {}\n\
         Date/Time    : {}:{:02}:{:02} {:02}:{:02}:00\n\
         Resolution   : {}\n\
         Flash used   : {}\n\
         Focal length : {UNKNOWN}\n\
         CCD width    : {UNKNOWN}\n\
         Exposure time: {}\n\
         Aperture     : {}\n\
         Focus dist.  : {UNKNOWN}\n\
         Metering Mode: {UNKNOWN}\n\
         Jpeg Quality : {}\n\
         Jpeg process : {UNKNOWN}\n\n",
        record.filename,
        record.file_size,
        modified.format(EXIF_DATE_F_STR),
        CAMERA_MAKE,
        CAMERA_MODEL,
        t.year,
        t.month,
        t.day,
        t.hour,
        t.minute,
        or_unknown(&record.resolution),
        or_unknown(&record.flash_mode),
        or_unknown(&record.shutter_speed),
        or_unknown(&record.aperture_stop),
        or_unknown(&record.quality),
    )
}

/// Appends rendered records to an exif.inf file, opening it afresh for each one.
pub struct AppendWriter {
    path: PathBuf,
}

impl AppendWriter {
    pub fn new(path: &Path) -> Self {
        Self { path: path.to_path_buf() }
    }

    fn open(&self) -> Result<File, GrabExifError> {
        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }
        options
            .open(&self.path)
            .map_err(|source| GrabExifError::OpenOutput { path: self.path.clone(), source })
    }
}

impl RecordSink for AppendWriter {
    fn accept(&mut self, record: &PhotoRecord) -> Result<(), GrabExifError> {
        let block = render(record, &file_date(Path::new(&record.filename)));
        let mut file = self.open()?;
        file.write_all(block.as_bytes())
            .map_err(|source| GrabExifError::WriteOutput { path: self.path.clone(), source })?;
        debug!("appended {} to {}", record.filename, self.path.display());
        Ok(())
    }
}
