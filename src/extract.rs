use regex::Regex;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    sync::OnceLock,
};
use tracing::debug;

use crate::{
    config::RunConfig,
    format::AppendWriter,
    grabexif_error::GrabExifError,
    record::PhotoRecord,
    util::{ends_with_pm, first_token, leading_int},
};

pub const BOLD_MARKER: &str = "<B>";
pub const SIZE_MARKER: &str = "<PRE> : ";
pub const GROUP_MARKER: &str = " : ";
pub const CLOSE_TAG: &str = "</";

/// Number of ` : ` lines the camera writes for each photo.
pub const GROUP_SIZE: usize = 13;

/// Receives each record as soon as its date line has been read.
pub trait RecordSink {
    fn accept(&mut self, record: &PhotoRecord) -> Result<(), GrabExifError>;
}

impl RecordSink for Vec<PhotoRecord> {
    fn accept(&mut self, record: &PhotoRecord) -> Result<(), GrabExifError> {
        self.push(record.clone());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupField {
    Resolution,
    Quality,
    ShutterSpeed,
    ApertureStop,
    FlashMode,
    CaptureTime,
}

/// Position of each known field inside a photo's group of ` : ` lines.
/// Every other offset carries something mig has no slot for.
pub const GROUP_LAYOUT: [(usize, GroupField); 6] = [
    (0, GroupField::Resolution),
    (1, GroupField::Quality),
    (5, GroupField::ShutterSpeed),
    (6, GroupField::ApertureStop),
    (9, GroupField::FlashMode),
    (12, GroupField::CaptureTime),
];

pub fn group_field(offset: usize) -> Option<GroupField> {
    GROUP_LAYOUT.iter().find(|(o, _)| *o == offset % GROUP_SIZE).map(|(_, field)| *field)
}

impl GroupField {
    fn slot(self, record: &mut PhotoRecord) -> Option<&mut Option<String>> {
        match self {
            GroupField::Resolution => Some(&mut record.resolution),
            GroupField::Quality => Some(&mut record.quality),
            GroupField::ShutterSpeed => Some(&mut record.shutter_speed),
            GroupField::ApertureStop => Some(&mut record.aperture_stop),
            GroupField::FlashMode => Some(&mut record.flash_mode),
            GroupField::CaptureTime => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            GroupField::Resolution => "Resolution",
            GroupField::Quality => "Quality",
            GroupField::ShutterSpeed => "Shutter Speed",
            GroupField::ApertureStop => "Aperture Stop",
            GroupField::FlashMode => "Flash Mode",
            GroupField::CaptureTime => "Date",
        }
    }
}

/// Filename following `<B>`: its first word, cut at the first closing tag.
pub fn parse_filename(after_marker: &str) -> String {
    let token = first_token(after_marker).unwrap_or_default();
    match token.find(CLOSE_TAG) {
        Some(end) => token[..end].to_string(),
        None => token.to_string(),
    }
}

/// Fill the capture time from a date line such as ` : 09/01/02 03:30 PM`.
///
/// Numbers are taken left to right until one is missing; the rest keep their
/// current value. The PM adjustment is applied regardless. Returns how many
/// numbers were read.
pub fn parse_date(record: &mut PhotoRecord, from_marker: &str, raw_line: &[u8]) -> usize {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(
            r"^\s*:\s*([+-]?\d+)(?:/\s*([+-]?\d+)(?:/\s*([+-]?\d+)(?:\s*([+-]?\d+)(?::\s*([+-]?\d+))?)?)?)?",
        )
        .unwrap()
    });

    let t = &mut record.capture_time;
    let mut read = 0;
    if let Some(caps) = re.captures(from_marker) {
        let slots = [&mut t.year, &mut t.month, &mut t.day, &mut t.hour, &mut t.minute];
        for (i, slot) in slots.into_iter().enumerate() {
            match caps.get(i + 1).and_then(|m| m.as_str().parse().ok()) {
                Some(value) => {
                    *slot = value;
                    read += 1;
                }
                None => break,
            }
        }
    }
    if ends_with_pm(raw_line) {
        t.apply_pm();
    }
    read
}

/// Single-pass scanner over the camera's index page.
///
/// Holds at most one record in flight; it is handed to the sink the moment
/// its date line is seen and then dropped.
pub struct Extractor<'a, S: RecordSink> {
    sink: &'a mut S,
    current: Option<PhotoRecord>,
    counter: usize,
    flushed: usize,
}

impl<'a, S: RecordSink> Extractor<'a, S> {
    pub fn new(sink: &'a mut S) -> Self {
        Self { sink, current: None, counter: 0, flushed: 0 }
    }

    pub fn flushed(&self) -> usize {
        self.flushed
    }

    /// Feed one raw line, terminator included.
    pub fn feed(&mut self, raw_line: &[u8]) -> Result<(), GrabExifError> {
        let line = String::from_utf8_lossy(raw_line);

        if let Some(pos) = line.find(BOLD_MARKER) {
            self.start_record(&line[pos + BOLD_MARKER.len()..]);
        } else if let Some(pos) = line.find(SIZE_MARKER) {
            self.file_size(&line[pos + SIZE_MARKER.len()..]);
        } else if let Some(pos) = line.find(GROUP_MARKER) {
            self.group_line(&line[pos..], raw_line)?;
        }
        Ok(())
    }

    fn start_record(&mut self, after_marker: &str) {
        if let Some(abandoned) = self.current.take() {
            debug!("dropping incomplete record {}", abandoned.filename);
        }
        let record = PhotoRecord::new(&parse_filename(after_marker));
        debug!("Filename: {}", record.filename);
        self.current = Some(record);
        self.counter = 0;
    }

    fn file_size(&mut self, after_marker: &str) {
        let Some(record) = self.current.as_mut() else {
            debug!("size line outside of a record, skipping");
            return;
        };
        match leading_int(after_marker) {
            Some(size) => {
                record.file_size = size;
                debug!("File Size: {}", record.file_size);
            }
            None => debug!("unreadable file size: {}", after_marker.trim_end()),
        }
    }

    fn group_line(&mut self, from_marker: &str, raw_line: &[u8]) -> Result<(), GrabExifError> {
        let Some(record) = self.current.as_mut() else {
            debug!("group line outside of a record, skipping");
            return Ok(());
        };
        let offset = self.counter % GROUP_SIZE;
        self.counter += 1;

        let Some(field) = group_field(offset) else {
            return Ok(());
        };
        if field == GroupField::CaptureTime {
            if parse_date(record, from_marker, raw_line) < 5 {
                debug!("incomplete date line: {}", from_marker.trim_end());
            }
            let t = &record.capture_time;
            debug!("Date: {}/{:02}/{:02} {:02}:{:02}", t.year, t.month, t.day, t.hour, t.minute);
            debug!("------------------------------");
            return self.flush();
        }

        let value = first_token(&from_marker[GROUP_MARKER.len()..]);
        match (field.slot(record), value) {
            (Some(slot), Some(value)) => {
                *slot = Some(value.to_string());
                debug!("{}: {}", field.label(), value);
            }
            _ => debug!("no value for {}", field.label()),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), GrabExifError> {
        if let Some(record) = self.current.take() {
            self.sink.accept(&record)?;
            self.flushed += 1;
        }
        Ok(())
    }
}

/// Run the extractor over every line of `reader`, returning the number of records written.
pub fn extract<R: BufRead, S: RecordSink>(
    mut reader: R, source: &Path, sink: &mut S,
) -> Result<usize, GrabExifError> {
    let mut extractor = Extractor::new(sink);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source_err| GrabExifError::ReadInput {
                path: source.to_path_buf(),
                source: source_err,
            })?;
        if read == 0 {
            break;
        }
        extractor.feed(&buf)?;
    }
    Ok(extractor.flushed())
}

/// Read `config.input` and append one block per photo to `config.output`.
pub fn process_input(config: &RunConfig) -> Result<usize, GrabExifError> {
    let file = File::open(&config.input)
        .map_err(|source| GrabExifError::OpenInput { path: config.input.clone(), source })?;
    let mut writer = AppendWriter::new(&config.output);
    let count = extract(BufReader::new(file), &config.input, &mut writer)?;
    debug!("wrote {} records from {}", count, config.input.display());
    Ok(count)
}
