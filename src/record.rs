/// Numbers from a date line, kept in the order they appear in the text.
///
/// The camera writes something like `09/01/02 03:30 PM`. The first number is
/// stored as `year`, the second as `month` and the third as `day`, matching
/// how mig has always consumed these files, even though the page itself looks
/// like month/day/year.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CaptureTime {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
}

impl CaptureTime {
    pub fn apply_pm(&mut self) {
        self.hour = self.hour.saturating_add(12);
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PhotoRecord {
    pub filename: String,
    pub file_size: i64,
    pub resolution: Option<String>,
    pub quality: Option<String>,
    pub shutter_speed: Option<String>,
    pub aperture_stop: Option<String>,
    pub flash_mode: Option<String>,
    pub capture_time: CaptureTime,
}

impl PhotoRecord {
    pub fn new(filename: &str) -> Self {
        Self { filename: filename.to_string(), ..Default::default() }
    }
}
