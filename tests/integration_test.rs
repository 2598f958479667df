use std::{fs, path::PathBuf};

use grabexif::{config::RunConfig, extract::process_input, grabexif_error::GrabExifError};

const FIXTURE: &str = "./tests/fixtures/DATA.HTM";

fn output_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("grabexif-{}-{}.inf", name, std::process::id()));
    let _ = fs::remove_file(&path);
    path
}

fn config(input: &str, output: &PathBuf) -> RunConfig {
    RunConfig::new(Some("grabexif".to_string()), input.into(), output.clone(), false)
}

fn blocks(contents: &str) -> Vec<&str> {
    contents.split_terminator("\n\n").collect()
}

#[test]
fn test_fixture_produces_two_blocks() {
    let out = output_path("fixture");
    let count = process_input(&config(FIXTURE, &out)).unwrap();
    assert_eq!(count, 2);

    let contents = fs::read_to_string(&out).unwrap();
    fs::remove_file(&out).unwrap();
    let blocks = blocks(&contents);
    assert_eq!(blocks.len(), 2);

    let first: Vec<&str> = blocks[0].lines().collect();
    assert_eq!(first.len(), 16);
    assert_eq!(first[0], "File name    : CIMG0001.JPG");
    assert_eq!(first[1], "File size    : 412345 bytes");
    assert!(first[2].starts_with("File date    : "));
    assert_eq!(first[2].len(), "File date    : 2002:09:01 15:30:00".len());
    assert_eq!(first[3], "Camera make  : Casio");
    assert_eq!(first[4], "Camera model : Casio QV-7000SX");
    assert_eq!(first[5], "Date/Time    : 9:01:02 15:30:00");
    assert_eq!(first[6], "Resolution   : 1280x960");
    assert_eq!(first[7], "Flash used   : Off");
    assert_eq!(first[8], "Focal length : Unknown");
    assert_eq!(first[9], "CCD width    : Unknown");
    assert_eq!(first[10], "Exposure time: 1/60");
    assert_eq!(first[11], "Aperture     : F2.8");
    assert_eq!(first[12], "Focus dist.  : Unknown");
    assert_eq!(first[13], "Metering Mode: Unknown");
    assert_eq!(first[14], "Jpeg Quality : Fine");
    assert_eq!(first[15], "Jpeg process : Unknown");

    // CIMG0002.JPG never reaches its date line.
    assert!(!contents.contains("CIMG0002.JPG"));
    assert!(blocks[1].starts_with("File name    : CIMG0003.JPG\n"));
    assert!(blocks[1].contains("Date/Time    : 9:02:02 11:05:00\n"));
    assert!(blocks[1].contains("Flash used   : Auto\n"));
}

#[test]
fn test_rerun_appends_after_existing_content() {
    let out = output_path("rerun");
    process_input(&config(FIXTURE, &out)).unwrap();
    let once = fs::read_to_string(&out).unwrap();
    process_input(&config(FIXTURE, &out)).unwrap();
    let twice = fs::read_to_string(&out).unwrap();
    fs::remove_file(&out).unwrap();

    assert!(twice.starts_with(&once));
    assert_eq!(twice.matches("File name    : ").count(), 4);
}

#[test]
fn test_page_without_photos_leaves_output_untouched() {
    let input = std::env::temp_dir().join(format!("grabexif-empty-{}.htm", std::process::id()));
    fs::write(&input, "<HTML>\r\n<PRE> : 12 bytes\r\nDate : 09/01/02 03:30 PM\r\n</HTML>\r\n")
        .unwrap();
    let out = output_path("empty");
    fs::write(&out, "previous run\n").unwrap();

    let count = process_input(&config(input.to_str().unwrap(), &out)).unwrap();
    let contents = fs::read_to_string(&out).unwrap();
    fs::remove_file(&out).unwrap();
    fs::remove_file(&input).unwrap();

    assert_eq!(count, 0);
    assert_eq!(contents, "previous run\n");
}

#[test]
fn test_missing_input_is_an_open_error() {
    let out = output_path("missing");
    let result = process_input(&config("./tests/fixtures/NOPE.HTM", &out));
    assert!(matches!(result, Err(GrabExifError::OpenInput { .. })), "{:?}", result);
    assert!(!out.exists());
}
