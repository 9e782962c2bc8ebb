//! Tests for logging setup helpers.

use super::*;
use std::io::Write;
use tracing_subscriber::fmt::MakeWriter;

#[test]
fn test_target_empty_is_stdout() {
    assert_eq!(LogTarget::from_output_path(""), LogTarget::Stdout);
    assert_eq!(LogTarget::from_output_path("stdout"), LogTarget::Stdout);
}

#[test]
fn test_target_stderr() {
    assert_eq!(LogTarget::from_output_path("stderr"), LogTarget::Stderr);
}

#[test]
fn test_target_file_path() {
    assert_eq!(
        LogTarget::from_output_path("/var/log/app.log"),
        LogTarget::File(PathBuf::from("/var/log/app.log"))
    );
}

#[test]
fn test_parse_level_known() {
    assert_eq!(parse_level("debug"), Level::DEBUG);
    assert_eq!(parse_level("WARN"), Level::WARN);
    assert_eq!(parse_level("warning"), Level::WARN);
    assert_eq!(parse_level("error"), Level::ERROR);
    assert_eq!(parse_level("trace"), Level::TRACE);
}

#[test]
fn test_parse_level_unknown_falls_back_to_info() {
    assert_eq!(parse_level(""), Level::INFO);
    assert_eq!(parse_level("verbose"), Level::INFO);
}

#[test]
fn test_file_target_creates_parent_dirs_and_appends() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("app.log");
    let target = LogTarget::File(path.clone());

    let writer = target.make_writer().unwrap();
    writer.make_writer().write_all(b"first\n").unwrap();
    drop(writer);

    let writer = target.make_writer().unwrap();
    writer.make_writer().write_all(b"second\n").unwrap();
    drop(writer);

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "first\nsecond\n");
}

#[test]
fn test_file_target_unwritable_path() {
    let dir = tempfile::tempdir().unwrap();
    // A regular file cannot act as a parent directory.
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"").unwrap();
    let target = LogTarget::File(blocker.join("app.log"));

    let result = target.make_writer();
    assert!(matches!(result, Err(LoggingError::OpenOutput { .. })));
}
