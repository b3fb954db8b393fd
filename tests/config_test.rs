//! Tests for settings loading

use std::io::Write;

use tempfile::NamedTempFile;

use radixconv::application::ApplicationError;
use radixconv::config::{RawSettings, Settings};
use radixconv::domain::HexSign;

fn write_settings(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp file");
    file.write_all(content.as_bytes()).expect("write settings");
    file
}

#[test]
fn given_no_config_file_when_loading_then_defaults() {
    // Act
    let settings = Settings::load(None).unwrap();

    // Assert
    assert_eq!(settings, Settings::default());
}

#[test]
fn given_partial_config_file_when_loading_then_merges_onto_defaults() {
    // Arrange
    let file = write_settings("hex_sign = \"magnitude\"\n");

    // Act
    let settings = Settings::load(Some(file.path())).unwrap();

    // Assert
    assert_eq!(settings.hex_sign, HexSign::Magnitude);
}

#[test]
fn given_empty_config_file_when_loading_then_defaults() {
    // Arrange
    let file = write_settings("");

    // Act
    let settings = Settings::load(Some(file.path())).unwrap();

    // Assert
    assert_eq!(settings, Settings::default());
}

#[test]
fn given_config_file_and_flags_when_merging_then_flags_win() {
    // Arrange
    let file = write_settings("hex_sign = \"magnitude\"\n");
    let flags = RawSettings {
        hex_sign: Some(HexSign::Signed),
    };

    // Act
    let settings = Settings::load(Some(file.path())).unwrap().merge_with(&flags);

    // Assert
    assert_eq!(settings.hex_sign, HexSign::Signed);
}

#[test]
fn given_invalid_value_when_loading_then_config_error() {
    // Arrange
    let file = write_settings("hex_sign = \"sideways\"\n");

    // Act
    let result = Settings::load(Some(file.path()));

    // Assert
    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}
