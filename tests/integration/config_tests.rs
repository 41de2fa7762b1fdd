//! Config file loading tests

use sleeper::Config;
use std::io::Write;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config.app.title, "Sleeper");
    assert!(!config.sleep.allowed_on_start);
}

#[test]
fn test_file_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[app]\ntitle = \"Zzz\"\nshow_quit = false\n\n[sleep]\nallowed_on_start = true\n\n[log]\nfilter = \"debug\""
    )
    .unwrap();

    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.app.title, "Zzz");
    assert!(!config.app.show_quit);
    assert_eq!(config.app.quit_label, "Quit");
    assert!(config.sleep.allowed_on_start);
    assert_eq!(config.log.filter, "debug");
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[sleep]\nallowed_on_start = \"maybe\"").unwrap();

    let err = Config::load_from(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));
}
