//! Tests for puzzle configuration.

use std::path::PathBuf;
use strictly_puzzle_cli::PuzzleConfig;
use tempfile::TempDir;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = PuzzleConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, PuzzleConfig::default());
    assert_eq!(*config.size(), 4);
    assert_eq!(config.state_file(), &PathBuf::from("puzzle.json"));
    assert_eq!(*config.seed(), None);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("puzzle.toml");
    std::fs::write(&path, "size = 5\nseed = 9\n").unwrap();

    let config = PuzzleConfig::from_file(&path).unwrap();
    assert_eq!(*config.size(), 5);
    assert_eq!(*config.seed(), Some(9));
    assert_eq!(config.state_file(), &PathBuf::from("puzzle.json"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("puzzle.toml");
    std::fs::write(&path, "size = \"big\"").unwrap();

    let err = PuzzleConfig::load_or_default(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_overrides_win() {
    let config = PuzzleConfig::default().with_overrides(
        Some(3),
        Some(PathBuf::from("other.json")),
        None,
    );
    assert_eq!(*config.size(), 3);
    assert_eq!(config.state_file(), &PathBuf::from("other.json"));
    assert_eq!(*config.seed(), None);
}
