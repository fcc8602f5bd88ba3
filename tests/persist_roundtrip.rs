//! Test suite for policy persistence
//! Round-trips the scotlandyard-policy-v2 format and exercises the
//! fail-fast validation paths

use std::fs;

use scotlandyard::{Board, Error, GameConfig, NodeId, POLICY_FORMAT, PolicyFile, solve};
use tempfile::TempDir;

fn solved_file() -> (Board, PolicyFile) {
    let board = Board::top_right_20();
    let config = GameConfig::new(
        NodeId::new(1),
        vec![NodeId::new(5), NodeId::new(10)],
        4,
    );
    let result = solve(&board, &config).unwrap();
    let file = PolicyFile::new(&board, config, &result);
    (board, file)
}

#[test]
fn save_load_roundtrip_preserves_every_block() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("policy.json");

    let (board, file) = solved_file();
    file.save_to_file(&path).unwrap();

    let loaded = PolicyFile::load_from_file(&path).unwrap();
    loaded.validate(&board).unwrap();

    assert_eq!(loaded, file);
    assert_eq!(loaded.format, POLICY_FORMAT);
    assert_eq!(loaded.board, "top-right-20");
    assert_eq!(loaded.solver.states_evaluated, 630);
    assert_eq!(loaded.solver.policy_size, 113);
    assert_eq!(loaded.to_policy(), file.to_policy());
}

#[test]
fn serialization_is_byte_identical_across_saves() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let first = temp_dir.path().join("first.json");
    let second = temp_dir.path().join("second.json");

    let (_, file) = solved_file();
    file.save_to_file(&first).unwrap();

    // Re-serializing the loaded file must reproduce the bytes exactly.
    let loaded = PolicyFile::load_from_file(&first).unwrap();
    loaded.save_to_file(&second).unwrap();

    let a = fs::read(&first).unwrap();
    let b = fs::read(&second).unwrap();
    assert_eq!(a, b);
    assert!(!a.is_empty());
}

#[test]
fn loading_a_missing_file_is_an_io_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let result = PolicyFile::load_from_file(temp_dir.path().join("absent.json"));
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn loading_malformed_json_fails_fast() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("garbage.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        PolicyFile::load_from_file(&path),
        Err(Error::Serialization(_))
    ));
}

#[test]
fn loading_a_schema_mismatch_fails_fast() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("schema.json");
    fs::write(&path, r#"{"format": "scotlandyard-policy-v2", "board": "top-right-20"}"#).unwrap();
    assert!(matches!(
        PolicyFile::load_from_file(&path),
        Err(Error::Serialization(_))
    ));
}

#[test]
fn tampered_files_fail_validation_after_loading() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("tampered.json");

    let (board, mut file) = solved_file();
    file.format = "scotlandyard-policy-v1".to_string();
    file.save_to_file(&path).unwrap();

    let loaded = PolicyFile::load_from_file(&path).unwrap();
    assert!(matches!(
        loaded.validate(&board),
        Err(Error::PolicyFormatMismatch { .. })
    ));
}

#[test]
fn startup_contract_rejects_conflicting_flags() {
    let (_, file) = solved_file();

    // Matching explicit flags pass.
    file.ensure_config_matches(
        Some("top-right-20"),
        Some(NodeId::new(1)),
        Some(&[NodeId::new(5), NodeId::new(10)]),
        Some(4),
    )
    .unwrap();

    // Unset flags defer to the file.
    file.ensure_config_matches(None, None, None, None).unwrap();

    // Any conflicting flag is fatal.
    assert!(matches!(
        file.ensure_config_matches(None, Some(NodeId::new(2)), None, None),
        Err(Error::ConfigMismatch { .. })
    ));
    assert!(matches!(
        file.ensure_config_matches(None, None, Some(&[NodeId::new(10), NodeId::new(5)]), None),
        Err(Error::ConfigMismatch { .. })
    ));
    assert!(matches!(
        file.ensure_config_matches(None, None, None, Some(15)),
        Err(Error::ConfigMismatch { .. })
    ));
}

#[test]
fn key_strings_use_the_interchange_format() {
    let (_, file) = solved_file();
    assert!(file.policy.keys().next().is_some());
    for key in file.policy.keys() {
        let s = key.as_str();
        assert!(s.starts_with("r="), "unexpected key shape: {s}");
        assert!(s.contains("|p=mrx|x="), "unexpected key shape: {s}");
        assert!(s.contains("|d="), "unexpected key shape: {s}");
    }
    assert!(
        file.policy
            .keys()
            .any(|k| k.as_str() == "r=0|p=mrx|x=1|d=5,10"),
        "initial state key missing from policy"
    );
}
