// Integration tests for sidecar persistence

use std::fs;

use gridhash::core::Hash;
use gridhash::storage::{self, HashSidecar};

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("gridhash-test-{}-{}", std::process::id(), name))
}

#[test]
fn test_save_and_load_round_trip() {
    let path = temp_path("roundtrip.msgpack");
    let hash = Hash::from_u64(0xDEAD_BEEF, 32, 42);

    let sidecar = HashSidecar::new(&hash);
    storage::save(&sidecar, &path).expect("Failed to save sidecar");

    let loaded = storage::load(&path).expect("Failed to load sidecar");
    assert!(loaded.is_current_version());
    assert_eq!(loaded.algorithm_id(), 42);
    assert_eq!(loaded.bit_length(), 32);
    assert_eq!(loaded.hash(), hash);

    fs::remove_file(&path).ok();
}

#[test]
fn test_payload_is_wire_form() {
    let path = temp_path("payload.msgpack");
    let hash = Hash::from_u64(0xAAAA, 16, 1);

    storage::save(&HashSidecar::new(&hash), &path).expect("Failed to save sidecar");
    let loaded = storage::load(&path).expect("Failed to load sidecar");

    assert_eq!(loaded.payload(), &hash.to_byte_array()[..]);
    assert_eq!(loaded.payload(), &[0x01, 0xAA, 0xAA]);

    fs::remove_file(&path).ok();
}

#[test]
fn test_load_missing_file_fails_with_context() {
    let err = storage::load(&temp_path("does-not-exist.msgpack")).unwrap_err();
    assert!(err.to_string().contains("Failed to read sidecar"));
}

#[test]
fn test_loaded_hashes_stay_comparable() {
    let path_a = temp_path("cmp-a.msgpack");
    let path_b = temp_path("cmp-b.msgpack");

    let a = Hash::from_u64(0xF0F0_F0F0, 32, 7);
    let b = Hash::from_u64(0xF0F0_F0F1, 32, 7);
    storage::save(&HashSidecar::new(&a), &path_a).expect("Failed to save sidecar");
    storage::save(&HashSidecar::new(&b), &path_b).expect("Failed to save sidecar");

    let a = storage::load(&path_a).expect("Failed to load sidecar").hash();
    let b = storage::load(&path_b).expect("Failed to load sidecar").hash();
    assert_eq!(a.hamming_distance(&b).unwrap(), 1);

    fs::remove_file(&path_a).ok();
    fs::remove_file(&path_b).ok();
}
