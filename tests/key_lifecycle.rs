//! Key material lifecycle: one-time setup, stable reload, strict loading.

use std::fs;

use tempfile::TempDir;

use ptx_anchor::errors::PtxError;
use ptx_anchor::keys::{KeyStore, PROVING_KEY_FILE, VERIFYING_KEY_FILE};

#[test]
fn setup_persists_both_artifacts_and_reloads_stably() {
    let dir = TempDir::new().expect("dir");
    let store = KeyStore::new(dir.path());
    store.proving_key().expect("setup");

    let pk_path = dir.path().join(PROVING_KEY_FILE);
    let vk_path = dir.path().join(VERIFYING_KEY_FILE);
    assert!(pk_path.exists());
    assert!(vk_path.exists());
    let vk_bytes = fs::read(&vk_path).expect("vk bytes");

    // A second store over the same directory loads instead of re-running
    // setup; the on-disk artifacts are untouched.
    let reloaded = KeyStore::new(dir.path());
    reloaded.verifying_key().expect("load vk");
    reloaded.proving_key().expect("load pk");
    assert_eq!(fs::read(&vk_path).expect("vk bytes"), vk_bytes);
}

#[test]
fn strict_loading_never_runs_setup() {
    let dir = TempDir::new().expect("dir");
    let store = KeyStore::new(dir.path());
    let err = store
        .verifying_key_strict()
        .err()
        .expect("strict load of an empty directory must fail");
    match err {
        PtxError::KeyMaterialMissing(path) => assert!(path.ends_with(VERIFYING_KEY_FILE)),
        other => panic!("expected KeyMaterialMissing, got {other}"),
    }
    assert!(!dir.path().join(VERIFYING_KEY_FILE).exists());
    assert!(!dir.path().join(PROVING_KEY_FILE).exists());
}

#[test]
fn partial_key_material_is_refused() {
    let dir = TempDir::new().expect("dir");
    fs::write(dir.path().join(VERIFYING_KEY_FILE), b"stray").expect("write");
    let store = KeyStore::new(dir.path());
    assert!(matches!(
        store.proving_key(),
        Err(PtxError::SetupFailed(_))
    ));
}
