//! Shared fixtures: a key directory with a one-time Groth16 setup and a
//! helper that issues complete PTX containers against it.

#![allow(dead_code)]

use std::sync::Arc;

use once_cell::sync::Lazy;
use tempfile::TempDir;

use ptx_anchor::container::{self, Anchor, DohAnchor, ProofSystem, PtxRecord, ZkProof};
use ptx_anchor::field::Fr;
use ptx_anchor::keys::KeyStore;
use ptx_anchor::prover::{Prover, SdvWitness};

pub const DOMAIN: &str = "example.com";

/// Key material is expensive to mint and immutable afterwards; every test in
/// a binary shares one directory.
pub static KEY_DIR: Lazy<Arc<TempDir>> = Lazy::new(|| {
    let dir = TempDir::new().expect("key dir");
    let store = KeyStore::new(dir.path());
    store.proving_key().expect("setup proving key");
    Arc::new(dir)
});

pub fn key_store() -> KeyStore {
    KeyStore::new(KEY_DIR.path())
}

pub struct IssuedToken {
    pub bytes: Vec<u8>,
    pub witness: SdvWitness,
}

/// Proves and wraps a token over the shared key pair.
pub fn issue_token(domain: &str, metadata: &str, trust_method: i32) -> IssuedToken {
    let witness = SdvWitness::derive(
        domain,
        metadata.as_bytes(),
        trust_method,
        Fr::from(1u64),
        Fr::from(2u64),
    )
    .expect("witness");
    let envelope = Prover::new(key_store()).prove(&witness).expect("prove");

    let record = PtxRecord {
        trust_method,
        proof: Some(ZkProof {
            proof_system: ProofSystem::Groth16 as i32,
            verification_key_id: "sdv_poseidon_v1".into(),
            proof_data: envelope,
        }),
        signed_metadata: metadata.to_string(),
        anchor: Some(Anchor::DohDetails(DohAnchor {
            domain_name: domain.to_string(),
        })),
    };
    IssuedToken {
        bytes: container::encode(&record),
        witness,
    }
}
