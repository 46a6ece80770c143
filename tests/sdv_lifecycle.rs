//! End-to-end prove/verify lifecycle over the SDV relation.

mod fixtures;

use ark_bn254::Bn254;
use ark_groth16::{Groth16, Proof};
use ark_serialize::CanonicalDeserialize;
use ark_snark::SNARK;

use fixtures::{issue_token, key_store, DOMAIN};
use ptx_anchor::container;
use ptx_anchor::envelope::ProofEnvelope;
use ptx_anchor::field::{fr_from_decimal, fr_to_decimal, Fr};
use ptx_anchor::verifier::{Verifier, VerifyOptions};

fn crypto_only_options() -> VerifyOptions {
    VerifyOptions {
        key_dir: fixtures::KEY_DIR.path().to_path_buf(),
        ..VerifyOptions::default()
    }
}

#[test]
fn happy_path_signals_match_reference_vectors() {
    let token = issue_token(DOMAIN, "{}", 1);
    assert_eq!(
        fr_to_decimal(&token.witness.signals.nullifier_hash),
        "18586133768512220936620570745912940619677854269274689475585506675881198879027"
    );
    assert_eq!(
        fr_to_decimal(&token.witness.signals.commitment),
        "15393964702393066403622971097640363115052937940510369873499654501358802551849"
    );
}

#[test]
fn proof_verifies_and_every_perturbed_signal_fails() {
    let token = issue_token(DOMAIN, "{}", 1);
    let record = container::decode(&token.bytes).expect("decode");
    let proof_data = record.proof.expect("proof block").proof_data;

    let (proof_bytes, signals) = match ProofEnvelope::parse(&proof_data).expect("envelope") {
        ProofEnvelope::Native {
            proof_bytes,
            signals,
        } => (proof_bytes, signals),
        ProofEnvelope::Legacy { .. } => panic!("native prover emitted a legacy envelope"),
    };
    assert_eq!(signals.len(), 6);

    let proof = Proof::<Bn254>::deserialize_compressed(&proof_bytes[..]).expect("proof bytes");
    let vk = key_store().verifying_key().expect("vk");
    let publics: Vec<Fr> = signals
        .iter()
        .map(|s| fr_from_decimal(s).expect("signal"))
        .collect();

    assert!(Groth16::<Bn254>::verify(&vk, &publics, &proof).expect("verify"));

    for position in 0..publics.len() {
        let mut tampered = publics.clone();
        tampered[position] += Fr::from(1u64);
        assert!(
            !Groth16::<Bn254>::verify(&vk, &tampered, &proof).expect("verify"),
            "perturbing public signal {position} must invalidate the proof"
        );
    }
}

#[tokio::test]
async fn crypto_only_accepts_a_fresh_token() {
    let token = issue_token(DOMAIN, "{}", 1);
    let verifier = Verifier::new(crypto_only_options()).expect("verifier");
    let report = verifier
        .verify_crypto_only(&token.bytes)
        .await
        .expect("report");
    assert!(report.proof.is_passed(), "{:?}", report.proof);
    assert!(report.dns.is_skipped());
    assert!(report.semantic.is_skipped());
}

#[tokio::test]
async fn tampered_metadata_invalidates_the_rederived_witness() {
    let token = issue_token(DOMAIN, "{}", 1);
    let mut record = container::decode(&token.bytes).expect("decode");
    record.signed_metadata = "{\"x\":1}".to_string();
    let tampered = container::encode(&record);

    let verifier = Verifier::new(crypto_only_options()).expect("verifier");
    let report = verifier.verify_crypto_only(&tampered).await.expect("report");
    // The re-derived metadata halves no longer match the committed context.
    assert!(report.proof.is_failed());
}

#[tokio::test]
async fn envelope_byte_is_ignored_by_the_full_decoder() {
    let token = issue_token(DOMAIN, "{}", 1);
    let mut bytes = token.bytes.clone();
    assert_eq!(bytes[4], 0x00);
    bytes[4] = 0xab;

    let original = container::decode(&token.bytes).expect("decode");
    let reframed = container::decode(&bytes).expect("decode");
    assert_eq!(original, reframed);

    let verifier = Verifier::new(crypto_only_options()).expect("verifier");
    let report = verifier.verify_crypto_only(&bytes).await.expect("report");
    assert!(report.proof.is_passed());
}
