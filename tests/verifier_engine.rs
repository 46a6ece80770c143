//! Full-engine verification against a mock DoH resolver.

mod fixtures;

use std::net::SocketAddr;
use std::time::Duration;

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use fixtures::{issue_token, DOMAIN};
use ptx_anchor::errors::{PtxError, SignalKind};
use ptx_anchor::hostname;
use ptx_anchor::replay::{unix_now, NonceStore};
use ptx_anchor::signals::metadata_digest_hex;
use ptx_anchor::verifier::{Verifier, VerifyOptions};

/// Serves a fixed DoH JSON body for every query.
async fn spawn_resolver(body: Value) -> String {
    spawn_resolver_with_delay(body, Duration::ZERO).await
}

async fn spawn_resolver_with_delay(body: Value, delay: Duration) -> String {
    let app = Router::new().route(
        "/dns-query",
        get(move || {
            let body = body.clone();
            async move {
                tokio::time::sleep(delay).await;
                Json(body)
            }
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr: SocketAddr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}/dns-query")
}

fn txt_answer(hostname: &str, data: &str) -> Value {
    json!({
        "Status": 0,
        "Answer": [
            { "name": hostname, "type": 16, "data": format!("\"{data}\"") },
            { "name": hostname, "type": 1, "data": "192.0.2.1" }
        ]
    })
}

fn options(endpoint: String) -> VerifyOptions {
    VerifyOptions {
        doh_endpoint: endpoint,
        key_dir: fixtures::KEY_DIR.path().to_path_buf(),
        ..VerifyOptions::default()
    }
}

/// An anchored resolver for `token`: its TXT record carries the metadata
/// digest under the derived hostname.
async fn resolver_for(token: &fixtures::IssuedToken, metadata: &str) -> String {
    let anchor = hostname::derive(&token.witness.signals.commitment, DOMAIN);
    spawn_resolver(txt_answer(&anchor, &metadata_digest_hex(metadata.as_bytes()))).await
}

#[tokio::test]
async fn anchored_token_passes_all_checks() {
    let metadata = "{}";
    let token = issue_token(DOMAIN, metadata, 1);
    let endpoint = resolver_for(&token, metadata).await;

    let verifier = Verifier::new(options(endpoint)).expect("verifier");
    let report = verifier.verify_bytes(&token.bytes).await.expect("report");

    assert!(report.dns.is_passed(), "{:?}", report.dns);
    assert!(report.semantic.is_passed(), "{:?}", report.semantic);
    assert!(report.proof.is_passed(), "{:?}", report.proof);
    assert!(report.replay.is_skipped());
    assert!(report.success());
    assert!(report
        .derived_hostname
        .as_deref()
        .expect("hostname")
        .ends_with(DOMAIN));
}

#[tokio::test]
async fn swapped_metadata_fails_semantic_rederivation() {
    let token = issue_token(DOMAIN, "{}", 1);
    // Present different metadata than what the proof committed to.
    let mut record = ptx_anchor::container::decode(&token.bytes).expect("decode");
    record.signed_metadata = "{\"x\":1}".to_string();
    let tampered = ptx_anchor::container::encode(&record);

    // The resolver anchors the tampered digest too, so only the signal
    // checks can catch the mismatch.
    let endpoint = resolver_for(&token, "{\"x\":1}").await;
    let verifier = Verifier::new(options(endpoint)).expect("verifier");
    let report = verifier.verify_bytes(&tampered).await.expect("report");

    assert!(matches!(
        report.semantic.error(),
        Some(PtxError::SemanticMismatch(
            SignalKind::MetaP1 | SignalKind::MetaP2
        ))
    ));
    assert!(report.proof.is_failed());
    assert!(!report.success());
}

#[tokio::test]
async fn missing_txt_record_is_an_anchor_mismatch() {
    let metadata = "{}";
    let token = issue_token(DOMAIN, metadata, 1);
    let anchor = hostname::derive(&token.witness.signals.commitment, DOMAIN);
    let endpoint = spawn_resolver(txt_answer(&anchor, "cafebabe")).await;

    let verifier = Verifier::new(options(endpoint)).expect("verifier");
    let report = verifier.verify_bytes(&token.bytes).await.expect("report");
    assert!(matches!(
        report.dns.error(),
        Some(PtxError::DnsAnchorMismatch { hostname, .. }) if hostname.ends_with(DOMAIN)
    ));
    assert!(!report.success());
}

#[tokio::test]
async fn resolver_error_status_fails_the_lookup() {
    let token = issue_token(DOMAIN, "{}", 1);
    let endpoint = spawn_resolver(json!({ "Status": 3 })).await;

    let verifier = Verifier::new(options(endpoint)).expect("verifier");
    let report = verifier.verify_bytes(&token.bytes).await.expect("report");
    assert!(matches!(
        report.dns.error(),
        Some(PtxError::DnsLookupFailed(_))
    ));
}

#[tokio::test]
async fn expired_token_fails_the_expiry_check() {
    let metadata = format!("{{\"expiration_timestamp\":{}}}", unix_now() - 30);
    let token = issue_token(DOMAIN, &metadata, 1);
    let endpoint = resolver_for(&token, &metadata).await;

    let verifier = Verifier::new(options(endpoint)).expect("verifier");
    let report = verifier.verify_bytes(&token.bytes).await.expect("report");
    assert!(matches!(
        report.metadata.expiry.error(),
        Some(PtxError::TokenExpired { .. })
    ));
    assert!(report.proof.is_passed(), "other checks still run");
    assert!(!report.success());
}

#[tokio::test]
async fn scope_and_audience_policies_are_enforced() {
    let metadata = r#"{"audience":"svc-a","scopes":["read"]}"#;
    let token = issue_token(DOMAIN, metadata, 1);
    let endpoint = resolver_for(&token, metadata).await;

    let mut opts = options(endpoint.clone());
    opts.intended_scope = vec!["read".into(), "write".into()];
    opts.intended_audience = vec!["svc-a".into()];
    let report = Verifier::new(opts)
        .expect("verifier")
        .verify_bytes(&token.bytes)
        .await
        .expect("report");
    assert!(report.metadata.scope.is_passed());
    assert!(report.metadata.audience.is_passed());
    assert!(report.success());

    let mut opts = options(endpoint);
    opts.intended_scope = vec!["admin".into()];
    opts.intended_audience = vec!["svc-b".into()];
    let report = Verifier::new(opts)
        .expect("verifier")
        .verify_bytes(&token.bytes)
        .await
        .expect("report");
    assert!(matches!(
        report.metadata.scope.error(),
        Some(PtxError::ScopeMismatch)
    ));
    assert!(matches!(
        report.metadata.audience.error(),
        Some(PtxError::AudienceMismatch)
    ));
    assert!(!report.success());
}

#[tokio::test]
async fn strict_mode_requires_policy_keys_to_exist() {
    let metadata = "{}";
    let token = issue_token(DOMAIN, metadata, 1);
    let endpoint = resolver_for(&token, metadata).await;

    let mut opts = options(endpoint);
    opts.strict = true;
    opts.intended_scope = vec!["read".into()];
    let report = Verifier::new(opts)
        .expect("verifier")
        .verify_bytes(&token.bytes)
        .await
        .expect("report");
    assert!(report.metadata.scope.is_failed());
    assert!(!report.success());
}

#[tokio::test]
async fn nonce_is_accepted_once_then_replayed() {
    let metadata = format!(
        "{{\"nonce\":\"abc\",\"expiration_timestamp\":{}}}",
        unix_now() + 60
    );
    let token = issue_token(DOMAIN, &metadata, 1);
    let endpoint = resolver_for(&token, &metadata).await;

    let verifier = Verifier::new(options(endpoint))
        .expect("verifier")
        .with_nonce_store(NonceStore::memory());

    let first = verifier.verify_bytes(&token.bytes).await.expect("report");
    assert!(first.replay.is_passed());
    assert!(first.success());

    let second = verifier.verify_bytes(&token.bytes).await.expect("report");
    assert!(matches!(
        second.replay.error(),
        Some(PtxError::NonceReplayed)
    ));
    assert!(!second.success());
}

#[tokio::test]
async fn slow_resolver_hits_the_deadline() {
    let metadata = "{}";
    let token = issue_token(DOMAIN, metadata, 1);
    let anchor = hostname::derive(&token.witness.signals.commitment, DOMAIN);
    let endpoint = spawn_resolver_with_delay(
        txt_answer(&anchor, &metadata_digest_hex(metadata.as_bytes())),
        Duration::from_millis(500),
    )
    .await;

    let mut opts = options(endpoint);
    opts.deadline = Some(Duration::from_millis(50));
    let report = Verifier::new(opts)
        .expect("verifier")
        .verify_bytes(&token.bytes)
        .await
        .expect("report");
    assert!(matches!(
        report.dns.error(),
        Some(PtxError::DeadlineExceeded("dns"))
    ));
    assert!(report.proof.is_passed(), "deadline only fails the slow check");
    assert!(!report.success());
}

fn legacy_record(proof_system: i32) -> Vec<u8> {
    use ptx_anchor::container::{encode, Anchor, DohAnchor, PtxRecord, ZkProof};
    let record = PtxRecord {
        trust_method: 1,
        proof: Some(ZkProof {
            proof_system,
            verification_key_id: "sdv_poseidon_v1".into(),
            proof_data: br#"{"publicSignals":["1","2","3","4","5","6"],"proof":{"pi_a":[]}}"#
                .to_vec(),
        }),
        signed_metadata: "{}".into(),
        anchor: Some(Anchor::DohDetails(DohAnchor {
            domain_name: DOMAIN.into(),
        })),
    };
    encode(&record)
}

struct AcceptAll;

impl ptx_anchor::verifier::LegacyProofAdapter for AcceptAll {
    fn verify(&self, _proof: &Value, _signals: &[String]) -> ptx_anchor::PtxResult<bool> {
        Ok(true)
    }
}

#[tokio::test]
async fn legacy_envelope_without_adapter_fails_closed() {
    let bytes = legacy_record(ptx_anchor::container::ProofSystem::Groth16 as i32);
    let endpoint = spawn_resolver(json!({ "Status": 3 })).await;
    let report = Verifier::new(options(endpoint))
        .expect("verifier")
        .verify_bytes(&bytes)
        .await
        .expect("report");
    assert!(matches!(
        report.proof.error(),
        Some(PtxError::UnsupportedProofSystem(_))
    ));
}

#[tokio::test]
async fn installed_legacy_adapter_handles_the_legacy_path() {
    let bytes = legacy_record(ptx_anchor::container::ProofSystem::Groth16 as i32);
    let endpoint = spawn_resolver(json!({ "Status": 3 })).await;
    let report = Verifier::new(options(endpoint))
        .expect("verifier")
        .with_legacy_adapter(Box::new(AcceptAll))
        .verify_bytes(&bytes)
        .await
        .expect("report");
    assert!(report.proof.is_passed());
    // The fabricated signals cannot match re-derivation, so the overall
    // verdict still fails on the semantic check.
    assert!(report.semantic.is_failed());
    assert!(!report.success());
}

#[tokio::test]
async fn unknown_proof_system_tag_is_rejected() {
    let bytes = legacy_record(0);
    let endpoint = spawn_resolver(json!({ "Status": 3 })).await;
    let report = Verifier::new(options(endpoint))
        .expect("verifier")
        .verify_bytes(&bytes)
        .await
        .expect("report");
    assert!(matches!(
        report.proof.error(),
        Some(PtxError::UnsupportedProofSystem(_))
    ));
}

#[tokio::test]
async fn bad_metadata_json_is_fatal() {
    let token = issue_token(DOMAIN, "not-json", 1);
    let endpoint = spawn_resolver(json!({ "Status": 0 })).await;
    let verifier = Verifier::new(options(endpoint)).expect("verifier");
    assert!(matches!(
        verifier.verify_bytes(&token.bytes).await,
        Err(PtxError::MetadataJsonInvalid(_))
    ));
}
