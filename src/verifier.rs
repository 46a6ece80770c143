//! The verification engine.
//!
//! One call runs the metadata policy checks (expiry, scope, audience),
//! replay protection, DNS anchoring, semantic re-derivation, and
//! cryptographic proof verification, reporting each outcome independently.
//! Container or metadata decode failures are fatal; everything else degrades
//! the aggregate verdict while letting the remaining checks finish.
//!
//! Positions 2–5 of the envelope's public signals are never trusted: the
//! native crypto check rebuilds them from the PTX payload and binds the
//! rebuilt values into the public witness handed to Groth16.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use ark_bn254::Bn254;
use ark_groth16::{Groth16, Proof};
use ark_serialize::CanonicalDeserialize;
use ark_snark::SNARK;
use serde_json::Value;
use tracing::{debug, warn};

use crate::container::{self, ProofSystem, PtxRecord};
use crate::dns::{DohResolver, DEFAULT_DOH_ENDPOINT};
use crate::envelope::ProofEnvelope;
use crate::errors::{PtxError, PtxResult};
use crate::field::{fr_from_decimal, fr_to_decimal, Fr};
use crate::hostname;
use crate::keys::KeyStore;
use crate::replay::{unix_now, NonceOutcome, NonceStore};
use crate::signals::{self, DerivedSignals};

/// Replay-hold horizon applied when the metadata names a nonce but no
/// expiration timestamp.
const DEFAULT_REPLAY_HORIZON_SECS: i64 = 300;

/// Caller-facing configuration of one verifier instance.
#[derive(Debug, Clone)]
pub struct VerifyOptions {
    pub intended_scope: Vec<String>,
    pub intended_audience: Vec<String>,
    pub strict: bool,
    pub redis_url: Option<String>,
    pub doh_endpoint: String,
    pub key_dir: PathBuf,
    /// Deadline applied independently to each blocking sub-check.
    pub deadline: Option<Duration>,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            intended_scope: Vec::new(),
            intended_audience: Vec::new(),
            strict: false,
            redis_url: None,
            doh_endpoint: DEFAULT_DOH_ENDPOINT.to_string(),
            key_dir: PathBuf::from("."),
            deadline: None,
        }
    }
}

/// Outcome of a single sub-check. `Skipped` marks checks that did not run;
/// it is distinct from failure, and only configured-optional checks may be
/// skipped in a successful verification.
#[derive(Debug)]
pub enum CheckOutcome {
    Passed,
    Failed(PtxError),
    Skipped,
}

impl CheckOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, CheckOutcome::Passed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, CheckOutcome::Failed(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, CheckOutcome::Skipped)
    }

    pub fn error(&self) -> Option<&PtxError> {
        match self {
            CheckOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }

    fn from_result(result: PtxResult<()>) -> Self {
        match result {
            Ok(()) => CheckOutcome::Passed,
            Err(err) => CheckOutcome::Failed(err),
        }
    }
}

/// Metadata policy verdicts, one per enforced rule.
#[derive(Debug)]
pub struct MetadataChecks {
    pub expiry: CheckOutcome,
    pub scope: CheckOutcome,
    pub audience: CheckOutcome,
}

/// Re-derived values surfaced in verbose output.
#[derive(Debug, Default, Clone)]
pub struct SignalDetails {
    pub domain: String,
    pub fqdn_hash: String,
    pub metadata_json: String,
    pub metadata_hash_p1: String,
    pub metadata_hash_p2: String,
    pub trust_method: String,
    pub nullifier_hash: Option<String>,
    pub commitment: Option<String>,
}

/// Aggregate result of one verification.
#[derive(Debug)]
pub struct VerificationReport {
    pub metadata: MetadataChecks,
    pub replay: CheckOutcome,
    pub dns: CheckOutcome,
    pub semantic: CheckOutcome,
    pub proof: CheckOutcome,
    pub derived_hostname: Option<String>,
    pub dns_time: Duration,
    pub proof_time: Duration,
    pub details: SignalDetails,
}

impl VerificationReport {
    /// Overall verdict: every required check passed and none failed. Replay
    /// is configured-optional, so an unconfigured (skipped) replay check does
    /// not block success; a skipped required check does.
    pub fn success(&self) -> bool {
        !self.metadata.expiry.is_failed()
            && !self.metadata.scope.is_failed()
            && !self.metadata.audience.is_failed()
            && !self.replay.is_failed()
            && self.dns.is_passed()
            && self.semantic.is_passed()
            && self.proof.is_passed()
    }

    /// All failure errors in check order, for the summary line.
    pub fn failures(&self) -> Vec<&PtxError> {
        [
            &self.metadata.expiry,
            &self.metadata.scope,
            &self.metadata.audience,
            &self.replay,
            &self.dns,
            &self.semantic,
            &self.proof,
        ]
        .into_iter()
        .filter_map(CheckOutcome::error)
        .collect()
    }
}

/// Hook for verifying legacy (snarkjs-era) proof envelopes. The concrete
/// toolchain shell-out lives outside this crate; installing no adapter makes
/// legacy proofs fail closed.
pub trait LegacyProofAdapter: Send + Sync {
    fn verify(&self, proof: &Value, signals: &[String]) -> PtxResult<bool>;
}

pub struct Verifier {
    options: VerifyOptions,
    resolver: DohResolver,
    nonce_store: Option<NonceStore>,
    keys: KeyStore,
    legacy: Option<Box<dyn LegacyProofAdapter>>,
}

impl Verifier {
    pub fn new(options: VerifyOptions) -> PtxResult<Self> {
        let nonce_store = match options.redis_url.as_deref() {
            Some(url) => Some(NonceStore::redis(url)?),
            None => None,
        };
        let resolver = DohResolver::new(options.doh_endpoint.clone());
        let keys = KeyStore::new(options.key_dir.clone());
        Ok(Self {
            options,
            resolver,
            nonce_store,
            keys,
            legacy: None,
        })
    }

    /// Replaces the replay ledger (tests, embedders with their own KV).
    pub fn with_nonce_store(mut self, store: NonceStore) -> Self {
        self.nonce_store = Some(store);
        self
    }

    pub fn with_legacy_adapter(mut self, adapter: Box<dyn LegacyProofAdapter>) -> Self {
        self.legacy = Some(adapter);
        self
    }

    pub async fn verify_file(&self, path: &Path) -> PtxResult<VerificationReport> {
        let data = std::fs::read(path)?;
        self.verify_bytes(&data).await
    }

    /// Runs the full check set over raw container bytes.
    pub async fn verify_bytes(&self, data: &[u8]) -> PtxResult<VerificationReport> {
        let record = container::decode(data)?;
        let metadata_raw = record.signed_metadata.clone();
        let metadata: serde_json::Map<String, Value> = serde_json::from_str(&metadata_raw)
            .map_err(|err| PtxError::MetadataJsonInvalid(err.to_string()))?;

        let now = unix_now();
        let expiry_epoch = metadata
            .get("expiration_timestamp")
            .and_then(|value| value.as_i64().or_else(|| value.as_f64().map(|f| f as i64)));

        let expiry = match expiry_epoch {
            Some(expired_at) if now > expired_at => {
                CheckOutcome::Failed(PtxError::TokenExpired { expired_at, now })
            }
            _ => CheckOutcome::Passed,
        };
        let scope = self.check_scope(&metadata);
        let audience = self.check_audience(&metadata);
        let replay = self.check_replay(&metadata, expiry_epoch, now).await;

        let envelope = match record.proof.as_ref() {
            Some(block) => ProofEnvelope::parse(&block.proof_data),
            None => Err(PtxError::ProofDecodeFailed(
                "record carries no proof block".into(),
            )),
        };

        let domain = record.anchor_domain().unwrap_or_default().to_string();
        let derived =
            DerivedSignals::derive(&domain, metadata_raw.as_bytes(), record.trust_method);

        let (dns, derived_hostname, dns_time) =
            self.check_dns(&record, &envelope, &metadata_raw).await;

        let semantic = match &envelope {
            Ok(env) => match parse_signal_vector(env.signals()) {
                Ok(parsed) => CheckOutcome::from_result(derived.check_against(&parsed)),
                Err(err) => CheckOutcome::Failed(err),
            },
            Err(err) => CheckOutcome::Failed(PtxError::ProofDecodeFailed(err.to_string())),
        };

        let (proof, proof_time) = self.check_crypto(&record, &envelope, &derived);

        let details = build_details(&domain, &metadata_raw, &derived, &envelope);
        let report = VerificationReport {
            metadata: MetadataChecks {
                expiry,
                scope,
                audience,
            },
            replay,
            dns,
            semantic,
            proof,
            derived_hostname,
            dns_time,
            proof_time,
            details,
        };
        debug!(success = report.success(), "verification complete");
        Ok(report)
    }

    /// Crypto-only shortcut: decodes the container, re-derives the public
    /// witness, and runs the proof check alone. Every other check is reported
    /// as skipped.
    pub async fn verify_crypto_only(&self, data: &[u8]) -> PtxResult<VerificationReport> {
        let record = container::decode(data)?;
        let envelope = match record.proof.as_ref() {
            Some(block) => ProofEnvelope::parse(&block.proof_data),
            None => Err(PtxError::ProofDecodeFailed(
                "record carries no proof block".into(),
            )),
        };
        let domain = record.anchor_domain().unwrap_or_default().to_string();
        let derived = DerivedSignals::derive(
            &domain,
            record.signed_metadata.as_bytes(),
            record.trust_method,
        );
        let (proof, proof_time) = self.check_crypto(&record, &envelope, &derived);
        let details = build_details(&domain, &record.signed_metadata, &derived, &envelope);

        Ok(VerificationReport {
            metadata: MetadataChecks {
                expiry: CheckOutcome::Skipped,
                scope: CheckOutcome::Skipped,
                audience: CheckOutcome::Skipped,
            },
            replay: CheckOutcome::Skipped,
            dns: CheckOutcome::Skipped,
            semantic: CheckOutcome::Skipped,
            proof,
            derived_hostname: None,
            dns_time: Duration::ZERO,
            proof_time,
            details,
        })
    }

    fn check_scope(&self, metadata: &serde_json::Map<String, Value>) -> CheckOutcome {
        if self.options.intended_scope.is_empty() {
            return CheckOutcome::Skipped;
        }
        match metadata.get("scopes").and_then(Value::as_array) {
            Some(scopes) => {
                let mut granted = scopes.iter().filter_map(Value::as_str);
                if granted.any(|s| self.options.intended_scope.iter().any(|want| want == s)) {
                    CheckOutcome::Passed
                } else {
                    CheckOutcome::Failed(PtxError::ScopeMismatch)
                }
            }
            None if self.options.strict => CheckOutcome::Failed(PtxError::ScopeMismatch),
            None => CheckOutcome::Passed,
        }
    }

    fn check_audience(&self, metadata: &serde_json::Map<String, Value>) -> CheckOutcome {
        if self.options.intended_audience.is_empty() {
            return CheckOutcome::Skipped;
        }
        match metadata.get("audience").and_then(Value::as_str) {
            Some(audience) => {
                if self
                    .options
                    .intended_audience
                    .iter()
                    .any(|want| want == audience)
                {
                    CheckOutcome::Passed
                } else {
                    CheckOutcome::Failed(PtxError::AudienceMismatch)
                }
            }
            None if self.options.strict => CheckOutcome::Failed(PtxError::AudienceMismatch),
            None => CheckOutcome::Passed,
        }
    }

    async fn check_replay(
        &self,
        metadata: &serde_json::Map<String, Value>,
        expiry_epoch: Option<i64>,
        now: i64,
    ) -> CheckOutcome {
        let (store, nonce) = match (
            self.nonce_store.as_ref(),
            metadata.get("nonce").and_then(Value::as_str),
        ) {
            (Some(store), Some(nonce)) => (store, nonce),
            _ => return CheckOutcome::Skipped,
        };

        let hold_until = expiry_epoch.unwrap_or(now + DEFAULT_REPLAY_HORIZON_SECS);
        let result = self
            .with_deadline("replay", store.check_and_set(nonce, hold_until))
            .await;
        match result {
            Ok(NonceOutcome::Fresh) => CheckOutcome::Passed,
            Ok(NonceOutcome::Replayed) => CheckOutcome::Failed(PtxError::NonceReplayed),
            Ok(NonceOutcome::Expired) => CheckOutcome::Failed(PtxError::TokenExpired {
                expired_at: hold_until,
                now,
            }),
            Err(err) => {
                warn!(error = %err, "replay check unavailable");
                CheckOutcome::Failed(err)
            }
        }
    }

    async fn check_dns(
        &self,
        record: &PtxRecord,
        envelope: &PtxResult<ProofEnvelope>,
        metadata_raw: &str,
    ) -> (CheckOutcome, Option<String>, Duration) {
        let domain = match record.anchor_domain() {
            Some(domain) => domain,
            None => {
                return (
                    CheckOutcome::Failed(PtxError::DnsLookupFailed(
                        "record carries no DoH anchor".into(),
                    )),
                    None,
                    Duration::ZERO,
                )
            }
        };
        let env = match envelope {
            Ok(env) => env,
            Err(err) => {
                return (
                    CheckOutcome::Failed(PtxError::ProofDecodeFailed(err.to_string())),
                    None,
                    Duration::ZERO,
                )
            }
        };
        let commitment = match env.signals().get(1).map(|s| fr_from_decimal(s)) {
            Some(Ok(commitment)) => commitment,
            _ => {
                return (
                    CheckOutcome::Failed(PtxError::ProofDecodeFailed(
                        "public signals missing a commitment".into(),
                    )),
                    None,
                    Duration::ZERO,
                )
            }
        };

        let derived_hostname = hostname::derive(&commitment, domain);
        let expected = signals::metadata_digest_hex(metadata_raw.as_bytes());
        let started = Instant::now();
        let result = self
            .with_deadline(
                "dns",
                self.resolver.verify_anchor(&derived_hostname, &expected),
            )
            .await;
        let elapsed = started.elapsed();
        debug!(
            hostname = %derived_hostname,
            elapsed_ms = elapsed.as_millis() as u64,
            ok = result.is_ok(),
            "DNS anchor check"
        );
        (
            CheckOutcome::from_result(result),
            Some(derived_hostname),
            elapsed,
        )
    }

    fn check_crypto(
        &self,
        record: &PtxRecord,
        envelope: &PtxResult<ProofEnvelope>,
        derived: &DerivedSignals,
    ) -> (CheckOutcome, Duration) {
        let block = match record.proof.as_ref() {
            Some(block) => block,
            None => {
                return (
                    CheckOutcome::Failed(PtxError::ProofDecodeFailed(
                        "record carries no proof block".into(),
                    )),
                    Duration::ZERO,
                )
            }
        };
        if block.proof_system != ProofSystem::Groth16 as i32 {
            return (
                CheckOutcome::Failed(PtxError::UnsupportedProofSystem(format!(
                    "proof system tag {}",
                    block.proof_system
                ))),
                Duration::ZERO,
            );
        }
        let env = match envelope {
            Ok(env) => env,
            Err(err) => {
                return (
                    CheckOutcome::Failed(PtxError::ProofDecodeFailed(err.to_string())),
                    Duration::ZERO,
                )
            }
        };

        match env {
            ProofEnvelope::Native {
                proof_bytes,
                signals,
            } => {
                let started = Instant::now();
                let outcome = self.verify_native(proof_bytes, signals, derived);
                (outcome, started.elapsed())
            }
            ProofEnvelope::Legacy { proof, signals } => {
                let started = Instant::now();
                let outcome = match self.legacy.as_deref() {
                    Some(adapter) => match adapter.verify(proof, signals) {
                        Ok(true) => CheckOutcome::Passed,
                        Ok(false) => CheckOutcome::Failed(PtxError::ProofInvalid(
                            "legacy verifier rejected the proof".into(),
                        )),
                        Err(err) => CheckOutcome::Failed(err),
                    },
                    None => CheckOutcome::Failed(PtxError::UnsupportedProofSystem(
                        "legacy proof envelope and no legacy adapter installed".into(),
                    )),
                };
                (outcome, started.elapsed())
            }
        }
    }

    /// Groth16 verification with the security-critical witness inversion: the
    /// four payload-derived signals come from re-derivation, never from the
    /// envelope.
    fn verify_native(
        &self,
        proof_bytes: &[u8],
        signals: &[String],
        derived: &DerivedSignals,
    ) -> CheckOutcome {
        if signals.len() < 2 {
            return CheckOutcome::Failed(PtxError::ProofDecodeFailed(
                "public signals missing nullifier hash and commitment".into(),
            ));
        }
        let nullifier_hash = match fr_from_decimal(&signals[0]) {
            Ok(value) => value,
            Err(err) => return CheckOutcome::Failed(err),
        };
        let commitment = match fr_from_decimal(&signals[1]) {
            Ok(value) => value,
            Err(err) => return CheckOutcome::Failed(err),
        };
        let proof = match Proof::<Bn254>::deserialize_compressed(proof_bytes) {
            Ok(proof) => proof,
            Err(err) => {
                return CheckOutcome::Failed(PtxError::ProofDecodeFailed(err.to_string()))
            }
        };
        let vk = if self.options.strict {
            self.keys.verifying_key_strict()
        } else {
            self.keys.verifying_key()
        };
        let vk = match vk {
            Ok(vk) => vk,
            Err(err) => return CheckOutcome::Failed(err),
        };

        let public_inputs = [
            nullifier_hash,
            commitment,
            derived.fqdn,
            derived.metadata_hash_p1,
            derived.metadata_hash_p2,
            derived.trust_method,
        ];
        match Groth16::<Bn254>::verify(&vk, &public_inputs, &proof) {
            Ok(true) => CheckOutcome::Passed,
            Ok(false) => {
                CheckOutcome::Failed(PtxError::ProofInvalid("pairing check failed".into()))
            }
            Err(err) => CheckOutcome::Failed(PtxError::ProofInvalid(err.to_string())),
        }
    }

    async fn with_deadline<T>(
        &self,
        check: &'static str,
        fut: impl Future<Output = PtxResult<T>>,
    ) -> PtxResult<T> {
        match self.options.deadline {
            Some(deadline) => tokio::time::timeout(deadline, fut)
                .await
                .map_err(|_| PtxError::DeadlineExceeded(check))?,
            None => fut.await,
        }
    }
}

fn parse_signal_vector(signals: &[String]) -> PtxResult<Vec<Fr>> {
    signals.iter().map(|s| fr_from_decimal(s)).collect()
}

fn build_details(
    domain: &str,
    metadata_raw: &str,
    derived: &DerivedSignals,
    envelope: &PtxResult<ProofEnvelope>,
) -> SignalDetails {
    let (nullifier_hash, commitment) = match envelope {
        Ok(env) => (
            env.signals().first().cloned(),
            env.signals().get(1).cloned(),
        ),
        Err(_) => (None, None),
    };
    SignalDetails {
        domain: domain.to_string(),
        fqdn_hash: fr_to_decimal(&derived.fqdn),
        metadata_json: metadata_raw.to_string(),
        metadata_hash_p1: fr_to_decimal(&derived.metadata_hash_p1),
        metadata_hash_p2: fr_to_decimal(&derived.metadata_hash_p2),
        trust_method: fr_to_decimal(&derived.trust_method),
        nullifier_hash,
        commitment,
    }
}
