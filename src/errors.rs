use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type PtxResult<T> = Result<T, PtxError>;

/// Error taxonomy for token issuance and verification.
///
/// Field, Poseidon, and circuit errors are fatal and propagate to the nearest
/// boundary. DNS and replay-store errors degrade the verification outcome but
/// leave the remaining checks free to produce their own verdicts; the engine
/// aggregates them per sub-check.
#[derive(Debug, Error)]
pub enum PtxError {
    #[error("malformed PTX container: {0}")]
    ContainerMalformed(String),
    #[error("PTX record deserialization failed: {0}")]
    PtxDecodeFailed(#[from] prost::DecodeError),
    #[error("signed metadata is not a JSON object: {0}")]
    MetadataJsonInvalid(String),
    #[error("token expired at {expired_at}, now {now}")]
    TokenExpired { expired_at: i64, now: i64 },
    #[error("token scopes do not intersect the intended scope")]
    ScopeMismatch,
    #[error("token audience is not in the intended audience set")]
    AudienceMismatch,
    #[error("nonce already consumed")]
    NonceReplayed,
    #[error("nonce store unavailable: {0}")]
    NonceStoreUnavailable(String),
    #[error("DNS lookup failed: {0}")]
    DnsLookupFailed(String),
    #[error("no TXT record under {hostname} contains the expected digest {expected}")]
    DnsAnchorMismatch { hostname: String, expected: String },
    #[error("re-derived {0} signal does not match the proof")]
    SemanticMismatch(SignalKind),
    #[error("proof envelope decode failed: {0}")]
    ProofDecodeFailed(String),
    #[error("proof rejected: {0}")]
    ProofInvalid(String),
    #[error("unsupported proof system: {0}")]
    UnsupportedProofSystem(String),
    #[error("Poseidon is undefined for state width {0}")]
    PoseidonUnsupportedWidth(usize),
    #[error("field encoding error: {0}")]
    FieldEncodingError(String),
    #[error("key material missing at {}", .0.display())]
    KeyMaterialMissing(PathBuf),
    #[error("trusted setup failed: {0}")]
    SetupFailed(String),
    #[error("proof generation failed: {0}")]
    ProvingFailed(String),
    #[error("deadline exceeded during {0} check")]
    DeadlineExceeded(&'static str),
    #[error("freshly generated proof failed self-verification")]
    ProverInvariantViolated,
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Identifies which re-derived public signal failed the semantic comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Fqdn,
    MetaP1,
    MetaP2,
    TrustMethod,
}

impl std::fmt::Display for SignalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SignalKind::Fqdn => "fqdn",
            SignalKind::MetaP1 => "metadata_hash_p1",
            SignalKind::MetaP2 => "metadata_hash_p2",
            SignalKind::TrustMethod => "trust_method",
        };
        f.write_str(name)
    }
}
