//! The proof envelope embedded in a PTX record's `proof_data`.
//!
//! Parsed once at the boundary into a tagged variant; downstream code
//! branches on the variant, never on raw JSON keys. The native variant
//! carries the binary Groth16 proof (compressed points, hex-encoded on the
//! wire); the legacy variant carries an opaque snark-library proof object.

use serde::{Deserialize, Serialize};

use crate::errors::{PtxError, PtxResult};

/// Tag identifying envelopes produced by the native prover.
pub const NATIVE_SOURCE: &str = "gnark_native";

#[derive(Debug, Clone)]
pub enum ProofEnvelope {
    Native {
        proof_bytes: Vec<u8>,
        signals: Vec<String>,
    },
    Legacy {
        proof: serde_json::Value,
        signals: Vec<String>,
    },
}

#[derive(Deserialize)]
struct RawEnvelope {
    source: Option<String>,
    #[serde(rename = "publicSignals")]
    public_signals: Vec<String>,
    proof: Option<serde_json::Value>,
    #[serde(rename = "proofHex")]
    proof_hex: Option<String>,
}

#[derive(Serialize)]
struct NativeEnvelope<'a> {
    source: &'static str,
    #[serde(rename = "publicSignals")]
    public_signals: &'a [String],
    #[serde(rename = "proofHex")]
    proof_hex: String,
}

impl ProofEnvelope {
    pub fn parse(data: &[u8]) -> PtxResult<Self> {
        let raw: RawEnvelope = serde_json::from_slice(data)
            .map_err(|err| PtxError::ProofDecodeFailed(err.to_string()))?;
        match raw.source.as_deref() {
            Some(NATIVE_SOURCE) => {
                let proof_hex = raw.proof_hex.ok_or_else(|| {
                    PtxError::ProofDecodeFailed("native envelope without proofHex".into())
                })?;
                let proof_bytes = hex::decode(proof_hex.trim())
                    .map_err(|err| PtxError::ProofDecodeFailed(format!("proofHex: {err}")))?;
                Ok(ProofEnvelope::Native {
                    proof_bytes,
                    signals: raw.public_signals,
                })
            }
            Some(other) => Err(PtxError::ProofDecodeFailed(format!(
                "unknown proof source {other:?}"
            ))),
            None => {
                let proof = raw.proof.ok_or_else(|| {
                    PtxError::ProofDecodeFailed("legacy envelope without proof object".into())
                })?;
                Ok(ProofEnvelope::Legacy {
                    proof,
                    signals: raw.public_signals,
                })
            }
        }
    }

    pub fn signals(&self) -> &[String] {
        match self {
            ProofEnvelope::Native { signals, .. } | ProofEnvelope::Legacy { signals, .. } => {
                signals
            }
        }
    }
}

/// Serializes the native envelope JSON emitted by the prover.
pub fn encode_native(signals: &[String], proof_bytes: &[u8]) -> PtxResult<Vec<u8>> {
    let envelope = NativeEnvelope {
        source: NATIVE_SOURCE,
        public_signals: signals,
        proof_hex: hex::encode(proof_bytes),
    };
    serde_json::to_vec(&envelope).map_err(|err| PtxError::ProvingFailed(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_round_trip() {
        let signals = vec!["1".to_string(), "2".to_string()];
        let encoded = encode_native(&signals, &[0xde, 0xad, 0xbe, 0xef]).expect("encode");
        match ProofEnvelope::parse(&encoded).expect("parse") {
            ProofEnvelope::Native {
                proof_bytes,
                signals: parsed,
            } => {
                assert_eq!(proof_bytes, vec![0xde, 0xad, 0xbe, 0xef]);
                assert_eq!(parsed, signals);
            }
            ProofEnvelope::Legacy { .. } => panic!("native envelope parsed as legacy"),
        }
    }

    #[test]
    fn absent_source_is_legacy() {
        let raw = br#"{"publicSignals":["5"],"proof":{"pi_a":["1","2","3"]}}"#;
        match ProofEnvelope::parse(raw).expect("parse") {
            ProofEnvelope::Legacy { proof, signals } => {
                assert_eq!(signals, vec!["5".to_string()]);
                assert!(proof.get("pi_a").is_some());
            }
            ProofEnvelope::Native { .. } => panic!("legacy envelope parsed as native"),
        }
    }

    #[test]
    fn unknown_source_is_rejected() {
        let raw = br#"{"source":"plonk","publicSignals":[],"proofHex":"00"}"#;
        assert!(matches!(
            ProofEnvelope::parse(raw),
            Err(PtxError::ProofDecodeFailed(_))
        ));
    }

    #[test]
    fn native_without_hex_is_rejected() {
        let raw = br#"{"source":"gnark_native","publicSignals":[]}"#;
        assert!(matches!(
            ProofEnvelope::parse(raw),
            Err(PtxError::ProofDecodeFailed(_))
        ));
    }
}
