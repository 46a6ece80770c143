//! Off-circuit derivation of the SDV public signals.
//!
//! The FQDN, the two metadata-digest halves, and the trust method are never
//! trusted from a proof envelope: they are recomputed from the PTX payload and
//! compared (and, on the native path, bound into the public witness) by
//! position. The FQDN binding is SHA-256 followed by field reduction.

use sha2::{Digest, Sha256};

use crate::errors::{PtxError, PtxResult, SignalKind};
use crate::field::{fr_from_be_bytes_reduce, Fr};

/// Index of the first re-derivable entry in the public-signal layout.
pub const DERIVED_SIGNALS_OFFSET: usize = 2;
/// Total number of public signals the SDV circuit exposes.
pub const PUBLIC_SIGNAL_COUNT: usize = 6;

/// The four public signals recomputed from the PTX payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedSignals {
    pub fqdn: Fr,
    pub metadata_hash_p1: Fr,
    pub metadata_hash_p2: Fr,
    pub trust_method: Fr,
}

/// Splits SHA-256(metadata) into two field elements: the digest's low 128
/// bits become `p1`, the high 128 bits `p2`.
pub fn split_metadata_hash(metadata: &[u8]) -> (Fr, Fr) {
    let digest = Sha256::digest(metadata);
    let p1 = fr_from_be_bytes_reduce(&digest[16..]);
    let p2 = fr_from_be_bytes_reduce(&digest[..16]);
    (p1, p2)
}

/// SHA-256 of the domain name, interpreted big-endian and reduced into the
/// field.
pub fn fqdn_hash(domain: &str) -> Fr {
    let digest = Sha256::digest(domain.as_bytes());
    fr_from_be_bytes_reduce(&digest)
}

/// Lowercase hex SHA-256 of the signed metadata, the content expected inside
/// the anchoring TXT record.
pub fn metadata_digest_hex(metadata: &[u8]) -> String {
    hex::encode(Sha256::digest(metadata))
}

impl DerivedSignals {
    pub fn derive(domain: &str, metadata: &[u8], trust_method: i32) -> Self {
        let (metadata_hash_p1, metadata_hash_p2) = split_metadata_hash(metadata);
        Self {
            fqdn: fqdn_hash(domain),
            metadata_hash_p1,
            metadata_hash_p2,
            trust_method: Fr::from(trust_method as u64),
        }
    }

    /// Compares this derivation against positions 2..=5 of a proof's public
    /// signals. Comparison is strictly positional.
    pub fn check_against(&self, signals: &[Fr]) -> PtxResult<()> {
        if signals.len() < PUBLIC_SIGNAL_COUNT {
            return Err(PtxError::ProofDecodeFailed(format!(
                "expected {PUBLIC_SIGNAL_COUNT} public signals, got {}",
                signals.len()
            )));
        }
        let expectations = [
            (SignalKind::Fqdn, self.fqdn),
            (SignalKind::MetaP1, self.metadata_hash_p1),
            (SignalKind::MetaP2, self.metadata_hash_p2),
            (SignalKind::TrustMethod, self.trust_method),
        ];
        for (i, (kind, expected)) in expectations.into_iter().enumerate() {
            if signals[DERIVED_SIGNALS_OFFSET + i] != expected {
                return Err(PtxError::SemanticMismatch(kind));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::fr_to_decimal;

    #[test]
    fn empty_object_metadata_split() {
        // SHA-256("{}") = 44136fa3...caaff8a; low half -> p1, high half -> p2.
        let (p1, p2) = split_metadata_hash(b"{}");
        assert_eq!(
            fr_to_decimal(&p1),
            "198030627578155901778469647491871211402"
        );
        assert_eq!(
            fr_to_decimal(&p2),
            "90488421641866048750073685292303803550"
        );
    }

    #[test]
    fn fqdn_hash_reduces_into_field() {
        let h = fqdn_hash("example.com");
        assert_eq!(
            fr_to_decimal(&h),
            "8277206545569842057707884633509656177369667059718086191927155364480322246980"
        );
    }

    #[test]
    fn comparison_is_positional() {
        let derived = DerivedSignals::derive("example.com", b"{}", 1);
        let mut signals = vec![Fr::from(0u64), Fr::from(0u64)];
        signals.extend([
            derived.fqdn,
            derived.metadata_hash_p1,
            derived.metadata_hash_p2,
            derived.trust_method,
        ]);
        derived.check_against(&signals).expect("consistent signals");

        // The same values out of order must not match.
        signals.swap(2, 3);
        assert!(matches!(
            derived.check_against(&signals),
            Err(PtxError::SemanticMismatch(SignalKind::Fqdn))
        ));
    }

    #[test]
    fn mismatched_trust_method_is_reported() {
        let derived = DerivedSignals::derive("example.com", b"{}", 1);
        let signals = vec![
            Fr::from(0u64),
            Fr::from(0u64),
            derived.fqdn,
            derived.metadata_hash_p1,
            derived.metadata_hash_p2,
            Fr::from(2u64),
        ];
        assert!(matches!(
            derived.check_against(&signals),
            Err(PtxError::SemanticMismatch(SignalKind::TrustMethod))
        ));
    }

    #[test]
    fn short_signal_vector_is_a_decode_error() {
        let derived = DerivedSignals::derive("example.com", b"{}", 1);
        let signals = vec![Fr::from(0u64); 4];
        assert!(matches!(
            derived.check_against(&signals),
            Err(PtxError::ProofDecodeFailed(_))
        ));
    }
}
