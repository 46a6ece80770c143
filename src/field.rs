//! Scalar-field helpers for BN254.
//!
//! Everything in the system lives in the BN254 scalar field; this module owns
//! the encodings: hex and decimal strings, big-endian reduction of raw
//! digests, and the canonical 32-byte forms.

use ark_ff::{BigInteger, PrimeField};
use num_bigint::BigUint;

use crate::errors::{PtxError, PtxResult};

pub use ark_bn254::Fr;

/// Parses a hex string (with or without a `0x` prefix) into a field element,
/// reducing modulo the field order.
pub fn fr_from_hex(value: &str) -> PtxResult<Fr> {
    let trimmed = value.strip_prefix("0x").unwrap_or(value);
    let bytes = hex::decode(trimmed)
        .map_err(|err| PtxError::FieldEncodingError(format!("invalid hex: {err}")))?;
    Ok(Fr::from_be_bytes_mod_order(&bytes))
}

/// Parses a decimal string into a field element, reducing modulo the field
/// order.
pub fn fr_from_decimal(value: &str) -> PtxResult<Fr> {
    let n = BigUint::parse_bytes(value.as_bytes(), 10)
        .ok_or_else(|| PtxError::FieldEncodingError(format!("invalid decimal: {value:?}")))?;
    Ok(Fr::from(n))
}

/// Interprets arbitrary-length big-endian bytes as an unsigned integer and
/// reduces it into the field. Used for SHA-256 digests, which may exceed the
/// field order.
pub fn fr_from_be_bytes_reduce(bytes: &[u8]) -> Fr {
    Fr::from_be_bytes_mod_order(bytes)
}

/// Decimal rendering of a field element.
pub fn fr_to_decimal(value: &Fr) -> String {
    BigUint::from(value.into_bigint()).to_str_radix(10)
}

/// Canonical 32-byte big-endian serialization.
pub fn fr_to_be32(value: &Fr) -> [u8; 32] {
    let bytes = value.into_bigint().to_bytes_be();
    let mut out = [0u8; 32];
    out[32 - bytes.len()..].copy_from_slice(&bytes);
    out
}

/// Little-endian 32-byte form (the reverse of [`fr_to_be32`]).
pub fn fr_to_le32(value: &Fr) -> [u8; 32] {
    let bytes = value.into_bigint().to_bytes_le();
    let mut out = [0u8; 32];
    out[..bytes.len()].copy_from_slice(&bytes);
    out
}

/// Fifth power, the Poseidon S-box.
pub fn pow5(x: Fr) -> Fr {
    let x2 = x * x;
    x2 * x2 * x
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::Zero;

    #[test]
    fn decimal_round_trip() {
        let x = fr_from_decimal("12345").expect("parse");
        assert_eq!(fr_to_decimal(&x), "12345");
    }

    #[test]
    fn hex_matches_decimal() {
        let from_hex = fr_from_hex("0x3039").expect("parse hex");
        let from_dec = fr_from_decimal("12345").expect("parse decimal");
        assert_eq!(from_hex, from_dec);
    }

    #[test]
    fn oversized_big_endian_input_reduces() {
        // 2^256 - 1 is far above the field order; reduction must wrap it.
        let reduced = fr_from_be_bytes_reduce(&[0xff; 32]);
        assert_ne!(reduced, Fr::zero());
        let expected = fr_from_decimal(
            "6350874878119819312338956282401532410528162663560392320966563075034087161850",
        )
        .expect("parse");
        assert_eq!(reduced, expected);
    }

    #[test]
    fn canonical_bytes_round_trip() {
        let x = fr_from_decimal("12345678901234567890").expect("parse");
        assert_eq!(fr_from_be_bytes_reduce(&fr_to_be32(&x)), x);
    }

    #[test]
    fn le32_is_reverse_of_be32() {
        let x = fr_from_decimal("987654321").expect("parse");
        let be = fr_to_be32(&x);
        let mut le = fr_to_le32(&x);
        le.reverse();
        assert_eq!(be, le);
    }

    #[test]
    fn pow5_matches_repeated_multiplication() {
        let x = fr_from_decimal("7").expect("parse");
        assert_eq!(pow5(x), x * x * x * x * x);
    }
}
