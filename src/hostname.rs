//! Commitment-to-hostname derivation.
//!
//! The commitment is serialized little-endian, hashed with SHA-256, and the
//! digest is written in base 27 over `a-z` plus `-`. The label is wrapped in
//! `x…x` so it can never collide with an ordinary subdomain of the parent.

use num_bigint::BigUint;
use sha2::{Digest, Sha256};

use crate::field::{fr_to_le32, Fr};

const ALPHABET: &[u8; 27] = b"abcdefghijklmnopqrstuvwxyz-";

/// Base-27 rendering of an unsigned integer, most significant digit first.
/// Zero encodes as `"a"`.
pub fn base27(value: &BigUint) -> String {
    if value == &BigUint::default() {
        return (ALPHABET[0] as char).to_string();
    }
    let base = BigUint::from(27u32);
    let mut digits = Vec::new();
    let mut n = value.clone();
    while n > BigUint::default() {
        let rem = (&n % &base).to_u32_digits().first().copied().unwrap_or(0);
        digits.push(ALPHABET[rem as usize]);
        n /= &base;
    }
    digits.reverse();
    String::from_utf8(digits).expect("alphabet is ASCII")
}

/// Derives `x<base27(SHA-256(LE(commitment)))>x.<parent>`.
pub fn derive(commitment: &Fr, parent_domain: &str) -> String {
    let le_bytes = fr_to_le32(commitment);
    let digest = Sha256::digest(le_bytes);
    let n = BigUint::from_bytes_be(&digest);
    format!("x{}x.{}", base27(&n), parent_domain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::fr_from_decimal;

    #[test]
    fn zero_encodes_as_a() {
        assert_eq!(base27(&BigUint::default()), "a");
    }

    #[test]
    fn base27_small_values() {
        assert_eq!(base27(&BigUint::from(26u32)), "-");
        assert_eq!(base27(&BigUint::from(27u32)), "ba");
        assert_eq!(base27(&BigUint::from(28u32)), "bb");
    }

    #[test]
    fn known_commitment_vector() {
        let commitment = fr_from_decimal("12345").expect("parse");
        assert_eq!(
            derive(&commitment, "ex.io"),
            "xbvmzrwwcfacrqwinrtmjapnabh-ts-qvluuoktwgxmevjgnehfoxq-x.ex.io"
        );
    }

    #[test]
    fn derivation_is_deterministic_and_parent_scoped() {
        let commitment = fr_from_decimal("999").expect("parse");
        let a = derive(&commitment, "one.test");
        let b = derive(&commitment, "two.test");
        assert_eq!(a, derive(&commitment, "one.test"));
        assert_eq!(
            a.strip_suffix("one.test").expect("suffix"),
            b.strip_suffix("two.test").expect("suffix")
        );
        assert!(a.starts_with('x'));
    }
}
