//! Witness assembly and Groth16 proof generation.
//!
//! The prover derives every public signal from the PTX payload, proves the
//! SDV relation, self-verifies the fresh proof against its own verifying key,
//! and emits the native proof envelope. Self-verification failure means a
//! corrupted key pair or an implementation bug and is fatal.

use std::time::Instant;

use ark_bn254::Bn254;
use ark_groth16::Groth16;
use ark_serialize::CanonicalSerialize;
use ark_snark::SNARK;
use tracing::{debug, info};

use crate::circuit::SdvCircuit;
use crate::envelope;
use crate::errors::{PtxError, PtxResult};
use crate::field::{fr_from_be_bytes_reduce, fr_to_decimal, Fr};
use crate::keys::KeyStore;
use crate::poseidon;
use crate::signals::DerivedSignals;

/// The six public field elements in verifier layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicSignals {
    pub nullifier_hash: Fr,
    pub commitment: Fr,
    pub fqdn: Fr,
    pub metadata_hash_p1: Fr,
    pub metadata_hash_p2: Fr,
    pub trust_method: Fr,
}

impl PublicSignals {
    pub fn to_vec(&self) -> Vec<Fr> {
        vec![
            self.nullifier_hash,
            self.commitment,
            self.fqdn,
            self.metadata_hash_p1,
            self.metadata_hash_p2,
            self.trust_method,
        ]
    }

    pub fn decimal_strings(&self) -> Vec<String> {
        self.to_vec().iter().map(fr_to_decimal).collect()
    }
}

/// Full assignment for one proof: the public signals plus the two secrets.
#[derive(Debug, Clone)]
pub struct SdvWitness {
    pub signals: PublicSignals,
    pub nullifier: Fr,
    pub secret: Fr,
}

impl SdvWitness {
    /// Derives the complete witness from the PTX payload and the holder's
    /// secrets: context = H4(fqdn, p1, p2, tm), commitment = H3(nullifier,
    /// secret, context), nullifier_hash = H1(nullifier).
    pub fn derive(
        domain: &str,
        metadata: &[u8],
        trust_method: i32,
        nullifier: Fr,
        secret: Fr,
    ) -> PtxResult<Self> {
        let derived = DerivedSignals::derive(domain, metadata, trust_method);
        let context = poseidon::hash4(
            derived.fqdn,
            derived.metadata_hash_p1,
            derived.metadata_hash_p2,
            derived.trust_method,
        )?;
        let commitment = poseidon::hash3(nullifier, secret, context)?;
        let nullifier_hash = poseidon::hash1(nullifier)?;

        Ok(Self {
            signals: PublicSignals {
                nullifier_hash,
                commitment,
                fqdn: derived.fqdn,
                metadata_hash_p1: derived.metadata_hash_p1,
                metadata_hash_p2: derived.metadata_hash_p2,
                trust_method: derived.trust_method,
            },
            nullifier,
            secret,
        })
    }

    fn circuit(&self) -> SdvCircuit {
        SdvCircuit {
            nullifier_hash: Some(self.signals.nullifier_hash),
            commitment: Some(self.signals.commitment),
            fqdn: Some(self.signals.fqdn),
            metadata_hash_p1: Some(self.signals.metadata_hash_p1),
            metadata_hash_p2: Some(self.signals.metadata_hash_p2),
            trust_method: Some(self.signals.trust_method),
            nullifier: Some(self.nullifier),
            secret: Some(self.secret),
        }
    }
}

/// Samples a random field element the way holders mint nullifiers and
/// secrets: 31 random bytes, so the value always fits the field.
pub fn random_secret() -> Fr {
    let mut bytes = [0u8; 31];
    rand::Rng::fill(&mut rand::thread_rng(), &mut bytes[..]);
    fr_from_be_bytes_reduce(&bytes)
}

/// Groth16 prover bound to a key store.
pub struct Prover {
    keys: KeyStore,
}

impl Prover {
    pub fn new(keys: KeyStore) -> Self {
        Self { keys }
    }

    /// Proves the witness and returns the native proof envelope bytes.
    pub fn prove(&self, witness: &SdvWitness) -> PtxResult<Vec<u8>> {
        let pk = self.keys.proving_key()?;
        let vk = self.keys.verifying_key()?;

        let started = Instant::now();
        let mut rng = rand::thread_rng();
        let proof = Groth16::<Bn254>::prove(&pk, witness.circuit(), &mut rng)
            .map_err(|err| PtxError::ProvingFailed(err.to_string()))?;
        debug!(elapsed_ms = started.elapsed().as_millis() as u64, "proof generated");

        let public_inputs = witness.signals.to_vec();
        let verified = Groth16::<Bn254>::verify(&vk, &public_inputs, &proof)
            .map_err(|err| PtxError::ProvingFailed(format!("self-verify errored: {err}")))?;
        if !verified {
            return Err(PtxError::ProverInvariantViolated);
        }

        let mut proof_bytes = Vec::new();
        proof
            .serialize_compressed(&mut proof_bytes)
            .map_err(|err| PtxError::ProvingFailed(err.to_string()))?;

        info!(
            commitment = %fr_to_decimal(&witness.signals.commitment),
            proof_len = proof_bytes.len(),
            "proof self-verified"
        );
        envelope::encode_native(&witness.signals.decimal_strings(), &proof_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::Zero;

    #[test]
    fn witness_derivation_matches_reference_vector() {
        let witness =
            SdvWitness::derive("example.com", b"{}", 1, Fr::from(1u64), Fr::from(2u64))
                .expect("derive");
        assert_eq!(
            fr_to_decimal(&witness.signals.nullifier_hash),
            "18586133768512220936620570745912940619677854269274689475585506675881198879027"
        );
        assert_eq!(
            fr_to_decimal(&witness.signals.commitment),
            "15393964702393066403622971097640363115052937940510369873499654501358802551849"
        );
        assert_eq!(
            fr_to_decimal(&witness.signals.metadata_hash_p1),
            "198030627578155901778469647491871211402"
        );
        assert_eq!(
            fr_to_decimal(&witness.signals.metadata_hash_p2),
            "90488421641866048750073685292303803550"
        );
        assert_eq!(witness.signals.trust_method, Fr::from(1u64));
    }

    #[test]
    fn random_secrets_are_nonzero_and_distinct() {
        let a = random_secret();
        let b = random_secret();
        assert_ne!(a, Fr::zero());
        assert_ne!(a, b);
    }
}
