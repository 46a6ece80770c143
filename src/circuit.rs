//! The Signed-Data-Verification (SDV) constraint system.
//!
//! Binds the nullifier to its hash and the commitment to
//! `(nullifier, secret, context)` where the context ties together the FQDN,
//! the two metadata digest halves, and the trust method. The Poseidon rounds
//! are emitted by replaying the shared permutation schedule against an R1CS
//! backend, so the constraint count is fixed at synthesis time and the gate
//! semantics match the scalar hash bit for bit.

use ark_r1cs_std::alloc::AllocVar;
use ark_r1cs_std::eq::EqGadget;
use ark_r1cs_std::fields::fp::FpVar;
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};

use crate::field::Fr;
use crate::poseidon::{self, PoseidonBackend};

/// Emits Poseidon arithmetic as R1CS gates over [`FpVar`] values.
///
/// Additions and constant injections are free; each multiplication of two
/// non-constant variables costs one constraint, so the S-box expansion
/// `(x*x)*(x*x)*x` lands at three constraints.
pub(crate) struct R1csBackend;

impl PoseidonBackend for R1csBackend {
    type Var = FpVar<Fr>;

    fn add(&mut self, a: &FpVar<Fr>, b: &FpVar<Fr>) -> FpVar<Fr> {
        a + b
    }

    fn mul(&mut self, a: &FpVar<Fr>, b: &FpVar<Fr>) -> FpVar<Fr> {
        a * b
    }

    fn constant(&mut self, value: Fr) -> FpVar<Fr> {
        FpVar::Constant(value)
    }
}

/// Witness assignment for the SDV circuit.
///
/// Public inputs are allocated in the order that defines the verifier's
/// public-witness layout: nullifier hash, commitment, FQDN, metadata digest
/// halves, trust method. `None` fields are only valid during setup.
#[derive(Clone, Default)]
pub struct SdvCircuit {
    pub nullifier_hash: Option<Fr>,
    pub commitment: Option<Fr>,
    pub fqdn: Option<Fr>,
    pub metadata_hash_p1: Option<Fr>,
    pub metadata_hash_p2: Option<Fr>,
    pub trust_method: Option<Fr>,
    pub nullifier: Option<Fr>,
    pub secret: Option<Fr>,
}

impl ConstraintSynthesizer<Fr> for SdvCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        let assigned = |value: Option<Fr>| move || value.ok_or(SynthesisError::AssignmentMissing);

        let nullifier_hash = FpVar::new_input(cs.clone(), assigned(self.nullifier_hash))?;
        let commitment = FpVar::new_input(cs.clone(), assigned(self.commitment))?;
        let fqdn = FpVar::new_input(cs.clone(), assigned(self.fqdn))?;
        let metadata_hash_p1 = FpVar::new_input(cs.clone(), assigned(self.metadata_hash_p1))?;
        let metadata_hash_p2 = FpVar::new_input(cs.clone(), assigned(self.metadata_hash_p2))?;
        let trust_method = FpVar::new_input(cs.clone(), assigned(self.trust_method))?;

        let nullifier = FpVar::new_witness(cs.clone(), assigned(self.nullifier))?;
        let secret = FpVar::new_witness(cs, assigned(self.secret))?;

        let mut backend = R1csBackend;

        let context = poseidon::permute(
            &mut backend,
            &[fqdn, metadata_hash_p1, metadata_hash_p2, trust_method],
        )
        .map_err(|_| SynthesisError::Unsatisfiable)?;
        let derived_nullifier_hash = poseidon::permute(&mut backend, &[nullifier.clone()])
            .map_err(|_| SynthesisError::Unsatisfiable)?;
        let derived_commitment = poseidon::permute(&mut backend, &[nullifier, secret, context])
            .map_err(|_| SynthesisError::Unsatisfiable)?;

        nullifier_hash.enforce_equal(&derived_nullifier_hash)?;
        commitment.enforce_equal(&derived_commitment)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_relations::r1cs::ConstraintSystem;

    use crate::field::fr_from_decimal;
    use crate::poseidon::{hash1, hash3, hash4};

    fn satisfied_circuit() -> SdvCircuit {
        let nullifier = Fr::from(11u64);
        let secret = Fr::from(22u64);
        let fqdn = fr_from_decimal("3141592653589793238").expect("fqdn");
        let p1 = Fr::from(7u64);
        let p2 = Fr::from(9u64);
        let trust_method = Fr::from(1u64);

        let context = hash4(fqdn, p1, p2, trust_method).expect("context");
        SdvCircuit {
            nullifier_hash: Some(hash1(nullifier).expect("nullifier hash")),
            commitment: Some(hash3(nullifier, secret, context).expect("commitment")),
            fqdn: Some(fqdn),
            metadata_hash_p1: Some(p1),
            metadata_hash_p2: Some(p2),
            trust_method: Some(trust_method),
            nullifier: Some(nullifier),
            secret: Some(secret),
        }
    }

    #[test]
    fn scalar_and_circuit_poseidon_agree() {
        let cs = ConstraintSystem::<Fr>::new_ref();
        satisfied_circuit()
            .generate_constraints(cs.clone())
            .expect("synthesize");
        assert!(cs.is_satisfied().expect("satisfiability query"));
        assert_eq!(cs.num_instance_variables(), 7); // six inputs plus the constant one
    }

    #[test]
    fn perturbed_nullifier_hash_is_unsatisfiable() {
        let mut circuit = satisfied_circuit();
        circuit.nullifier_hash = circuit.nullifier_hash.map(|h| h + Fr::from(1u64));
        let cs = ConstraintSystem::<Fr>::new_ref();
        circuit.generate_constraints(cs.clone()).expect("synthesize");
        assert!(!cs.is_satisfied().expect("satisfiability query"));
    }

    #[test]
    fn perturbed_commitment_is_unsatisfiable() {
        let mut circuit = satisfied_circuit();
        circuit.commitment = circuit.commitment.map(|c| c + Fr::from(1u64));
        let cs = ConstraintSystem::<Fr>::new_ref();
        circuit.generate_constraints(cs.clone()).expect("synthesize");
        assert!(!cs.is_satisfied().expect("satisfiability query"));
    }
}
