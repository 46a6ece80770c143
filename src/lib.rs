#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

//! Issues and verifies PTX tokens: portable, DNS-anchored credentials
//! attesting that the holder of a secret can bind metadata to a fully
//! qualified domain name without disclosing the secret.
//!
//! A token carries a Groth16 proof over BN254 that a commitment, published
//! as a DNS TXT record under a hostname derived from the commitment itself,
//! was formed by a Poseidon hash chain over the holder's nullifier, secret,
//! and a context hash binding the FQDN, the metadata digest, and the trust
//! method.
//!
//! The flow is split along the system's natural seams: [`poseidon`] owns the
//! circom-compatible permutation (scalar and in-circuit through one shared
//! schedule), [`circuit`] the SDV constraint system, [`prover`] and [`keys`]
//! proof generation and key lifecycle, and [`verifier`] the engine combining
//! semantic re-derivation ([`signals`]), DNS anchoring ([`hostname`] +
//! [`dns`]), replay protection ([`replay`]), and Groth16 verification over
//! the [`container`] wire format.

pub mod circuit;
pub mod cli;
pub mod container;
pub mod dns;
pub mod envelope;
pub mod errors;
pub mod field;
pub mod hostname;
pub mod keys;
pub mod poseidon;
pub mod prover;
pub mod replay;
pub mod signals;
pub mod verifier;

pub use errors::{PtxError, PtxResult, SignalKind};
pub use prover::{Prover, PublicSignals, SdvWitness};
pub use verifier::{CheckOutcome, VerificationReport, Verifier, VerifyOptions};
