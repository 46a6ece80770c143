//! Poseidon permutation over the BN254 scalar field, compatible with the
//! reference circuit for state widths t in {2, 4, 5}.
//!
//! The permutation is written once, generically over a [`PoseidonBackend`]
//! that exposes field addition, multiplication, and constant injection. The
//! scalar backend evaluates it directly; the R1CS backend in the circuit
//! module replays the identical schedule as constraints, so both sides are
//! numerically indistinguishable by construction.
//!
//! Matrix products deliberately run column-major
//! (`out[i] = sum_j state[j] * M[j][i]`), matching the reference circuit.

mod constants;

use ark_ff::Zero;
use once_cell::sync::Lazy;

use crate::errors::{PtxError, PtxResult};
use crate::field::{fr_from_hex, Fr};

/// Number of full rounds, shared by every supported width.
pub const ROUNDS_FULL: usize = 8;

/// Partial-round counts indexed by `t - 2`, as fixed by the reference
/// parameterization.
pub const ROUNDS_PARTIAL: [usize; 16] = [
    56, 57, 56, 60, 60, 63, 64, 63, 60, 66, 60, 65, 70, 60, 64, 68,
];

/// Arithmetic surface the permutation is generic over.
///
/// Implementations must be pure: the permutation never branches on values
/// produced by the backend, so the constraint layout of a circuit backend is
/// input-independent.
pub trait PoseidonBackend {
    type Var: Clone;

    fn add(&mut self, a: &Self::Var, b: &Self::Var) -> Self::Var;
    fn mul(&mut self, a: &Self::Var, b: &Self::Var) -> Self::Var;
    fn constant(&mut self, value: Fr) -> Self::Var;
}

/// Trivial backend computing over bare field elements.
pub struct ScalarBackend;

impl PoseidonBackend for ScalarBackend {
    type Var = Fr;

    fn add(&mut self, a: &Fr, b: &Fr) -> Fr {
        *a + *b
    }

    fn mul(&mut self, a: &Fr, b: &Fr) -> Fr {
        *a * *b
    }

    fn constant(&mut self, value: Fr) -> Fr {
        value
    }
}

/// Parsed round tables for one state width.
pub(crate) struct PoseidonParams {
    pub t: usize,
    pub rounds_p: usize,
    /// Compressed round constants, `ROUNDS_FULL * t + rounds_p` entries.
    pub c: Vec<Fr>,
    /// MDS matrix, column-major access.
    pub m: Vec<Vec<Fr>>,
    /// Pre-sparse matrix applied by the middle full round.
    pub p: Vec<Vec<Fr>>,
    /// Flattened sparse matrices, `(2t - 1) * rounds_p` entries.
    pub s: Vec<Fr>,
}

fn parse_flat(table: &[&str]) -> Vec<Fr> {
    table
        .iter()
        .map(|hex| fr_from_hex(hex).expect("static Poseidon table entry"))
        .collect()
}

fn parse_matrix(rows: &[&[&str]]) -> Vec<Vec<Fr>> {
    rows.iter().map(|row| parse_flat(row)).collect()
}

macro_rules! poseidon_params {
    ($t:literal, $c:ident, $m:ident, $p:ident, $s:ident) => {{
        let m_rows: Vec<&[&str]> = constants::$m.iter().map(|row| &row[..]).collect();
        let p_rows: Vec<&[&str]> = constants::$p.iter().map(|row| &row[..]).collect();
        PoseidonParams {
            t: $t,
            rounds_p: ROUNDS_PARTIAL[$t - 2],
            c: parse_flat(&constants::$c),
            m: parse_matrix(&m_rows),
            p: parse_matrix(&p_rows),
            s: parse_flat(&constants::$s),
        }
    }};
}

static PARAMS_T2: Lazy<PoseidonParams> = Lazy::new(|| poseidon_params!(2, C2, M2, P2, S2));
static PARAMS_T4: Lazy<PoseidonParams> = Lazy::new(|| poseidon_params!(4, C4, M4, P4, S4));
static PARAMS_T5: Lazy<PoseidonParams> = Lazy::new(|| poseidon_params!(5, C5, M5, P5, S5));

pub(crate) fn params_for_width(t: usize) -> PtxResult<&'static PoseidonParams> {
    match t {
        2 => Ok(&PARAMS_T2),
        4 => Ok(&PARAMS_T4),
        5 => Ok(&PARAMS_T5),
        _ => Err(PtxError::PoseidonUnsupportedWidth(t)),
    }
}

/// x^5 expanded as (x*x)*(x*x)*x so a circuit backend spends exactly three
/// multiplications per S-box.
fn sbox<B: PoseidonBackend>(backend: &mut B, x: &B::Var) -> B::Var {
    let x2 = backend.mul(x, x);
    let x4 = backend.mul(&x2, &x2);
    backend.mul(&x4, x)
}

fn ark<B: PoseidonBackend>(
    backend: &mut B,
    state: &mut [B::Var],
    params: &PoseidonParams,
    offset: usize,
) {
    for (i, slot) in state.iter_mut().enumerate() {
        let c = backend.constant(params.c[offset + i]);
        *slot = backend.add(slot, &c);
    }
}

fn mix<B: PoseidonBackend>(
    backend: &mut B,
    state: &[B::Var],
    matrix: &[Vec<Fr>],
) -> Vec<B::Var> {
    let t = state.len();
    (0..t)
        .map(|i| {
            let mut acc = backend.constant(Fr::zero());
            for j in 0..t {
                let coef = backend.constant(matrix[j][i]);
                let term = backend.mul(&state[j], &coef);
                acc = backend.add(&acc, &term);
            }
            acc
        })
        .collect()
}

fn mix_sparse<B: PoseidonBackend>(
    backend: &mut B,
    state: &[B::Var],
    params: &PoseidonParams,
    round: usize,
) -> Vec<B::Var> {
    let t = state.len();
    let offset = (2 * t - 1) * round;

    let mut acc = backend.constant(Fr::zero());
    for (i, slot) in state.iter().enumerate() {
        let coef = backend.constant(params.s[offset + i]);
        let term = backend.mul(slot, &coef);
        acc = backend.add(&acc, &term);
    }

    let mut out = Vec::with_capacity(t);
    out.push(acc);
    for i in 1..t {
        let coef = backend.constant(params.s[offset + t + i - 1]);
        let term = backend.mul(&state[0], &coef);
        out.push(backend.add(&state[i], &term));
    }
    out
}

/// Runs the permutation over `inputs.len() + 1` state words and returns the
/// first output word. Fails synchronously with
/// [`PtxError::PoseidonUnsupportedWidth`] for unsupported widths.
pub fn permute<B: PoseidonBackend>(backend: &mut B, inputs: &[B::Var]) -> PtxResult<B::Var> {
    let t = inputs.len() + 1;
    let params = params_for_width(t)?;
    let half = ROUNDS_FULL / 2;
    let rp = params.rounds_p;

    let mut state: Vec<B::Var> = Vec::with_capacity(t);
    state.push(backend.constant(Fr::zero()));
    state.extend_from_slice(inputs);

    ark(backend, &mut state, params, 0);

    for r in 0..half - 1 {
        for slot in state.iter_mut() {
            *slot = sbox(backend, slot);
        }
        ark(backend, &mut state, params, (r + 1) * t);
        state = mix(backend, &state, &params.m);
    }

    for slot in state.iter_mut() {
        *slot = sbox(backend, slot);
    }
    ark(backend, &mut state, params, half * t);
    state = mix(backend, &state, &params.p);

    for round in 0..rp {
        state[0] = sbox(backend, &state[0]);
        let c = backend.constant(params.c[(half + 1) * t + round]);
        state[0] = backend.add(&state[0], &c);
        state = mix_sparse(backend, &state, params, round);
    }

    for r in 0..half - 1 {
        for slot in state.iter_mut() {
            *slot = sbox(backend, slot);
        }
        ark(backend, &mut state, params, (half + 1) * t + rp + r * t);
        state = mix(backend, &state, &params.m);
    }

    for slot in state.iter_mut() {
        *slot = sbox(backend, slot);
    }
    state = mix(backend, &state, &params.m);

    Ok(state.swap_remove(0))
}

/// Hashes 1 to 4 field elements with the scalar backend.
pub fn hash(inputs: &[Fr]) -> PtxResult<Fr> {
    permute(&mut ScalarBackend, inputs)
}

pub fn hash1(a: Fr) -> PtxResult<Fr> {
    hash(&[a])
}

pub fn hash3(a: Fr, b: Fr, c: Fr) -> PtxResult<Fr> {
    hash(&[a, b, c])
}

pub fn hash4(a: Fr, b: Fr, c: Fr, d: Fr) -> PtxResult<Fr> {
    hash(&[a, b, c, d])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::fr_from_decimal;

    #[test]
    fn unsupported_widths_fail_synchronously() {
        let inputs = vec![Fr::from(1u64); 2];
        assert!(matches!(
            hash(&inputs),
            Err(PtxError::PoseidonUnsupportedWidth(3))
        ));
        let inputs = vec![Fr::from(1u64); 5];
        assert!(matches!(
            hash(&inputs),
            Err(PtxError::PoseidonUnsupportedWidth(6))
        ));
        assert!(matches!(
            hash(&[]),
            Err(PtxError::PoseidonUnsupportedWidth(1))
        ));
    }

    #[test]
    fn hash1_matches_reference_circuit() {
        let out = hash1(Fr::from(1u64)).expect("hash");
        let expected = fr_from_decimal(
            "18586133768512220936620570745912940619677854269274689475585506675881198879027",
        )
        .expect("vector");
        assert_eq!(out, expected);
    }

    #[test]
    fn hash3_matches_reference_circuit() {
        let out = hash3(Fr::from(1u64), Fr::from(2u64), Fr::from(3u64)).expect("hash");
        let expected = fr_from_decimal(
            "6542985608222806190361240322586112750744169038454362455181422643027100751666",
        )
        .expect("vector");
        assert_eq!(out, expected);
    }

    #[test]
    fn hash4_matches_reference_circuit() {
        let out = hash4(
            Fr::from(1u64),
            Fr::from(2u64),
            Fr::from(3u64),
            Fr::from(4u64),
        )
        .expect("hash");
        let expected = fr_from_decimal(
            "18821383157269793795438455681495246036402687001665670618754263018637548127333",
        )
        .expect("vector");
        assert_eq!(out, expected);
    }
}
