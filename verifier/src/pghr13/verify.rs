use bn::{Fr, Gt, G1, G2};
use rand::{rngs::OsRng, Rng};
use tracing::{debug, instrument};

use crate::{
    config::VerificationMode,
    constants::PGHR13_EQUATIONS,
    pairing::{Bn254Pairing, PairingEngine, G2_BASE, GT_IDENTITY},
};

use super::{error::Pghr13Error, proof::Pghr13Proof};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pghr13VerifyingKey {
    pub a: G2,
    pub b: G1,
    pub c: G2,
    pub gamma: G2,
    pub gamma_beta_1: G1,
    pub gamma_beta_2: G2,
    pub z: G2,
    /// `ic[0]` is the constant term, `ic[i]` weighs the i-th public input.
    pub ic: Vec<G1>,
}

impl Pghr13VerifyingKey {
    /// Number of public inputs a witness for this key carries.
    pub fn num_public_inputs(&self) -> usize {
        self.ic.len().saturating_sub(1)
    }
}

// Combine the public inputs with the IC points of the key: ic[0] + sum(witness[i] * ic[i + 1]).
fn prepare_inputs(vk: &Pghr13VerifyingKey, witness: &[Fr]) -> Result<G1, Pghr13Error> {
    if witness.len() + 1 != vk.ic.len() {
        return Err(Pghr13Error::InvalidWitnessLength {
            witness: witness.len(),
            ic: vk.ic.len(),
        });
    }

    Ok(witness
        .iter()
        .zip(vk.ic.iter().skip(1))
        .fold(vk.ic[0], |acc, (w, ic)| acc + (*ic * *w)))
}

// Each equation is a list of pairs whose pairing product must be one. Right-hand sides
// are moved over by negating their G1 argument.
fn pairing_equations(
    vk: &Pghr13VerifyingKey,
    proof: &Pghr13Proof,
    acc: G1,
) -> [Vec<(G1, G2)>; PGHR13_EQUATIONS] {
    let g2 = *G2_BASE;

    [
        // e(A, vk.A) = e(A', G2)
        vec![(proof.a, vk.a), (-proof.a_prime, g2)],
        // e(vk.B, B) = e(B', G2)
        vec![(vk.b, proof.b), (-proof.b_prime, g2)],
        // e(C, vk.C) = e(C', G2)
        vec![(proof.c, vk.c), (-proof.c_prime, g2)],
        // e(K, vk.gamma) = e(acc + A + C, vk.gammaBeta2) * e(vk.gammaBeta1, B)
        vec![
            (proof.k, vk.gamma),
            (-(acc + proof.a + proof.c), vk.gamma_beta_2),
            (-vk.gamma_beta_1, proof.b),
        ],
        // e(acc + A, B) = e(H, vk.Z) * e(C, G2)
        vec![
            (acc + proof.a, proof.b),
            (-proof.h, vk.z),
            (-proof.c, g2),
        ],
    ]
}

/// Checks the five equations one after the other and stops at the first that does not hold.
/// The returned [`Pghr13Error::EquationFailed`] carries its 1-based index.
pub fn verify_pghr13_direct_with<E: PairingEngine>(
    engine: &E,
    vk: &Pghr13VerifyingKey,
    proof: &Pghr13Proof,
    witness: &[Fr],
) -> Result<(), Pghr13Error> {
    let acc = prepare_inputs(vk, witness)?;

    for (i, equation) in pairing_equations(vk, proof, acc).iter().enumerate() {
        if !engine.pairing_check(equation) {
            debug!(equation = i + 1, "pairing equation does not hold");
            return Err(Pghr13Error::EquationFailed(i + 1));
        }
    }

    Ok(())
}

pub fn verify_pghr13_direct(
    vk: &Pghr13VerifyingKey,
    proof: &Pghr13Proof,
    witness: &[Fr],
) -> Result<(), Pghr13Error> {
    verify_pghr13_direct_with(&Bn254Pairing, vk, proof, witness)
}

/// Checks all five equations with a single final exponentiation.
///
/// The Miller loop of every equation is raised to a coefficient and the results are
/// multiplied together. The first coefficient is one, the others are drawn from `rng`, so a
/// proof that breaks any equation passes with negligible probability. Only the final
/// exponentiation of the product is compared against the identity.
pub fn verify_pghr13_aggregated_with<E: PairingEngine, R: Rng>(
    engine: &E,
    vk: &Pghr13VerifyingKey,
    proof: &Pghr13Proof,
    witness: &[Fr],
    rng: &mut R,
) -> Result<(), Pghr13Error> {
    let acc = prepare_inputs(vk, witness)?;

    let mut coefficients = Vec::with_capacity(PGHR13_EQUATIONS);
    coefficients.push(Fr::one());
    for _ in 1..PGHR13_EQUATIONS {
        coefficients.push(Fr::random(rng));
    }

    let mut combination = Gt::one();
    for (equation, coefficient) in pairing_equations(vk, proof, acc)
        .iter()
        .zip(coefficients.into_iter())
    {
        combination = combination * engine.miller_loop(equation)?.pow(coefficient);
    }

    if engine.final_exponentiation(&combination)? != *GT_IDENTITY {
        debug!("aggregated pairing check does not hold");
        return Err(Pghr13Error::AggregatedCheckFailed);
    }

    Ok(())
}

pub fn verify_pghr13_aggregated_with_rng<R: Rng>(
    vk: &Pghr13VerifyingKey,
    proof: &Pghr13Proof,
    witness: &[Fr],
    rng: &mut R,
) -> Result<(), Pghr13Error> {
    verify_pghr13_aggregated_with(&Bn254Pairing, vk, proof, witness, rng)
}

/// Aggregated check with coefficients drawn from the operating system.
pub fn verify_pghr13_aggregated(
    vk: &Pghr13VerifyingKey,
    proof: &Pghr13Proof,
    witness: &[Fr],
) -> Result<(), Pghr13Error> {
    verify_pghr13_aggregated_with_rng(vk, proof, witness, &mut OsRng)
}

#[instrument(skip_all, fields(inputs = witness.len(), ?mode))]
pub fn verify_pghr13(
    vk: &Pghr13VerifyingKey,
    proof: &Pghr13Proof,
    witness: &[Fr],
    mode: VerificationMode,
) -> Result<(), Pghr13Error> {
    match mode {
        VerificationMode::Direct => verify_pghr13_direct(vk, proof, witness),
        VerificationMode::Aggregated => verify_pghr13_aggregated(vk, proof, witness),
    }
}
