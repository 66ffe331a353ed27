//! The boundary with the BN254 pairing library.
//!
//! Verification only ever talks to the curve through [`PairingEngine`], which keeps the
//! PGHR13 equations independent of how the Miller loop and final exponentiation are computed.

use bn::{miller_loop_batch, pairing, pairing_batch, Fr, Group, Gt, G1, G2};
use lazy_static::lazy_static;

use crate::{
    constants::{
        FIELD_ELEMENT_LENGTH, G1_GENERATOR_X, G1_GENERATOR_Y, G1_POINT_LENGTH, G2_GENERATOR_X,
        G2_GENERATOR_Y,
    },
    converter::{
        biguint_to_fr, g1_from_strings, g1_point_to_uncompressed_bytes, g2_from_strings,
        uncompressed_bytes_to_g1_point,
    },
    error::Error,
};

lazy_static! {
    /// The G1 generator `(1, 2)`.
    pub static ref G1_BASE: G1 = g1_from_strings(G1_GENERATOR_X, G1_GENERATOR_Y, 10)
        .expect("G1 generator coordinates are on the curve");

    /// The standard G2 generator.
    pub static ref G2_BASE: G2 = g2_from_strings(G2_GENERATOR_X, G2_GENERATOR_Y, 10)
        .expect("G2 generator coordinates are on the curve");

    /// `e(G1, G2)^0`, the neutral element every pairing product is compared against.
    pub static ref GT_IDENTITY: Gt = pairing(*G1_BASE, *G2_BASE).pow(Fr::zero());
}

pub trait PairingEngine {
    /// Whether the product of `e(p, q)` over all pairs is the identity.
    fn pairing_check(&self, pairs: &[(G1, G2)]) -> bool;

    /// The product of the Miller loops of all pairs, before final exponentiation.
    fn miller_loop(&self, pairs: &[(G1, G2)]) -> Result<Gt, Error>;

    fn final_exponentiation(&self, f: &Gt) -> Result<Gt, Error>;
}

/// [`PairingEngine`] backed by `substrate-bn`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bn254Pairing;

impl PairingEngine for Bn254Pairing {
    fn pairing_check(&self, pairs: &[(G1, G2)]) -> bool {
        pairing_batch(pairs) == *GT_IDENTITY
    }

    fn miller_loop(&self, pairs: &[(G1, G2)]) -> Result<Gt, Error> {
        // A pair with a point at infinity pairs to one, and the batch Miller loop
        // refuses to convert it to affine form.
        let pairs: Vec<(G2, G1)> = pairs
            .iter()
            .filter(|(p, q)| !p.is_zero() && !q.is_zero())
            .map(|&(p, q)| (q, p))
            .collect();
        if pairs.is_empty() {
            return Ok(Gt::one());
        }

        miller_loop_batch(&pairs).map_err(Error::Curve)
    }

    fn final_exponentiation(&self, f: &Gt) -> Result<Gt, Error> {
        f.final_exponentiation().ok_or(Error::FinalExponentiation)
    }
}

/// Adds two uncompressed G1 points given as `p || q`.
pub fn add_g1(data: &[u8]) -> Result<[u8; G1_POINT_LENGTH], Error> {
    if data.len() != 2 * G1_POINT_LENGTH {
        return Err(Error::InvalidLength {
            expected: 2 * G1_POINT_LENGTH,
            actual: data.len(),
        });
    }

    let p = uncompressed_bytes_to_g1_point(&data[..G1_POINT_LENGTH])?;
    let q = uncompressed_bytes_to_g1_point(&data[G1_POINT_LENGTH..])?;
    g1_point_to_uncompressed_bytes(&(p + q))
}

/// Multiplies an uncompressed G1 point by a 32-byte big-endian scalar, given as
/// `p || scalar`.
pub fn mul_g1(data: &[u8]) -> Result<[u8; G1_POINT_LENGTH], Error> {
    if data.len() != G1_POINT_LENGTH + FIELD_ELEMENT_LENGTH {
        return Err(Error::InvalidLength {
            expected: G1_POINT_LENGTH + FIELD_ELEMENT_LENGTH,
            actual: data.len(),
        });
    }

    let p = uncompressed_bytes_to_g1_point(&data[..G1_POINT_LENGTH])?;
    let scalar = biguint_to_fr(&num_bigint::BigUint::from_bytes_be(&data[G1_POINT_LENGTH..]))?;
    g1_point_to_uncompressed_bytes(&(p * scalar))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivial_pairing_check() {
        let two = Fr::from_str("2").unwrap();
        let two_g1 = *G1_BASE * two;
        let two_g2 = *G2_BASE * two;

        assert!(Bn254Pairing.pairing_check(&[(*G1_BASE, two_g2), (-two_g1, *G2_BASE)]));
        assert!(!Bn254Pairing.pairing_check(&[(*G1_BASE, two_g2), (two_g1, *G2_BASE)]));
    }

    #[test]
    fn test_identity_is_neutral() {
        assert!(*GT_IDENTITY == Gt::one());
        assert!(Bn254Pairing.pairing_check(&[]));
        assert!(Bn254Pairing.pairing_check(&[(G1::zero(), *G2_BASE)]));
    }

    #[test]
    fn test_miller_loop_then_final_exponentiation_matches_pairing() {
        let three = Fr::from_str("3").unwrap();
        let pairs = [(*G1_BASE * three, *G2_BASE), (-*G1_BASE, *G2_BASE * three)];

        let f = Bn254Pairing.miller_loop(&pairs).unwrap();
        let finalized = Bn254Pairing.final_exponentiation(&f).unwrap();
        assert!(finalized == *GT_IDENTITY);

        let single = Bn254Pairing.miller_loop(&pairs[..1]).unwrap();
        let finalized = Bn254Pairing.final_exponentiation(&single).unwrap();
        assert!(finalized == pairing(*G1_BASE, *G2_BASE).pow(three));
    }

    #[test]
    fn test_miller_loop_skips_points_at_infinity() {
        let pairs = [(G1::zero(), *G2_BASE), (*G1_BASE, G2::zero())];
        assert!(Bn254Pairing.miller_loop(&pairs).unwrap() == Gt::one());
    }

    #[test]
    fn test_add_and_mul_g1() {
        let g = g1_point_to_uncompressed_bytes(&G1_BASE).unwrap();

        let mut data = [0u8; 128];
        data[..64].copy_from_slice(&g);
        data[64..].copy_from_slice(&g);
        let sum = add_g1(&data).unwrap();

        let mut data = [0u8; 96];
        data[..64].copy_from_slice(&g);
        data[95] = 2;
        let product = mul_g1(&data).unwrap();

        assert_eq!(sum, product);
        assert_eq!(
            sum,
            g1_point_to_uncompressed_bytes(&(*G1_BASE * Fr::from_str("2").unwrap())).unwrap()
        );
    }

    #[test]
    fn test_add_g1_rejects_wrong_length() {
        assert!(matches!(
            add_g1(&[0u8; 127]),
            Err(Error::InvalidLength { expected: 128, actual: 127 })
        ));
        assert!(matches!(
            mul_g1(&[0u8; 64]),
            Err(Error::InvalidLength { expected: 96, actual: 64 })
        ));
    }
}
