use std::{fs, path::Path};

use bn::{Fr, Group, G1, G2};
use tracing::{debug, warn};

use crate::{
    config::ParseOptions,
    constants::{PGHR13_PROOF_ELEMENTS, ZOKRATES_ELEMENT_DELIMITER},
    converter::{biguint_to_fr, decode_scalar, g1_from_strings, g2_from_strings},
    error::Error,
};

use super::proof::Pghr13Proof;

fn element_tokens<'a>(
    chunk: &'a str,
    field: &'static str,
    expected: usize,
) -> Result<Vec<&'a str>, Error> {
    let tokens: Vec<&str> = chunk.trim().split(' ').collect();
    if tokens.len() != expected {
        return Err(Error::InvalidTokenCount {
            field,
            expected,
            found: tokens.len(),
        });
    }
    Ok(tokens)
}

fn g1_element(chunk: &str, field: &'static str) -> Result<G1, Error> {
    let tokens = element_tokens(chunk, field, 2)?;
    g1_from_strings(tokens[0], tokens[1], 10)
}

fn g2_element(chunk: &str, field: &'static str) -> Result<G2, Error> {
    let tokens = element_tokens(chunk, field, 4)?;
    g2_from_strings([tokens[0], tokens[1]], [tokens[2], tokens[3]], 10)
}

/// Parses a PGHR13 proof printed by ZoKrates.
///
/// Every point is written as `0` followed by its coordinates, so after folding newlines and
/// tabs into spaces the text splits on `" 0 "` into the eight elements A, A', B, B', C, C', H
/// and K. The leading `0` of A is not preceded by a space and is dropped separately.
pub fn load_pghr13_proof_from_str(
    content: &str,
    options: &ParseOptions,
) -> Result<Pghr13Proof, Error> {
    let normalized = content.replace(['\n', '\t'], " ");
    let elements: Vec<&str> = normalized.split(ZOKRATES_ELEMENT_DELIMITER).collect();
    if elements.len() != PGHR13_PROOF_ELEMENTS {
        return Err(Error::InvalidNumberOfElements(elements.len()));
    }

    let first: Vec<&str> = elements[0].split(' ').collect();
    if first.len() < 3 {
        return Err(Error::InvalidTokenCount {
            field: "A",
            expected: 3,
            found: first.len(),
        });
    }
    let a = format!("{} {}", first[1], first[2]);

    let b = match g2_element(elements[2], "B") {
        Ok(b) => b,
        Err(err) if options.allow_unparsable_b => {
            warn!(error = %err, "B of the proof is unreadable, leaving it at the identity");
            G2::zero()
        }
        Err(err) => return Err(err),
    };

    let proof = Pghr13Proof {
        a: g1_element(&a, "A")?,
        a_prime: g1_element(elements[1], "A'")?,
        b,
        b_prime: g1_element(elements[3], "B'")?,
        c: g1_element(elements[4], "C")?,
        c_prime: g1_element(elements[5], "C'")?,
        h: g1_element(elements[6], "H")?,
        k: g1_element(elements[7], "K")?,
    };
    debug!("loaded ZoKrates proof");

    Ok(proof)
}

pub fn load_pghr13_proof_from_file<P: AsRef<Path>>(
    path: P,
    options: &ParseOptions,
) -> Result<Pghr13Proof, Error> {
    let content = fs::read_to_string(path)?;
    load_pghr13_proof_from_str(&content, options)
}

/// Converts public inputs to scalars. Values with a `0x` prefix are hexadecimal, all others
/// decimal; both are reduced modulo the group order.
pub fn load_pghr13_witness<S: AsRef<str>>(values: &[S]) -> Result<Vec<Fr>, Error> {
    values
        .iter()
        .map(|value| biguint_to_fr(&decode_scalar(value.as_ref())?))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROOF_FIXTURE: &str = include_str!("../../test_vectors/zokrates_proof.txt");

    // First coordinates of A and of B in the fixture.
    const A_X: &str =
        "18839773341445239563189488732289797158993353317110260460642721992729664830010";
    const B_X_IMAGINARY: &str =
        "17242719865667551033057459215147534747379535250930964514370745079536948707623";

    #[test]
    fn test_load_fixture() {
        let proof = load_pghr13_proof_from_str(PROOF_FIXTURE, &ParseOptions::strict()).unwrap();
        for point in [
            proof.a,
            proof.a_prime,
            proof.b_prime,
            proof.c,
            proof.c_prime,
            proof.h,
            proof.k,
        ] {
            assert!(!point.is_zero());
        }
        assert!(!proof.b.is_zero());
    }

    #[test]
    fn test_load_fixture_from_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/test_vectors/zokrates_proof.txt");
        let from_file = load_pghr13_proof_from_file(path, &ParseOptions::strict()).unwrap();
        let from_str = load_pghr13_proof_from_str(PROOF_FIXTURE, &ParseOptions::strict()).unwrap();
        assert_eq!(from_file, from_str);
    }

    #[test]
    fn test_tabs_and_newlines_are_separators() {
        let tabbed = PROOF_FIXTURE.replace('\n', "\t");
        assert_eq!(
            load_pghr13_proof_from_str(&tabbed, &ParseOptions::strict()).unwrap(),
            load_pghr13_proof_from_str(PROOF_FIXTURE, &ParseOptions::strict()).unwrap()
        );
    }

    #[test]
    fn test_invalid_number_of_elements() {
        let lines: Vec<&str> = PROOF_FIXTURE.lines().collect();

        let short = lines[..4].join("\n");
        let err = load_pghr13_proof_from_str(&short, &ParseOptions::lenient()).unwrap_err();
        assert!(matches!(err, Error::InvalidNumberOfElements(7)));
        assert!(err.is_parse_error());

        let long = format!("{}\n0 1 2\n", PROOF_FIXTURE.trim_end());
        let err = load_pghr13_proof_from_str(&long, &ParseOptions::strict()).unwrap_err();
        assert!(matches!(err, Error::InvalidNumberOfElements(9)));

        let err = load_pghr13_proof_from_str("", &ParseOptions::strict()).unwrap_err();
        assert!(matches!(err, Error::InvalidNumberOfElements(1)));
    }

    #[test]
    fn test_first_element_without_sentinel() {
        let stripped = PROOF_FIXTURE.strip_prefix("0 ").unwrap();
        let err = load_pghr13_proof_from_str(stripped, &ParseOptions::strict()).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidTokenCount { field: "A", expected: 3, found: 2 }
        ));
    }

    #[test]
    fn test_invalid_token_count() {
        let lines: Vec<String> = PROOF_FIXTURE.lines().map(str::to_string).collect();
        let mut padded = lines.clone();
        padded[3].push_str(" 5");

        let err =
            load_pghr13_proof_from_str(&padded.join("\n"), &ParseOptions::lenient()).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidTokenCount { field: "H", expected: 2, found: 3 }
        ));
    }

    #[test]
    fn test_perturbed_coordinate_is_an_encoding_error() {
        let perturbed = PROOF_FIXTURE.replace(
            A_X,
            "18839773341445239563189488732289797158993353317110260460642721992729664830011",
        );
        let err = load_pghr13_proof_from_str(&perturbed, &ParseOptions::strict()).unwrap_err();
        assert!(err.is_invalid_encoding());
    }

    #[test]
    fn test_unparsable_b() {
        let broken = PROOF_FIXTURE.replace(B_X_IMAGINARY, "1");

        let err = load_pghr13_proof_from_str(&broken, &ParseOptions::strict()).unwrap_err();
        assert!(matches!(err, Error::Group(_)));

        let options = ParseOptions {
            allow_unparsable_b: true,
            ..ParseOptions::default()
        };
        let proof = load_pghr13_proof_from_str(&broken, &options).unwrap();
        let expected = load_pghr13_proof_from_str(PROOF_FIXTURE, &options).unwrap();
        assert!(proof.b.is_zero());
        assert_eq!(proof.a, expected.a);
        assert_eq!(proof.b_prime, expected.b_prime);
        assert_eq!(proof.k, expected.k);
    }

    #[test]
    fn test_load_witness() {
        let witness = load_pghr13_witness(&[
            "0",
            "1",
            "0x10",
            "21888242871839275222246405745257275088548364400416034343698204186575808495618",
        ])
        .unwrap();
        assert_eq!(
            witness,
            vec![
                Fr::zero(),
                Fr::one(),
                Fr::from_str("16").unwrap(),
                Fr::one()
            ]
        );

        let owned = vec![String::from("2")];
        assert_eq!(
            load_pghr13_witness(&owned).unwrap(),
            vec![Fr::from_str("2").unwrap()]
        );

        for bad in ["0xg", "", "1.5", " 1"] {
            let err = load_pghr13_witness(&[bad]).unwrap_err();
            assert!(err.is_parse_error());
        }
    }
}
