//! This crate verifies PGHR13 (Pinocchio) proofs over the BN254 curve.
//! Verifying keys are read from the libsnark text serialization and proofs from the text
//! ZoKrates prints.
//!
//! ```no_run
//! use pghr13_bn254_verifier::{Pghr13Verifier, VerifierConfig};
//!
//! let verifier = Pghr13Verifier::new(VerifierConfig::default());
//! verifier
//!     .verify_files("vk.txt", "proof.txt", &["1", "0x2"])
//!     .expect("proof is invalid");
//! ```

mod constants;
mod error;

pub mod config;
pub mod converter;
pub mod pairing;

pub use config::{ParseOptions, VerificationMode, VerifierConfig};
pub use error::Error;
pub use pairing::{add_g1, mul_g1, Bn254Pairing, PairingEngine};

pub use pghr13::*;
mod pghr13;
