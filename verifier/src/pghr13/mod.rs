mod converter;
mod error;
mod libsnark;
mod proof;
mod verify;

pub use converter::{load_pghr13_proof_from_file, load_pghr13_proof_from_str, load_pghr13_witness};
pub use error::Pghr13Error;
pub use libsnark::{
    consume_newline, load_pghr13_verifying_key_from_file, load_pghr13_verifying_key_from_reader,
    read_big_int_text, read_g1, read_g2, read_u64, skip_spaces, SparseVector,
};
pub use proof::Pghr13Proof;
pub use verify::{
    verify_pghr13, verify_pghr13_aggregated, verify_pghr13_aggregated_with,
    verify_pghr13_aggregated_with_rng, verify_pghr13_direct, verify_pghr13_direct_with,
    Pghr13VerifyingKey,
};

use std::path::Path;

use bn::Fr;

use crate::{config::VerifierConfig, error::Error};

/// A verifier for PGHR13 proofs given as a libsnark verifying key and a ZoKrates proof.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pghr13Verifier {
    config: VerifierConfig,
}

impl Pghr13Verifier {
    pub fn new(config: VerifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    pub fn load_verifying_key<P: AsRef<Path>>(&self, path: P) -> Result<Pghr13VerifyingKey, Error> {
        load_pghr13_verifying_key_from_file(path, &self.config.parse)
    }

    pub fn load_proof<P: AsRef<Path>>(&self, path: P) -> Result<Pghr13Proof, Error> {
        load_pghr13_proof_from_file(path, &self.config.parse)
    }

    /// Verifies a PGHR13 proof.
    ///
    /// # Arguments
    ///
    /// * `vk` - The verifying key.
    /// * `proof` - The proof.
    /// * `witness` - The public inputs, one per IC point after the first.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the proof is valid for the witness. Which pairing check runs is decided by
    /// the configured [`crate::VerificationMode`].
    pub fn verify(
        &self,
        vk: &Pghr13VerifyingKey,
        proof: &Pghr13Proof,
        witness: &[Fr],
    ) -> Result<(), Pghr13Error> {
        verify_pghr13(vk, proof, witness, self.config.mode)
    }

    /// Loads the key, the proof and the witness, then verifies.
    pub fn verify_files<P: AsRef<Path>, Q: AsRef<Path>, S: AsRef<str>>(
        &self,
        vk_path: P,
        proof_path: Q,
        witness: &[S],
    ) -> Result<(), Pghr13Error> {
        let vk = self.load_verifying_key(vk_path)?;
        let proof = self.load_proof(proof_path)?;
        let witness = load_pghr13_witness(witness)?;

        self.verify(&vk, &proof, &witness)
    }
}
