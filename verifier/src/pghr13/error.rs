use thiserror_no_std::Error;

#[derive(Debug, Error)]
pub enum Pghr13Error {
    #[error("Invalid length of the witness: {witness} inputs for {ic} IC points")]
    InvalidWitnessLength { witness: usize, ic: usize },
    #[error("Pairing equation {0} has failed")]
    EquationFailed(usize),
    #[error("Pairing check has failed")]
    AggregatedCheckFailed,
    #[error("General error: {0}")]
    GeneralError(#[from] crate::error::Error),
}

impl Pghr13Error {
    /// The proof was decoded but the pairing equations did not hold.
    pub fn is_verification_failure(&self) -> bool {
        matches!(
            self,
            Pghr13Error::EquationFailed(_) | Pghr13Error::AggregatedCheckFailed
        )
    }
}
