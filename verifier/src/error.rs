use bn::{CurveError, FieldError, GroupError};
use thiserror_no_std::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Parse Errors
    #[error("Can not parse {value:?} as a base {radix} number")]
    InvalidNumeral { value: String, radix: u32 },
    #[error("Unsupported radix {0}, only 10 and 16 are supported")]
    UnsupportedRadix(u32),
    #[error("Invalid unsigned integer {value:?} for {field}")]
    InvalidInteger { field: &'static str, value: String },
    #[error("Unexpected end of stream while reading {field}")]
    UnexpectedEof { field: &'static str },
    #[error("Invalid token count for {field}: expected {expected}, found {found}")]
    InvalidTokenCount {
        field: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("Invalid number of elements: {0}")]
    InvalidNumberOfElements(usize),

    // Encoding Errors
    #[error("Invalid encoding format for {field}: unexpected leading byte {found:?}")]
    InvalidSentinel { field: &'static str, found: char },
    #[error("Integer is too large: {0} bytes")]
    CoordinateTooLarge(usize),
    #[error("Invalid length: expected {expected} bytes, found {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Final exponentiation of a zero element")]
    FinalExponentiation,

    // External Library Errors
    #[error("BN254 Field Error: {0:?}")]
    Field(FieldError),
    #[error("BN254 Group Error: {0:?}")]
    Group(GroupError),
    #[error("BN254 Curve Error: {0:?}")]
    Curve(CurveError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Malformed numerals, token counts and truncated input.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidNumeral { .. }
                | Error::UnsupportedRadix(_)
                | Error::InvalidInteger { .. }
                | Error::UnexpectedEof { .. }
                | Error::InvalidTokenCount { .. }
                | Error::InvalidNumberOfElements(_)
        )
    }

    /// Well-formed text that does not describe a valid group element.
    pub fn is_invalid_encoding(&self) -> bool {
        matches!(
            self,
            Error::InvalidSentinel { .. }
                | Error::CoordinateTooLarge(_)
                | Error::InvalidLength { .. }
                | Error::Field(_)
                | Error::Group(_)
                | Error::Curve(_)
        )
    }
}
