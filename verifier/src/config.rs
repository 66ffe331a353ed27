use serde::{Deserialize, Serialize};

/// Which pairing strategy decides a proof.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationMode {
    /// Five pairing checks; a failure names the equation that did not hold.
    #[default]
    Direct,
    /// One final exponentiation over a random linear combination of the five equations.
    /// Sound up to a negligible probability and reports no equation index.
    Aggregated,
}

/// Opt-in tolerances of the legacy readers. Both are off by default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Accept a libsnark verifying key whose IC vector fails to parse, returning it with an
    /// empty IC.
    pub allow_truncated_ic: bool,
    /// Accept a ZoKrates proof whose B element fails to parse, leaving B at the identity.
    pub allow_unparsable_b: bool,
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self::default()
    }

    /// Both legacy tolerances enabled.
    pub fn lenient() -> Self {
        Self {
            allow_truncated_ic: true,
            allow_unparsable_b: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    pub mode: VerificationMode,
    pub parse: ParseOptions,
}
