use bn::{G1, G2};

/// A PGHR13 proof. Where the verifying key holds a G2 element the proof holds a G1 element
/// under the same letter, and the other way around for B.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pghr13Proof {
    pub a: G1,
    pub a_prime: G1,
    pub b: G2,
    pub b_prime: G1,
    pub c: G1,
    pub c_prime: G1,
    pub h: G1,
    pub k: G1,
}
