/// Width of one big-endian base field element in every encoding this crate reads.
pub(crate) const FIELD_ELEMENT_LENGTH: usize = 32;

/// Uncompressed G1 point: `x || y`.
pub(crate) const G1_POINT_LENGTH: usize = 2 * FIELD_ELEMENT_LENGTH;

/// Uncompressed G2 point: `x.imaginary || x.real || y.imaginary || y.real`.
pub(crate) const G2_POINT_LENGTH: usize = 4 * FIELD_ELEMENT_LENGTH;

/// Order of the BN254 scalar field.
pub(crate) const SCALAR_FIELD_ORDER: &str =
    "21888242871839275222246405745257275088548364400416034343698204186575808495617";

/// Affine coordinates of the G1 generator.
pub(crate) const G1_GENERATOR_X: &str = "1";
pub(crate) const G1_GENERATOR_Y: &str = "2";

/// Affine coordinates of the G2 generator, imaginary part first.
pub(crate) const G2_GENERATOR_X: [&str; 2] = [
    "11559732032986387107991004021392285783925812861821192530917403151452391805634",
    "10857046999023057135944570762232829481370756359578518086990519993285655852781",
];
pub(crate) const G2_GENERATOR_Y: [&str; 2] = [
    "4082367875863433681332203403145435568316851327593401208105741076214120093531",
    "8495653923123431417604973247489272438418190587263600148770280649306958101930",
];

/// ZoKrates writes every point with a leading `0` (finite point) marker; the
/// proof parser splits on it.
pub(crate) const ZOKRATES_ELEMENT_DELIMITER: &str = " 0 ";

/// A, A', B, B', C, C', H, K.
pub(crate) const PGHR13_PROOF_ELEMENTS: usize = 8;

/// Leading characters of a libsnark point record.
pub(crate) const LIBSNARK_FINITE_POINT: u8 = b'0';
pub(crate) const LIBSNARK_POINT_AT_INFINITY: u8 = b'1';

/// Number of pairing equations in a PGHR13 verification.
pub(crate) const PGHR13_EQUATIONS: usize = 5;
