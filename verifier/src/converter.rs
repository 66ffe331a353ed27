use bn::{AffineG1, AffineG2, Fq, Fq2, Fr, Group, G1, G2};
use lazy_static::lazy_static;
use num_bigint::BigUint;
use num_traits::Num;

use crate::{
    constants::{FIELD_ELEMENT_LENGTH, G1_POINT_LENGTH, G2_POINT_LENGTH, SCALAR_FIELD_ORDER},
    error::Error,
};

lazy_static! {
    static ref SCALAR_MODULUS: BigUint = BigUint::from_str_radix(SCALAR_FIELD_ORDER, 10)
        .expect("scalar field order is a valid decimal numeral");
}

pub(crate) fn is_zeroed(first_byte: u8, buf: &[u8]) -> bool {
    first_byte == 0 && buf.iter().all(|&b| b == 0)
}

/// Parse a non-negative big integer in base 10 or base 16.
///
/// Base 16 input may carry a `0x` prefix. Signs, separators and empty input are rejected.
pub fn decode_scalar_from_text(s: &str, radix: u32) -> Result<BigUint, Error> {
    let digits = match radix {
        10 => s,
        16 => s.strip_prefix("0x").unwrap_or(s),
        _ => return Err(Error::UnsupportedRadix(radix)),
    };

    let invalid = || Error::InvalidNumeral {
        value: s.to_string(),
        radix,
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(invalid());
    }

    BigUint::from_str_radix(digits, radix).map_err(|_| invalid())
}

/// Parse a witness value, hexadecimal when `0x`-prefixed and decimal otherwise.
pub fn decode_scalar(s: &str) -> Result<BigUint, Error> {
    if s.starts_with("0x") {
        decode_scalar_from_text(s, 16)
    } else {
        decode_scalar_from_text(s, 10)
    }
}

/// Reduce a scalar modulo the BN254 group order.
pub fn biguint_to_fr(value: &BigUint) -> Result<Fr, Error> {
    let reduced = value % &*SCALAR_MODULUS;
    Fr::from_slice(&pad_coordinate(&reduced)?).map_err(Error::Field)
}

/// Left-pad a coordinate to one big-endian field element.
pub(crate) fn pad_coordinate(value: &BigUint) -> Result<[u8; FIELD_ELEMENT_LENGTH], Error> {
    let bytes = value.to_bytes_be();
    if bytes.len() > FIELD_ELEMENT_LENGTH {
        return Err(Error::CoordinateTooLarge(bytes.len()));
    }

    let mut out = [0u8; FIELD_ELEMENT_LENGTH];
    out[FIELD_ELEMENT_LENGTH - bytes.len()..].copy_from_slice(&bytes);
    Ok(out)
}

/// Decode `x || y`. The all-zero buffer is the point at infinity.
pub fn uncompressed_bytes_to_g1_point(buf: &[u8]) -> Result<G1, Error> {
    if buf.len() != G1_POINT_LENGTH {
        return Err(Error::InvalidLength {
            expected: G1_POINT_LENGTH,
            actual: buf.len(),
        });
    }
    if is_zeroed(buf[0], &buf[1..]) {
        return Ok(G1::zero());
    }

    let (x_bytes, y_bytes) = buf.split_at(FIELD_ELEMENT_LENGTH);

    let x = Fq::from_slice(x_bytes).map_err(Error::Field)?;
    let y = Fq::from_slice(y_bytes).map_err(Error::Field)?;
    AffineG1::new(x, y).map(G1::from).map_err(Error::Group)
}

/// Decode `x.imaginary || x.real || y.imaginary || y.real`. The all-zero buffer is the
/// point at infinity.
pub fn uncompressed_bytes_to_g2_point(buf: &[u8]) -> Result<G2, Error> {
    if buf.len() != G2_POINT_LENGTH {
        return Err(Error::InvalidLength {
            expected: G2_POINT_LENGTH,
            actual: buf.len(),
        });
    }
    if is_zeroed(buf[0], &buf[1..]) {
        return Ok(G2::zero());
    }

    let (x_bytes, y_bytes) = buf.split_at(2 * FIELD_ELEMENT_LENGTH);
    let (x1_bytes, x0_bytes) = x_bytes.split_at(FIELD_ELEMENT_LENGTH);
    let (y1_bytes, y0_bytes) = y_bytes.split_at(FIELD_ELEMENT_LENGTH);

    let x1 = Fq::from_slice(x1_bytes).map_err(Error::Field)?;
    let x0 = Fq::from_slice(x0_bytes).map_err(Error::Field)?;
    let y1 = Fq::from_slice(y1_bytes).map_err(Error::Field)?;
    let y0 = Fq::from_slice(y0_bytes).map_err(Error::Field)?;

    let x = Fq2::new(x0, x1);
    let y = Fq2::new(y0, y1);

    AffineG2::new(x, y).map(G2::from).map_err(Error::Group)
}

pub fn g1_point_to_uncompressed_bytes(p: &G1) -> Result<[u8; G1_POINT_LENGTH], Error> {
    let mut buffer = [0u8; G1_POINT_LENGTH];
    if let Some(affine) = AffineG1::from_jacobian(*p) {
        let (x_bytes, y_bytes) = buffer.split_at_mut(FIELD_ELEMENT_LENGTH);
        affine.x().to_big_endian(x_bytes).map_err(Error::Field)?;
        affine.y().to_big_endian(y_bytes).map_err(Error::Field)?;
    }
    Ok(buffer)
}

pub fn g2_point_to_uncompressed_bytes(p: &G2) -> Result<[u8; G2_POINT_LENGTH], Error> {
    let mut buffer = [0u8; G2_POINT_LENGTH];
    if let Some(affine) = AffineG2::from_jacobian(*p) {
        let coordinates = [
            affine.x().imaginary(),
            affine.x().real(),
            affine.y().imaginary(),
            affine.y().real(),
        ];
        for (chunk, coordinate) in buffer.chunks_mut(FIELD_ELEMENT_LENGTH).zip(coordinates) {
            coordinate.to_big_endian(chunk).map_err(Error::Field)?;
        }
    }
    Ok(buffer)
}

pub fn g1_from_coords(x: &BigUint, y: &BigUint) -> Result<G1, Error> {
    let mut buffer = [0u8; G1_POINT_LENGTH];
    buffer[..FIELD_ELEMENT_LENGTH].copy_from_slice(&pad_coordinate(x)?);
    buffer[FIELD_ELEMENT_LENGTH..].copy_from_slice(&pad_coordinate(y)?);
    uncompressed_bytes_to_g1_point(&buffer)
}

/// Each coordinate pair is `[imaginary, real]`, the order ZoKrates and libsnark print them in.
pub fn g2_from_coords(x: &[BigUint; 2], y: &[BigUint; 2]) -> Result<G2, Error> {
    let mut buffer = [0u8; G2_POINT_LENGTH];
    for (chunk, coordinate) in buffer
        .chunks_mut(FIELD_ELEMENT_LENGTH)
        .zip(x.iter().chain(y.iter()))
    {
        chunk.copy_from_slice(&pad_coordinate(coordinate)?);
    }
    uncompressed_bytes_to_g2_point(&buffer)
}

pub fn g1_from_strings(x: &str, y: &str, radix: u32) -> Result<G1, Error> {
    let x = decode_scalar_from_text(x, radix)?;
    let y = decode_scalar_from_text(y, radix)?;
    g1_from_coords(&x, &y)
}

pub fn g2_from_strings(x: [&str; 2], y: [&str; 2], radix: u32) -> Result<G2, Error> {
    let x = [
        decode_scalar_from_text(x[0], radix)?,
        decode_scalar_from_text(x[1], radix)?,
    ];
    let y = [
        decode_scalar_from_text(y[0], radix)?,
        decode_scalar_from_text(y[1], radix)?,
    ];
    g2_from_coords(&x, &y)
}
