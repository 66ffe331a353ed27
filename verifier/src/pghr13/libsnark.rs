//! Reader for verifying keys in the libsnark text serialization.
//!
//! The format is positional: scalars are decimal ASCII separated by single spaces and records
//! end with `\n`. Every point starts with a sentinel byte, `0` for a finite point followed by
//! its coordinates and `1` for the point at infinity with nothing after it.
//!
//! The readers below work on any [`BufRead`] and look ahead through `fill_buf`, so no byte
//! is taken from the stream unless it belongs to the field being read.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use bn::{Group, G1, G2};
use tracing::{debug, trace, warn};

use crate::{
    config::ParseOptions,
    constants::{LIBSNARK_FINITE_POINT, LIBSNARK_POINT_AT_INFINITY},
    converter::{g1_from_strings, g2_from_strings},
    error::Error,
};

use super::verify::Pghr13VerifyingKey;

fn peek<R: BufRead>(reader: &mut R) -> Result<Option<u8>, Error> {
    Ok(reader.fill_buf()?.first().copied())
}

/// Skips a run of ASCII spaces. Tabs and newlines are left in place.
pub fn skip_spaces<R: BufRead>(reader: &mut R) -> Result<(), Error> {
    while peek(reader)? == Some(b' ') {
        reader.consume(1);
    }
    Ok(())
}

/// Consumes a single `\n` if it is the next byte.
pub fn consume_newline<R: BufRead>(reader: &mut R) -> Result<(), Error> {
    if peek(reader)? == Some(b'\n') {
        reader.consume(1);
    }
    Ok(())
}

// Everything up to the next space, newline or the end of the stream.
fn read_token<R: BufRead>(reader: &mut R) -> Result<String, Error> {
    let mut token = String::new();
    while let Some(byte) = peek(reader)? {
        if byte == b' ' || byte == b'\n' {
            break;
        }
        token.push(char::from(byte));
        reader.consume(1);
    }
    Ok(token)
}

pub fn read_u64<R: BufRead>(reader: &mut R, field: &'static str) -> Result<u64, Error> {
    let token = read_token(reader)?;
    token
        .parse::<u64>()
        .map_err(|_| Error::InvalidInteger {
            field,
            value: token,
        })
}

/// Reads a decimal integer too wide for a machine word, returning its digits unparsed.
pub fn read_big_int_text<R: BufRead>(reader: &mut R) -> Result<String, Error> {
    read_token(reader)
}

// Returns whether the point is finite. The sentinel byte is only consumed when it is valid.
fn read_sentinel<R: BufRead>(reader: &mut R, field: &'static str) -> Result<bool, Error> {
    match peek(reader)? {
        None => Err(Error::UnexpectedEof { field }),
        Some(LIBSNARK_FINITE_POINT) => {
            reader.consume(1);
            Ok(true)
        }
        Some(LIBSNARK_POINT_AT_INFINITY) => {
            reader.consume(1);
            Ok(false)
        }
        Some(found) => Err(Error::InvalidSentinel {
            field,
            found: char::from(found),
        }),
    }
}

fn read_coordinate<R: BufRead>(reader: &mut R) -> Result<String, Error> {
    skip_spaces(reader)?;
    read_big_int_text(reader)
}

pub fn read_g1<R: BufRead>(reader: &mut R, field: &'static str) -> Result<G1, Error> {
    if !read_sentinel(reader, field)? {
        return Ok(G1::zero());
    }

    let x = read_coordinate(reader)?;
    let y = read_coordinate(reader)?;
    consume_newline(reader)?;
    trace!(field, %x, %y, "read G1 point");

    g1_from_strings(&x, &y, 10)
}

/// Reads a G2 point written as `x.imaginary x.real y.imaginary y.real`.
pub fn read_g2<R: BufRead>(reader: &mut R, field: &'static str) -> Result<G2, Error> {
    if !read_sentinel(reader, field)? {
        return Ok(G2::zero());
    }

    let x1 = read_coordinate(reader)?;
    let x0 = read_coordinate(reader)?;
    let y1 = read_coordinate(reader)?;
    let y0 = read_coordinate(reader)?;
    consume_newline(reader)?;
    trace!(field, %x1, %x0, %y1, %y0, "read G2 point");

    g2_from_strings([x1.as_str(), x0.as_str()], [y1.as_str(), y0.as_str()], 10)
}

/// libsnark's sparse vector of G1 points, as used for the IC of a verifying key.
///
/// On disk it is the constant term, the domain size, the list of indices that are set and
/// then one point per index. Verification only needs the points in order, so the domain size
/// and the indices are read and dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SparseVector {
    pub first: G1,
    pub rest: Vec<G1>,
}

impl SparseVector {
    pub fn parse_from_reader<R: BufRead>(reader: &mut R) -> Result<Self, Error> {
        let first = read_g1(reader, "ic[0]")?;
        consume_newline(reader)?;

        let domain_size = read_u64(reader, "ic domain size")?;
        consume_newline(reader)?;

        let num_indices = read_u64(reader, "ic index count")?;
        consume_newline(reader)?;
        for _ in 0..num_indices {
            read_u64(reader, "ic index")?;
            consume_newline(reader)?;
        }

        let num_values = read_u64(reader, "ic value count")?;
        consume_newline(reader)?;
        debug!(domain_size, num_indices, num_values, "reading IC sparse vector");

        // The count comes from the input, so the vector grows with what is actually read.
        let mut rest = Vec::new();
        for _ in 0..num_values {
            rest.push(read_g1(reader, "ic")?);
            consume_newline(reader)?;
        }

        Ok(Self { first, rest })
    }

    /// `[first] ++ rest`.
    pub fn into_points(self) -> Vec<G1> {
        let mut points = Vec::with_capacity(self.rest.len() + 1);
        points.push(self.first);
        points.extend(self.rest);
        points
    }
}

/// Reads A, B, C, gamma, gammaBeta1, gammaBeta2, Z and the IC sparse vector, in that order.
///
/// With [`ParseOptions::allow_truncated_ic`] a failure while reading the IC is logged and the
/// key is returned with an empty IC. Such a key rejects every witness.
pub fn load_pghr13_verifying_key_from_reader<R: BufRead>(
    mut reader: R,
    options: &ParseOptions,
) -> Result<Pghr13VerifyingKey, Error> {
    let reader = &mut reader;

    let a = read_g2(reader, "vk.A")?;
    consume_newline(reader)?;
    let b = read_g1(reader, "vk.B")?;
    consume_newline(reader)?;
    let c = read_g2(reader, "vk.C")?;
    consume_newline(reader)?;
    let gamma = read_g2(reader, "vk.gamma")?;
    consume_newline(reader)?;
    let gamma_beta_1 = read_g1(reader, "vk.gammaBeta1")?;
    consume_newline(reader)?;
    let gamma_beta_2 = read_g2(reader, "vk.gammaBeta2")?;
    consume_newline(reader)?;
    let z = read_g2(reader, "vk.Z")?;
    consume_newline(reader)?;

    let ic = match SparseVector::parse_from_reader(reader) {
        Ok(ic) => ic.into_points(),
        Err(err) if options.allow_truncated_ic => {
            warn!(error = %err, "IC of the verifying key is unreadable, continuing without it");
            Vec::new()
        }
        Err(err) => return Err(err),
    };
    debug!(ic = ic.len(), "loaded libsnark verifying key");

    Ok(Pghr13VerifyingKey {
        a,
        b,
        c,
        gamma,
        gamma_beta_1,
        gamma_beta_2,
        z,
        ic,
    })
}

pub fn load_pghr13_verifying_key_from_file<P: AsRef<Path>>(
    path: P,
    options: &ParseOptions,
) -> Result<Pghr13VerifyingKey, Error> {
    let file = File::open(path)?;
    load_pghr13_verifying_key_from_reader(BufReader::new(file), options)
}
