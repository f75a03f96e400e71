// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Canonical byte encoding for AVM pairing opcode arguments
//!
//! Curve points are fixed-width: every base-field coordinate is 32
//! big-endian bytes. Public inputs are the opposite: at most 16 big-endian
//! bytes with all leading zeros stripped, so zero encodes as the empty
//! string. The on-chain decoder expects both conventions exactly as-is;
//! neither may be widened, trimmed, or otherwise normalized.

use ark_bn254::{Fq, Fr, G1Affine, G2Affine};
use ark_ff::{BigInteger, PrimeField};

use crate::error::{Error, Result};

const INPUT_BYTES: usize = 16;

fn push_fq(out: &mut Vec<u8>, f: &Fq) {
    out.extend_from_slice(&f.into_bigint().to_bytes_be());
}

/// Encode G1 points as x ++ y, 32 bytes each, concatenated in input order
pub fn g1_bytes(points: &[G1Affine]) -> Vec<u8> {
    let mut out = Vec::with_capacity(points.len() * 64);
    for p in points {
        push_fq(&mut out, &p.x);
        push_fq(&mut out, &p.y);
    }
    out
}

/// Encode G2 points as x.c0 ++ x.c1 ++ y.c0 ++ y.c1, 32 bytes each
///
/// The coefficient order is fixed by the verifying contract's slicing.
pub fn g2_bytes(points: &[G2Affine]) -> Vec<u8> {
    let mut out = Vec::with_capacity(points.len() * 128);
    for p in points {
        push_fq(&mut out, &p.x.c0);
        push_fq(&mut out, &p.x.c1);
        push_fq(&mut out, &p.y.c0);
        push_fq(&mut out, &p.y.c1);
    }
    out
}

/// Encode a public input as trimmed big-endian bytes, at most 16
pub fn input_bytes(input: &Fr) -> Result<Vec<u8>> {
    let be = input.into_bigint().to_bytes_be();
    let (high, low) = be.split_at(be.len() - INPUT_BYTES);
    if high.iter().any(|&b| b != 0) {
        return Err(Error::InputTooLarge);
    }
    let first = low.iter().position(|&b| b != 0).unwrap_or(low.len());
    Ok(low[first..].to_vec())
}

/// Hex form of [`g1_bytes`]
pub fn g1_hex(points: &[G1Affine]) -> String {
    hex::encode(g1_bytes(points))
}

/// Hex form of [`g2_bytes`]
pub fn g2_hex(points: &[G2Affine]) -> String {
    hex::encode(g2_bytes(points))
}
