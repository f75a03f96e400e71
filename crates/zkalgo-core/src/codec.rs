// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Hex strings to validated curve points
//!
//! ZoKrates documents carry coordinates as `0x`-prefixed big-endian hex.
//! Values are reduced into the base field like the toolchain itself does;
//! anything longer than 32 bytes or with non-hex digits is rejected.

use ark_bn254::{Fq, Fq2, Fr, G1Affine, G2Affine};
use ark_ff::PrimeField;

use crate::error::{Error, Result};

const COORD_BYTES: usize = 32;

fn parse_bytes(s: &str) -> Result<Vec<u8>> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    // ZoKrates pads to 64 nibbles, but shorter values still decode
    let owned;
    let digits = if digits.len() % 2 == 1 {
        owned = format!("0{digits}");
        &owned
    } else {
        digits
    };
    let bytes = hex::decode(digits).map_err(|_| Error::Format(s.to_string()))?;
    if bytes.len() > COORD_BYTES {
        return Err(Error::Format(s.to_string()));
    }
    Ok(bytes)
}

/// Decode a big-endian hex string into a base-field element, reduced mod p
pub fn parse_fq(s: &str) -> Result<Fq> {
    Ok(Fq::from_be_bytes_mod_order(&parse_bytes(s)?))
}

/// Decode a big-endian hex string into a scalar, reduced mod r
pub fn parse_fr(s: &str) -> Result<Fr> {
    Ok(Fr::from_be_bytes_mod_order(&parse_bytes(s)?))
}

/// Build an Fq2 element from its (c0, c1) coefficient pair
///
/// No point-level validation happens here; that belongs to [`parse_g2`].
pub fn parse_fq2(c0: &str, c1: &str) -> Result<Fq2> {
    Ok(Fq2::new(parse_fq(c0)?, parse_fq(c1)?))
}

/// Decode and validate a G1 point
pub fn parse_g1(x: &str, y: &str) -> Result<G1Affine> {
    let point = G1Affine::new_unchecked(parse_fq(x)?, parse_fq(y)?);
    if !point.is_on_curve() {
        return Err(Error::NotOnCurve { group: "G1" });
    }
    // G1 has cofactor 1, so on-curve already means in-group
    Ok(point)
}

/// Decode and validate a G2 point on the twisted curve
pub fn parse_g2(x0: &str, x1: &str, y0: &str, y1: &str) -> Result<G2Affine> {
    let point = G2Affine::new_unchecked(parse_fq2(x0, x1)?, parse_fq2(y0, y1)?);
    if !point.is_on_curve() {
        return Err(Error::NotOnCurve { group: "G2" });
    }
    // G2's cofactor is nontrivial; the equation check alone is not enough
    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(Error::NotInSubgroup { group: "G2" });
    }
    Ok(point)
}
