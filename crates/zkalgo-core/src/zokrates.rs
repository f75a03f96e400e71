// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! ZoKrates JSON document parsing
//!
//! Two documents feed the converter, in the shapes `zokrates` writes them:
//!
//! ```json
//! { "proof": { "a": [x, y], "b": [[x0, x1], [y0, y1]], "c": [x, y] },
//!   "inputs": ["0x…", "…"] }
//! ```
//!
//! ```json
//! { "alpha": [x, y], "beta": [[…]], "gamma": [[…]], "delta": [[…]],
//!   "gamma_abc": [[x, y], …] }
//! ```
//!
//! Fq2 coordinate pairs are stored (c0, c1), matching the encoder's order.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::codec::{parse_fr, parse_g1, parse_g2};
use crate::error::{Error, Result};
use crate::types::{Proof, VerificationKey};

#[derive(Deserialize)]
struct ProofDocument {
    proof: ProofPoints,
    inputs: Vec<String>,
}

#[derive(Deserialize)]
struct ProofPoints {
    a: [String; 2],
    b: [[String; 2]; 2],
    c: [String; 2],
}

#[derive(Deserialize)]
struct KeyDocument {
    alpha: [String; 2],
    beta: [[String; 2]; 2],
    gamma: [[String; 2]; 2],
    delta: [[String; 2]; 2],
    gamma_abc: Vec<[String; 2]>,
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Document {
        path: path.display().to_string(),
        source,
    })
}

fn g2_of(p: &[[String; 2]; 2]) -> Result<ark_bn254::G2Affine> {
    parse_g2(&p[0][0], &p[0][1], &p[1][0], &p[1][1])
}

/// Parse a proof document from its JSON text
pub fn proof_from_str(json: &str) -> Result<Proof> {
    let doc: ProofDocument = serde_json::from_str(json)?;
    Ok(Proof {
        a: parse_g1(&doc.proof.a[0], &doc.proof.a[1])?,
        b: g2_of(&doc.proof.b)?,
        c: parse_g1(&doc.proof.c[0], &doc.proof.c[1])?,
        inputs: doc
            .inputs
            .iter()
            .map(|s| parse_fr(s))
            .collect::<Result<_>>()?,
    })
}

/// Parse a verification key document from its JSON text
pub fn key_from_str(json: &str) -> Result<VerificationKey> {
    let doc: KeyDocument = serde_json::from_str(json)?;
    Ok(VerificationKey {
        alpha: parse_g1(&doc.alpha[0], &doc.alpha[1])?,
        beta: g2_of(&doc.beta)?,
        gamma: g2_of(&doc.gamma)?,
        delta: g2_of(&doc.delta)?,
        gamma_abc: doc
            .gamma_abc
            .iter()
            .map(|p| parse_g1(&p[0], &p[1]))
            .collect::<Result<_>>()?,
    })
}

/// Read and parse a ZoKrates proof document
pub fn load_proof(path: impl AsRef<Path>) -> Result<Proof> {
    proof_from_str(&read(path.as_ref())?)
}

/// Read and parse a ZoKrates verification key document
pub fn load_verification_key(path: impl AsRef<Path>) -> Result<VerificationKey> {
    key_from_str(&read(path.as_ref())?)
}
