// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Value types for a parsed Groth16 proof and verification key (BN128)

use ark_bn254::{Fr, G1Affine, G2Affine};

/// Groth16 proof plus its public inputs, as read from a ZoKrates proof
/// document. Every point is on-curve by construction.
#[derive(Clone, Debug)]
pub struct Proof {
    pub a: G1Affine,
    pub b: G2Affine,
    pub c: G1Affine,
    /// Public inputs in document order
    pub inputs: Vec<Fr>,
}

/// Groth16 verification key for BN128
///
/// `gamma_abc[0]` is the constant term, `gamma_abc[1..]` are coefficients
/// for public inputs; a key for n public inputs carries n + 1 points.
#[derive(Clone, Debug)]
pub struct VerificationKey {
    pub alpha: G1Affine,
    pub beta: G2Affine,
    pub gamma: G2Affine,
    pub delta: G2Affine,
    pub gamma_abc: Vec<G1Affine>,
}
