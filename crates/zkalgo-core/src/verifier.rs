// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Off-chain Groth16 pairing check mirroring the on-chain verifier
//!
//! Algorithm:
//! 1. Compute vk_x = gamma_abc[0] + MSM(gamma_abc[1..], inputs)
//! 2. Check: e(A,B) * e(vk_x,-gamma) * e(C,-delta) * e(alpha,-beta) == 1

use ark_bn254::{Bn254, Fr, G1Affine, G1Projective};
use ark_ec::{pairing::Pairing, CurveGroup, VariableBaseMSM};
use ark_ff::One;

use crate::encode::{g1_hex, g2_hex};
use crate::error::{Error, Result};
use crate::types::{Proof, VerificationKey};

/// Outcome of a pairing check
///
/// The hex fields are the exact byte constants the contract computes on its
/// side, so a mismatch can be chased down argument by argument.
#[derive(Clone, Debug)]
pub struct Report {
    /// Encoded vk_x, the public-input commitment term
    pub vkx_hex: String,
    /// Encoded A ++ vk_x ++ C ++ alpha
    pub g1_hex: String,
    /// Encoded B ++ -gamma ++ -delta ++ -beta
    pub g2_hex: String,
    /// Whether the pairing product equals the target-field identity
    pub verified: bool,
}

fn check_input_count(key: &VerificationKey, inputs: usize) -> Result<()> {
    if key.gamma_abc.len() != inputs + 1 {
        return Err(Error::InputCountMismatch {
            points: key.gamma_abc.len(),
            inputs,
        });
    }
    Ok(())
}

/// Compute vk_x = gamma_abc[0] + sum of inputs[i] * gamma_abc[i + 1]
pub fn vk_x(key: &VerificationKey, inputs: &[Fr]) -> Result<G1Affine> {
    check_input_count(key, inputs.len())?;
    let constant = key.gamma_abc[0];
    if inputs.is_empty() {
        return Ok(constant);
    }
    let sum = G1Projective::msm(&key.gamma_abc[1..], inputs).map_err(|_| {
        Error::InputCountMismatch {
            points: key.gamma_abc.len(),
            inputs: inputs.len(),
        }
    })?;
    Ok((sum + constant).into_affine())
}

/// Evaluate the verification equation and report the result
///
/// A failed equation is a normal outcome and comes back as
/// `Report { verified: false, .. }`, never as an error; by the time this
/// runs every point has already passed the codec's curve checks.
pub fn check(key: &VerificationKey, proof: &Proof) -> Result<Report> {
    let vkx = vk_x(key, &proof.inputs)?;

    let g1_side = [proof.a, vkx, proof.c, key.alpha];
    let g2_side = [proof.b, -key.gamma, -key.delta, -key.beta];

    let product = Bn254::multi_pairing(g1_side, g2_side);

    Ok(Report {
        vkx_hex: g1_hex(&[vkx]),
        g1_hex: g1_hex(&g1_side),
        g2_hex: g2_hex(&g2_side),
        verified: product.0.is_one(),
    })
}
