// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! PyTeal source fragments and call arguments for the AVM verifier
//!
//! The argument layout is a wire contract shared with the deployed
//! verifier: positions 0/1/2 carry C, B, A and positions 3.. carry the
//! public inputs. Both the generated contract fragments and the call
//! argument list follow it.

use crate::encode::{g1_bytes, g1_hex, g2_bytes, g2_hex, input_bytes};
use crate::error::Result;
use crate::types::{Proof, VerificationKey};

/// Encoded call arguments: [A, B, C, input_0, .., input_n-1]
pub fn proof_args(proof: &Proof) -> Result<Vec<Vec<u8>>> {
    let mut args = vec![
        g1_bytes(&[proof.a]),
        g2_bytes(&[proof.b]),
        g1_bytes(&[proof.c]),
    ];
    for input in &proof.inputs {
        args.push(input_bytes(input)?);
    }
    Ok(args)
}

/// Render call arguments as the client-side snippet, one line per argument
pub fn call_snippet(args: &[Vec<u8>]) -> String {
    let mut out = String::new();
    for arg in args {
        out.push_str(&format!(
            "      args.append(binascii.unhexlify(\"{}\"))\n",
            hex::encode(arg)
        ));
    }
    out
}

/// Render the contract-side constants, the vk_x accumulation, and the
/// final pairing-check expression
pub fn contract_fragments(key: &VerificationKey) -> String {
    let mut out = String::new();

    // negation happens before encoding so the contract stores -gamma,
    // -delta, -beta ready for the pairing call
    let neg_g2 = [-key.gamma, -key.delta, -key.beta];
    out.push_str(&format!(
        "  g2elems = Bytes(\"base16\",\"0x{}\")\n",
        g2_hex(&neg_g2)
    ));
    out.push_str(&format!(
        "  g1elems = Bytes(\"base16\",\"0x{}\")\n",
        g1_hex(&[key.alpha])
    ));
    for (i, point) in key.gamma_abc.iter().enumerate() {
        out.push_str(&format!(
            "  gammaabc_{i} = Bytes(\"base16\",\"0x{}\")\n",
            g1_hex(&[*point])
        ));
    }

    out.push_str("  vkx = gammaabc_0\n");
    for i in 0..key.gamma_abc.len().saturating_sub(1) {
        out.push_str(&format!(
            "  x = B256ScalarMul(gammaabc_{}, Arg({}))\n",
            i + 1,
            i + 3
        ));
        out.push_str("  vkx = B256Add(vkx, x)\n");
    }

    out.push_str("  g2 = Concat(Arg(1), g2elems)\n");
    out.push_str("  g1 = Concat(Arg(0), vkx, Arg(2), g1elems)\n");
    out.push_str("  return B256Pairing(g2, g1) == Int(1)\n");
    out
}
