// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # zkalgo-core
//!
//! Converts ZoKrates Groth16 proofs and verification keys (BN128) into the
//! argument and constant layout consumed by an Algorand AVM pairing-check
//! verifier, and re-evaluates the pairing equation off-chain so a proof can
//! be checked before anything goes on-chain.
//!
//! | Module | Purpose |
//! |---|---|
//! | [`zokrates`] | ZoKrates JSON document parsing |
//! | [`codec`] | Hex strings to validated curve points |
//! | [`encode`] | Canonical byte encoding of points and public inputs |
//! | [`verifier`] | Off-chain pairing check with diagnostics |
//! | [`pyteal`] | Contract source fragments and call arguments |

pub mod codec;
pub mod encode;
mod error;
pub mod pyteal;
mod types;
pub mod verifier;
pub mod zokrates;

pub use error::{Error, Result};
pub use types::{Proof, VerificationKey};
pub use verifier::Report;
