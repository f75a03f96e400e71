// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! End-to-end test: generate a genuine Groth16 proof, push it through the
//! ZoKrates document layer, and confirm the off-chain pairing check agrees
//! with ark-groth16's own verdict.
//! Circuit: y = x² + 5, public input y = 14, private witness x = 3

use ark_bn254::{Bn254, Fq, Fr, G1Affine, G2Affine};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{BigInteger, PrimeField};
use ark_groth16::Groth16;
use ark_relations::{
    lc,
    r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError, Variable},
};
use ark_snark::SNARK;
use ark_std::rand::{rngs::StdRng, SeedableRng};

use zkalgo_core::{pyteal, verifier, zokrates, Proof, VerificationKey};

#[derive(Clone)]
struct DummyCircuit {
    /// Private witness
    x: Option<Fr>,
    /// Public input
    y: Fr,
}

impl ConstraintSynthesizer<Fr> for DummyCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        let y_var = cs.new_input_variable(|| Ok(self.y))?;
        let x_var = cs.new_witness_variable(|| self.x.ok_or(SynthesisError::AssignmentMissing))?;
        let x_squared_var = cs.new_witness_variable(|| {
            let x = self.x.ok_or(SynthesisError::AssignmentMissing)?;
            Ok(x * x)
        })?;

        // x_squared = x * x
        cs.enforce_constraint(lc!() + x_var, lc!() + x_var, lc!() + x_squared_var)?;

        // y = x_squared + 5
        let five = Fr::from(5u64);
        cs.enforce_constraint(
            lc!() + x_squared_var + (five, Variable::One),
            lc!() + Variable::One,
            lc!() + y_var,
        )?;

        Ok(())
    }
}

struct TestVectors {
    key: VerificationKey,
    proof: Proof,
    ark_vk: ark_groth16::VerifyingKey<Bn254>,
    ark_proof: ark_groth16::Proof<Bn254>,
}

fn generate() -> TestVectors {
    let mut rng = StdRng::seed_from_u64(123);
    let y = Fr::from(14u64);

    let setup_circuit = DummyCircuit { x: None, y };
    let (pk, vk) =
        Groth16::<Bn254>::circuit_specific_setup(setup_circuit, &mut rng).expect("setup failed");

    let prove_circuit = DummyCircuit {
        x: Some(Fr::from(3u64)),
        y,
    };
    let ark_proof = Groth16::<Bn254>::prove(&pk, prove_circuit, &mut rng).expect("proving failed");

    let key = VerificationKey {
        alpha: vk.alpha_g1,
        beta: vk.beta_g2,
        gamma: vk.gamma_g2,
        delta: vk.delta_g2,
        gamma_abc: vk.gamma_abc_g1.clone(),
    };
    let proof = Proof {
        a: ark_proof.a,
        b: ark_proof.b,
        c: ark_proof.c,
        inputs: vec![y],
    };

    TestVectors {
        key,
        proof,
        ark_vk: vk,
        ark_proof,
    }
}

fn fq_hex(f: &Fq) -> String {
    format!("0x{}", hex::encode(f.into_bigint().to_bytes_be()))
}

fn g1_doc(p: &G1Affine) -> serde_json::Value {
    serde_json::json!([fq_hex(&p.x), fq_hex(&p.y)])
}

fn g2_doc(p: &G2Affine) -> serde_json::Value {
    serde_json::json!([
        [fq_hex(&p.x.c0), fq_hex(&p.x.c1)],
        [fq_hex(&p.y.c0), fq_hex(&p.y.c1)],
    ])
}

fn proof_document(proof: &Proof) -> String {
    let inputs: Vec<String> = proof
        .inputs
        .iter()
        .map(|i| format!("0x{}", hex::encode(i.into_bigint().to_bytes_be())))
        .collect();
    serde_json::json!({
        "proof": {
            "a": g1_doc(&proof.a),
            "b": g2_doc(&proof.b),
            "c": g1_doc(&proof.c),
        },
        "inputs": inputs,
    })
    .to_string()
}

fn key_document(key: &VerificationKey) -> String {
    let gamma_abc: Vec<serde_json::Value> = key.gamma_abc.iter().map(g1_doc).collect();
    serde_json::json!({
        "alpha": g1_doc(&key.alpha),
        "beta": g2_doc(&key.beta),
        "gamma": g2_doc(&key.gamma),
        "delta": g2_doc(&key.delta),
        "gamma_abc": gamma_abc,
    })
    .to_string()
}

#[test]
fn genuine_proof_verifies() {
    let v = generate();
    let report = verifier::check(&v.key, &v.proof).unwrap();
    assert!(report.verified);

    // same verdict as ark-groth16's own verifier
    let ark_ok =
        Groth16::<Bn254>::verify(&v.ark_vk, &[Fr::from(14u64)], &v.ark_proof).unwrap();
    assert!(ark_ok);
}

#[test]
fn tampered_c_mismatches_without_error() {
    let v = generate();
    let mut proof = v.proof.clone();
    // still on-curve, so the codec would accept it; only the pairing fails
    proof.c = (proof.c.into_group() + G1Affine::generator()).into_affine();

    let report = verifier::check(&v.key, &proof).unwrap();
    assert!(!report.verified);
}

#[test]
fn wrong_public_input_mismatches() {
    let v = generate();
    let mut proof = v.proof.clone();
    proof.inputs = vec![Fr::from(15u64)];

    let report = verifier::check(&v.key, &proof).unwrap();
    assert!(!report.verified);
}

#[test]
fn dropped_input_is_rejected_before_pairing() {
    let v = generate();
    let mut proof = v.proof.clone();
    proof.inputs.clear();

    assert!(matches!(
        verifier::check(&v.key, &proof),
        Err(zkalgo_core::Error::InputCountMismatch { .. })
    ));
}

#[test]
fn documents_round_trip_through_the_codec() {
    let v = generate();
    let dir = tempfile::tempdir().unwrap();
    let proof_path = dir.path().join("proof.json");
    let key_path = dir.path().join("verification.key");
    std::fs::write(&proof_path, proof_document(&v.proof)).unwrap();
    std::fs::write(&key_path, key_document(&v.key)).unwrap();

    let proof = zokrates::load_proof(&proof_path).unwrap();
    let key = zokrates::load_verification_key(&key_path).unwrap();
    assert_eq!(proof.a, v.proof.a);
    assert_eq!(key.gamma_abc, v.key.gamma_abc);

    let report = verifier::check(&key, &proof).unwrap();
    assert!(report.verified);
}

#[test]
fn encoded_point_round_trips() {
    let v = generate();
    let encoded = zkalgo_core::encode::g1_hex(&[v.proof.a]);
    let decoded =
        zkalgo_core::codec::parse_g1(&encoded[..64], &encoded[64..]).unwrap();
    assert_eq!(zkalgo_core::encode::g1_hex(&[decoded]), encoded);
}

#[test]
fn report_hex_matches_the_encoder() {
    let v = generate();
    let report = verifier::check(&v.key, &v.proof).unwrap();

    let vkx = verifier::vk_x(&v.key, &v.proof.inputs).unwrap();
    assert_eq!(report.vkx_hex, zkalgo_core::encode::g1_hex(&[vkx]));
    assert_eq!(report.g1_hex.len(), 4 * 128);
    assert_eq!(report.g2_hex.len(), 4 * 256);
    assert!(report.g1_hex.starts_with(&zkalgo_core::encode::g1_hex(&[v.proof.a])));
}

#[test]
fn artifacts_cover_the_whole_key_and_proof() {
    let v = generate();

    let args = pyteal::proof_args(&v.proof).unwrap();
    assert_eq!(args.len(), 3 + v.proof.inputs.len());
    assert_eq!(args[3], vec![0x0e]); // y = 14, trimmed

    let fragments = pyteal::contract_fragments(&v.key);
    // one constant per gamma_abc entry, one accumulation step per input
    assert_eq!(
        fragments.matches("= Bytes(\"base16\"").count(),
        2 + v.key.gamma_abc.len()
    );
    assert_eq!(
        fragments.matches("B256ScalarMul").count(),
        v.key.gamma_abc.len() - 1
    );
}
