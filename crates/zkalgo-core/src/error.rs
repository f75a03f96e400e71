// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Typed errors for document parsing, point decoding, and argument encoding.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read {path}")]
    Document {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON document")]
    Parse(#[from] serde_json::Error),

    #[error("invalid hex string {0:?}")]
    Format(String),

    #[error("{group} point is not on the curve")]
    NotOnCurve { group: &'static str },

    #[error("{group} point is not in the prime-order subgroup")]
    NotInSubgroup { group: &'static str },

    #[error("public input does not fit the 16-byte argument limit")]
    InputTooLarge,

    #[error("key carries {points} gamma_abc points but the proof has {inputs} public inputs")]
    InputCountMismatch { points: usize, inputs: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
