//! Cryptographic quality scoring for 8-bit substitution boxes, and a
//! step-traceable AES-128 core whose substitution layer is parameterised by
//! whatever S-box was scored.
//!
//! The two halves share one capability: [`SBox`], a validated permutation of
//! `{0, ..., 255}`. [`SBoxAnalyzer`] turns one into ten standard
//! cryptanalytic metrics (nonlinearity, SAC, BIC-NL/SAC, LAP, DAP,
//! differential uniformity, algebraic degree, transparency order,
//! correlation immunity) via Walsh-Hadamard transforms, a linear
//! approximation table, a difference distribution table, and a Mobius
//! transform. [`cipher::block::aes`] and [`StepRecorder`] run the same
//! permutation (or the standard one) through AES-128, recording every
//! intermediate round state so a caller can step through or rewind an
//! encryption or decryption.
//!
//! [`analyze`] and [`encrypt_step`]/[`decrypt_step`] (with their
//! block-returning counterparts [`encrypt_block`]/[`decrypt_block`]) are the
//! two façade operations most callers need; everything else in this crate is
//! exported for callers who want finer-grained access to a single metric,
//! table, or round.
//!
//! Out of scope: multi-block modes, 192/256-bit AES, padding, constant-time
//! hardening, and any form of I/O — this crate parses nothing and persists
//! nothing, it only computes.

#[cfg(doc)]
pub mod doc;

#[cfg(test)]
mod property_test;

mod analysis;
mod cipher;
mod error;
mod sbox;
mod trace;

pub use {
    analysis::{analyze, analyze_with_summary},
    cipher::block::{
        aes,
        step::{Step, StepKind, StepRecorder},
    },
    error::{AesError, HexParse, SboxError},
    sbox::{
        metric::{PairSummary, Report, Sac},
        security::{SecurityLevel, SecuritySummary},
        SBox,
        SBoxAnalyzer,
    },
    trace::{decrypt_block, decrypt_step, encrypt_block, encrypt_step, TraceError},
};
