//! The entry point collaborators use to run AES-128 with a swappable
//! S-box and watch it step through its rounds.
//!
//! Like [`crate::analysis`], this owns no state of its own: it validates
//! loosely typed input into an [`SBox`] and fixed-size blocks, then drives
//! [`StepRecorder`].

use std::fmt;

use crate::{
    cipher::block::step::StepRecorder,
    error::{AesError, SboxError},
    SBox,
};

/// Either half of the façade's error surface: a bad S-box, or a
/// plaintext/key/ciphertext that isn't exactly 16 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceError {
    Sbox(SboxError),
    Block(AesError),
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceError::Sbox(e) => e.fmt(f),
            TraceError::Block(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for TraceError {}

impl From<SboxError> for TraceError {
    fn from(e: SboxError) -> Self {
        TraceError::Sbox(e)
    }
}

impl From<AesError> for TraceError {
    fn from(e: AesError) -> Self {
        TraceError::Block(e)
    }
}

fn block(bytes: &[u8]) -> Result<[u8; 16], TraceError> {
    bytes
        .try_into()
        .map_err(|_| TraceError::Block(AesError::InvalidBlockLength { found: bytes.len() }))
}

/// Validate `plaintext`, `key`, and `sbox`, then encrypt, recording all 42
/// steps of the trace.
pub fn encrypt_step(plaintext: &[u8], key: &[u8], sbox: &[i64]) -> Result<StepRecorder, TraceError> {
    let sbox = SBox::new(sbox)?;
    Ok(StepRecorder::encrypt(block(plaintext)?, block(key)?, &sbox))
}

/// Validate `ciphertext`, `key`, and `sbox`, then decrypt, recording all 42
/// steps of the trace.
pub fn decrypt_step(ciphertext: &[u8], key: &[u8], sbox: &[i64]) -> Result<StepRecorder, TraceError> {
    let sbox = SBox::new(sbox)?;
    Ok(StepRecorder::decrypt(block(ciphertext)?, block(key)?, &sbox))
}

/// [`encrypt_step`], draining the trace down to the terminal 16-byte state.
pub fn encrypt_block(plaintext: &[u8], key: &[u8], sbox: &[i64]) -> Result<[u8; 16], TraceError> {
    Ok(encrypt_step(plaintext, key, sbox)?.terminal_state())
}

/// [`decrypt_step`], draining the trace down to the terminal 16-byte state.
pub fn decrypt_block(ciphertext: &[u8], key: &[u8], sbox: &[i64]) -> Result<[u8; 16], TraceError> {
    Ok(decrypt_step(ciphertext, key, sbox)?.terminal_state())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cipher::block::{aes, step::StepKind};

    fn hex16(s: &str) -> Vec<u8> {
        s.split_whitespace().map(|pair| u8::from_str_radix(pair, 16).unwrap()).collect()
    }

    fn standard_sbox() -> Vec<i64> {
        aes::S_BOX.iter().map(|&b| b as i64).collect()
    }

    #[test]
    fn fips197_vector_round_trips_through_the_facade() {
        let plaintext = hex16("32 43 f6 a8 88 5a 30 8d 31 31 98 a2 e0 37 07 34");
        let key = hex16("2b 7e 15 16 28 ae d2 a6 ab f7 15 88 09 cf 4f 3c");
        let expected = hex16("39 25 84 1d 02 dc 09 fb dc 11 85 97 19 6a 0b 32");
        let sbox = standard_sbox();

        let recorder = encrypt_step(&plaintext, &key, &sbox).unwrap();
        assert_eq!(recorder.history().len(), 42);
        assert_eq!(recorder.history().last().unwrap().operation, StepKind::Final);
        assert_eq!(recorder.terminal_state().to_vec(), expected);

        let ciphertext = encrypt_block(&plaintext, &key, &sbox).unwrap();
        assert_eq!(ciphertext.to_vec(), expected);

        let recovered = decrypt_block(&ciphertext, &key, &sbox).unwrap();
        assert_eq!(recovered.to_vec(), plaintext);
    }

    #[test]
    fn wrong_length_plaintext_is_rejected() {
        let key = vec![0u8; 16];
        let sbox = standard_sbox();
        let err = encrypt_step(&[0u8; 15], &key, &sbox).unwrap_err();
        assert_eq!(err, TraceError::Block(AesError::InvalidBlockLength { found: 15 }));
    }

    #[test]
    fn invalid_sbox_is_rejected_before_any_block_check() {
        let mut bad = standard_sbox();
        bad[0] = 999;
        let err = encrypt_step(&[0u8; 16], &[0u8; 16], &bad).unwrap_err();
        assert_eq!(err, TraceError::Sbox(SboxError::InvalidSBoxValue { value: 999 }));
    }

    #[test]
    fn key_schedule_depends_on_the_active_sbox() {
        let mut shifted = standard_sbox();
        shifted.rotate_left(1);
        let plaintext = [0u8; 16];
        let key = [0u8; 16];

        let standard = encrypt_block(&plaintext, &key, &standard_sbox()).unwrap();
        let shifted_ct = encrypt_block(&plaintext, &key, &shifted).unwrap();
        assert_ne!(standard, shifted_ct);
    }
}
