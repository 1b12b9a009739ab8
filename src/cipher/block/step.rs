//! A small state machine that drives the AES core one operation at a time
//! and records a snapshot after each.
//!
//! The cipher itself ([`crate::cipher::block::aes`]) has no notion of
//! steps — it is pure FIPS-197 round logic. This module wraps it, so a
//! caller that wants to animate or audit a single block's trip through AES
//! can do so without re-implementing the round structure.

use crate::{
    cipher::block::aes::{self, State},
    SBox,
};

/// Which round transformation produced a [`Step`]'s snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Init,
    AddRoundKey,
    SubBytes,
    ShiftRows,
    MixColumns,
    InvSubBytes,
    InvShiftRows,
    InvMixColumns,
    Final,
}

/// A single recorded point in an AES encryption or decryption: which round
/// produced it, which operation ran, the full state immediately afterward,
/// and how far through the trace this step is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// `0..=10`.
    pub round: u8,
    pub operation: StepKind,
    pub state_snapshot: State,
    /// `0..=100`, linear in step index: `0` at [`StepKind::Init`], `100` at
    /// the final [`StepKind::Final`] step.
    pub progress: u8,
}

/// Drives [`aes`]'s round functions one at a time, recording a [`Step`]
/// after each, and retains the full history so a caller can navigate back
/// to any earlier step without re-running the cipher.
#[derive(Debug, Clone)]
pub struct StepRecorder {
    history: Vec<Step>,
    cursor: usize,
}

impl StepRecorder {
    /// Run a full AES-128 encryption, recording all 42 steps.
    pub fn encrypt(plaintext: [u8; 16], key: [u8; 16], sbox: &SBox) -> Self {
        let mut history = Vec::with_capacity(42);
        let schedule = aes::key_expansion(key, sbox);

        let mut state = plaintext;
        history.push(Step { round: 0, operation: StepKind::Init, state_snapshot: state, progress: 0 });

        aes::add_round_key(&mut state, aes::round_key(&schedule, 0));
        history.push(Step { round: 0, operation: StepKind::AddRoundKey, state_snapshot: state, progress: 0 });

        for round in 1..aes::NR {
            aes::sub_bytes(&mut state, sbox);
            history.push(Step { round: round as u8, operation: StepKind::SubBytes, state_snapshot: state, progress: 0 });

            aes::shift_rows(&mut state);
            history.push(Step { round: round as u8, operation: StepKind::ShiftRows, state_snapshot: state, progress: 0 });

            aes::mix_columns(&mut state);
            history.push(Step { round: round as u8, operation: StepKind::MixColumns, state_snapshot: state, progress: 0 });

            aes::add_round_key(&mut state, aes::round_key(&schedule, round));
            history.push(Step { round: round as u8, operation: StepKind::AddRoundKey, state_snapshot: state, progress: 0 });
        }

        aes::sub_bytes(&mut state, sbox);
        history.push(Step { round: aes::NR as u8, operation: StepKind::SubBytes, state_snapshot: state, progress: 0 });

        aes::shift_rows(&mut state);
        history.push(Step { round: aes::NR as u8, operation: StepKind::ShiftRows, state_snapshot: state, progress: 0 });

        aes::add_round_key(&mut state, aes::round_key(&schedule, aes::NR));
        history.push(Step { round: aes::NR as u8, operation: StepKind::AddRoundKey, state_snapshot: state, progress: 0 });

        history.push(Step { round: aes::NR as u8, operation: StepKind::Final, state_snapshot: state, progress: 0 });

        Self::with_progress(history)
    }

    /// Run a full AES-128 decryption, recording all 42 steps.
    pub fn decrypt(ciphertext: [u8; 16], key: [u8; 16], sbox: &SBox) -> Self {
        let inv_sbox = sbox.inverse();
        let mut history = Vec::with_capacity(42);
        let schedule = aes::key_expansion(key, sbox);

        let mut state = ciphertext;
        history.push(Step { round: aes::NR as u8, operation: StepKind::Init, state_snapshot: state, progress: 0 });

        aes::add_round_key(&mut state, aes::round_key(&schedule, aes::NR));
        history.push(Step { round: aes::NR as u8, operation: StepKind::AddRoundKey, state_snapshot: state, progress: 0 });

        for round in (1..aes::NR).rev() {
            aes::inv_shift_rows(&mut state);
            history.push(Step { round: round as u8, operation: StepKind::InvShiftRows, state_snapshot: state, progress: 0 });

            aes::inv_sub_bytes(&mut state, &inv_sbox);
            history.push(Step { round: round as u8, operation: StepKind::InvSubBytes, state_snapshot: state, progress: 0 });

            aes::add_round_key(&mut state, aes::round_key(&schedule, round));
            history.push(Step { round: round as u8, operation: StepKind::AddRoundKey, state_snapshot: state, progress: 0 });

            aes::inv_mix_columns(&mut state);
            history.push(Step { round: round as u8, operation: StepKind::InvMixColumns, state_snapshot: state, progress: 0 });
        }

        aes::inv_shift_rows(&mut state);
        history.push(Step { round: 0, operation: StepKind::InvShiftRows, state_snapshot: state, progress: 0 });

        aes::inv_sub_bytes(&mut state, &inv_sbox);
        history.push(Step { round: 0, operation: StepKind::InvSubBytes, state_snapshot: state, progress: 0 });

        aes::add_round_key(&mut state, aes::round_key(&schedule, 0));
        history.push(Step { round: 0, operation: StepKind::AddRoundKey, state_snapshot: state, progress: 0 });

        history.push(Step { round: 0, operation: StepKind::Final, state_snapshot: state, progress: 0 });

        Self::with_progress(history)
    }

    fn with_progress(mut history: Vec<Step>) -> Self {
        let last = history.len() - 1;
        for (i, step) in history.iter_mut().enumerate() {
            step.progress = (100 * i / last) as u8;
        }
        StepRecorder { history, cursor: 0 }
    }

    /// The full, already-computed trace.
    pub fn history(&self) -> &[Step] {
        &self.history
    }

    /// The 16-byte state of the last step: the ciphertext after encryption,
    /// the plaintext after decryption.
    pub fn terminal_state(&self) -> State {
        self.history.last().expect("history always has at least an Init step").state_snapshot
    }

    /// The step the cursor currently points at.
    pub fn current(&self) -> &Step {
        &self.history[self.cursor]
    }

    /// Move the cursor one step forward, returning the new current step, or
    /// `None` if already at the last step.
    pub fn advance(&mut self) -> Option<&Step> {
        if self.cursor + 1 < self.history.len() {
            self.cursor += 1;
            Some(self.current())
        } else {
            None
        }
    }

    /// Reset the cursor to the first step.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Jump directly to step `i` without recomputing anything — back
    /// navigation is just an index into the already-recorded history.
    pub fn step_at(&mut self, i: usize) -> Option<&Step> {
        if i < self.history.len() {
            self.cursor = i;
            Some(self.current())
        } else {
            None
        }
    }
}
