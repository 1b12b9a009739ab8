//! A validated 8-bit substitution box and the cryptanalysis engine built on
//! top of it.
//!
//! An [`SBox`] is a bijection over the 256-element byte domain. It is the
//! single capability parameter shared by the cryptanalysis engine
//! ([`SBoxAnalyzer`]) and the [AES core](crate::cipher::block::aes),
//! replacing the implicit "pass an array around" style a dynamically typed
//! source would use with an explicit, validated value.

use crate::error::SboxError;

pub mod bits;
pub mod boolean;
pub mod metric;
pub mod security;
pub mod table;
pub mod transform;

mod analyzer;

pub use analyzer::SBoxAnalyzer;

/// A permutation of `{0, ..., 255}`.
///
/// Constructed once from an externally supplied sequence and immutable for
/// the lifetime of an analysis or an encryption; the caller's buffer is not
/// retained past construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SBox([u8; 256]);

impl SBox {
    /// Validate `values` as a permutation and build an [`SBox`] from it.
    ///
    /// `values` uses a wide integer type because collaborators may hand the
    /// core loosely typed input (decimal or hex fields parsed from a
    /// spreadsheet, say) before it has been narrowed to bytes; this is where
    /// [`SboxError::InvalidSBoxLength`] and [`SboxError::InvalidSBoxValue`]
    /// are actually reachable.
    pub fn new(values: &[i64]) -> Result<Self, SboxError> {
        if values.len() != 256 {
            return Err(SboxError::InvalidSBoxLength { found: values.len() });
        }
        let mut bytes = [0u8; 256];
        for (slot, &value) in bytes.iter_mut().zip(values) {
            if !(0..=255).contains(&value) {
                return Err(SboxError::InvalidSBoxValue { value });
            }
            *slot = value as u8;
        }
        Self::from_bytes(bytes)
    }

    /// Validate `bytes` as a permutation and build an [`SBox`] from it.
    pub fn from_bytes(bytes: [u8; 256]) -> Result<Self, SboxError> {
        let mut seen = [false; 256];
        for &b in &bytes {
            if seen[b as usize] {
                return Err(SboxError::NotAPermutation { duplicate: b });
            }
            seen[b as usize] = true;
        }
        Ok(SBox(bytes))
    }

    /// The byte this S-box substitutes for `x`.
    pub fn get(&self, x: u8) -> u8 {
        self.0[x as usize]
    }

    /// The underlying 256-byte lookup table.
    pub fn as_bytes(&self) -> &[u8; 256] {
        &self.0
    }

    /// The inverse permutation, derived on the fly.
    ///
    /// Used by the AES core's decryption path (InvSubBytes) and by nothing
    /// in the analysis engine, which only ever reasons about the forward
    /// direction.
    pub fn inverse(&self) -> SBox {
        let mut inv = [0u8; 256];
        for (x, &y) in self.0.iter().enumerate() {
            inv[y as usize] = x as u8;
        }
        SBox(inv)
    }

    /// True if every value in `0..=255` occurs exactly once. Always true for
    /// a value that has passed construction — [`SBox::new`] and
    /// [`SBox::from_bytes`] reject anything else — but reported explicitly
    /// because [`crate::Report`] names it as a field.
    pub fn is_bijection(&self) -> bool {
        let mut seen = [false; 256];
        for &b in &self.0 {
            if seen[b as usize] {
                return false;
            }
            seen[b as usize] = true;
        }
        true
    }

    /// Synonym for [`SBox::is_bijection`] at this domain size: balanced and
    /// bijective coincide for a permutation of a 256-element byte domain.
    pub fn is_balanced(&self) -> bool {
        self.is_bijection()
    }

    /// True if the S-box is its own inverse, i.e. `S[S[x]] == x` for all
    /// `x`. Not part of the standard metric set, but a cheap derived
    /// predicate worth exposing for self-inverse designs.
    pub fn is_involution(&self) -> bool {
        (0..=255u8).all(|x| self.get(self.get(x)) == x)
    }
}
