use std::fmt;

/// An S-box failed validation before it could be analysed or used to
/// parameterise the AES core.
///
/// Every fallible operation in this crate validates its inputs up front and
/// returns one of these synchronously; there is no partial [`crate::Report`]
/// or partial [`crate::Step`] stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SboxError {
    /// The input sequence did not contain exactly 256 entries.
    InvalidSBoxLength { found: usize },
    /// An entry fell outside `0..=255`.
    InvalidSBoxValue { value: i64 },
    /// The sequence is not a bijection over `0..=255` (a duplicate and, by
    /// counting, a missing value).
    NotAPermutation { duplicate: u8 },
}

impl fmt::Display for SboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SboxError::InvalidSBoxLength { found } => {
                write!(f, "s-box must have exactly 256 entries, found {found}")
            }
            SboxError::InvalidSBoxValue { value } => {
                write!(f, "s-box entry {value} is outside the range 0..=255")
            }
            SboxError::NotAPermutation { duplicate } => {
                write!(f, "s-box is not a permutation: {duplicate} occurs more than once")
            }
        }
    }
}

impl std::error::Error for SboxError {}

/// The AES core rejected a block, key, or ciphertext.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AesError {
    /// A plaintext, key, or ciphertext argument was not exactly 16 bytes.
    InvalidBlockLength { found: usize },
}

impl fmt::Display for AesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AesError::InvalidBlockLength { found } => {
                write!(f, "AES-128 block must have exactly 16 bytes, found {found}")
            }
        }
    }
}

impl std::error::Error for AesError {}

/// A boundary-only error for collaborators that parse hexadecimal byte
/// fields. The core never parses strings itself and so never constructs
/// this error, but it is part of the public error surface so that a
/// collaborator's parser can report failures with the same vocabulary as
/// the rest of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexParse;

impl fmt::Display for HexParse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected a two-digit hexadecimal byte")
    }
}

impl std::error::Error for HexParse {}
