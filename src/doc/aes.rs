//! AES is a commonly used block cipher. This crate implements the 128-bit
//! key variant on a single 128-bit block; 192/256-bit keys and multi-block
//! modes are out of scope (see [`crate::cipher::block::aes`]).
//!
//! AES works on 128-bit blocks by applying a series of rounds of
//! substitutions and permutations to the plaintext, using a substitution box
//! (S-box) and XORing the output with a different key every round. The round
//! keys are derived from the encryption key.
//!
//! Ordinarily the S-box is a fixed, non-linear mapping from original to
//! substituted bytes, implemented as a lookup table. This achieves
//! [confusion](crate::doc::encryption#confusion). This crate treats the
//! S-box as a capability parameter instead of a fixed constant, so the same
//! round structure can be driven by [`crate::cipher::block::aes::S_BOX`] or
//! by any other permutation a caller supplies — see
//! [`crate::sbox`] for how such a permutation is scored for the properties
//! that make the standard one a good choice.
//!
//! The permutations are achieved by first treating the plaintext block as a 4x4
//! matrix, and then shifting rows and mixing columns together. This ensures
//! [diffusion](crate::doc::encryption#diffusion).
//!
//! The specification for this cipher is available as [FIPS 197](https://doi.org/10.6028/NIST.FIPS.197).
