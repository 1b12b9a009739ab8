//! AES-128 with a swappable substitution layer.
//!
//! AES works on 128-bit blocks by applying a series of rounds of
//! substitutions and permutations to the plaintext, using a substitution box
//! (S-box) and XORing the output with a different key every round. The round
//! keys are derived from the encryption key.
//!
//! Ordinarily the S-box is fixed; this crate treats it as a capability
//! parameter instead, so the same round structure below can be driven by
//! [`S_BOX`] or by any other [`SBox`] a caller supplies to the
//! [cryptanalysis engine](crate::sbox). The inverse S-box needed for
//! decryption is derived from the active one with [`SBox::inverse`].
//!
//! The permutations are achieved by treating the plaintext block as a 4x4
//! matrix in column-major order and shifting rows and mixing columns
//! together.
//!
//! The specification for this cipher is available as [FIPS 197](https://doi.org/10.6028/NIST.FIPS.197).
//!
//! This module only implements the single-block, 128-bit-key variant of AES;
//! multi-block modes and the 192/256-bit key sizes are out of scope. What's
//! new compared to a plain block cipher is that every round transformation
//! is exposed as its own function so that [`crate::cipher::block::step`] can
//! drive and snapshot them one at a time.

use crate::SBox;

/// AES word size in bytes.
pub const WORD_SIZE: usize = 4;

/// AES block size in words (and the side length of the state matrix).
pub const NB: usize = 4;

/// Number of key words for AES-128.
pub const NK: usize = 4;

/// Number of rounds for AES-128.
pub const NR: usize = 10;

/// The standard AES substitution table, defined in Figure 7 of the AES
/// specification. Provided as a default S-box; any other permutation of
/// `0..=255` may be used instead via [`SBox`].
pub const S_BOX: [u8; 256] = [
    0x63, 0x7c, 0x77, 0x7b, 0xf2, 0x6b, 0x6f, 0xc5, 0x30, 0x01, 0x67, 0x2b, 0xfe, 0xd7, 0xab, 0x76,
    0xca, 0x82, 0xc9, 0x7d, 0xfa, 0x59, 0x47, 0xf0, 0xad, 0xd4, 0xa2, 0xaf, 0x9c, 0xa4, 0x72, 0xc0,
    0xb7, 0xfd, 0x93, 0x26, 0x36, 0x3f, 0xf7, 0xcc, 0x34, 0xa5, 0xe5, 0xf1, 0x71, 0xd8, 0x31, 0x15,
    0x04, 0xc7, 0x23, 0xc3, 0x18, 0x96, 0x05, 0x9a, 0x07, 0x12, 0x80, 0xe2, 0xeb, 0x27, 0xb2, 0x75,
    0x09, 0x83, 0x2c, 0x1a, 0x1b, 0x6e, 0x5a, 0xa0, 0x52, 0x3b, 0xd6, 0xb3, 0x29, 0xe3, 0x2f, 0x84,
    0x53, 0xd1, 0x00, 0xed, 0x20, 0xfc, 0xb1, 0x5b, 0x6a, 0xcb, 0xbe, 0x39, 0x4a, 0x4c, 0x58, 0xcf,
    0xd0, 0xef, 0xaa, 0xfb, 0x43, 0x4d, 0x33, 0x85, 0x45, 0xf9, 0x02, 0x7f, 0x50, 0x3c, 0x9f, 0xa8,
    0x51, 0xa3, 0x40, 0x8f, 0x92, 0x9d, 0x38, 0xf5, 0xbc, 0xb6, 0xda, 0x21, 0x10, 0xff, 0xf3, 0xd2,
    0xcd, 0x0c, 0x13, 0xec, 0x5f, 0x97, 0x44, 0x17, 0xc4, 0xa7, 0x7e, 0x3d, 0x64, 0x5d, 0x19, 0x73,
    0x60, 0x81, 0x4f, 0xdc, 0x22, 0x2a, 0x90, 0x88, 0x46, 0xee, 0xb8, 0x14, 0xde, 0x5e, 0x0b, 0xdb,
    0xe0, 0x32, 0x3a, 0x0a, 0x49, 0x06, 0x24, 0x5c, 0xc2, 0xd3, 0xac, 0x62, 0x91, 0x95, 0xe4, 0x79,
    0xe7, 0xc8, 0x37, 0x6d, 0x8d, 0xd5, 0x4e, 0xa9, 0x6c, 0x56, 0xf4, 0xea, 0x65, 0x7a, 0xae, 0x08,
    0xba, 0x78, 0x25, 0x2e, 0x1c, 0xa6, 0xb4, 0xc6, 0xe8, 0xdd, 0x74, 0x1f, 0x4b, 0xbd, 0x8b, 0x8a,
    0x70, 0x3e, 0xb5, 0x66, 0x48, 0x03, 0xf6, 0x0e, 0x61, 0x35, 0x57, 0xb9, 0x86, 0xc1, 0x1d, 0x9e,
    0xe1, 0xf8, 0x98, 0x11, 0x69, 0xd9, 0x8e, 0x94, 0x9b, 0x1e, 0x87, 0xe9, 0xce, 0x55, 0x28, 0xdf,
    0x8c, 0xa1, 0x89, 0x0d, 0xbf, 0xe6, 0x42, 0x68, 0x41, 0x99, 0x2d, 0x0f, 0xb0, 0x54, 0xbb, 0x16,
];

/// The round constant word array, defined in Section 5.2 of the AES
/// specification. `RCON[k]` supplies the single nonzero byte of `Rcon[k]`;
/// `rcon(1) = 1` and `rcon(k + 1) = times_02(rcon(k))`.
pub const RCON: [u8; 11] = [0x0, 0x1, 0x2, 0x4, 0x8, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// The AES state: a 4x4 byte matrix in column-major order, i.e. byte `k`
/// sits at row `k % 4`, column `k / 4` — which is exactly index `k` of this
/// array, so no separate row/column indexing is needed anywhere below.
pub type State = [u8; NB * WORD_SIZE];

/// The AddRoundKey transformation, defined in Section 5.1.4 of the AES
/// specification: XOR the state with the round key.
pub fn add_round_key(state: &mut State, round_key: &[u8]) {
    state.iter_mut().zip(round_key).for_each(|(s, k)| *s ^= k);
}

/// The SubBytes transformation, defined in Section 5.1.1 of the AES
/// specification: replace each byte with the corresponding byte from the
/// active S-box.
pub fn sub_bytes(state: &mut State, sbox: &SBox) {
    for b in state.iter_mut() {
        *b = sbox.get(*b);
    }
}

/// The InvSubBytes transformation, defined in Section 5.3.2 of the AES
/// specification: replace each byte with the corresponding byte from the
/// inverse of the active S-box.
pub fn inv_sub_bytes(state: &mut State, inv_sbox: &SBox) {
    for b in state.iter_mut() {
        *b = inv_sbox.get(*b);
    }
}

/// The ShiftRows transformation, defined in Section 5.1.2 of the AES
/// specification: cyclically left-shift row `r` by `r` positions.
pub fn shift_rows(state: &mut State) {
    // Shift second row.
    state.swap(1, 13);
    state.swap(5, 9);
    state.swap(1, 9);

    // Shift third row.
    state.swap(2, 10);
    state.swap(6, 14);

    // Shift fourth row.
    state.swap(3, 7);
    state.swap(11, 15);
    state.swap(3, 11);
}

/// The InvShiftRows transformation, defined in Section 5.3.1 of the AES
/// specification: inverse of [`shift_rows`].
pub fn inv_shift_rows(state: &mut State) {
    // Shift second row.
    state.swap(1, 13);
    state.swap(5, 9);
    state.swap(5, 13);

    // Shift third row.
    state.swap(2, 10);
    state.swap(6, 14);

    // Shift fourth row.
    state.swap(3, 15);
    state.swap(7, 11);
    state.swap(3, 11);
}

/// The MixColumns transformation, defined in Section 5.1.3 of the AES
/// specification: multiply each column by the fixed MDS matrix over
/// $GF(2^8)$.
pub fn mix_columns(state: &mut State) {
    let copy = *state;
    state.chunks_mut(4).zip(copy.chunks(4)).for_each(|(s, c)| {
        s[0] = times_02(c[0]) ^ times_03(c[1]) ^ c[2] ^ c[3];
        s[1] = c[0] ^ times_02(c[1]) ^ times_03(c[2]) ^ c[3];
        s[2] = c[0] ^ c[1] ^ times_02(c[2]) ^ times_03(c[3]);
        s[3] = times_03(c[0]) ^ c[1] ^ c[2] ^ times_02(c[3]);
    });
}

/// The InvMixColumns transformation, defined in Section 5.3.1 of the AES
/// specification: multiply each column by the inverse of the
/// [MixColumns](mix_columns) matrix.
pub fn inv_mix_columns(state: &mut State) {
    let copy = *state;
    state.chunks_mut(4).zip(copy.chunks(4)).for_each(|(s, c)| {
        s[0] = times_0e(c[0]) ^ times_0b(c[1]) ^ times_0d(c[2]) ^ times_09(c[3]);
        s[1] = times_09(c[0]) ^ times_0e(c[1]) ^ times_0b(c[2]) ^ times_0d(c[3]);
        s[2] = times_0d(c[0]) ^ times_09(c[1]) ^ times_0e(c[2]) ^ times_0b(c[3]);
        s[3] = times_0b(c[0]) ^ times_0d(c[1]) ^ times_09(c[2]) ^ times_0e(c[3]);
    });
}

/// Multiply `b` by 0x02 in $GF(2^8)$ with the AES reduction polynomial
/// $m(x) = x^8 + x^4 + x^3 + x + 1 \equiv \mathrm{0x11B}$: a left shift,
/// followed by an XOR with `0x1b` if the high bit was set before the shift.
pub fn times_02(b: u8) -> u8 {
    let mut r = b << 1;
    if b & 0x80 != 0 {
        r ^= 0x1b;
    }
    r
}

/// Multiply `b` by `0x03` in $GF(2^8)$: `times_02(b) ^ b`.
pub fn times_03(b: u8) -> u8 {
    times_02(b) ^ b
}

/// Multiply `b` by `0x09` in $GF(2^8)$: `times_02(times_02(times_02(b))) ^ b`.
pub fn times_09(b: u8) -> u8 {
    times_02(times_02(times_02(b))) ^ b
}

/// Multiply `b` by `0x0b` in $GF(2^8)$: `times_09(b) ^ times_02(b)`.
pub fn times_0b(b: u8) -> u8 {
    times_09(b) ^ times_02(b)
}

/// Multiply `b` by `0x0d` in $GF(2^8)$: `times_09(b) ^ times_04(b)`, where
/// `times_04(b) = times_02(times_02(b))`.
pub fn times_0d(b: u8) -> u8 {
    times_09(b) ^ times_02(times_02(b))
}

/// Multiply `b` by `0x0e` in $GF(2^8)$: `times_0b(b) ^ times_02(times_02(b))`.
pub fn times_0e(b: u8) -> u8 {
    times_0b(b) ^ times_02(times_02(b))
}

/// The KeyExpansion routine, defined in Section 5.2 of the AES
/// specification: expand the 16-byte master key into 11 round keys (44
/// 4-byte words total), using the active S-box for the SubWord step.
pub fn key_expansion(key: [u8; NK * WORD_SIZE], sbox: &SBox) -> [u8; NB * (NR + 1) * WORD_SIZE] {
    let mut w = [0u8; NB * (NR + 1) * WORD_SIZE];
    w[0..NK * WORD_SIZE].copy_from_slice(&key);
    for i in NK..NB * (NR + 1) {
        let mut temp = [0u8; WORD_SIZE];
        temp.copy_from_slice(&w[(i - 1) * WORD_SIZE..i * WORD_SIZE]);
        if i % NK == 0 {
            rot_word(&mut temp);
            sub_word(&mut temp, sbox);
            temp[0] ^= RCON[i / NK];
        }
        for j in 0..WORD_SIZE {
            w[i * WORD_SIZE + j] = w[(i - NK) * WORD_SIZE + j] ^ temp[j];
        }
    }
    w
}

/// The RotWord function, defined in Section 5.2 of the AES specification:
/// rotate a 4-byte word left by one position.
pub fn rot_word(word: &mut [u8; WORD_SIZE]) {
    word.rotate_left(1);
}

/// The SubWord function, defined in Section 5.2 of the AES specification:
/// apply the active S-box to each byte of a 4-byte word.
pub fn sub_word(word: &mut [u8; WORD_SIZE], sbox: &SBox) {
    for b in word.iter_mut() {
        *b = sbox.get(*b);
    }
}

/// The round key for round `round` (`0..=NR`), as a slice into the
/// expanded key schedule.
pub fn round_key(schedule: &[u8], round: usize) -> &[u8] {
    &schedule[round * NB * WORD_SIZE..(round + 1) * NB * WORD_SIZE]
}

#[cfg(test)]
mod test {
    use super::*;

    fn hex16(s: &str) -> [u8; 16] {
        let bytes: Vec<u8> = s
            .split_whitespace()
            .map(|pair| u8::from_str_radix(pair, 16).unwrap())
            .collect();
        bytes.try_into().unwrap()
    }

    #[test]
    fn fips197_appendix_b_vector_matches() {
        let sbox = SBox::from_bytes(S_BOX).unwrap();
        let plaintext = hex16("32 43 f6 a8 88 5a 30 8d 31 31 98 a2 e0 37 07 34");
        let key = hex16("2b 7e 15 16 28 ae d2 a6 ab f7 15 88 09 cf 4f 3c");
        let expected = hex16("39 25 84 1d 02 dc 09 fb dc 11 85 97 19 6a 0b 32");

        let schedule = key_expansion(key, &sbox);
        let mut state = plaintext;
        add_round_key(&mut state, round_key(&schedule, 0));
        for round in 1..NR {
            sub_bytes(&mut state, &sbox);
            shift_rows(&mut state);
            mix_columns(&mut state);
            add_round_key(&mut state, round_key(&schedule, round));
        }
        sub_bytes(&mut state, &sbox);
        shift_rows(&mut state);
        add_round_key(&mut state, round_key(&schedule, NR));

        assert_eq!(state, expected);
    }

    #[test]
    fn shift_rows_and_inverse_cancel() {
        let mut state: State = std::array::from_fn(|i| i as u8);
        let original = state;
        shift_rows(&mut state);
        inv_shift_rows(&mut state);
        assert_eq!(state, original);
    }

    #[test]
    fn mix_columns_and_inverse_cancel() {
        let mut state: State = std::array::from_fn(|i| (i * 37) as u8);
        let original = state;
        mix_columns(&mut state);
        inv_mix_columns(&mut state);
        assert_eq!(state, original);
    }
}
