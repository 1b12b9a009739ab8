//! Linear Approximation Table and Difference Distribution Table builders.
//!
//! Both are 256x256 tables, so they are boxed rather than returned by value
//! to keep them off the stack; together with the eight cached Walsh spectra
//! they are still well under a megabyte in total.

use crate::{sbox::bits, SBox};

/// The Linear Approximation Table. `lat[a][b]` is the bias of the linear
/// approximation `a . x = b . S(x)`, in `[-128, 128]`; `lat[0][0] == 128`.
#[derive(Debug, Clone)]
pub struct Lat(pub Box<[[i32; 256]; 256]>);

impl Lat {
    /// $O(2^{24})$: for every `(a, b)` pair, count the `x` for which the
    /// input and output linear parities agree, then recenter around zero.
    /// This is the dominant cost of a full analysis.
    pub fn build(sbox: &SBox) -> Self {
        let mut lat = Box::new([[0i32; 256]; 256]);
        for (a, row) in lat.iter_mut().enumerate() {
            let a = a as u8;
            for (b, entry) in row.iter_mut().enumerate() {
                let b = b as u8;
                let mut matches = 0i32;
                for x in 0..=255u8 {
                    if bits::dot_parity(a, x) == bits::dot_parity(b, sbox.get(x)) {
                        matches += 1;
                    }
                }
                *entry = matches - 128;
            }
        }
        Lat(lat)
    }

    pub fn get(&self, a: u8, b: u8) -> i32 {
        self.0[a as usize][b as usize]
    }

    /// `max |lat[a][b]|` over every `(a, b) != (0, 0)`.
    pub fn max_abs_nonzero(&self) -> i32 {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(a, row)| row.iter().enumerate().map(move |(b, &v)| (a, b, v)))
            .filter(|&(a, b, _)| (a, b) != (0, 0))
            .map(|(_, _, v)| v.abs())
            .max()
            .unwrap_or(0)
    }
}

/// The Difference Distribution Table. `ddt[alpha][beta]` counts the inputs
/// `x` for which `S(x ^ alpha) ^ S(x) == beta`. Row sums equal 256;
/// `ddt[0][0] == 256`.
#[derive(Debug, Clone)]
pub struct Ddt(pub Box<[[u16; 256]; 256]>);

impl Ddt {
    /// $O(2^{16})$: accumulate every ordered input pair directly.
    pub fn build(sbox: &SBox) -> Self {
        let mut ddt = Box::new([[0u16; 256]; 256]);
        for x1 in 0..=255u8 {
            for x2 in 0..=255u8 {
                let alpha = x1 ^ x2;
                let beta = sbox.get(x1) ^ sbox.get(x2);
                ddt[alpha as usize][beta as usize] += 1;
            }
        }
        Ddt(ddt)
    }

    pub fn get(&self, alpha: u8, beta: u8) -> u16 {
        self.0[alpha as usize][beta as usize]
    }

    /// `max ddt[alpha][beta]` over every `alpha != 0` (any `beta`) — the
    /// differential uniformity of the S-box.
    pub fn max_nonzero_alpha(&self) -> u16 {
        self.0[1..]
            .iter()
            .flat_map(|row| row.iter())
            .copied()
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ddt_rows_sum_to_256_and_origin_is_fixed() {
        let sbox = SBox::from_bytes(crate::cipher::block::aes::S_BOX).unwrap();
        let ddt = Ddt::build(&sbox);
        assert_eq!(ddt.get(0, 0), 256);
        for alpha in 0..=255u8 {
            let row_sum: u32 = (0..=255u8).map(|beta| ddt.get(alpha, beta) as u32).sum();
            assert_eq!(row_sum, 256);
            for beta in 0..=255u8 {
                assert_eq!(ddt.get(alpha, beta) % 2, 0);
            }
        }
    }

    #[test]
    fn lat_origin_is_fixed_and_entries_are_even() {
        let sbox = SBox::from_bytes(crate::cipher::block::aes::S_BOX).unwrap();
        let lat = Lat::build(&sbox);
        assert_eq!(lat.get(0, 0), 128);
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                assert_eq!(lat.get(a, b) % 2, 0);
            }
        }
    }
}
