//! The ten cryptographic quality metrics, and the [`Report`] that collects
//! them.

use crate::sbox::{
    bits,
    boolean::BooleanFunction,
    table::{Ddt, Lat},
    transform::{self, WalshSpectrum},
};

/// Strict Avalanche Criterion results: an 8x8 matrix of flip probabilities
/// plus two scalar summaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sac {
    /// `matrix[i][j]` is the probability that flipping input bit `i` flips
    /// output bit `j`.
    pub matrix: [[f64; 8]; 8],
    /// Mean absolute deviation of `matrix` from the ideal 0.5.
    pub score: f64,
    /// Largest single deviation from 0.5 anywhere in `matrix`.
    pub max_deviation: f64,
}

/// A summary over the 28 unordered pairs of output bits, used for both
/// BIC-NL and BIC-SAC.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub vector: [f64; 28],
}

/// All ten metrics, plus the balanced/bijection predicates `Report` also
/// carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub nonlinearity: i32,
    pub sac: Sac,
    pub differential_uniformity: u32,
    pub lap_max_bias: i32,
    pub lap: f64,
    pub algebraic_degree: u32,
    pub transparency_order: f64,
    pub bic_nl: PairSummary,
    pub bic_sac: PairSummary,
    pub correlation_immunity: u32,
    pub balanced: bool,
    pub bijection: bool,
}

/// Index of the unordered pair `{i, j}` (`i < j`, both in `0..8`) among the
/// 28 possible pairs, in the row-major order the pair iterator below
/// produces them.
pub fn output_bit_pairs() -> impl Iterator<Item = (u8, u8)> {
    (0..8u8).flat_map(|i| ((i + 1)..8u8).map(move |j| (i, j)))
}

/// Nonlinearity: `128 - max_i(M_i) / 2`, where `M_i` is the largest `|W[w]|`
/// over nonzero `w` for output bit `i`'s Walsh spectrum.
pub fn nonlinearity(spectra: &[WalshSpectrum; 8]) -> i32 {
    let worst = spectra.iter().map(WalshSpectrum::max_abs_nonzero).max().unwrap_or(0);
    128 - worst / 2
}

/// Strict Avalanche Criterion, computed directly from the S-box rather than
/// from the cached Boolean functions — each entry perturbs a different
/// input bit, so there is no shared table to reuse.
pub fn sac(sbox: &crate::SBox) -> Sac {
    let mut matrix = [[0.0f64; 8]; 8];
    for i in 0..8u8 {
        for j in 0..8u8 {
            let mut flips = 0u32;
            for x in 0..=255u8 {
                let y = sbox.get(x);
                let y_flipped = sbox.get(x ^ (1 << i));
                if (y ^ y_flipped) >> j & 1 == 1 {
                    flips += 1;
                }
            }
            matrix[i as usize][j as usize] = flips as f64 / 256.0;
        }
    }
    let deviations: Vec<f64> = matrix.iter().flatten().map(|p| (p - 0.5).abs()).collect();
    let score = deviations.iter().sum::<f64>() / deviations.len() as f64;
    let max_deviation = deviations.iter().cloned().fold(0.0, f64::max);
    Sac { matrix, score, max_deviation }
}

/// BIC-NL: for each pair of output bits `{i, j}`, the nonlinearity of their
/// XOR.
pub fn bic_nl(boolean_functions: &[BooleanFunction; 8]) -> PairSummary {
    let mut vector = [0.0f64; 28];
    for (k, (i, j)) in output_bit_pairs().enumerate() {
        let mut xored = [0u8; 256];
        for x in 0..=255u8 {
            xored[x as usize] = boolean_functions[i as usize].at(x) ^ boolean_functions[j as usize].at(x);
        }
        let g = BooleanFunction(xored);
        let w = WalshSpectrum::compute(&g);
        vector[k] = (128 - w.max_abs_nonzero() / 2) as f64;
    }
    summarize(vector)
}

/// BIC-SAC: for each pair of output bits `{i, j}`, the absolute normalized
/// correlation between their `{-1, +1}`-polarized output streams.
pub fn bic_sac(boolean_functions: &[BooleanFunction; 8]) -> PairSummary {
    let mut vector = [0.0f64; 28];
    for (k, (i, j)) in output_bit_pairs().enumerate() {
        let mut sum = 0i32;
        for x in 0..=255u8 {
            let a = 2 * boolean_functions[i as usize].at(x) as i32 - 1;
            let b = 2 * boolean_functions[j as usize].at(x) as i32 - 1;
            sum += a * b;
        }
        vector[k] = (sum.abs() as f64) / 256.0;
    }
    summarize(vector)
}

fn summarize(vector: [f64; 28]) -> PairSummary {
    let min = vector.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = vector.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let mean = vector.iter().sum::<f64>() / vector.len() as f64;
    PairSummary { min, max, mean, vector }
}

/// LAP: the squared, normalized maximum LAT bias.
pub fn lap(lat: &Lat) -> (i32, f64) {
    let max_bias = lat.max_abs_nonzero();
    (max_bias, (max_bias as f64 / 128.0).powi(2))
}

/// DAP / differential uniformity: the largest nonzero-input DDT entry, and
/// that same value normalized by 256.
pub fn dap(ddt: &Ddt) -> (u32, f64) {
    let du = ddt.max_nonzero_alpha() as u32;
    (du, du as f64 / 256.0)
}

/// Algebraic degree across all eight output bits.
pub fn algebraic_degree(boolean_functions: &[BooleanFunction; 8]) -> u32 {
    boolean_functions.iter().map(transform::algebraic_degree).max().unwrap_or(0)
}

/// Transparency order, per the source dashboard's chi-squared-statistic
/// definition: for every pair of input bits and every nonzero output mask,
/// partition inputs into four classes by the two input bits, tally the
/// parity of the masked output within each class, and track the largest
/// resulting `sqrt(chi-squared)` against a uniform expected frequency of 32
/// per cell.
///
/// This stays behaviour-compatible with the original dashboard rather than
/// matching a textbook definition; see [`transparency_order_prouff`] for an
/// alternative.
pub fn transparency_order(sbox: &crate::SBox) -> f64 {
    let mut max_stat = 0.0f64;
    for i in 0..8u8 {
        for j in (i + 1)..8u8 {
            for beta in 1..=255u8 {
                let mut counts = [[0u32; 2]; 4];
                for x in 0..=255u8 {
                    let class = (((x >> i) & 1) << 1 | ((x >> j) & 1)) as usize;
                    let parity = bits::parity(sbox.get(x) & beta) as usize;
                    counts[class][parity] += 1;
                }
                let chi_squared: f64 = counts
                    .iter()
                    .flatten()
                    .map(|&observed| {
                        let diff = observed as f64 - 32.0;
                        diff * diff / 32.0
                    })
                    .sum();
                max_stat = max_stat.max(chi_squared.sqrt());
            }
        }
    }
    max_stat
}

/// Prouff's transparency order, offered alongside the source-compatible
/// [`transparency_order`] rather than in place of it.
///
/// $$
/// TO(S) = \max_{\beta \neq 0} \left( n -
/// \frac{1}{2^{2n} - 2^n} \sum_{\alpha \neq 0}
/// \left| \sum_{x} (-1)^{\beta \cdot (S(x) \oplus S(x \oplus \alpha))} \right|
/// \right)
/// $$
///
/// Not used by [`Report`]; provided for callers who specifically want the
/// textbook variant instead of the dashboard-compatible one above.
pub fn transparency_order_prouff(sbox: &crate::SBox) -> f64 {
    const N: f64 = 8.0;
    const DENOM: f64 = 65280.0; // 2^16 - 2^8
    let mut best = f64::MIN;
    for beta in 1..=255u8 {
        let mut sum = 0.0f64;
        for alpha in 1..=255u8 {
            let mut correlation = 0i32;
            for x in 0..=255u8 {
                let diff = sbox.get(x) ^ sbox.get(x ^ alpha);
                correlation += if bits::parity(diff & beta) == 0 { 1 } else { -1 };
            }
            sum += correlation.abs() as f64;
        }
        let to = N - sum / DENOM;
        best = best.max(to);
    }
    best
}

/// Correlation immunity: the largest `k` such that every nonzero-weight-`<=
/// k` Walsh coefficient is zero, for the "worst" (least immune) output bit.
pub fn correlation_immunity(spectra: &[WalshSpectrum; 8]) -> u32 {
    spectra.iter().map(bit_correlation_immunity).max().unwrap_or(0)
}

fn bit_correlation_immunity(w: &WalshSpectrum) -> u32 {
    let mut ci = 0u32;
    for k in 1..=8u32 {
        let all_zero = (1u32..256).all(|mask| {
            let mask = mask as u8;
            bits::weight(mask) > k || w.at(mask) == 0
        });
        if !all_zero {
            break;
        }
        ci = k;
    }
    ci
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::SBox;

    fn aes_sbox() -> SBox {
        SBox::from_bytes(crate::cipher::block::aes::S_BOX).unwrap()
    }

    #[test]
    fn standard_aes_sbox_has_textbook_nonlinearity() {
        let sbox = aes_sbox();
        let functions: [BooleanFunction; 8] =
            std::array::from_fn(|i| BooleanFunction::project(&sbox, i as u8));
        let spectra: [WalshSpectrum; 8] = std::array::from_fn(|i| WalshSpectrum::compute(&functions[i]));
        assert_eq!(nonlinearity(&spectra), 112);
    }

    #[test]
    fn standard_aes_sbox_sac_score_is_near_eighth() {
        let sbox = aes_sbox();
        let result = sac(&sbox);
        assert!((result.score - 0.125).abs() < 1e-9);
    }
}
