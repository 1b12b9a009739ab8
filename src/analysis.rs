//! The entry point collaborators use to score an S-box: validate it, run
//! every metric, and project the result to a qualitative summary.
//!
//! This is a thin façade over [`crate::sbox`] — it owns no state of its own,
//! just wires [`SBox`] construction to [`SBoxAnalyzer`] and, optionally,
//! [`SecuritySummary`].

use crate::{
    error::SboxError,
    sbox::{metric::Report, security::SecuritySummary, SBoxAnalyzer},
    SBox,
};

/// Validate `values` as a permutation of `0..=255` and compute its full
/// [`Report`].
///
/// `values` is a wide integer slice rather than `[u8; 256]` so a collaborator
/// handing over loosely typed input — a column parsed from a spreadsheet,
/// say — sees [`SboxError::InvalidSBoxLength`] and
/// [`SboxError::InvalidSBoxValue`] instead of a panic on the cast.
pub fn analyze(values: &[i64]) -> Result<Report, SboxError> {
    let sbox = SBox::new(values)?;
    Ok(SBoxAnalyzer::new(sbox).report())
}

/// [`analyze`], but the report is also projected to a [`SecuritySummary`].
pub fn analyze_with_summary(values: &[i64]) -> Result<(Report, SecuritySummary), SboxError> {
    let sbox = SBox::new(values)?;
    Ok(SBoxAnalyzer::new(sbox).security_summary())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{cipher::block::aes, sbox::security::SecurityLevel};

    fn values(bytes: [u8; 256]) -> Vec<i64> {
        bytes.iter().map(|&b| b as i64).collect()
    }

    #[test]
    fn standard_aes_sbox_scores_high_security() {
        let (report, summary) = analyze_with_summary(&values(aes::S_BOX)).unwrap();
        assert_eq!(report.nonlinearity, 112);
        assert_eq!(report.differential_uniformity, 4);
        assert_eq!(report.lap_max_bias, 16);
        assert!((report.lap - 0.015625).abs() < 1e-9);
        assert_eq!(report.algebraic_degree, 7);
        assert!((report.sac.score - 0.125).abs() < 1e-9);
        assert!(report.balanced);
        assert!(report.bijection);
        assert_eq!(summary.level, SecurityLevel::High);
    }

    #[test]
    fn identity_permutation_is_weak() {
        let identity: [u8; 256] = std::array::from_fn(|i| i as u8);
        let (report, summary) = analyze_with_summary(&values(identity)).unwrap();
        assert_eq!(report.nonlinearity, 0);
        assert_eq!(report.differential_uniformity, 256);
        assert_eq!(report.algebraic_degree, 1);
        assert_eq!(summary.level, SecurityLevel::Low);
        assert!(summary.weaknesses.contains(&"Low nonlinearity"));
        assert!(summary.weaknesses.contains(&"High differential uniformity"));
    }

    #[test]
    fn wrong_length_is_rejected() {
        let values = vec![0i64; 255];
        assert_eq!(analyze(&values), Err(SboxError::InvalidSBoxLength { found: 255 }));
    }

    #[test]
    fn duplicate_value_is_rejected() {
        let mut bytes: [u8; 256] = std::array::from_fn(|i| i as u8);
        bytes[42] = 7;
        let values: Vec<i64> = bytes.iter().map(|&b| b as i64).collect();
        assert_eq!(analyze(&values), Err(SboxError::NotAPermutation { duplicate: 7 }));
    }
}
