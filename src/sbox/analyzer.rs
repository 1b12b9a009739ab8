//! The analyser: an [`SBox`] plus its caches, computed on first use and
//! then read-only.
//!
//! Every cache is an [`OnceLock`], so an analyser shared across tasks gets
//! at-most-once initialisation per cache for free instead of needing a
//! manually-written guard.

use std::sync::OnceLock;

use crate::{
    sbox::{
        boolean::BooleanFunction,
        metric::{self, PairSummary, Report, Sac},
        security::SecuritySummary,
        table::{Ddt, Lat},
        transform::WalshSpectrum,
    },
    SBox,
};

/// An [`SBox`] plus its lazily-built, read-only analysis caches.
///
/// Logically immutable to callers: the S-box itself never changes after
/// construction, and every cache field is populated at most once regardless
/// of how many metrics are requested or how many times.
pub struct SBoxAnalyzer {
    sbox: SBox,
    boolean_functions: [OnceLock<BooleanFunction>; 8],
    walsh_spectra: [OnceLock<WalshSpectrum>; 8],
    lat: OnceLock<Lat>,
    ddt: OnceLock<Ddt>,
}

impl SBoxAnalyzer {
    pub fn new(sbox: SBox) -> Self {
        SBoxAnalyzer {
            sbox,
            boolean_functions: std::array::from_fn(|_| OnceLock::new()),
            walsh_spectra: std::array::from_fn(|_| OnceLock::new()),
            lat: OnceLock::new(),
            ddt: OnceLock::new(),
        }
    }

    pub fn sbox(&self) -> &SBox {
        &self.sbox
    }

    fn boolean_function(&self, i: u8) -> &BooleanFunction {
        self.boolean_functions[i as usize].get_or_init(|| BooleanFunction::project(&self.sbox, i))
    }

    fn all_boolean_functions(&self) -> [BooleanFunction; 8] {
        std::array::from_fn(|i| *self.boolean_function(i as u8))
    }

    fn walsh_spectrum(&self, i: u8) -> &WalshSpectrum {
        self.walsh_spectra[i as usize].get_or_init(|| WalshSpectrum::compute(self.boolean_function(i)))
    }

    fn all_walsh_spectra(&self) -> [WalshSpectrum; 8] {
        std::array::from_fn(|i| self.walsh_spectrum(i as u8).clone())
    }

    pub fn lat(&self) -> &Lat {
        self.lat.get_or_init(|| Lat::build(&self.sbox))
    }

    pub fn ddt(&self) -> &Ddt {
        self.ddt.get_or_init(|| Ddt::build(&self.sbox))
    }

    pub fn nonlinearity(&self) -> i32 {
        metric::nonlinearity(&self.all_walsh_spectra())
    }

    pub fn sac(&self) -> Sac {
        metric::sac(&self.sbox)
    }

    pub fn bic_nl(&self) -> PairSummary {
        metric::bic_nl(&self.all_boolean_functions())
    }

    pub fn bic_sac(&self) -> PairSummary {
        metric::bic_sac(&self.all_boolean_functions())
    }

    pub fn lap(&self) -> (i32, f64) {
        metric::lap(self.lat())
    }

    pub fn dap(&self) -> (u32, f64) {
        metric::dap(self.ddt())
    }

    pub fn algebraic_degree(&self) -> u32 {
        metric::algebraic_degree(&self.all_boolean_functions())
    }

    pub fn transparency_order(&self) -> f64 {
        metric::transparency_order(&self.sbox)
    }

    pub fn correlation_immunity(&self) -> u32 {
        metric::correlation_immunity(&self.all_walsh_spectra())
    }

    /// Build the full [`Report`], populating every cache along the way.
    pub fn report(&self) -> Report {
        let (lap_max_bias, lap) = self.lap();
        let (differential_uniformity, _dap) = self.dap();
        Report {
            nonlinearity: self.nonlinearity(),
            sac: self.sac(),
            differential_uniformity,
            lap_max_bias,
            lap,
            algebraic_degree: self.algebraic_degree(),
            transparency_order: self.transparency_order(),
            bic_nl: self.bic_nl(),
            bic_sac: self.bic_sac(),
            correlation_immunity: self.correlation_immunity(),
            balanced: self.sbox.is_balanced(),
            bijection: self.sbox.is_bijection(),
        }
    }

    /// Build the report and project it to a qualitative security summary.
    pub fn security_summary(&self) -> (Report, SecuritySummary) {
        let report = self.report();
        let summary = SecuritySummary::evaluate(&report);
        (report, summary)
    }
}
