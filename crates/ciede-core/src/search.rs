//! Configured gamut search
//!
//! [`GamutSearch`] bundles parametric weights with the choice between the
//! sequential scan and the rayon path. Both paths give identical results,
//! so the options only trade latency for throughput.

use crate::delta_e::Weights;
use crate::gamut::{Nearest, check_output_len, scan_nearest};
use crate::lab::Lab;
use crate::parallel::{DEFAULT_CHUNK_LEN, distances_into_chunked, nearest_chunked};
use crate::simd::delta_e_2000_batch_weighted;
use crate::{Error, Result};

/// Options for gamut searches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    /// Parametric weights (unity for standard CIEDE2000)
    pub weights: Weights,
    /// Allow the rayon path for large gamuts
    pub parallel: bool,
    /// Gamuts shorter than this are always scanned sequentially
    pub min_parallel_len: usize,
    /// Rows per parallel task (0 is treated as 1)
    pub chunk_len: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            weights: Weights::UNITY,
            parallel: true,
            min_parallel_len: 4 * DEFAULT_CHUNK_LEN,
            chunk_len: DEFAULT_CHUNK_LEN,
        }
    }
}

impl SearchOptions {
    /// Options that never use the rayon path
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Default::default()
        }
    }
}

/// Gamut search with fixed options
#[derive(Debug, Clone, Copy, Default)]
pub struct GamutSearch {
    options: SearchOptions,
}

impl GamutSearch {
    /// Create a search with the given options
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    fn use_parallel(&self, len: usize) -> bool {
        self.options.parallel && len >= self.options.min_parallel_len
    }

    /// Color difference between every gamut entry and `pixel`
    pub fn distances(&self, gamut: &[Lab], pixel: Lab) -> Vec<f64> {
        let mut out = vec![0.0; gamut.len()];
        self.fill(gamut, pixel, &mut out);
        out
    }

    /// Write the color difference of every gamut entry into `out`
    pub fn distances_into(&self, gamut: &[Lab], pixel: Lab, out: &mut [f64]) -> Result<()> {
        check_output_len(gamut, out)?;
        self.fill(gamut, pixel, out);
        Ok(())
    }

    fn fill(&self, gamut: &[Lab], pixel: Lab, out: &mut [f64]) {
        let weights = &self.options.weights;
        if self.use_parallel(gamut.len()) {
            distances_into_chunked(gamut, pixel, weights, self.options.chunk_len, out);
        } else {
            delta_e_2000_batch_weighted(gamut, pixel, weights, out);
        }
    }

    /// Closest gamut entry and its distance
    pub fn nearest(&self, gamut: &[Lab], pixel: Lab) -> Result<Nearest> {
        let weights = &self.options.weights;
        let found = if self.use_parallel(gamut.len()) {
            nearest_chunked(gamut, pixel, weights, self.options.chunk_len)
        } else {
            scan_nearest(gamut, pixel, weights, 0)
        };
        found.ok_or(Error::EmptyInput)
    }

    /// Index of the closest gamut entry
    pub fn closest(&self, gamut: &[Lab], pixel: Lab) -> Result<usize> {
        self.nearest(gamut, pixel).map(|n| n.index)
    }
}
