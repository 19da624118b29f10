//! Agreement statistics between two ΔE00 implementations
//!
//! Each sample is the absolute difference between the values two
//! implementations report for the same pair of colors.

use ciede_core::Lab;

/// Statistics over absolute ΔE00 disagreements
#[derive(Debug, Clone)]
pub struct ErrorStats {
    /// Mean absolute difference
    pub mean: f64,
    /// Maximum absolute difference
    pub max: f64,
    /// 95th percentile absolute difference
    pub p95: f64,
    /// Index of the pair with the largest difference
    pub worst: Option<usize>,
    /// Number of samples
    pub count: usize,
}

impl ErrorStats {
    /// Check that every sample agrees to within `tolerance`
    pub fn within(&self, tolerance: f64) -> bool {
        self.max <= tolerance
    }

    /// Agreement to 4 decimal places, the precision of published tables
    pub fn is_conformant(&self) -> bool {
        self.within(1e-4)
    }

    /// Bit-for-bit agreement
    pub fn is_exact(&self) -> bool {
        self.max == 0.0
    }
}

/// Compare two implementations over a set of color pairs
///
/// A pair where exactly one implementation reports NaN counts as an
/// infinite difference; both reporting NaN counts as agreement.
pub fn compare_implementations<F, G>(pairs: &[(Lab, Lab)], ours: F, reference: G) -> ErrorStats
where
    F: Fn(Lab, Lab) -> f64,
    G: Fn(Lab, Lab) -> f64,
{
    let diffs: Vec<f64> = pairs
        .iter()
        .map(|&(lab1, lab2)| {
            let a = ours(lab1, lab2);
            let b = reference(lab1, lab2);
            match (a.is_nan(), b.is_nan()) {
                (true, true) => 0.0,
                (false, false) => (a - b).abs(),
                _ => f64::INFINITY,
            }
        })
        .collect();

    let worst = diffs
        .iter()
        .enumerate()
        .max_by(|x, y| x.1.total_cmp(y.1))
        .map(|(i, _)| i);

    let mut sorted = diffs.clone();
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    let mean = if count == 0 {
        0.0
    } else {
        sorted.iter().sum::<f64>() / count as f64
    };
    let max = sorted.last().copied().unwrap_or(0.0);
    let p95_idx = (count as f64 * 0.95) as usize;
    let p95 = sorted.get(p95_idx.min(count.saturating_sub(1))).copied().unwrap_or(0.0);

    ErrorStats {
        mean,
        max,
        p95,
        worst,
        count,
    }
}
