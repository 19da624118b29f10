//! Batch color difference against a single reference color
//!
//! These functions process an entire gamut in one call.

use multiversion::multiversion;

use crate::delta_e::{Weights, delta_e_2000_weighted};
use crate::lab::Lab;

/// Compute `ΔE00(gamut[i], pixel)` for every row into `out`
///
/// `out` must be at least as long as `gamut`; extra entries are left untouched.
#[inline]
pub fn delta_e_2000_batch(gamut: &[Lab], pixel: Lab, out: &mut [f64]) {
    delta_e_2000_batch_weighted(gamut, pixel, &Weights::UNITY, out)
}

/// Compute `ΔE00(gamut[i], pixel)` with custom parametric weights
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn delta_e_2000_batch_weighted(gamut: &[Lab], pixel: Lab, weights: &Weights, out: &mut [f64]) {
    assert!(out.len() >= gamut.len());

    for (row, dst) in gamut.iter().zip(out.iter_mut()) {
        *dst = delta_e_2000_weighted(*row, pixel, weights);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delta_e::delta_e_2000;

    #[test]
    fn test_batch_matches_scalar() {
        let pixel = Lab::new(50.0, 0.0, 0.0);
        let gamut = [
            Lab::new(55.0, 5.0, 5.0),
            Lab::new(45.0, -5.0, -5.0),
            Lab::new(80.0, 0.0, 0.0),
            Lab::new(22.7233, 20.0904, -46.694),
        ];
        let mut out = [0.0; 4];

        delta_e_2000_batch(&gamut, pixel, &mut out);

        for (row, de) in gamut.iter().zip(out) {
            assert_eq!(de, delta_e_2000(*row, pixel));
        }
    }

    #[test]
    fn test_batch_leaves_tail_untouched() {
        let gamut = [Lab::new(50.0, 10.0, 10.0)];
        let mut out = [-1.0; 3];

        delta_e_2000_batch(&gamut, Lab::new(50.0, 10.0, 10.0), &mut out);

        assert!(out[0].abs() < 1e-12);
        assert_eq!(out[1], -1.0);
        assert_eq!(out[2], -1.0);
    }

    #[test]
    #[should_panic]
    fn test_batch_short_output_panics() {
        let gamut = [Lab::default(); 2];
        let mut out = [0.0; 1];
        delta_e_2000_batch(&gamut, Lab::default(), &mut out);
    }
}
