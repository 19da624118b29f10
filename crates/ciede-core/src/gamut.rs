//! Gamut search
//!
//! Evaluates CIEDE2000 between one reference pixel and every entry of a
//! candidate gamut, either returning the full distance vector or the index
//! of the closest entry.
//!
//! Distances are always `ΔE00(gamut[i], pixel)`, in gamut row order.

use crate::delta_e::{Weights, delta_e_2000_weighted};
use crate::lab::{Lab, gamut_from_flat};
use crate::simd::delta_e_2000_batch_weighted;
use crate::{Error, Result};

/// Closest gamut entry and its color difference
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest {
    /// Row index in the gamut
    pub index: usize,
    /// ΔE00 between that row and the reference pixel
    pub delta_e: f64,
}

impl Nearest {
    /// Pick the better of two candidates found in any order
    ///
    /// Smaller distance wins, NaN loses to any number, and equal distances
    /// (or two NaNs) fall back to the lower row index. This is the same
    /// outcome a left-to-right scan produces, so partial results can be
    /// merged in any grouping.
    pub fn merge(self, other: Self) -> Self {
        let lower_index = if other.index < self.index { other } else { self };
        match (self.delta_e.is_nan(), other.delta_e.is_nan()) {
            (false, true) => self,
            (true, false) => other,
            (true, true) => lower_index,
            (false, false) => {
                if other.delta_e < self.delta_e {
                    other
                } else if self.delta_e < other.delta_e {
                    self
                } else {
                    lower_index
                }
            }
        }
    }
}

/// Whether a scanned distance should replace the incumbent minimum
#[inline]
fn improves_on(candidate: f64, incumbent: f64) -> bool {
    candidate < incumbent || (incumbent.is_nan() && !candidate.is_nan())
}

/// Left-to-right arg-min scan; `offset` is added to reported indices
pub(crate) fn scan_nearest(
    gamut: &[Lab],
    pixel: Lab,
    weights: &Weights,
    offset: usize,
) -> Option<Nearest> {
    let (first, rest) = gamut.split_first()?;

    let mut best = Nearest {
        index: offset,
        delta_e: delta_e_2000_weighted(*first, pixel, weights),
    };

    for (i, row) in rest.iter().enumerate() {
        let delta_e = delta_e_2000_weighted(*row, pixel, weights);
        if improves_on(delta_e, best.delta_e) {
            best = Nearest {
                index: offset + i + 1,
                delta_e,
            };
        }
    }

    Some(best)
}

pub(crate) fn check_output_len(gamut: &[Lab], out: &[f64]) -> Result<()> {
    if out.len() != gamut.len() {
        return Err(Error::BufferSize {
            expected: gamut.len(),
            actual: out.len(),
        });
    }
    Ok(())
}

/// Compute the color difference between every gamut entry and `pixel`
///
/// An empty gamut yields an empty vector.
pub fn distances(gamut: &[Lab], pixel: Lab) -> Vec<f64> {
    let mut out = vec![0.0; gamut.len()];
    delta_e_2000_batch_weighted(gamut, pixel, &Weights::UNITY, &mut out);
    out
}

/// Write the color difference of every gamut entry into `out`
///
/// `out` must have exactly one slot per gamut entry.
pub fn distances_into(gamut: &[Lab], pixel: Lab, out: &mut [f64]) -> Result<()> {
    check_output_len(gamut, out)?;
    delta_e_2000_batch_weighted(gamut, pixel, &Weights::UNITY, out);
    Ok(())
}

/// Find the gamut entry closest to `pixel`
///
/// Ties resolve to the lowest index. Returns [`Error::EmptyInput`] for an
/// empty gamut.
pub fn nearest(gamut: &[Lab], pixel: Lab) -> Result<Nearest> {
    scan_nearest(gamut, pixel, &Weights::UNITY, 0).ok_or(Error::EmptyInput)
}

/// Index of the gamut entry closest to `pixel`
pub fn closest(gamut: &[Lab], pixel: Lab) -> Result<usize> {
    nearest(gamut, pixel).map(|n| n.index)
}

/// [`distances`] over a flat row-major `N x 3` buffer
pub fn distances_flat(gamut: &[f64], pixel: [f64; 3]) -> Result<Vec<f64>> {
    Ok(distances(gamut_from_flat(gamut)?, pixel.into()))
}

/// [`closest`] over a flat row-major `N x 3` buffer
pub fn closest_flat(gamut: &[f64], pixel: [f64; 3]) -> Result<usize> {
    closest(gamut_from_flat(gamut)?, pixel.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_gamut() -> Vec<Lab> {
        vec![
            Lab::new(50.0, 10.0, 10.0),
            Lab::new(50.0, -10.0, -10.0),
            Lab::new(80.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn test_distances_exact_match() {
        let pixel = Lab::new(50.0, 10.0, 10.0);
        let de = distances(&sample_gamut(), pixel);

        assert_eq!(de.len(), 3);
        assert!(de[0].abs() < 1e-9);
        assert!((de[1] - 26.661813738872787).abs() < 1e-9, "got {}", de[1]);
        assert!((de[2] - 27.800776353438216).abs() < 1e-9, "got {}", de[2]);
        assert_eq!(closest(&sample_gamut(), pixel), Ok(0));
    }

    #[test]
    fn test_distances_empty() {
        assert!(distances(&[], Lab::new(50.0, 0.0, 0.0)).is_empty());
    }

    #[test]
    fn test_closest_empty() {
        assert_eq!(closest(&[], Lab::new(50.0, 0.0, 0.0)), Err(Error::EmptyInput));
        assert_eq!(nearest(&[], Lab::default()), Err(Error::EmptyInput));
    }

    #[test]
    fn test_closest_first_of_ties() {
        let pixel = Lab::new(50.0, 0.0, 0.0);
        let gamut = [
            Lab::new(90.0, 0.0, 0.0),
            Lab::new(60.0, 0.0, 0.0),
            Lab::new(60.0, 0.0, 0.0),
            Lab::new(60.0, 0.0, 0.0),
        ];
        assert_eq!(closest(&gamut, pixel), Ok(1));
    }

    #[test]
    fn test_nan_never_displaces_a_number() {
        let pixel = Lab::new(50.0, 0.0, 0.0);
        let gamut = [
            Lab::new(60.0, 0.0, 0.0),
            Lab::new(f64::NAN, 0.0, 0.0),
            Lab::new(70.0, 0.0, 0.0),
        ];
        assert_eq!(closest(&gamut, pixel), Ok(0));
    }

    #[test]
    fn test_number_displaces_leading_nan() {
        let pixel = Lab::new(50.0, 0.0, 0.0);
        let gamut = [
            Lab::new(f64::NAN, 0.0, 0.0),
            Lab::new(90.0, 0.0, 0.0),
            Lab::new(60.0, 0.0, 0.0),
        ];
        let found = nearest(&gamut, pixel).unwrap();
        assert_eq!(found.index, 2);
        assert!(!found.delta_e.is_nan());
    }

    #[test]
    fn test_all_nan_is_index_zero() {
        let gamut = [Lab::new(f64::NAN, 0.0, 0.0); 4];
        assert_eq!(closest(&gamut, Lab::new(50.0, 0.0, 0.0)), Ok(0));
    }

    #[test]
    fn test_distances_into_length_mismatch() {
        let mut out = [0.0; 2];
        let err = distances_into(&sample_gamut(), Lab::default(), &mut out).unwrap_err();
        assert_eq!(
            err,
            Error::BufferSize {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_distances_into_matches_distances() {
        let pixel = Lab::new(40.0, 12.0, -7.0);
        let mut out = [0.0; 3];
        distances_into(&sample_gamut(), pixel, &mut out).unwrap();
        assert_eq!(out.to_vec(), distances(&sample_gamut(), pixel));
    }

    #[test]
    fn test_merge_is_order_independent() {
        let a = Nearest {
            index: 3,
            delta_e: 1.5,
        };
        let b = Nearest {
            index: 7,
            delta_e: 1.5,
        };
        let c = Nearest {
            index: 1,
            delta_e: f64::NAN,
        };
        assert_eq!(a.merge(b), b.merge(a));
        assert_eq!(a.merge(b).index, 3);
        assert_eq!(a.merge(c), a);
        assert_eq!(c.merge(a), a);
    }

    #[test]
    fn test_flat_entry_points() {
        let flat = [50.0, 10.0, 10.0, 50.0, -10.0, -10.0, 80.0, 0.0, 0.0];
        let de = distances_flat(&flat, [50.0, 10.0, 10.0]).unwrap();
        assert_eq!(de.len(), 3);
        assert_eq!(closest_flat(&flat, [80.0, 0.0, 0.0]), Ok(2));
        assert_eq!(closest_flat(&flat[..4], [80.0, 0.0, 0.0]), Err(Error::FlatLength(4)));
    }
}
