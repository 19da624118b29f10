//! Data-parallel gamut search
//!
//! The gamut is split into fixed-size chunks that rayon processes
//! independently. Distance chunks are written straight into their slot of
//! the output vector, and per-chunk minima are combined with
//! [`Nearest::merge`], so results are identical to the sequential functions
//! for every chunk size and thread count.

use rayon::prelude::*;

use crate::delta_e::Weights;
use crate::gamut::{Nearest, check_output_len, scan_nearest};
use crate::lab::Lab;
use crate::simd::delta_e_2000_batch_weighted;
use crate::{Error, Result};

/// Rows handed to one rayon task when no chunk size is configured
pub const DEFAULT_CHUNK_LEN: usize = 1024;

pub(crate) fn distances_into_chunked(
    gamut: &[Lab],
    pixel: Lab,
    weights: &Weights,
    chunk_len: usize,
    out: &mut [f64],
) {
    let chunk_len = chunk_len.max(1);
    out.par_chunks_mut(chunk_len)
        .zip(gamut.par_chunks(chunk_len))
        .for_each(|(dst, rows)| delta_e_2000_batch_weighted(rows, pixel, weights, dst));
}

pub(crate) fn nearest_chunked(
    gamut: &[Lab],
    pixel: Lab,
    weights: &Weights,
    chunk_len: usize,
) -> Option<Nearest> {
    let chunk_len = chunk_len.max(1);
    gamut
        .par_chunks(chunk_len)
        .enumerate()
        .filter_map(|(i, rows)| scan_nearest(rows, pixel, weights, i * chunk_len))
        .reduce_with(Nearest::merge)
}

/// Parallel version of [`distances`](crate::distances)
pub fn par_distances(gamut: &[Lab], pixel: Lab) -> Vec<f64> {
    let mut out = vec![0.0; gamut.len()];
    distances_into_chunked(gamut, pixel, &Weights::UNITY, DEFAULT_CHUNK_LEN, &mut out);
    out
}

/// Parallel version of [`distances_into`](crate::distances_into)
pub fn par_distances_into(gamut: &[Lab], pixel: Lab, out: &mut [f64]) -> Result<()> {
    check_output_len(gamut, out)?;
    distances_into_chunked(gamut, pixel, &Weights::UNITY, DEFAULT_CHUNK_LEN, out);
    Ok(())
}

/// Parallel version of [`nearest`](crate::nearest)
pub fn par_nearest(gamut: &[Lab], pixel: Lab) -> Result<Nearest> {
    nearest_chunked(gamut, pixel, &Weights::UNITY, DEFAULT_CHUNK_LEN).ok_or(Error::EmptyInput)
}

/// Parallel version of [`closest`](crate::closest)
pub fn par_closest(gamut: &[Lab], pixel: Lab) -> Result<usize> {
    par_nearest(gamut, pixel).map(|n| n.index)
}
