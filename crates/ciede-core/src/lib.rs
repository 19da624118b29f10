//! # ciede - CIEDE2000 color difference and gamut search
//!
//! Computes the CIEDE2000 (ΔE00) perceptual color difference between
//! CIELAB colors, and searches a gamut of candidate colors for the entry
//! closest to a reference pixel.
//!
//! ## Features
//!
//! - **Exact**: follows the Sharma, Wu & Dalal (2005) formulation step by
//!   step, including the hue wraparound and achromatic special cases
//! - **Batch**: one loop over the gamut, built per CPU target and picked at
//!   runtime
//! - **Parallel**: rayon search with results identical to the sequential scan
//! - **Zero-copy**: flat `N x 3` buffers of doubles are viewed as `&[Lab]`
//!
//! ## Quick Start
//!
//! ```
//! use ciede_core::{Lab, closest, delta_e_2000, distances};
//!
//! let gamut = [
//!     Lab::new(50.0, 10.0, 10.0),
//!     Lab::new(50.0, -10.0, -10.0),
//!     Lab::new(80.0, 0.0, 0.0),
//! ];
//! let pixel = Lab::new(50.0, 10.0, 10.0);
//!
//! let de = distances(&gamut, pixel);
//! assert!(de[0] < 1e-9);
//! assert_eq!(closest(&gamut, pixel).unwrap(), 0);
//! assert!(delta_e_2000(gamut[1], pixel) > 20.0);
//! ```

pub mod delta_e;
pub mod error;
pub mod gamut;
pub mod lab;
pub mod parallel;
pub mod search;
pub mod simd;

pub use delta_e::{Weights, delta_e_2000, delta_e_2000_weighted};
pub use error::{Error, Result};
pub use gamut::{
    Nearest, closest, closest_flat, distances, distances_flat, distances_into, nearest,
};
pub use lab::{Lab, gamut_from_flat};
pub use parallel::{par_closest, par_distances, par_distances_into, par_nearest};
pub use search::{GamutSearch, SearchOptions};
