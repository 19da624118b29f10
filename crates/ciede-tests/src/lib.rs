//! # ciede-tests
//!
//! Conformance and parity testing for ciede-core.
//!
//! This crate provides:
//! - The published CIEDE2000 reference pairs (Sharma, Wu & Dalal 2005)
//! - An independent reference implementation to compare against (palette)
//! - Gamut pattern generators for search and determinism tests
//! - Error statistics between two ΔE00 implementations
//!
//! ## Test Categories
//!
//! 1. **Conformance**: the 34 published pairs to 4 decimal places
//! 2. **Parity**: agreement with palette on generated colors
//! 3. **Search**: distance vectors, arg-min, ties, NaN handling
//! 4. **Determinism**: rayon and sequential paths give identical output
//! 5. **Flat buffers**: row-major `N x 3` input handling

pub mod accuracy;
pub mod patterns;
pub mod reference;

pub use accuracy::{ErrorStats, compare_implementations};
pub use patterns::{GamutPattern, generate_gamut};
pub use reference::{ReferencePair, palette_delta_e_2000, sharma_pairs};
