//! Reference data and reference implementation wrappers
//!
//! The conformance table is the 34-pair supplementary data set published
//! with "The CIEDE2000 Color-Difference Formula: Implementation Notes,
//! Supplementary Test Data, and Mathematical Observations" (Sharma, Wu &
//! Dalal, 2005). Expected values are rounded to 4 decimal places.

use anyhow::{Context, ensure};
use ciede_core::Lab;
use palette::color_difference::Ciede2000;
use palette::white_point::D65;
use serde::Deserialize;

const SHARMA_2005_JSON: &str = include_str!("../data/sharma_2005.json");

/// Number of pairs in the published table
pub const SHARMA_PAIR_COUNT: usize = 34;

/// One row of a ΔE00 reference table
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ReferencePair {
    /// 1-based pair number as printed in the source table
    pub pair: usize,
    /// First color
    pub lab1: [f64; 3],
    /// Second color
    pub lab2: [f64; 3],
    /// Published ΔE00
    pub delta_e: f64,
}

impl ReferencePair {
    /// First color as a [`Lab`]
    pub fn first(&self) -> Lab {
        self.lab1.into()
    }

    /// Second color as a [`Lab`]
    pub fn second(&self) -> Lab {
        self.lab2.into()
    }
}

/// Parse a reference table from JSON
pub fn parse_pairs(json: &str) -> anyhow::Result<Vec<ReferencePair>> {
    let pairs: Vec<ReferencePair> =
        serde_json::from_str(json).context("reference table is not valid JSON")?;
    for (i, pair) in pairs.iter().enumerate() {
        ensure!(
            pair.pair == i + 1,
            "reference pair {} is out of order at row {}",
            pair.pair,
            i
        );
    }
    Ok(pairs)
}

/// Load the Sharma, Wu & Dalal (2005) conformance table
pub fn sharma_pairs() -> anyhow::Result<Vec<ReferencePair>> {
    let pairs = parse_pairs(SHARMA_2005_JSON)?;
    ensure!(
        pairs.len() == SHARMA_PAIR_COUNT,
        "expected {} Sharma pairs, found {}",
        SHARMA_PAIR_COUNT,
        pairs.len()
    );
    Ok(pairs)
}

/// ΔE00 computed by the palette crate
///
/// The white point only tags the type; it does not enter the formula.
pub fn palette_delta_e_2000(lab1: Lab, lab2: Lab) -> f64 {
    let p1 = palette::Lab::<D65, f64>::new(lab1.l, lab1.a, lab1.b);
    let p2 = palette::Lab::<D65, f64>::new(lab2.l, lab2.a, lab2.b);
    p1.difference(p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sharma_table_loads() {
        let pairs = sharma_pairs().unwrap();
        assert_eq!(pairs.len(), SHARMA_PAIR_COUNT);
        assert_eq!(pairs[16].lab2, [73.0, 25.0, -18.0]);
        assert!((pairs[16].delta_e - 27.1492).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_order_table_is_rejected() {
        let json = r#"[{"pair": 2, "lab1": [0, 0, 0], "lab2": [0, 0, 0], "delta_e": 0}]"#;
        assert!(parse_pairs(json).is_err());
    }

    #[test]
    fn test_palette_identity() {
        let lab = Lab::new(50.0, 25.0, -30.0);
        assert!(palette_delta_e_2000(lab, lab).abs() < 1e-9);
    }
}
