//! CIEDE2000 color difference
//!
//! Reference: G. Sharma, W. Wu, E. N. Dalal, "The CIEDE2000 Color-Difference
//! Formula: Implementation Notes, Supplementary Test Data, and Mathematical
//! Observations", Color Research & Application 30(1), 2005.
//!
//! Hue angles are carried in degrees and converted to radians only at the
//! trigonometric calls.

use crate::lab::{Lab, hue_angle};

/// 25^7
const POW25_7: f64 = 6_103_515_625.0;

/// Parametric weighting factors for lightness, chroma and hue
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    /// Lightness weight k_L
    pub k_l: f64,
    /// Chroma weight k_C
    pub k_c: f64,
    /// Hue weight k_H
    pub k_h: f64,
}

impl Weights {
    /// Reference conditions, k_L = k_C = k_H = 1
    pub const UNITY: Self = Self {
        k_l: 1.0,
        k_c: 1.0,
        k_h: 1.0,
    };

    /// Textile industry weights, k_L = 2
    pub const TEXTILES: Self = Self {
        k_l: 2.0,
        k_c: 1.0,
        k_h: 1.0,
    };
}

impl Default for Weights {
    fn default() -> Self {
        Self::UNITY
    }
}

/// Calculate CIEDE2000 color difference
///
/// This is the industry-standard color difference formula.
/// A difference of 1.0 is approximately the just-noticeable difference.
///
/// The formula is total over finite inputs. NaN or infinite components are
/// not rejected and propagate through the arithmetic.
#[inline]
pub fn delta_e_2000(lab1: Lab, lab2: Lab) -> f64 {
    delta_e_2000_weighted(lab1, lab2, &Weights::UNITY)
}

/// Calculate CIEDE2000 color difference with custom parametric weights
#[inline]
pub fn delta_e_2000_weighted(lab1: Lab, lab2: Lab, weights: &Weights) -> f64 {
    let Lab {
        l: l1,
        a: a1,
        b: b1,
    } = lab1;
    let Lab {
        l: l2,
        a: a2,
        b: b2,
    } = lab2;

    // Chroma and the a* correction factor G
    let c1 = (a1 * a1 + b1 * b1).sqrt();
    let c2 = (a2 * a2 + b2 * b2).sqrt();
    let c_bar = (c1 + c2) / 2.0;

    let c_bar_7 = c_bar.powi(7);
    let g = 0.5 * (1.0 - (c_bar_7 / (c_bar_7 + POW25_7)).sqrt());

    let a1_prime = a1 * (1.0 + g);
    let a2_prime = a2 * (1.0 + g);

    let c1_prime = (a1_prime * a1_prime + b1 * b1).sqrt();
    let c2_prime = (a2_prime * a2_prime + b2 * b2).sqrt();

    let h1_prime = hue_angle(a1_prime, b1);
    let h2_prime = hue_angle(a2_prime, b2);

    // Differences
    let delta_l_prime = l2 - l1;
    let delta_c_prime = c2_prime - c1_prime;

    let c_prime_product = c1_prime * c2_prime;

    let delta_h_prime = if c_prime_product == 0.0 {
        0.0
    } else {
        let diff = h2_prime - h1_prime;
        if diff > 180.0 {
            diff - 360.0
        } else if diff < -180.0 {
            diff + 360.0
        } else {
            diff
        }
    };

    let delta_big_h_prime =
        2.0 * c_prime_product.sqrt() * (delta_h_prime.to_radians() / 2.0).sin();

    // Means
    let l_bar_prime = (l1 + l2) / 2.0;
    let c_bar_prime = (c1_prime + c2_prime) / 2.0;

    let h_prime_sum = h1_prime + h2_prime;
    let h_bar_prime = if c_prime_product == 0.0 {
        h_prime_sum
    } else if (h1_prime - h2_prime).abs() <= 180.0 {
        h_prime_sum / 2.0
    } else if h_prime_sum < 360.0 {
        (h_prime_sum + 360.0) / 2.0
    } else {
        (h_prime_sum - 360.0) / 2.0
    };

    // Weighting functions
    let t = 1.0 - 0.17 * (h_bar_prime - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_bar_prime).to_radians().cos()
        + 0.32 * (3.0 * h_bar_prime + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_bar_prime - 63.0).to_radians().cos();

    let l_bar_minus_50_sq = (l_bar_prime - 50.0).powi(2);
    let s_l = 1.0 + (0.015 * l_bar_minus_50_sq) / (20.0 + l_bar_minus_50_sq).sqrt();
    let s_c = 1.0 + 0.045 * c_bar_prime;
    let s_h = 1.0 + 0.015 * c_bar_prime * t;

    // Rotation term
    let c_bar_prime_7 = c_bar_prime.powi(7);
    let r_c = 2.0 * (c_bar_prime_7 / (c_bar_prime_7 + POW25_7)).sqrt();
    let delta_theta = 30.0 * (-((h_bar_prime - 275.0) / 25.0).powi(2)).exp();
    let r_t = -r_c * (2.0 * delta_theta).to_radians().sin();

    let term_l = delta_l_prime / (weights.k_l * s_l);
    let term_c = delta_c_prime / (weights.k_c * s_c);
    let term_h = delta_big_h_prime / (weights.k_h * s_h);

    (term_l * term_l + term_c * term_c + term_h * term_h + r_t * term_c * term_h).sqrt()
}
