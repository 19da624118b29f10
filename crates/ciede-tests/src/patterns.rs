//! Gamut pattern generation
//!
//! Provides candidate gamuts that exercise different parts of the formula.

use ciede_core::Lab;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Gamut pattern types
#[derive(Debug, Clone, Copy)]
pub enum GamutPattern {
    /// Neutral axis, L* from 0 to 100
    Lightness,
    /// Constant L* and chroma, hue sweeping 0-360
    HueRing { lightness: f64, chroma: f64 },
    /// Uniform random L* in [0, 100], a*/b* in [-128, 128) with seed
    Random(u64),
    /// Random colors with a few exact duplicates, for tie-break tests
    RandomWithDuplicates(u64),
    /// Colors just either side of the a* = 0 line on the negative b* axis,
    /// where hue wraps from 360 back to 0
    HueSeam,
    /// Out-of-range and extreme coordinates
    Extreme,
}

/// Generate a gamut with `count` entries
pub fn generate_gamut(pattern: GamutPattern, count: usize) -> Vec<Lab> {
    match pattern {
        GamutPattern::Lightness => (0..count)
            .map(|i| {
                let t = if count > 1 {
                    i as f64 / (count - 1) as f64
                } else {
                    0.0
                };
                Lab::new(100.0 * t, 0.0, 0.0)
            })
            .collect(),
        GamutPattern::HueRing { lightness, chroma } => (0..count)
            .map(|i| {
                let hue = (i as f64 / count as f64) * std::f64::consts::TAU;
                Lab::new(lightness, chroma * hue.cos(), chroma * hue.sin())
            })
            .collect(),
        GamutPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count).map(|_| random_lab(&mut rng)).collect()
        }
        GamutPattern::RandomWithDuplicates(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut gamut: Vec<Lab> = (0..count).map(|_| random_lab(&mut rng)).collect();
            if count > 1 {
                for _ in 0..count / 8 + 1 {
                    let src = rng.gen_range(0..count);
                    let dst = rng.gen_range(0..count);
                    gamut[dst] = gamut[src];
                }
            }
            gamut
        }
        GamutPattern::HueSeam => {
            let offsets = [-0.01, -0.001, -0.0001, 0.0, 0.0001, 0.001, 0.01];
            (0..count)
                .map(|i| Lab::new(50.0, offsets[i % offsets.len()], -2.49 - i as f64 * 0.01))
                .collect()
        }
        GamutPattern::Extreme => {
            let colors = [
                Lab::new(0.0, 0.0, 0.0),
                Lab::new(100.0, 0.0, 0.0),
                Lab::new(-25.0, 0.0, 0.0),
                Lab::new(150.0, 0.0, 0.0),
                Lab::new(50.0, 500.0, 0.0),
                Lab::new(50.0, 0.0, -500.0),
                Lab::new(50.0, -300.0, 300.0),
                Lab::new(1e-9, 1e-9, -1e-9),
            ];
            (0..count).map(|i| colors[i % colors.len()]).collect()
        }
    }
}

fn random_lab(rng: &mut ChaCha8Rng) -> Lab {
    Lab::new(
        rng.gen_range(0.0..100.0),
        rng.gen_range(-128.0..128.0),
        rng.gen_range(-128.0..128.0),
    )
}

/// Standard gamut sizes
pub mod sizes {
    pub const TINY: usize = 8;
    pub const SMALL: usize = 256;
    pub const MEDIUM: usize = 4096;
    pub const LARGE: usize = 65536;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lightness_endpoints() {
        let gamut = generate_gamut(GamutPattern::Lightness, 11);
        assert_eq!(gamut[0], Lab::new(0.0, 0.0, 0.0));
        assert_eq!(gamut[10], Lab::new(100.0, 0.0, 0.0));
    }

    #[test]
    fn test_hue_ring_constant_chroma() {
        let gamut = generate_gamut(
            GamutPattern::HueRing {
                lightness: 60.0,
                chroma: 40.0,
            },
            36,
        );
        assert!(gamut.iter().all(|c| (c.chroma() - 40.0).abs() < 1e-9));
    }

    #[test]
    fn test_random_deterministic() {
        let a = generate_gamut(GamutPattern::Random(42), 100);
        let b = generate_gamut(GamutPattern::Random(42), 100);
        assert_eq!(a, b);
    }

    #[test]
    fn test_sizes() {
        for pattern in [
            GamutPattern::Lightness,
            GamutPattern::RandomWithDuplicates(7),
            GamutPattern::HueSeam,
            GamutPattern::Extreme,
        ] {
            assert_eq!(generate_gamut(pattern, 0).len(), 0);
            assert_eq!(generate_gamut(pattern, 13).len(), 13);
        }
    }
}
