//! CIELAB (L*a*b*) color coordinates
//!
//! - L*: Lightness (0 = black, 100 = white)
//! - a*: Green-red axis (negative = green, positive = red)
//! - b*: Blue-yellow axis (negative = blue, positive = yellow)
//!
//! No range checks are made: out-of-gamut and physically implausible values
//! are accepted everywhere and simply produce a numeric color difference.

use bytemuck::{Pod, Zeroable};

use crate::{Error, Result};

/// CIELAB color coordinates
///
/// The layout is three packed `f64` values, so a row-major `N x 3` buffer of
/// doubles can be viewed as `&[Lab]` without copying (see [`gamut_from_flat`]).
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Lab {
    /// Lightness (0 to 100)
    pub l: f64,
    /// Green-red axis (typically -128 to 127)
    pub a: f64,
    /// Blue-yellow axis (typically -128 to 127)
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Create Lab from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            l: arr[0],
            a: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    /// Get chroma (colorfulness)
    #[inline]
    pub fn chroma(&self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }

    /// Get hue angle in degrees (0-360)
    ///
    /// Achromatic colors (a* = b* = 0) report a hue of 0.
    #[inline]
    pub fn hue_degrees(&self) -> f64 {
        hue_angle(self.a, self.b)
    }
}

/// Hue angle of the (a, b) vector in degrees, in `[0, 360)`
#[inline]
pub(crate) fn hue_angle(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a).to_degrees();
    if h < 0.0 { h + 360.0 } else { h }
}

/// View a flat row-major buffer of `3 * N` doubles as `N` Lab colors
///
/// Returns [`Error::FlatLength`] when the buffer length is not a multiple of 3.
pub fn gamut_from_flat(data: &[f64]) -> Result<&[Lab]> {
    bytemuck::try_cast_slice(data).map_err(|_| Error::FlatLength(data.len()))
}

impl From<[f64; 3]> for Lab {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Lab> for [f64; 3] {
    fn from(lab: Lab) -> Self {
        lab.to_array()
    }
}
