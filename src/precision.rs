//! Coordinate normalization for rendered overlay geometry.
//!
//! Selection geometry arrives here after the host has already applied its
//! camera and shape transforms, so it is full of floating-point noise such as
//! `12.000000000000002`. Writing that noise into an SVG attribute makes the
//! markup change on every frame even when nothing visibly moved. Every value
//! that leaves this crate is therefore quantized to a fixed number of
//! fractional digits first.
//!
//! ROUNDING
//! ========
//! Values are rounded half toward positive infinity (`2.5 -> 3`, `-2.5 -> -2`),
//! matching how browsers round when the same quantization runs in script.
//!
//! NON-FINITE INPUT
//! ================
//! `NaN` and the infinities are returned unchanged, as is any value too large to
//! scale without overflowing. Validation of caller geometry is the caller's
//! job; this layer renders whatever it is handed.

#[cfg(test)]
#[path = "precision_test.rs"]
mod precision_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DOM_PRECISION_DIGITS, FIXED_PRECISION_DIGITS, MAX_PRECISION_DIGITS};

/// Exact powers of ten indexed by digit count, up to [`MAX_PRECISION_DIGITS`].
const POWERS_OF_TEN: [f64; MAX_PRECISION_DIGITS as usize + 1] = [
    1.0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12,
];

/// Errors produced when building a [`Precision`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrecisionError {
    /// The requested digit count exceeds [`MAX_PRECISION_DIGITS`].
    #[error("precision of {digits} fractional digits exceeds maximum of {max}")]
    TooManyDigits { digits: u32, max: u32 },
}

/// A fixed number of fractional decimal digits to quantize coordinates to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Precision {
    digits: u32,
    scale: f64,
}

impl Precision {
    /// Precision used for coordinates written into DOM/SVG attributes.
    pub const DOM: Self = Self { digits: DOM_PRECISION_DIGITS, scale: 1e4 };

    /// Coarser two-digit precision.
    pub const FIXED: Self = Self { digits: FIXED_PRECISION_DIGITS, scale: 1e2 };

    /// Build a precision keeping `digits` fractional digits.
    ///
    /// # Errors
    ///
    /// Returns [`PrecisionError::TooManyDigits`] when `digits` exceeds
    /// [`MAX_PRECISION_DIGITS`].
    pub fn new(digits: u32) -> Result<Self, PrecisionError> {
        match POWERS_OF_TEN.get(digits as usize) {
            Some(&scale) => Ok(Self { digits, scale }),
            None => Err(PrecisionError::TooManyDigits { digits, max: MAX_PRECISION_DIGITS }),
        }
    }

    /// Number of fractional digits kept.
    #[must_use]
    pub fn digits(self) -> u32 {
        self.digits
    }

    /// Quantize `value` to this precision.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        if !value.is_finite() {
            return value;
        }
        let scaled = value * self.scale;
        if !scaled.is_finite() {
            return value;
        }
        let rounded = round_half_up(scaled) / self.scale;
        // Collapse -0 so it never renders as "-0".
        if rounded == 0.0 { 0.0 } else { rounded }
    }

    /// Quantize `value` and format it as attribute text.
    #[must_use]
    pub fn format(self, value: f64) -> String {
        format_coord(self.normalize(value))
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::DOM
    }
}

impl TryFrom<u32> for Precision {
    type Error = PrecisionError;

    fn try_from(digits: u32) -> Result<Self, Self::Error> {
        Self::new(digits)
    }
}

impl From<Precision> for u32 {
    fn from(precision: Precision) -> Self {
        precision.digits
    }
}

/// Quantize a coordinate to DOM precision (4 fractional digits).
#[must_use]
pub fn to_dom_precision(value: f64) -> f64 {
    Precision::DOM.normalize(value)
}

/// Quantize a value to 2 fractional digits.
#[must_use]
pub fn to_fixed(value: f64) -> f64 {
    Precision::FIXED.normalize(value)
}

/// Format a coordinate as attribute text.
///
/// Uses the shortest decimal that round-trips, with no trailing `.0` on whole
/// numbers. Non-finite values are spelled the way the DOM spells them.
#[must_use]
pub fn format_coord(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}

/// Round to the nearest integer, resolving exact halves toward +∞.
///
/// Compares the fractional part instead of computing `floor(x + 0.5)`, which
/// misrounds `0.49999999999999994` up to `1`.
fn round_half_up(scaled: f64) -> f64 {
    let floor = scaled.floor();
    if scaled - floor >= 0.5 { floor + 1.0 } else { floor }
}
