//! Shared numeric constants for the overlay crate.

// ── Precision ───────────────────────────────────────────────────

/// Fractional digits kept for coordinates written into DOM/SVG attributes.
pub const DOM_PRECISION_DIGITS: u32 = 4;

/// Fractional digits kept by the coarser fixed-precision helper.
pub const FIXED_PRECISION_DIGITS: u32 = 2;

/// Upper bound on configurable fractional digits. Beyond this the scaled
/// value runs out of `f64` mantissa for ordinary canvas coordinates.
pub const MAX_PRECISION_DIGITS: u32 = 12;

// ── Configuration ───────────────────────────────────────────────

/// Environment variable overriding the attribute precision digit count.
pub const PRECISION_DIGITS_ENV: &str = "OVERLAY_DOM_PRECISION_DIGITS";
