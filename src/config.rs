//! Overlay configuration, loaded from environment variables.
//!
//! Loading never fails. A missing variable keeps the default; a value that
//! does not parse or is out of range is logged and ignored.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::consts::PRECISION_DIGITS_ENV;
use crate::precision::Precision;

/// Settings shared by the default renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverlayConfig {
    /// Fractional digits kept in rendered coordinates.
    #[serde(default)]
    pub precision: Precision,
}

impl OverlayConfig {
    /// Load from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key).map(|v| v.to_string_lossy().into_owned()))
    }

    /// Load using `lookup` to resolve variable names.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(PRECISION_DIGITS_ENV) {
            match parse_precision(&raw) {
                Ok(precision) => config.precision = precision,
                Err(reason) => {
                    warn!(var = PRECISION_DIGITS_ENV, value = %raw, %reason, "ignoring invalid precision; using default");
                }
            }
        }
        info!(precision_digits = config.precision.digits(), "overlay config loaded");
        config
    }
}

fn parse_precision(raw: &str) -> Result<Precision, String> {
    let digits = raw.trim().parse::<u32>().map_err(|e| e.to_string())?;
    Precision::new(digits).map_err(|e| e.to_string())
}
