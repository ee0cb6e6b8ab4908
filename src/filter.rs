//! Spectral filter trait
//!
//! The per-channel callback a host filter framework drives once per block,
//! plus the JSON parameter surface it uses for UI and automation.

use crate::band::{BAND_COUNT, PARAM_COUNT};
use crate::error::{EqError, Result};
use crate::params;
use crate::shaper::SpectralShaper;
use crate::table;
use serde_json::{json, Value};

/// Base trait for spectral-domain filters
pub trait SpectralFilter: Send + Sync {
    /// Unique identifier for this filter instance
    fn id(&self) -> &str;

    /// Filter type name (e.g., "spectral-eq")
    fn filter_type(&self) -> &str;

    /// Process one channel's interleaved `re, im` half-spectrum in place
    fn filter_channel(&mut self, buffer: &mut [f32], bin_count: usize);

    /// Reset filter state between streams
    fn reset(&mut self);

    /// Get current parameters as JSON
    fn get_params(&self) -> Value;

    /// Set parameters from JSON
    fn set_params(&mut self, params: &Value) -> Result<()>;
}

impl SpectralFilter for SpectralShaper {
    fn id(&self) -> &str {
        SpectralShaper::id(self)
    }

    fn filter_type(&self) -> &str {
        "spectral-eq"
    }

    fn filter_channel(&mut self, buffer: &mut [f32], bin_count: usize) {
        SpectralShaper::filter_channel(self, buffer, bin_count);
    }

    fn reset(&mut self) {
        // The curve is rebuilt every block; nothing to clear
    }

    fn get_params(&self) -> Value {
        json!({
            "bands": self.gains().to_vec(),
            "params": params::param_surface(&self.config().bounds),
            "segments": self.config().segments,
        })
    }

    /// Accepts `{"bands": [g1, g2, ...]}`, band 1 first
    ///
    /// Every value is validated before any is stored, so a rejected request
    /// leaves all gains unchanged.
    fn set_params(&mut self, params: &Value) -> Result<()> {
        let bands = params.get("bands").ok_or_else(|| EqError::MissingParameter {
            param: "bands".to_string(),
        })?;
        let values: Vec<f32> = serde_json::from_value(bands.clone())?;

        if values.len() > BAND_COUNT {
            return Err(EqError::OutOfRange {
                index: PARAM_COUNT,
                count: BAND_COUNT,
            });
        }
        for (i, &value) in values.iter().enumerate() {
            table::validate_assignment(&self.config().bounds, i + 1, value)?;
        }
        for (i, &value) in values.iter().enumerate() {
            self.set_param(i + 1, value)?;
        }
        Ok(())
    }
}
