//! Gain bounds, equalizer configuration and the host parameter surface

use crate::band::{Band, PARAM_COUNT, WET_PARAM};
use crate::error::{EqError, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Neutral band gain (no change to the spectrum)
pub const UNITY_GAIN: f32 = 1.0;

/// Number of equal-width spline segments across the half-spectrum
pub const DEFAULT_SEGMENTS: usize = 16;

/// Label of the reserved wet/mix slot
pub const WET_LABEL: &str = "Wet";

const WET_MIN: f32 = 0.0;
const WET_MAX: f32 = 1.0;

// ============================================================================
// Gain Bounds
// ============================================================================

/// Legal amplitude-multiplier range shared by every band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GainBounds {
    min: f32,
    max: f32,
}

impl GainBounds {
    /// Signed multiplier range [-9, 9]
    pub const SIGNED: GainBounds = GainBounds { min: -9.0, max: 9.0 };

    /// Attenuation-only range [0, 1]
    pub const UNIT: GainBounds = GainBounds { min: 0.0, max: 1.0 };

    /// Create custom bounds
    ///
    /// Fails unless both ends are finite, `min < max`, and the range contains
    /// unity (tables start at unity gain).
    pub fn new(min: f32, max: f32) -> Result<Self> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Whether `value` lies within the bounds (inclusive). NaN never does.
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Validate `value` for the named parameter
    pub fn check(&self, param: &str, value: f32) -> Result<()> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(EqError::InvalidValue {
                param: param.to_string(),
                value,
                min: self.min,
                max: self.max,
            })
        }
    }

    fn validate(&self) -> Result<()> {
        let ordered = self.min.is_finite() && self.max.is_finite() && self.min < self.max;
        if ordered && self.contains(UNITY_GAIN) {
            Ok(())
        } else {
            Err(EqError::InvalidBounds {
                min: self.min,
                max: self.max,
            })
        }
    }
}

impl Default for GainBounds {
    fn default() -> Self {
        Self::SIGNED
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Equalizer configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EqConfig {
    /// Band gain bounds
    pub bounds: GainBounds,
    /// Spline segments across the half-spectrum
    pub segments: usize,
}

impl Default for EqConfig {
    fn default() -> Self {
        Self {
            bounds: GainBounds::default(),
            segments: DEFAULT_SEGMENTS,
        }
    }
}

impl EqConfig {
    /// Configuration with the given bounds and the default segment count
    pub fn with_bounds(bounds: GainBounds) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    /// Validate the configuration (deserialized configs bypass `GainBounds::new`)
    pub fn validate(&self) -> Result<()> {
        self.bounds.validate()?;
        if self.segments == 0 {
            return Err(EqError::InvalidSegments {
                segments: self.segments,
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EqConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

// ============================================================================
// Parameter Surface
// ============================================================================

/// Parameter value type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    Float,
}

/// Description of one host-visible parameter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamInfo {
    pub index: usize,
    pub name: &'static str,
    pub kind: ParamKind,
    pub min: f32,
    pub max: f32,
}

/// Name of the parameter at `param_index`; anything that is not a band is "Wet"
pub fn param_name(param_index: usize) -> &'static str {
    Band::from_param_index(param_index)
        .map(Band::label)
        .unwrap_or(WET_LABEL)
}

/// Type tag of the parameter at `param_index` (all parameters are floats)
pub fn param_kind(_param_index: usize) -> ParamKind {
    ParamKind::Float
}

/// Describe the parameter at `param_index`, or `None` past the last parameter
pub fn param_info(param_index: usize, bounds: &GainBounds) -> Option<ParamInfo> {
    if param_index >= PARAM_COUNT {
        return None;
    }
    let (min, max) = if param_index == WET_PARAM {
        (WET_MIN, WET_MAX)
    } else {
        (bounds.min(), bounds.max())
    };
    Some(ParamInfo {
        index: param_index,
        name: param_name(param_index),
        kind: param_kind(param_index),
        min,
        max,
    })
}

/// Full ordered parameter list: wet slot first, then bands 1..=11
pub fn param_surface(bounds: &GainBounds) -> Vec<ParamInfo> {
    (0..PARAM_COUNT)
        .filter_map(|i| param_info(i, bounds))
        .collect()
}
