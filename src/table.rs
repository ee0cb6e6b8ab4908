//! Band gain table
//!
//! The shared authoring source for equalizer curves. Holds one validated gain
//! per band; shapers take a value snapshot of it when they are created.

use crate::band::{Band, BAND_COUNT, PARAM_COUNT};
use crate::error::{EqError, Result};
use crate::params::{self, EqConfig, GainBounds, ParamInfo, ParamKind, UNITY_GAIN};
use crate::trace::{default_sink, SharedSink, TraceEvent};

/// Band gains plus the bounds they are validated against
#[derive(Debug, Clone)]
pub struct BandGainTable {
    gains: [f32; BAND_COUNT],
    config: EqConfig,
    sink: SharedSink,
}

impl Default for BandGainTable {
    fn default() -> Self {
        Self::new()
    }
}

impl BandGainTable {
    /// Create a table with every band at unity and the default configuration
    pub fn new() -> Self {
        Self {
            gains: [UNITY_GAIN; BAND_COUNT],
            config: EqConfig::default(),
            sink: default_sink(),
        }
    }

    /// Create a table with a custom configuration
    pub fn with_config(config: EqConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// Replace the trace sink
    pub fn with_sink(mut self, sink: SharedSink) -> Self {
        self.sink = sink;
        self
    }

    /// Set the gain of the band exposed at host parameter `param_index`
    ///
    /// # Errors
    /// - `OutOfRange` if `param_index` is the wet slot or past the last band
    /// - `InvalidValue` if `value` lies outside the band bounds
    ///
    /// On error nothing is modified.
    pub fn set_band(&mut self, param_index: usize, value: f32) -> Result<()> {
        let result = validate_assignment(&self.config.bounds, param_index, value);
        match result {
            Ok(band) => {
                self.gains[band.index()] = value;
                self.sink.record(&TraceEvent::ParameterSet { param_index, value });
                Ok(())
            }
            Err(e) => {
                record_rejection(&self.sink, param_index, value, &e);
                Err(e)
            }
        }
    }

    /// Host-facing alias of [`set_band`](Self::set_band)
    pub fn set_param(&mut self, param_index: usize, value: f32) -> Result<()> {
        self.set_band(param_index, value)
    }

    /// Set a band by identifier
    pub fn set(&mut self, band: Band, value: f32) -> Result<()> {
        self.set_band(band.param_index(), value)
    }

    /// Current gain of a band
    pub fn gain(&self, band: Band) -> f32 {
        self.gains[band.index()]
    }

    /// All band gains, lowest band first
    pub fn gains(&self) -> &[f32; BAND_COUNT] {
        &self.gains
    }

    /// Copy of the band gains, taken in one step
    pub fn snapshot(&self) -> [f32; BAND_COUNT] {
        self.gains
    }

    /// Number of exposed parameters: the bands plus the wet slot
    pub fn band_count(&self) -> usize {
        PARAM_COUNT
    }

    /// Label for a parameter index ("Wet" for the reserved slot)
    pub fn band_name(&self, param_index: usize) -> &'static str {
        params::param_name(param_index)
    }

    pub fn param_kind(&self, param_index: usize) -> ParamKind {
        params::param_kind(param_index)
    }

    /// Lower gain bound; identical for every band
    pub fn min_gain(&self, _param_index: usize) -> f32 {
        self.config.bounds.min()
    }

    /// Upper gain bound; identical for every band
    pub fn max_gain(&self, _param_index: usize) -> f32 {
        self.config.bounds.max()
    }

    /// Ordered host parameter descriptions
    pub fn params(&self) -> Vec<ParamInfo> {
        params::param_surface(&self.config.bounds)
    }

    pub fn bounds(&self) -> &GainBounds {
        &self.config.bounds
    }

    pub fn config(&self) -> &EqConfig {
        &self.config
    }

    pub(crate) fn sink(&self) -> &SharedSink {
        &self.sink
    }
}

/// Check an assignment against the band contract and resolve its band
pub(crate) fn validate_assignment(
    bounds: &GainBounds,
    param_index: usize,
    value: f32,
) -> Result<Band> {
    let band = Band::from_param_index(param_index).ok_or(EqError::OutOfRange {
        index: param_index,
        count: BAND_COUNT,
    })?;
    bounds.check(band.label(), value)?;
    Ok(band)
}

pub(crate) fn record_rejection(sink: &SharedSink, param_index: usize, value: f32, err: &EqError) {
    let reason = match err {
        EqError::OutOfRange { .. } => "index is not a band",
        _ => "value outside band bounds",
    };
    sink.record(&TraceEvent::ParameterRejected {
        param_index,
        value,
        reason,
    });
}
