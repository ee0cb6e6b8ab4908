//! Spectral shaper
//!
//! One shaper serves one channel of one stream. It owns a private copy of the
//! band gains taken from a [`BandGainTable`] when it is created and, every
//! block, scales each bin's magnitude by the spline-interpolated band curve.
//! Nothing is cached between blocks and `apply` never allocates.

use crate::band::{Band, BAND_COUNT};
use crate::curve;
use crate::error::Result;
use crate::params::EqConfig;
use crate::spectrum;
use crate::table::{self, BandGainTable};
use crate::trace::{SharedSink, TraceEvent};

/// Per-channel spectral equalizer instance
///
/// # Example
/// ```
/// use bandshaper::{BandGainTable, SpectralShaper};
///
/// let mut table = BandGainTable::new();
/// table.set_band(7, 2.0).unwrap(); // boost 1 kHz
///
/// let shaper = SpectralShaper::from_table(&table);
///
/// // 512 bins of magnitude/phase pairs plus an equal-sized scratch tail
/// let mut block = vec![1.0f32; 2 * 512 * 2];
/// shaper.apply(&mut block, 512);
/// assert!(block[2 * 512..].iter().all(|&v| v == 0.0));
/// ```
#[derive(Debug)]
pub struct SpectralShaper {
    id: String,
    gains: [f32; BAND_COUNT],
    config: EqConfig,
    sink: SharedSink,
}

impl SpectralShaper {
    /// Create a shaper from a snapshot of `table`
    ///
    /// Later changes to `table` do not reach this instance.
    pub fn from_table(table: &BandGainTable) -> Self {
        let shaper = Self {
            id: uuid::Uuid::new_v4().to_string(),
            gains: table.snapshot(),
            config: *table.config(),
            sink: table.sink().clone(),
        };
        shaper.sink.record(&TraceEvent::InstanceCreated {
            instance_id: shaper.id.clone(),
        });
        shaper
    }

    /// Replace the trace sink
    pub fn with_sink(mut self, sink: SharedSink) -> Self {
        self.sink = sink;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: String) {
        self.id = id;
    }

    /// Set a band gain on this instance only
    ///
    /// Same contract as [`BandGainTable::set_band`]; the shared table is not
    /// touched.
    pub fn set_param(&mut self, param_index: usize, value: f32) -> Result<()> {
        match table::validate_assignment(&self.config.bounds, param_index, value) {
            Ok(band) => {
                self.gains[band.index()] = value;
                self.sink.record(&TraceEvent::ParameterSet { param_index, value });
                Ok(())
            }
            Err(e) => {
                table::record_rejection(&self.sink, param_index, value, &e);
                Err(e)
            }
        }
    }

    /// Current gain of a band in this instance
    pub fn gain(&self, band: Band) -> f32 {
        self.gains[band.index()]
    }

    /// This instance's band gains, lowest band first
    pub fn gains(&self) -> &[f32; BAND_COUNT] {
        &self.gains
    }

    pub fn config(&self) -> &EqConfig {
        &self.config
    }

    /// Multiplier applied to bin `p` of a `bin_count`-bin half-spectrum
    pub fn bin_gain(&self, p: usize, bin_count: usize) -> f32 {
        curve::bin_gain(&self.gains, p, bin_count, self.config.segments)
    }

    /// Fill `out` with the per-bin multipliers for an `out.len()`-bin spectrum
    pub fn gain_curve(&self, out: &mut [f32]) {
        let bin_count = out.len();
        for (p, gain) in out.iter_mut().enumerate() {
            *gain = self.bin_gain(p, bin_count);
        }
    }

    /// Shape one block of interleaved magnitude/phase pairs in place
    ///
    /// Scales the magnitude of each of the first `bin_count` bins, leaves the
    /// phases alone, and zeroes the rest of `buffer`. A `bin_count` larger
    /// than the buffer holds is reduced to what fits.
    pub fn apply(&self, buffer: &mut [f32], bin_count: usize) {
        let bin_count = spectrum::usable_bins(buffer, bin_count);

        for (p, bin) in buffer[..bin_count * 2].chunks_exact_mut(2).enumerate() {
            bin[0] *= self.bin_gain(p, bin_count);
        }

        let zeroed = spectrum::zero_tail(buffer, bin_count);
        self.sink
            .record(&TraceEvent::BlockProcessed { bin_count, zeroed });
    }

    /// Shape one block of interleaved `re, im` pairs in place
    ///
    /// Converts to magnitude/phase, applies the curve and converts back.
    pub fn filter_channel(&self, buffer: &mut [f32], bin_count: usize) {
        let bin_count = spectrum::usable_bins(buffer, bin_count);
        spectrum::complex_to_mag_phase(&mut buffer[..bin_count * 2]);
        self.apply(buffer, bin_count);
        spectrum::mag_phase_to_complex(&mut buffer[..bin_count * 2]);
    }
}
