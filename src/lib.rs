//! Bandshaper - Frequency-domain multi-band equalizer
//!
//! Reshapes a channel's magnitude spectrum from eleven coarse band gains.
//! The host performs the forward and inverse FFT; this crate only touches the
//! spectral block in between.
//!
//! # Architecture
//!
//! - [`BandGainTable`]: shared, validated band gains and the host parameter
//!   surface (wet slot + 11 bands)
//! - [`SpectralShaper`]: per stream/channel instance holding a snapshot of the
//!   table; each block it derives a per-bin gain curve (square-root frequency
//!   warp + Catmull-Rom spline over the band gains) and scales the magnitudes
//!   in place
//! - [`TraceSink`]: injected receiver for structured events

pub mod band;
pub mod curve;
pub mod error;
pub mod filter;
pub mod params;
pub mod shaper;
pub mod spectrum;
pub mod table;
pub mod trace;

// Re-export commonly used types
pub use band::{Band, BAND_COUNT, PARAM_COUNT, WET_PARAM};
pub use error::{EqError, Result};
pub use filter::SpectralFilter;
pub use params::{EqConfig, GainBounds, ParamInfo, ParamKind, DEFAULT_SEGMENTS, UNITY_GAIN};
pub use shaper::SpectralShaper;
pub use table::BandGainTable;
pub use trace::{NullSink, SharedSink, TraceEvent, TraceSink, TracingSink};
