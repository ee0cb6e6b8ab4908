//! Band identifiers
//!
//! The equalizer has a closed, ordered set of eleven bands, octave spaced
//! from 16 Hz to 16 kHz. Host parameter index 0 is the wet/mix slot, so band
//! `k` (1-based) lives at parameter index `k` and array position `k - 1`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of tunable bands
pub const BAND_COUNT: usize = 11;

/// Host parameter index reserved for the wet/mix control
pub const WET_PARAM: usize = 0;

/// Total number of host-visible parameters (bands + wet slot)
pub const PARAM_COUNT: usize = BAND_COUNT + 1;

/// One of the eleven equalizer bands, in ascending center frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Band {
    Band1,
    Band2,
    Band3,
    Band4,
    Band5,
    Band6,
    Band7,
    Band8,
    Band9,
    Band10,
    Band11,
}

impl Band {
    /// All bands in ascending frequency order
    pub const ALL: [Band; BAND_COUNT] = [
        Band::Band1,
        Band::Band2,
        Band::Band3,
        Band::Band4,
        Band::Band5,
        Band::Band6,
        Band::Band7,
        Band::Band8,
        Band::Band9,
        Band::Band10,
        Band::Band11,
    ];

    /// Position of this band in a gain array (0-based)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Host parameter index of this band (1-based)
    pub fn param_index(self) -> usize {
        self.index() + 1
    }

    /// Band at the given array position
    pub fn from_index(index: usize) -> Option<Band> {
        Self::ALL.get(index).copied()
    }

    /// Band exposed at the given host parameter index
    ///
    /// Returns `None` for the wet slot and for indices past the last band.
    pub fn from_param_index(param_index: usize) -> Option<Band> {
        param_index.checked_sub(1).and_then(Self::from_index)
    }

    /// Nominal center frequency in kHz
    pub fn center_khz(self) -> f32 {
        match self {
            Band::Band1 => 0.016,
            Band::Band2 => 0.0315,
            Band::Band3 => 0.063,
            Band::Band4 => 0.125,
            Band::Band5 => 0.25,
            Band::Band6 => 0.5,
            Band::Band7 => 1.0,
            Band::Band8 => 2.0,
            Band::Band9 => 4.0,
            Band::Band10 => 8.0,
            Band::Band11 => 16.0,
        }
    }

    /// Human-readable label, e.g. "Band 7 (1 KHz)"
    pub fn label(self) -> &'static str {
        match self {
            Band::Band1 => "Band 1 (0.016 KHz)",
            Band::Band2 => "Band 2 (0.0315 KHz)",
            Band::Band3 => "Band 3 (0.063 KHz)",
            Band::Band4 => "Band 4 (0.125 KHz)",
            Band::Band5 => "Band 5 (0.25 KHz)",
            Band::Band6 => "Band 6 (0.5 KHz)",
            Band::Band7 => "Band 7 (1 KHz)",
            Band::Band8 => "Band 8 (2 KHz)",
            Band::Band9 => "Band 9 (4 KHz)",
            Band::Band10 => "Band 10 (8 KHz)",
            Band::Band11 => "Band 11 (16 KHz)",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
