//! Interleaved spectral buffer helpers
//!
//! A channel's half-spectrum is a flat `[f32]` of `2 * bin_count` values,
//! either `re, im` pairs (straight out of the FFT) or `magnitude, phase`
//! pairs (what the shaper works on). Anything past `2 * bin_count` is scratch
//! space owned by the inverse transform.

use rustfft::num_complex::Complex32;

/// Convert interleaved `re, im` pairs into `magnitude, phase` pairs in place
pub fn complex_to_mag_phase(buffer: &mut [f32]) {
    for pair in buffer.chunks_exact_mut(2) {
        let (magnitude, phase) = Complex32::new(pair[0], pair[1]).to_polar();
        pair[0] = magnitude;
        pair[1] = phase;
    }
}

/// Convert interleaved `magnitude, phase` pairs back into `re, im` pairs in place
pub fn mag_phase_to_complex(buffer: &mut [f32]) {
    for pair in buffer.chunks_exact_mut(2) {
        let c = Complex32::from_polar(pair[0], pair[1]);
        pair[0] = c.re;
        pair[1] = c.im;
    }
}

/// Number of bins that actually fit in `buffer`
#[inline]
pub fn usable_bins(buffer: &[f32], bin_count: usize) -> usize {
    bin_count.min(buffer.len() / 2)
}

/// Zero everything after the first `bin_count` bins; returns how many values
/// were cleared
pub fn zero_tail(buffer: &mut [f32], bin_count: usize) -> usize {
    let start = (bin_count * 2).min(buffer.len());
    let tail = &mut buffer[start..];
    tail.fill(0.0);
    tail.len()
}
