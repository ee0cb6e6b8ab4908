//! Band-to-bin gain curve
//!
//! Maps a bin index onto the coarse band knots: a square-root frequency warp
//! spreads the low bands over more bins, then a Catmull-Rom spline through the
//! four nearest band gains gives the multiplier for that bin.

use crate::band::BAND_COUNT;

/// Catmull-Rom cubic through `p1` (at `t = 0`) and `p2` (at `t = 1`)
///
/// `p0` and `p3` only shape the tangents.
#[inline]
pub fn catmull_rom(t: f32, p0: f32, p1: f32, p2: f32, p3: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Square-root warp of bin `p` onto `[0, bin_count)`
#[inline]
pub fn warp_index(p: usize, bin_count: usize) -> usize {
    let n = bin_count as f32;
    let warped = ((p as f32 / n).sqrt() * n).floor() as usize;
    warped.min(bin_count.saturating_sub(1))
}

/// Width in bins of one spline segment (never zero)
#[inline]
pub fn segment_width(bin_count: usize, segments: usize) -> usize {
    (bin_count / segments.max(1)).max(1)
}

/// Knot indices and spline parameter for one bin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplinePoint {
    /// Knot indices `[p0, p1, p2, p3]` into the band gains
    pub knots: [usize; 4],
    /// Position between `p1` and `p2`, in `[0, 1)`
    pub t: f32,
}

impl SplinePoint {
    /// Locate bin `p` of a `bin_count`-bin half-spectrum split into `segments`
    ///
    /// Knot indices are clamped into the band range, so bins warped past the
    /// last band's segment hold the last band's gain.
    pub fn locate(p: usize, bin_count: usize, segments: usize) -> Self {
        let width = segment_width(bin_count, segments);
        let i = warp_index(p, bin_count);

        let p2 = i / width;
        let last = BAND_COUNT - 1;
        let knots = [
            p2.saturating_sub(2).min(last),
            p2.saturating_sub(1).min(last),
            p2.min(last),
            (p2 + 1).min(last),
        ];
        let t = (i % width) as f32 / width as f32;

        Self { knots, t }
    }

    /// Evaluate the spline over `gains`
    #[inline]
    pub fn eval(&self, gains: &[f32; BAND_COUNT]) -> f32 {
        let [p0, p1, p2, p3] = self.knots;
        catmull_rom(self.t, gains[p0], gains[p1], gains[p2], gains[p3])
    }
}

/// Gain multiplier for bin `p`
#[inline]
pub fn bin_gain(gains: &[f32; BAND_COUNT], p: usize, bin_count: usize, segments: usize) -> f32 {
    SplinePoint::locate(p, bin_count, segments).eval(gains)
}
