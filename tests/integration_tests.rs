//! Integration Tests
//!
//! End-to-end checks of the band table -> shaper -> spectral block path.

use approx::assert_relative_eq;
use bandshaper::curve::{self, catmull_rom};
use bandshaper::{Band, BandGainTable, EqError, SpectralShaper, BAND_COUNT, PARAM_COUNT};
use test_case::test_case;

/// Magnitude/phase block with pseudo-random magnitudes and a scratch tail
fn spectral_block(bin_count: usize, scratch: usize) -> Vec<f32> {
    let mut block = vec![5.0; bin_count * 2 + scratch];
    let mut state = 0x2545_f491_u32;
    for bin in block[..bin_count * 2].chunks_exact_mut(2) {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        bin[0] = (state >> 8) as f32 / (1u32 << 24) as f32 + 0.01;
        bin[1] = ((state & 0xff) as f32 / 255.0 - 0.5) * std::f32::consts::PI;
    }
    block
}

/// Per-bin multipliers produced by `shaper` for a `bin_count`-bin block
fn measured_curve(shaper: &SpectralShaper, bin_count: usize) -> Vec<f32> {
    let mut block = vec![0.0; bin_count * 2];
    for bin in block.chunks_exact_mut(2) {
        bin[0] = 1.0;
    }
    shaper.apply(&mut block, bin_count);
    block.chunks_exact(2).map(|bin| bin[0]).collect()
}

fn segment_mean(curve: &[f32], segment: usize, segments: usize) -> f32 {
    let bin_count = curve.len();
    let width = bin_count / segments;
    let values: Vec<f32> = curve
        .iter()
        .enumerate()
        .filter(|(p, _)| curve::warp_index(*p, bin_count) / width == segment)
        .map(|(_, g)| *g)
        .collect();
    assert!(!values.is_empty(), "segment {} has no bins", segment);
    values.iter().sum::<f32>() / values.len() as f32
}

// === Parameter Validation ===

#[test]
fn test_invalid_index_rejected_without_mutation() {
    let mut table = BandGainTable::new();
    table.set_param(4, 2.0).unwrap();
    let before = table.snapshot();

    for index in std::iter::once(0).chain(PARAM_COUNT..PARAM_COUNT + 50) {
        let err = table.set_param(index, 1.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PARAMETER");
    }
    assert_eq!(table.snapshot(), before);
}

#[test]
fn test_invalid_value_rejected_for_band_one() {
    let mut table = BandGainTable::new();
    let (min, max) = (table.min_gain(1), table.max_gain(1));

    for value in [min - 1.0, min - 0.001, max + 0.001, max + 1.0, f32::MAX, f32::MIN] {
        let err = table.set_param(1, value).unwrap_err();
        assert!(matches!(err, EqError::InvalidValue { .. }));
        assert!(err.is_invalid_parameter());
    }
    assert_eq!(table.gain(Band::Band1), 1.0);
}

#[test]
fn test_all_bands_share_bounds() {
    let table = BandGainTable::new();
    for band in Band::ALL {
        assert_eq!(table.min_gain(band.param_index()), table.min_gain(1));
        assert_eq!(table.max_gain(band.param_index()), table.max_gain(1));
    }
}

// === Shaping ===

#[test_case(32)]
#[test_case(64)]
#[test_case(128)]
#[test_case(256)]
#[test_case(512)]
#[test_case(1024)]
#[test_case(2048)]
#[test_case(4096)]
fn test_neutral_gains_leave_magnitudes_unchanged(bin_count: usize) {
    let shaper = SpectralShaper::from_table(&BandGainTable::new());
    let original = spectral_block(bin_count, 0);
    let mut block = original.clone();

    shaper.apply(&mut block, bin_count);

    for (a, b) in block.iter().zip(&original) {
        assert_relative_eq!(*a, *b, epsilon = 1e-6);
    }
}

#[test]
fn test_spline_boundaries() {
    let knots = [(1.0, -4.0, 8.0, 2.0), (9.0, 9.0, -9.0, 0.0), (0.3, 0.7, 0.1, 0.9)];
    for (p0, p1, p2, p3) in knots {
        assert_eq!(catmull_rom(0.0, p0, p1, p2, p3), p1);
        assert_relative_eq!(catmull_rom(1.0, p0, p1, p2, p3), p2, epsilon = 1e-5);
    }
}

#[test]
fn test_monotonic_ramp_has_bounded_overshoot() {
    let step = 1.5;
    let mut table = BandGainTable::new();
    for band in Band::ALL {
        table.set(band, -9.0 + step * band.index() as f32).unwrap();
    }
    let lowest = table.gain(Band::Band1);
    let highest = table.gain(Band::Band11);
    let shaper = SpectralShaper::from_table(&table);

    let tolerance = 0.25;
    let curve = measured_curve(&shaper, 1024);

    let mut running_max = f32::NEG_INFINITY;
    for (p, &gain) in curve.iter().enumerate() {
        assert!(
            gain >= lowest - tolerance && gain <= highest + tolerance,
            "bin {} gain {} escapes [{}, {}]",
            p,
            gain,
            lowest,
            highest
        );
        assert!(
            gain >= running_max - tolerance,
            "bin {} dropped from {} to {}",
            p,
            running_max,
            gain
        );
        running_max = running_max.max(gain);
    }
    assert_relative_eq!(curve[curve.len() - 1], highest, epsilon = 1e-4);
}

#[test]
fn test_raised_band_dominates_its_segments() {
    let mut table = BandGainTable::new();
    let band = Band::Band6;
    table.set(band, table.max_gain(band.param_index())).unwrap();
    let shaper = SpectralShaper::from_table(&table);

    let segments = shaper.config().segments;
    assert_eq!(segments, 16);
    let curve = measured_curve(&shaper, 1024);

    // Segments k and k+1 are the spline spans ending and starting at knot k
    let k = band.index();
    let rising = segment_mean(&curve, k, segments);
    let falling = segment_mean(&curve, k + 1, segments);
    let below = segment_mean(&curve, k - 1, segments);
    let above = segment_mean(&curve, k + 2, segments);

    for raised in [rising, falling] {
        assert!(raised > 2.0 * below, "{} vs {}", raised, below);
        assert!(raised > 2.0 * above, "{} vs {}", raised, above);
    }
}

#[test]
fn test_snapshot_ignores_later_table_edits() {
    let mut table = BandGainTable::new();
    table.set(Band::Band2, 3.0).unwrap();
    table.set(Band::Band8, -2.0).unwrap();

    let shaper = SpectralShaper::from_table(&table);
    let mut before = spectral_block(512, 0);
    shaper.apply(&mut before, 512);

    for band in Band::ALL {
        table.set(band, 7.0).unwrap();
    }
    let mut after = spectral_block(512, 0);
    shaper.apply(&mut after, 512);

    assert_eq!(before, after);

    // A fresh instance does see the edits
    let fresh = SpectralShaper::from_table(&table);
    let mut edited = spectral_block(512, 0);
    fresh.apply(&mut edited, 512);
    assert_ne!(before, edited);
}

#[test]
fn test_tail_is_zeroed() {
    let mut table = BandGainTable::new();
    table.set(Band::Band3, 4.0).unwrap();
    let shaper = SpectralShaper::from_table(&table);

    for bin_count in [32, 256, 1024] {
        let mut block = spectral_block(bin_count, bin_count * 2);
        shaper.apply(&mut block, bin_count);
        assert!(block[bin_count * 2..].iter().all(|&v| v == 0.0));
        assert!(block[..bin_count * 2].iter().any(|&v| v != 0.0));
    }
}

#[test]
fn test_independent_instances_per_channel() {
    let table = BandGainTable::new();
    let mut left = SpectralShaper::from_table(&table);
    let right = SpectralShaper::from_table(&table);

    left.set_param(BAND_COUNT, 0.0).unwrap();
    assert_eq!(left.gain(Band::Band11), 0.0);
    assert_eq!(right.gain(Band::Band11), 1.0);
}
