// Copyright 2025 the Plotscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick generation, label thinning and tick label formatting.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::{Axis, ScaleError};
use crate::nice::next_nice;

/// Upper bound on the number of ticks generated for one axis.
pub const MAX_TICKS_PER_AXIS: usize = 10_000;

/// Relative tolerance used to absorb floating-point roundoff at range edges.
const EDGE_EPSILON: f64 = 1.0e-9;

/// A single tick in data space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Data-space position (an integer multiple of the axis interval).
    pub value: f64,
    /// Whether the renderer should draw a label for this tick.
    pub labeled: bool,
}

/// Ticks along one axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisTicks {
    /// Spacing between consecutive ticks, or `0` when no ticks were generated.
    pub interval: f64,
    /// Ticks in increasing order.
    pub ticks: Vec<Tick>,
}

impl AxisTicks {
    /// Generates ticks covering `[lo, hi]` and marks which ones carry labels.
    ///
    /// `interval` is coarsened first if it would need more than
    /// [`MAX_TICKS_PER_AXIS`] ticks; the interval actually used is stored in
    /// the result. See [`tick_values`] and [`label_mask`].
    pub fn generate(
        axis: Axis,
        lo: f64,
        hi: f64,
        interval: f64,
        label_frequency: usize,
    ) -> Result<Self, ScaleError> {
        let interval = coarsen_interval(lo, hi, interval);
        let values = tick_values(lo, hi, interval);
        if values.is_empty() {
            return Ok(Self::default());
        }
        let mask = label_mask(axis, &values, interval, label_frequency)?;
        let ticks = values
            .into_iter()
            .zip(mask)
            .map(|(value, labeled)| Tick { value, labeled })
            .collect();
        Ok(Self { interval, ticks })
    }

    /// Tick positions only.
    pub fn values(&self) -> Vec<f64> {
        self.ticks.iter().map(|t| t.value).collect()
    }

    /// Ticks that carry a label.
    pub fn labeled(&self) -> impl Iterator<Item = &Tick> {
        self.ticks.iter().filter(|t| t.labeled)
    }

    /// Returns `true` if no ticks were generated.
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}

/// Abscissa and ordinate ticks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickSet {
    /// Ticks along x, left to right.
    pub abscissa: AxisTicks,
    /// Ticks along y, bottom to top.
    pub ordinate: AxisTicks,
}

impl TickSet {
    /// Returns `true` if neither axis has ticks.
    pub fn is_empty(&self) -> bool {
        self.abscissa.is_empty() && self.ordinate.is_empty()
    }
}

/// Returns every integer multiple of `interval` from the largest one at or below
/// `lo` up to the last one not past `hi`.
///
/// Values are computed as `n * interval`, so zero is produced exactly whenever
/// it lies in range. A non-positive interval or an empty range yields no
/// ticks.
///
/// Output is capped at [`MAX_TICKS_PER_AXIS`]. Past the cap the kept window is
/// centered on the tick nearest zero; use [`coarsen_interval`] first to cover
/// the whole range instead.
pub fn tick_values(lo: f64, hi: f64, interval: f64) -> Vec<f64> {
    let Some((first, last)) = tick_bounds(lo, hi, interval) else {
        return Vec::new();
    };
    // `hi >= lo`, so `last >= first`.
    let span = last - first;
    let (start, count) = if span + 1.0 > MAX_TICKS_PER_AXIS as f64 {
        log::warn!(
            "tick interval {interval} over [{lo}, {hi}] needs {} ticks; keeping {MAX_TICKS_PER_AXIS} around zero",
            span + 1.0
        );
        let half = (MAX_TICKS_PER_AXIS / 2) as f64;
        let zero = (-first).clamp(0.0, span);
        let start = (zero - half).clamp(0.0, span + 1.0 - MAX_TICKS_PER_AXIS as f64);
        (first + start, MAX_TICKS_PER_AXIS)
    } else {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "span is a non-negative whole number below MAX_TICKS_PER_AXIS"
        )]
        {
            (first, span as usize + 1)
        }
    };
    (0..count)
        .map(|i| (start + i as f64) * interval)
        .collect()
}

/// Steps `interval` up through the nice intervals until `[lo, hi]` needs at
/// most [`MAX_TICKS_PER_AXIS`] ticks.
///
/// Returns `interval` unchanged when it already fits or when there are no
/// ticks to place.
pub fn coarsen_interval(lo: f64, hi: f64, interval: f64) -> f64 {
    let mut coarse = interval;
    while let Some((first, last)) = tick_bounds(lo, hi, coarse) {
        if last - first + 1.0 <= MAX_TICKS_PER_AXIS as f64 {
            break;
        }
        coarse = next_nice(coarse);
    }
    if coarse != interval {
        log::warn!(
            "tick interval {interval} over [{lo}, {hi}] exceeds {MAX_TICKS_PER_AXIS} ticks; using {coarse}"
        );
    }
    coarse
}

/// Multiples `(first, last)` of `interval` bracketing `[lo, hi]`, or `None` if
/// there is nothing to tick.
fn tick_bounds(lo: f64, hi: f64, interval: f64) -> Option<(f64, f64)> {
    if !(interval > 0.0 && interval.is_finite() && lo.is_finite() && hi.is_finite()) || hi < lo {
        return None;
    }
    let first = (lo / interval + EDGE_EPSILON).floor();
    let last = (hi / interval + EDGE_EPSILON).floor();
    Some((first, last))
}

/// Marks every `frequency`-th tick, counted outward from the tick nearest zero,
/// as label-eligible.
///
/// The zero tick is always labeled. An empty tick list yields an empty mask.
/// If the tick nearest zero is more than half an interval away, the tick list
/// was built from an inconsistent extent/interval and
/// [`ScaleError::MissingZeroTick`] is returned.
pub fn label_mask(
    axis: Axis,
    values: &[f64],
    interval: f64,
    frequency: usize,
) -> Result<Vec<bool>, ScaleError> {
    let Some((reference, nearest)) = values
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.abs().total_cmp(&b.abs()))
    else {
        return Ok(Vec::new());
    };
    if nearest.abs() > 0.5 * interval.abs() {
        return Err(ScaleError::MissingZeroTick { axis });
    }
    let frequency = frequency.max(1);
    Ok((0..values.len())
        .map(|i| i.abs_diff(reference) % frequency == 0)
        .collect())
}

/// Formats a tick value with just enough decimals to distinguish multiples of `step`.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = decimals_for_step(step);
    // Avoid printing "-0".
    let value = if value == 0.0 { 0.0 } else { value };
    alloc::format!("{value:.decimals$}")
}

fn decimals_for_step(step: f64) -> usize {
    const MAX_DECIMALS: usize = 6;
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let mut scaled = step;
    let mut decimals = 0;
    while decimals < MAX_DECIMALS
        && (scaled - scaled.round()).abs() > EDGE_EPSILON * scaled.max(1.0)
    {
        scaled *= 10.0;
        decimals += 1;
    }
    decimals
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn ticks_cover_the_range_on_interval_multiples() {
        assert_eq!(tick_values(0.0, 10.0, 5.0), vec![0.0, 5.0, 10.0]);
        assert_eq!(tick_values(-3.0, 7.0, 2.5), vec![-5.0, -2.5, 0.0, 2.5, 5.0]);
    }

    #[test]
    fn ticks_absorb_roundoff_at_the_edges() {
        // 0.3 / 0.1 is slightly below 3 in binary floating point.
        let ticks = tick_values(0.0, 0.3, 0.1);
        assert_eq!(ticks.len(), 4, "{ticks:?}");
        let ticks = tick_values(-1.0e-15, 1.0, 0.5);
        assert_eq!(ticks.first().copied(), Some(0.0));
    }

    #[test]
    fn zero_is_exact() {
        let ticks = tick_values(-0.7, 0.7, 0.1);
        assert!(ticks.contains(&0.0), "{ticks:?}");
    }

    #[test]
    fn degenerate_inputs_produce_no_ticks() {
        assert!(tick_values(0.0, 10.0, 0.0).is_empty());
        assert!(tick_values(0.0, 10.0, -1.0).is_empty());
        assert!(tick_values(10.0, 0.0, 1.0).is_empty());
        assert!(tick_values(0.0, f64::INFINITY, 1.0).is_empty());
    }

    #[test]
    fn capped_ticks_keep_the_window_around_zero() {
        let ticks = tick_values(0.0, 1.0e9, 1.0);
        assert_eq!(ticks.len(), MAX_TICKS_PER_AXIS);
        assert_eq!(ticks.first().copied(), Some(0.0));

        let ticks = tick_values(-1.0e9, 1.0e9, 1.0);
        assert_eq!(ticks.len(), MAX_TICKS_PER_AXIS);
        assert!(ticks.contains(&0.0), "{:?}", (ticks.first(), ticks.last()));

        let ticks = tick_values(-1.0e9, -5.0, 1.0);
        assert_eq!(ticks.len(), MAX_TICKS_PER_AXIS);
        assert_eq!(ticks.last().copied(), Some(-5.0));
    }

    #[test]
    fn coarsening_fits_the_whole_range_under_the_cap() {
        assert_eq!(coarsen_interval(-10.0, 10.0, 0.001), 0.0025);
        assert_eq!(coarsen_interval(0.0, 1.0e12, 1.0e6), 1.0e9);
        assert_eq!(coarsen_interval(-1.0e11, 1.0e11, 1.0e6), 1.0e8);
        // Already fitting, or nothing to tick: unchanged.
        assert_eq!(coarsen_interval(0.0, 10.0, 5.0), 5.0);
        assert_eq!(coarsen_interval(0.0, 10.0, 0.0), 0.0);
    }

    #[test]
    fn generate_reports_the_coarsened_interval() {
        let t = AxisTicks::generate(Axis::Y, -10.0, 10.0, 0.001, 1).unwrap();
        assert_eq!(t.interval, 0.0025);
        assert_eq!(t.ticks.len(), 8001);
        assert!(t.ticks.iter().any(|t| t.value == 0.0 && t.labeled));
        let last = t.ticks.last().map_or(f64::NAN, |t| t.value);
        assert!((last - 10.0).abs() < 1e-9, "last tick {last}");
    }

    #[test]
    fn labels_count_outward_from_zero() {
        let values = [-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0, 4.0];
        let mask = label_mask(Axis::X, &values, 1.0, 2).unwrap();
        assert_eq!(
            mask,
            vec![false, true, false, true, false, true, false, true]
        );
        let every = label_mask(Axis::X, &values, 1.0, 1).unwrap();
        assert!(every.iter().all(|l| *l));
        let sentinel = label_mask(Axis::X, &values, 1.0, 0).unwrap();
        assert_eq!(sentinel, every);
    }

    #[test]
    fn labels_tolerate_roundoff_near_zero() {
        let values = [-0.2, -0.1, 1.0e-17, 0.1, 0.2];
        let mask = label_mask(Axis::Y, &values, 0.1, 2).unwrap();
        assert_eq!(mask, vec![true, false, true, false, true]);
    }

    #[test]
    fn labels_without_a_zero_tick_are_an_error() {
        let values = [5.0, 10.0, 15.0];
        assert_eq!(
            label_mask(Axis::Y, &values, 5.0, 1),
            Err(ScaleError::MissingZeroTick { axis: Axis::Y })
        );
        assert_eq!(label_mask(Axis::X, &[], 5.0, 3), Ok(Vec::new()));
    }

    #[test]
    fn generate_pairs_values_with_labels() {
        let t = AxisTicks::generate(Axis::X, -10.0, 10.0, 5.0, 2).unwrap();
        assert_eq!(t.values(), vec![-10.0, -5.0, 0.0, 5.0, 10.0]);
        let labeled: Vec<f64> = t.labeled().map(|t| t.value).collect();
        assert_eq!(labeled, vec![-10.0, 0.0, 10.0]);
        assert_eq!(t.interval, 5.0);
    }

    #[test]
    fn labels_use_the_step_precision() {
        assert_eq!(format_tick(10.0, 5.0), "10");
        assert_eq!(format_tick(2.5, 2.5), "2.5");
        assert_eq!(format_tick(0.5, 0.25), "0.50");
        assert_eq!(format_tick(-0.0, 1.0), "0");
        assert_eq!(format_tick(0.003, 0.0015), "0.0030");
        assert_eq!(format_tick(7.0, 0.0), "7");
    }
}
