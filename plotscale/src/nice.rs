// Copyright 2025 the Plotscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! "Nice" tick interval rounding.
//!
//! Intervals derived from a target pixel spacing are arbitrary reals. Before
//! they are used for ticks they are snapped to the nearest entry of a fixed
//! table of round values, so labels read `0, 2.5, 5` rather than
//! `0, 2.4137, 4.8274`.

/// Round tick intervals, strictly increasing.
///
/// Entries are `{1, 1.5, 2, 2.5, 3, 4, 5, 6, 8} * 10^k` for `k` in `-3..=5`, with
/// `0` as the floor and `1e6` as the ceiling.
#[rustfmt::skip]
pub const NICE_INTERVALS: [f64; 83] = [
    0.0,
    0.001, 0.0015, 0.002, 0.0025, 0.003, 0.004, 0.005, 0.006, 0.008,
    0.01, 0.015, 0.02, 0.025, 0.03, 0.04, 0.05, 0.06, 0.08,
    0.1, 0.15, 0.2, 0.25, 0.3, 0.4, 0.5, 0.6, 0.8,
    1.0, 1.5, 2.0, 2.5, 3.0, 4.0, 5.0, 6.0, 8.0,
    10.0, 15.0, 20.0, 25.0, 30.0, 40.0, 50.0, 60.0, 80.0,
    100.0, 150.0, 200.0, 250.0, 300.0, 400.0, 500.0, 600.0, 800.0,
    1000.0, 1500.0, 2000.0, 2500.0, 3000.0, 4000.0, 5000.0, 6000.0, 8000.0,
    10_000.0, 15_000.0, 20_000.0, 25_000.0, 30_000.0, 40_000.0, 50_000.0, 60_000.0, 80_000.0,
    100_000.0, 150_000.0, 200_000.0, 250_000.0, 300_000.0, 400_000.0, 500_000.0, 600_000.0,
    800_000.0,
    1_000_000.0,
];

/// Rounds `raw` to the nearest entry of [`NICE_INTERVALS`].
///
/// Negative inputs are rounded on their magnitude and keep their sign. Values
/// past the end of the table clamp to its largest entry. When `raw` sits exactly
/// between two entries the larger one wins. Non-finite inputs return `0.0`, which
/// callers treat as "no usable interval".
pub fn round_nice(raw: f64) -> f64 {
    if !raw.is_finite() {
        return 0.0;
    }
    let magnitude = raw.abs();
    let upper = NICE_INTERVALS.partition_point(|&v| v <= magnitude);
    let nice = match upper {
        // `NICE_INTERVALS[0]` is zero, so at least one entry is `<= magnitude`.
        0 => NICE_INTERVALS[0],
        n if n == NICE_INTERVALS.len() => NICE_INTERVALS[n - 1],
        n => {
            let lo = NICE_INTERVALS[n - 1];
            let hi = NICE_INTERVALS[n];
            if hi - magnitude <= magnitude - lo {
                hi
            } else {
                lo
            }
        }
    };
    if raw < 0.0 { -nice } else { nice }
}

/// The next interval strictly coarser than `interval`.
///
/// Inside the table this is the following entry; past its end the interval is
/// multiplied by ten, which keeps it round.
pub fn next_nice(interval: f64) -> f64 {
    let magnitude = interval.abs();
    let upper = NICE_INTERVALS.partition_point(|&v| v <= magnitude);
    match NICE_INTERVALS.get(upper) {
        Some(&next) => next,
        None => magnitude * 10.0,
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn table_is_strictly_increasing() {
        for w in NICE_INTERVALS.windows(2) {
            assert!(w[0] < w[1], "table out of order at {} / {}", w[0], w[1]);
        }
    }

    #[test]
    fn rounding_nice_values_is_idempotent() {
        for v in NICE_INTERVALS {
            assert_eq!(round_nice(v), v, "{v} should round to itself");
            assert_eq!(round_nice(-v), -v, "-{v} should round to itself");
        }
        assert_eq!(round_nice(5.0), 5.0);
        assert_eq!(round_nice(100.0), 100.0);
        assert_eq!(round_nice(0.5), 0.5);
    }

    #[test]
    fn rounding_picks_the_nearest_entry() {
        assert_eq!(round_nice(7.1), 8.0);
        assert_eq!(round_nice(6.9), 6.0);
        assert_eq!(round_nice(1.2), 1.0);
        assert_eq!(round_nice(1.3), 1.5);
        assert_eq!(round_nice(33.0), 30.0);
        assert_eq!(round_nice(0.0118), 0.01);
    }

    #[test]
    fn rounding_keeps_the_sign_of_negative_inputs() {
        assert_eq!(round_nice(-7.1), -8.0);
        assert_eq!(round_nice(-0.23), -0.25);
    }

    #[test]
    fn rounding_ties_go_to_the_larger_entry() {
        assert_eq!(round_nice(7.0), 8.0);
        assert_eq!(round_nice(1.25), 1.5);
    }

    #[test]
    fn rounding_clamps_at_both_ends() {
        assert_eq!(round_nice(0.0004), 0.0);
        assert_eq!(round_nice(0.0006), 0.001);
        assert_eq!(round_nice(5.0e9), 1_000_000.0);
        assert_eq!(round_nice(f64::NAN), 0.0);
        assert_eq!(round_nice(f64::INFINITY), 0.0);
    }

    #[test]
    fn rounding_is_monotonic() {
        let mut prev = round_nice(0.0);
        let mut raw = 0.0;
        while raw < 2.0e6 {
            let nice = round_nice(raw);
            assert!(nice >= prev, "round_nice({raw}) = {nice} < {prev}");
            prev = nice;
            raw = raw * 1.07 + 0.0001;
        }
    }

    #[test]
    fn next_nice_steps_up_the_table_then_by_decades() {
        assert_eq!(next_nice(0.001), 0.0015);
        assert_eq!(next_nice(2.0), 2.5);
        assert_eq!(next_nice(7.0), 8.0);
        assert_eq!(next_nice(800_000.0), 1_000_000.0);
        assert_eq!(next_nice(1_000_000.0), 10_000_000.0);
        assert_eq!(next_nice(1.0e8), 1.0e9);
    }
}
