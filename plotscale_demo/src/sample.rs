// Copyright 2025 the Plotscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data producers: sampled functions and whitespace-separated pair files.

use std::io::{self, BufRead, Write};

use plotscale::Series;

/// Samples `f` on `[start, end]` every `step`.
///
/// Points are computed as `start + i * step` so long runs don't accumulate
/// roundoff. A non-positive step or an empty range yields an empty series.
pub(crate) fn sample_fn(start: f64, end: f64, step: f64, f: impl Fn(f64) -> f64) -> Series {
    if !(step > 0.0 && step.is_finite()) || end < start {
        return Series::from_pairs([]);
    }
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "the range is non-negative and the count is a whole number"
    )]
    let count = ((end - start) / step + 1.0e-9).floor() as usize + 1;
    Series::from_pairs((0..count).map(|i| {
        let x = start + i as f64 * step;
        (x, f(x))
    }))
}

/// Reads `x y` pairs, any whitespace between values, from `reader`.
///
/// A trailing unpaired value or a token that is not a number is
/// [`io::ErrorKind::InvalidData`].
pub(crate) fn read_pairs(reader: impl BufRead) -> io::Result<Series> {
    let mut values = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        for token in line.split_whitespace() {
            let v: f64 = token.parse().map_err(|err| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("line {}: {token:?} is not a number ({err})", line_no + 1),
                )
            })?;
            values.push(v);
        }
    }
    if values.len() % 2 != 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{} values do not form (x, y) pairs", values.len()),
        ));
    }
    Ok(Series::from_pairs(values.chunks_exact(2).map(|c| (c[0], c[1]))))
}

/// Writes `series` as one `x y` pair per line.
pub(crate) fn write_pairs(mut writer: impl Write, series: &Series) -> io::Result<()> {
    for p in series.points() {
        writeln!(writer, "{} {}", p.x, p.y)?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampling_includes_both_ends() {
        let s = sample_fn(0.0, 1.0, 0.2, |x| 2.0 * x);
        assert_eq!(s.len(), 6);
        let last = s.points()[5];
        assert!((last.x - 1.0).abs() < 1e-9, "{last:?}");
        assert!((last.y - 2.0).abs() < 1e-9, "{last:?}");
    }

    #[test]
    fn sampling_rejects_bad_steps() {
        assert!(sample_fn(0.0, 1.0, 0.0, |x| x).is_empty());
        assert!(sample_fn(0.0, 1.0, -0.5, |x| x).is_empty());
        assert!(sample_fn(1.0, 0.0, 0.5, |x| x).is_empty());
    }

    #[test]
    fn pairs_round_trip_through_text() {
        let s = sample_fn(-1.0, 1.0, 0.5, |x| x * x);
        let mut buf = Vec::new();
        write_pairs(&mut buf, &s).unwrap();
        let back = read_pairs(buf.as_slice()).unwrap();
        assert_eq!(back.points(), s.points());
    }

    #[test]
    fn pairs_may_span_lines() {
        let s = read_pairs("1 2\t3\n4\n\n5 6\n".as_bytes()).unwrap();
        let flat: Vec<(f64, f64)> = s.points().iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(flat, [(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]);
    }

    #[test]
    fn malformed_pair_files_are_invalid_data() {
        let odd = read_pairs("1 2 3".as_bytes()).unwrap_err();
        assert_eq!(odd.kind(), io::ErrorKind::InvalidData);
        let junk = read_pairs("1 2\n3 four\n".as_bytes()).unwrap_err();
        assert_eq!(junk.kind(), io::ErrorKind::InvalidData);
        assert!(junk.to_string().contains("line 2"), "{junk}");
    }
}
